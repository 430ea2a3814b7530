//! Spotify Client Module
//!
//! reqwest-backed implementation of [`PlaylistService`] with transparent
//! credential refresh: expired bearer tokens are refreshed and the failed
//! call retried once before an auth failure surfaces.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{BridgeError, Result};
use crate::playlist::{PlaylistService, TrackId, TrackPage};
use crate::spotify::types::{TokenResponse, TracksPage};

const API_BASE: &str = "https://api.spotify.com/v1";
const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

// == Credentials ==
/// Application credentials for the refresh-token grant.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Application client id
    pub client_id: String,
    /// Application client secret
    pub client_secret: String,
    /// Long-lived refresh token
    pub refresh_token: String,
}

// == Spotify Client ==
/// Authenticated access to one playlist on the Spotify Web API.
pub struct SpotifyClient {
    http: Client,
    credentials: Credentials,
    playlist_id: String,
    api_base: String,
    token_url: String,
    /// Cached short-lived bearer token; refreshed lazily and on 401
    access_token: RwLock<Option<String>>,
}

impl SpotifyClient {
    // == Constructor ==
    /// Creates a client for the given playlist.
    pub fn new(credentials: Credentials, playlist_id: impl Into<String>) -> Self {
        let http = Client::builder()
            .pool_max_idle_per_host(4)
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            credentials,
            playlist_id: playlist_id.into(),
            api_base: API_BASE.to_string(),
            token_url: TOKEN_URL.to_string(),
            access_token: RwLock::new(None),
        }
    }

    /// Creates a client from startup settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Credentials {
                client_id: settings.client_id.clone(),
                client_secret: settings.client_secret.clone(),
                refresh_token: settings.refresh_token.clone(),
            },
            settings.playlist_id.clone(),
        )
    }

    fn tracks_url(&self) -> String {
        format!("{}/playlists/{}/tracks", self.api_base, self.playlist_id)
    }

    // == Token Handling ==
    /// Returns the cached bearer token, refreshing if none is held yet.
    async fn ensure_token(&self) -> Result<String> {
        {
            let guard = self.access_token.read().await;
            if let Some(token) = guard.as_ref() {
                return Ok(token.clone());
            }
        }
        self.refresh_access_token().await
    }

    /// Exchanges the refresh token for a fresh access token.
    async fn refresh_access_token(&self) -> Result<String> {
        info!("refreshing access token");

        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", self.credentials.refresh_token.as_str()),
        ];
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&params)
            .send()
            .await
            .map_err(|err| BridgeError::Auth(format!("token refresh failed: {}", err)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BridgeError::Auth(format!(
                "token refresh rejected ({}): {}",
                status, body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|err| BridgeError::Auth(format!("malformed token response: {}", err)))?;

        *self.access_token.write().await = Some(token.access_token.clone());
        debug!("access token refreshed");
        Ok(token.access_token)
    }

    // == Authed Requests ==
    /// Sends a request with the current token, refreshing and retrying once
    /// on 401 before surfacing the failure.
    async fn send_authed<F>(&self, build: F) -> Result<reqwest::Response>
    where
        F: Fn(&Client, &str) -> reqwest::RequestBuilder,
    {
        let token = self.ensure_token().await?;
        let response = build(&self.http, &token)
            .send()
            .await
            .map_err(transport_err)?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return check_status(response).await;
        }

        // Expired or revoked token: refresh once and retry the call
        let token = self.refresh_access_token().await?;
        let response = build(&self.http, &token)
            .send()
            .await
            .map_err(transport_err)?;
        check_status(response).await
    }
}

fn transport_err(err: reqwest::Error) -> BridgeError {
    BridgeError::Transport(err.to_string())
}

/// Maps non-success statuses onto the error taxonomy.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    if status == StatusCode::UNAUTHORIZED {
        Err(BridgeError::Auth(format!(
            "request unauthorized after token refresh: {}",
            body
        )))
    } else {
        Err(BridgeError::Transport(format!(
            "service rejected request ({}): {}",
            status, body
        )))
    }
}

// == Playlist Service Implementation ==
#[async_trait]
impl PlaylistService for SpotifyClient {
    async fn list_tracks(&self, limit: usize, offset: usize) -> Result<TrackPage> {
        let url = format!(
            "{}?fields=items(track(uri),added_at)&limit={}&offset={}",
            self.tracks_url(),
            limit,
            offset
        );

        let response = self
            .send_authed(|http, token| http.get(&url).bearer_auth(token))
            .await?;

        let page: TracksPage = response
            .json()
            .await
            .map_err(|err| BridgeError::Transport(format!("malformed track listing: {}", err)))?;

        // has_more must come from the raw item count: items with a null
        // track still occupy playlist positions but are dropped below
        let has_more = page.items.len() == limit;
        Ok(TrackPage {
            entries: page.into_entries(),
            has_more,
        })
    }

    async fn add_track(&self, id: &TrackId) -> Result<()> {
        let url = self.tracks_url();
        let body = json!({ "uris": [id.as_str()] });

        self.send_authed(|http, token| http.post(&url).bearer_auth(token).json(&body))
            .await?;
        Ok(())
    }

    async fn remove_track(&self, id: &TrackId) -> Result<()> {
        let url = self.tracks_url();
        let body = json!({ "tracks": [{ "uri": id.as_str() }] });

        self.send_authed(|http, token| http.delete(&url).bearer_auth(token).json(&body))
            .await?;
        Ok(())
    }
}
