//! Configuration Module
//!
//! Handles startup settings from environment variables and the durable,
//! runtime-mutable playlist capacity limit.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{BridgeError, Result};

/// Key under which the capacity limit is persisted in the config file.
pub const LIMIT_KEY: &str = "PLAYLIST_LIMIT";

// == Settings ==
/// Startup configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Spotify application client id
    pub client_id: String,
    /// Spotify application client secret
    pub client_secret: String,
    /// Long-lived refresh token obtained out of band
    pub refresh_token: String,
    /// Target playlist to mirror tracks into
    pub playlist_id: String,
    /// Chat group whose messages are ingested
    pub group_name: String,
    /// HTTP control server port
    pub server_port: u16,
    /// Path of the flat KEY=VALUE file holding the capacity limit
    pub limit_file: PathBuf,
    /// Capacity limit used when the file has no PLAYLIST_LIMIT entry yet
    pub default_limit: usize,
}

impl Settings {
    /// Creates a new Settings by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET` - API credentials
    /// - `SPOTIFY_REFRESH_TOKEN` - refresh token for the token grant
    /// - `SPOTIFY_PLAYLIST_ID` - playlist to mirror into
    /// - `CHAT_GROUP_NAME` - chat group to watch
    /// - `SERVER_PORT` - control server port (default: 8888)
    /// - `LIMIT_FILE` - capacity limit file path (default: bridge.conf)
    /// - `PLAYLIST_LIMIT` - fallback capacity limit (default: 100)
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("SPOTIFY_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("SPOTIFY_CLIENT_SECRET").unwrap_or_default(),
            refresh_token: env::var("SPOTIFY_REFRESH_TOKEN").unwrap_or_default(),
            playlist_id: env::var("SPOTIFY_PLAYLIST_ID").unwrap_or_default(),
            group_name: env::var("CHAT_GROUP_NAME").unwrap_or_default(),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8888),
            limit_file: env::var("LIMIT_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("bridge.conf")),
            default_limit: env::var("PLAYLIST_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            refresh_token: String::new(),
            playlist_id: String::new(),
            group_name: String::new(),
            server_port: 8888,
            limit_file: PathBuf::from("bridge.conf"),
            default_limit: 100,
        }
    }
}

// == Limit Store ==
/// Durable store for the playlist capacity limit.
///
/// Every `get` re-reads the file so limit changes are visible to the next
/// decision without caching. The file is a flat `KEY=VALUE` text file;
/// rewrites touch only the `PLAYLIST_LIMIT` line and keep every other
/// line as-is.
#[derive(Debug, Clone)]
pub struct LimitStore {
    /// Path of the backing config file
    path: PathBuf,
    /// Limit reported while the file has no PLAYLIST_LIMIT entry
    default_limit: usize,
}

impl LimitStore {
    // == Constructor ==
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>, default_limit: usize) -> Self {
        Self {
            path: path.into(),
            default_limit,
        }
    }

    /// Creates a store from startup settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.limit_file, settings.default_limit)
    }

    // == Get ==
    /// Returns the current capacity limit, read fresh from the file.
    ///
    /// A missing file or missing key falls back to the startup default;
    /// any other I/O failure propagates.
    pub fn get(&self) -> Result<usize> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(parse_limit(&content).unwrap_or(self.default_limit)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(self.default_limit),
            Err(err) => Err(err.into()),
        }
    }

    // == Set ==
    /// Validates and persists a new capacity limit.
    ///
    /// Rejects zero without touching the file. On success the limit is
    /// visible to every subsequent `get`, in this and future process
    /// lifetimes.
    pub fn set(&self, new_limit: usize) -> Result<usize> {
        if new_limit == 0 {
            return Err(BridgeError::Validation(
                "playlist limit must be a positive integer".to_string(),
            ));
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err.into()),
        };

        fs::write(&self.path, rewrite_limit(&content, new_limit))?;
        Ok(new_limit)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

// == File Format Helpers ==
/// Extracts the limit value from `KEY=VALUE` file content.
fn parse_limit(content: &str) -> Option<usize> {
    content
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim() == LIMIT_KEY)
        .and_then(|(_, value)| value.trim().parse().ok())
}

/// Replaces the PLAYLIST_LIMIT line, appending one if absent.
///
/// Unrelated lines pass through byte for byte, including any `\r` of a
/// CRLF line ending, so files written by other tools keep their shape.
fn rewrite_limit(content: &str, new_limit: usize) -> String {
    let mut out = String::with_capacity(content.len() + 16);
    let mut replaced = false;

    for (n, segment) in content.split('\n').enumerate() {
        if n > 0 {
            out.push('\n');
        }
        let line = segment.strip_suffix('\r').unwrap_or(segment);
        let is_limit_line = line
            .split_once('=')
            .is_some_and(|(key, _)| key.trim() == LIMIT_KEY);
        if is_limit_line {
            out.push_str(&format!("{}={}", LIMIT_KEY, new_limit));
            if line.len() < segment.len() {
                out.push('\r');
            }
            replaced = true;
        } else {
            out.push_str(segment);
        }
    }

    if !replaced {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&format!("{}={}", LIMIT_KEY, new_limit));
        out.push('\n');
    }

    out
}
