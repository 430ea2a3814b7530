//! Link Extraction Module
//!
//! Pure parsing of inbound message text into canonical track identifiers.

use std::sync::LazyLock;

use regex::Regex;

use crate::playlist::TrackId;

/// Matches shared track links, capturing the base62 track id.
///
/// Query strings (`?si=...`) follow the id and are not part of the match.
static TRACK_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://open\.spotify\.com/track/([A-Za-z0-9]+)")
        .expect("track link pattern is valid")
});

// == Extract ==
/// Extracts every track link from `text` as canonical track ids.
///
/// Occurrences are returned in left-to-right order of appearance, duplicates
/// included; deduplication is the insert stage's job. Text without links
/// yields an empty vec, never an error.
pub fn extract_track_ids(text: &str) -> Vec<TrackId> {
    TRACK_LINK
        .captures_iter(text)
        .map(|caps| TrackId::from_base62(&caps[1]))
        .collect()
}
