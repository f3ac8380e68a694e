/// Track domain type
use crate::types::{Provider, TrackId};
use serde::{Deserialize, Serialize};

/// A playable track from one of the aggregated services
///
/// Tracks are immutable once created; views and the store only ever clone
/// them between queues and playlists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Track duration in whole seconds
    pub duration: u32,

    /// Cover art reference
    #[serde(default)]
    pub cover_art: String,

    /// Originating service
    #[serde(rename = "serviceName")]
    pub provider: Provider,

    /// Stream location, when the provider exposes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,
}

impl Track {
    /// Create a track with the required metadata
    pub fn new(
        id: impl Into<TrackId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        provider: Provider,
        duration: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            album: None,
            duration,
            cover_art: String::new(),
            provider,
            stream_url: None,
        }
    }

    /// Set the album name
    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Set the cover art reference
    #[must_use]
    pub fn with_cover_art(mut self, cover_art: impl Into<String>) -> Self {
        self.cover_art = cover_art.into();
        self
    }

    /// Case-insensitive match of `needle` against title or artist
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.artist.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = Track::new("t1", "Blinding Lights", "The Weeknd", Provider::Spotify, 200)
            .with_album("After Hours");
        assert_eq!(track.id, TrackId::new("t1"));
        assert_eq!(track.album.as_deref(), Some("After Hours"));
        assert!(track.stream_url.is_none());
    }

    #[test]
    fn matches_title_or_artist() {
        let track = Track::new("t1", "Blinding Lights", "The Weeknd", Provider::Spotify, 200);
        assert!(track.matches("lights"));
        assert!(track.matches("weeknd"));
        assert!(!track.matches("daft"));
    }

    #[test]
    fn serializes_with_service_name() {
        let track = Track::new("t1", "Song", "Artist", Provider::Deezer, 10);
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["serviceName"], "deezer");
        assert_eq!(json["coverArt"], "");
    }
}
