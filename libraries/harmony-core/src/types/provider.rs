//! Provider tags for the streaming services Harmony aggregates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Streaming service a record originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Spotify,
    SoundCloud,
    Deezer,
}

impl Provider {
    /// Every provider, in display order
    pub const ALL: [Provider; 3] = [Provider::Spotify, Provider::SoundCloud, Provider::Deezer];

    /// Lowercase tag used on the wire and in persisted records
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Spotify => "spotify",
            Provider::SoundCloud => "soundcloud",
            Provider::Deezer => "deezer",
        }
    }

    /// Parse a provider from its tag (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "spotify" => Some(Provider::Spotify),
            "soundcloud" => Some(Provider::SoundCloud),
            "deezer" => Some(Provider::Deezer),
            _ => None,
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Spotify => "Spotify",
            Provider::SoundCloud => "SoundCloud",
            Provider::Deezer => "Deezer",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a playlist came from
///
/// Provider playlists mirror a streaming service; `Harmonized` playlists are
/// created inside Harmony and may mix tracks from every provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistOrigin {
    Spotify,
    SoundCloud,
    Deezer,
    Harmonized,
}

impl PlaylistOrigin {
    /// The provider behind this playlist, if it mirrors one
    pub fn provider(&self) -> Option<Provider> {
        match self {
            PlaylistOrigin::Spotify => Some(Provider::Spotify),
            PlaylistOrigin::SoundCloud => Some(Provider::SoundCloud),
            PlaylistOrigin::Deezer => Some(Provider::Deezer),
            PlaylistOrigin::Harmonized => None,
        }
    }
}

impl From<Provider> for PlaylistOrigin {
    fn from(provider: Provider) -> Self {
        match provider {
            Provider::Spotify => PlaylistOrigin::Spotify,
            Provider::SoundCloud => PlaylistOrigin::SoundCloud,
            Provider::Deezer => PlaylistOrigin::Deezer,
        }
    }
}
