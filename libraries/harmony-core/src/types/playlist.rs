/// Playlist domain types
use crate::types::{PlaylistId, PlaylistOrigin, Track, TrackId};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Name given to playlists created without one
pub const DEFAULT_PLAYLIST_NAME: &str = "New Playlist";

/// Owner recorded on playlists the user creates inside Harmony
pub const LOCAL_OWNER: &str = "You";

/// Playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Cover art reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,

    /// Display name of the owner
    pub owner: String,

    /// Tracks in play order
    #[serde(default)]
    pub tracks: Vec<Track>,

    /// Originating service, or `harmonized` for local playlists
    #[serde(rename = "serviceName")]
    pub origin: PlaylistOrigin,

    /// Visible to other users
    pub is_public: bool,

    /// Editable by other users
    pub is_collaborative: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(
        id: impl Into<PlaylistId>,
        name: impl Into<String>,
        owner: impl Into<String>,
        origin: PlaylistOrigin,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            cover_art: None,
            owner: owner.into(),
            tracks: Vec::new(),
            origin,
            is_public: false,
            is_collaborative: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a private, user-owned playlist
    ///
    /// Blank names fall back to [`DEFAULT_PLAYLIST_NAME`]. The id is derived
    /// from the creation time in milliseconds (`custom-<millis>`).
    pub fn custom(name: &str, now: DateTime<Utc>) -> Self {
        let name = match name.trim() {
            "" => DEFAULT_PLAYLIST_NAME,
            trimmed => trimmed,
        };

        Self::new(
            format!("custom-{}", now.timestamp_millis()),
            name,
            LOCAL_OWNER,
            PlaylistOrigin::Harmonized,
            now,
        )
    }

    /// Append a track and advance `updated_at`
    pub fn push_track(&mut self, track: Track, now: DateTime<Utc>) {
        self.tracks.push(track);
        self.touch(now);
    }

    /// Remove every occurrence of a track and advance `updated_at`
    ///
    /// Returns the number of entries removed.
    pub fn remove_track(&mut self, track_id: &TrackId, now: DateTime<Utc>) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|t| &t.id != track_id);
        self.touch(now);
        before - self.tracks.len()
    }

    /// Advance `updated_at`
    ///
    /// The timestamp strictly increases even when the clock has not moved
    /// since the last mutation.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let floor = self.updated_at + Duration::milliseconds(1);
        self.updated_at = now.max(floor);
    }

    /// Total running time in seconds
    pub fn total_duration(&self) -> u64 {
        self.tracks.iter().map(|t| u64::from(t.duration)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Provider;

    fn track(id: &str) -> Track {
        Track::new(id, format!("Song {id}"), "Artist", Provider::Spotify, 180)
    }

    #[test]
    fn custom_playlist_defaults() {
        let now = Utc::now();
        let playlist = Playlist::custom("Road Trip", now);
        assert_eq!(playlist.name, "Road Trip");
        assert_eq!(playlist.owner, LOCAL_OWNER);
        assert_eq!(playlist.origin, PlaylistOrigin::Harmonized);
        assert!(!playlist.is_public);
        assert!(!playlist.is_collaborative);
        assert_eq!(
            playlist.id.as_str(),
            format!("custom-{}", now.timestamp_millis())
        );
    }

    #[test]
    fn blank_name_falls_back() {
        assert_eq!(Playlist::custom("", Utc::now()).name, DEFAULT_PLAYLIST_NAME);
        assert_eq!(Playlist::custom("   ", Utc::now()).name, DEFAULT_PLAYLIST_NAME);
    }

    #[test]
    fn updated_at_strictly_advances() {
        let now = Utc::now();
        let mut playlist = Playlist::custom("Mix", now);

        // Same wall-clock instant for every mutation
        playlist.push_track(track("a"), now);
        let first = playlist.updated_at;
        playlist.push_track(track("b"), now);
        assert!(playlist.updated_at > first);

        let second = playlist.updated_at;
        playlist.remove_track(&TrackId::new("a"), now);
        assert!(playlist.updated_at > second);
    }

    #[test]
    fn remove_track_drops_all_occurrences() {
        let now = Utc::now();
        let mut playlist = Playlist::custom("Mix", now);
        playlist.push_track(track("a"), now);
        playlist.push_track(track("b"), now);
        playlist.push_track(track("a"), now);

        assert_eq!(playlist.remove_track(&TrackId::new("a"), now), 2);
        assert_eq!(playlist.tracks.len(), 1);
        assert_eq!(playlist.total_duration(), 180);
    }
}
