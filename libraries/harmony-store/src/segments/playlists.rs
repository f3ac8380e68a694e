//! Playlist segment
//!
//! Each playlist is stored exactly once, keyed by id. The library is an
//! ordered list of ids and the currently viewed playlist is an id pointer, so
//! a track edit is visible through both without copying.
//!
//! A playlist opened with `SetCurrentPlaylist` that is not in the library is
//! kept as a detached entry: it can be viewed and edited, but it does not
//! appear in the library listing, and it is dropped once it stops being
//! current.

use chrono::{DateTime, Utc};
use harmony_core::{Playlist, PlaylistId, Track, TrackId};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistState {
    by_id: HashMap<PlaylistId, Playlist>,
    library: Vec<PlaylistId>,
    current: Option<PlaylistId>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl PlaylistState {
    /// Library playlists in display order
    pub fn playlists(&self) -> Vec<&Playlist> {
        self.library.iter().filter_map(|id| self.by_id.get(id)).collect()
    }

    /// The playlist being viewed
    pub fn current(&self) -> Option<&Playlist> {
        self.current.as_ref().and_then(|id| self.by_id.get(id))
    }

    pub fn current_id(&self) -> Option<&PlaylistId> {
        self.current.as_ref()
    }

    /// Any known playlist, library or detached
    pub fn get(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.by_id.get(id)
    }

    pub fn in_library(&self, id: &PlaylistId) -> bool {
        self.library.contains(id)
    }

    pub fn len(&self) -> usize {
        self.library.len()
    }

    pub fn is_empty(&self) -> bool {
        self.library.is_empty()
    }

    pub fn apply(&mut self, action: PlaylistAction, now: DateTime<Utc>) {
        match action {
            PlaylistAction::SetPlaylists(playlists) => {
                self.library.clear();
                let detached = self
                    .current
                    .as_ref()
                    .and_then(|id| self.by_id.remove_entry(id));
                self.by_id.clear();

                for playlist in playlists {
                    if !self.by_id.contains_key(&playlist.id) {
                        self.library.push(playlist.id.clone());
                    }
                    self.by_id.insert(playlist.id.clone(), playlist);
                }

                if let Some((id, playlist)) = detached {
                    self.by_id.entry(id).or_insert(playlist);
                }
            }
            PlaylistAction::AddPlaylist(playlist) => {
                if !self.library.contains(&playlist.id) {
                    self.library.push(playlist.id.clone());
                }
                self.by_id.insert(playlist.id.clone(), playlist);
            }
            PlaylistAction::UpdatePlaylist(playlist) => {
                match self.by_id.get_mut(&playlist.id) {
                    Some(existing) => *existing = playlist,
                    None => debug!(playlist_id = %playlist.id, "Update for unknown playlist ignored"),
                }
            }
            PlaylistAction::RemovePlaylist(id) => {
                self.library.retain(|p| p != &id);
                if self.current.as_ref() == Some(&id) {
                    self.current = None;
                }
                self.by_id.remove(&id);
            }
            PlaylistAction::SetCurrentPlaylist(playlist) => {
                let next = playlist.map(|playlist| {
                    let id = playlist.id.clone();
                    self.by_id.entry(id.clone()).or_insert(playlist);
                    id
                });
                let previous = std::mem::replace(&mut self.current, next);
                if let Some(previous) = previous {
                    self.prune_detached(&previous);
                }
            }
            PlaylistAction::AddTrackToPlaylist { playlist_id, track } => {
                if let Some(playlist) = self.by_id.get_mut(&playlist_id) {
                    playlist.push_track(track, now);
                }
            }
            PlaylistAction::RemoveTrackFromPlaylist {
                playlist_id,
                track_id,
            } => {
                if let Some(playlist) = self.by_id.get_mut(&playlist_id) {
                    playlist.remove_track(&track_id, now);
                }
            }
            PlaylistAction::SetLoading(loading) => self.is_loading = loading,
            PlaylistAction::SetError(error) => self.error = error,
        }
    }

    /// Drop `id` if it is neither in the library nor current
    fn prune_detached(&mut self, id: &PlaylistId) {
        if self.current.as_ref() != Some(id) && !self.library.contains(id) {
            self.by_id.remove(id);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaylistAction {
    SetPlaylists(Vec<Playlist>),
    AddPlaylist(Playlist),
    UpdatePlaylist(Playlist),
    RemovePlaylist(PlaylistId),
    SetCurrentPlaylist(Option<Playlist>),
    AddTrackToPlaylist { playlist_id: PlaylistId, track: Track },
    RemoveTrackFromPlaylist { playlist_id: PlaylistId, track_id: TrackId },
    SetLoading(bool),
    SetError(Option<String>),
}

impl PlaylistAction {
    pub fn name(&self) -> &'static str {
        match self {
            PlaylistAction::SetPlaylists(_) => "playlists/setPlaylists",
            PlaylistAction::AddPlaylist(_) => "playlists/addPlaylist",
            PlaylistAction::UpdatePlaylist(_) => "playlists/updatePlaylist",
            PlaylistAction::RemovePlaylist(_) => "playlists/removePlaylist",
            PlaylistAction::SetCurrentPlaylist(_) => "playlists/setCurrentPlaylist",
            PlaylistAction::AddTrackToPlaylist { .. } => "playlists/addTrackToPlaylist",
            PlaylistAction::RemoveTrackFromPlaylist { .. } => "playlists/removeTrackFromPlaylist",
            PlaylistAction::SetLoading(_) => "playlists/setLoading",
            PlaylistAction::SetError(_) => "playlists/setError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmony_core::{PlaylistOrigin, Provider};

    fn playlist(id: &str) -> Playlist {
        Playlist::new(id, format!("List {id}"), "Owner", PlaylistOrigin::Spotify, Utc::now())
    }

    fn ids(state: &PlaylistState) -> Vec<&str> {
        state.playlists().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn track_edit_visible_through_library_and_current() {
        let mut state = PlaylistState::default();
        state.apply(PlaylistAction::SetPlaylists(vec![playlist("a")]), Utc::now());
        state.apply(
            PlaylistAction::SetCurrentPlaylist(Some(playlist("a"))),
            Utc::now(),
        );

        let track = Track::new("t", "T", "A", Provider::Deezer, 100);
        state.apply(
            PlaylistAction::AddTrackToPlaylist {
                playlist_id: PlaylistId::new("a"),
                track,
            },
            Utc::now(),
        );

        assert_eq!(state.current().unwrap().tracks.len(), 1);
        assert_eq!(state.playlists()[0].tracks.len(), 1);
    }

    #[test]
    fn detached_playlist_is_dropped_when_no_longer_current() {
        let mut state = PlaylistState::default();
        state.apply(PlaylistAction::SetPlaylists(vec![playlist("a")]), Utc::now());
        state.apply(
            PlaylistAction::SetCurrentPlaylist(Some(playlist("outside"))),
            Utc::now(),
        );

        assert_eq!(ids(&state), vec!["a"]);
        assert!(state.current().is_some());

        state.apply(PlaylistAction::SetCurrentPlaylist(None), Utc::now());
        assert!(state.get(&PlaylistId::new("outside")).is_none());
        assert!(state.get(&PlaylistId::new("a")).is_some());
    }

    #[test]
    fn set_playlists_keeps_detached_current() {
        let mut state = PlaylistState::default();
        state.apply(
            PlaylistAction::SetCurrentPlaylist(Some(playlist("outside"))),
            Utc::now(),
        );
        state.apply(
            PlaylistAction::SetPlaylists(vec![playlist("a"), playlist("b")]),
            Utc::now(),
        );

        assert_eq!(ids(&state), vec!["a", "b"]);
        assert_eq!(state.current().unwrap().id.as_str(), "outside");
    }

    #[test]
    fn remove_current_clears_pointer() {
        let mut state = PlaylistState::default();
        state.apply(PlaylistAction::SetPlaylists(vec![playlist("a")]), Utc::now());
        state.apply(
            PlaylistAction::SetCurrentPlaylist(Some(playlist("a"))),
            Utc::now(),
        );

        state.apply(PlaylistAction::RemovePlaylist(PlaylistId::new("a")), Utc::now());

        assert!(state.current().is_none());
        assert!(state.is_empty());
    }

    #[test]
    fn add_playlist_with_known_id_does_not_duplicate() {
        let mut state = PlaylistState::default();
        state.apply(PlaylistAction::AddPlaylist(playlist("a")), Utc::now());
        let mut renamed = playlist("a");
        renamed.name = "Renamed".into();
        state.apply(PlaylistAction::AddPlaylist(renamed), Utc::now());

        assert_eq!(state.len(), 1);
        assert_eq!(state.playlists()[0].name, "Renamed");
    }

    #[test]
    fn update_unknown_playlist_is_ignored() {
        let mut state = PlaylistState::default();
        state.apply(PlaylistAction::UpdatePlaylist(playlist("ghost")), Utc::now());
        assert!(state.get(&PlaylistId::new("ghost")).is_none());
    }
}
