//! Playlist screen
//!
//! Opening looks the playlist up in the store first and falls back to the
//! catalog. A playlist found in neither is reported as not found rather than
//! left loading.

use super::player::play_or_toggle;
use crate::context::AppContext;
use harmony_core::{
    CatalogProvider, HarmonyError, Playlist, PlaylistId, Result, Track, TrackId,
};
use harmony_store::{PlayerAction, PlaylistAction};
use tracing::debug;

/// Make `id` the current playlist
pub async fn open(ctx: &AppContext, id: &PlaylistId) -> Result<Playlist> {
    {
        let mut store = ctx.store.lock().await;
        if let Some(playlist) = store.state().playlists.get(id).cloned() {
            store.dispatch(PlaylistAction::SetCurrentPlaylist(Some(playlist.clone())));
            return Ok(playlist);
        }
    }

    debug!(playlist_id = %id, "Playlist not in store, asking catalog");
    match ctx.providers.catalog.playlist(id).await? {
        Some(playlist) => {
            ctx.dispatch(PlaylistAction::SetCurrentPlaylist(Some(playlist.clone())))
                .await;
            Ok(playlist)
        }
        None => {
            ctx.dispatch(PlaylistAction::SetCurrentPlaylist(None)).await;
            Err(HarmonyError::PlaylistNotFound(id.clone()))
        }
    }
}

/// Leave the playlist screen
pub async fn close(ctx: &AppContext) {
    ctx.dispatch(PlaylistAction::SetCurrentPlaylist(None)).await;
}

/// Play the current playlist from the top
///
/// Returns `false` if there is no current playlist or it is empty.
pub async fn play_all(ctx: &AppContext) -> bool {
    let mut store = ctx.store.lock().await;
    let Some(mut tracks) = store
        .state()
        .playlists
        .current()
        .map(|playlist| playlist.tracks.clone())
    else {
        return false;
    };
    if tracks.is_empty() {
        return false;
    }

    let first = tracks.remove(0);
    store.dispatch(PlayerAction::SetCurrentTrack(Some(first)));
    store.dispatch(PlayerAction::SetQueue(tracks));
    store.dispatch(PlayerAction::SetIsPlaying(true));
    true
}

/// Play (or toggle) the track at `index` of the current playlist
///
/// The queue wraps around: the tracks after `index`, then those before it.
pub async fn play_from(ctx: &AppContext, index: usize) -> Result<()> {
    let mut store = ctx.store.lock().await;
    let playlist = store
        .state()
        .playlists
        .current()
        .ok_or_else(|| HarmonyError::invalid_input("no playlist is open"))?;

    let Some(track) = playlist.tracks.get(index).cloned() else {
        return Err(HarmonyError::invalid_input(format!(
            "track index {index} out of range for {} tracks",
            playlist.tracks.len()
        )));
    };

    let queue: Vec<Track> = playlist.tracks[index + 1..]
        .iter()
        .chain(&playlist.tracks[..index])
        .cloned()
        .collect();

    play_or_toggle(&mut store, track, Some(queue));
    Ok(())
}

/// Remove a track from the current playlist
///
/// Returns `false` if no playlist is open.
pub async fn remove_track(ctx: &AppContext, track_id: TrackId) -> bool {
    let mut store = ctx.store.lock().await;
    let Some(playlist_id) = store.state().playlists.current_id().cloned() else {
        return false;
    };

    store.dispatch(PlaylistAction::RemoveTrackFromPlaylist {
        playlist_id,
        track_id,
    });
    true
}
