//! Library screen: the user's playlists and playlist creation

use crate::context::AppContext;
use chrono::{Duration, Utc};
use harmony_core::{CatalogProvider, Playlist, Result};
use harmony_store::PlaylistAction;
use tracing::{info, warn};

/// Fetch the library from the catalog into the playlist segment
///
/// Returns the number of playlists loaded.
pub async fn load(ctx: &AppContext) -> Result<usize> {
    ctx.dispatch(PlaylistAction::SetLoading(true)).await;

    let result = ctx.providers.catalog.playlists().await;

    let mut store = ctx.store.lock().await;
    store.dispatch(PlaylistAction::SetLoading(false));
    match result {
        Ok(playlists) => {
            let count = playlists.len();
            store.dispatch(PlaylistAction::SetError(None));
            store.dispatch(PlaylistAction::SetPlaylists(playlists));
            Ok(count)
        }
        Err(e) => {
            warn!(error = %e, "Failed to load library");
            store.dispatch(PlaylistAction::SetError(Some(e.to_string())));
            Err(e)
        }
    }
}

/// Create an empty playlist at the top of the library
///
/// Blank names become "New Playlist". Ids are time-derived, so a creation
/// landing on a taken millisecond moves to the next free one.
pub async fn create_playlist(ctx: &AppContext, name: &str) -> Playlist {
    let mut store = ctx.store.lock().await;

    let mut now = Utc::now();
    let mut playlist = Playlist::custom(name, now);
    while store.state().playlists.get(&playlist.id).is_some() {
        now += Duration::milliseconds(1);
        playlist = Playlist::custom(name, now);
    }

    let mut playlists = Vec::with_capacity(store.state().playlists.len() + 1);
    playlists.push(playlist.clone());
    playlists.extend(store.state().playlists.playlists().into_iter().cloned());
    store.dispatch(PlaylistAction::SetPlaylists(playlists));

    info!(playlist_id = %playlist.id, name = %playlist.name, "Playlist created");
    playlist
}

/// Playlists in library order
pub async fn playlists(ctx: &AppContext) -> Vec<Playlist> {
    let store = ctx.store.lock().await;
    store
        .state()
        .playlists
        .playlists()
        .into_iter()
        .cloned()
        .collect()
}
