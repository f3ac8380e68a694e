//! Home screen: recently played tracks and the library preview

use super::player::play_or_toggle;
use crate::context::AppContext;
use harmony_core::{CatalogProvider, Result, Track};
use harmony_store::PlaylistAction;

/// Tracks queued behind one started from the home screen
pub const SIMILAR_TRACKS: usize = 5;

/// Tracks shown under "Recently Played"
pub const RECENT_TRACKS: usize = 5;

/// Load the library playlists shown under "Your Playlists"
pub async fn load(ctx: &AppContext) -> Result<()> {
    let playlists = ctx.providers.catalog.playlists().await?;
    ctx.dispatch(PlaylistAction::SetPlaylists(playlists)).await;
    Ok(())
}

pub async fn recently_played(ctx: &AppContext) -> Result<Vec<Track>> {
    let mut tracks = ctx.providers.catalog.tracks().await?;
    tracks.truncate(RECENT_TRACKS);
    Ok(tracks)
}

/// Play (or toggle) `track`, queueing up to five other catalog tracks
pub async fn play_track(ctx: &AppContext, track: Track) -> Result<()> {
    let similar: Vec<Track> = ctx
        .providers
        .catalog
        .tracks()
        .await?
        .into_iter()
        .filter(|t| t.id != track.id)
        .take(SIMILAR_TRACKS)
        .collect();

    let mut store = ctx.store.lock().await;
    play_or_toggle(&mut store, track, Some(similar));
    Ok(())
}
