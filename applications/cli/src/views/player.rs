//! Player bar
//!
//! Transport controls plus the shared "play this track" behaviour used by
//! the home, search and playlist screens.

use crate::context::AppContext;
use harmony_core::Track;
use harmony_playback::{PlayerState, RepeatMode};
use harmony_store::{PlayerAction, Store};

/// Format whole seconds as `M:SS`
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Toggle playback if `track` is already current, otherwise start it
///
/// When starting, `queue` (if any) replaces the upcoming tracks.
pub fn play_or_toggle(store: &mut Store, track: Track, queue: Option<Vec<Track>>) {
    let player = &store.state().player;
    if player.current_track().is_some_and(|current| current.id == track.id) {
        let playing = player.is_playing();
        store.dispatch(PlayerAction::SetIsPlaying(!playing));
        return;
    }

    store.dispatch(PlayerAction::SetCurrentTrack(Some(track)));
    if let Some(queue) = queue {
        store.dispatch(PlayerAction::SetQueue(queue));
    }
    store.dispatch(PlayerAction::SetIsPlaying(true));
}

pub async fn toggle_play(ctx: &AppContext) {
    let mut store = ctx.store.lock().await;
    let playing = store.state().player.is_playing();
    store.dispatch(PlayerAction::SetIsPlaying(!playing));
}

pub async fn next(ctx: &AppContext) {
    ctx.dispatch(PlayerAction::PlayNext).await;
}

pub async fn previous(ctx: &AppContext) {
    ctx.dispatch(PlayerAction::PlayPrevious).await;
}

pub async fn seek(ctx: &AppContext, seconds: u32) {
    ctx.dispatch(PlayerAction::SetPosition(seconds)).await;
}

pub async fn set_volume(ctx: &AppContext, level: f32) {
    ctx.dispatch(PlayerAction::SetVolume(level)).await;
}

pub async fn toggle_mute(ctx: &AppContext) {
    ctx.dispatch(PlayerAction::ToggleMute).await;
}

pub async fn cycle_repeat(ctx: &AppContext) -> RepeatMode {
    let mut store = ctx.store.lock().await;
    store.dispatch(PlayerAction::CycleRepeat);
    store.state().player.repeat()
}

pub async fn toggle_shuffle(ctx: &AppContext) -> bool {
    let mut store = ctx.store.lock().await;
    let shuffle = !store.state().player.shuffle();
    store.dispatch(PlayerAction::SetShuffle(shuffle));
    shuffle
}

pub async fn add_to_queue(ctx: &AppContext, track: Track) {
    ctx.dispatch(PlayerAction::AddToQueue(track)).await;
}

/// One-line summary of the player bar
pub fn describe(player: &PlayerState) -> String {
    let Some(track) = player.current_track() else {
        return "Nothing playing".to_string();
    };

    let status = if player.is_playing() { "Playing" } else { "Paused" };
    let mut line = format!(
        "{status}: {} - {} [{}] {} / {}",
        track.title,
        track.artist,
        track.provider.display_name(),
        format_time(player.position()),
        format_time(player.duration()),
    );

    if player.is_muted() {
        line.push_str(" (muted)");
    }
    match player.repeat() {
        RepeatMode::Off => {}
        RepeatMode::All => line.push_str(" (repeat all)"),
        RepeatMode::One => line.push_str(" (repeat one)"),
    }
    if player.shuffle() {
        line.push_str(" (shuffle)");
    }
    line
}
