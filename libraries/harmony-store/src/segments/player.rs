//! Player segment
//!
//! A thin action layer over [`PlayerState`]; all transport logic lives in
//! `harmony-playback`.

use harmony_core::{Track, TrackId};
use harmony_playback::{PlayerState, RepeatMode};

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerAction {
    SetCurrentTrack(Option<Track>),
    SetQueue(Vec<Track>),
    AddToQueue(Track),
    RemoveFromQueue(TrackId),
    ClearQueue,
    SetIsPlaying(bool),
    SetVolume(f32),
    ToggleMute,
    SetPosition(u32),
    SetRepeat(RepeatMode),
    CycleRepeat,
    SetShuffle(bool),
    SetCrossfade(u8),
    PlayNext,
    PlayPrevious,
}

impl PlayerAction {
    pub fn name(&self) -> &'static str {
        match self {
            PlayerAction::SetCurrentTrack(_) => "player/setCurrentTrack",
            PlayerAction::SetQueue(_) => "player/setQueue",
            PlayerAction::AddToQueue(_) => "player/addToQueue",
            PlayerAction::RemoveFromQueue(_) => "player/removeFromQueue",
            PlayerAction::ClearQueue => "player/clearQueue",
            PlayerAction::SetIsPlaying(_) => "player/setIsPlaying",
            PlayerAction::SetVolume(_) => "player/setVolume",
            PlayerAction::ToggleMute => "player/toggleMute",
            PlayerAction::SetPosition(_) => "player/setPosition",
            PlayerAction::SetRepeat(_) => "player/setRepeat",
            PlayerAction::CycleRepeat => "player/cycleRepeat",
            PlayerAction::SetShuffle(_) => "player/setShuffle",
            PlayerAction::SetCrossfade(_) => "player/setCrossfade",
            PlayerAction::PlayNext => "player/playNext",
            PlayerAction::PlayPrevious => "player/playPrevious",
        }
    }
}

pub fn apply(state: &mut PlayerState, action: PlayerAction) {
    match action {
        PlayerAction::SetCurrentTrack(track) => state.set_current_track(track),
        PlayerAction::SetQueue(tracks) => state.set_queue(tracks),
        PlayerAction::AddToQueue(track) => state.add_to_queue(track),
        PlayerAction::RemoveFromQueue(id) => state.remove_from_queue(&id),
        PlayerAction::ClearQueue => state.clear_queue(),
        PlayerAction::SetIsPlaying(playing) => state.set_playing(playing),
        PlayerAction::SetVolume(level) => state.set_volume(level),
        PlayerAction::ToggleMute => state.toggle_mute(),
        PlayerAction::SetPosition(seconds) => state.set_position(seconds),
        PlayerAction::SetRepeat(mode) => state.set_repeat(mode),
        PlayerAction::CycleRepeat => state.cycle_repeat(),
        PlayerAction::SetShuffle(shuffle) => state.set_shuffle(shuffle),
        PlayerAction::SetCrossfade(seconds) => state.set_crossfade(seconds),
        PlayerAction::PlayNext => state.play_next(),
        PlayerAction::PlayPrevious => state.play_previous(),
    }
}
