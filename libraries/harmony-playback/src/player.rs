//! Player state machine
//!
//! `PlayerState` owns everything the playback bar shows: the transport
//! (idle, paused on a track, or playing a track), the upcoming queue, play
//! history, volume, position and the repeat/shuffle/crossfade settings.
//!
//! Every transition is total. Out-of-range inputs are clamped rather than
//! rejected, so the store can apply any action without a failure path.

use crate::history::History;
use crate::queue::Queue;
use crate::types::{PlaybackConfig, RepeatMode, ShuffleAlgorithm, MAX_CROSSFADE_SECS};
use crate::volume::Volume;
use harmony_core::{Track, TrackId};
use serde::{Deserialize, Serialize};

/// Transport state
///
/// "Playing without a track" cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "track", rename_all = "lowercase")]
pub enum Transport {
    /// Nothing loaded
    #[default]
    Idle,

    /// Track loaded, clock stopped
    Paused(Track),

    /// Track loaded, clock running
    Playing(Track),
}

impl Transport {
    pub fn track(&self) -> Option<&Track> {
        match self {
            Transport::Idle => None,
            Transport::Paused(track) | Transport::Playing(track) => Some(track),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Transport::Playing(_))
    }

    fn into_track(self) -> Option<Track> {
        match self {
            Transport::Idle => None,
            Transport::Paused(track) | Transport::Playing(track) => Some(track),
        }
    }

    fn with_track(track: Track, playing: bool) -> Self {
        if playing {
            Transport::Playing(track)
        } else {
            Transport::Paused(track)
        }
    }
}

/// What a one-second clock tick should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not playing; the tick is dropped
    Idle,

    /// Move the position forward to the given second
    Advance(u32),

    /// The current track just finished
    TrackEnded,
}

/// Player segment state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    transport: Transport,
    queue: Queue,
    history: History,
    volume: Volume,
    position: u32,
    duration: u32,
    repeat: RepeatMode,
    shuffle: bool,
    shuffle_algorithm: ShuffleAlgorithm,
    crossfade: u8,
}

impl PlayerState {
    pub fn new(config: &PlaybackConfig) -> Self {
        Self {
            transport: Transport::Idle,
            queue: Queue::new(),
            history: History::new(config.history_size),
            volume: Volume::new(config.volume),
            position: 0,
            duration: 0,
            repeat: config.repeat,
            shuffle: false,
            shuffle_algorithm: config.shuffle_algorithm,
            crossfade: config.crossfade_secs.min(MAX_CROSSFADE_SECS),
        }
    }

    // ===== Accessors =====

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.transport.track()
    }

    pub fn is_playing(&self) -> bool {
        self.transport.is_playing()
    }

    /// Upcoming tracks, next first
    pub fn queue(&self) -> &[Track] {
        self.queue.as_slice()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Volume level (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Position in whole seconds
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Duration of the current track in whole seconds
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn shuffle_algorithm(&self) -> ShuffleAlgorithm {
        self.shuffle_algorithm
    }

    /// Crossfade in seconds (0-12)
    pub fn crossfade(&self) -> u8 {
        self.crossfade
    }

    // ===== Transport =====

    /// Load a track, paused at position 0; `None` unloads
    ///
    /// A different previous track goes to history.
    pub fn set_current_track(&mut self, track: Option<Track>) {
        let previous = std::mem::take(&mut self.transport).into_track();

        match track {
            Some(track) => {
                if let Some(previous) = previous {
                    if previous.id != track.id {
                        self.history.push(previous);
                    }
                }
                self.duration = track.duration;
                self.transport = Transport::Paused(track);
            }
            None => {
                if let Some(previous) = previous {
                    self.history.push(previous);
                }
                self.duration = 0;
            }
        }
        self.position = 0;
    }

    /// Start or pause the clock; ignored while idle
    pub fn set_playing(&mut self, playing: bool) {
        if let Some(track) = std::mem::take(&mut self.transport).into_track() {
            self.transport = Transport::with_track(track, playing);
        }
    }

    /// Advance to the queue head
    ///
    /// The playing flag carries over. With an empty queue, repeat-all refills
    /// it from history (oldest first, then the current track); otherwise
    /// playback stops on the current track.
    pub fn play_next(&mut self) {
        if self.queue.is_empty() && self.repeat == RepeatMode::All {
            let mut cycle = self.history.drain();
            if let Some(current) = self.current_track() {
                // The current track closes the cycle exactly once
                cycle.retain(|track| track.id != current.id);
                cycle.push(current.clone());
            }
            self.queue.replace(cycle);
            if self.shuffle {
                self.queue.shuffle(self.shuffle_algorithm);
            }
        }

        let Some(next) = self.queue.pop_front() else {
            self.set_playing(false);
            return;
        };

        let playing = self.is_playing();
        if let Some(previous) = std::mem::take(&mut self.transport).into_track() {
            self.history.push(previous);
        }
        self.duration = next.duration;
        self.position = 0;
        self.transport = Transport::with_track(next, playing);
    }

    /// Step back to the most recent history entry
    ///
    /// The current track returns to the queue head. With no history, the
    /// current track restarts from 0.
    pub fn play_previous(&mut self) {
        let Some(previous) = self.history.pop() else {
            self.position = 0;
            return;
        };

        let playing = self.is_playing();
        if let Some(current) = std::mem::take(&mut self.transport).into_track() {
            self.queue.push_front(current);
        }
        self.duration = previous.duration;
        self.position = 0;
        self.transport = Transport::with_track(previous, playing);
    }

    /// Seek, clamped to the track duration
    pub fn set_position(&mut self, seconds: u32) {
        self.position = seconds.min(self.duration);
    }

    // ===== Queue =====

    /// Replace the queue; reshuffled when shuffle is on
    pub fn set_queue(&mut self, tracks: Vec<Track>) {
        self.queue.replace(tracks);
        if self.shuffle {
            self.queue.shuffle(self.shuffle_algorithm);
        }
    }

    pub fn add_to_queue(&mut self, track: Track) {
        self.queue.push(track);
    }

    pub fn remove_from_queue(&mut self, id: &TrackId) {
        self.queue.remove_id(id);
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    // ===== Settings =====

    pub fn set_volume(&mut self, level: f32) {
        self.volume.set_level(level);
    }

    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
    }

    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.repeat = repeat;
    }

    pub fn cycle_repeat(&mut self) {
        self.repeat = self.repeat.cycle();
    }

    /// Switching on shuffles the pending queue; switching off restores it
    pub fn set_shuffle(&mut self, shuffle: bool) {
        if shuffle == self.shuffle {
            return;
        }
        self.shuffle = shuffle;
        if shuffle {
            self.queue.shuffle(self.shuffle_algorithm);
        } else {
            self.queue.unshuffle();
        }
    }

    pub fn set_shuffle_algorithm(&mut self, algorithm: ShuffleAlgorithm) {
        self.shuffle_algorithm = algorithm;
    }

    pub fn set_crossfade(&mut self, seconds: u8) {
        self.crossfade = seconds.min(MAX_CROSSFADE_SECS);
    }

    // ===== Clock =====

    /// Outcome of one clock tick in the current state
    ///
    /// A track ends on the tick where `position + 1 >= duration`.
    pub fn next_tick(&self) -> Tick {
        if !self.is_playing() {
            return Tick::Idle;
        }
        let next = self.position.saturating_add(1);
        if next >= self.duration {
            Tick::TrackEnded
        } else {
            Tick::Advance(next)
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(&PlaybackConfig::default())
    }
}
