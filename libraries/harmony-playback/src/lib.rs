//! Harmony - Playback State
//!
//! Platform-agnostic player state machine for Harmony.
//!
//! This crate provides:
//! - Transport state (idle, paused, playing)
//! - Upcoming-track queue with reversible shuffle
//! - Playback history (bounded, drives "previous" and repeat-all)
//! - Shuffle algorithms (Random + Smart)
//! - Repeat modes (Off, All, One)
//! - Volume with mute memory
//! - Clock tick evaluation
//!
//! Nothing here decodes audio or touches timers; the store owns a
//! `PlayerState` and drives it from actions and clock ticks.
//!
//! # Example
//!
//! ```rust
//! use harmony_core::{Provider, Track};
//! use harmony_playback::{PlayerState, RepeatMode, Tick};
//!
//! let mut player = PlayerState::default();
//! player.set_current_track(Some(Track::new("a", "Intro", "The xx", Provider::Deezer, 2)));
//! player.set_queue(vec![Track::new("b", "VCR", "The xx", Provider::Deezer, 180)]);
//! player.set_playing(true);
//!
//! assert_eq!(player.next_tick(), Tick::Advance(1));
//! player.set_position(1);
//! assert_eq!(player.next_tick(), Tick::TrackEnded);
//!
//! player.play_next();
//! assert_eq!(player.current_track().map(|t| t.id.as_str()), Some("b"));
//!
//! player.cycle_repeat();
//! assert_eq!(player.repeat(), RepeatMode::All);
//! ```

#![forbid(unsafe_code)]

pub mod history;
pub mod player;
pub mod queue;
pub mod shuffle;
pub mod types;
pub mod volume;

pub use history::History;
pub use player::{PlayerState, Tick, Transport};
pub use queue::Queue;
pub use types::{PlaybackConfig, RepeatMode, ShuffleAlgorithm, MAX_CROSSFADE_SECS};
pub use volume::Volume;
