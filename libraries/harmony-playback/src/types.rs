//! Core types for playback management

use serde::{Deserialize, Serialize};

/// Largest crossfade the player accepts, in seconds
pub const MAX_CROSSFADE_SECS: u8 = 12;

/// Repeat mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop when queue ends
    #[default]
    Off,

    /// Loop everything played so far once the queue runs dry
    All,

    /// Loop current track only
    One,
}

impl RepeatMode {
    /// Next mode in the player-bar cycle: off → all → one → off
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

/// Algorithm used when shuffle is switched on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleAlgorithm {
    /// Pure random shuffle
    #[default]
    Random,

    /// Smart shuffle (spread the same artist apart)
    Smart,
}

/// Configuration for the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Maximum history size (default: 50)
    pub history_size: usize,

    /// Initial volume (0.0-1.0, default: 1.0)
    pub volume: f32,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Shuffle algorithm (default: Random)
    pub shuffle_algorithm: ShuffleAlgorithm,

    /// Initial crossfade in seconds (0-12, default: 0)
    pub crossfade_secs: u8,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            history_size: 50,
            volume: 1.0,
            repeat: RepeatMode::Off,
            shuffle_algorithm: ShuffleAlgorithm::Random,
            crossfade_secs: 0,
        }
    }
}
