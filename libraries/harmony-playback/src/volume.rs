//! Volume control with mute memory
//!
//! Volume is a linear level in `0.0..=1.0`. A level of zero is "muted"; the
//! last audible level is remembered so that unmuting restores it exactly.

use serde::{Deserialize, Serialize};

/// Volume controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// Current level (0.0-1.0)
    level: f32,

    /// Last non-zero level, restored on unmute
    remembered: f32,
}

impl Volume {
    /// Create new volume controller
    ///
    /// Out-of-range levels are clamped; NaN is treated as silence.
    pub fn new(level: f32) -> Self {
        let level = Self::clamp(level);
        Self {
            level,
            remembered: if level > 0.0 { level } else { 1.0 },
        }
    }

    /// Set volume level (0.0-1.0)
    ///
    /// Any audible level also becomes the level restored after a mute.
    pub fn set_level(&mut self, level: f32) {
        self.level = Self::clamp(level);
        if self.level > 0.0 {
            self.remembered = self.level;
        }
    }

    /// Get current volume level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Level restored by the next unmute
    pub fn remembered(&self) -> f32 {
        self.remembered
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.level == 0.0
    }

    /// Toggle mute state
    ///
    /// Muting drops the level to zero; unmuting restores the remembered level.
    pub fn toggle_mute(&mut self) {
        if self.is_muted() {
            self.level = self.remembered;
        } else {
            self.remembered = self.level;
            self.level = 0.0;
        }
    }

    /// Level as a whole percentage, for display
    pub fn percent(&self) -> u8 {
        (self.level * 100.0).round() as u8
    }

    fn clamp(level: f32) -> f32 {
        if level.is_nan() {
            0.0
        } else {
            level.clamp(0.0, 1.0)
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(1.0)
    }
}
