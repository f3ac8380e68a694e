//! Playback history tracking
//!
//! Maintains a bounded history of played tracks for "previous" and for
//! refilling the queue under repeat-all.

use harmony_core::Track;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Playback history with bounded size
///
/// Ring buffer, most recent track at the back. Once full, the oldest entry is
/// dropped on every push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    tracks: VecDeque<Track>,
    max_size: usize,
}

impl History {
    /// Create new history with specified maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            tracks: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Add track to history
    pub fn push(&mut self, track: Track) {
        if self.max_size == 0 {
            return;
        }
        if self.tracks.len() >= self.max_size {
            self.tracks.pop_front();
        }
        self.tracks.push_back(track);
    }

    /// Most recent track, without removing it
    pub fn peek(&self) -> Option<&Track> {
        self.tracks.back()
    }

    /// Pop most recent track
    pub fn pop(&mut self) -> Option<Track> {
        self.tracks.pop_back()
    }

    /// Take every entry, oldest first, leaving the history empty
    pub fn drain(&mut self) -> Vec<Track> {
        self.tracks.drain(..).collect()
    }

    /// All entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(50)
    }
}
