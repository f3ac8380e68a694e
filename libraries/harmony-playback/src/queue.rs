//! Upcoming-track queue
//!
//! A flat ordered list of pending tracks. While shuffled, the queue also
//! tracks the pre-shuffle order of the same tracks so that switching shuffle
//! off puts whatever is still pending back in its original order.
//!
//! ```text
//! Currently Playing: Track A      (held by the player, never in the queue)
//! ─────────────────────────────
//! Queue:
//!   - Track B   <- next
//!   - Track C
//!   - Track D
//! ```

use crate::shuffle::shuffle_tracks;
use crate::types::ShuffleAlgorithm;
use harmony_core::{Track, TrackId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Queue {
    tracks: Vec<Track>,

    /// Pre-shuffle order; `Some` only while shuffled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unshuffled: Option<Vec<Track>>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole queue, dropping any shuffle state
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.unshuffled = None;
    }

    /// Append to the end
    pub fn push(&mut self, track: Track) {
        if let Some(original) = &mut self.unshuffled {
            original.push(track.clone());
        }
        self.tracks.push(track);
    }

    /// Insert in front of everything else
    pub fn push_front(&mut self, track: Track) {
        if let Some(original) = &mut self.unshuffled {
            original.insert(0, track.clone());
        }
        self.tracks.insert(0, track);
    }

    /// Remove every entry with `id`, returning how many were removed
    pub fn remove_id(&mut self, id: &TrackId) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|t| &t.id != id);
        if let Some(original) = &mut self.unshuffled {
            original.retain(|t| &t.id != id);
        }
        before - self.tracks.len()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
        self.unshuffled = None;
    }

    /// Take the next track
    pub fn pop_front(&mut self) -> Option<Track> {
        if self.tracks.is_empty() {
            return None;
        }
        let track = self.tracks.remove(0);
        if let Some(original) = &mut self.unshuffled {
            if let Some(pos) = original.iter().position(|t| t.id == track.id) {
                original.remove(pos);
            }
        }
        Some(track)
    }

    /// Shuffle pending tracks, remembering their current order
    ///
    /// Shuffling an already shuffled queue reshuffles but keeps the first
    /// remembered order.
    pub fn shuffle(&mut self, algorithm: ShuffleAlgorithm) {
        if self.unshuffled.is_none() {
            self.unshuffled = Some(self.tracks.clone());
        }
        shuffle_tracks(&mut self.tracks, algorithm);
    }

    /// Restore pre-shuffle order of the pending tracks
    pub fn unshuffle(&mut self) {
        if let Some(original) = self.unshuffled.take() {
            self.tracks = original;
        }
    }

    pub fn is_shuffled(&self) -> bool {
        self.unshuffled.is_some()
    }

    pub fn front(&self) -> Option<&Track> {
        self.tracks.first()
    }

    pub fn as_slice(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
