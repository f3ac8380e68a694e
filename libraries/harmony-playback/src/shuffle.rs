//! Shuffle algorithms for queue randomization
//!
//! Pure random (Fisher-Yates) and an artist-aware smart shuffle.

use crate::types::ShuffleAlgorithm;
use harmony_core::Track;
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::collections::HashMap;

/// Shuffle tracks in place with the given algorithm
pub fn shuffle_tracks(tracks: &mut [Track], algorithm: ShuffleAlgorithm) {
    match algorithm {
        ShuffleAlgorithm::Random => shuffle_random(tracks),
        ShuffleAlgorithm::Smart => shuffle_smart(tracks),
    }
}

fn shuffle_random(tracks: &mut [Track]) {
    tracks.shuffle(&mut thread_rng());
}

/// Group by artist, shuffle each group and the group order, then deal one
/// track per artist per round so the same artist rarely plays twice in a row.
fn shuffle_smart(tracks: &mut [Track]) {
    if tracks.len() <= 2 {
        shuffle_random(tracks);
        return;
    }

    let mut rng = thread_rng();

    let mut by_artist: HashMap<&str, Vec<Track>> = HashMap::new();
    for track in tracks.iter() {
        by_artist
            .entry(track.artist.as_str())
            .or_default()
            .push(track.clone());
    }

    let mut groups: Vec<Vec<Track>> = by_artist.into_values().collect();
    for group in &mut groups {
        group.shuffle(&mut rng);
    }
    groups.shuffle(&mut rng);

    let mut dealt = Vec::with_capacity(tracks.len());
    let mut round = 0;
    while dealt.len() < tracks.len() {
        for group in &groups {
            if let Some(track) = group.get(round) {
                dealt.push(track.clone());
            }
        }
        round += 1;
    }

    for (slot, track) in tracks.iter_mut().zip(dealt) {
        *slot = track;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmony_core::Provider;
    use std::collections::HashSet;

    fn create_test_track(id: &str, artist: &str) -> Track {
        Track::new(id, format!("Song {id}"), artist, Provider::Deezer, 200)
    }

    fn ids(tracks: &[Track]) -> HashSet<String> {
        tracks.iter().map(|t| t.id.to_string()).collect()
    }

    fn consecutive_same_artist(tracks: &[Track]) -> usize {
        tracks
            .windows(2)
            .filter(|pair| pair[0].artist == pair[1].artist)
            .count()
    }

    #[test]
    fn random_shuffle_preserves_all_tracks() {
        let mut tracks = vec![
            create_test_track("1", "Artist A"),
            create_test_track("2", "Artist B"),
            create_test_track("3", "Artist C"),
        ];
        let before = ids(&tracks);

        shuffle_tracks(&mut tracks, ShuffleAlgorithm::Random);

        assert_eq!(ids(&tracks), before);
    }

    #[test]
    fn smart_shuffle_interleaves_two_artists() {
        let mut tracks = vec![
            create_test_track("1a", "Artist A"),
            create_test_track("1b", "Artist A"),
            create_test_track("1c", "Artist A"),
            create_test_track("2a", "Artist B"),
            create_test_track("2b", "Artist B"),
            create_test_track("2c", "Artist B"),
        ];

        shuffle_tracks(&mut tracks, ShuffleAlgorithm::Smart);

        assert_eq!(consecutive_same_artist(&tracks), 0);
        assert_eq!(tracks.len(), 6);
    }

    #[test]
    fn smart_shuffle_with_uneven_groups_keeps_everything() {
        let mut tracks = Vec::new();
        for i in 0..20 {
            tracks.push(create_test_track(&format!("t{i}"), &format!("Artist {}", i % 3)));
        }
        tracks.push(create_test_track("solo", "Artist Solo"));
        let before = ids(&tracks);

        shuffle_tracks(&mut tracks, ShuffleAlgorithm::Smart);

        assert_eq!(ids(&tracks), before);
    }

    #[test]
    fn smart_shuffle_single_artist_does_not_panic() {
        let mut tracks = vec![
            create_test_track("1", "Artist A"),
            create_test_track("2", "Artist A"),
            create_test_track("3", "Artist A"),
        ];
        shuffle_tracks(&mut tracks, ShuffleAlgorithm::Smart);
        assert_eq!(tracks.len(), 3);
    }

    #[test]
    fn shuffle_empty_and_single() {
        let mut empty: Vec<Track> = Vec::new();
        shuffle_tracks(&mut empty, ShuffleAlgorithm::Smart);
        assert!(empty.is_empty());

        let mut one = vec![create_test_track("1", "Artist A")];
        shuffle_tracks(&mut one, ShuffleAlgorithm::Random);
        assert_eq!(one[0].id.as_str(), "1");
    }
}
