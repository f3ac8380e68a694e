//! Property-based tests for the player state machine
//!
//! Uses proptest to check invariants that must survive any action sequence.

use harmony_core::{Provider, Track, TrackId};
use harmony_playback::{PlaybackConfig, PlayerState, RepeatMode, Tick, MAX_CROSSFADE_SECS};
use proptest::prelude::*;

// ===== Helpers =====

fn arbitrary_track() -> impl Strategy<Value = Track> {
    (
        "[a-z0-9]{1,6}",     // id
        "[A-Za-z ]{1,20}",   // title
        "[A-Za-z ]{1,12}",   // artist
        0u32..600,           // duration
    )
        .prop_map(|(id, title, artist, duration)| {
            Track::new(id, title, artist, Provider::Spotify, duration)
        })
}

#[derive(Debug, Clone)]
enum Op {
    Load(Track),
    Unload,
    Play(bool),
    Next,
    Previous,
    Seek(u32),
    Volume(f32),
    Mute,
    Shuffle(bool),
    Repeat,
    Crossfade(u8),
    Queue(Vec<Track>),
    Enqueue(Track),
    Remove(String),
    Clear,
    Tick,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_track().prop_map(Op::Load),
        Just(Op::Unload),
        any::<bool>().prop_map(Op::Play),
        Just(Op::Next),
        Just(Op::Previous),
        (0u32..1000).prop_map(Op::Seek),
        (-2.0f32..3.0).prop_map(Op::Volume),
        Just(Op::Mute),
        any::<bool>().prop_map(Op::Shuffle),
        Just(Op::Repeat),
        any::<u8>().prop_map(Op::Crossfade),
        prop::collection::vec(arbitrary_track(), 0..8).prop_map(Op::Queue),
        arbitrary_track().prop_map(Op::Enqueue),
        "[a-z0-9]{1,6}".prop_map(Op::Remove),
        Just(Op::Clear),
        Just(Op::Tick),
    ]
}

fn apply(player: &mut PlayerState, op: Op) {
    match op {
        Op::Load(track) => player.set_current_track(Some(track)),
        Op::Unload => player.set_current_track(None),
        Op::Play(flag) => player.set_playing(flag),
        Op::Next => player.play_next(),
        Op::Previous => player.play_previous(),
        Op::Seek(secs) => player.set_position(secs),
        Op::Volume(level) => player.set_volume(level),
        Op::Mute => player.toggle_mute(),
        Op::Shuffle(flag) => player.set_shuffle(flag),
        Op::Repeat => player.cycle_repeat(),
        Op::Crossfade(secs) => player.set_crossfade(secs),
        Op::Queue(tracks) => player.set_queue(tracks),
        Op::Enqueue(track) => player.add_to_queue(track),
        Op::Remove(id) => player.remove_from_queue(&TrackId::new(id)),
        Op::Clear => player.clear_queue(),
        Op::Tick => match player.next_tick() {
            Tick::Idle => {}
            Tick::Advance(position) => player.set_position(position),
            Tick::TrackEnded if player.repeat() == RepeatMode::One => player.set_position(0),
            Tick::TrackEnded => player.play_next(),
        },
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: ranges hold after any action sequence
    #[test]
    fn ranges_always_hold(ops in prop::collection::vec(arbitrary_op(), 1..60)) {
        let mut player = PlayerState::default();
        for op in ops {
            apply(&mut player, op);

            prop_assert!(player.position() <= player.duration());
            prop_assert!((0.0..=1.0).contains(&player.volume()));
            prop_assert!(player.crossfade() <= MAX_CROSSFADE_SECS);
            prop_assert!(player.history().len() <= player.history().max_size());
            if player.current_track().is_none() {
                prop_assert!(!player.is_playing());
                prop_assert_eq!(player.duration(), 0);
            }
        }
    }

    /// Property: with a non-empty queue, next takes the head and shortens the queue by one
    #[test]
    fn next_consumes_queue_head(
        current in arbitrary_track(),
        queue in prop::collection::vec(arbitrary_track(), 1..20),
        repeat_all in any::<bool>(),
    ) {
        let mut player = PlayerState::new(&PlaybackConfig::default());
        player.set_current_track(Some(current));
        player.set_queue(queue.clone());
        if repeat_all {
            player.set_repeat(RepeatMode::All);
        }

        player.play_next();

        prop_assert_eq!(player.current_track(), Some(&queue[0]));
        prop_assert_eq!(player.queue().len(), queue.len() - 1);
        prop_assert_eq!(player.position(), 0);
    }

    /// Property: shuffle on then off leaves the queue exactly as it was
    #[test]
    fn shuffle_round_trip_is_identity(queue in prop::collection::vec(arbitrary_track(), 0..30)) {
        let mut player = PlayerState::default();
        player.set_queue(queue.clone());

        player.set_shuffle(true);
        prop_assert_eq!(player.queue().len(), queue.len());
        player.set_shuffle(false);

        prop_assert_eq!(player.queue(), queue.as_slice());
    }

    /// Property: muting then unmuting restores any audible level exactly
    #[test]
    fn mute_round_trip(level in 0.01f32..=1.0) {
        let mut player = PlayerState::default();
        player.set_volume(level);
        player.toggle_mute();
        prop_assert!(player.is_muted());
        player.toggle_mute();
        prop_assert_eq!(player.volume(), level);
    }
}
