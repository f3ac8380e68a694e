//! Playback clock tests
//!
//! Run on paused tokio time: sleeping in the test auto-advances the clock
//! through every tick in order without waiting in real time.

use harmony_core::{Provider, Track};
use harmony_playback::PlaybackConfig;
use harmony_storage::MemorySessionStorage;
use harmony_store::{PlaybackClock, PlayerAction, SharedStore, Store, TICK};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

// ===== Helpers =====

fn create_track(id: &str, duration: u32) -> Track {
    Track::new(id, format!("Song {id}"), "Artist", Provider::Deezer, duration)
}

fn shared_store() -> SharedStore {
    let storage = Arc::new(MemorySessionStorage::new());
    Arc::new(Mutex::new(Store::new(storage, &PlaybackConfig::default())))
}

/// Count dispatches of a given action name
async fn count_actions(store: &SharedStore, name: &'static str) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    store.lock().await.subscribe(move |action, _| {
        if action.name() == name {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });
    count
}

async fn load_and_play(store: &SharedStore, current: Track, queue: Vec<Track>) {
    let mut guard = store.lock().await;
    guard.dispatch(PlayerAction::SetCurrentTrack(Some(current)));
    guard.dispatch(PlayerAction::SetQueue(queue));
    guard.dispatch(PlayerAction::SetIsPlaying(true));
}

// ===== Tests =====

#[tokio::test(start_paused = true)]
async fn two_hundred_ticks_end_a_two_hundred_second_track_once() {
    let store = shared_store();
    let next_count = count_actions(&store, "player/playNext").await;
    load_and_play(&store, create_track("a", 200), vec![create_track("b", 300)]).await;

    let clock = PlaybackClock::start(Arc::clone(&store), TICK).await;
    tokio::time::sleep(Duration::from_millis(200_500)).await;

    {
        let guard = store.lock().await;
        let player = &guard.state().player;
        assert_eq!(next_count.load(Ordering::SeqCst), 1);
        assert_eq!(player.current_track().unwrap().id.as_str(), "b");
        assert_eq!(player.position(), 0);
        assert!(player.is_playing());
    }

    clock.stop().await;
}

#[tokio::test(start_paused = true)]
async fn position_advances_one_second_per_tick() {
    let store = shared_store();
    load_and_play(&store, create_track("a", 100), Vec::new()).await;

    let clock = PlaybackClock::start(Arc::clone(&store), TICK).await;
    tokio::time::sleep(Duration::from_millis(5_500)).await;

    assert_eq!(store.lock().await.state().player.position(), 5);
    clock.stop().await;
}

#[tokio::test(start_paused = true)]
async fn pausing_stops_ticks_and_resuming_restarts_them() {
    let store = shared_store();
    load_and_play(&store, create_track("a", 100), Vec::new()).await;
    let clock = PlaybackClock::start(Arc::clone(&store), TICK).await;

    tokio::time::sleep(Duration::from_millis(3_500)).await;
    store.lock().await.dispatch(PlayerAction::SetIsPlaying(false));
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(store.lock().await.state().player.position(), 3);

    store.lock().await.dispatch(PlayerAction::SetIsPlaying(true));
    tokio::time::sleep(Duration::from_millis(2_500)).await;
    assert_eq!(store.lock().await.state().player.position(), 5);

    clock.stop().await;
}

#[tokio::test(start_paused = true)]
async fn queue_exhaustion_stops_the_clock() {
    let store = shared_store();
    load_and_play(&store, create_track("a", 2), Vec::new()).await;
    let clock = PlaybackClock::start(Arc::clone(&store), TICK).await;

    tokio::time::sleep(Duration::from_secs(10)).await;

    let guard = store.lock().await;
    let player = &guard.state().player;
    assert!(!player.is_playing());
    assert_eq!(player.current_track().unwrap().id.as_str(), "a");
    assert_eq!(player.position(), 1);
    drop(guard);

    clock.stop().await;
}

#[tokio::test(start_paused = true)]
async fn dropped_clock_never_ticks_again() {
    let store = shared_store();
    load_and_play(&store, create_track("a", 100), Vec::new()).await;
    let clock = PlaybackClock::start(Arc::clone(&store), TICK).await;

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    drop(clock);
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(store.lock().await.state().player.position(), 2);
}

#[tokio::test(start_paused = true)]
async fn stopped_clock_unsubscribes() {
    let store = shared_store();
    let clock = PlaybackClock::start(Arc::clone(&store), TICK).await;
    assert!(clock.is_running());

    clock.stop().await;

    // Dispatch keeps working with the clock gone
    let count = count_actions(&store, "player/setVolume").await;
    store.lock().await.dispatch(PlayerAction::SetVolume(0.5));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
