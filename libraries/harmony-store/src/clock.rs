//! One-second playback clock
//!
//! A background task that calls [`Store::advance_clock`] once per period
//! while the player is playing. The task learns about play/pause through a
//! store subscription feeding a `watch` channel, so it sleeps on the channel
//! instead of polling while paused.
//!
//! Dropping the clock cancels it. The task re-checks cancellation after
//! taking the store lock, so a tick that loses the race never applies.

use crate::store::{Store, SubscriptionId};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Store shared between views and the clock
pub type SharedStore = Arc<Mutex<Store>>;

/// Default tick period
pub const TICK: Duration = Duration::from_secs(1);

pub struct PlaybackClock {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl PlaybackClock {
    /// Start ticking `store` every `period` whenever it is playing
    pub async fn start(store: SharedStore, period: Duration) -> Self {
        let (playing_rx, subscription) = {
            let mut guard = store.lock().await;
            let (tx, rx) = watch::channel(guard.state().player.is_playing());
            let subscription = guard.subscribe(move |_, state| {
                let playing = state.player.is_playing();
                tx.send_if_modified(|current| {
                    let changed = *current != playing;
                    *current = playing;
                    changed
                });
            });
            (rx, subscription)
        };

        let token = CancellationToken::new();
        let handle = tokio::spawn(run(
            Arc::clone(&store),
            playing_rx,
            token.clone(),
            period,
            subscription,
        ));
        debug!(period_ms = period.as_millis() as u64, "Playback clock started");

        Self {
            token,
            handle: Some(handle),
        }
    }

    /// Cancel and wait for the task to unsubscribe
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }
}

impl Drop for PlaybackClock {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn run(
    store: SharedStore,
    mut playing: watch::Receiver<bool>,
    token: CancellationToken,
    period: Duration,
    subscription: SubscriptionId,
) {
    'supervise: loop {
        // Idle until playback starts
        while !*playing.borrow_and_update() {
            tokio::select! {
                () = token.cancelled() => break 'supervise,
                changed = playing.changed() => {
                    if changed.is_err() {
                        break 'supervise;
                    }
                }
            }
        }

        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                () = token.cancelled() => break 'supervise,
                changed = playing.changed() => {
                    if changed.is_err() {
                        break 'supervise;
                    }
                    if !*playing.borrow_and_update() {
                        trace!("Playback paused, clock idle");
                        continue 'supervise;
                    }
                }
                _ = interval.tick() => {
                    let mut guard = store.lock().await;
                    if token.is_cancelled() {
                        break 'supervise;
                    }
                    let tick = guard.advance_clock();
                    trace!(?tick, "Clock tick");
                }
            }
        }
    }

    store.lock().await.unsubscribe(subscription);
    debug!("Playback clock stopped");
}
