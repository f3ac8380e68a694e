/// Per-session application context
///
/// Everything a view needs, constructed once per session and passed in
/// explicitly.
use crate::config::AppConfig;
use harmony_core::{Provider, RequestId, RequestTracker, Result, SessionStorage};
use harmony_playback::PlaybackConfig;
use harmony_providers::MockProviders;
use harmony_storage::{FileSessionStorage, MemorySessionStorage};
use harmony_store::{Action, PlaybackClock, SharedStore, StateTree, Store};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppContext {
    pub store: SharedStore,
    pub providers: MockProviders,
    pub requests: Arc<RequestTracker>,

    /// Service connections in flight, by provider
    pub connecting: Arc<Mutex<HashMap<Provider, RequestId>>>,
    tick: Duration,
}

impl AppContext {
    /// Build a context backed by the session directory from `config`
    pub fn new(config: &AppConfig) -> Result<Self> {
        let storage = FileSessionStorage::open(&config.session.dir)?;
        info!(dir = %config.session.dir.display(), "Session storage opened");

        Ok(Self::with_storage(
            Arc::new(storage),
            MockProviders::new(config.latency()),
            &config.playback_config(),
            config.tick(),
        ))
    }

    pub fn with_storage(
        storage: Arc<dyn SessionStorage>,
        providers: MockProviders,
        playback: &PlaybackConfig,
        tick: Duration,
    ) -> Self {
        Self {
            store: Arc::new(Mutex::new(Store::new(storage, playback))),
            providers,
            requests: Arc::new(RequestTracker::new()),
            connecting: Arc::new(Mutex::new(HashMap::new())),
            tick,
        }
    }

    /// In-memory session with instant providers
    pub fn ephemeral() -> Self {
        Self::with_storage(
            Arc::new(MemorySessionStorage::new()),
            MockProviders::instant(),
            &PlaybackConfig::default(),
            harmony_store::TICK,
        )
    }

    pub async fn dispatch(&self, action: impl Into<Action>) {
        self.store.lock().await.dispatch(action);
    }

    /// Copy of the current state tree
    pub async fn snapshot(&self) -> StateTree {
        self.store.lock().await.state().clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.store.lock().await.state().auth.is_authenticated()
    }

    /// Start the playback clock at the configured period
    pub async fn start_clock(&self) -> PlaybackClock {
        PlaybackClock::start(Arc::clone(&self.store), self.tick).await
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("providers", &self.providers)
            .field("tick", &self.tick)
            .finish_non_exhaustive()
    }
}
