//! The store
//!
//! Owns the whole state tree. `dispatch` routes an action to its segment,
//! persists the user when the auth segment changed it, then notifies
//! subscribers, all before returning.
//!
//! Listeners get shared borrows of the action and the tree while the store
//! itself is mutably borrowed, so a listener cannot dispatch.

use crate::action::Action;
use crate::segments::{
    player, AuthAction, AuthState, PlayerAction, PlaylistState, SearchState,
};
use chrono::Utc;
use harmony_core::storage::{clear_user, load_user, save_user};
use harmony_core::{SessionStorage, User};
use harmony_playback::{PlaybackConfig, PlayerState, RepeatMode, Tick};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Snapshot of every segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateTree {
    pub auth: AuthState,
    pub player: PlayerState,
    pub playlists: PlaylistState,
    pub search: SearchState,
}

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Action, &StateTree) + Send>;

pub struct Store {
    state: StateTree,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    storage: Arc<dyn SessionStorage>,
}

impl Store {
    /// Build a store, rehydrating the user from `storage`
    ///
    /// An unreadable session slot is logged and treated as logged out.
    pub fn new(storage: Arc<dyn SessionStorage>, playback: &PlaybackConfig) -> Self {
        let user = match load_user(storage.as_ref()) {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "Could not restore session, starting logged out");
                None
            }
        };
        if let Some(user) = &user {
            info!(user_id = %user.id, "Restored session");
        }

        Self {
            state: StateTree {
                auth: AuthState::with_user(user),
                player: PlayerState::new(playback),
                playlists: PlaylistState::default(),
                search: SearchState::default(),
            },
            listeners: Vec::new(),
            next_subscription: 0,
            storage,
        }
    }

    pub fn state(&self) -> &StateTree {
        &self.state
    }

    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let action = action.into();
        debug!(action = action.name(), "Dispatch");
        let notice = (!self.listeners.is_empty()).then(|| action.clone());

        match action {
            Action::Auth(action) => {
                let before = self.state.auth.user.clone();
                let persist = action.touches_user();
                let logout = matches!(action, AuthAction::Logout);
                self.state.auth.apply(action);
                if persist && (logout || before != self.state.auth.user) {
                    self.persist_user();
                }
            }
            Action::Player(action) => player::apply(&mut self.state.player, action),
            Action::Playlists(action) => self.state.playlists.apply(action, Utc::now()),
            Action::Search(action) => self.state.search.apply(action),
        }

        if let Some(action) = notice {
            for (_, listener) in &mut self.listeners {
                listener(&action, &self.state);
            }
        }
    }

    /// Register a listener called after every dispatch
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Action, &StateTree) + Send + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Apply one second of playback
    ///
    /// Advances the position, or at the end of the track restarts it under
    /// repeat-one and moves to the next track otherwise.
    pub fn advance_clock(&mut self) -> Tick {
        let tick = self.state.player.next_tick();
        match tick {
            Tick::Idle => {}
            Tick::Advance(position) => self.dispatch(PlayerAction::SetPosition(position)),
            Tick::TrackEnded if self.state.player.repeat() == RepeatMode::One => {
                self.dispatch(PlayerAction::SetPosition(0));
            }
            Tick::TrackEnded => self.dispatch(PlayerAction::PlayNext),
        }
        tick
    }

    /// Write (or delete) the session slot to match the current user
    ///
    /// Failures are logged; the in-memory state stays authoritative.
    fn persist_user(&self) {
        let result = match &self.state.auth.user {
            Some(user) => save_user(self.storage.as_ref(), user),
            None => clear_user(self.storage.as_ref()),
        };
        match result {
            Ok(()) => debug!(logged_in = self.state.auth.user.is_some(), "Session persisted"),
            Err(e) => warn!(error = %e, "Failed to persist session"),
        }
    }

    /// Current user, if logged in
    pub fn user(&self) -> Option<&User> {
        self.state.auth.user.as_ref()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
