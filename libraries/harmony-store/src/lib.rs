//! Harmony Store
//!
//! Central state for Harmony: four segments (auth, player, playlists,
//! search) composed into one tree, a synchronous dispatcher with
//! subscriptions, session persistence of the logged-in user, and the
//! one-second playback clock.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use harmony_core::{Provider, Track};
//! use harmony_playback::PlaybackConfig;
//! use harmony_store::{PlayerAction, Store};
//! # use harmony_core::SessionStorage;
//! # #[derive(Default)]
//! # struct Nowhere;
//! # impl SessionStorage for Nowhere {
//! #     fn read(&self, _: &str) -> harmony_core::Result<Option<String>> { Ok(None) }
//! #     fn write(&self, _: &str, _: &str) -> harmony_core::Result<()> { Ok(()) }
//! #     fn remove(&self, _: &str) -> harmony_core::Result<()> { Ok(()) }
//! # }
//!
//! let mut store = Store::new(Arc::new(Nowhere), &PlaybackConfig::default());
//! let track = Track::new("sp-1", "Midnight City", "M83", Provider::Spotify, 243);
//!
//! store.dispatch(PlayerAction::SetCurrentTrack(Some(track)));
//! store.dispatch(PlayerAction::SetIsPlaying(true));
//! store.advance_clock();
//!
//! assert_eq!(store.state().player.position(), 1);
//! ```

pub mod action;
pub mod clock;
pub mod segments;
pub mod store;

pub use action::Action;
pub use clock::{PlaybackClock, SharedStore, TICK};
pub use segments::{
    AuthAction, AuthState, PlayerAction, PlaylistAction, PlaylistState, SearchAction,
    SearchState,
};
pub use store::{StateTree, Store, SubscriptionId};
