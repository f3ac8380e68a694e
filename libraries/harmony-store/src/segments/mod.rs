//! State segments
//!
//! Each segment owns one slice of the state tree and a closed set of
//! actions. Segments never see each other's state.

pub mod auth;
pub mod player;
pub mod playlists;
pub mod search;

pub use auth::{AuthAction, AuthState};
pub use player::PlayerAction;
pub use playlists::{PlaylistAction, PlaylistState};
pub use search::{SearchAction, SearchState};
