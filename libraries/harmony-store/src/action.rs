//! Top-level action type
//!
//! An action is tagged with the one segment that handles it, so routing is a
//! plain `match`.

use crate::segments::{AuthAction, PlayerAction, PlaylistAction, SearchAction};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Player(PlayerAction),
    Playlists(PlaylistAction),
    Search(SearchAction),
}

impl Action {
    /// `segment/action` name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::Auth(action) => action.name(),
            Action::Player(action) => action.name(),
            Action::Playlists(action) => action.name(),
            Action::Search(action) => action.name(),
        }
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<PlayerAction> for Action {
    fn from(action: PlayerAction) -> Self {
        Action::Player(action)
    }
}

impl From<PlaylistAction> for Action {
    fn from(action: PlaylistAction) -> Self {
        Action::Playlists(action)
    }
}

impl From<SearchAction> for Action {
    fn from(action: SearchAction) -> Self {
        Action::Search(action)
    }
}
