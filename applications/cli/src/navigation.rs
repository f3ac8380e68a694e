//! Route resolution
//!
//! Maps a path to the screen that should handle it. Every screen except the
//! login page needs a user; unauthenticated requests for them land on
//! `/login`. Unknown paths inside the app resolve to [`Route::NotFound`].

use harmony_core::PlaylistId;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    Search,
    Library,
    Playlist(PlaylistId),
    Settings,
    NotFound(String),
}

impl Route {
    /// Parse a path without applying the auth guard
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["search"] => Route::Search,
            ["library"] => Route::Library,
            ["settings"] => Route::Settings,
            ["playlist", id] => Route::Playlist(PlaylistId::new(*id)),
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Home => "/".to_string(),
            Route::Search => "/search".to_string(),
            Route::Library => "/library".to_string(),
            Route::Playlist(id) => format!("/playlist/{id}"),
            Route::Settings => "/settings".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::NotFound(path) => write!(f, "not found ({path})"),
            other => f.write_str(&other.path()),
        }
    }
}

/// Resolve `path` for a user who is or is not logged in
pub fn resolve(path: &str, authenticated: bool) -> Route {
    let route = Route::parse(path);
    if route.requires_auth() && !authenticated {
        Route::Login
    } else {
        route
    }
}
