//! View flows
//!
//! Each view turns one user interaction into a sequence of store dispatches,
//! calling providers in between. The store lock is never held across a
//! provider call.

pub mod auth;
pub mod home;
pub mod library;
pub mod player;
pub mod playlist;
pub mod search;
pub mod settings;

/// Result of a simulated request that may be overtaken by a newer one
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The response was applied to the store
    Applied(T),

    /// The request failed; the message is what the user sees
    Failed(String),

    /// A newer request of the same kind started first; response dropped
    Superseded,
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }
}
