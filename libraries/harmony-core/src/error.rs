/// Core error types for Harmony
use thiserror::Error;
use crate::types::{PlaylistId, ServiceId, TrackId};

/// Result type alias using `HarmonyError`
pub type Result<T> = std::result::Result<T, HarmonyError>;

/// Core error type for Harmony
#[derive(Error, Debug)]
pub enum HarmonyError {
    /// Simulated (or real) network failure talking to a provider
    #[error("Network error: {0}")]
    Network(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Track not found
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Connected service not found on the current user
    #[error("Service not found: {0}")]
    ServiceNotFound(ServiceId),

    /// Operation requires a logged-in user
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Session storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl HarmonyError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether the error came from the (simulated) network and is worth
    /// surfacing to the user as a transient failure
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
