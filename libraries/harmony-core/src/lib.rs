//! Harmony Core
//!
//! Platform-agnostic domain types, collaborator traits, and error handling for
//! Harmony, the multi-service music aggregator.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `User`, `Service`, `SearchResults`
//! - **Collaborator Traits**: `CatalogProvider`, `SearchProvider`,
//!   `Authenticator`, `ServiceConnector`
//! - **Session Slot**: `SessionStorage` and the typed user helpers
//! - **Error Handling**: Unified `HarmonyError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use harmony_core::types::{Playlist, Provider, Track, TrackId};
//!
//! let track = Track::new(TrackId::new("t1"), "Midnight City", "M83", Provider::Spotify, 243);
//!
//! let mut playlist = Playlist::custom("Late Night", chrono::Utc::now());
//! playlist.push_track(track, chrono::Utc::now());
//! assert_eq!(playlist.tracks.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod request;
pub mod storage;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{HarmonyError, Result};
pub use request::{RequestId, RequestTracker};
pub use storage::SessionStorage;
pub use traits::{Authenticator, CatalogProvider, SearchProvider, ServiceConnector};

pub use types::{
    Album, Artist, Playlist, PlaylistId, PlaylistOrigin, PlaylistSummary, Provider, ResultKind,
    SearchFilters, SearchResults, Service, ServiceId, Track, TrackId, User, UserId,
};
