/// Collaborator traits for Harmony
///
/// The store never talks to these directly; views call them and dispatch the
/// results. Implementations in this workspace are mocks with simulated
/// latency, but a real service integration would slot in behind the same
/// traits.
use crate::error::Result;
use crate::types::{
    Playlist, PlaylistId, Provider, SearchFilters, SearchResults, Service, Track, User,
};
use async_trait::async_trait;

/// Source of tracks and playlists for browsing
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Featured / recently played tracks
    async fn tracks(&self) -> Result<Vec<Track>>;

    /// Playlists in the user's library
    async fn playlists(&self) -> Result<Vec<Playlist>>;

    /// A single playlist with tracks
    async fn playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>>;
}

/// Cross-service search
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run `query` against every enabled provider and result category
    async fn search(&self, query: &str, filters: &SearchFilters) -> Result<SearchResults>;
}

/// Account login
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Log in with email and password
    async fn login(&self, email: &str, password: &str) -> Result<User>;

    /// Log in to the demo account with every service connected
    async fn demo_login(&self) -> Result<User>;
}

/// OAuth-style service connection flow
#[async_trait]
pub trait ServiceConnector: Send + Sync {
    /// Connect `provider` and return the live service record
    async fn connect(&self, provider: Provider) -> Result<Service>;
}
