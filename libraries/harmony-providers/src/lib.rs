//! Harmony Providers
//!
//! Mock implementations of the collaborator traits from `harmony-core`.
//! Nothing here talks to a real service: every call waits a simulated delay
//! and answers from a fixed in-memory catalog.
//!
//! # Example
//!
//! ```rust,no_run
//! use harmony_core::{SearchFilters, SearchProvider};
//! use harmony_providers::{Latency, MockProviders};
//!
//! # async fn example() -> harmony_core::Result<()> {
//! let providers = MockProviders::new(Latency::default());
//! let results = providers.search.search("daft punk", &SearchFilters::default()).await?;
//! assert_eq!(results.tracks.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod catalog;
pub mod data;
pub mod network;
pub mod search;

pub use auth::{MockAuthenticator, MockServiceConnector};
pub use catalog::MockCatalog;
pub use network::{Latency, SimulatedNetwork};
pub use search::{search_catalog, MockSearch};

use std::sync::Arc;

/// One of each mock, sharing a latency profile
#[derive(Debug, Clone)]
pub struct MockProviders {
    pub catalog: Arc<MockCatalog>,
    pub search: Arc<MockSearch>,
    pub auth: Arc<MockAuthenticator>,
    pub connector: Arc<MockServiceConnector>,
}

impl MockProviders {
    pub fn new(latency: Latency) -> Self {
        Self {
            catalog: Arc::new(MockCatalog::new(latency.catalog)),
            search: Arc::new(MockSearch::new(latency.search)),
            auth: Arc::new(MockAuthenticator::new(latency.login)),
            connector: Arc::new(MockServiceConnector::new(latency.connect)),
        }
    }

    /// Same mocks with no delays
    pub fn instant() -> Self {
        Self::new(Latency::instant())
    }
}
