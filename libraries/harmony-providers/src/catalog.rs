//! Mock catalog provider

use crate::data;
use crate::network::SimulatedNetwork;
use async_trait::async_trait;
use harmony_core::{CatalogProvider, Playlist, PlaylistId, Result, Track};
use std::time::Duration;
use tracing::debug;

/// Catalog backed by the fixed mock data set
#[derive(Debug, Default)]
pub struct MockCatalog {
    network: SimulatedNetwork,
}

impl MockCatalog {
    pub fn new(delay: Duration) -> Self {
        Self {
            network: SimulatedNetwork::new(delay),
        }
    }

    pub fn network(&self) -> &SimulatedNetwork {
        &self.network
    }
}

#[async_trait]
impl CatalogProvider for MockCatalog {
    async fn tracks(&self) -> Result<Vec<Track>> {
        self.network.round_trip("catalog.tracks").await?;
        Ok(data::tracks())
    }

    async fn playlists(&self) -> Result<Vec<Playlist>> {
        self.network.round_trip("catalog.playlists").await?;
        Ok(data::playlists())
    }

    async fn playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        self.network.round_trip("catalog.playlist").await?;
        let found = data::playlist_by_id(id);
        debug!(playlist_id = %id, found = found.is_some(), "Catalog playlist lookup");
        Ok(found)
    }
}
