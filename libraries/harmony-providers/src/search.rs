//! Mock cross-service search
//!
//! Matches the query case-insensitively against the mock catalog. Tracks
//! match on title or artist, artists on name, albums on title or artist,
//! playlists on name. Provider and result-type filters are applied here, so
//! the store only ever sees already-filtered results.

use crate::data;
use crate::network::SimulatedNetwork;
use async_trait::async_trait;
use harmony_core::{
    PlaylistSummary, ResultKind, Result, SearchFilters, SearchProvider, SearchResults,
};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Default)]
pub struct MockSearch {
    network: SimulatedNetwork,
}

impl MockSearch {
    pub fn new(delay: Duration) -> Self {
        Self {
            network: SimulatedNetwork::new(delay),
        }
    }

    pub fn network(&self) -> &SimulatedNetwork {
        &self.network
    }
}

/// Run a query against the mock catalog without any delay
pub fn search_catalog(query: &str, filters: &SearchFilters) -> SearchResults {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchResults::default();
    }

    let mut results = SearchResults::default();

    if filters.allows_type(ResultKind::Tracks) {
        results.tracks = data::tracks()
            .into_iter()
            .filter(|t| filters.allows_service(t.provider) && t.matches(&needle))
            .collect();
    }

    if filters.allows_type(ResultKind::Artists) {
        results.artists = data::artists()
            .into_iter()
            .filter(|a| filters.allows_service(a.provider))
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .collect();
    }

    if filters.allows_type(ResultKind::Albums) {
        results.albums = data::albums()
            .into_iter()
            .filter(|a| filters.allows_service(a.provider))
            .filter(|a| {
                a.title.to_lowercase().contains(&needle) || a.artist.to_lowercase().contains(&needle)
            })
            .collect();
    }

    if filters.allows_type(ResultKind::Playlists) {
        results.playlists = data::playlists()
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .filter_map(|p| {
                let provider = p.origin.provider()?;
                filters.allows_service(provider).then(|| PlaylistSummary {
                    track_count: p.tracks.len(),
                    id: p.id,
                    name: p.name,
                    cover_art: p.cover_art,
                    owner: p.owner,
                    provider,
                })
            })
            .collect();
    }

    results
}

#[async_trait]
impl SearchProvider for MockSearch {
    async fn search(&self, query: &str, filters: &SearchFilters) -> Result<SearchResults> {
        self.network.round_trip("search").await?;
        let results = search_catalog(query, filters);
        debug!(query, hits = results.total(), "Search resolved");
        Ok(results)
    }
}
