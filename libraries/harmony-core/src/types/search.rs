//! Search result shapes and filter toggles

use crate::types::{PlaylistId, Provider, Track};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Artist search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "serviceName")]
    pub provider: Provider,
}

/// Album search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub cover_art: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(rename = "serviceName")]
    pub provider: Provider,
}

/// Playlist search hit (summary only, tracks are fetched on open)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSummary {
    pub id: PlaylistId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,
    pub owner: String,
    pub track_count: usize,
    #[serde(rename = "serviceName")]
    pub provider: Provider,
}

/// Bundle returned by a search provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub tracks: Vec<Track>,
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub playlists: Vec<PlaylistSummary>,
}

impl SearchResults {
    /// Whether every category is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
            && self.artists.is_empty()
            && self.albums.is_empty()
            && self.playlists.is_empty()
    }

    /// Number of hits across all categories
    pub fn total(&self) -> usize {
        self.tracks.len() + self.artists.len() + self.albums.len() + self.playlists.len()
    }
}

/// Result category, used by the type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Tracks,
    Artists,
    Albums,
    Playlists,
}

impl ResultKind {
    /// Every result category
    pub const ALL: [ResultKind; 4] = [
        ResultKind::Tracks,
        ResultKind::Artists,
        ResultKind::Albums,
        ResultKind::Playlists,
    ];

    /// Lowercase tag
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Tracks => "tracks",
            ResultKind::Artists => "artists",
            ResultKind::Albums => "albums",
            ResultKind::Playlists => "playlists",
        }
    }

    /// Parse from tag (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "tracks" => Some(ResultKind::Tracks),
            "artists" => Some(ResultKind::Artists),
            "albums" => Some(ResultKind::Albums),
            "playlists" => Some(ResultKind::Playlists),
            _ => None,
        }
    }
}

/// Independent on/off toggles per provider and per result category
///
/// Everything starts enabled. Toggles flip a single entry, so toggling the
/// same key twice always restores the previous filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub services: BTreeMap<Provider, bool>,
    pub types: BTreeMap<ResultKind, bool>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            services: Provider::ALL.into_iter().map(|p| (p, true)).collect(),
            types: ResultKind::ALL.into_iter().map(|k| (k, true)).collect(),
        }
    }
}

impl SearchFilters {
    /// Flip one provider toggle
    pub fn toggle_service(&mut self, provider: Provider) {
        let enabled = self.services.entry(provider).or_insert(true);
        *enabled = !*enabled;
    }

    /// Flip one result-category toggle
    pub fn toggle_type(&mut self, kind: ResultKind) {
        let enabled = self.types.entry(kind).or_insert(true);
        *enabled = !*enabled;
    }

    /// Whether results from `provider` should be shown
    pub fn allows_service(&self, provider: Provider) -> bool {
        self.services.get(&provider).copied().unwrap_or(true)
    }

    /// Whether results of `kind` should be shown
    pub fn allows_type(&self, kind: ResultKind) -> bool {
        self.types.get(&kind).copied().unwrap_or(true)
    }

    /// Restrict to exactly the given providers
    #[must_use]
    pub fn only_services(mut self, providers: &[Provider]) -> Self {
        for (provider, enabled) in &mut self.services {
            *enabled = providers.contains(provider);
        }
        self
    }

    /// Restrict to exactly the given result categories
    #[must_use]
    pub fn only_types(mut self, kinds: &[ResultKind]) -> Self {
        for (kind, enabled) in &mut self.types {
            *enabled = kinds.contains(kind);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_allow_everything() {
        let filters = SearchFilters::default();
        assert!(Provider::ALL.iter().all(|p| filters.allows_service(*p)));
        assert!(ResultKind::ALL.iter().all(|k| filters.allows_type(*k)));
    }

    #[test]
    fn double_toggle_is_identity() {
        let original = SearchFilters::default();
        let mut filters = original.clone();

        filters.toggle_service(Provider::Spotify);
        assert!(!filters.allows_service(Provider::Spotify));
        assert!(filters.allows_service(Provider::Deezer));

        filters.toggle_service(Provider::Spotify);
        assert_eq!(filters, original);

        filters.toggle_type(ResultKind::Albums);
        filters.toggle_type(ResultKind::Albums);
        assert_eq!(filters, original);
    }

    #[test]
    fn only_services_restricts() {
        let filters = SearchFilters::default().only_services(&[Provider::Deezer]);
        assert!(filters.allows_service(Provider::Deezer));
        assert!(!filters.allows_service(Provider::Spotify));
        assert!(!filters.allows_service(Provider::SoundCloud));
    }

    #[test]
    fn results_total() {
        let results = SearchResults::default();
        assert!(results.is_empty());
        assert_eq!(results.total(), 0);
    }
}
