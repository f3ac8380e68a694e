//! Search segment
//!
//! Holds the query, the last results and the filter toggles. Results arrive
//! already filtered; this segment never filters anything itself.

use harmony_core::{Provider, RequestId, ResultKind, SearchFilters, SearchResults};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    pub query: String,
    pub results: SearchResults,
    pub is_loading: bool,
    pub error: Option<String>,
    pub filters: SearchFilters,

    /// Search request whose response is still wanted
    pub pending: Option<RequestId>,
}

impl SearchState {
    pub fn apply(&mut self, action: SearchAction) {
        match action {
            SearchAction::SetQuery(query) => self.query = query,
            SearchAction::SetResults(results) => self.results = results,
            SearchAction::ClearResults => self.results = SearchResults::default(),
            SearchAction::SetLoading(loading) => self.is_loading = loading,
            SearchAction::SetError(error) => self.error = error,
            SearchAction::ToggleServiceFilter(provider) => self.filters.toggle_service(provider),
            SearchAction::ToggleTypeFilter(kind) => self.filters.toggle_type(kind),
            SearchAction::ResetFilters => self.filters = SearchFilters::default(),
            SearchAction::BeginSearch { request } => {
                self.pending = Some(request);
                self.is_loading = true;
                self.error = None;
            }
            SearchAction::ResolveSearch { request, results } => {
                if self.take_pending(request) {
                    self.results = results;
                }
            }
            SearchAction::FailSearch { request, message } => {
                if self.take_pending(request) {
                    self.error = Some(message);
                }
            }
        }
    }

    fn take_pending(&mut self, request: RequestId) -> bool {
        if self.pending == Some(request) {
            self.pending = None;
            self.is_loading = false;
            true
        } else {
            debug!(%request, pending = ?self.pending, "Stale search response dropped");
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    SetQuery(String),
    SetResults(SearchResults),
    ClearResults,
    SetLoading(bool),
    SetError(Option<String>),
    ToggleServiceFilter(Provider),
    ToggleTypeFilter(ResultKind),
    ResetFilters,
    BeginSearch { request: RequestId },
    ResolveSearch { request: RequestId, results: SearchResults },
    FailSearch { request: RequestId, message: String },
}

impl SearchAction {
    pub fn name(&self) -> &'static str {
        match self {
            SearchAction::SetQuery(_) => "search/setQuery",
            SearchAction::SetResults(_) => "search/setResults",
            SearchAction::ClearResults => "search/clearResults",
            SearchAction::SetLoading(_) => "search/setLoading",
            SearchAction::SetError(_) => "search/setError",
            SearchAction::ToggleServiceFilter(_) => "search/toggleServiceFilter",
            SearchAction::ToggleTypeFilter(_) => "search/toggleTypeFilter",
            SearchAction::ResetFilters => "search/resetFilters",
            SearchAction::BeginSearch { .. } => "search/beginSearch",
            SearchAction::ResolveSearch { .. } => "search/resolveSearch",
            SearchAction::FailSearch { .. } => "search/failSearch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmony_core::{RequestTracker, Track};

    fn results(id: &str) -> SearchResults {
        SearchResults {
            tracks: vec![Track::new(id, "T", "A", Provider::Spotify, 1)],
            ..SearchResults::default()
        }
    }

    #[test]
    fn toggling_a_filter_twice_is_identity() {
        let mut state = SearchState::default();
        let before = state.filters.clone();

        state.apply(SearchAction::ToggleServiceFilter(Provider::Spotify));
        assert!(!state.filters.allows_service(Provider::Spotify));
        state.apply(SearchAction::ToggleServiceFilter(Provider::Spotify));

        assert_eq!(state.filters, before);
    }

    #[test]
    fn reset_filters_enables_everything() {
        let mut state = SearchState::default();
        state.apply(SearchAction::ToggleTypeFilter(ResultKind::Albums));
        state.apply(SearchAction::ToggleServiceFilter(Provider::Deezer));
        state.apply(SearchAction::ResetFilters);
        assert_eq!(state.filters, SearchFilters::default());
    }

    #[test]
    fn only_newest_search_lands() {
        let tracker = RequestTracker::new();
        let old = tracker.issue();
        let new = tracker.issue();

        let mut state = SearchState::default();
        state.apply(SearchAction::BeginSearch { request: old });
        state.apply(SearchAction::BeginSearch { request: new });

        state.apply(SearchAction::ResolveSearch { request: new, results: results("new") });
        state.apply(SearchAction::ResolveSearch { request: old, results: results("old") });

        assert_eq!(state.results.tracks[0].id.as_str(), "new");
        assert!(!state.is_loading);
        assert!(state.pending.is_none());
    }

    #[test]
    fn failure_records_error_and_stops_loading() {
        let tracker = RequestTracker::new();
        let request = tracker.issue();

        let mut state = SearchState::default();
        state.apply(SearchAction::BeginSearch { request });
        state.apply(SearchAction::FailSearch { request, message: "offline".into() });

        assert_eq!(state.error.as_deref(), Some("offline"));
        assert!(!state.is_loading);
    }

    #[test]
    fn clear_results_empties_every_category() {
        let mut state = SearchState::default();
        state.apply(SearchAction::SetResults(results("x")));
        state.apply(SearchAction::ClearResults);
        assert!(state.results.is_empty());
    }
}
