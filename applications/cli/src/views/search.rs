//! Search screen
//!
//! Filtering happens in the search provider, with the filters read from the
//! store when the search starts.

use super::player::play_or_toggle;
use super::Outcome;
use crate::context::AppContext;
use harmony_core::{Provider, ResultKind, SearchProvider, SearchResults, Track};
use harmony_store::SearchAction;
use tracing::{debug, warn};

/// Shown when a search request fails
pub const SEARCH_FAILED: &str = "Search failed. Please try again.";

pub async fn set_query(ctx: &AppContext, query: &str) {
    ctx.dispatch(SearchAction::SetQuery(query.to_string())).await;
}

/// Run the query currently in the store
///
/// A blank query does nothing and returns `None`.
pub async fn submit(ctx: &AppContext) -> Option<Outcome<SearchResults>> {
    let (request, query, filters) = {
        let mut store = ctx.store.lock().await;
        let query = store.state().search.query.trim().to_string();
        if query.is_empty() {
            return None;
        }
        let filters = store.state().search.filters.clone();
        let request = ctx.requests.issue();
        store.dispatch(SearchAction::BeginSearch { request });
        (request, query, filters)
    };

    let result = ctx.providers.search.search(&query, &filters).await;

    let mut store = ctx.store.lock().await;
    let current = store.state().search.pending == Some(request);
    let outcome = match result {
        Ok(results) => {
            debug!(%request, query = %query, total = results.total(), "Search complete");
            let outcome = if current {
                Outcome::Applied(results.clone())
            } else {
                Outcome::Superseded
            };
            store.dispatch(SearchAction::ResolveSearch { request, results });
            outcome
        }
        Err(e) => {
            warn!(error = %e, %request, "Search failed");
            store.dispatch(SearchAction::FailSearch {
                request,
                message: SEARCH_FAILED.to_string(),
            });
            if current {
                Outcome::Failed(SEARCH_FAILED.to_string())
            } else {
                Outcome::Superseded
            }
        }
    };
    Some(outcome)
}

/// Set the query and run it
pub async fn search(ctx: &AppContext, query: &str) -> Option<Outcome<SearchResults>> {
    set_query(ctx, query).await;
    submit(ctx).await
}

pub async fn toggle_service(ctx: &AppContext, provider: Provider) {
    ctx.dispatch(SearchAction::ToggleServiceFilter(provider)).await;
}

pub async fn toggle_type(ctx: &AppContext, kind: ResultKind) {
    ctx.dispatch(SearchAction::ToggleTypeFilter(kind)).await;
}

pub async fn reset_filters(ctx: &AppContext) {
    ctx.dispatch(SearchAction::ResetFilters).await;
}

/// Restrict filters to the given providers and kinds
///
/// An empty list leaves that dimension fully enabled.
pub async fn restrict(ctx: &AppContext, providers: &[Provider], kinds: &[ResultKind]) {
    let mut store = ctx.store.lock().await;
    store.dispatch(SearchAction::ResetFilters);

    if !providers.is_empty() {
        for provider in Provider::ALL {
            if !providers.contains(&provider) {
                store.dispatch(SearchAction::ToggleServiceFilter(provider));
            }
        }
    }
    if !kinds.is_empty() {
        for kind in ResultKind::ALL {
            if !kinds.contains(&kind) {
                store.dispatch(SearchAction::ToggleTypeFilter(kind));
            }
        }
    }
}

/// Play (or toggle) a track from the results without touching the queue
pub async fn play_track(ctx: &AppContext, track: Track) {
    let mut store = ctx.store.lock().await;
    play_or_toggle(&mut store, track, None);
}
