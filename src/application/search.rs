// SPDX-License-Identifier: MPL-2.0
//! Free-text search over the photo library.
//!
//! A [`SearchResolver`] asks the configured ranking delegate first and falls
//! back to the [`LocalIndex`] on any delegate failure. Both implement
//! [`RankingService`]; the resolver does not care which one answers.

use super::port::{
    PhotoSummary, RankingError, RankingFuture, RankingRequest, RankingResponse, RankingService,
};
use crate::config::{DEFAULT_SEARCH_TIMEOUT_SECS, RECENT_SEARCH_CAPACITY};
use crate::diagnostics::{DiagnosticsHandle, WarningEvent, WarningType};
use crate::domain::photo::{Photo, PhotoId};
use crate::library::PhotoStore;
use futures_util::FutureExt;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::Duration;

/// Rationale shown when the local index answered instead of the delegate.
pub const LOCAL_EXPLANATION: &str = "Local indexing used to find matching metadata.";

// =============================================================================
// LocalIndex
// =============================================================================

/// Case-insensitive substring match against location and capture time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalIndex;

impl LocalIndex {
    /// Ranks synchronously.
    #[must_use]
    pub fn search(&self, request: &RankingRequest) -> RankingResponse {
        let needle = request.query.to_lowercase();
        let matching_ids = request
            .photos
            .iter()
            .filter(|summary| matches_summary(summary, &needle))
            .map(|summary| summary.id.clone())
            .collect();
        RankingResponse {
            matching_ids,
            explanation: LOCAL_EXPLANATION.to_string(),
        }
    }
}

fn matches_summary(summary: &PhotoSummary, needle: &str) -> bool {
    summary
        .location
        .as_deref()
        .is_some_and(|location| location.to_lowercase().contains(needle))
        || summary.time.to_lowercase().contains(needle)
}

impl RankingService for LocalIndex {
    fn rank(&self, request: RankingRequest) -> RankingFuture {
        let response = self.search(&request);
        async move { Ok(response) }.boxed()
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

// =============================================================================
// Results
// =============================================================================

/// Which implementation produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSource {
    Delegate,
    Local,
}

impl SearchSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SearchSource::Delegate => "delegate",
            SearchSource::Local => "local",
        }
    }
}

/// Ranked answer before it is checked against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankOutcome {
    pub response: RankingResponse,
    pub source: SearchSource,
    /// Why the delegate was bypassed, when it was.
    pub delegate_error: Option<RankingError>,
}

/// The matches of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub query: String,
    /// Matching ids in canonical store order.
    pub matches: Vec<PhotoId>,
    pub explanation: String,
    pub source: SearchSource,
}

impl SearchResults {
    /// Keeps only ids the store knows, in store order.
    #[must_use]
    pub fn from_outcome(query: impl Into<String>, outcome: RankOutcome, store: &PhotoStore) -> Self {
        let wanted: HashSet<&PhotoId> = outcome.response.matching_ids.iter().collect();
        let matches = store
            .filter(|p| wanted.contains(p.id()))
            .into_iter()
            .map(|p| p.id().clone())
            .collect();
        Self {
            query: query.into(),
            matches,
            explanation: outcome.response.explanation,
            source: outcome.source,
        }
    }

    /// Resolves the matches that are still active in `store`.
    #[must_use]
    pub fn photos<'a>(&self, store: &'a PhotoStore) -> Vec<&'a Photo> {
        self.matches.iter().filter_map(|id| store.get(id)).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Search result projection.
///
/// `Inactive` ("not searching") is distinct from `Ready` with zero matches
/// ("searched, found nothing").
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchOutcome {
    #[default]
    Inactive,
    Ready(SearchResults),
}

/// Returns the trimmed query, or `None` if nothing is left to search for.
#[must_use]
pub fn normalize_query(query: &str) -> Option<&str> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

// =============================================================================
// SearchResolver
// =============================================================================

/// Delegate-first search with a local fallback.
///
/// Cheap to clone; clones share the delegate.
#[derive(Clone)]
pub struct SearchResolver {
    delegate: Option<Arc<dyn RankingService>>,
    fallback: LocalIndex,
    timeout: Duration,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for SearchResolver {
    fn default() -> Self {
        Self::local_only()
    }
}

impl std::fmt::Debug for SearchResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchResolver")
            .field("delegate", &self.delegate.as_ref().map(|d| d.name()))
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl SearchResolver {
    /// A resolver that always answers from the local index.
    #[must_use]
    pub fn local_only() -> Self {
        Self {
            delegate: None,
            fallback: LocalIndex,
            timeout: Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS),
            diagnostics: None,
        }
    }

    #[must_use]
    pub fn with_delegate(mut self, delegate: Arc<dyn RankingService>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Sets the time budget for one delegate call.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Records delegate failures in the activity log.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    #[must_use]
    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Ranks a request, falling back to the local index on any delegate failure.
    pub async fn rank(&self, request: RankingRequest) -> RankOutcome {
        let error = match &self.delegate {
            None => RankingError::Unavailable,
            Some(delegate) => {
                match tokio::time::timeout(self.timeout, delegate.rank(request.clone())).await {
                    Ok(Ok(response)) => {
                        return RankOutcome {
                            response,
                            source: SearchSource::Delegate,
                            delegate_error: None,
                        };
                    }
                    Ok(Err(err)) => err,
                    Err(_) => RankingError::Timeout(self.timeout),
                }
            }
        };

        if self.delegate.is_some() {
            tracing::warn!(error = %error, "ranking delegate failed, using local index");
            if let Some(handle) = &self.diagnostics {
                handle.log_warning(WarningEvent::new(
                    WarningType::DelegateFailure,
                    error.to_string(),
                ));
            }
        }

        RankOutcome {
            response: self.fallback.search(&request),
            source: SearchSource::Local,
            delegate_error: Some(error),
        }
    }

    /// Resolves `query` against the active photos of `store`.
    ///
    /// An empty query yields [`SearchOutcome::Inactive`].
    pub async fn resolve(&self, query: &str, store: &PhotoStore) -> SearchOutcome {
        let Some(query) = normalize_query(query) else {
            return SearchOutcome::Inactive;
        };
        let outcome = self.rank(RankingRequest::new(query, store.list())).await;
        SearchOutcome::Ready(SearchResults::from_outcome(query, outcome, store))
    }
}

// =============================================================================
// RecentSearches
// =============================================================================

/// Most-recent-first list of distinct submitted queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentSearches {
    queries: VecDeque<String>,
}

impl RecentSearches {
    /// Moves `query` to the front, dropping the oldest entry past capacity.
    pub fn record(&mut self, query: &str) {
        let Some(query) = normalize_query(query) else {
            return;
        };
        self.queries.retain(|q| !q.eq_ignore_ascii_case(query));
        self.queries.push_front(query.to_string());
        self.queries.truncate(RECENT_SEARCH_CAPACITY);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.queries.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn clear(&mut self) {
        self.queries.clear();
    }
}
