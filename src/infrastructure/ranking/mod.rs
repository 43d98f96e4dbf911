// SPDX-License-Identifier: MPL-2.0
//! Ranking service adapters.

pub mod http;

pub use http::HttpRankingService;

use crate::application::search::SearchResolver;
use crate::config::SearchConfig;
use std::sync::Arc;

/// Builds a resolver from the `[search]` config section.
///
/// Without an endpoint, or if the HTTP client cannot be created, searches
/// are answered by the local index only.
#[must_use]
pub fn resolver_from_config(config: &SearchConfig) -> SearchResolver {
    let resolver = SearchResolver::local_only().with_timeout(config.timeout());
    let Some(endpoint) = config.endpoint.as_deref().filter(|e| !e.trim().is_empty()) else {
        return resolver;
    };
    match HttpRankingService::new(endpoint) {
        Ok(service) => resolver.with_delegate(Arc::new(service)),
        Err(err) => {
            tracing::warn!(error = %err, endpoint, "ranking delegate disabled");
            resolver
        }
    }
}
