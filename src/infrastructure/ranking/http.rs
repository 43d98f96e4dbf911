// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the ranking port.
//!
//! Wire format (JSON, camelCase):
//!
//! ```text
//! POST <endpoint>
//! { "query": "...", "photos": [{ "id", "location", "time", "isProRAW", "camera" }] }
//!
//! 200 OK
//! { "matchingIds": ["..."], "explanation": "..." }
//! ```

use crate::application::port::{
    RankingError, RankingFuture, RankingRequest, RankingResponse, RankingService,
};
use crate::domain::photo::PhotoId;
use futures_util::FutureExt;
use serde::{Deserialize, Serialize};

/// Sent in place of a missing location.
const UNKNOWN_LOCATION: &str = "Unknown";

#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    query: &'a str,
    photos: Vec<WirePhoto<'a>>,
}

#[derive(Debug, Serialize)]
struct WirePhoto<'a> {
    id: &'a str,
    location: &'a str,
    time: &'a str,
    #[serde(rename = "isProRAW")]
    is_pro_raw: bool,
    camera: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResponse {
    matching_ids: Vec<String>,
    explanation: String,
}

impl<'a> From<&'a RankingRequest> for WireRequest<'a> {
    fn from(request: &'a RankingRequest) -> Self {
        Self {
            query: &request.query,
            photos: request
                .photos
                .iter()
                .map(|summary| WirePhoto {
                    id: summary.id.as_str(),
                    location: summary.location.as_deref().unwrap_or(UNKNOWN_LOCATION),
                    time: &summary.time,
                    is_pro_raw: summary.is_pro_raw,
                    camera: &summary.camera,
                })
                .collect(),
        }
    }
}

/// Serializes a request body.
///
/// # Errors
///
/// Returns [`RankingError::Malformed`] if serialization fails.
pub fn encode_request(request: &RankingRequest) -> Result<String, RankingError> {
    serde_json::to_string(&WireRequest::from(request))
        .map_err(|e| RankingError::Malformed(e.to_string()))
}

/// Parses a response body.
///
/// # Errors
///
/// Returns [`RankingError::Malformed`] if the body does not match the schema.
pub fn parse_response(body: &str) -> Result<RankingResponse, RankingError> {
    let wire: WireResponse =
        serde_json::from_str(body).map_err(|e| RankingError::Malformed(e.to_string()))?;
    Ok(RankingResponse {
        matching_ids: wire.matching_ids.into_iter().map(PhotoId::from).collect(),
        explanation: wire.explanation,
    })
}

/// Ranking service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRankingService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRankingService {
    /// Creates a service posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::Transport`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, RankingError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(3))
            .user_agent(concat!("Photon/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RankingError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RankingService for HttpRankingService {
    fn rank(&self, request: RankingRequest) -> RankingFuture {
        let builder = self
            .client
            .post(&self.endpoint)
            .json(&WireRequest::from(&request));

        async move {
            let response = builder
                .send()
                .await
                .map_err(|e| RankingError::Transport(e.to_string()))?;

            if !response.status().is_success() {
                return Err(RankingError::Transport(format!(
                    "HTTP status: {}",
                    response.status()
                )));
            }

            let body = response
                .text()
                .await
                .map_err(|e| RankingError::Transport(e.to_string()))?;
            parse_response(&body)
        }
        .boxed()
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
