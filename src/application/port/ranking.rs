// SPDX-License-Identifier: MPL-2.0
//! Ranking port definition.
//!
//! This module defines the [`RankingService`] trait for collaborators that
//! map a free-text query onto photo identities.
//!
//! # Design Notes
//!
//! - Requests carry a metadata summary per photo, never image data
//! - The call is asynchronous and may be slow; callers bound it with a timeout
//! - The trait is `Send + Sync` so one service can serve concurrent searches

use crate::domain::photo::{Photo, PhotoId};
use futures_util::future::BoxFuture;
use std::fmt;
use std::time::Duration;

// =============================================================================
// RankingError
// =============================================================================

/// Errors a ranking collaborator can produce.
///
/// Every variant is recoverable: the resolver answers from the local index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingError {
    /// No collaborator is configured or it refused the request.
    Unavailable,

    /// The collaborator did not answer within the time budget.
    Timeout(Duration),

    /// The request could not be delivered or the response not received.
    Transport(String),

    /// The response did not match the expected schema.
    Malformed(String),
}

impl fmt::Display for RankingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingError::Unavailable => write!(f, "ranking service unavailable"),
            RankingError::Timeout(after) => {
                write!(f, "ranking service timed out after {}ms", after.as_millis())
            }
            RankingError::Transport(msg) => write!(f, "ranking transport failed: {msg}"),
            RankingError::Malformed(msg) => write!(f, "malformed ranking response: {msg}"),
        }
    }
}

impl std::error::Error for RankingError {}

// =============================================================================
// Request / Response
// =============================================================================

/// Metadata summary of one photo, as sent to a ranking collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoSummary {
    pub id: PhotoId,
    pub location: Option<String>,
    /// Human-readable capture time.
    pub time: String,
    pub is_pro_raw: bool,
    pub camera: String,
}

impl From<&Photo> for PhotoSummary {
    fn from(photo: &Photo) -> Self {
        Self {
            id: photo.id().clone(),
            location: photo.location.clone(),
            time: photo.timestamp.clone(),
            is_pro_raw: photo.is_pro_raw,
            camera: photo.exif.camera.clone(),
        }
    }
}

/// A query plus the summary of every photo it may match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingRequest {
    pub query: String,
    pub photos: Vec<PhotoSummary>,
}

impl RankingRequest {
    pub fn new<'a>(query: impl Into<String>, photos: impl IntoIterator<Item = &'a Photo>) -> Self {
        Self {
            query: query.into(),
            photos: photos.into_iter().map(PhotoSummary::from).collect(),
        }
    }
}

/// Matching ids plus a short rationale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingResponse {
    pub matching_ids: Vec<PhotoId>,
    pub explanation: String,
}

/// Boxed future returned by [`RankingService::rank`].
pub type RankingFuture = BoxFuture<'static, Result<RankingResponse, RankingError>>;

// =============================================================================
// RankingService Trait
// =============================================================================

/// Port for query-to-photo ranking.
///
/// # Example
///
/// ```
/// use futures_util::FutureExt;
/// use photon::application::port::{
///     RankingError, RankingFuture, RankingRequest, RankingService,
/// };
///
/// struct Offline;
///
/// impl RankingService for Offline {
///     fn rank(&self, _request: RankingRequest) -> RankingFuture {
///         async { Err(RankingError::Unavailable) }.boxed()
///     }
///
///     fn name(&self) -> &'static str {
///         "offline"
///     }
/// }
/// ```
pub trait RankingService: Send + Sync {
    /// Ranks `request.photos` against `request.query`.
    ///
    /// The returned future owns everything it needs so it can be spawned.
    ///
    /// # Errors
    ///
    /// The future resolves to a [`RankingError`] on any failure.
    fn rank(&self, request: RankingRequest) -> RankingFuture;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::fixtures::sample_photos;

    #[test]
    fn summary_carries_metadata_only() {
        let photos = sample_photos();
        let summary = PhotoSummary::from(&photos[0]);
        assert_eq!(summary.id.as_str(), "1");
        assert_eq!(summary.location.as_deref(), Some("Central Park, NY"));
        assert_eq!(summary.time, "Today, 2:45 PM");
        assert!(summary.is_pro_raw);
        assert_eq!(summary.camera, "iPhone 16 Pro");
    }

    #[test]
    fn request_summarizes_every_photo() {
        let photos = sample_photos();
        let request = RankingRequest::new("paris", &photos);
        assert_eq!(request.query, "paris");
        assert_eq!(request.photos.len(), photos.len());
        assert_eq!(request.photos[2].location, None);
    }

    #[test]
    fn errors_display_their_cause() {
        assert_eq!(
            RankingError::Timeout(Duration::from_secs(8)).to_string(),
            "ranking service timed out after 8000ms"
        );
        assert!(RankingError::Malformed("missing field".into())
            .to_string()
            .contains("missing field"));
    }
}
