// SPDX-License-Identifier: MPL-2.0
//! Core photo types for the domain layer.
//!
//! These types describe a photo record as the library sees it: identity,
//! display metadata, capture attributes, the user's favorite flag and the
//! optional duplicate-group membership.

use std::fmt;

// =============================================================================
// PhotoId
// =============================================================================

/// Stable identity of a photo.
///
/// Identities are assigned once when the library is seeded and never change.
/// Every other component (selection, navigation, search results, albums)
/// refers to photos through this id, never through a copied record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(String);

impl PhotoId {
    /// Creates a photo id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhotoId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PhotoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Pixel dimensions of a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of pixels.
    #[must_use]
    pub fn pixel_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

// =============================================================================
// ExifData
// =============================================================================

/// Capture settings recorded by the camera.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExifData {
    pub aperture: String,
    pub shutter_speed: String,
    pub iso: u32,
    pub focal_length: String,
    pub lens: String,
    pub camera: String,
}

// =============================================================================
// Duplicate membership
// =============================================================================

/// Confidence that a photo is a duplicate, guaranteed to be within 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ConfidencePercent(u8);

impl ConfidencePercent {
    /// Creates a confidence value, clamping it to 100.
    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

/// Membership of a photo in a group of near-identical candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateInfo {
    /// Group key shared by every member of the group.
    pub group: String,
    /// How confident the detector is that this photo duplicates the others.
    pub confidence: ConfidencePercent,
}

// =============================================================================
// Photo
// =============================================================================

/// A single photo record in the library.
///
/// Only `is_favorite` is mutated after seeding; everything else is
/// metadata captured at import time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    id: PhotoId,
    /// Human-readable capture time (e.g. "Today, 2:45 PM").
    pub timestamp: String,
    pub location: Option<String>,
    pub is_pro_raw: bool,
    /// Sensor bit depth, only known for RAW captures.
    pub bit_depth: Option<u8>,
    pub resolution: Resolution,
    pub file_size_bytes: u64,
    pub exif: ExifData,
    pub is_favorite: bool,
    pub duplicate: Option<DuplicateInfo>,
}

impl Photo {
    /// Creates a photo with the given identity and capture time.
    ///
    /// All other attributes start empty; use the `with_*` builders to fill them.
    pub fn new(id: impl Into<PhotoId>, timestamp: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            timestamp: timestamp.into(),
            location: None,
            is_pro_raw: false,
            bit_depth: None,
            resolution: Resolution::default(),
            file_size_bytes: 0,
            exif: ExifData::default(),
            is_favorite: false,
            duplicate: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Marks the photo as a ProRAW capture with the given bit depth.
    #[must_use]
    pub fn pro_raw(mut self, bit_depth: u8) -> Self {
        self.is_pro_raw = true;
        self.bit_depth = Some(bit_depth);
        self
    }

    #[must_use]
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.resolution = Resolution::new(width, height);
        self
    }

    #[must_use]
    pub fn with_file_size(mut self, bytes: u64) -> Self {
        self.file_size_bytes = bytes;
        self
    }

    #[must_use]
    pub fn with_exif(mut self, exif: ExifData) -> Self {
        self.exif = exif;
        self
    }

    #[must_use]
    pub fn favorite(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    /// Places the photo in a duplicate group.
    #[must_use]
    pub fn in_duplicate_group(mut self, group: impl Into<String>, confidence: u8) -> Self {
        self.duplicate = Some(DuplicateInfo {
            group: group.into(),
            confidence: ConfidencePercent::new(confidence),
        });
        self
    }

    /// Returns the photo's identity.
    #[must_use]
    pub fn id(&self) -> &PhotoId {
        &self.id
    }

    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        self.duplicate.is_some()
    }

    /// Returns the duplicate group key, if any.
    #[must_use]
    pub fn duplicate_group(&self) -> Option<&str> {
        self.duplicate.as_ref().map(|d| d.group.as_str())
    }

    /// Human-readable file size ("42.5 MB").
    #[must_use]
    pub fn file_size_label(&self) -> String {
        format_file_size(self.file_size_bytes)
    }
}

/// Formats a byte count with one decimal in binary megabytes, or kilobytes below 1 MB.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    // Precision loss is irrelevant for display values.
    #[allow(clippy::cast_precision_loss)]
    let bytes = bytes as f64;
    if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else {
        format!("{:.1} KB", bytes / KB)
    }
}

/// Presentation order for the library grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Canonical stored order (newest capture first).
    #[default]
    Captured,
    /// Reverse of the stored order.
    Added,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_clamped_to_one_hundred() {
        assert_eq!(ConfidencePercent::new(250).value(), 100);
        assert_eq!(ConfidencePercent::new(42).value(), 42);
    }

    #[test]
    fn builder_sets_pro_raw_and_bit_depth() {
        let photo = Photo::new("1", "Today").pro_raw(14);
        assert!(photo.is_pro_raw);
        assert_eq!(photo.bit_depth, Some(14));
        assert!(!photo.is_favorite);
    }

    #[test]
    fn duplicate_group_is_exposed() {
        let photo = Photo::new("3", "Oct 12, 2025").in_duplicate_group("group1", 100);
        assert!(photo.is_duplicate());
        assert_eq!(photo.duplicate_group(), Some("group1"));
    }

    #[test]
    fn file_size_label_uses_binary_megabytes() {
        assert_eq!(format_file_size(44_564_480), "42.5 MB");
        assert_eq!(format_file_size(4_299_161), "4.1 MB");
        assert_eq!(format_file_size(2048), "2.0 KB");
    }

    #[test]
    fn resolution_displays_like_camera_roll() {
        let resolution = Resolution::new(8064, 6048);
        assert_eq!(resolution.to_string(), "8064 x 6048");
        assert_eq!(resolution.pixel_count(), 8064 * 6048);
    }
}
