// SPDX-License-Identifier: MPL-2.0
//! Photo domain types.

pub mod types;

pub use types::{
    format_file_size, ConfidencePercent, DuplicateInfo, ExifData, Photo, PhotoId, Resolution,
    SortOrder,
};
