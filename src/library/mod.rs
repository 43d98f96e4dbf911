// SPDX-License-Identifier: MPL-2.0
//! Photo and album storage.
//!
//! - [`PhotoStore`]: the photo collection with favorites, duplicate groups
//!   and the recently-deleted list
//! - [`AlbumStore`]: user albums
//! - [`fixtures`]: the sample library

pub mod albums;
pub mod fixtures;
pub mod store;

pub use albums::{AlbumStore, UNTITLED_ALBUM_NAME};
pub use store::{DeletedPhoto, PhotoStore};
