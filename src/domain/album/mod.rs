// SPDX-License-Identifier: MPL-2.0
//! Album domain types.

use crate::domain::photo::PhotoId;
use std::fmt;

/// Identity of a user album.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlbumId(u32);

impl AlbumId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "album-{}", self.0)
    }
}

/// A named, ordered collection of photo references.
///
/// An album never contains the same photo twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    id: AlbumId,
    pub name: String,
    photos: Vec<PhotoId>,
}

impl Album {
    pub fn new(id: AlbumId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            photos: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> AlbumId {
        self.id
    }

    #[must_use]
    pub fn photos(&self) -> &[PhotoId] {
        &self.photos
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &PhotoId) -> bool {
        self.photos.contains(id)
    }

    /// Appends a photo unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, id: PhotoId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.photos.push(id);
        true
    }

    /// Drops every photo for which `keep` returns `false`.
    pub fn retain(&mut self, mut keep: impl FnMut(&PhotoId) -> bool) {
        self.photos.retain(|id| keep(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_ignores_duplicates() {
        let mut album = Album::new(AlbumId::new(1), "Trip");
        assert!(album.insert(PhotoId::new("1")));
        assert!(!album.insert(PhotoId::new("1")));
        assert_eq!(album.len(), 1);
    }

    #[test]
    fn retain_drops_rejected_photos() {
        let mut album = Album::new(AlbumId::new(1), "Trip");
        album.insert(PhotoId::new("1"));
        album.insert(PhotoId::new("2"));
        album.retain(|id| id.as_str() != "1");
        assert_eq!(album.photos(), &[PhotoId::new("2")]);
    }
}
