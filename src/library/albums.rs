// SPDX-License-Identifier: MPL-2.0
//! User albums.

use crate::domain::album::{Album, AlbumId};
use crate::domain::error::CommandError;
use crate::domain::photo::PhotoId;

/// Base name for albums created from a selection.
pub const UNTITLED_ALBUM_NAME: &str = "New Album";

/// Owns the user's albums in creation order.
#[derive(Debug, Clone, Default)]
pub struct AlbumStore {
    albums: Vec<Album>,
    next_id: u32,
}

impl AlbumStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty album and returns its id.
    pub fn create(&mut self, name: impl Into<String>) -> AlbumId {
        self.next_id += 1;
        let id = AlbumId::new(self.next_id);
        self.albums.push(Album::new(id, name));
        id
    }

    /// Creates an album named "New Album", "New Album 2", ... whichever is free.
    pub fn create_untitled(&mut self) -> AlbumId {
        let name = self.untitled_name();
        self.create(name)
    }

    /// Adds photos to an album, skipping ones already in it.
    ///
    /// Returns how many photos were newly added.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::AlbumNotFound`] if the album does not exist.
    pub fn add(&mut self, album: AlbumId, ids: &[PhotoId]) -> Result<usize, CommandError> {
        let album = self
            .albums
            .iter_mut()
            .find(|a| a.id() == album)
            .ok_or(CommandError::AlbumNotFound(album))?;
        Ok(ids.iter().filter(|id| album.insert((*id).clone())).count())
    }

    #[must_use]
    pub fn get(&self, id: AlbumId) -> Option<&Album> {
        self.albums.iter().find(|a| a.id() == id)
    }

    #[must_use]
    pub fn list(&self) -> &[Album] {
        &self.albums
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Removes references to photos that no longer exist anywhere.
    pub fn forget(&mut self, ids: &[PhotoId]) {
        for album in &mut self.albums {
            album.retain(|id| !ids.contains(id));
        }
    }

    fn untitled_name(&self) -> String {
        let taken = |name: &str| self.albums.iter().any(|a| a.name == name);
        if !taken(UNTITLED_ALBUM_NAME) {
            return UNTITLED_ALBUM_NAME.to_string();
        }
        (2..)
            .map(|n| format!("{UNTITLED_ALBUM_NAME} {n}"))
            .find(|name| !taken(name))
            .unwrap_or_else(|| UNTITLED_ALBUM_NAME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<PhotoId> {
        raw.iter().map(|id| PhotoId::new(*id)).collect()
    }

    #[test]
    fn untitled_albums_get_numbered_names() {
        let mut store = AlbumStore::new();
        let first = store.create_untitled();
        let second = store.create_untitled();
        let third = store.create_untitled();

        assert_eq!(store.get(first).map(|a| a.name.as_str()), Some("New Album"));
        assert_eq!(store.get(second).map(|a| a.name.as_str()), Some("New Album 2"));
        assert_eq!(store.get(third).map(|a| a.name.as_str()), Some("New Album 3"));
    }

    #[test]
    fn add_skips_photos_already_in_album() {
        let mut store = AlbumStore::new();
        let album = store.create("Trip");

        assert_eq!(store.add(album, &ids(&["1", "5"])), Ok(2));
        assert_eq!(store.add(album, &ids(&["5", "7"])), Ok(1));
        assert_eq!(store.get(album).map(Album::len), Some(3));
    }

    #[test]
    fn add_to_missing_album_fails() {
        let mut store = AlbumStore::new();
        let missing = AlbumId::new(42);
        assert_eq!(
            store.add(missing, &ids(&["1"])),
            Err(CommandError::AlbumNotFound(missing))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn forget_prunes_every_album() {
        let mut store = AlbumStore::new();
        let a = store.create("A");
        let b = store.create("B");
        store.add(a, &ids(&["1", "2"])).unwrap();
        store.add(b, &ids(&["2", "3"])).unwrap();

        store.forget(&ids(&["2"]));

        assert_eq!(store.get(a).map(Album::photos), Some(&ids(&["1"])[..]));
        assert_eq!(store.get(b).map(Album::photos), Some(&ids(&["3"])[..]));
    }
}
