// SPDX-License-Identifier: MPL-2.0
//! The photo collection.
//!
//! Photos live in one canonical order (newest capture first). Deleting a
//! photo moves it to the recently-deleted list instead of dropping it; it
//! keeps its identity and can be restored to its original position until
//! the retention window elapses.

use crate::config::RECENTLY_DELETED_RETENTION_DAYS;
use crate::domain::error::CommandError;
use crate::domain::photo::{Photo, PhotoId, SortOrder};
use chrono::{DateTime, Duration, Utc};
use std::collections::{BTreeMap, HashMap, HashSet};

/// A soft-deleted photo.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DeletedEntry {
    photo: Photo,
    deleted_at: DateTime<Utc>,
}

/// Projection of a recently-deleted photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletedPhoto<'a> {
    pub photo: &'a Photo,
    pub deleted_at: DateTime<Utc>,
    /// Whole days left before the photo is purged.
    pub days_remaining: i64,
}

/// Owns every photo record for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct PhotoStore {
    /// Active photos in canonical order.
    photos: Vec<Photo>,
    /// Soft-deleted photos, oldest deletion first.
    deleted: Vec<DeletedEntry>,
    /// Seed position of every id, used to restore canonical order.
    positions: HashMap<PhotoId, usize>,
}

impl PhotoStore {
    /// Seeds the store. Later records reusing an earlier id are dropped.
    #[must_use]
    pub fn new(photos: impl IntoIterator<Item = Photo>) -> Self {
        let mut store = Self::default();
        for photo in photos {
            if store.positions.contains_key(photo.id()) {
                tracing::warn!(id = %photo.id(), "dropping photo with duplicate id");
                continue;
            }
            store.positions.insert(photo.id().clone(), store.photos.len());
            store.photos.push(photo);
        }
        store
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Active photos in canonical order.
    #[must_use]
    pub fn list(&self) -> &[Photo] {
        &self.photos
    }

    #[must_use]
    pub fn get(&self, id: &PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &PhotoId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Photos in presentation order. `Added` is the reverse of the stored order.
    #[must_use]
    pub fn sorted_view(&self, order: SortOrder) -> Vec<&Photo> {
        match order {
            SortOrder::Captured => self.photos.iter().collect(),
            SortOrder::Added => self.photos.iter().rev().collect(),
        }
    }

    /// Photos matching `predicate`, in canonical order.
    pub fn filter<'a>(&'a self, mut predicate: impl FnMut(&Photo) -> bool) -> Vec<&'a Photo> {
        self.photos.iter().filter(|p| predicate(p)).collect()
    }

    pub fn favorites(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter().filter(|p| p.is_favorite)
    }

    #[must_use]
    pub fn favorite_count(&self) -> usize {
        self.favorites().count()
    }

    // =========================================================================
    // Duplicates
    // =========================================================================

    /// Active duplicate groups keyed by group, members in canonical order.
    ///
    /// A group with a single remaining member is not a duplicate group and is
    /// left out.
    #[must_use]
    pub fn duplicate_groups(&self) -> BTreeMap<&str, Vec<&Photo>> {
        let mut groups: BTreeMap<&str, Vec<&Photo>> = BTreeMap::new();
        for photo in &self.photos {
            if let Some(group) = photo.duplicate_group() {
                groups.entry(group).or_default().push(photo);
            }
        }
        groups.retain(|_, members| members.len() > 1);
        groups
    }

    /// Members of one duplicate group, or empty if the group is not active.
    #[must_use]
    pub fn duplicate_group(&self, group: &str) -> Vec<&Photo> {
        let members = self.filter(|p| p.duplicate_group() == Some(group));
        if members.len() > 1 {
            members
        } else {
            Vec::new()
        }
    }

    /// The member worth keeping: highest resolution, then largest file,
    /// then earliest in canonical order.
    #[must_use]
    pub fn best_in_group(&self, group: &str) -> Option<&Photo> {
        let mut best: Option<&Photo> = None;
        for photo in self.duplicate_group(group) {
            let better = best.is_none_or(|current| {
                (photo.resolution.pixel_count(), photo.file_size_bytes)
                    > (current.resolution.pixel_count(), current.file_size_bytes)
            });
            if better {
                best = Some(photo);
            }
        }
        best
    }

    /// Bytes freed by keeping only `keep` from `group`.
    #[must_use]
    pub fn reclaimable_bytes(&self, group: &str, keep: &PhotoId) -> u64 {
        self.duplicate_group(group)
            .into_iter()
            .filter(|p| p.id() != keep)
            .map(|p| p.file_size_bytes)
            .sum()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Flips the favorite flag and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::NotFound`] if no active photo has this id; the
    /// collection is left unchanged.
    pub fn toggle_favorite(&mut self, id: &PhotoId) -> Result<bool, CommandError> {
        let photo = self
            .photos
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| CommandError::NotFound(id.clone()))?;
        photo.is_favorite = !photo.is_favorite;
        Ok(photo.is_favorite)
    }

    /// Moves the given photos to the recently-deleted list.
    ///
    /// All-or-nothing: returns the deleted ids in canonical order.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::EmptyBatch`] for an empty id list and
    /// [`CommandError::NotFound`] if any id is not active.
    pub fn delete(
        &mut self,
        ids: &[PhotoId],
        now: DateTime<Utc>,
    ) -> Result<Vec<PhotoId>, CommandError> {
        if ids.is_empty() {
            return Err(CommandError::EmptyBatch);
        }
        if let Some(missing) = ids.iter().find(|id| !self.contains(id)) {
            return Err(CommandError::NotFound(missing.clone()));
        }

        let doomed: HashSet<&PhotoId> = ids.iter().collect();
        let (removed, kept): (Vec<Photo>, Vec<Photo>) = std::mem::take(&mut self.photos)
            .into_iter()
            .partition(|p| doomed.contains(p.id()));
        self.photos = kept;

        let removed_ids = removed.iter().map(|p| p.id().clone()).collect();
        self.deleted.extend(
            removed
                .into_iter()
                .map(|photo| DeletedEntry { photo, deleted_at: now }),
        );
        Ok(removed_ids)
    }

    /// Moves photos back from the recently-deleted list to their original
    /// position. Ids that are not recently deleted are skipped.
    ///
    /// Returns the restored ids.
    pub fn restore(&mut self, ids: &[PhotoId]) -> Vec<PhotoId> {
        let wanted: HashSet<&PhotoId> = ids.iter().collect();
        let (back, still_deleted): (Vec<DeletedEntry>, Vec<DeletedEntry>) =
            std::mem::take(&mut self.deleted)
                .into_iter()
                .partition(|entry| wanted.contains(entry.photo.id()));
        self.deleted = still_deleted;

        let mut restored = Vec::with_capacity(back.len());
        for entry in back {
            let position = self.position_of(entry.photo.id());
            let index = self
                .photos
                .partition_point(|p| self.position_of(p.id()) < position);
            restored.push(entry.photo.id().clone());
            self.photos.insert(index, entry.photo);
        }
        restored
    }

    /// Recently-deleted photos, most recent deletion first.
    #[must_use]
    pub fn recently_deleted(&self, now: DateTime<Utc>) -> Vec<DeletedPhoto<'_>> {
        self.deleted
            .iter()
            .rev()
            .map(|entry| DeletedPhoto {
                photo: &entry.photo,
                deleted_at: entry.deleted_at,
                days_remaining: days_remaining(entry.deleted_at, now),
            })
            .collect()
    }

    #[must_use]
    pub fn is_deleted(&self, id: &PhotoId) -> bool {
        self.deleted.iter().any(|entry| entry.photo.id() == id)
    }

    /// Permanently drops photos whose retention window has elapsed.
    ///
    /// Returns the purged ids.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> Vec<PhotoId> {
        let retention = Duration::days(RECENTLY_DELETED_RETENTION_DAYS);
        let (expired, kept): (Vec<DeletedEntry>, Vec<DeletedEntry>) =
            std::mem::take(&mut self.deleted)
                .into_iter()
                .partition(|entry| now - entry.deleted_at >= retention);
        self.deleted = kept;
        expired
            .into_iter()
            .map(|entry| entry.photo.id().clone())
            .collect()
    }

    fn position_of(&self, id: &PhotoId) -> usize {
        self.positions.get(id).copied().unwrap_or(usize::MAX)
    }
}

fn days_remaining(deleted_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed = (now - deleted_at).num_days();
    (RECENTLY_DELETED_RETENTION_DAYS - elapsed).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::fixtures::sample_library;
    use chrono::TimeZone;

    fn ids(raw: &[&str]) -> Vec<PhotoId> {
        raw.iter().map(|id| PhotoId::new(*id)).collect()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 19, 12, 0, 0).unwrap()
    }

    fn listed(store: &PhotoStore) -> Vec<&str> {
        store.list().iter().map(|p| p.id().as_str()).collect()
    }

    #[test]
    fn new_drops_duplicate_ids() {
        let store = PhotoStore::new([
            Photo::new("1", "a"),
            Photo::new("1", "b"),
            Photo::new("2", "c"),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&PhotoId::new("1")).map(|p| p.timestamp.as_str()), Some("a"));
    }

    #[test]
    fn toggle_favorite_is_its_own_inverse() {
        let mut store = sample_library();
        let id = PhotoId::new("3");
        let before = store.get(&id).map(|p| p.is_favorite);

        assert_eq!(store.toggle_favorite(&id), Ok(true));
        assert_eq!(store.toggle_favorite(&id), Ok(false));
        assert_eq!(store.get(&id).map(|p| p.is_favorite), before);
    }

    #[test]
    fn toggle_favorite_unknown_id_reports_not_found() {
        let mut store = sample_library();
        let before = store.clone();
        let id = PhotoId::new("404");

        assert_eq!(store.toggle_favorite(&id), Err(CommandError::NotFound(id)));
        assert_eq!(store.list(), before.list());
    }

    #[test]
    fn sorted_view_added_reverses_canonical_order() {
        let store = sample_library();
        let captured: Vec<_> = store.sorted_view(SortOrder::Captured);
        let mut added: Vec<_> = store.sorted_view(SortOrder::Added);
        added.reverse();
        assert_eq!(captured, added);
        assert_eq!(captured[0].id().as_str(), "1");
    }

    #[test]
    fn duplicate_groups_collect_members_in_order() {
        let store = sample_library();
        let groups = store.duplicate_groups();
        assert_eq!(groups.len(), 1);
        let members: Vec<_> = groups["group1"].iter().map(|p| p.id().as_str()).collect();
        assert_eq!(members, vec!["3", "4"]);
    }

    #[test]
    fn singleton_group_is_not_reported() {
        let mut store = sample_library();
        store.delete(&ids(&["4"]), now()).unwrap();
        assert!(store.duplicate_groups().is_empty());
        assert!(store.duplicate_group("group1").is_empty());
    }

    #[test]
    fn best_in_group_prefers_first_on_tie_and_reclaims_the_rest() {
        let store = sample_library();
        let best = store.best_in_group("group1").expect("group exists");
        assert_eq!(best.id().as_str(), "3");
        assert_eq!(store.reclaimable_bytes("group1", best.id()), 4_299_161);
    }

    #[test]
    fn best_in_group_prefers_higher_resolution() {
        let store = PhotoStore::new([
            Photo::new("a", "t").with_resolution(100, 100).in_duplicate_group("g", 90),
            Photo::new("b", "t").with_resolution(200, 100).in_duplicate_group("g", 90),
        ]);
        assert_eq!(store.best_in_group("g").map(|p| p.id().as_str()), Some("b"));
    }

    #[test]
    fn delete_is_all_or_nothing() {
        let mut store = sample_library();
        let err = store.delete(&ids(&["1", "404"]), now()).unwrap_err();
        assert_eq!(err, CommandError::NotFound(PhotoId::new("404")));
        assert_eq!(store.len(), 11);

        assert_eq!(store.delete(&[], now()), Err(CommandError::EmptyBatch));
    }

    #[test]
    fn delete_then_restore_returns_photos_to_original_position() {
        let mut store = sample_library();
        let original: Vec<String> = listed(&store).into_iter().map(String::from).collect();

        let removed = store.delete(&ids(&["5", "2", "9"]), now()).unwrap();
        assert_eq!(removed, ids(&["2", "5", "9"]));
        assert_eq!(store.len(), 8);
        assert!(!store.contains(&PhotoId::new("5")));
        assert!(store.is_deleted(&PhotoId::new("5")));

        let restored = store.restore(&ids(&["9", "5", "2"]));
        assert_eq!(restored.len(), 3);
        assert_eq!(listed(&store), original);
        assert!(store.recently_deleted(now()).is_empty());
    }

    #[test]
    fn deleted_photos_cannot_be_favorited() {
        let mut store = sample_library();
        let id = PhotoId::new("7");
        store.delete(std::slice::from_ref(&id), now()).unwrap();
        assert_eq!(store.toggle_favorite(&id), Err(CommandError::NotFound(id)));
    }

    #[test]
    fn recently_deleted_counts_down_and_purge_honors_retention() {
        let mut store = sample_library();
        store.delete(&ids(&["1"]), now()).unwrap();
        store
            .delete(&ids(&["2"]), now() + Duration::days(10))
            .unwrap();

        let later = now() + Duration::days(12);
        let listing = store.recently_deleted(later);
        assert_eq!(listing[0].photo.id().as_str(), "2");
        assert_eq!(listing[0].days_remaining, 38);
        assert_eq!(listing[1].days_remaining, 28);

        assert!(store.purge_expired(now() + Duration::days(39)).is_empty());
        assert_eq!(store.purge_expired(now() + Duration::days(40)), ids(&["1"]));
        assert_eq!(store.recently_deleted(later).len(), 1);
        assert!(store.restore(&ids(&["1"])).is_empty());
    }

    #[test]
    fn favorites_reflect_toggles() {
        let mut store = sample_library();
        assert_eq!(store.favorite_count(), 0);
        store.toggle_favorite(&PhotoId::new("6")).unwrap();
        let favorites: Vec<_> = store.favorites().map(|p| p.id().as_str()).collect();
        assert_eq!(favorites, vec!["6"]);
    }
}
