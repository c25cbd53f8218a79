// Lazily populated, identifier-indexed entity storage.
//
// One `CacheSlot` per entity kind. Population state is an explicit
// flag, never inferred from emptiness: a device can genuinely have
// zero entities of a kind, and that must not look like "never fetched".

use std::collections::HashMap;

use crate::model::{AuxDestination, ScreenDestination, Source};

/// An entity with a stable integer identifier.
pub(crate) trait Keyed {
    fn key(&self) -> i32;
}

impl Keyed for Source {
    fn key(&self) -> i32 {
        self.id
    }
}

impl Keyed for AuxDestination {
    fn key(&self) -> i32 {
        self.id
    }
}

impl Keyed for ScreenDestination {
    fn key(&self) -> i32 {
        self.id
    }
}

/// Identifier-indexed store for one entity kind.
///
/// Unpopulated until [`install`](Self::install) succeeds once; refresh
/// is wholesale replacement, never a merge.
#[derive(Debug)]
pub(crate) struct CacheSlot<T> {
    entries: HashMap<i32, T>,
    populated: bool,
}

impl<T> Default for CacheSlot<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            populated: false,
        }
    }
}

impl<T: Clone + Keyed> CacheSlot<T> {
    pub(crate) fn is_populated(&self) -> bool {
        self.populated
    }

    /// Replace the contents with a fresh listing and mark populated.
    pub(crate) fn install<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.entries = items.into_iter().map(|item| (item.key(), item)).collect();
        self.populated = true;
    }

    pub(crate) fn get(&self, id: i32) -> Option<&T> {
        self.entries.get(&id)
    }

    /// All entries, cloned, in unspecified order.
    pub(crate) fn values(&self) -> Vec<T> {
        self.entries.values().cloned().collect()
    }

    /// Drop the contents and return to the unpopulated state, so the
    /// next accessor triggers a refresh.
    pub(crate) fn invalidate(&mut self) {
        self.entries.clear();
        self.populated = false;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn source(id: i32, name: &str) -> Source {
        Source {
            id,
            name: name.into(),
            ..Source::default()
        }
    }

    #[test]
    fn fresh_slot_is_unpopulated_not_empty_populated() {
        let slot: CacheSlot<Source> = CacheSlot::default();
        assert!(!slot.is_populated());
        assert!(slot.values().is_empty());
    }

    #[test]
    fn install_of_empty_listing_still_populates() {
        let mut slot: CacheSlot<Source> = CacheSlot::default();
        slot.install(Vec::new());
        assert!(slot.is_populated());
        assert!(slot.values().is_empty());
    }

    #[test]
    fn install_replaces_wholesale() {
        let mut slot: CacheSlot<Source> = CacheSlot::default();
        slot.install(vec![source(1, "one"), source(2, "two")]);
        slot.install(vec![source(2, "two again"), source(3, "three")]);

        assert!(slot.get(1).is_none(), "stale entry must be discarded");
        assert_eq!(slot.get(2).unwrap().name, "two again");
        assert_eq!(slot.get(3).unwrap().name, "three");
        assert_eq!(slot.values().len(), 2);
    }

    #[test]
    fn invalidate_returns_to_unpopulated() {
        let mut slot: CacheSlot<Source> = CacheSlot::default();
        slot.install(vec![source(1, "one")]);
        slot.invalidate();

        assert!(!slot.is_populated());
        assert!(slot.get(1).is_none());
    }
}
