//! The per-page record store

use atrium_model::RecordId;
use parking_lot::RwLock;

/// Anything with a server-assigned id
pub trait Identified {
    /// Id of this record
    fn record_id(&self) -> &RecordId;
}

/// Store mutation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Wholesale replacements (successful fetches)
    pub replaced: u64,
    /// Optimistic prepends (creates)
    pub prepended: u64,
    /// In-place updates
    pub applied: u64,
    /// Removals
    pub removed: u64,
}

/// Ordered, disposable cache of one page's records
///
/// Replaced (not merged) on every successful fetch. Mutations are
/// last-write-wins with no conflict detection; a failed refresh leaves the
/// last-known-good contents untouched.
#[derive(Debug)]
pub struct RecordStore<T> {
    records: RwLock<Vec<T>>,
    stats: RwLock<StoreStats>,
}

impl<T: Identified + Clone> RecordStore<T> {
    /// Empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            stats: RwLock::new(StoreStats::default()),
        }
    }

    /// Replace the whole list with a fresh fetch
    pub fn replace(&self, records: Vec<T>) {
        *self.records.write() = records;
        self.stats.write().replaced += 1;
    }

    /// Optimistically prepend a just-created record
    pub fn prepend(&self, record: T) {
        self.records.write().insert(0, record);
        self.stats.write().prepended += 1;
    }

    /// Replace the record with the same id, if present
    ///
    /// The last response to arrive wins; there is no version check.
    pub fn apply(&self, record: T) {
        let mut records = self.records.write();
        if let Some(slot) = records
            .iter_mut()
            .find(|r| r.record_id() == record.record_id())
        {
            *slot = record;
            self.stats.write().applied += 1;
        }
    }

    /// Remove the record with the given id, if present
    pub fn remove(&self, id: &RecordId) {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|r| r.record_id() != id);
        if records.len() != before {
            self.stats.write().removed += 1;
        }
    }

    /// Clone of the current contents, in order
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.records.read().clone()
    }

    /// Current record count
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Mutation counters
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        *self.stats.read()
    }
}

impl<T: Identified + Clone> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: RecordId,
        label: String,
    }

    impl Identified for Row {
        fn record_id(&self) -> &RecordId {
            &self.id
        }
    }

    fn row(id: &str, label: &str) -> Row {
        Row {
            id: RecordId::new(id),
            label: label.to_string(),
        }
    }

    #[test]
    fn replace_is_wholesale() {
        let store = RecordStore::new();
        store.replace(vec![row("1", "a"), row("2", "b")]);
        store.replace(vec![row("3", "c")]);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id.as_str(), "3");
        assert_eq!(store.stats().replaced, 2);
    }

    #[test]
    fn prepend_puts_new_record_first() {
        let store = RecordStore::new();
        store.replace(vec![row("1", "a")]);
        store.prepend(row("2", "new"));

        let snapshot = store.snapshot();
        assert_eq!(snapshot[0].id.as_str(), "2");
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn apply_replaces_by_id_last_write_wins() {
        let store = RecordStore::new();
        store.replace(vec![row("1", "old")]);

        store.apply(row("1", "first"));
        store.apply(row("1", "second"));

        assert_eq!(store.snapshot()[0].label, "second");
        assert_eq!(store.stats().applied, 2);
    }

    #[test]
    fn apply_ignores_unknown_id() {
        let store = RecordStore::new();
        store.replace(vec![row("1", "a")]);
        store.apply(row("9", "ghost"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().applied, 0);
    }

    #[test]
    fn remove_by_id() {
        let store = RecordStore::new();
        store.replace(vec![row("1", "a"), row("2", "b")]);
        store.remove(&RecordId::new("1"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].id.as_str(), "2");

        // Removing a missing id is a no-op
        store.remove(&RecordId::new("404"));
        assert_eq!(store.stats().removed, 1);
    }
}
