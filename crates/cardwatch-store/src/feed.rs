//! Feed store — the sole de-duplication authority.
//!
//! The extractor is pure and gets called redundantly on the same post
//! across poll cycles; this store decides what is kept. Only the
//! first successful extraction per id is retained, even when a later
//! extraction of the same id differs (a card can re-render with
//! updated counters). Entries live for the process lifetime and are
//! never updated or deleted.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use cardwatch_extract::PostRecord;

#[derive(Default)]
struct FeedStoreInner {
    /// Records in first-sighting order.
    records: Vec<PostRecord>,
    /// Post id → slot in `records`.
    by_id: HashMap<String, usize>,
}

/// Insertion-ordered, de-duplicating store of post records.
///
/// Explicitly constructed and owned by the harness; there is no
/// ambient instance. The single lock makes check-then-insert atomic,
/// so at-most-once-per-id holds even off the polling task.
#[derive(Default)]
pub struct FeedStore {
    inner: RwLock<FeedStoreInner>,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a record with this id has already been seen.
    pub fn has(&self, id: &str) -> bool {
        self.inner.read().by_id.contains_key(id)
    }

    /// Insert the record unless its id has been seen before.
    ///
    /// Returns true when the record was newly inserted.
    pub fn insert_if_absent(&self, record: PostRecord) -> bool {
        let mut inner = self.inner.write();
        if inner.by_id.contains_key(&record.id) {
            debug!(id = %record.id, "record already seen, discarding");
            return false;
        }
        let slot = inner.records.len();
        inner.by_id.insert(record.id.clone(), slot);
        inner.records.push(record);
        true
    }

    /// Get a record by id.
    pub fn get(&self, id: &str) -> Option<PostRecord> {
        let inner = self.inner.read();
        inner.by_id.get(id).map(|&slot| inner.records[slot].clone())
    }

    /// All records, in first-sighting order.
    pub fn enumerate(&self) -> Vec<PostRecord> {
        self.inner.read().records.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }
}
