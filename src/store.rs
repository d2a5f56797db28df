/// Review persistence over a single named storage slot.
/// Every mutation reads the whole collection, edits it, and writes it back.
use crate::models::review::{Review, ReviewId};
use leptos::logging::{log, warn};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage is not available: {0}")]
    Unavailable(String),

    #[error("stored reviews could not be parsed: {0}")]
    Corrupt(String),

    #[error("storage rejected the write: {0}")]
    Write(String),

    #[error("failed to serialize reviews: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A string key/value slot such as the browser's `localStorage`.
pub trait StorageSlot {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: StorageSlot + ?Sized> StorageSlot for Box<T> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

/// In-process slot, used natively and whenever the browser has no storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageSlot for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{StorageSlot, StoreError};

    /// `window.localStorage`.
    pub struct LocalStorage {
        storage: web_sys::Storage,
    }

    impl LocalStorage {
        pub fn open() -> Result<Self, StoreError> {
            let storage = gloo_utils::window()
                .local_storage()
                .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
                .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".into()))?;
            Ok(Self { storage })
        }
    }

    impl StorageSlot for LocalStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.storage
                .get_item(key)
                .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.storage
                .set_item(key, value)
                .map_err(|e| StoreError::Write(format!("{:?}", e)))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::LocalStorage;

/// Picks `localStorage` in the browser, memory everywhere else.
pub fn default_slot() -> Box<dyn StorageSlot> {
    #[cfg(target_arch = "wasm32")]
    {
        match LocalStorage::open() {
            Ok(storage) => return Box::new(storage),
            Err(err) => warn!("[STORE] Falling back to memory storage: {}", err),
        }
    }
    Box::new(MemoryStorage::new())
}

pub struct ReviewStore<S> {
    slot: S,
    key: String,
}

impl<S: StorageSlot> ReviewStore<S> {
    pub fn new(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    // Unreadable or corrupt data counts as an empty store.
    pub fn load(&self) -> Vec<Review> {
        self.read_all().unwrap_or_else(|err| {
            warn!("[STORE] Treating '{}' as empty: {}", self.key, err);
            Vec::new()
        })
    }

    /// Strict read used before every write, so a payload that cannot be
    /// parsed is never replaced by a smaller collection.
    pub fn read_all(&self) -> Result<Vec<Review>, StoreError> {
        match self.slot.read(&self.key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    pub fn append(&self, review: Review) -> Result<(), StoreError> {
        let mut reviews = self.read_all()?;
        log!("[STORE] Appending review {} ({} stored)", review.id, reviews.len());
        reviews.push(review);
        self.save(&reviews)
    }

    /// Removing an id that is not stored leaves the slot untouched.
    pub fn remove(&self, id: ReviewId) -> Result<(), StoreError> {
        let mut reviews = self.read_all()?;
        let before = reviews.len();
        reviews.retain(|review| review.id != id);
        if reviews.len() == before {
            log!("[STORE] Review {} not found, nothing to remove", id);
            return Ok(());
        }
        log!("[STORE] Removed {} review(s) with id {}", before - reviews.len(), id);
        self.save(&reviews)
    }

    // Records are re-serialized: date text is normalized and unknown fields are dropped.
    fn save(&self, reviews: &[Review]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(reviews)?;
        self.slot.write(&self.key, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::Rating;
    use chrono::{TimeZone, Utc};

    const KEY: &str = "projectRatings";

    fn review(id: ReviewId, rating: u8) -> Review {
        Review {
            id,
            rating: Rating::new(rating).unwrap(),
            name: format!("user {}", id),
            email: String::new(),
            comment: "ok".into(),
            date: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    fn store() -> ReviewStore<MemoryStorage> {
        ReviewStore::new(MemoryStorage::new(), KEY)
    }

    #[test]
    fn empty_slot_loads_nothing() {
        assert!(store().load().is_empty());
    }

    #[test]
    fn appends_come_back_in_order() {
        let store = store();
        for id in [3, 1, 2] {
            store.append(review(id, 4)).unwrap();
        }
        let ids: Vec<_> = store.load().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn remove_drops_every_match() {
        let store = store();
        store.append(review(1, 5)).unwrap();
        store.append(review(2, 3)).unwrap();
        store.append(review(1, 2)).unwrap();

        store.remove(1).unwrap();
        let left = store.load();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, 2);
    }

    #[test]
    fn removing_unknown_id_keeps_bytes() {
        let store = store();
        let raw = r#"[{"id":7,"rating":5,"name":"a","email":"","comment":"","date":"2024-01-01T00:00:00.000Z"}]"#;
        store.slot().write(KEY, raw).unwrap();

        store.remove(99).unwrap();
        assert_eq!(store.slot().read(KEY).unwrap().as_deref(), Some(raw));
    }

    #[test]
    fn corrupt_payload_reads_as_empty() {
        let store = store();
        store.slot().write(KEY, "{not json").unwrap();
        assert!(store.load().is_empty());

        store.slot().write(KEY, r#"[{"id":1,"rating":0}]"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn append_over_invalid_record_keeps_payload() {
        let store = store();
        let raw = r#"[{"id":1,"rating":5,"name":"keep","email":"","comment":"","date":"2024-01-01T00:00:00.000Z"},{"id":2,"rating":6,"name":"bad","email":"","comment":"","date":"2024-01-02T00:00:00.000Z"}]"#;
        store.slot().write(KEY, raw).unwrap();

        let err = store.append(review(3, 4)).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
        let err = store.remove(1).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));

        assert_eq!(store.slot().read(KEY).unwrap().as_deref(), Some(raw));
        assert!(store.load().is_empty());
    }

    #[test]
    fn rewrite_normalizes_stored_records() {
        let store = store();
        let raw = r#"[{"id":1,"rating":5,"name":"a","email":"","comment":"","date":"2024-01-01T00:00:00.000Z","extra":true},{"id":2,"rating":3,"name":"b","email":"","comment":"","date":"2024-01-02T00:00:00.000Z"}]"#;
        store.slot().write(KEY, raw).unwrap();

        store.remove(2).unwrap();
        let rewritten = store.slot().read(KEY).unwrap().unwrap();
        assert!(!rewritten.contains("extra"));
        assert!(rewritten.contains(r#""date":"2024-01-01T00:00:00Z""#));
        assert_eq!(store.load().len(), 1);
    }

    struct ReadOnly;

    impl StorageSlot for ReadOnly {
        fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write("quota exceeded".into()))
        }
    }

    #[test]
    fn write_failures_surface_from_append() {
        let store = ReviewStore::new(ReadOnly, KEY);
        let err = store.append(review(1, 1)).unwrap_err();
        assert!(matches!(err, StoreError::Write(_)));
    }
}
