//! # Generic In-Memory Store
//!
//! Thread-safe, cloneable in-memory key-value store backing every
//! registry in the stack (controls, evidence metadata, test runs,
//! workpapers). The registries are process-lifetime state with no
//! crash-recovery contract; durability lives elsewhere (evidence blobs
//! are written to disk by their owning store).
//!
//! All operations are synchronous. The RwLock is `parking_lot`, which is
//! non-poisonable — a panicking writer does not permanently corrupt the
//! store. Insert, lookup, and delete each hold the lock for the whole
//! operation, so they are atomic as a unit.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

/// Thread-safe in-memory map keyed by UUID.
///
/// Clone-friendly: clones share the same underlying map.
#[derive(Debug)]
pub struct Store<T: Clone + Send + Sync> {
    data: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T: Clone + Send + Sync> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T: Clone + Send + Sync> Store<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a record, returning the previous value if the key existed.
    pub fn insert(&self, id: Uuid, value: T) -> Option<T> {
        self.data.write().insert(id, value)
    }

    /// Retrieve a record by ID.
    pub fn get(&self, id: &Uuid) -> Option<T> {
        self.data.read().get(id).cloned()
    }

    /// List all records.
    pub fn list(&self) -> Vec<T> {
        self.data.read().values().cloned().collect()
    }

    /// Remove a record by ID, returning it if present.
    pub fn remove(&self, id: &Uuid) -> Option<T> {
        self.data.write().remove(id)
    }

    /// Check if a record exists.
    pub fn contains(&self, id: &Uuid) -> bool {
        self.data.read().contains_key(id)
    }

    /// Return the number of records.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone + Send + Sync> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_new_creates_empty_store() {
        let store: Store<String> = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn store_insert_and_get_roundtrip() {
        let store = Store::new();
        let id = Uuid::new_v4();

        let prev = store.insert(id, "first".to_string());
        assert!(prev.is_none(), "first insert should return None");

        assert_eq!(store.get(&id).as_deref(), Some("first"));
    }

    #[test]
    fn store_insert_returns_previous_value() {
        let store = Store::new();
        let id = Uuid::new_v4();

        store.insert(id, "first".to_string());
        let prev = store.insert(id, "second".to_string());
        assert_eq!(prev.as_deref(), Some("first"));
    }

    #[test]
    fn store_list_returns_all_items() {
        let store = Store::new();
        for i in 0..3 {
            store.insert(Uuid::new_v4(), format!("item-{i}"));
        }
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn store_remove_deletes_item() {
        let store = Store::new();
        let id = Uuid::new_v4();
        store.insert(id, "value".to_string());

        let removed = store.remove(&id);
        assert_eq!(removed.as_deref(), Some("value"));
        assert!(store.is_empty());
        assert!(store.get(&id).is_none());
    }

    #[test]
    fn store_remove_returns_none_for_missing_key() {
        let store: Store<String> = Store::new();
        assert!(store.remove(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn store_contains_checks_existence() {
        let store = Store::new();
        let id = Uuid::new_v4();
        assert!(!store.contains(&id));

        store.insert(id, "value".to_string());
        assert!(store.contains(&id));

        store.remove(&id);
        assert!(!store.contains(&id));
    }

    #[test]
    fn store_clone_shares_underlying_data() {
        let store = Store::new();
        let id = Uuid::new_v4();
        store.insert(id, "value".to_string());

        let clone = store.clone();
        assert!(clone.contains(&id));

        // Mutations through the clone are visible from the original.
        let id2 = Uuid::new_v4();
        clone.insert(id2, "other".to_string());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn store_default_is_empty() {
        let store: Store<u32> = Store::default();
        assert!(store.is_empty());
    }
}
