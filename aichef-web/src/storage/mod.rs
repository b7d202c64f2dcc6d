//! Centralized storage module for localStorage operations.

pub mod favorites;
pub mod profile;

use gloo_storage::{LocalStorage, Storage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

// Storage keys
pub const STORAGE_USERNAME: &str = "aichef_username";
pub const STORAGE_SAVED_USERS: &str = "aichef_saved_users";
pub const STORAGE_FAVORITES: &str = "aichef_favorites";
pub const STORAGE_SAVED_RECIPES: &str = "aichef_saved_recipes";

/// String-keyed store of JSON blobs.
///
/// Reads are permissive: a missing or malformed value reads as `None` so
/// callers fall back to an empty default. Writes never fail loudly.
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Option<String>;
    fn set_raw(&self, key: &str, value: &str);

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let Some(raw) = self.get_raw(key) else {
            debug!(key, "No stored value");
            return None;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Ignoring malformed stored value");
                None
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set_raw(key, &raw),
            Err(e) => warn!(key, error = %e, "Failed to encode value for storage"),
        }
    }
}

/// The browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_raw(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            warn!(key, error = ?e, "localStorage write rejected");
        }
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::KeyValueStore;

    /// In-process store standing in for `localStorage` in tests.
    #[derive(Debug, Default)]
    pub(crate) struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get_raw(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set_raw(&self, key: &str, value: &str) {
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_reads_as_none() {
        let store = MemoryStore::default();
        assert_eq!(store.load::<Vec<String>>(STORAGE_FAVORITES), None);
    }

    #[test]
    fn test_malformed_value_reads_as_none() {
        let store = MemoryStore::default();
        store.set_raw(STORAGE_FAVORITES, "{not json");
        assert_eq!(store.load::<Vec<String>>(STORAGE_FAVORITES), None);
    }

    #[test]
    fn test_wrong_shape_reads_as_none() {
        let store = MemoryStore::default();
        store.set_raw(STORAGE_FAVORITES, r#"{"a":1}"#);
        assert_eq!(store.load::<Vec<String>>(STORAGE_FAVORITES), None);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::default();
        store.save(STORAGE_SAVED_USERS, &["Dad", "Ann"]);
        assert_eq!(store.get_raw(STORAGE_SAVED_USERS).unwrap(), r#"["Dad","Ann"]"#);
        let users: Vec<String> = store.load(STORAGE_SAVED_USERS).unwrap();
        assert_eq!(users, vec!["Dad", "Ann"]);
    }
}
