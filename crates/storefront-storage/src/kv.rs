//! Key-value store with automatic JSON serialization.

use crate::StorageError;
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe store backed by the browser's `localStorage`.
///
/// Values are JSON-encoded, so any `Serialize + DeserializeOwned` type works.
/// On non-wasm targets the store is backed by a process-wide in-memory map so
/// persistence logic can be exercised in native tests.
pub struct Store {
    #[cfg(target_arch = "wasm32")]
    storage: web_sys::Storage,
    #[cfg(not(target_arch = "wasm32"))]
    _phantom: std::marker::PhantomData<()>,
}

impl Store {
    /// Open the window's local storage.
    ///
    /// Fails when there is no window or storage access is denied (private
    /// browsing modes, storage disabled by policy).
    #[cfg(target_arch = "wasm32")]
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }

    /// Get a value. Returns `None` if the key doesn't exist.
    #[cfg(target_arch = "wasm32")]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let raw = self
            .storage
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Set a value, replacing any previous value under the key.
    #[cfg(target_arch = "wasm32")]
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.storage
            .set_item(key, &json)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    /// Delete a key. Deleting an absent key is not an error.
    #[cfg(target_arch = "wasm32")]
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    /// Check whether a key exists.
    #[cfg(target_arch = "wasm32")]
    pub fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self
            .storage
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?
            .is_some())
    }

    // In-memory backend for native targets.

    #[cfg(not(target_arch = "wasm32"))]
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            _phantom: std::marker::PhantomData,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match native::map().get(key) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        native::map().insert(key.to_string(), json);
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        native::map().remove(key);
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(native::map().contains_key(key))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::HashMap;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    static MAP: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();

    pub fn map() -> MutexGuard<'static, HashMap<String, String>> {
        MAP.get_or_init(|| Mutex::new(HashMap::new()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Line {
        id: u64,
        quantity: i64,
    }

    #[test]
    fn test_round_trip() {
        let store = Store::open().unwrap();
        let lines = vec![
            Line { id: 1, quantity: 2 },
            Line { id: 7, quantity: 1 },
        ];

        store.set("test:round-trip", &lines).unwrap();
        let loaded: Option<Vec<Line>> = store.get("test:round-trip").unwrap();
        assert_eq!(loaded, Some(lines));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = Store::open().unwrap();
        let value: Option<Vec<Line>> = store.get("test:missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_malformed_value_is_error() {
        let store = Store::open().unwrap();
        store.set("test:malformed", &"not an array").unwrap();
        let result: Result<Option<Vec<Line>>, _> = store.get("test:malformed");
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_delete_and_exists() {
        let store = Store::open().unwrap();
        store.set("test:delete", &Line { id: 1, quantity: 1 }).unwrap();
        assert!(store.exists("test:delete").unwrap());

        store.delete("test:delete").unwrap();
        assert!(!store.exists("test:delete").unwrap());
        // Deleting again is a no-op.
        store.delete("test:delete").unwrap();
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let store = Store::open().unwrap();
        store.set("test:replace", &Line { id: 1, quantity: 1 }).unwrap();
        store.set("test:replace", &Line { id: 1, quantity: 5 }).unwrap();
        let loaded: Option<Line> = store.get("test:replace").unwrap();
        assert_eq!(loaded.unwrap().quantity, 5);
    }
}
