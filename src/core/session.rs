//! Session record and its durable mirror
//!
//! The backend owns the shape of the user record, so `Session` keeps it as a
//! raw JSON object and only offers read accessors for the few fields the UI
//! displays.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::Mutex;

/// Storage key holding the serialized session
pub const SESSION_STORAGE_KEY: &str = "user-threads";

/// Authenticated-user record returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session(Map<String, Value>);

impl Session {
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// String value of a top-level field, if present
    pub fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn username(&self) -> Option<&str> {
        self.field("username")
    }

    pub fn name(&self) -> Option<&str> {
        self.field("name")
    }
}

/// Errors from the key-value storage backing the session
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,

    #[error("Failed to write storage: {0}")]
    Write(String),

    #[error("Failed to read storage: {0}")]
    Read(String),

    #[error("Stored session is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Synchronous string key-value storage (browser `localStorage` shape)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self
            .items
            .lock()
            .map_err(|e| StorageError::Read(e.to_string()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?;
        items.remove(key);
        Ok(())
    }
}

/// Reads and writes the session under [`SESSION_STORAGE_KEY`]
#[derive(Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let json = serde_json::to_string(session)?;
        self.storage.set_item(SESSION_STORAGE_KEY, &json)
    }

    /// Load the persisted session; `Ok(None)` when nothing is stored
    pub fn load(&self) -> Result<Option<Session>, StorageError> {
        match self.storage.get_item(SESSION_STORAGE_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(SESSION_STORAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session() -> Session {
        serde_json::from_value(json!({
            "name": "a",
            "username": "b",
            "email": "c@d.com",
            "_id": "1"
        }))
        .unwrap()
    }

    #[test]
    fn test_session_accessors() {
        let session = session();
        assert_eq!(session.field("_id"), Some("1"));
        assert_eq!(session.username(), Some("b"));
        assert_eq!(session.name(), Some("a"));
        assert_eq!(session.field("missing"), None);
    }

    #[test]
    fn test_session_keeps_unknown_fields() {
        let session: Session =
            serde_json::from_value(json!({"_id": "9", "followers": [1, 2]})).unwrap();
        assert_eq!(session.field("followers"), None);
        assert_eq!(
            serde_json::to_value(&session).unwrap(),
            json!({"_id": "9", "followers": [1, 2]})
        );
    }

    #[test]
    fn test_save_writes_exact_json_under_fixed_key() {
        let store = SessionStore::new(MemoryStore::new());
        store.save(&session()).unwrap();

        let raw = store
            .storage()
            .get_item(SESSION_STORAGE_KEY)
            .unwrap()
            .unwrap();
        assert_eq!(raw, r#"{"name":"a","username":"b","email":"c@d.com","_id":"1"}"#);
    }

    #[test]
    fn test_load_round_trips_saved_session() {
        let store = SessionStore::new(MemoryStore::new());
        assert!(store.load().unwrap().is_none());

        store.save(&session()).unwrap();
        assert_eq!(store.load().unwrap(), Some(session()));
    }

    #[test]
    fn test_load_reports_corrupt_entry() {
        let store = SessionStore::new(MemoryStore::new());
        store
            .storage()
            .set_item(SESSION_STORAGE_KEY, "{not json")
            .unwrap();

        assert!(matches!(store.load(), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_clear_removes_session() {
        let store = SessionStore::new(MemoryStore::new());
        store.save(&session()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
