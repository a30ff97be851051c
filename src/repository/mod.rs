//! Store adapter: typed access to a durable key-value medium
//!
//! Every collection lives under its own key as one JSON array and is
//! always written whole. A missing key means "never persisted".

pub mod file;
pub mod memory;

use std::fmt::Debug;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{AppError, AppResult};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage keys
pub mod keys {
    pub const EQUIPMENT: &str = "equipment";
    pub const RENTALS: &str = "rentals";
    pub const MAINTENANCE: &str = "maintenance";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const CURRENT_USER: &str = "currentUser";
    pub const THEME: &str = "theme";
    pub const FEEDBACK: &str = "feedback";
}

/// Raw string key-value medium.
///
/// Calls are synchronous and either fully succeed or return an error.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync + Debug + 'static {
    /// Read the value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Typed repository over a shared key-value backend
#[derive(Clone, Debug)]
pub struct Repository {
    backend: Arc<dyn KeyValueStore>,
}

impl Repository {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// In-memory repository, nothing survives the process
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Load a whole collection. `Ok(None)` when the key was never written;
    /// a stored value that does not parse is an error.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<Vec<T>>> {
        self.load_value(key)
    }

    /// Serialize and overwrite a whole collection
    pub fn save<T: Serialize>(&self, key: &str, records: &[T]) -> AppResult<()> {
        self.save_value(key, &records)
    }

    pub fn load_value<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.backend.get(key)? {
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|e| {
                AppError::Storage(format!("Stored value for key '{}' is corrupt: {}", key, e))
            }),
            None => Ok(None),
        }
    }

    pub fn save_value<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)?;
        tracing::debug!(key, bytes = raw.len(), "Persisted key");
        Ok(())
    }

    pub fn remove(&self, key: &str) -> AppResult<()> {
        self.backend.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Equipment, EquipmentCondition, EquipmentStatus};

    fn crane() -> Equipment {
        Equipment {
            id: "eq4".into(),
            name: "Crane".into(),
            category: "Heavy Machinery".into(),
            condition: EquipmentCondition::Excellent,
            status: EquipmentStatus::Available,
            description: None,
        }
    }

    #[test]
    fn test_load_missing_key_is_none() {
        let repository = Repository::in_memory();
        let loaded: Option<Vec<Equipment>> = repository.load(keys::EQUIPMENT).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load_returns_same_records() {
        let repository = Repository::in_memory();
        let records = vec![crane()];
        repository.save(keys::EQUIPMENT, &records).unwrap();
        let loaded: Vec<Equipment> = repository.load(keys::EQUIPMENT).unwrap().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_corrupt_value_is_an_error() {
        let mut backend = MockKeyValueStore::new();
        backend
            .expect_get()
            .returning(|_| Ok(Some("[{not json".to_string())));
        let repository = Repository::new(Arc::new(backend));
        let result: AppResult<Option<Vec<Equipment>>> = repository.load(keys::EQUIPMENT);
        assert!(matches!(result, Err(AppError::Storage(_))));
    }

    #[test]
    fn test_save_propagates_backend_failure() {
        let mut backend = MockKeyValueStore::new();
        backend
            .expect_set()
            .returning(|_, _| Err(AppError::Storage("read-only medium".into())));
        let repository = Repository::new(Arc::new(backend));
        assert!(repository.save(keys::EQUIPMENT, &[crane()]).is_err());
    }
}
