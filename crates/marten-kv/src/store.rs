//! Storage capabilities backing the shim
//!
//! [`Storage`] is the host-provided key/value surface the shim dispatches
//! onto. [`LocalStore`] persists through redb (pure Rust, no FFI);
//! [`MemoryStore`] keeps everything in process memory.

use crate::error::{StoreError, StoreResult};
use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Minimal key/value surface the shim requires from its host storage.
pub trait Storage: Send + Sync {
    /// Get the value for a key, if present.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Set the value for a key, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

// Table definition for the local store
const TABLE: TableDefinition<&str, &str> = TableDefinition::new("data");

/// Persistent local store backed by redb
pub struct LocalStore {
    db: Database,
}

impl LocalStore {
    /// Open or create a local store at the given path, creating parent
    /// directories as needed.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StoreError::InvalidPath(e.to_string()))?;
            }
        }
        let db = Database::create(path).map_err(|e| StoreError::Database(e.to_string()))?;

        // Initialize the table so first reads see it
        {
            let write_txn = db
                .begin_write()
                .map_err(|e| StoreError::Database(e.to_string()))?;
            {
                let _ = write_txn.open_table(TABLE);
            }
            write_txn
                .commit()
                .map_err(|e| StoreError::Database(e.to_string()))?;
        }

        debug!(path = %path.display(), "opened local store");
        Ok(Self { db })
    }
}

impl Storage for LocalStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        let table = read_txn
            .open_table(TABLE)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        match table.get(key) {
            Ok(Some(guard)) => Ok(Some(guard.value().to_string())),
            Ok(None) => Ok(None),
            Err(e) => Err(StoreError::Database(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(TABLE)
                .map_err(|e| StoreError::Database(e.to_string()))?;
            table
                .insert(key, value)
                .map_err(|e| StoreError::Database(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(TABLE)
                .map_err(|e| StoreError::Database(e.to_string()))?;
            let _ = table
                .remove(key)
                .map_err(|e| StoreError::Database(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }
}

/// In-memory store, used by tests and ephemeral development runs
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.data.write().remove(key);
        Ok(())
    }
}
