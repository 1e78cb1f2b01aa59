use crate::persistence::files::{atomic_write, read_if_exists};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read key `{key}`")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write key `{key}`")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid storage key `{0}`")]
    InvalidKey(String),
}

/// Minimal key-value durability: whole-value get and set, no transactions
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, PersistenceError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(PersistenceError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.path_for(key)?;
        read_if_exists(&path).map_err(|source| PersistenceError::Read {
            key: key.to_string(),
            source,
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;
        atomic_write(&path, value).map_err(|source| PersistenceError::Write {
            key: key.to_string(),
            source,
        })
    }
}

/// In-process store with switchable failures, for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn values_mut(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock leaves the map intact
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(PersistenceError::Read {
                key: key.to_string(),
                source: io::Error::new(io::ErrorKind::Other, "injected read failure"),
            });
        }
        Ok(self.values_mut().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Write {
                key: key.to_string(),
                source: io::Error::new(io::ErrorKind::Other, "injected write failure"),
            });
        }
        self.values_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
