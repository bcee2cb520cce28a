//! Key-value persistence for the high-score record.
//!
//! The simulation only needs `get`/`set` by string key. `MemoryStore` backs
//! tests and headless runs; `JsonFileStore` keeps the values in a small
//! JSON object on disk.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Failure reported by a store write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Io { path: PathBuf, message: String },
    Serialize(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "failed to write {}: {message}", path.display())
            }
            Self::Serialize(message) => write!(f, "failed to serialize store: {message}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Persistent key-value store of numeric records.
pub trait ScoreStore {
    /// `None` when no value has ever been written for `key`.
    fn get(&self, key: &str) -> Option<u64>;
    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError>;
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one record.
    pub fn with_value(key: &str, value: u64) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value);
        store
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store persisted as a flat JSON object (`{"key": 12}`). Every `set`
/// rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, u64>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or malformed one is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<BTreeMap<String, u64>>(&json) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!("Ignoring malformed store {}: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::warn!("Cannot read store {}: {e}", path.display());
                BTreeMap::new()
            }
        };
        log::info!("Opened score store {} ({} records)", path.display(), values.len());
        Self { path, values }
    }

    fn flush(&self) -> Result<(), StoreError> {
        let io_err = |e: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            message: e.to_string(),
        };
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(&self.values)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        fs::write(&self.path, json).map_err(io_err)
    }
}

impl ScoreStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }
}
