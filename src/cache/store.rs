//! Byte stores backing the state cache.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from a state store.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Filesystem failure.
    #[error("State store IO error at {path:?}: {source}")]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The model could not be encoded.
    #[error("Failed to encode state snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Opaque key/value persistence.
///
/// Stores know nothing about the payload; the cache owns the format.
pub trait StateStore {
    /// Bytes stored under `key`, or `None` when absent.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store `bytes` under `key`, replacing earlier contents.
    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), CacheError>;

    /// Forget `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), CacheError>;
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// Store rooted at `directory`. The directory is created on first save.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Store in the platform cache directory (`~/.cache/listkit/state` on
    /// Linux), or `None` when the platform has no cache directory.
    pub fn default_location() -> Option<Self> {
        default_cache_dir().map(Self::new)
    }

    /// Root directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.directory.join(file_name_for(key))
    }
}

/// Platform cache directory for state snapshots.
pub fn default_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("listkit").join("state"))
}

/// File name for a cache key.
///
/// Alphanumerics, `-` and `_` are kept; everything else becomes `_`.
pub fn file_name_for(key: &str) -> String {
    let stem: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "_".to_string() } else { stem };
    format!("{stem}.json")
}

impl StateStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let path = self.path_for(key);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(CacheError::Io { path, source }),
        }
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), CacheError> {
        std::fs::create_dir_all(&self.directory).map_err(|source| CacheError::Io {
            path: self.directory.clone(),
            source,
        })?;
        let path = self.path_for(key);
        std::fs::write(&path, bytes).map_err(|source| CacheError::Io { path, source })
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CacheError::Io { path, source }),
        }
    }
}

/// In-memory store, used by tests and hosts without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), CacheError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
