//! State cache: persisted model snapshots keyed by an external identifier.
//!
//! Components use the cache once, at construction, to substitute a stored
//! model for the one they would otherwise start with. Saving is left to the
//! host. Nothing is ever merged: a snapshot replaces a model wholesale.

pub mod store;

pub use store::{CacheError, FileStore, MemoryStore, StateStore, file_name_for};

use crate::model::ComponentModel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, warn};

/// Format version written into every snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Stored form of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version.
    pub version: u32,
    /// When the snapshot was written.
    pub saved_at: DateTime<Utc>,
    /// The model.
    pub model: ComponentModel,
}

/// Cache handle bound to one key.
///
/// Cloning shares the underlying store.
#[derive(Clone)]
pub struct StateCache {
    key: String,
    store: Rc<dyn StateStore>,
}

impl fmt::Debug for StateCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCache").field("key", &self.key).finish()
    }
}

impl StateCache {
    /// Cache for `key` in `store`.
    pub fn new(key: impl Into<String>, store: Rc<dyn StateStore>) -> Self {
        Self {
            key: key.into(),
            store,
        }
    }

    /// Cache for `key` in the platform cache directory, falling back to an
    /// in-memory store when there is none.
    pub fn with_default_store(key: impl Into<String>) -> Self {
        let store: Rc<dyn StateStore> = match FileStore::default_location() {
            Some(files) => Rc::new(files),
            None => Rc::new(MemoryStore::new()),
        };
        Self::new(key, store)
    }

    /// Cache key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored model, if one exists and decodes.
    ///
    /// Store failures and undecodable snapshots are logged and reported as
    /// absence; a broken cache never prevents a component from being built.
    pub fn load(&self) -> Option<ComponentModel> {
        self.load_snapshot().map(|snapshot| snapshot.model)
    }

    /// Stored snapshot with its metadata.
    pub fn load_snapshot(&self) -> Option<Snapshot> {
        let bytes = match self.store.load(&self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = %self.key, error = %e, "State cache load failed");
                return None;
            }
        };

        match serde_json::from_slice::<Snapshot>(&bytes) {
            Ok(snapshot) if snapshot.version != SNAPSHOT_VERSION => {
                warn!(
                    key = %self.key,
                    version = snapshot.version,
                    expected = SNAPSHOT_VERSION,
                    "Discarding state snapshot with unsupported version"
                );
                None
            }
            Ok(snapshot) => {
                debug!(key = %self.key, saved_at = %snapshot.saved_at, "Loaded state snapshot");
                Some(snapshot)
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding undecodable state snapshot");
                None
            }
        }
    }

    /// Persist `model` under this key.
    pub fn save(&self, model: &ComponentModel) -> Result<(), CacheError> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            model: model.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&snapshot)?;
        self.store.save(&self.key, &bytes)?;
        debug!(key = %self.key, bytes = bytes.len(), "Saved state snapshot");
        Ok(())
    }

    /// True when a decodable snapshot exists.
    pub fn exists(&self) -> bool {
        self.load_snapshot().is_some()
    }

    /// Remove the stored snapshot.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComponentKind, Item};

    fn memory_cache(key: &str) -> (StateCache, Rc<MemoryStore>) {
        let store = Rc::new(MemoryStore::new());
        let cache = StateCache::new(key, store.clone());
        (cache, store)
    }

    #[test]
    fn load_returns_none_when_absent() {
        let (cache, _) = memory_cache("missing");
        assert_eq!(cache.load(), None);
        assert!(!cache.exists());
    }

    #[test]
    fn save_then_load_restores_model() {
        let (cache, _) = memory_cache("feed");
        let model =
            ComponentModel::new(ComponentKind::Grid).with_items(vec![Item::new("a"), Item::new("b")]);
        cache.save(&model).expect("save succeeds");
        assert_eq!(cache.load(), Some(model));
        assert!(cache.exists());
    }

    #[test]
    fn snapshot_from_another_version_is_absent() {
        let (cache, store) = memory_cache("future");
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION + 1,
            saved_at: Utc::now(),
            model: ComponentModel::new(ComponentKind::List).with_items(vec![Item::new("a")]),
        };
        let bytes = serde_json::to_vec(&snapshot).expect("encode snapshot");
        store.save("future", &bytes).expect("raw save");

        assert_eq!(cache.load(), None);
        assert!(!cache.exists());
    }

    #[test]
    fn undecodable_snapshot_is_absent() {
        let (cache, store) = memory_cache("broken");
        store.save("broken", b"not json").expect("raw save");
        assert_eq!(cache.load(), None);
    }

    #[test]
    fn snapshot_records_version() {
        let (cache, _) = memory_cache("versioned");
        cache
            .save(&ComponentModel::new(ComponentKind::List))
            .expect("save succeeds");
        let snapshot = cache.load_snapshot().expect("snapshot present");
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
    }

    #[test]
    fn clear_removes_snapshot() {
        let (cache, store) = memory_cache("gone");
        cache
            .save(&ComponentModel::new(ComponentKind::List))
            .expect("save succeeds");
        cache.clear().expect("clear succeeds");
        assert!(store.is_empty());
    }

    #[test]
    fn debug_shows_key_only() {
        let (cache, _) = memory_cache("debug-key");
        assert_eq!(format!("{cache:?}"), r#"StateCache { key: "debug-key" }"#);
    }
}
