//! # Key-Value Storage
//!
//! Durable state is a small set of independently keyed records. The core
//! does not care what sits underneath beyond `get`/`set`/`remove` on opaque
//! bytes; every write is a whole-value replacement, never a partial update.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       KvStore Backends                              │
//! │                                                                     │
//! │  MemoryKv - BTreeMap; tests and throwaway sessions                  │
//! │                                                                     │
//! │  FileKv   - one file per key in a directory                         │
//! │             set() writes <dir>/.<key>.tmp then renames over the     │
//! │             target, so a failed write never corrupts the previous   │
//! │             value                                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Storage Keys
// =============================================================================

/// The fixed record keys. Names are kept from the original installation so
/// an existing data directory keeps working across upgrades.
pub mod keys {
    /// Business profile record.
    pub const BUSINESS: &str = "billing_app_business_setup";
    /// Serialized product catalog.
    pub const PRODUCTS: &str = "billing_app_products";
    /// Shared secret for the history/report gate.
    pub const SECRET: &str = "billing_app_secret_password";
    /// Serialized invoice ledger.
    pub const HISTORY: &str = "billing_app_history";
    /// Bill counter, stored as a plain integer string.
    pub const BILL_NO: &str = "billNo";

    /// Every key, for [`crate::BillingService::reset_all`].
    pub const ALL: [&str; 5] = [BUSINESS, PRODUCTS, SECRET, HISTORY, BILL_NO];
}

// =============================================================================
// KvStore Trait
// =============================================================================

/// The storage contract the repositories are written against.
pub trait KvStore {
    /// Reads the value under `key`; `None` when the key has never been set.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Replaces the value under `key` wholesale. A failed set must leave the
    /// previously persisted value intact.
    fn set(&mut self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Deletes the key. No-op when absent.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

// =============================================================================
// JSON Helpers
// =============================================================================

/// Reads and decodes a JSON record.
pub fn get_json<T: DeserializeOwned>(kv: &dyn KvStore, key: &str) -> StoreResult<Option<T>> {
    match kv.get(key)? {
        None => Ok(None),
        Some(bytes) => serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StoreError::corrupt(key, e)),
    }
}

/// Encodes and writes a JSON record (whole-value replacement).
pub fn set_json<T: Serialize>(kv: &mut dyn KvStore, key: &str, value: &T) -> StoreResult<()> {
    let bytes = serde_json::to_vec(value).map_err(|e| StoreError::write_failed(key, e))?;
    kv.set(key, &bytes)
}

// =============================================================================
// MemoryKv
// =============================================================================

/// In-memory backend for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryKv {
    map: BTreeMap<String, Vec<u8>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        MemoryKv::default()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> StoreResult<()> {
        self.map.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.map.remove(key);
        Ok(())
    }
}

// =============================================================================
// FileKv
// =============================================================================

/// File-backed store: one file per key under a data directory.
#[derive(Debug)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Opens (creating if needed) a data directory.
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .map_err(|e| StoreError::write_failed(dir.display().to_string(), e))?;
        debug!(dir = %dir.display(), "opened file store");
        Ok(FileKv { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KvStore for FileKv {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::read_failed(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> StoreResult<()> {
        // Stage next to the target so the rename stays on one filesystem.
        let tmp = self.dir.join(format!(".{}.tmp", key));
        fs::write(&tmp, value).map_err(|e| StoreError::write_failed(key, e))?;
        fs::rename(&tmp, self.path_for(key)).map_err(|e| StoreError::write_failed(key, e))?;
        debug!(key, bytes = value.len(), "wrote record");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::write_failed(key, e)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_kv_roundtrip() {
        let mut kv = MemoryKv::new();

        assert!(kv.get("missing").unwrap().is_none());

        kv.set("k", b"v1").unwrap();
        assert_eq!(kv.get("k").unwrap().unwrap(), b"v1");

        kv.set("k", b"v2").unwrap();
        assert_eq!(kv.get("k").unwrap().unwrap(), b"v2");

        kv.remove("k").unwrap();
        assert!(kv.get("k").unwrap().is_none());
        // removing again is a no-op
        kv.remove("k").unwrap();
    }

    #[test]
    fn test_file_kv_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut kv = FileKv::open(dir.path()).unwrap();

        assert!(kv.get(keys::BILL_NO).unwrap().is_none());

        kv.set(keys::BILL_NO, b"1226").unwrap();
        assert_eq!(kv.get(keys::BILL_NO).unwrap().unwrap(), b"1226");

        kv.remove(keys::BILL_NO).unwrap();
        assert!(kv.get(keys::BILL_NO).unwrap().is_none());
        kv.remove(keys::BILL_NO).unwrap();
    }

    #[test]
    fn test_file_kv_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut kv = FileKv::open(dir.path()).unwrap();
            kv.set("k", b"durable").unwrap();
        }
        let kv = FileKv::open(dir.path()).unwrap();
        assert_eq!(kv.get("k").unwrap().unwrap(), b"durable");
    }

    #[test]
    fn test_json_helpers() {
        let mut kv = MemoryKv::new();

        assert!(get_json::<Vec<String>>(&kv, "list").unwrap().is_none());

        set_json(&mut kv, "list", &vec!["a".to_string(), "b".to_string()]).unwrap();
        let back: Vec<String> = get_json(&kv, "list").unwrap().unwrap();
        assert_eq!(back, vec!["a", "b"]);
    }

    #[test]
    fn test_json_helper_reports_corrupt_values() {
        let mut kv = MemoryKv::new();
        kv.set("list", b"not json").unwrap();

        let err = get_json::<Vec<String>>(&kv, "list").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }
}
