use super::bootstrap::millis;
use super::{KvStore, Readiness};
use crate::error::{CricketError, Result};
use serde_json::{Map, Value};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// A key-value store kept as a single JSON object on disk.
///
/// Writers hold `<file>.lock` from the read to the rename, so concurrent
/// updates do not lose each other's changes. Readers treat a present lock as
/// "not ready yet".
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

/// Removes the lock file when dropped.
struct LockGuard {
    path: PathBuf,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if let Err(error) = fs::remove_file(&self.path) {
            debug!(path = %self.path.display(), %error, "failed to release store lock");
        }
    }
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(suffix);
        self.path.with_file_name(name)
    }

    pub fn lock_path(&self) -> PathBuf {
        self.sibling(".lock")
    }

    pub(crate) fn unavailable(&self, waited: Duration) -> CricketError {
        CricketError::StoreUnavailable {
            path: self.path.display().to_string(),
            waited_ms: millis(waited),
        }
    }

    fn read_all(&self) -> Result<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(error) => return Err(CricketError::Io(error)),
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(CricketError::StoreCorrupt(format!(
                "{}: expected a JSON object",
                self.path.display()
            ))),
            Err(error) => Err(CricketError::StoreCorrupt(format!(
                "{}: {error}",
                self.path.display()
            ))),
        }
    }

    fn acquire_lock(&self) -> Result<LockGuard> {
        let lock_path = self.lock_path();
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&lock_path)
        {
            Ok(_) => Ok(LockGuard { path: lock_path }),
            Err(error) if error.kind() == ErrorKind::AlreadyExists => {
                Err(self.unavailable(Duration::ZERO))
            }
            Err(error) => Err(CricketError::Io(error)),
        }
    }
}

impl Readiness for FileStore {
    fn is_ready(&self) -> bool {
        !self.lock_path().exists()
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let mut values = self.read_all()?;
        Ok(values.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.update(key, |_| Ok(Some(value)))
    }

    fn update<F>(&mut self, key: &str, apply: F) -> Result<()>
    where
        F: FnOnce(Option<Value>) -> Result<Option<Value>>,
    {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let _lock = self.acquire_lock()?;
        let mut values = self.read_all()?;
        let Some(value) = apply(values.remove(key))? else {
            debug!(path = %self.path.display(), key, "update left store unchanged");
            return Ok(());
        };
        values.insert(key.to_string(), value);

        let staging = self.sibling(".tmp");
        fs::write(&staging, serde_json::to_string_pretty(&Value::Object(values))?)?;
        fs::rename(&staging, &self.path)?;
        info!(path = %self.path.display(), key, "store updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().expect("temp dir should be created");
        let store = FileStore::new(dir.path().join("store.json"));
        assert!(store.get("anything").expect("read should succeed").is_none());
        assert!(store.is_ready());
    }

    #[test]
    fn set_then_get_keeps_other_keys() {
        let dir = TempDir::new().expect("temp dir should be created");
        let mut store = FileStore::new(dir.path().join("nested/store.json"));
        store.set("a", json!([1, 2])).expect("first write should succeed");
        store.set("b", json!({"x": 1})).expect("second write should succeed");

        assert_eq!(store.get("a").expect("read a"), Some(json!([1, 2])));
        assert_eq!(store.get("b").expect("read b"), Some(json!({"x": 1})));
        assert!(!store.lock_path().exists(), "lock should be released");
    }

    #[test]
    fn update_holds_the_lock_while_applying() {
        let dir = TempDir::new().expect("temp dir should be created");
        let mut store = FileStore::new(dir.path().join("store.json"));
        store.set("count", json!(1)).expect("seed should succeed");

        let lock_path = store.lock_path();
        store
            .update("count", |current| {
                assert!(lock_path.exists(), "lock should be held during apply");
                let count = current.and_then(|value| value.as_u64()).unwrap_or(0);
                Ok(Some(json!(count + 1)))
            })
            .expect("update should succeed");

        assert_eq!(store.get("count").expect("read count"), Some(json!(2)));
        assert!(!store.lock_path().exists(), "lock should be released");
    }

    #[test]
    fn update_without_change_writes_nothing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let mut store = FileStore::new(dir.path().join("store.json"));
        store
            .update("a", |current| {
                assert!(current.is_none());
                Ok(None)
            })
            .expect("update should succeed");

        assert!(!store.path().exists());
        assert!(!store.lock_path().exists());
    }

    #[test]
    fn non_object_file_is_corrupt() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("store.json");
        fs::write(&path, "[1, 2, 3]").expect("store file should write");

        let store = FileStore::new(path);
        assert!(matches!(store.get("a"), Err(CricketError::StoreCorrupt(_))));
    }

    #[test]
    fn held_lock_blocks_writes_and_readiness() {
        let dir = TempDir::new().expect("temp dir should be created");
        let mut store = FileStore::new(dir.path().join("store.json"));
        fs::write(store.lock_path(), "").expect("lock should write");

        assert!(!store.is_ready());
        assert!(matches!(
            store.set("a", json!(1)),
            Err(CricketError::StoreUnavailable { .. })
        ));
        assert!(store.lock_path().exists(), "foreign lock must be left alone");
    }
}
