use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use coursedeck_common::CourseDeckError;

/// Local key/value persistence capability: get/set by string key.
pub trait KvStore: Send + Sync {
    /// Returns the stored value, or `None` if the key is absent or
    /// unreadable.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), CourseDeckError>;
}

/// File-backed store: one file per key under a data directory.
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileKv {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CourseDeckError> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| CourseDeckError::Persistence(format!("create {:?}: {e}", self.dir)))?;
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .map_err(|e| CourseDeckError::Persistence(format!("write {path:?}: {e}")))
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryKv {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Option<String> {
        self.map.lock().expect("kv lock poisoned").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CourseDeckError> {
        self.map
            .lock()
            .expect("kv lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_kv_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::new(dir.path());
        assert_eq!(kv.get("missing"), None);
        kv.set("sites", "[1,2,3]").unwrap();
        assert_eq!(kv.get("sites").as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn file_kv_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");
        let kv = FileKv::new(&nested);
        kv.set("k", "v").unwrap();
        assert_eq!(kv.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn memory_kv_overwrites() {
        let kv = MemoryKv::new();
        kv.set("k", "a").unwrap();
        kv.set("k", "b").unwrap();
        assert_eq!(kv.get("k").as_deref(), Some("b"));
    }
}
