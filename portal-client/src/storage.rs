//! Key-value persistent storage
//!
//! The portal keeps its collections the way a browser keeps local storage:
//! each key maps to one serialized string value. [`FileStorage`] stores all
//! keys in a single JSON object file next to `config.json`.

use std::collections::{BTreeMap, HashMap};
use std::fs;
#[cfg(unix)]
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

/// File permissions for the storage file on Unix (owner read/write only)
#[cfg(unix)]
const STORAGE_FILE_MODE: u32 = 0o600;

/// Errors raised by a storage backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    Poisoned,
}

/// A string key-value store
///
/// Reads of a missing key return `Ok(None)`. Writes replace the whole value.
pub trait Storage: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// All keys in one JSON object file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Set storage file permissions to owner read/write only on Unix systems
    #[cfg(unix)]
    fn set_permissions(path: &Path) -> Result<(), StorageError> {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(STORAGE_FILE_MODE);
        fs::set_permissions(path, perms)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Malformed contents are replaced, never merged
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StorageError::Malformed(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Discarding malformed storage file"
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;

        #[cfg(unix)]
        Self::set_permissions(&self.path)?;

        Ok(())
    }
}

/// Process-local storage, used when no config directory is available
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STORAGE_FILE_NAME;
    use tempfile::TempDir;

    fn storage_file(dir: &TempDir) -> PathBuf {
        dir.path().join("nested").join(STORAGE_FILE_NAME)
    }

    fn file_storage(dir: &TempDir) -> FileStorage {
        FileStorage::new(storage_file(dir))
    }

    #[test]
    fn test_file_storage_missing_file_reads_none() {
        let dir = TempDir::new().expect("temp dir");
        let storage = file_storage(&dir);
        assert!(storage.read("anything").expect("read").is_none());
    }

    #[test]
    fn test_file_storage_write_then_read() {
        let dir = TempDir::new().expect("temp dir");
        let storage = file_storage(&dir);

        storage.write("a", "[1,2]").expect("write a");
        storage.write("b", "{}").expect("write b");
        storage.write("a", "[3]").expect("overwrite a");

        assert_eq!(storage.read("a").expect("read").as_deref(), Some("[3]"));
        assert_eq!(storage.read("b").expect("read").as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_storage_malformed_file_is_error_on_read() {
        let dir = TempDir::new().expect("temp dir");
        let path = storage_file(&dir);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(&path, "not json").expect("write garbage");
        let storage = FileStorage::new(path);

        assert!(matches!(
            storage.read("a"),
            Err(StorageError::Malformed(_))
        ));
    }

    #[test]
    fn test_file_storage_write_replaces_malformed_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = storage_file(&dir);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(&path, "{{{").expect("write garbage");
        let storage = FileStorage::new(path);

        storage.write("a", "[]").expect("write");
        assert_eq!(storage.read("a").expect("read").as_deref(), Some("[]"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_storage_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().expect("temp dir");
        let storage = file_storage(&dir);
        storage.write("a", "[]").expect("write");

        let mode = fs::metadata(storage_file(&dir))
            .expect("metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, STORAGE_FILE_MODE);
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert!(storage.read("k").expect("read").is_none());
        storage.write("k", "v").expect("write");
        assert_eq!(storage.read("k").expect("read").as_deref(), Some("v"));
    }
}
