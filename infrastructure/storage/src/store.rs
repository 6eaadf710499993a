use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use business::domain::errors::StorageError;

/// Synchronous, string-keyed JSON document store over the filesystem.
///
/// Each key maps to one file under the store directory. Expected failures
/// (full disk, unreadable data) surface as `StorageError` values rather
/// than panics.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform-conventional location of the store.
    pub fn default_dir() -> PathBuf {
        dirs_next::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recipe-dashboard")
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Reads a value. A missing key is `Ok(None)`; an unreadable or
    /// unparseable document is an error the caller decides how to treat.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let raw = match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(_) => return Err(StorageError::Io),
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|_| StorageError::Serialization)
    }

    /// Writes a value, replacing any previous document under the key.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(map_io)?;
        let raw = serde_json::to_string(value).map_err(|_| StorageError::Serialization)?;
        fs::write(self.path_for(key), raw).map_err(map_io)
    }

    /// Deletes the document under the key. A missing key is not an error.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(_) => Err(StorageError::Io),
        }
    }
}

fn map_io(err: std::io::Error) -> StorageError {
    match err.kind() {
        ErrorKind::StorageFull | ErrorKind::QuotaExceeded => StorageError::QuotaExceeded,
        _ => StorageError::Io,
    }
}
