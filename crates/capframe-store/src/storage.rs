//! Key/value storage backends
//!
//! Provides the [`Storage`] trait the stores persist through, plus
//! [`MemoryStorage`] and the JSON-file backed [`FileStorage`]. Every write
//! replaces the whole blob for a key.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Key holding the serialized assessment state
pub const ASSESSMENT_KEY: &str = "capframe.assessment";

/// Key holding the serialized guided filter selection
pub const GUIDED_FILTER_KEY: &str = "capframe.guided-filter";

/// Whole-blob key/value storage
///
/// `load` of a key never written (or cleared) returns `Ok(None)`.
#[cfg_attr(test, mockall::automock)]
pub trait Storage: Send + Sync {
    /// Read the blob stored under `key`
    ///
    /// # Errors
    /// Returns error if the backend cannot be read
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob stored under `key`
    ///
    /// # Errors
    /// Returns error if the blob could not be written; the prior blob is kept
    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError>;

    /// Remove the blob stored under `key`
    ///
    /// # Errors
    /// Returns error if the backend refuses the removal
    fn clear(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage backend errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying I/O failed
    #[error("storage I/O failed for {key}: {source}")]
    Io {
        /// Key being accessed
        key: String,
        /// I/O error
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be mapped onto the backend
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Backend not usable
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    fn io(key: &str, source: std::io::Error) -> Self {
        Self::Io {
            key: key.to_string(),
            source,
        }
    }
}

/// In-process storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create empty storage
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.blobs.lock().len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blobs.lock().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.lock().get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.blobs.lock().insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        self.blobs.lock().remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a data directory
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a failed write leaves the previous blob intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `dir` (created on first write)
    #[inline]
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Data directory
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing a key
    ///
    /// # Errors
    /// Returns error for keys that are empty or would escape the directory
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(key, e)),
        }
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|e| StorageError::io(key, e))?;

        let mut tmp =
            tempfile::NamedTempFile::new_in(&self.dir).map_err(|e| StorageError::io(key, e))?;
        tmp.write_all(blob.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| StorageError::io(key, e))?;
        tmp.persist(&path).map_err(|e| StorageError::io(key, e.error))?;

        tracing::trace!(path = %path.display(), bytes = blob.len(), "blob written");
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(key, e)),
        }
    }
}
