//! Application configuration
//!
//! Loaded from an optional TOML file; every field has a default so an empty
//! file (or no file) is a valid configuration.
//!
//! ```toml
//! log_filter = "capframe=debug"
//! document_path = "docs/capability-framework.docx"
//!
//! [storage]
//! backend = "files"
//! dir = ".capframe"
//! ```

use crate::error::{CoreError, CoreResult};
use capframe_store::{FileStorage, MemoryStorage, Storage};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default data directory for the file backend
pub const DEFAULT_DATA_DIR: &str = ".capframe";

/// Default location of the framework reference document
pub const DEFAULT_DOCUMENT_PATH: &str = "capability-framework.docx";

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// capframe configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Where assessment data is kept
    pub storage: StorageConfig,
    /// Framework reference document served by `export-document`
    pub document_path: PathBuf,
    /// `tracing-subscriber` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

/// Storage backend selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Nothing survives the process
    Memory,
    /// JSON files in a directory
    Files {
        /// Data directory
        dir: PathBuf,
    },
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::Files {
            dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl StorageConfig {
    /// Build the configured backend
    #[must_use]
    pub fn build(&self) -> Arc<dyn Storage> {
        match self {
            Self::Memory => Arc::new(MemoryStorage::new()),
            Self::Files { dir } => Arc::new(FileStorage::new(dir.clone())),
        }
    }
}

impl AppConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML
    ///
    /// # Errors
    /// Returns error if the text is not valid configuration
    pub fn from_toml_str(text: &str) -> CoreResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// With file storage in `dir`
    #[inline]
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage = StorageConfig::Files { dir: dir.into() };
        self
    }

    /// With in-memory storage
    #[inline]
    #[must_use]
    pub fn with_memory_storage(mut self) -> Self {
        self.storage = StorageConfig::Memory;
        self
    }

    /// With framework document path
    #[inline]
    #[must_use]
    pub fn with_document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.document_path = path.into();
        self
    }

    /// With log filter
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            document_path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
