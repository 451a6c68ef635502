//! Error types for capframe Core
//!
//! Nothing here is fatal to a session: every variant describes a rejected
//! request, and the session state is unchanged when one is returned.

use capframe_catalog::SelectedDescriptor;
use capframe_guide::GuidedFilterSelection;
use capframe_store::StoreError;
use std::path::PathBuf;

/// Main capframe error type
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Capability id not in the catalog
    #[error("unknown capability: {0}")]
    UnknownCapability(String),

    /// Role or function id not in the catalog
    #[error("unknown guided filter: {0}")]
    UnknownFilter(GuidedFilterSelection),

    /// Descriptor reference outside the capability's bullet points
    #[error("capability {capability_id} has no descriptor {descriptor}")]
    DescriptorOutOfRange {
        /// Capability referenced
        capability_id: String,
        /// Offending reference
        descriptor: SelectedDescriptor,
    },

    /// Framework document missing
    #[error("framework document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    /// Framework document present but unreadable
    #[error("failed to read framework document {}: {source}", path.display())]
    DocumentRead {
        /// Document path
        path: PathBuf,
        /// I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        /// Config path
        path: PathBuf,
        /// I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`AppConfig`](crate::AppConfig)
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Explicit persistence failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl CoreError {
    /// Whether the error came from an id or index the caller supplied
    #[inline]
    #[must_use]
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            Self::UnknownCapability(_) | Self::UnknownFilter(_) | Self::DescriptorOutOfRange { .. }
        )
    }
}

/// Result alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
