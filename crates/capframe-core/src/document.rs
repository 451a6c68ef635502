//! Framework reference document
//!
//! The document is served verbatim; nothing about it is generated.

use crate::error::{CoreError, CoreResult};
use std::path::Path;

/// Download filename offered for the document
pub const DOCUMENT_FILENAME: &str = "capability-framework.docx";

/// MIME type of the document
pub const DOCUMENT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// The framework document, ready to hand to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkDocument {
    /// Filename to save as
    pub filename: &'static str,
    /// MIME type
    pub content_type: &'static str,
    /// Raw document bytes
    pub bytes: Vec<u8>,
}

impl FrameworkDocument {
    /// Read the document at `path`
    ///
    /// # Errors
    /// Returns [`CoreError::DocumentNotFound`] when the file does not exist,
    /// [`CoreError::DocumentRead`] for other I/O failures
    pub fn open(path: &Path) -> CoreResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                CoreError::DocumentNotFound(path.to_path_buf())
            } else {
                CoreError::DocumentRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "framework document read");
        Ok(Self {
            filename: DOCUMENT_FILENAME,
            content_type: DOCUMENT_CONTENT_TYPE,
            bytes,
        })
    }

    /// Size in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the document is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
