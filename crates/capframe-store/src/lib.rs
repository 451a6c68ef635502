//! capframe Store
//!
//! Owns the user's assessment and keeps it in sync with storage.
//!
//! # Core Concepts
//!
//! - [`Storage`]: Whole-blob key/value backend ([`MemoryStorage`], [`FileStorage`])
//! - [`AssessmentResponse`]: One capability's self-assessment
//! - [`ResponsePatch`]: Partial update, shallow-merged into a response
//! - [`AssessmentStore`]: Reducer over all responses, persisted on every change
//! - [`SelectionSlot`]: Persisted guided filter selection
//!
//! # Example
//!
//! ```rust
//! use capframe_catalog::{ProficiencyLevel, SelectedDescriptor};
//! use capframe_store::{AssessmentStore, ResponsePatch};
//!
//! let mut store = AssessmentStore::in_memory();
//! store.update_response(
//!     "initiation",
//!     ResponsePatch::new().current_level(Some(ProficiencyLevel::Intermediate)),
//! );
//! store.toggle_demonstrated(
//!     "initiation",
//!     SelectedDescriptor::new(ProficiencyLevel::Intermediate, 0),
//! );
//!
//! assert_eq!(store.completed_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod response;
mod selection_slot;
mod state;
mod storage;
mod store;

// Re-exports
pub use response::{toggle_descriptor, AssessmentResponse, ResponsePatch};
pub use selection_slot::SelectionSlot;
pub use state::AssessmentState;
pub use storage::{
    FileStorage, MemoryStorage, Storage, StorageError, ASSESSMENT_KEY, GUIDED_FILTER_KEY,
};
pub use store::{AssessmentStore, DescriptorSet, StoreError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
