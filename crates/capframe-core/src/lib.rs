//! capframe Core - Assessment Session
//!
//! The context object a front end works through:
//! - Loads configuration and opens the configured storage
//! - Rehydrates the assessment and the guided filter selection
//! - Validates mutations against the catalog before they reach the store
//! - Builds the summary and development plan views
//! - Serves the framework reference document
//!
//! # Example
//!
//! ```rust
//! use capframe_catalog::{ProficiencyLevel, SelectedDescriptor};
//! use capframe_core::{AppConfig, Session};
//! use capframe_guide::GuidedFilterSelection;
//!
//! # fn main() -> Result<(), capframe_core::CoreError> {
//! let config = AppConfig::new().with_memory_storage();
//! let mut session = Session::open(&config);
//!
//! session.select_filter(GuidedFilterSelection::role("contract-administrator"))?;
//! session.set_current_level("initiation", Some(ProficiencyLevel::Intermediate))?;
//! session.toggle_focus(
//!     "initiation",
//!     SelectedDescriptor::new(ProficiencyLevel::Advanced, 1),
//! )?;
//!
//! let summary = session.summary();
//! assert_eq!(summary.completed_count, 1);
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod document;
pub mod error;
pub mod session;
pub mod summary;

// Re-exports for convenience
pub use config::{AppConfig, StorageConfig};
pub use document::{FrameworkDocument, DOCUMENT_CONTENT_TYPE, DOCUMENT_FILENAME};
pub use error::{CoreError, CoreResult};
pub use session::Session;
pub use summary::{
    ActiveFilter, AssessmentSummary, CapabilitySummary, DevelopmentPlan, LevelProgress,
    PlanDescriptor, PlanItem, PROGRESSION_NOTE,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with a session
    pub use crate::{AppConfig, CoreError, Session};
    pub use capframe_catalog::{ProficiencyLevel, SelectedDescriptor};
    pub use capframe_guide::GuidedFilterSelection;
    pub use capframe_store::{DescriptorSet, ResponsePatch};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
