//! capframe Guide
//!
//! Role/function guidance overlaid on the capability catalog.
//!
//! # Core Concepts
//!
//! - [`GuidedFilterSelection`]: The active role or function
//! - [`GuidedFilter`]: Resolves a selection to mapped capabilities and required levels
//! - [`relevant_descriptor_indexes`]: Stable subset of descriptors to highlight
//! - [`RelevanceHint`]: Required level plus highlighted descriptors for one capability
//!
//! # Example
//!
//! ```rust
//! use capframe_catalog::{builtin, ProficiencyLevel};
//! use capframe_guide::{GuidedFilter, GuidedFilterSelection};
//!
//! let filter = GuidedFilter::new(builtin());
//! let selection = GuidedFilterSelection::role("contract-administrator");
//!
//! assert_eq!(
//!     filter.required_level(&selection, "initiation"),
//!     Some(ProficiencyLevel::Advanced)
//! );
//! assert!(!filter.is_mapped(&selection, "funding-opportunities"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod relevance;
mod resolver;
mod selection;

// Re-exports
pub use relevance::{relevant_descriptor_indexes, RelevanceHint};
pub use resolver::{FilterOption, GuidedFilter};
pub use selection::{GuidedFilterSelection, SelectionParseError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
