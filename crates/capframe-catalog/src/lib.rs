//! capframe Catalog
//!
//! The static capability framework every other crate reads.
//!
//! # Core Concepts
//!
//! - [`ProficiencyLevel`]: The four ordered levels (Foundation → Exemplar)
//! - [`Capability`]: A skill area with one [`LevelDescriptor`] per level
//! - [`SelectedDescriptor`]: Positional reference to one descriptor
//! - [`RoleMapping`]: A role or function with its required levels
//! - [`Catalog`]: Read-only bundle of capabilities, roles and functions
//!
//! # Example
//!
//! ```rust
//! use capframe_catalog::{builtin, FilterType, ProficiencyLevel};
//!
//! let catalog = builtin();
//! let role = catalog.mapping(FilterType::Role, "contract-administrator").unwrap();
//! assert_eq!(role.level_for("initiation"), Some(ProficiencyLevel::Advanced));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod capability;
mod catalog;
mod level;
mod role;

/// Built-in framework data
pub mod builtin;

// Re-exports
pub use builtin::builtin;
pub use capability::{Capability, DescriptorAlignment, LevelDescriptor};
pub use catalog::{Catalog, CatalogError};
pub use level::{ProficiencyLevel, SelectedDescriptor, UnknownLevel};
pub use role::{CapabilityMapping, FilterType, RoleMapping, UnknownFilterType};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
