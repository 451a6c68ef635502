//! Compiled-in capability framework
//!
//! [`builtin`] returns the shared, lazily built [`Catalog`]. The tables are
//! plain Rust so the catalog cannot fail to load at runtime; the tests below
//! hold it to [`Catalog::validate`].

pub mod capabilities;
pub mod roles;

use crate::catalog::Catalog;
use once_cell::sync::Lazy;

static BUILTIN: Lazy<Catalog> =
    Lazy::new(|| Catalog::new(capabilities::all(), roles::roles(), roles::functions()));

/// The built-in framework
#[must_use]
pub fn builtin() -> &'static Catalog {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::ProficiencyLevel;
    use crate::role::FilterType;

    #[test]
    fn builtin_catalog_is_valid() {
        assert_eq!(builtin().validate(), Ok(()));
    }

    #[test]
    fn builtin_has_ten_capabilities_with_four_levels() {
        let catalog = builtin();
        assert_eq!(catalog.len(), 10);
        for capability in catalog.capabilities() {
            assert_eq!(capability.levels.len(), 4, "{}", capability.id);
        }
    }

    #[test]
    fn contract_administrator_mapping() {
        let role = builtin()
            .mapping(FilterType::Role, roles::CONTRACT_ADMINISTRATOR)
            .unwrap();
        assert_eq!(
            role.level_for(capabilities::INITIATION),
            Some(ProficiencyLevel::Advanced)
        );
        assert_eq!(role.level_for(capabilities::FUNDING_OPPORTUNITIES), None);
    }

    #[test]
    fn builtin_is_shared() {
        assert!(std::ptr::eq(builtin(), builtin()));
    }
}
