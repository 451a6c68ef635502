//! Guided filter resolver
//!
//! Provides [`GuidedFilter`], which turns a role/function selection into
//! per-capability guidance without touching the catalog or any assessment.

use crate::relevance::{relevant_descriptor_indexes, RelevanceHint};
use crate::selection::GuidedFilterSelection;
use capframe_catalog::{Capability, CapabilityMapping, Catalog, FilterType, ProficiencyLevel};
use serde::Serialize;

/// Resolves selections against a catalog
///
/// Unknown ids are not errors: they resolve to no mappings.
#[derive(Debug, Clone, Copy)]
pub struct GuidedFilter<'a> {
    catalog: &'a Catalog,
}

/// A role or function the user can select
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    /// Selection that activates this option
    pub selection: GuidedFilterSelection,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Number of mapped capabilities
    pub mapped_count: usize,
}

impl<'a> GuidedFilter<'a> {
    /// Create resolver over a catalog
    #[inline]
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Declared mappings for a selection, in declaration order
    ///
    /// Empty for an unknown role/function id.
    #[must_use]
    pub fn mappings_for(&self, selection: &GuidedFilterSelection) -> &'a [CapabilityMapping] {
        match self.catalog.mapping(selection.filter_type, &selection.filter_id) {
            Some(mapping) => &mapping.capabilities,
            None => {
                tracing::debug!(%selection, "guided filter selection not found in catalog");
                &[]
            }
        }
    }

    /// Level the selection requires for a capability
    ///
    /// The first mapping for the capability is authoritative.
    #[must_use]
    pub fn required_level(
        &self,
        selection: &GuidedFilterSelection,
        capability_id: &str,
    ) -> Option<ProficiencyLevel> {
        self.mappings_for(selection)
            .iter()
            .find(|m| m.capability_id == capability_id)
            .map(|m| m.level)
    }

    /// Whether the selection maps the capability at all
    #[inline]
    #[must_use]
    pub fn is_mapped(&self, selection: &GuidedFilterSelection, capability_id: &str) -> bool {
        self.required_level(selection, capability_id).is_some()
    }

    /// Ids of all capabilities the selection maps, first-mapping order, no repeats
    #[must_use]
    pub fn mapped_capability_ids(&self, selection: &GuidedFilterSelection) -> Vec<&'a str> {
        let mut ids: Vec<&'a str> = Vec::new();
        for mapping in self.mappings_for(selection) {
            if !ids.contains(&mapping.capability_id.as_str()) {
                ids.push(&mapping.capability_id);
            }
        }
        ids
    }

    /// Required level plus highlighted descriptors for one capability
    ///
    /// `None` when the capability is not mapped by the selection.
    #[must_use]
    pub fn relevant_for(
        &self,
        selection: &GuidedFilterSelection,
        capability: &Capability,
    ) -> Option<RelevanceHint> {
        let required_level = self.required_level(selection, &capability.id)?;
        let total = capability.descriptor_count(required_level);
        Some(RelevanceHint {
            capability_id: capability.id.clone(),
            required_level,
            relevant_indexes: relevant_descriptor_indexes(required_level, total),
        })
    }

    /// Whether one descriptor is highlighted under the selection
    #[must_use]
    pub fn is_relevant(
        &self,
        selection: &GuidedFilterSelection,
        capability: &Capability,
        level: ProficiencyLevel,
        descriptor_index: usize,
    ) -> bool {
        self.relevant_for(selection, capability)
            .is_some_and(|hint| hint.is_relevant(level, descriptor_index))
    }

    /// Display name for a selection, `None` for unknown ids
    #[must_use]
    pub fn describe(&self, selection: &GuidedFilterSelection) -> Option<&'a str> {
        self.catalog
            .mapping(selection.filter_type, &selection.filter_id)
            .map(|m| m.name.as_str())
    }

    /// Whether a selection names an existing role/function
    #[inline]
    #[must_use]
    pub fn is_known(&self, selection: &GuidedFilterSelection) -> bool {
        self.describe(selection).is_some()
    }

    /// Every selectable role, then every selectable function
    #[must_use]
    pub fn options(&self) -> Vec<FilterOption> {
        [FilterType::Role, FilterType::Function]
            .into_iter()
            .flat_map(|filter_type| {
                self.catalog
                    .mappings(filter_type)
                    .iter()
                    .map(move |m| FilterOption {
                        selection: GuidedFilterSelection::new(filter_type, m.id.clone()),
                        name: m.name.clone(),
                        description: m.description.clone(),
                        mapped_count: m.capabilities.len(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capframe_catalog::{builtin, LevelDescriptor, RoleMapping};
    use pretty_assertions::assert_eq;

    fn small_catalog() -> Catalog {
        let capability = ProficiencyLevel::ALL
            .into_iter()
            .fold(Capability::new("a", "A", ""), |cap, level| {
                cap.with_level(LevelDescriptor::new(level, &["1", "2", "3", "4"]))
            });
        let role = RoleMapping::new("dup", "Duplicate")
            .requires("a", ProficiencyLevel::Intermediate)
            .requires("a", ProficiencyLevel::Exemplar);
        Catalog::new(vec![capability], vec![role], vec![])
    }

    #[test]
    fn contract_administrator_levels() {
        let filter = GuidedFilter::new(builtin());
        let selection = GuidedFilterSelection::role("contract-administrator");
        assert_eq!(
            filter.required_level(&selection, "initiation"),
            Some(ProficiencyLevel::Advanced)
        );
        assert_eq!(filter.required_level(&selection, "funding-opportunities"), None);
        assert!(filter.is_mapped(&selection, "initiation"));
        assert!(!filter.is_mapped(&selection, "funding-opportunities"));
    }

    #[test]
    fn unknown_selection_resolves_to_nothing() {
        let filter = GuidedFilter::new(builtin());
        let selection = GuidedFilterSelection::role("astronaut");
        assert!(filter.mappings_for(&selection).is_empty());
        assert_eq!(filter.required_level(&selection, "initiation"), None);
        assert!(!filter.is_known(&selection));
    }

    #[test]
    fn role_id_is_not_a_function_id() {
        let filter = GuidedFilter::new(builtin());
        let selection = GuidedFilterSelection::function("contract-administrator");
        assert!(filter.mappings_for(&selection).is_empty());
    }

    #[test]
    fn duplicate_mapping_first_wins() {
        let catalog = small_catalog();
        let filter = GuidedFilter::new(&catalog);
        let selection = GuidedFilterSelection::role("dup");
        assert_eq!(
            filter.required_level(&selection, "a"),
            Some(ProficiencyLevel::Intermediate)
        );
        assert_eq!(filter.mapped_capability_ids(&selection), vec!["a"]);
    }

    #[test]
    fn relevance_only_at_required_level() {
        let catalog = small_catalog();
        let filter = GuidedFilter::new(&catalog);
        let selection = GuidedFilterSelection::role("dup");
        let capability = catalog.capability("a").unwrap();

        let hint = filter.relevant_for(&selection, capability).unwrap();
        assert_eq!(hint.required_level, ProficiencyLevel::Intermediate);
        assert_eq!(hint.relevant_indexes, vec![1, 2]);

        assert!(filter.is_relevant(&selection, capability, ProficiencyLevel::Intermediate, 1));
        assert!(!filter.is_relevant(&selection, capability, ProficiencyLevel::Foundation, 1));
    }

    #[test]
    fn options_list_roles_then_functions() {
        let filter = GuidedFilter::new(builtin());
        let options = filter.options();
        let roles = builtin().roles().len();
        assert_eq!(options.len(), roles + builtin().functions().len());
        assert!(options[..roles]
            .iter()
            .all(|o| o.selection.filter_type == FilterType::Role));
        assert!(options[roles..]
            .iter()
            .all(|o| o.selection.filter_type == FilterType::Function));
    }

    #[test]
    fn describe_known_selection() {
        let filter = GuidedFilter::new(builtin());
        assert_eq!(
            filter.describe(&GuidedFilterSelection::function("pre-award")),
            Some("Pre-Award")
        );
    }
}
