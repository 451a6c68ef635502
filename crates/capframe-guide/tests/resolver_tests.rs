use capframe_catalog::{builtin, FilterType, ProficiencyLevel};
use capframe_guide::{relevant_descriptor_indexes, GuidedFilter, GuidedFilterSelection};
use proptest::prelude::*;

fn all_selections() -> Vec<GuidedFilterSelection> {
    GuidedFilter::new(builtin())
        .options()
        .into_iter()
        .map(|o| o.selection)
        .collect()
}

#[test]
fn required_level_comes_from_declared_mappings() {
    let catalog = builtin();
    let filter = GuidedFilter::new(catalog);

    for selection in all_selections() {
        let declared = filter.mappings_for(&selection);
        for capability in catalog.capabilities() {
            match filter.required_level(&selection, &capability.id) {
                Some(level) => assert!(
                    declared
                        .iter()
                        .any(|m| m.capability_id == capability.id && m.level == level),
                    "{selection} {}",
                    capability.id
                ),
                None => assert!(!declared.iter().any(|m| m.capability_id == capability.id)),
            }
        }
    }
}

#[test]
fn is_mapped_matches_mappings() {
    let catalog = builtin();
    let filter = GuidedFilter::new(catalog);

    for selection in all_selections() {
        for capability in catalog.capabilities() {
            let listed = filter
                .mappings_for(&selection)
                .iter()
                .any(|m| m.capability_id == capability.id);
            assert_eq!(filter.is_mapped(&selection, &capability.id), listed);
        }
    }
}

#[test]
fn relevance_hints_stay_in_bounds_for_builtin() {
    let catalog = builtin();
    let filter = GuidedFilter::new(catalog);

    for selection in all_selections() {
        for capability in catalog.capabilities() {
            if let Some(hint) = filter.relevant_for(&selection, capability) {
                let total = capability.descriptor_count(hint.required_level);
                assert!(!hint.relevant_indexes.is_empty());
                assert!(hint.relevant_indexes.iter().all(|&i| i < total));
            }
        }
    }
}

#[test]
fn every_function_is_selectable() {
    let filter = GuidedFilter::new(builtin());
    for function in builtin().mappings(FilterType::Function) {
        assert!(filter.is_known(&GuidedFilterSelection::function(function.id.clone())));
    }
}

proptest! {
    #[test]
    fn prop_repeated_calls_identical(
        level in prop_oneof![
            Just(ProficiencyLevel::Foundation),
            Just(ProficiencyLevel::Intermediate),
            Just(ProficiencyLevel::Advanced),
            Just(ProficiencyLevel::Exemplar),
        ],
        total in 0usize..1000,
    ) {
        let first = relevant_descriptor_indexes(level, total);
        for _ in 0..3 {
            prop_assert_eq!(&relevant_descriptor_indexes(level, total), &first);
        }
        prop_assert!(first.iter().all(|&i| i < total));
    }

    #[test]
    fn prop_unknown_ids_never_map(id in "[a-z]{1,12}-unknown") {
        let filter = GuidedFilter::new(builtin());
        let selection = GuidedFilterSelection::role(id);
        prop_assert!(filter.mappings_for(&selection).is_empty());
        for capability in builtin().capabilities() {
            prop_assert!(!filter.is_mapped(&selection, &capability.id));
        }
    }
}
