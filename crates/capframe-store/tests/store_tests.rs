use capframe_catalog::{ProficiencyLevel, SelectedDescriptor};
use capframe_store::{
    AssessmentState, AssessmentStore, FileStorage, MemoryStorage, ResponsePatch, Storage,
    ASSESSMENT_KEY,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;

const RESEARCH_ENGAGEMENT: &str = "research-engagement";

fn f0() -> SelectedDescriptor {
    SelectedDescriptor::new(ProficiencyLevel::Foundation, 0)
}

#[test]
fn toggle_on_then_off() {
    let mut store = AssessmentStore::in_memory();
    store.update_response(RESEARCH_ENGAGEMENT, ResponsePatch::new().demonstrated(vec![]));

    store.toggle_demonstrated(RESEARCH_ENGAGEMENT, f0());
    assert_eq!(
        store
            .get_response(RESEARCH_ENGAGEMENT)
            .unwrap()
            .demonstrated_descriptors,
        vec![f0()]
    );

    store.toggle_demonstrated(RESEARCH_ENGAGEMENT, f0());
    assert!(store
        .get_response(RESEARCH_ENGAGEMENT)
        .unwrap()
        .demonstrated_descriptors
        .is_empty());
}

#[test]
fn dual_selection_is_independent() {
    let mut store = AssessmentStore::in_memory();
    store.toggle_demonstrated(RESEARCH_ENGAGEMENT, f0());
    store.toggle_focus(RESEARCH_ENGAGEMENT, f0());

    let response = store.get_response(RESEARCH_ENGAGEMENT).unwrap();
    assert_eq!(response.demonstrated_descriptors, vec![f0()]);
    assert_eq!(response.development_focus, vec![f0()]);

    store.toggle_demonstrated(RESEARCH_ENGAGEMENT, f0());
    let response = store.get_response(RESEARCH_ENGAGEMENT).unwrap();
    assert!(response.demonstrated_descriptors.is_empty());
    assert_eq!(response.development_focus, vec![f0()]);
}

#[test]
fn higher_level_does_not_tick_lower_levels() {
    let mut store = AssessmentStore::in_memory();
    store.toggle_demonstrated(
        RESEARCH_ENGAGEMENT,
        SelectedDescriptor::new(ProficiencyLevel::Exemplar, 0),
    );
    let response = store.get_response(RESEARCH_ENGAGEMENT).unwrap();
    assert_eq!(response.demonstrated_descriptors.len(), 1);
    assert_eq!(response.demonstrated_at(ProficiencyLevel::Foundation).count(), 0);
}

#[test]
fn remove_then_get_is_none() {
    let mut store = AssessmentStore::in_memory();
    store.update_response("closure", ResponsePatch::new().notes("x"));
    assert!(store.remove_capability("closure"));
    assert!(store.get_response("closure").is_none());
}

#[test]
fn clear_resets_everything() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = AssessmentStore::load(storage.clone());
    let ids = ["initiation", "closure", "impact"];
    for id in ids {
        store.update_response(
            id,
            ResponsePatch::new().current_level(Some(ProficiencyLevel::Advanced)),
        );
    }
    assert_eq!(store.completed_count(), 3);

    store.clear_assessment();
    assert_eq!(store.completed_count(), 0);
    for id in ids {
        assert!(store.get_response(id).is_none());
    }
    assert_eq!(storage.load(ASSESSMENT_KEY).unwrap(), None);
}

#[test]
fn state_survives_reload() {
    let storage = Arc::new(MemoryStorage::new());
    {
        let mut store = AssessmentStore::load(storage.clone());
        store.update_response(
            "initiation",
            ResponsePatch::new()
                .current_level(Some(ProficiencyLevel::Intermediate))
                .notes("negotiating"),
        );
        store.toggle_focus("initiation", f0());
    }

    let store = AssessmentStore::load(storage);
    let response = store.get_response("initiation").unwrap();
    assert_eq!(response.current_level, Some(ProficiencyLevel::Intermediate));
    assert_eq!(response.notes, "negotiating");
    assert_eq!(response.development_focus, vec![f0()]);
}

#[test]
fn malformed_blob_falls_back_to_empty() {
    let storage = Arc::new(MemoryStorage::new());
    storage.save(ASSESSMENT_KEY, "{\"responses\": oops").unwrap();
    let store = AssessmentStore::load(storage);
    assert!(store.state().responses.is_empty());
}

#[test]
fn file_storage_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(dir.path().join("data")));

    let mut store = AssessmentStore::load(storage.clone());
    store.update_response("impact", ResponsePatch::new().included(false));
    let expected = store.state().clone();

    let reloaded = AssessmentStore::load(storage);
    assert_eq!(reloaded.state(), &expected);

    let entries: Vec<String> = std::fs::read_dir(dir.path().join("data"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec![format!("{ASSESSMENT_KEY}.json")]);
}

#[test]
fn file_storage_missing_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    assert_eq!(storage.load(ASSESSMENT_KEY).unwrap(), None);
    storage.clear(ASSESSMENT_KEY).unwrap();

    storage.save(ASSESSMENT_KEY, "{}").unwrap();
    assert_eq!(storage.load(ASSESSMENT_KEY).unwrap().as_deref(), Some("{}"));
    storage.clear(ASSESSMENT_KEY).unwrap();
    assert!(!storage.path_for(ASSESSMENT_KEY).unwrap().exists());
}

fn level() -> impl Strategy<Value = ProficiencyLevel> {
    prop_oneof![
        Just(ProficiencyLevel::Foundation),
        Just(ProficiencyLevel::Intermediate),
        Just(ProficiencyLevel::Advanced),
        Just(ProficiencyLevel::Exemplar),
    ]
}

fn descriptors() -> impl Strategy<Value = Vec<SelectedDescriptor>> {
    prop::collection::vec(
        (level(), 0usize..6).prop_map(|(l, i)| SelectedDescriptor::new(l, i)),
        0..5,
    )
}

fn patch() -> impl Strategy<Value = ResponsePatch> {
    (
        prop::option::of(prop::option::of(level())),
        prop::option::of(prop::option::of(level())),
        prop::option::of(descriptors()),
        prop::option::of(descriptors()),
        prop::option::of(".{0,20}"),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(current, desired, demonstrated, focus, notes, included)| ResponsePatch {
            current_level: current,
            desired_level: desired,
            demonstrated_descriptors: demonstrated,
            development_focus: focus,
            notes,
            is_included: included,
        })
}

proptest! {
    #[test]
    fn prop_merge_is_idempotent(first in patch(), repeated in patch()) {
        let mut once = AssessmentStore::in_memory();
        once.update_response("x", first.clone());
        once.update_response("x", repeated.clone());

        let mut twice = AssessmentStore::in_memory();
        twice.update_response("x", first);
        twice.update_response("x", repeated.clone());
        twice.update_response("x", repeated);

        prop_assert_eq!(once.get_response("x"), twice.get_response("x"));
    }

    #[test]
    fn prop_notes_update_isolated(setup in patch(), notes in ".{0,40}") {
        let mut store = AssessmentStore::in_memory();
        store.update_response("x", setup);
        let before = store.get_response("x").cloned().unwrap();

        store.update_response("x", ResponsePatch::new().notes(notes.clone()));
        let after = store.get_response("x").unwrap();

        prop_assert_eq!(&after.current_level, &before.current_level);
        prop_assert_eq!(&after.desired_level, &before.desired_level);
        prop_assert_eq!(&after.demonstrated_descriptors, &before.demonstrated_descriptors);
        prop_assert_eq!(&after.development_focus, &before.development_focus);
        prop_assert_eq!(&after.notes, &notes);
    }

    #[test]
    fn prop_state_roundtrip(patches in prop::collection::vec(("[a-z-]{1,16}", patch()), 0..8)) {
        let mut store = AssessmentStore::in_memory();
        for (id, p) in patches {
            store.update_response(&id, p);
        }
        let blob = store.state().to_json().unwrap();
        let decoded = AssessmentState::from_json(&blob).unwrap();
        prop_assert_eq!(&decoded, store.state());
    }
}
