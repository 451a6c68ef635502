//! Assessment store
//!
//! Provides [`AssessmentStore`], the single owner of the assessment state.
//! State is only reachable read-only; every mutation goes through a `&mut self`
//! method that stamps `last_updated` and re-persists the whole state.

use crate::response::{toggle_descriptor, AssessmentResponse, ResponsePatch};
use crate::state::AssessmentState;
use crate::storage::{MemoryStorage, Storage, StorageError, ASSESSMENT_KEY};
use capframe_catalog::SelectedDescriptor;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Errors persisting the assessment state
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backend failure
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// State could not be encoded
    #[error("failed to encode assessment state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Which descriptor set a toggle applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorSet {
    /// Descriptors the user can demonstrate
    Demonstrated,
    /// Descriptors the user wants to develop
    Focus,
}

/// Per-capability responses backed by a [`Storage`]
///
/// Persistence is fire-and-forget: a failed save is logged and the in-memory
/// state stays authoritative.
pub struct AssessmentStore {
    storage: Arc<dyn Storage>,
    state: AssessmentState,
}

impl AssessmentStore {
    /// Rehydrate from storage
    ///
    /// Absent, unreadable or malformed data yields an empty state.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let state = match storage.load(ASSESSMENT_KEY) {
            Ok(Some(blob)) => match AssessmentState::from_json(&blob) {
                Ok(state) => {
                    tracing::debug!(responses = state.responses.len(), "assessment state restored");
                    state
                }
                Err(e) => {
                    tracing::warn!(error = %e, "persisted assessment is malformed; starting empty");
                    AssessmentState::empty()
                }
            },
            Ok(None) => AssessmentState::empty(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted assessment; starting empty");
                AssessmentState::empty()
            }
        };
        Self { storage, state }
    }

    /// Store backed by a fresh [`MemoryStorage`]
    #[must_use]
    pub fn in_memory() -> Self {
        Self::load(Arc::new(MemoryStorage::new()))
    }

    /// Read-only view of the whole state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    /// Time of the last mutation
    #[inline]
    #[must_use]
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.state.last_updated
    }

    /// Response for a capability, `None` if never touched
    #[inline]
    #[must_use]
    pub fn get_response(&self, capability_id: &str) -> Option<&AssessmentResponse> {
        self.state.responses.get(capability_id)
    }

    /// All responses in capability id order
    pub fn responses(&self) -> impl Iterator<Item = &AssessmentResponse> {
        self.state.responses.values()
    }

    /// Merge a partial update into a capability's response
    ///
    /// Creates the seed record first if the capability was never touched.
    pub fn update_response(
        &mut self,
        capability_id: &str,
        patch: ResponsePatch,
    ) -> &AssessmentResponse {
        tracing::debug!(capability_id, ?patch, "update response");

        self.state
            .responses
            .entry(capability_id.to_string())
            .or_insert_with(|| AssessmentResponse::new(capability_id))
            .apply(patch);
        self.touch();

        &self.state.responses[capability_id]
    }

    /// Toggle a descriptor in one of a capability's sets
    ///
    /// Returns whether the descriptor is selected afterwards. The other set is
    /// never touched.
    pub fn toggle(
        &mut self,
        capability_id: &str,
        set: DescriptorSet,
        descriptor: SelectedDescriptor,
    ) -> bool {
        let current = self.get_response(capability_id);
        let existing = match set {
            DescriptorSet::Demonstrated => current.map(|r| r.demonstrated_descriptors.as_slice()),
            DescriptorSet::Focus => current.map(|r| r.development_focus.as_slice()),
        };
        let (updated, selected) = toggle_descriptor(existing.unwrap_or_default(), descriptor);

        let patch = match set {
            DescriptorSet::Demonstrated => ResponsePatch::new().demonstrated(updated),
            DescriptorSet::Focus => ResponsePatch::new().focus(updated),
        };
        self.update_response(capability_id, patch);
        selected
    }

    /// Toggle a descriptor in the demonstrated set
    #[inline]
    pub fn toggle_demonstrated(
        &mut self,
        capability_id: &str,
        descriptor: SelectedDescriptor,
    ) -> bool {
        self.toggle(capability_id, DescriptorSet::Demonstrated, descriptor)
    }

    /// Toggle a descriptor in the development focus set
    #[inline]
    pub fn toggle_focus(&mut self, capability_id: &str, descriptor: SelectedDescriptor) -> bool {
        self.toggle(capability_id, DescriptorSet::Focus, descriptor)
    }

    /// Delete a capability's response entirely
    ///
    /// Returns whether a response existed.
    pub fn remove_capability(&mut self, capability_id: &str) -> bool {
        let removed = self.state.responses.remove(capability_id).is_some();
        if removed {
            tracing::debug!(capability_id, "response removed");
            self.touch();
        }
        removed
    }

    /// Reset to an empty state and erase persisted data
    pub fn clear_assessment(&mut self) {
        self.state = AssessmentState::empty();
        if let Err(e) = self.storage.clear(ASSESSMENT_KEY) {
            tracing::warn!(error = %e, "failed to erase persisted assessment");
        }
        tracing::info!("assessment cleared");
    }

    /// Number of responses with a current level
    #[inline]
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.state.completed_count()
    }

    /// Write the whole state to storage
    ///
    /// # Errors
    /// Returns error if the state cannot be encoded or written
    pub fn try_persist(&self) -> Result<(), StoreError> {
        let blob = self.state.to_json()?;
        self.storage.save(ASSESSMENT_KEY, &blob)?;
        Ok(())
    }

    fn touch(&mut self) {
        self.state.last_updated = Utc::now();
        if let Err(e) = self.try_persist() {
            tracing::warn!(error = %e, "failed to persist assessment");
        }
    }
}

impl fmt::Debug for AssessmentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentStore")
            .field("responses", &self.state.responses.len())
            .field("last_updated", &self.state.last_updated)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockStorage;
    use capframe_catalog::ProficiencyLevel;
    use pretty_assertions::assert_eq;

    const F0: SelectedDescriptor = SelectedDescriptor {
        level: ProficiencyLevel::Foundation,
        descriptor_index: 0,
    };

    #[test]
    fn update_creates_seed_then_merges() {
        let mut store = AssessmentStore::in_memory();
        assert!(store.get_response("initiation").is_none());

        let response = store.update_response("initiation", ResponsePatch::new().notes("n"));
        assert_eq!(response.capability_id, "initiation");
        assert_eq!(response.current_level, None);
        assert_eq!(response.notes, "n");
    }

    #[test]
    fn notes_update_leaves_other_fields() {
        let mut store = AssessmentStore::in_memory();
        store.update_response(
            "initiation",
            ResponsePatch::new()
                .current_level(Some(ProficiencyLevel::Intermediate))
                .desired_level(Some(ProficiencyLevel::Advanced))
                .demonstrated(vec![F0])
                .focus(vec![F0]),
        );
        let before = store.get_response("initiation").cloned().unwrap();

        store.update_response("initiation", ResponsePatch::new().notes("only notes"));
        let after = store.get_response("initiation").unwrap();

        assert_eq!(after.current_level, before.current_level);
        assert_eq!(after.desired_level, before.desired_level);
        assert_eq!(after.demonstrated_descriptors, before.demonstrated_descriptors);
        assert_eq!(after.development_focus, before.development_focus);
        assert_eq!(after.notes, "only notes");
    }

    #[test]
    fn update_stamps_last_updated() {
        let mut store = AssessmentStore::in_memory();
        let before = store.last_updated();
        store.update_response("x", ResponsePatch::new().included(false));
        assert!(store.last_updated() >= before);
    }

    #[test]
    fn toggle_sets_are_independent() {
        let mut store = AssessmentStore::in_memory();
        assert!(store.toggle_demonstrated("research-engagement", F0));
        assert!(store.toggle_focus("research-engagement", F0));

        let response = store.get_response("research-engagement").unwrap();
        assert!(response.is_demonstrated(F0));
        assert!(response.is_focus(F0));

        assert!(!store.toggle_focus("research-engagement", F0));
        let response = store.get_response("research-engagement").unwrap();
        assert!(response.is_demonstrated(F0));
        assert!(!response.is_focus(F0));
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut store = AssessmentStore::in_memory();
        assert!(!store.remove_capability("nothing"));
    }

    #[test]
    fn save_failure_keeps_in_memory_update() {
        let mut storage = MockStorage::new();
        storage.expect_load().returning(|_| Ok(None));
        storage
            .expect_save()
            .times(2)
            .returning(|_, _| Err(StorageError::Unavailable("quota exceeded".to_string())));

        let mut store = AssessmentStore::load(Arc::new(storage));
        store.update_response("closure", ResponsePatch::new().notes("kept"));

        assert_eq!(store.get_response("closure").map(|r| r.notes.as_str()), Some("kept"));
        assert!(store.try_persist().is_err());
    }

    #[test]
    fn unreadable_storage_starts_empty() {
        let mut storage = MockStorage::new();
        storage.expect_load().returning(|key| {
            Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        });
        let store = AssessmentStore::load(Arc::new(storage));
        assert_eq!(store.completed_count(), 0);
        assert!(store.state().responses.is_empty());
    }

    #[test]
    fn clear_erases_storage_key() {
        let mut storage = MockStorage::new();
        storage.expect_load().returning(|_| Ok(None));
        storage.expect_save().returning(|_, _| Ok(()));
        storage
            .expect_clear()
            .withf(|key| key == ASSESSMENT_KEY)
            .times(1)
            .returning(|_| Ok(()));

        let mut store = AssessmentStore::load(Arc::new(storage));
        let patch = ResponsePatch::new().current_level(Some(ProficiencyLevel::Foundation));
        store.update_response("closure", patch);
        store.clear_assessment();
        assert_eq!(store.completed_count(), 0);
    }
}
