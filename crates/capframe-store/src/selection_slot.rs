//! Persisted guided filter selection

use crate::storage::{Storage, GUIDED_FILTER_KEY};
use crate::store::StoreError;
use capframe_guide::GuidedFilterSelection;
use std::fmt;
use std::sync::Arc;

/// Storage slot holding at most one [`GuidedFilterSelection`]
#[derive(Clone)]
pub struct SelectionSlot {
    storage: Arc<dyn Storage>,
}

impl SelectionSlot {
    /// Create slot over a storage backend
    #[inline]
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Persisted selection
    ///
    /// Absent, unreadable or malformed data yields `None`.
    #[must_use]
    pub fn load(&self) -> Option<GuidedFilterSelection> {
        let blob = match self.storage.load(GUIDED_FILTER_KEY) {
            Ok(blob) => blob?,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read guided filter selection");
                return None;
            }
        };
        match serde_json::from_str(&blob) {
            Ok(selection) => Some(selection),
            Err(e) => {
                tracing::warn!(error = %e, "persisted guided filter selection is malformed");
                None
            }
        }
    }

    /// Persist a selection, replacing any previous one
    ///
    /// # Errors
    /// Returns error if the selection cannot be written
    pub fn save(&self, selection: &GuidedFilterSelection) -> Result<(), StoreError> {
        let blob = serde_json::to_string(selection)?;
        self.storage.save(GUIDED_FILTER_KEY, &blob)?;
        Ok(())
    }

    /// Remove the persisted selection
    ///
    /// # Errors
    /// Returns error if the backend refuses the removal
    pub fn clear(&self) -> Result<(), StoreError> {
        self.storage.clear(GUIDED_FILTER_KEY)?;
        Ok(())
    }
}

impl fmt::Debug for SelectionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionSlot")
            .field("key", &GUIDED_FILTER_KEY)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn absent_by_default() {
        let slot = SelectionSlot::new(Arc::new(MemoryStorage::new()));
        assert_eq!(slot.load(), None);
    }

    #[test]
    fn save_load_clear() {
        let slot = SelectionSlot::new(Arc::new(MemoryStorage::new()));
        let selection = GuidedFilterSelection::function("contracts");

        slot.save(&selection).unwrap();
        assert_eq!(slot.load(), Some(selection));

        slot.clear().unwrap();
        assert_eq!(slot.load(), None);
    }

    #[test]
    fn malformed_selection_is_none() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .save(GUIDED_FILTER_KEY, r#"{"filterType":"team","filterId":"x"}"#)
            .unwrap();
        let slot = SelectionSlot::new(storage);
        assert_eq!(slot.load(), None);
    }

    #[test]
    fn stored_wire_format() {
        let storage = Arc::new(MemoryStorage::new());
        let slot = SelectionSlot::new(storage.clone());
        slot.save(&GuidedFilterSelection::role("contract-administrator"))
            .unwrap();
        assert_eq!(
            storage.load(GUIDED_FILTER_KEY).unwrap().as_deref(),
            Some(r#"{"filterType":"role","filterId":"contract-administrator"}"#)
        );
    }
}
