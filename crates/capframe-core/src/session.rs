//! Assessment session
//!
//! [`Session`] is the context object handed to a front end at start-up. It
//! owns the assessment store and the guided filter selection, borrows the
//! catalog, and validates every mutation against the catalog before it
//! reaches the store.

use crate::config::AppConfig;
use crate::error::{CoreError, CoreResult};
use crate::summary::{ActiveFilter, AssessmentSummary, CapabilitySummary, DevelopmentPlan, PlanItem};
use capframe_catalog::{builtin, Capability, Catalog, ProficiencyLevel, SelectedDescriptor};
use capframe_guide::{GuidedFilter, GuidedFilterSelection, RelevanceHint};
use capframe_store::{
    AssessmentResponse, AssessmentStore, DescriptorSet, ResponsePatch, SelectionSlot, Storage,
};
use std::sync::Arc;

/// One user's assessment session
#[derive(Debug)]
pub struct Session<'c> {
    catalog: &'c Catalog,
    store: AssessmentStore,
    selection_slot: SelectionSlot,
    selection: Option<GuidedFilterSelection>,
}

impl Session<'static> {
    /// Open a session over the built-in catalog with the configured storage
    #[must_use]
    pub fn open(config: &AppConfig) -> Self {
        tracing::info!(storage = ?config.storage, "opening session");
        Session::with_storage(builtin(), config.storage.build())
    }
}

impl<'c> Session<'c> {
    /// Open a session over an explicit catalog and storage backend
    ///
    /// A persisted selection naming an unknown role/function is dropped.
    #[must_use]
    pub fn with_storage(catalog: &'c Catalog, storage: Arc<dyn Storage>) -> Self {
        let store = AssessmentStore::load(Arc::clone(&storage));
        let selection_slot = SelectionSlot::new(storage);

        let selection = selection_slot.load().filter(|selection| {
            let known = GuidedFilter::new(catalog).is_known(selection);
            if !known {
                tracing::warn!(%selection, "persisted guided filter no longer exists; ignoring");
            }
            known
        });

        Self {
            catalog,
            store,
            selection_slot,
            selection,
        }
    }

    /// Catalog in use
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Read-only view of the assessment store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &AssessmentStore {
        &self.store
    }

    /// Resolver over the session's catalog
    #[inline]
    #[must_use]
    pub fn guide(&self) -> GuidedFilter<'c> {
        GuidedFilter::new(self.catalog)
    }

    // ------------------------------------------------------------------
    // Guided filter
    // ------------------------------------------------------------------

    /// Active role/function selection
    #[inline]
    #[must_use]
    pub fn active_filter(&self) -> Option<&GuidedFilterSelection> {
        self.selection.as_ref()
    }

    /// Activate a role or function
    ///
    /// # Errors
    /// Returns [`CoreError::UnknownFilter`] if the id is not in the catalog
    pub fn select_filter(&mut self, selection: GuidedFilterSelection) -> CoreResult<()> {
        if !self.guide().is_known(&selection) {
            return Err(CoreError::UnknownFilter(selection));
        }
        if let Err(e) = self.selection_slot.save(&selection) {
            tracing::warn!(error = %e, "failed to persist guided filter selection");
        }
        tracing::debug!(%selection, "guided filter selected");
        self.selection = Some(selection);
        Ok(())
    }

    /// Deactivate the guided filter
    pub fn clear_filter(&mut self) {
        if let Err(e) = self.selection_slot.clear() {
            tracing::warn!(error = %e, "failed to erase guided filter selection");
        }
        self.selection = None;
    }

    /// Required level for a capability under the active filter
    #[must_use]
    pub fn required_level(&self, capability_id: &str) -> Option<ProficiencyLevel> {
        let selection = self.selection.as_ref()?;
        self.guide().required_level(selection, capability_id)
    }

    /// Relevance hint for a capability under the active filter
    #[must_use]
    pub fn relevance(&self, capability: &Capability) -> Option<RelevanceHint> {
        let selection = self.selection.as_ref()?;
        self.guide().relevant_for(selection, capability)
    }

    // ------------------------------------------------------------------
    // Catalog lookups
    // ------------------------------------------------------------------

    /// Capability by id
    ///
    /// # Errors
    /// Returns [`CoreError::UnknownCapability`] for ids not in the catalog
    pub fn capability(&self, capability_id: &str) -> CoreResult<&'c Capability> {
        self.catalog
            .capability(capability_id)
            .ok_or_else(|| CoreError::UnknownCapability(capability_id.to_string()))
    }

    /// Capability by id, falling back to the first capability
    #[must_use]
    pub fn capability_or_default(&self, capability_id: &str) -> Option<&'c Capability> {
        self.catalog
            .capability(capability_id)
            .or_else(|| self.catalog.first_capability())
    }

    fn check_descriptors<'d>(
        capability: &Capability,
        descriptors: impl IntoIterator<Item = &'d SelectedDescriptor>,
    ) -> CoreResult<()> {
        match descriptors
            .into_iter()
            .find(|d| !capability.contains_descriptor(**d))
        {
            Some(&descriptor) => Err(CoreError::DescriptorOutOfRange {
                capability_id: capability.id.clone(),
                descriptor,
            }),
            None => Ok(()),
        }
    }

    // ------------------------------------------------------------------
    // Assessment
    // ------------------------------------------------------------------

    /// Response for a capability, `None` if never touched
    #[inline]
    #[must_use]
    pub fn response(&self, capability_id: &str) -> Option<&AssessmentResponse> {
        self.store.get_response(capability_id)
    }

    /// Merge a validated partial update
    ///
    /// # Errors
    /// Returns error if the capability is unknown or the patch references a
    /// descriptor the capability does not have; nothing is stored then
    pub fn update_response(
        &mut self,
        capability_id: &str,
        patch: ResponsePatch,
    ) -> CoreResult<&AssessmentResponse> {
        let capability = self.capability(capability_id)?;
        let referenced = patch
            .demonstrated_descriptors
            .iter()
            .chain(patch.development_focus.iter())
            .flatten();
        Self::check_descriptors(capability, referenced)?;
        Ok(self.store.update_response(capability_id, patch))
    }

    /// Set or clear the current level
    ///
    /// # Errors
    /// Returns [`CoreError::UnknownCapability`] for ids not in the catalog
    pub fn set_current_level(
        &mut self,
        capability_id: &str,
        level: Option<ProficiencyLevel>,
    ) -> CoreResult<&AssessmentResponse> {
        self.update_response(capability_id, ResponsePatch::new().current_level(level))
    }

    /// Set or clear the desired level
    ///
    /// # Errors
    /// Returns [`CoreError::UnknownCapability`] for ids not in the catalog
    pub fn set_desired_level(
        &mut self,
        capability_id: &str,
        level: Option<ProficiencyLevel>,
    ) -> CoreResult<&AssessmentResponse> {
        self.update_response(capability_id, ResponsePatch::new().desired_level(level))
    }

    /// Replace the notes
    ///
    /// # Errors
    /// Returns [`CoreError::UnknownCapability`] for ids not in the catalog
    pub fn set_notes(
        &mut self,
        capability_id: &str,
        notes: impl Into<String>,
    ) -> CoreResult<&AssessmentResponse> {
        self.update_response(capability_id, ResponsePatch::new().notes(notes))
    }

    /// Include or exclude a capability from the development plan
    ///
    /// # Errors
    /// Returns [`CoreError::UnknownCapability`] for ids not in the catalog
    pub fn set_included(
        &mut self,
        capability_id: &str,
        included: bool,
    ) -> CoreResult<&AssessmentResponse> {
        self.update_response(capability_id, ResponsePatch::new().included(included))
    }

    /// Toggle a descriptor in the demonstrated or focus set
    ///
    /// Returns whether the descriptor is selected afterwards. Lower levels are
    /// never ticked on the user's behalf.
    ///
    /// # Errors
    /// Returns error if the capability is unknown or has no such descriptor
    pub fn toggle(
        &mut self,
        capability_id: &str,
        set: DescriptorSet,
        descriptor: SelectedDescriptor,
    ) -> CoreResult<bool> {
        let capability = self.capability(capability_id)?;
        Self::check_descriptors(capability, [&descriptor])?;
        Ok(self.store.toggle(capability_id, set, descriptor))
    }

    /// Toggle a descriptor in the demonstrated set
    ///
    /// # Errors
    /// Returns error if the capability is unknown or has no such descriptor
    #[inline]
    pub fn toggle_demonstrated(
        &mut self,
        capability_id: &str,
        descriptor: SelectedDescriptor,
    ) -> CoreResult<bool> {
        self.toggle(capability_id, DescriptorSet::Demonstrated, descriptor)
    }

    /// Toggle a descriptor in the development focus set
    ///
    /// # Errors
    /// Returns error if the capability is unknown or has no such descriptor
    #[inline]
    pub fn toggle_focus(
        &mut self,
        capability_id: &str,
        descriptor: SelectedDescriptor,
    ) -> CoreResult<bool> {
        self.toggle(capability_id, DescriptorSet::Focus, descriptor)
    }

    /// Forget everything recorded for a capability
    pub fn remove_capability(&mut self, capability_id: &str) -> bool {
        self.store.remove_capability(capability_id)
    }

    /// Reset the whole assessment
    ///
    /// The guided filter selection is kept.
    pub fn clear_assessment(&mut self) {
        self.store.clear_assessment();
    }

    /// Capabilities with a current level
    #[inline]
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.store.completed_count()
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// Overview of every catalog capability
    #[must_use]
    pub fn summary(&self) -> AssessmentSummary {
        let capabilities = self
            .catalog
            .capabilities()
            .iter()
            .map(|capability| {
                CapabilitySummary::build(
                    capability,
                    self.store.get_response(&capability.id),
                    self.required_level(&capability.id),
                )
            })
            .collect();

        let active_filter = self.selection.as_ref().and_then(|selection| {
            self.guide().describe(selection).map(|name| ActiveFilter {
                selection: selection.clone(),
                name: name.to_string(),
            })
        });

        AssessmentSummary {
            capabilities,
            completed_count: self.completed_count(),
            total_capabilities: self.catalog.len(),
            last_updated: self.store.last_updated(),
            active_filter,
        }
    }

    /// Development focus of every included capability
    ///
    /// Capabilities with neither a desired level nor focus descriptors are
    /// left out. Responses for ids no longer in the catalog are skipped.
    #[must_use]
    pub fn development_plan(&self) -> DevelopmentPlan {
        let items = self
            .catalog
            .capabilities()
            .iter()
            .filter_map(|capability| {
                let response = self.store.get_response(&capability.id)?;
                let wanted =
                    response.desired_level.is_some() || !response.development_focus.is_empty();
                (response.is_included && wanted).then(|| PlanItem::build(capability, response))
            })
            .collect();
        DevelopmentPlan { items }
    }
}
