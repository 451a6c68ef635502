//! Assessment responses and partial updates

use capframe_catalog::{ProficiencyLevel, SelectedDescriptor};
use serde::{Deserialize, Serialize};

/// A user's self-assessment for one capability
///
/// Created lazily on the first update for a capability id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    /// Capability assessed
    pub capability_id: String,
    /// Level the user places themselves at
    #[serde(default)]
    pub current_level: Option<ProficiencyLevel>,
    /// Level the user is aiming for
    #[serde(default)]
    pub desired_level: Option<ProficiencyLevel>,
    /// Descriptors the user can demonstrate, in toggle order
    #[serde(default)]
    pub demonstrated_descriptors: Vec<SelectedDescriptor>,
    /// Descriptors the user wants to develop, in toggle order
    #[serde(default)]
    pub development_focus: Vec<SelectedDescriptor>,
    /// Free-text notes
    #[serde(default)]
    pub notes: String,
    /// Whether the capability appears in the development plan
    #[serde(default = "included_by_default")]
    pub is_included: bool,
}

fn included_by_default() -> bool {
    true
}

impl AssessmentResponse {
    /// Seed record for a capability with nothing assessed
    #[must_use]
    pub fn new(capability_id: impl Into<String>) -> Self {
        Self {
            capability_id: capability_id.into(),
            current_level: None,
            desired_level: None,
            demonstrated_descriptors: Vec::new(),
            development_focus: Vec::new(),
            notes: String::new(),
            is_included: included_by_default(),
        }
    }

    /// Overwrite every field the patch provides
    ///
    /// Lists are replaced wholesale, never merged.
    pub fn apply(&mut self, patch: ResponsePatch) {
        let ResponsePatch {
            current_level,
            desired_level,
            demonstrated_descriptors,
            development_focus,
            notes,
            is_included,
        } = patch;

        if let Some(level) = current_level {
            self.current_level = level;
        }
        if let Some(level) = desired_level {
            self.desired_level = level;
        }
        if let Some(descriptors) = demonstrated_descriptors {
            self.demonstrated_descriptors = descriptors;
        }
        if let Some(descriptors) = development_focus {
            self.development_focus = descriptors;
        }
        if let Some(notes) = notes {
            self.notes = notes;
        }
        if let Some(included) = is_included {
            self.is_included = included;
        }
    }

    /// Whether a current level has been chosen
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_level.is_some()
    }

    /// Whether a descriptor is in the demonstrated set
    #[inline]
    #[must_use]
    pub fn is_demonstrated(&self, descriptor: SelectedDescriptor) -> bool {
        self.demonstrated_descriptors.contains(&descriptor)
    }

    /// Whether a descriptor is in the development focus set
    #[inline]
    #[must_use]
    pub fn is_focus(&self, descriptor: SelectedDescriptor) -> bool {
        self.development_focus.contains(&descriptor)
    }

    /// Demonstrated descriptors at one level
    pub fn demonstrated_at(
        &self,
        level: ProficiencyLevel,
    ) -> impl Iterator<Item = &SelectedDescriptor> {
        self.demonstrated_descriptors
            .iter()
            .filter(move |d| d.level == level)
    }
}

/// Partial update for an [`AssessmentResponse`]
///
/// `None` leaves a field untouched. The level fields are doubly optional so
/// a patch can clear a level (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponsePatch {
    /// New current level
    pub current_level: Option<Option<ProficiencyLevel>>,
    /// New desired level
    pub desired_level: Option<Option<ProficiencyLevel>>,
    /// Replacement demonstrated set
    pub demonstrated_descriptors: Option<Vec<SelectedDescriptor>>,
    /// Replacement development focus set
    pub development_focus: Option<Vec<SelectedDescriptor>>,
    /// Replacement notes
    pub notes: Option<String>,
    /// New inclusion flag
    pub is_included: Option<bool>,
}

impl ResponsePatch {
    /// Empty patch
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the current level
    #[inline]
    #[must_use]
    pub fn current_level(mut self, level: Option<ProficiencyLevel>) -> Self {
        self.current_level = Some(level);
        self
    }

    /// Set or clear the desired level
    #[inline]
    #[must_use]
    pub fn desired_level(mut self, level: Option<ProficiencyLevel>) -> Self {
        self.desired_level = Some(level);
        self
    }

    /// Replace the demonstrated set
    #[inline]
    #[must_use]
    pub fn demonstrated(mut self, descriptors: Vec<SelectedDescriptor>) -> Self {
        self.demonstrated_descriptors = Some(descriptors);
        self
    }

    /// Replace the development focus set
    #[inline]
    #[must_use]
    pub fn focus(mut self, descriptors: Vec<SelectedDescriptor>) -> Self {
        self.development_focus = Some(descriptors);
        self
    }

    /// Replace the notes
    #[inline]
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set the inclusion flag
    #[inline]
    #[must_use]
    pub fn included(mut self, included: bool) -> Self {
        self.is_included = Some(included);
        self
    }

    /// Whether the patch changes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Toggle a descriptor in a set
///
/// Removes the descriptor if present, otherwise appends it. Returns the new
/// set and whether the descriptor is now selected.
#[must_use]
pub fn toggle_descriptor(
    set: &[SelectedDescriptor],
    descriptor: SelectedDescriptor,
) -> (Vec<SelectedDescriptor>, bool) {
    if set.contains(&descriptor) {
        let remaining = set.iter().copied().filter(|d| *d != descriptor).collect();
        (remaining, false)
    } else {
        let mut extended = set.to_vec();
        extended.push(descriptor);
        (extended, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const F0: SelectedDescriptor = SelectedDescriptor {
        level: ProficiencyLevel::Foundation,
        descriptor_index: 0,
    };
    const A1: SelectedDescriptor = SelectedDescriptor {
        level: ProficiencyLevel::Advanced,
        descriptor_index: 1,
    };

    #[test]
    fn seed_record() {
        let response = AssessmentResponse::new("initiation");
        assert_eq!(response.current_level, None);
        assert_eq!(response.desired_level, None);
        assert!(response.notes.is_empty());
        assert!(response.demonstrated_descriptors.is_empty());
        assert!(response.is_included);
        assert!(!response.is_complete());
    }

    #[test]
    fn apply_overwrites_only_provided_fields() {
        let mut response = AssessmentResponse::new("x");
        response.apply(
            ResponsePatch::new()
                .current_level(Some(ProficiencyLevel::Intermediate))
                .demonstrated(vec![F0]),
        );
        response.apply(ResponsePatch::new().notes("hello"));

        assert_eq!(response.current_level, Some(ProficiencyLevel::Intermediate));
        assert_eq!(response.demonstrated_descriptors, vec![F0]);
        assert_eq!(response.notes, "hello");
    }

    #[test]
    fn apply_replaces_lists_wholesale() {
        let mut response = AssessmentResponse::new("x");
        response.apply(ResponsePatch::new().focus(vec![F0, A1]));
        response.apply(ResponsePatch::new().focus(vec![A1]));
        assert_eq!(response.development_focus, vec![A1]);
    }

    #[test]
    fn apply_can_clear_level() {
        let mut response = AssessmentResponse::new("x");
        response.apply(ResponsePatch::new().desired_level(Some(ProficiencyLevel::Exemplar)));
        response.apply(ResponsePatch::new().desired_level(None));
        assert_eq!(response.desired_level, None);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let (set, on) = toggle_descriptor(&[], F0);
        assert!(on);
        assert_eq!(set, vec![F0]);

        let (set, on) = toggle_descriptor(&set, F0);
        assert!(!on);
        assert!(set.is_empty());
    }

    #[test]
    fn toggle_preserves_insertion_order() {
        let (set, _) = toggle_descriptor(&[A1], F0);
        assert_eq!(set, vec![A1, F0]);
    }

    #[test]
    fn empty_patch() {
        assert!(ResponsePatch::new().is_empty());
        assert!(!ResponsePatch::new().included(false).is_empty());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let response: AssessmentResponse =
            serde_json::from_str(r#"{"capabilityId":"closure","notes":"n"}"#).unwrap();
        assert_eq!(response.capability_id, "closure");
        assert!(response.is_included);
        assert!(response.development_focus.is_empty());
    }

    #[test]
    fn null_levels_serialized() {
        let json = serde_json::to_value(AssessmentResponse::new("x")).unwrap();
        assert!(json["currentLevel"].is_null());
        assert_eq!(json["isIncluded"], true);
    }
}
