//! Persisted assessment state

use crate::response::AssessmentResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All responses plus the time of the last mutation
///
/// Wire format: `{"responses": {<capabilityId>: {...}}, "lastUpdated": "<ISO-8601>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentState {
    /// Responses keyed by capability id
    #[serde(default)]
    pub responses: BTreeMap<String, AssessmentResponse>,
    /// Time of the last mutation
    pub last_updated: DateTime<Utc>,
}

impl AssessmentState {
    /// Empty state stamped now
    #[must_use]
    pub fn empty() -> Self {
        Self {
            responses: BTreeMap::new(),
            last_updated: Utc::now(),
        }
    }

    /// Serialize to the persisted format
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse the persisted format
    ///
    /// Entries whose key disagrees with their `capabilityId` are re-keyed
    /// by the key, which is what lookups use.
    ///
    /// # Errors
    /// Returns error if the blob is not a valid state
    pub fn from_json(blob: &str) -> Result<Self, serde_json::Error> {
        let mut state: Self = serde_json::from_str(blob)?;
        for (id, response) in &mut state.responses {
            if response.capability_id != *id {
                tracing::warn!(
                    key = %id,
                    capability_id = %response.capability_id,
                    "persisted response key mismatch; using key"
                );
                response.capability_id.clone_from(id);
            }
        }
        Ok(state)
    }

    /// Number of responses with a current level
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.responses.values().filter(|r| r.is_complete()).count()
    }
}

impl Default for AssessmentState {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capframe_catalog::{ProficiencyLevel, SelectedDescriptor};
    use pretty_assertions::assert_eq;

    fn sample() -> AssessmentState {
        let mut state = AssessmentState::empty();
        let mut response = AssessmentResponse::new("initiation");
        response.current_level = Some(ProficiencyLevel::Advanced);
        response.demonstrated_descriptors =
            vec![SelectedDescriptor::new(ProficiencyLevel::Foundation, 0)];
        response.notes = "négociation \"quoted\"\nline two".to_string();
        state.responses.insert("initiation".to_string(), response);
        state
            .responses
            .insert("closure".to_string(), AssessmentResponse::new("closure"));
        state
    }

    #[test]
    fn json_roundtrip() {
        let state = sample();
        let blob = state.to_json().unwrap();
        assert_eq!(AssessmentState::from_json(&blob).unwrap(), state);
    }

    #[test]
    fn wire_field_names() {
        let value: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert!(value["lastUpdated"].is_string());
        assert_eq!(
            value["responses"]["initiation"]["currentLevel"],
            "ADVANCED"
        );
        assert_eq!(
            value["responses"]["initiation"]["demonstratedDescriptors"][0]["descriptorIndex"],
            0
        );
    }

    #[test]
    fn accepts_offset_timestamps() {
        let blob = r#"{"responses":{},"lastUpdated":"2024-03-01T10:00:00.000Z"}"#;
        let state = AssessmentState::from_json(blob).unwrap();
        assert!(state.responses.is_empty());
        assert_eq!(state.last_updated.to_rfc3339(), "2024-03-01T10:00:00+00:00");
    }

    #[test]
    fn rekeys_mismatched_entries() {
        let blob =
            r#"{"responses":{"a":{"capabilityId":"b"}},"lastUpdated":"2024-03-01T10:00:00Z"}"#;
        let state = AssessmentState::from_json(blob).unwrap();
        assert_eq!(state.responses["a"].capability_id, "a");
    }

    #[test]
    fn completed_count_counts_current_level() {
        assert_eq!(sample().completed_count(), 1);
    }

    #[test]
    fn malformed_is_error() {
        assert!(AssessmentState::from_json("{not json").is_err());
        assert!(AssessmentState::from_json(r#"{"responses":[]}"#).is_err());
    }
}
