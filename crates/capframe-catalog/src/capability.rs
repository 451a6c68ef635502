//! Capability and level descriptor types

use crate::level::{ProficiencyLevel, SelectedDescriptor};
use serde::{Deserialize, Serialize};

/// A named professional skill area with four ordered proficiency levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    /// Unique identifier (kebab-case)
    pub id: String,
    /// Display name
    pub name: String,
    /// One-paragraph description
    pub description: String,
    /// Level descriptors, ordered Foundation → Exemplar
    pub levels: Vec<LevelDescriptor>,
}

impl Capability {
    /// Create capability without levels
    #[must_use]
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            levels: Vec::with_capacity(ProficiencyLevel::ALL.len()),
        }
    }

    /// Append a level descriptor
    #[must_use]
    pub fn with_level(mut self, level: LevelDescriptor) -> Self {
        self.levels.push(level);
        self
    }

    /// Descriptor block for a level
    #[must_use]
    pub fn level(&self, level: ProficiencyLevel) -> Option<&LevelDescriptor> {
        self.levels.iter().find(|l| l.level == level)
    }

    /// Text of a referenced descriptor, `None` if the reference is stale
    #[must_use]
    pub fn descriptor_text(&self, descriptor: SelectedDescriptor) -> Option<&str> {
        self.level(descriptor.level)?
            .bullet_points
            .get(descriptor.descriptor_index)
            .map(String::as_str)
    }

    /// Whether a reference points at an existing descriptor
    #[inline]
    #[must_use]
    pub fn contains_descriptor(&self, descriptor: SelectedDescriptor) -> bool {
        self.descriptor_text(descriptor).is_some()
    }

    /// Number of descriptors at a level (0 for a missing level)
    #[must_use]
    pub fn descriptor_count(&self, level: ProficiencyLevel) -> usize {
        self.level(level).map_or(0, |l| l.bullet_points.len())
    }
}

/// Descriptor statements for one proficiency level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDescriptor {
    /// The level described
    pub level: ProficiencyLevel,
    /// Ordered descriptor statements; the index is the descriptor's identity
    pub bullet_points: Vec<String>,
    /// How this level aligns with external frameworks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment_statement: Option<String>,
    /// Per-descriptor alignment annotations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptor_alignments: Vec<DescriptorAlignment>,
}

impl LevelDescriptor {
    /// Create level with descriptor statements
    #[must_use]
    pub fn new(level: ProficiencyLevel, bullet_points: &[&str]) -> Self {
        Self {
            level,
            bullet_points: bullet_points.iter().map(|s| (*s).to_string()).collect(),
            alignment_statement: None,
            descriptor_alignments: Vec::new(),
        }
    }

    /// With level alignment statement
    #[must_use]
    pub fn with_alignment_statement(mut self, statement: &str) -> Self {
        self.alignment_statement = Some(statement.to_string());
        self
    }

    /// With a descriptor alignment annotation
    #[must_use]
    pub fn with_alignment(
        mut self,
        descriptor_index: usize,
        text: &str,
        frameworks: &[&str],
    ) -> Self {
        self.descriptor_alignments.push(DescriptorAlignment {
            descriptor_index,
            text: text.to_string(),
            frameworks: frameworks.iter().map(|s| (*s).to_string()).collect(),
        });
        self
    }

    /// Alignment annotations attached to one descriptor
    pub fn alignments_for(
        &self,
        descriptor_index: usize,
    ) -> impl Iterator<Item = &DescriptorAlignment> {
        self.descriptor_alignments
            .iter()
            .filter(move |a| a.descriptor_index == descriptor_index)
    }
}

/// Alignment of a single descriptor with one or more external frameworks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorAlignment {
    /// Index into the owning level's bullet points
    pub descriptor_index: usize,
    /// Alignment note
    pub text: String,
    /// External frameworks referenced
    pub frameworks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Capability {
        Capability::new("sample", "Sample", "A sample capability")
            .with_level(
                LevelDescriptor::new(ProficiencyLevel::Foundation, &["one", "two"])
                    .with_alignment(1, "maps to X", &["X"]),
            )
            .with_level(LevelDescriptor::new(ProficiencyLevel::Intermediate, &["three"]))
    }

    #[test]
    fn descriptor_text_lookup() {
        let cap = sample();
        let d = SelectedDescriptor::new(ProficiencyLevel::Foundation, 1);
        assert_eq!(cap.descriptor_text(d), Some("two"));
    }

    #[test]
    fn stale_reference_is_none() {
        let cap = sample();
        assert!(!cap.contains_descriptor(SelectedDescriptor::new(ProficiencyLevel::Foundation, 2)));
        assert!(!cap.contains_descriptor(SelectedDescriptor::new(ProficiencyLevel::Exemplar, 0)));
    }

    #[test]
    fn descriptor_count_missing_level() {
        let cap = sample();
        assert_eq!(cap.descriptor_count(ProficiencyLevel::Foundation), 2);
        assert_eq!(cap.descriptor_count(ProficiencyLevel::Advanced), 0);
    }

    #[test]
    fn alignments_for_filters_by_index() {
        let cap = sample();
        let level = cap.level(ProficiencyLevel::Foundation).unwrap();
        assert_eq!(level.alignments_for(1).count(), 1);
        assert_eq!(level.alignments_for(0).count(), 0);
    }

    #[test]
    fn optional_fields_omitted_when_empty() {
        let level = LevelDescriptor::new(ProficiencyLevel::Exemplar, &["x"]);
        let json = serde_json::to_value(&level).unwrap();
        assert!(json.get("alignmentStatement").is_none());
        assert!(json.get("descriptorAlignments").is_none());
        assert_eq!(json["bulletPoints"][0], "x");
    }
}
