//! Proficiency levels and descriptor references
//!
//! Provides [`ProficiencyLevel`] (the four ordered levels every capability
//! carries) and [`SelectedDescriptor`] (a positional reference into a level's
//! bullet points).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Proficiency level within a capability
///
/// Levels are totally ordered: `Foundation < Intermediate < Advanced < Exemplar`.
/// Serialized as the upper-case level name (`"FOUNDATION"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProficiencyLevel {
    /// Entry level
    Foundation,
    /// Working independently
    Intermediate,
    /// Leading others
    Advanced,
    /// Shaping practice beyond the organisation
    Exemplar,
}

impl ProficiencyLevel {
    /// All levels in ascending order
    pub const ALL: [ProficiencyLevel; 4] = [
        ProficiencyLevel::Foundation,
        ProficiencyLevel::Intermediate,
        ProficiencyLevel::Advanced,
        ProficiencyLevel::Exemplar,
    ];

    /// Zero-based position in the ordering
    #[inline]
    #[must_use]
    pub fn ordinal(self) -> usize {
        match self {
            ProficiencyLevel::Foundation => 0,
            ProficiencyLevel::Intermediate => 1,
            ProficiencyLevel::Advanced => 2,
            ProficiencyLevel::Exemplar => 3,
        }
    }

    /// Wire name (`"FOUNDATION"`, ...)
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProficiencyLevel::Foundation => "FOUNDATION",
            ProficiencyLevel::Intermediate => "INTERMEDIATE",
            ProficiencyLevel::Advanced => "ADVANCED",
            ProficiencyLevel::Exemplar => "EXEMPLAR",
        }
    }

    /// Human-readable label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProficiencyLevel::Foundation => "Foundation",
            ProficiencyLevel::Intermediate => "Intermediate",
            ProficiencyLevel::Advanced => "Advanced",
            ProficiencyLevel::Exemplar => "Exemplar",
        }
    }

    /// Next level up, if any
    #[inline]
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.ordinal() + 1).copied()
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProficiencyLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

/// Level name did not match any proficiency level
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown proficiency level: {0}")]
pub struct UnknownLevel(pub String);

/// Reference to one descriptor of a capability
///
/// Identity is positional: `descriptor_index` points into the bullet points
/// of `level`. Catalog descriptor lists are append-only so persisted
/// references stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedDescriptor {
    /// Level the descriptor belongs to
    pub level: ProficiencyLevel,
    /// Position within the level's bullet points
    pub descriptor_index: usize,
}

impl SelectedDescriptor {
    /// Create new descriptor reference
    #[inline]
    #[must_use]
    pub fn new(level: ProficiencyLevel, descriptor_index: usize) -> Self {
        Self {
            level,
            descriptor_index,
        }
    }
}

impl fmt::Display for SelectedDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.level, self.descriptor_index)
    }
}
