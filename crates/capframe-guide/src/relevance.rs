//! Role-relevant descriptor selection
//!
//! Which descriptors of a required level are highlighted is a presentation
//! heuristic. The only contract is stability: the result is a pure function
//! of `(level, total)` and stays within `0..total`.

use capframe_catalog::ProficiencyLevel;
use serde::Serialize;

/// Descriptor positions to highlight within a level
///
/// A window of `ceil(total / 2)` consecutive positions starting at
/// `level.ordinal() * total / 4`, wrapping past the end, returned ascending.
#[must_use]
pub fn relevant_descriptor_indexes(level: ProficiencyLevel, total: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }

    let window = total.div_ceil(2);
    let start = window_start(level, total);

    let mut indexes: Vec<usize> = (0..window)
        .map(|offset| wrapped_position(start, offset, total))
        .collect();
    indexes.sort_unstable();
    indexes
}

/// `ordinal * total / 4` without forming the product
fn window_start(level: ProficiencyLevel, total: usize) -> usize {
    let levels = ProficiencyLevel::ALL.len();
    let ordinal = level.ordinal();
    (total / levels) * ordinal + (total % levels) * ordinal / levels
}

/// `(start + offset) % total` for `start, offset < total` without overflow
fn wrapped_position(start: usize, offset: usize, total: usize) -> usize {
    let room = total - start;
    if offset < room {
        start + offset
    } else {
        offset - room
    }
}

/// Guidance for one capability under the active filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelevanceHint {
    /// Capability the hint is for
    pub capability_id: String,
    /// Level the role/function expects
    pub required_level: ProficiencyLevel,
    /// Highlighted positions within `required_level`
    pub relevant_indexes: Vec<usize>,
}

impl RelevanceHint {
    /// Whether a descriptor is highlighted
    ///
    /// Descriptors outside the required level are never relevant.
    #[must_use]
    pub fn is_relevant(&self, level: ProficiencyLevel, descriptor_index: usize) -> bool {
        level == self.required_level && self.relevant_indexes.contains(&descriptor_index)
    }
}
