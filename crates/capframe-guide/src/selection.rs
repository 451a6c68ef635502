//! Guided filter selection

use capframe_catalog::{FilterType, UnknownFilterType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The active role or function, if the user picked one
///
/// Wire format: `{"filterType":"role","filterId":"contract-administrator"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidedFilterSelection {
    /// Table the id belongs to
    pub filter_type: FilterType,
    /// Role or function id
    pub filter_id: String,
}

impl GuidedFilterSelection {
    /// Create selection
    #[inline]
    #[must_use]
    pub fn new(filter_type: FilterType, filter_id: impl Into<String>) -> Self {
        Self {
            filter_type,
            filter_id: filter_id.into(),
        }
    }

    /// Select a role
    #[inline]
    #[must_use]
    pub fn role(id: impl Into<String>) -> Self {
        Self::new(FilterType::Role, id)
    }

    /// Select a function
    #[inline]
    #[must_use]
    pub fn function(id: impl Into<String>) -> Self {
        Self::new(FilterType::Function, id)
    }
}

impl fmt::Display for GuidedFilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filter_type, self.filter_id)
    }
}

impl FromStr for GuidedFilterSelection {
    type Err = SelectionParseError;

    /// Parse `role:<id>` or `function:<id>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s
            .split_once(':')
            .ok_or_else(|| SelectionParseError::MissingSeparator(s.to_string()))?;
        let id = id.trim();
        if id.is_empty() {
            return Err(SelectionParseError::EmptyId);
        }
        Ok(Self::new(kind.parse()?, id))
    }
}

/// Selection string could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionParseError {
    /// No `:` between type and id
    #[error("expected `role:<id>` or `function:<id>`, got {0}")]
    MissingSeparator(String),

    /// Nothing after the separator
    #[error("filter id is empty")]
    EmptyId,

    /// Type was not `role` or `function`
    #[error(transparent)]
    FilterType(#[from] UnknownFilterType),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format() {
        let selection = GuidedFilterSelection::role("contract-administrator");
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(
            json,
            r#"{"filterType":"role","filterId":"contract-administrator"}"#
        );
        let back: GuidedFilterSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, selection);
    }

    #[test]
    fn parse_and_display() {
        let selection: GuidedFilterSelection = "function:pre-award".parse().unwrap();
        assert_eq!(selection, GuidedFilterSelection::function("pre-award"));
        assert_eq!(selection.to_string(), "function:pre-award");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "pre-award".parse::<GuidedFilterSelection>(),
            Err(SelectionParseError::MissingSeparator("pre-award".to_string()))
        );
        assert_eq!(
            "role: ".parse::<GuidedFilterSelection>(),
            Err(SelectionParseError::EmptyId)
        );
        assert!(matches!(
            "team:x".parse::<GuidedFilterSelection>(),
            Err(SelectionParseError::FilterType(_))
        ));
    }
}
