//! Role and function mappings
//!
//! A [`RoleMapping`] declares, per capability, the proficiency level a role
//! (or an organisational function) expects. Roles and functions share the
//! same shape and live in separate tables of the [`Catalog`](crate::Catalog).

use crate::level::ProficiencyLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which table a mapping lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Job role (e.g. contract administrator)
    Role,
    /// Organisational function (e.g. pre-award)
    Function,
}

impl FilterType {
    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FilterType::Role => "role",
            FilterType::Function => "function",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterType {
    type Err = UnknownFilterType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "role" => Ok(FilterType::Role),
            "function" => Ok(FilterType::Function),
            _ => Err(UnknownFilterType(s.to_string())),
        }
    }
}

/// Filter type name was neither `role` nor `function`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter type: {0} (expected `role` or `function`)")]
pub struct UnknownFilterType(pub String);

/// Required level for one capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityMapping {
    /// Capability identifier
    pub capability_id: String,
    /// Level the role expects
    pub level: ProficiencyLevel,
}

/// A named role or function with its capability mappings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMapping {
    /// Unique identifier within its table
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered mappings; the first entry for a capability is authoritative
    pub capabilities: Vec<CapabilityMapping>,
}

impl RoleMapping {
    /// Create mapping without capabilities
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            capabilities: Vec::new(),
        }
    }

    /// With description
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Require a level for a capability
    #[must_use]
    pub fn requires(mut self, capability_id: &str, level: ProficiencyLevel) -> Self {
        self.capabilities.push(CapabilityMapping {
            capability_id: capability_id.to_string(),
            level,
        });
        self
    }

    /// Required level for a capability (first match wins)
    #[must_use]
    pub fn level_for(&self, capability_id: &str) -> Option<ProficiencyLevel> {
        self.capabilities
            .iter()
            .find(|m| m.capability_id == capability_id)
            .map(|m| m.level)
    }
}
