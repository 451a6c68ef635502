//! Summary and development plan views
//!
//! Both are computed on demand from the catalog and the store; neither is
//! persisted. `Display` renders the printable form.

use capframe_catalog::{Capability, ProficiencyLevel};
use capframe_guide::GuidedFilterSelection;
use capframe_store::AssessmentResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Guidance shown with every summary; progression is never applied automatically
pub const PROGRESSION_NOTE: &str = "Levels are cumulative: demonstrating a level implies the \
levels below it. Tick descriptors at every level you can evidence.";

/// Whole-assessment overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    /// One row per catalog capability, catalog order
    pub capabilities: Vec<CapabilitySummary>,
    /// Capabilities with a current level
    pub completed_count: usize,
    /// Capabilities in the catalog
    pub total_capabilities: usize,
    /// Time of the last assessment change
    pub last_updated: DateTime<Utc>,
    /// Active guided filter, if any
    pub active_filter: Option<ActiveFilter>,
}

/// Active guided filter as shown in the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFilter {
    /// The selection
    pub selection: GuidedFilterSelection,
    /// Role/function display name
    pub name: String,
}

/// One capability's row in the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySummary {
    /// Capability id
    pub capability_id: String,
    /// Capability name
    pub name: String,
    /// Whether any response exists
    pub assessed: bool,
    /// Self-assessed level
    pub current_level: Option<ProficiencyLevel>,
    /// Target level
    pub desired_level: Option<ProficiencyLevel>,
    /// Level the active filter requires
    pub required_level: Option<ProficiencyLevel>,
    /// Demonstrated descriptors per level
    pub levels: Vec<LevelProgress>,
    /// Development focus descriptors
    pub focus_count: usize,
    /// Notes
    pub notes: String,
    /// Whether the capability is in the development plan
    pub is_included: bool,
}

impl CapabilitySummary {
    pub(crate) fn build(
        capability: &Capability,
        response: Option<&AssessmentResponse>,
        required_level: Option<ProficiencyLevel>,
    ) -> Self {
        let levels = capability
            .levels
            .iter()
            .map(|level| LevelProgress {
                level: level.level,
                demonstrated: response.map_or(0, |r| {
                    r.demonstrated_at(level.level)
                        .filter(|d| d.descriptor_index < level.bullet_points.len())
                        .count()
                }),
                total: level.bullet_points.len(),
            })
            .collect();

        Self {
            capability_id: capability.id.clone(),
            name: capability.name.clone(),
            assessed: response.is_some(),
            current_level: response.and_then(|r| r.current_level),
            desired_level: response.and_then(|r| r.desired_level),
            required_level,
            levels,
            focus_count: response.map_or(0, |r| r.development_focus.len()),
            notes: response.map(|r| r.notes.clone()).unwrap_or_default(),
            is_included: response.map_or(true, |r| r.is_included),
        }
    }

    /// Whether the current level reaches the required level
    ///
    /// `None` when no level is required or none has been chosen.
    #[must_use]
    pub fn meets_required(&self) -> Option<bool> {
        Some(self.current_level? >= self.required_level?)
    }
}

/// Demonstrated count for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    /// Level
    pub level: ProficiencyLevel,
    /// Descriptors ticked as demonstrated
    pub demonstrated: usize,
    /// Descriptors at the level
    pub total: usize,
}

/// Focus descriptors grouped by capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentPlan {
    /// Included capabilities with a target or focus, catalog order
    pub items: Vec<PlanItem>,
}

impl DevelopmentPlan {
    /// Whether there is nothing to plan
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Plan entry for one capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    /// Capability id
    pub capability_id: String,
    /// Capability name
    pub name: String,
    /// Self-assessed level
    pub current_level: Option<ProficiencyLevel>,
    /// Target level
    pub desired_level: Option<ProficiencyLevel>,
    /// Focus descriptors resolved to their text, toggle order
    pub focus: Vec<PlanDescriptor>,
    /// Notes
    pub notes: String,
}

/// A focus descriptor with its statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDescriptor {
    /// Level
    pub level: ProficiencyLevel,
    /// Position within the level
    pub descriptor_index: usize,
    /// Descriptor statement
    pub text: String,
}

impl PlanItem {
    pub(crate) fn build(capability: &Capability, response: &AssessmentResponse) -> Self {
        let focus = response
            .development_focus
            .iter()
            .filter_map(|&d| match capability.descriptor_text(d) {
                Some(text) => Some(PlanDescriptor {
                    level: d.level,
                    descriptor_index: d.descriptor_index,
                    text: text.to_string(),
                }),
                None => {
                    tracing::warn!(
                        capability_id = %capability.id,
                        descriptor = %d,
                        "focus descriptor no longer in catalog; skipped"
                    );
                    None
                }
            })
            .collect();

        Self {
            capability_id: capability.id.clone(),
            name: capability.name.clone(),
            current_level: response.current_level,
            desired_level: response.desired_level,
            focus,
            notes: response.notes.clone(),
        }
    }
}

fn level_or_dash(level: Option<ProficiencyLevel>) -> &'static str {
    level.map_or("-", ProficiencyLevel::label)
}

impl fmt::Display for AssessmentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Capability Self-Assessment Summary")?;
        writeln!(f, "==================================")?;
        writeln!(
            f,
            "Completed: {}/{}    Last updated: {}",
            self.completed_count,
            self.total_capabilities,
            self.last_updated.format("%Y-%m-%d %H:%M UTC")
        )?;
        if let Some(filter) = &self.active_filter {
            writeln!(f, "Guided filter: {} ({})", filter.name, filter.selection.filter_type)?;
        }
        writeln!(f)?;

        for row in &self.capabilities {
            write!(f, "{}", row.name)?;
            if !row.is_included {
                write!(f, " [excluded]")?;
            }
            writeln!(f)?;
            write!(
                f,
                "  Current: {:<12} Desired: {:<12}",
                level_or_dash(row.current_level),
                level_or_dash(row.desired_level)
            )?;
            if let Some(required) = row.required_level {
                let mark = match row.meets_required() {
                    Some(true) => " (met)",
                    Some(false) => " (gap)",
                    None => "",
                };
                write!(f, " Required: {}{mark}", required.label())?;
            }
            writeln!(f)?;

            let progress: Vec<String> = row
                .levels
                .iter()
                .map(|p| format!("{} {}/{}", p.level.label(), p.demonstrated, p.total))
                .collect();
            writeln!(f, "  Demonstrated: {}", progress.join(", "))?;
            if row.focus_count > 0 {
                writeln!(f, "  Development focus: {}", row.focus_count)?;
            }
            if !row.notes.is_empty() {
                writeln!(f, "  Notes: {}", row.notes)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{PROGRESSION_NOTE}")
    }
}

impl fmt::Display for DevelopmentPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Development Plan")?;
        writeln!(f, "================")?;
        if self.items.is_empty() {
            return writeln!(f, "No development focus selected yet.");
        }
        for item in &self.items {
            writeln!(f)?;
            writeln!(
                f,
                "{} ({} -> {})",
                item.name,
                level_or_dash(item.current_level),
                level_or_dash(item.desired_level)
            )?;
            for d in &item.focus {
                writeln!(f, "  [{}] {}", d.level.label(), d.text)?;
            }
            if !item.notes.is_empty() {
                writeln!(f, "  Notes: {}", item.notes)?;
            }
        }
        Ok(())
    }
}
