//! Command-line arguments

use capframe_catalog::{FilterType, ProficiencyLevel, UnknownLevel};
use capframe_store::DescriptorSet;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Parser)]
#[command(name = "capframe", version, about = "Capability framework self-assessment")]
pub(crate) struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Keep assessment data in this directory (overrides the config file)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List capabilities with assessment status
    Capabilities,
    /// Show a capability's descriptors
    Show {
        /// Capability id
        id: String,
        /// Only this level
        #[arg(long)]
        level: Option<ProficiencyLevel>,
    },
    /// List roles and functions
    Roles,
    /// Manage the guided filter
    #[command(subcommand)]
    Filter(FilterCommand),
    /// Set or clear the current or desired level
    Level {
        /// Capability id
        id: String,
        /// Which level to set
        #[arg(value_enum)]
        which: LevelKind,
        /// Level name, or `none` to clear
        level: LevelChoice,
    },
    /// Toggle a descriptor
    Toggle(ToggleArgs),
    /// Replace a capability's notes
    Notes {
        /// Capability id
        id: String,
        /// New notes
        text: String,
    },
    /// Include or exclude a capability from the development plan
    Include {
        /// Capability id
        id: String,
        /// `true` or `false`
        #[arg(action = ArgAction::Set)]
        included: bool,
    },
    /// Forget everything recorded for a capability
    Remove {
        /// Capability id
        id: String,
    },
    /// Reset the whole assessment
    Clear,
    /// Print the assessment summary
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the development plan
    Plan {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save the framework reference document
    ExportDocument {
        /// Destination file
        #[arg(long, value_name = "PATH")]
        out: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum FilterCommand {
    /// Activate a role or function
    Set {
        /// `role` or `function`
        filter_type: FilterType,
        /// Role/function id
        id: String,
    },
    /// Deactivate the guided filter
    Clear,
    /// Show the active filter and what it requires
    Show,
}

#[derive(Debug, Args)]
pub(crate) struct ToggleArgs {
    /// Capability id
    pub(crate) id: String,
    /// Descriptor set to toggle in
    #[arg(value_enum)]
    pub(crate) set: SetKind,
    /// Descriptor level
    pub(crate) level: ProficiencyLevel,
    /// Descriptor position within the level, from 0
    pub(crate) index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LevelKind {
    Current,
    Desired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SetKind {
    Demonstrated,
    Focus,
}

impl From<SetKind> for DescriptorSet {
    fn from(kind: SetKind) -> Self {
        match kind {
            SetKind::Demonstrated => DescriptorSet::Demonstrated,
            SetKind::Focus => DescriptorSet::Focus,
        }
    }
}

/// A level, or `none`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LevelChoice(pub(crate) Option<ProficiencyLevel>);

impl FromStr for LevelChoice {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("none") {
            return Ok(Self(None));
        }
        s.parse().map(|level| Self(Some(level)))
    }
}
