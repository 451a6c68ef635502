//! Subcommand handlers
//!
//! Every handler writes to the supplied writer so output can be captured.

use crate::cli::{Command, FilterCommand, LevelKind, ToggleArgs};
use anyhow::{Context, Result};
use capframe_catalog::{ProficiencyLevel, SelectedDescriptor};
use capframe_core::{AppConfig, FrameworkDocument, Session, PROGRESSION_NOTE};
use capframe_guide::GuidedFilterSelection;
use std::io::Write;
use std::path::Path;

/// Run one subcommand against an open session
pub(crate) fn run(
    command: Command,
    session: &mut Session<'_>,
    config: &AppConfig,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Capabilities => list_capabilities(session, out),
        Command::Show { id, level } => show_capability(session, &id, level, out),
        Command::Roles => list_roles(session, out),
        Command::Filter(cmd) => filter(session, cmd, out),
        Command::Level { id, which, level } => {
            let response = match which {
                LevelKind::Current => session.set_current_level(&id, level.0)?,
                LevelKind::Desired => session.set_desired_level(&id, level.0)?,
            };
            let shown = match which {
                LevelKind::Current => response.current_level,
                LevelKind::Desired => response.desired_level,
            };
            writeln!(out, "{id}: {which:?} level {}", level_or_none(shown))?;
            Ok(())
        }
        Command::Toggle(args) => toggle(session, args, out),
        Command::Notes { id, text } => {
            session.set_notes(&id, text)?;
            writeln!(out, "{id}: notes updated")?;
            Ok(())
        }
        Command::Include { id, included } => {
            session.set_included(&id, included)?;
            let state = if included { "included in" } else { "excluded from" };
            writeln!(out, "{id}: {state} the development plan")?;
            Ok(())
        }
        Command::Remove { id } => {
            if session.remove_capability(&id) {
                writeln!(out, "{id}: assessment removed")?;
            } else {
                writeln!(out, "{id}: nothing recorded")?;
            }
            Ok(())
        }
        Command::Clear => {
            session.clear_assessment();
            writeln!(out, "Assessment cleared")?;
            Ok(())
        }
        Command::Summary { json } => {
            let summary = session.summary();
            if json {
                serde_json::to_writer_pretty(&mut *out, &summary)?;
                writeln!(out)?;
            } else {
                write!(out, "{summary}")?;
            }
            Ok(())
        }
        Command::Plan { json } => {
            let plan = session.development_plan();
            if json {
                serde_json::to_writer_pretty(&mut *out, &plan)?;
                writeln!(out)?;
            } else {
                write!(out, "{plan}")?;
            }
            Ok(())
        }
        Command::ExportDocument { out: path } => export_document(config, &path, out),
    }
}

fn level_or_none(level: Option<ProficiencyLevel>) -> &'static str {
    level.map_or("none", ProficiencyLevel::label)
}

fn list_capabilities(session: &Session<'_>, out: &mut dyn Write) -> Result<()> {
    for capability in session.catalog().capabilities() {
        let response = session.response(&capability.id);
        let status = match response.and_then(|r| r.current_level) {
            Some(level) => level.label(),
            None if response.is_some() => "in progress",
            None => "not assessed",
        };
        write!(out, "{:<24} {:<36} {status}", capability.id, capability.name)?;
        if let Some(required) = session.required_level(&capability.id) {
            write!(out, " (requires {})", required.label())?;
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "\n{}/{} capabilities assessed",
        session.completed_count(),
        session.catalog().len()
    )?;
    Ok(())
}

fn show_capability(
    session: &Session<'_>,
    id: &str,
    only: Option<ProficiencyLevel>,
    out: &mut dyn Write,
) -> Result<()> {
    let capability = session.capability(id)?;
    let response = session.response(id);
    let hint = session.relevance(capability);

    writeln!(out, "{}", capability.name)?;
    writeln!(out, "{}", capability.description)?;
    if let Some(hint) = &hint {
        writeln!(out, "Required by active filter: {}", hint.required_level.label())?;
    }
    if let Some(response) = response {
        writeln!(
            out,
            "Current: {}  Desired: {}",
            level_or_none(response.current_level),
            level_or_none(response.desired_level)
        )?;
    }

    for level in capability
        .levels
        .iter()
        .filter(|l| only.map_or(true, |wanted| l.level == wanted))
    {
        writeln!(out, "\n{} ({})", level.level.label(), level.level)?;
        if let Some(statement) = &level.alignment_statement {
            writeln!(out, "  {statement}")?;
        }
        for (index, text) in level.bullet_points.iter().enumerate() {
            let descriptor = SelectedDescriptor::new(level.level, index);
            let demonstrated = response.is_some_and(|r| r.is_demonstrated(descriptor));
            let focus = response.is_some_and(|r| r.is_focus(descriptor));
            let relevant = hint
                .as_ref()
                .is_some_and(|h| h.is_relevant(level.level, index));
            writeln!(
                out,
                "  {index}. [{}] [{}] {}{text}",
                if demonstrated { 'x' } else { ' ' },
                if focus { 'f' } else { ' ' },
                if relevant { "> " } else { "" },
            )?;
            for alignment in level.alignments_for(index) {
                writeln!(
                    out,
                    "       {} ({})",
                    alignment.text,
                    alignment.frameworks.join(", ")
                )?;
            }
        }
    }

    writeln!(out, "\n[x] demonstrated  [f] development focus  > relevant to active filter")?;
    writeln!(out, "{PROGRESSION_NOTE}")?;
    Ok(())
}

fn list_roles(session: &Session<'_>, out: &mut dyn Write) -> Result<()> {
    let active = session.active_filter();
    for option in session.guide().options() {
        let marker = if active == Some(&option.selection) { '*' } else { ' ' };
        writeln!(
            out,
            "{marker} {:<9} {:<32} {:<36} {} capabilities",
            option.selection.filter_type.as_str(),
            option.selection.filter_id,
            option.name,
            option.mapped_count
        )?;
        if let Some(description) = &option.description {
            writeln!(out, "            {description}")?;
        }
    }
    Ok(())
}

fn filter(session: &mut Session<'_>, command: FilterCommand, out: &mut dyn Write) -> Result<()> {
    match command {
        FilterCommand::Set { filter_type, id } => {
            session.select_filter(GuidedFilterSelection::new(filter_type, id))?;
            show_filter(session, out)
        }
        FilterCommand::Clear => {
            session.clear_filter();
            writeln!(out, "Guided filter cleared")?;
            Ok(())
        }
        FilterCommand::Show => show_filter(session, out),
    }
}

fn show_filter(session: &Session<'_>, out: &mut dyn Write) -> Result<()> {
    let Some(selection) = session.active_filter() else {
        writeln!(out, "No guided filter active")?;
        return Ok(());
    };
    let guide = session.guide();
    let name = guide.describe(selection).unwrap_or(&selection.filter_id);
    writeln!(out, "Guided filter: {name} ({})", selection.filter_type)?;
    for mapping in guide.mappings_for(selection) {
        let capability_name = session
            .catalog()
            .capability(&mapping.capability_id)
            .map_or(mapping.capability_id.as_str(), |c| c.name.as_str());
        writeln!(out, "  {:<36} {}", capability_name, mapping.level.label())?;
    }
    Ok(())
}

fn toggle(session: &mut Session<'_>, args: ToggleArgs, out: &mut dyn Write) -> Result<()> {
    let descriptor = SelectedDescriptor::new(args.level, args.index);
    let selected = session.toggle(&args.id, args.set.into(), descriptor)?;
    let verb = if selected { "selected" } else { "cleared" };
    writeln!(out, "{}: {descriptor} {:?} {verb}", args.id, args.set)?;
    Ok(())
}

fn export_document(config: &AppConfig, path: &Path, out: &mut dyn Write) -> Result<()> {
    let document = FrameworkDocument::open(&config.document_path)
        .with_context(|| {
            format!(
                "framework document unavailable at {}",
                config.document_path.display()
            )
        })?;
    std::fs::write(path, &document.bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = document.len(), "framework document exported");
    writeln!(
        out,
        "Saved {} ({} bytes, {}) to {}",
        document.filename,
        document.len(),
        document.content_type,
        path.display()
    )?;
    Ok(())
}
