//! Format conversion reports, targets and agents as text.

use crate::convert::{ConversionRecord, ConversionReport};
use crate::document::AgentMap;
use crate::target::{OutputFormat, PathRewrite, TargetDescriptor};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// One progress line for a written output.
pub fn format_progress_line(record: &ConversionRecord) -> String {
    format!(
        "  {}: {} -> {}",
        record.label,
        record.source_label(),
        record.destination.display()
    )
}

/// Closing summary: per-target counts and the total.
pub fn format_report_summary(report: &ConversionReport) -> String {
    let parts: Vec<String> = report
        .counts
        .iter()
        .map(|c| format!("{} {}", c.count, c.label))
        .collect();
    let verb = if report.dry_run {
        "Would generate"
    } else {
        "Generated"
    };
    if parts.is_empty() {
        return format!("{} 0 files (no targets selected).", verb);
    }
    let mut out = format!(
        "{} {} = {} total files.",
        verb,
        parts.join(" + "),
        report.total()
    );
    for path in &report.overwritten {
        out.push_str(&format!(
            "\nWarning: {} was written by more than one command",
            path.display()
        ));
    }
    out
}

/// Target row used by `targets` output.
#[derive(Debug, Clone, Serialize)]
pub struct TargetStatusEntry {
    pub name: String,
    pub label: String,
    pub output_dir: PathBuf,
    pub format: String,
    pub install_path: Option<String>,
    pub sandboxed: bool,
    pub enabled: bool,
}

impl TargetStatusEntry {
    pub fn from_descriptor(target: &TargetDescriptor, enabled: bool) -> Self {
        let format = match &target.format {
            OutputFormat::Toml { .. } => "toml",
            OutputFormat::Markdown {
                quote_description: true,
            } => "markdown (quoted)",
            OutputFormat::Markdown {
                quote_description: false,
            } => "markdown",
        };
        Self {
            name: target.name.clone(),
            label: target.label.clone(),
            output_dir: target.output_dir.clone(),
            format: format.to_string(),
            install_path: target.rewrite.install_path().map(str::to_string),
            sandboxed: matches!(target.rewrite, PathRewrite::Sandboxed { .. }),
            enabled,
        }
    }
}

/// Format configured targets as a table.
pub fn format_targets_text(entries: &[TargetStatusEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Targets")));
    if entries.is_empty() {
        out.push_str("No targets configured.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "Label", "Output", "Format", "Install path", "Enabled"]);
    for row in entries {
        let install_path = match (&row.install_path, row.sandboxed) {
            (Some(path), true) => format!("{} (sandboxed)", path),
            (Some(path), false) => path.clone(),
            (None, _) => "-".to_string(),
        };
        table.add_row(vec![
            row.name.clone(),
            row.label.clone(),
            row.output_dir.display().to_string(),
            row.format.clone(),
            install_path,
            if row.enabled { "yes" } else { "no" }.to_string(),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

/// Agent row used by `agents` output.
#[derive(Debug, Clone, Serialize)]
pub struct AgentListEntry {
    pub command: String,
    pub agent: PathBuf,
}

pub fn agent_entries(agents: &AgentMap) -> Vec<AgentListEntry> {
    agents
        .iter()
        .map(|(command, entry)| AgentListEntry {
            command: command.clone(),
            agent: entry.path.clone(),
        })
        .collect()
}

/// Format the agent map as a table.
pub fn format_agents_text(entries: &[AgentListEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Agents")));
    if entries.is_empty() {
        out.push_str("No agent-delegating commands.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Command", "Agent"]);
    for row in entries {
        table.add_row(vec![row.command.clone(), row.agent.display().to_string()]);
    }
    out.push_str(&format!("{}\n", table));
    out
}
