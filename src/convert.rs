//! Conversion Driver
//!
//! Reads every command document once, resolves its effective body (its own
//! body or the body of the agent that serves it), and writes one output per
//! enabled target. Output is a pure function of the inputs: commands are
//! processed in file name order and targets in plan order.

use crate::document::{parse_document, AgentMap, AgentNaming};
use crate::document::listing::list_files;
use crate::error::ConvertError;
use crate::target::TargetDescriptor;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

const COMMAND_SUFFIX: &str = ".md";

/// Everything a conversion run needs, resolved by the caller.
#[derive(Debug, Clone)]
pub struct ConversionPlan {
    /// Directory holding the command documents
    pub commands_dir: PathBuf,
    /// Directory holding agent documents; may not exist
    pub agents_dir: PathBuf,
    /// Root that target output directories are relative to
    pub output_root: PathBuf,
    /// Agent-to-command naming convention
    pub agent_naming: AgentNaming,
    /// Targets to produce, in output order
    pub targets: Vec<TargetDescriptor>,
    /// Render and report without touching the filesystem
    pub dry_run: bool,
}

/// One output produced (or, in dry-run mode, that would be produced).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRecord {
    pub target: String,
    pub label: String,
    pub source: PathBuf,
    /// Agent document whose body was used, if the command delegates
    pub agent: Option<PathBuf>,
    pub destination: PathBuf,
}

impl ConversionRecord {
    /// Human-readable source, including the agent when one was used.
    pub fn source_label(&self) -> String {
        match &self.agent {
            Some(agent) => format!("{} (agent: {})", self.source.display(), agent.display()),
            None => self.source.display().to_string(),
        }
    }
}

/// Output count for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetCount {
    pub target: String,
    pub label: String,
    pub count: usize,
}

/// Result of a conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    /// Per-target counts in plan order
    pub counts: Vec<TargetCount>,
    pub records: Vec<ConversionRecord>,
    pub dry_run: bool,
    /// Destinations written more than once in this run, in first-repeat order
    pub overwritten: Vec<PathBuf>,
    /// Wall-clock time; kept out of serialized output so reports stay reproducible
    #[serde(skip)]
    pub duration_ms: u64,
}

impl ConversionReport {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    /// Count for a target by name.
    pub fn count_for(&self, target: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|c| c.target == target)
            .map(|c| c.count)
    }
}

/// Runs a [`ConversionPlan`].
pub struct Converter {
    plan: ConversionPlan,
}

impl Converter {
    pub fn new(plan: ConversionPlan) -> Self {
        Self { plan }
    }

    /// Convert all commands without progress reporting.
    pub fn run(&self) -> Result<ConversionReport, ConvertError> {
        self.run_with_progress(|_| {})
    }

    /// Convert all commands, calling `on_output` after each output is written.
    ///
    /// The first I/O fault aborts the run; outputs already written stay on disk.
    pub fn run_with_progress<F>(&self, mut on_output: F) -> Result<ConversionReport, ConvertError>
    where
        F: FnMut(&ConversionRecord),
    {
        let start = Instant::now();
        let plan = &self.plan;

        let agents = AgentMap::load(&plan.agents_dir, &plan.agent_naming)?;
        debug!(agents = agents.len(), "Agent map built");

        if !plan.dry_run {
            for target in &plan.targets {
                let dir = target.output_dir(&plan.output_root);
                fs::create_dir_all(&dir).map_err(|e| ConvertError::io(&dir, e))?;
            }
        }

        let mut counts: Vec<TargetCount> = plan
            .targets
            .iter()
            .map(|t| TargetCount {
                target: t.name.clone(),
                label: t.label.clone(),
                count: 0,
            })
            .collect();
        let mut records = Vec::new();
        let mut written: HashSet<PathBuf> = HashSet::new();
        let mut overwritten = Vec::new();

        for file in list_files(&plan.commands_dir)? {
            if !file.file_name.ends_with(COMMAND_SUFFIX) {
                continue;
            }

            let content =
                fs::read_to_string(&file.path).map_err(|e| ConvertError::io(&file.path, e))?;
            let parsed = parse_document(&content);

            // The description always comes from the command; an agent only replaces the body.
            let agent = agents.get(&file.file_name);
            let body = match agent {
                Some(entry) => entry.body.as_str(),
                None => parsed.body.as_str(),
            };

            for (target, count) in plan.targets.iter().zip(counts.iter_mut()) {
                let output = target.render(&parsed.description, body);
                let destination = target.destination(&plan.output_root, &file.file_name);
                if !written.insert(destination.clone()) {
                    warn!(
                        target_name = %target.name,
                        source = %file.path.display(),
                        destination = %destination.display(),
                        "Destination already written in this run, overwriting"
                    );
                    if !overwritten.contains(&destination) {
                        overwritten.push(destination.clone());
                    }
                }
                if !plan.dry_run {
                    fs::write(&destination, output)
                        .map_err(|e| ConvertError::io(&destination, e))?;
                }
                count.count += 1;

                let record = ConversionRecord {
                    target: target.name.clone(),
                    label: target.label.clone(),
                    source: file.path.clone(),
                    agent: agent.map(|a| a.path.clone()),
                    destination,
                };
                info!(
                    target_name = %record.target,
                    source = %record.source_label(),
                    destination = %record.destination.display(),
                    dry_run = plan.dry_run,
                    "Converted command"
                );
                on_output(&record);
                records.push(record);
            }
        }

        Ok(ConversionReport {
            counts,
            records,
            dry_run: plan.dry_run,
            overwritten,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}
