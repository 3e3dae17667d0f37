//! CLI Tooling
//!
//! Command-line interface for conversion runs. Default paths are resolved
//! here, at the entry point, and handed to the driver as a
//! [`ConversionPlan`].

use crate::config::{ConfigLoader, ConverterConfig};
use crate::convert::{ConversionPlan, Converter};
use crate::document::AgentMap;
use crate::error::ConvertError;
use crate::tooling::format::{
    agent_entries, format_agents_text, format_progress_line, format_report_summary,
    format_targets_text, TargetStatusEntry,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// ArcKit command converter
#[derive(Parser, Debug)]
#[command(name = "arckit-convert")]
#[command(about = "Convert ArcKit commands into Gemini, Codex and OpenCode formats")]
pub struct Cli {
    /// Command to run (default: convert)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides .arckit/convert.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The selected command, or a default `convert`.
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or_else(Commands::default_convert)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Convert commands into every enabled target format
    Convert {
        /// Restrict output to these targets (repeatable)
        #[arg(long = "target", value_name = "NAME")]
        targets: Vec<String>,
        /// Override the commands directory
        #[arg(long)]
        commands_dir: Option<PathBuf>,
        /// Override the agents directory
        #[arg(long)]
        agents_dir: Option<PathBuf>,
        /// Override the root that target directories are created under
        #[arg(long)]
        output_root: Option<PathBuf>,
        /// Render and report without writing files
        #[arg(long)]
        dry_run: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List configured targets
    Targets {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List commands whose body comes from an agent
    Agents {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

impl Commands {
    pub fn default_convert() -> Self {
        Commands::Convert {
            targets: Vec::new(),
            commands_dir: None,
            agents_dir: None,
            output_root: None,
            dry_run: false,
            format: "text".to_string(),
        }
    }
}

fn parse_format(format: &str) -> Result<bool, ConvertError> {
    match format {
        "text" => Ok(false),
        "json" => Ok(true),
        other => Err(ConvertError::ConfigError(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

/// CLI context holding the workspace and its effective configuration
pub struct CliContext {
    workspace_root: PathBuf,
    config: ConverterConfig,
}

impl CliContext {
    /// Create a new CLI context, loading configuration for the workspace.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ConvertError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    pub fn with_config(workspace_root: PathBuf, config: ConverterConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Build the conversion plan for a `convert` invocation.
    pub fn conversion_plan(&self, command: &Commands) -> Result<ConversionPlan, ConvertError> {
        let Commands::Convert {
            targets,
            commands_dir,
            agents_dir,
            output_root,
            dry_run,
            ..
        } = command
        else {
            return Err(ConvertError::ConfigError(
                "Conversion plan requested for a non-convert command".to_string(),
            ));
        };

        let (default_commands, default_agents, default_output) =
            self.config.paths.resolve(&self.workspace_root);
        let resolve = |over: &Option<PathBuf>, default: PathBuf| match over {
            Some(path) => self.workspace_root.join(path),
            None => default,
        };

        Ok(ConversionPlan {
            commands_dir: resolve(commands_dir, default_commands),
            agents_dir: resolve(agents_dir, default_agents),
            output_root: resolve(output_root, default_output),
            agent_naming: self.config.agents.clone(),
            targets: self.config.targets.select(targets)?,
            dry_run: *dry_run,
        })
    }

    /// Execute a CLI command, printing progress lines to stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, ConvertError> {
        self.execute_with_progress(command, |line| println!("{}", line))
    }

    /// Execute a CLI command, sending progress lines to `progress`.
    ///
    /// Returns the final output (summary, table or JSON document).
    pub fn execute_with_progress<F>(
        &self,
        command: &Commands,
        mut progress: F,
    ) -> Result<String, ConvertError>
    where
        F: FnMut(&str),
    {
        match command {
            Commands::Convert { format, .. } => {
                let json = parse_format(format)?;
                let plan = self.conversion_plan(command)?;
                info!(
                    commands_dir = %plan.commands_dir.display(),
                    targets = plan.targets.len(),
                    dry_run = plan.dry_run,
                    "Starting conversion"
                );

                if !json {
                    let labels: Vec<&str> = plan.targets.iter().map(|t| t.label.as_str()).collect();
                    progress(&format!("Converting commands to {} formats...", labels.join(", ")));
                    progress("");
                    progress(&format!("Source: {}", plan.commands_dir.display()));
                    progress(&format!("Agents: {}", plan.agents_dir.display()));
                    progress("");
                }

                let converter = Converter::new(plan);
                let report = converter.run_with_progress(|record| {
                    if !json {
                        progress(&format_progress_line(record));
                    }
                })?;

                if json {
                    return Ok(serde_json::to_string_pretty(&report)?);
                }
                Ok(format!("\n{}", format_report_summary(&report)))
            }
            Commands::Targets { format } => {
                let json = parse_format(format)?;
                let entries: Vec<TargetStatusEntry> = self
                    .config
                    .targets
                    .definitions
                    .iter()
                    .map(|t| {
                        TargetStatusEntry::from_descriptor(t, self.config.targets.is_enabled(&t.name))
                    })
                    .collect();
                if json {
                    return Ok(serde_json::to_string_pretty(&entries)?);
                }
                Ok(format_targets_text(&entries))
            }
            Commands::Agents { format } => {
                let json = parse_format(format)?;
                let (_, agents_dir, _) = self.config.paths.resolve(&self.workspace_root);
                let agents = AgentMap::load(&agents_dir, &self.config.agents)?;
                let entries = agent_entries(&agents);
                if json {
                    return Ok(serde_json::to_string_pretty(&entries)?);
                }
                Ok(format_agents_text(&entries))
            }
            Commands::Config => Ok(toml::to_string_pretty(&self.config)?),
        }
    }
}
