//! Configuration
//!
//! Layered configuration for conversion runs. Defaults live on the serde
//! types; a workspace file and `ARCKIT_CONVERT__*` environment variables are
//! layered on top by [`ConfigLoader`].

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

use crate::document::AgentNaming;
use crate::error::ConvertError;
use crate::logging::LoggingConfig;
use crate::target::{builtin_targets, TargetDescriptor};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Workspace-relative location of the optional configuration file.
pub const WORKSPACE_CONFIG_FILE: &str = ".arckit/convert.toml";

/// Prefix for environment overrides (`ARCKIT_CONVERT__PATHS__COMMANDS_DIR`).
pub const ENV_PREFIX: &str = "ARCKIT_CONVERT";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub agents: AgentNaming,

    #[serde(default)]
    pub targets: TargetsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_commands_dir() -> PathBuf {
    PathBuf::from(".claude/commands")
}

fn default_agents_dir() -> PathBuf {
    PathBuf::from(".claude/agents")
}

fn default_output_root() -> PathBuf {
    PathBuf::from(".")
}

/// Source and output locations; relative paths resolve against the workspace root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_commands_dir")]
    pub commands_dir: PathBuf,

    #[serde(default = "default_agents_dir")]
    pub agents_dir: PathBuf,

    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
}

impl PathsConfig {
    /// Resolve (commands_dir, agents_dir, output_root) against the workspace root.
    pub fn resolve(&self, workspace_root: &Path) -> (PathBuf, PathBuf, PathBuf) {
        (
            resolve_path(workspace_root, &self.commands_dir),
            resolve_path(workspace_root, &self.agents_dir),
            resolve_path(workspace_root, &self.output_root),
        )
    }
}

fn resolve_path(workspace_root: &Path, path: &Path) -> PathBuf {
    if path == Path::new(".") {
        workspace_root.to_path_buf()
    } else {
        workspace_root.join(path)
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            commands_dir: default_commands_dir(),
            agents_dir: default_agents_dir(),
            output_root: default_output_root(),
        }
    }
}

/// Target table and selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsConfig {
    /// Names of targets to produce; all definitions when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Vec<String>>,

    #[serde(default = "builtin_targets")]
    pub definitions: Vec<TargetDescriptor>,
}

impl TargetsConfig {
    /// Pick the targets to run, in definition order.
    ///
    /// A non-empty `requested` list takes precedence over `enabled`. Unknown
    /// names are rejected.
    pub fn select(&self, requested: &[String]) -> Result<Vec<TargetDescriptor>, ConvertError> {
        let names: Option<&[String]> = if !requested.is_empty() {
            Some(requested)
        } else {
            self.enabled.as_deref()
        };
        let Some(names) = names else {
            return Ok(self.definitions.clone());
        };

        for name in names {
            if !self.definitions.iter().any(|t| &t.name == name) {
                return Err(ConvertError::UnknownTarget(name.clone()));
            }
        }
        Ok(self
            .definitions
            .iter()
            .filter(|t| names.contains(&t.name))
            .cloned()
            .collect())
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        match &self.enabled {
            Some(enabled) => enabled.iter().any(|n| n == name),
            None => true,
        }
    }
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            enabled: None,
            definitions: builtin_targets(),
        }
    }
}
