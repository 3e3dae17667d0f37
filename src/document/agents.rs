//! Agent resolution: map commands to the agent documents that replace their bodies.

use super::header::strip_metadata;
use super::listing::list_files;
use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

const MARKDOWN_SUFFIX: &str = ".md";

fn default_prefix() -> String {
    "arckit-".to_string()
}

fn default_command_namespace() -> String {
    "arckit".to_string()
}

/// Naming convention linking agent files to command files.
///
/// An agent named `<prefix><name>.md` serves the command
/// `<namespace>.<name>.md`, or `<name>.md` when the namespace is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentNaming {
    /// File name prefix identifying agent documents
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Namespace prepended to command file names; empty for none
    #[serde(default = "default_command_namespace")]
    pub command_namespace: String,
}

impl AgentNaming {
    /// Extract `<name>` from an agent file name, if it follows the convention.
    pub fn agent_name<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(MARKDOWN_SUFFIX)
    }

    /// Command file name served by the agent called `name`.
    pub fn command_key(&self, name: &str) -> String {
        if self.command_namespace.is_empty() {
            format!("{}{}", name, MARKDOWN_SUFFIX)
        } else {
            format!("{}.{}{}", self.command_namespace, name, MARKDOWN_SUFFIX)
        }
    }
}

impl Default for AgentNaming {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            command_namespace: default_command_namespace(),
        }
    }
}

/// An agent document resolved for one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentEntry {
    /// Location of the agent file
    pub path: PathBuf,
    /// Agent body with its metadata block stripped
    pub body: String,
}

/// Lookup from command file name to the agent that supersedes its body.
///
/// Built once per run and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct AgentMap {
    entries: BTreeMap<String, AgentEntry>,
}

impl AgentMap {
    /// Scan `agents_dir` for agent documents.
    ///
    /// A missing directory yields an empty map. Files that do not follow the
    /// naming convention are skipped.
    pub fn load(agents_dir: &Path, naming: &AgentNaming) -> Result<Self, ConvertError> {
        let mut entries = BTreeMap::new();
        if !agents_dir.is_dir() {
            debug!(agents_dir = %agents_dir.display(), "Agents directory not found, no delegates");
            return Ok(Self { entries });
        }

        for file in list_files(agents_dir)? {
            let Some(name) = naming.agent_name(&file.file_name) else {
                trace!(file = %file.file_name, "Skipping non-agent file");
                continue;
            };
            let key = naming.command_key(name);
            let content =
                fs::read_to_string(&file.path).map_err(|e| ConvertError::io(&file.path, e))?;
            let body = strip_metadata(&content).to_string();
            debug!(command = %key, agent = %file.path.display(), "Resolved agent");
            entries.insert(
                key,
                AgentEntry {
                    path: file.path,
                    body,
                },
            );
        }

        Ok(Self { entries })
    }

    /// Agent serving the given command file name.
    pub fn get(&self, command_file: &str) -> Option<&AgentEntry> {
        self.entries.get(command_file)
    }

    /// All entries ordered by command file name.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AgentEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
