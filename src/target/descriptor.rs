//! Target descriptors and the built-in target table.

use super::format::OutputFormat;
use super::rewrite::PathRewrite;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SOURCE_SUFFIX: &str = ".md";
const LOCAL_INSTALL_PATH: &str = ".arckit";
const EXTENSION_INSTALL_PATH: &str = "~/.gemini/extensions/arckit";

/// Rule deriving an output file name from a command file name.
///
/// `strip_prefix` is removed from the start of the name when present, the
/// `.md` suffix is swapped for `extension` when one is set, and `prefix` is
/// prepended last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNaming {
    #[serde(default)]
    pub strip_prefix: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl FileNaming {
    /// Keep the command file name as is.
    pub fn keep() -> Self {
        Self::default()
    }

    pub fn file_name(&self, source_file: &str) -> String {
        let name = source_file
            .strip_prefix(self.strip_prefix.as_str())
            .unwrap_or(source_file);
        let name = match &self.extension {
            Some(extension) => {
                let stem = name.strip_suffix(SOURCE_SUFFIX).unwrap_or(name);
                format!("{}.{}", stem, extension)
            }
            None => name.to_string(),
        };
        format!("{}{}", self.prefix, name)
    }
}

/// One output target: destination, naming, path rewriting and syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    /// Identifier used for selection (`--target`, `targets.enabled`)
    pub name: String,
    /// Human-readable label for progress lines and summaries
    pub label: String,
    /// Output directory, relative to the output root unless absolute
    pub output_dir: PathBuf,
    #[serde(default)]
    pub naming: FileNaming,
    pub rewrite: PathRewrite,
    pub format: OutputFormat,
}

impl TargetDescriptor {
    /// Rewrite and serialize a command for this target.
    pub fn render(&self, description: &str, body: &str) -> String {
        let body = self.rewrite.apply(body);
        self.format.render(description, &body)
    }

    pub fn output_dir(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.output_dir)
    }

    pub fn destination(&self, output_root: &Path, source_file: &str) -> PathBuf {
        self.output_dir(output_root)
            .join(self.naming.file_name(source_file))
    }
}

/// Targets known without any configuration, in output order.
pub fn builtin_targets() -> Vec<TargetDescriptor> {
    let toml_naming = FileNaming {
        strip_prefix: "arckit.".to_string(),
        prefix: String::new(),
        extension: Some("toml".to_string()),
    };
    vec![
        TargetDescriptor {
            name: "gemini".to_string(),
            label: "Gemini".to_string(),
            output_dir: PathBuf::from(".gemini/commands/arckit"),
            naming: toml_naming.clone(),
            rewrite: PathRewrite::Baseline {
                install_path: LOCAL_INSTALL_PATH.to_string(),
            },
            format: OutputFormat::toml(),
        },
        TargetDescriptor {
            name: "codex".to_string(),
            label: "Codex".to_string(),
            output_dir: PathBuf::from(".codex/prompts"),
            naming: FileNaming::keep(),
            rewrite: PathRewrite::Baseline {
                install_path: LOCAL_INSTALL_PATH.to_string(),
            },
            format: OutputFormat::Markdown {
                quote_description: true,
            },
        },
        TargetDescriptor {
            name: "opencode".to_string(),
            label: "OpenCode".to_string(),
            output_dir: PathBuf::from(".opencode/commands"),
            naming: FileNaming::keep(),
            rewrite: PathRewrite::Baseline {
                install_path: LOCAL_INSTALL_PATH.to_string(),
            },
            format: OutputFormat::Markdown {
                quote_description: false,
            },
        },
        TargetDescriptor {
            name: "gemini-extension".to_string(),
            label: "Gemini extension".to_string(),
            output_dir: PathBuf::from("arckit-gemini/commands/arckit"),
            naming: toml_naming,
            rewrite: PathRewrite::Sandboxed {
                install_path: EXTENSION_INSTALL_PATH.to_string(),
            },
            format: OutputFormat::toml(),
        },
    ]
}
