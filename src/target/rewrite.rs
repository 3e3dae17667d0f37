//! Install path rewriting per target.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Token standing for the plugin install root in command bodies.
pub const INSTALL_PATH_PLACEHOLDER: &str = "${CLAUDE_PLUGIN_ROOT}";

static READ_INSTRUCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bRead `([^`\n]+)`").expect("Invalid read instruction regex"));

/// How a target rewrites install paths in a command body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathRewrite {
    /// Leave the body untouched.
    None,
    /// Replace the placeholder with a fixed install path.
    Baseline { install_path: String },
    /// Replace the placeholder, turn `Read` instructions under the install
    /// path into shell `cat` instructions and prepend the sandbox advisory.
    Sandboxed { install_path: String },
}

impl PathRewrite {
    /// Rewrite a body for this target.
    pub fn apply(&self, body: &str) -> String {
        match self {
            PathRewrite::None => body.to_string(),
            PathRewrite::Baseline { install_path } => {
                body.replace(INSTALL_PATH_PLACEHOLDER, install_path)
            }
            PathRewrite::Sandboxed { install_path } => sandbox_rewrite(body, install_path),
        }
    }

    pub fn install_path(&self) -> Option<&str> {
        match self {
            PathRewrite::None => None,
            PathRewrite::Baseline { install_path } | PathRewrite::Sandboxed { install_path } => {
                Some(install_path)
            }
        }
    }
}

/// Advisory block prepended to bodies for sandboxed extension targets.
pub fn sandbox_advisory(install_path: &str) -> String {
    format!(
        "> **Extension file access:** this command runs from an installed extension. \
Files under `{root}/` are outside the workspace, so file-reading tools cannot open them. \
Use the shell tool instead:\n\
>\n\
> - Read a file: `cat {root}/<path>`\n\
> - List a directory: `ls {root}/<dir>`\n\
> - Check that a file exists: `test -f {root}/<path> && echo exists`\n",
        root = install_path
    )
}

fn sandbox_rewrite(body: &str, install_path: &str) -> String {
    let replaced = body.replace(INSTALL_PATH_PLACEHOLDER, install_path);
    let under_root = format!("{}/", install_path);
    let rewritten = READ_INSTRUCTION.replace_all(&replaced, |caps: &Captures| {
        let path = &caps[1];
        if path.starts_with(&under_root) {
            format!("Run `cat {}` to read the file", path)
        } else {
            caps[0].to_string()
        }
    });

    let advisory = sandbox_advisory(install_path);
    if rewritten.starts_with(&advisory) {
        return rewritten.into_owned();
    }
    format!("{}\n{}", advisory, rewritten)
}
