//! On-disk syntax for each output format.
//!
//! Renderers are total: any description and body are accepted and emitted
//! according to the format's escaping rules, without validation.

use serde::{Deserialize, Serialize};

/// Token for user-supplied arguments in command bodies.
pub const ARGUMENTS_PLACEHOLDER: &str = "$ARGUMENTS";

fn default_args_syntax() -> String {
    "{{args}}".to_string()
}

/// Output file syntax of a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputFormat {
    /// TOML with `description` and `prompt` as triple-quoted strings.
    Toml {
        /// Template syntax substituted for the arguments placeholder
        #[serde(default = "default_args_syntax")]
        args_syntax: String,
    },
    /// Markdown with a header carrying only `description`.
    Markdown {
        /// Emit the description as a double-quoted, escaped scalar
        #[serde(default)]
        quote_description: bool,
    },
}

impl OutputFormat {
    pub fn toml() -> Self {
        OutputFormat::Toml {
            args_syntax: default_args_syntax(),
        }
    }

    /// Render a command in this format.
    pub fn render(&self, description: &str, body: &str) -> String {
        match self {
            OutputFormat::Toml { args_syntax } => render_toml(description, body, args_syntax),
            OutputFormat::Markdown { quote_description } => {
                render_markdown(description, body, *quote_description)
            }
        }
    }
}

fn escape_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

fn render_toml(description: &str, body: &str, args_syntax: &str) -> String {
    // Substitute after escaping; the template syntax stays unescaped.
    let prompt = escape_quoted(body).replace(ARGUMENTS_PLACEHOLDER, args_syntax);
    format!(
        "description = \"\"\"\n{}\n\"\"\"\nprompt = \"\"\"\n{}\n\"\"\"\n",
        description, prompt
    )
}

fn render_markdown(description: &str, body: &str, quote_description: bool) -> String {
    if quote_description {
        format!(
            "---\ndescription: \"{}\"\n---\n\n{}\n",
            escape_quoted(description),
            body
        )
    } else {
        format!("---\ndescription: {}\n---\n\n{}\n", description, body)
    }
}
