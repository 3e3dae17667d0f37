//! ArcKit Convert: command conversion for multiple agent runtimes
//!
//! Converts ArcKit command documents (a `description` header plus a prompt
//! body, optionally superseded by an agent document) into Gemini TOML
//! commands, Codex prompts, OpenCode commands and a sandboxed Gemini
//! extension, rewriting install paths per target.

pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod logging;
pub mod target;
pub mod tooling;

pub use convert::{ConversionPlan, ConversionRecord, ConversionReport, Converter, TargetCount};
pub use error::ConvertError;
