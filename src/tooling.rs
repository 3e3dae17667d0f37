//! Tooling & Integration Layer
//!
//! Command-line interface over the conversion driver and text/JSON formatting
//! of its results.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
