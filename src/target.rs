//! Output targets
//!
//! A target bundles everything needed to turn one command into one output
//! file: where it goes, how it is named, how install paths are rewritten and
//! which on-disk syntax it uses. The driver iterates a table of targets
//! instead of carrying per-target code.

pub mod descriptor;
pub mod format;
pub mod rewrite;

pub use descriptor::{builtin_targets, FileNaming, TargetDescriptor};
pub use format::{OutputFormat, ARGUMENTS_PLACEHOLDER};
pub use rewrite::{sandbox_advisory, PathRewrite, INSTALL_PATH_PLACEHOLDER};
