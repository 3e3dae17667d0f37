//! ConfigLoader facade delegating to the merge service.

use super::merge::service::MergeService;
use super::ConverterConfig;
use crate::error::ConvertError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the workspace file and environment.
    pub fn load(workspace_root: &Path) -> Result<ConverterConfig, ConvertError> {
        MergeService::load(workspace_root)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<ConverterConfig, ConvertError> {
        MergeService::load_from_file(path)
    }
}
