//! MergeService: orchestrates sources and deserializes to ConverterConfig.

use crate::config::sources::{environment, workspace_file};
use crate::config::ConverterConfig;
use crate::error::ConvertError;
use config::{Config, File, FileFormat};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config for a workspace.
    /// Precedence: serde defaults (lowest) -> workspace file -> environment (highest).
    pub fn load(workspace_root: &Path) -> Result<ConverterConfig, ConvertError> {
        let builder = Config::builder();
        let builder = workspace_file::add_to_builder(builder, workspace_root);
        let builder = environment::add_to_builder(builder);

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<ConverterConfig, ConvertError> {
        if !path.is_file() {
            return Err(ConvertError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = Config::builder().add_source(File::from(path).format(FileFormat::Toml));
        let builder = environment::add_to_builder(builder);

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
