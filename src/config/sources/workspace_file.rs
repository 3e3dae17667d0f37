//! Workspace file source: `<workspace>/.arckit/convert.toml`, optional.

use crate::config::WORKSPACE_CONFIG_FILE;
use config::builder::DefaultState;
use config::{ConfigBuilder, File, FileFormat};
use std::path::Path;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> ConfigBuilder<DefaultState> {
    let path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    builder.add_source(
        File::from(path)
            .format(FileFormat::Toml)
            .required(false),
    )
}
