//! Environment variable source: ARCKIT_CONVERT_* prefix with __ separator

use crate::config::ENV_PREFIX;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Keys whose environment values are comma-separated lists.
const LIST_KEYS: &[&str] = &["targets.enabled"];

/// Environment source for ARCKIT_CONVERT__ variables.
/// `__` separates nested keys; list keys are split on `,`.
pub fn source() -> Environment {
    LIST_KEYS.iter().fold(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
        |env, key| env.with_list_parse_key(key),
    )
}

/// Add environment variable overlay to builder.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(source())
}
