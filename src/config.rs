//! Runtime configuration
//!
//! Values are layered: built-in defaults, then `input-entries.toml` in the
//! working directory (optional), then an explicit file if one is given, then
//! environment variables prefixed `INPUT_ENTRIES_` (e.g.
//! `INPUT_ENTRIES_DEBUGGABLE=true`).

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LOG_FILTER: &str = "input_entries=info";

const ENV_PREFIX: &str = "INPUT_ENTRIES";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryConfig {
    /// Allow full entry contents (key codes, coordinates) in descriptions
    pub debuggable: bool,
    /// `tracing_subscriber` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl EntryConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn load_with_env(path: Option<&Path>, environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("debuggable", cfg!(debug_assertions))?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .add_source(File::with_name("input-entries").required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            debuggable: cfg!(debug_assertions),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
