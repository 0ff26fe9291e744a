//! Config-file defaults for the CLI.
//!
//! `.declgen.toml` supplies defaults for the generation parameters so a
//! checked-in invocation needs no flags. CLI flags always win over config
//! values, and `--var` overrides a `[vars]` entry of the same key.

pub(crate) mod loader;

pub(crate) use loader::{expand_path, load_cli_config};

use std::collections::HashMap;

use serde::Deserialize;

/// CLI defaults, deserialized from `.declgen.toml`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CliConfig {
    /// Default template file name for `declgen generate`.
    pub template: Option<String>,

    /// Directory containing template files. Falls back to "templates".
    pub template_dir: Option<String>,

    /// Directory generated files are written into. Falls back to ".".
    pub output_dir: Option<String>,

    /// Default substitution variables.
    #[serde(default)]
    pub vars: HashMap<String, String>,
}
