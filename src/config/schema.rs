//! Configuration schema for `config.toml`.

use crate::converter::{ConvertOptions, DEFAULT_INDENT};
use crate::types::ToolFormat;
use serde::{Deserialize, Serialize};

/// CLI defaults read from the optional config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Format used when `--format` is not given.
    pub format: Option<ToolFormat>,

    /// JSON indentation for `convert` output.
    pub indent: usize,

    /// Rewrite tool names into function-safe identifiers.
    pub normalize_names: bool,

    /// Log level (debug, info, warn, error).
    pub log_level: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            format: None,
            indent: DEFAULT_INDENT,
            normalize_names: false,
            log_level: "warn".into(),
        }
    }
}

impl ToolConfig {
    /// Converter options implied by this config.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            normalize_names: self.normalize_names,
        }
    }
}
