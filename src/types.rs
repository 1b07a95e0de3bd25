//! Shared types used across the converter and formatters.

use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Target formats
// ---------------------------------------------------------------------------

/// Tool-definition wire formats this crate can produce and validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ToolFormat {
    /// `{type: "function", function: {name, description, parameters}}`
    #[value(name = "openai")]
    OpenAi,
    /// `{name, description, input_schema}`
    #[value(name = "anthropic")]
    Anthropic,
}

impl ToolFormat {
    /// Every supported format, in the order they are listed to users.
    pub const ALL: [ToolFormat; 2] = [ToolFormat::OpenAi, ToolFormat::Anthropic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
        }
    }
}

impl fmt::Display for ToolFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "openai" => Ok(Self::OpenAi),
            "anthropic" => Ok(Self::Anthropic),
            other => Err(ConvertError::UnsupportedFormat(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Extracted metadata
// ---------------------------------------------------------------------------

/// Format-independent pieces of a tool definition, ready to be wrapped
/// in a target envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolMetadata {
    pub name: String,
    pub description: String,
    /// Parameter block: always carries `type`, `properties` and `required`.
    pub parameters: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Outcome of a structural validation pass. Errors are kept in the order
/// the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed check.
    pub fn push<S: Into<String>>(&mut self, error: S) {
        self.errors.push(error.into());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// `(is_valid, errors)` pair.
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.errors.is_empty(), self.errors)
    }

    /// Raise instead of inspecting: `Err(ConvertError::Validation)` when
    /// any check failed.
    pub fn into_result(self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ConvertError::Validation(self.errors))
        }
    }
}
