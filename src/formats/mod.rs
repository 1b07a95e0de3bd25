//! Target-format envelopes for tool definitions.
//!
//! Each format is a fixed, stateless implementation of [`Formatter`].
//! [`ToolFormat`] is the closed dispatch point over them.

pub mod anthropic;
pub mod checks;
pub mod openai;

pub use anthropic::AnthropicFormatter;
pub use openai::OpenAiFormatter;

use crate::types::{ToolFormat, ToolMetadata, ValidationReport};
use serde_json::{Map, Value};

/// Build/validate capability shared by every target format.
pub trait Formatter {
    /// Wrap already-extracted metadata in this format's envelope.
    fn wrap(metadata: ToolMetadata) -> Value;

    /// Check that `tool` has this format's required shape. Never short-circuits:
    /// every failing check is reported.
    fn validate(tool: &Value) -> ValidationReport;

    /// Flatten an envelope back into a schema mapping
    /// (`name`, `description`, then the parameter keys).
    fn extract_schema(tool: &Value) -> Map<String, Value>;

    /// Name shown for `tool` in validation output, if it has one.
    fn tool_name(tool: &Value) -> Option<&str>;

    /// Build an envelope from its parts. Names and descriptions are not checked.
    fn build(
        name: &str,
        description: &str,
        properties: Map<String, Value>,
        required: Vec<String>,
    ) -> Value {
        Self::wrap(ToolMetadata {
            name: name.to_string(),
            description: description.to_string(),
            parameters: parameter_block(
                properties,
                required.into_iter().map(Value::String).collect(),
            ),
        })
    }
}

/// Assemble the `{type, properties, required}` parameter block.
/// `type` is always `"object"`.
pub fn parameter_block(
    properties: Map<String, Value>,
    required: Vec<Value>,
) -> Map<String, Value> {
    let mut block = Map::new();
    block.insert("type".into(), Value::from("object"));
    block.insert("properties".into(), Value::Object(properties));
    block.insert("required".into(), Value::Array(required));
    block
}

/// Merge `name`, `description` and a parameter block into one flat schema.
///
/// An empty or non-string name is left out, so converting the result names
/// the tool `unnamed_tool`.
pub(crate) fn flatten_schema(
    name: &Value,
    description: &Value,
    params: &Value,
) -> Map<String, Value> {
    let mut schema = Map::new();
    if let Some(name) = name.as_str().filter(|n| !n.is_empty()) {
        schema.insert("name".into(), Value::from(name));
    }
    schema.insert(
        "description".into(),
        description
            .as_str()
            .map(Value::from)
            .unwrap_or_else(|| Value::from("")),
    );
    if let Some(params) = params.as_object() {
        for (key, value) in params {
            schema.insert(key.clone(), value.clone());
        }
    }
    schema
}

// ---------------------------------------------------------------------------
// Closed dispatch
// ---------------------------------------------------------------------------

impl ToolFormat {
    pub fn wrap(&self, metadata: ToolMetadata) -> Value {
        match self {
            Self::OpenAi => OpenAiFormatter::wrap(metadata),
            Self::Anthropic => AnthropicFormatter::wrap(metadata),
        }
    }

    pub fn build(
        &self,
        name: &str,
        description: &str,
        properties: Map<String, Value>,
        required: Vec<String>,
    ) -> Value {
        match self {
            Self::OpenAi => OpenAiFormatter::build(name, description, properties, required),
            Self::Anthropic => AnthropicFormatter::build(name, description, properties, required),
        }
    }

    pub fn validate(&self, tool: &Value) -> ValidationReport {
        match self {
            Self::OpenAi => OpenAiFormatter::validate(tool),
            Self::Anthropic => AnthropicFormatter::validate(tool),
        }
    }

    pub fn extract_schema(&self, tool: &Value) -> Map<String, Value> {
        match self {
            Self::OpenAi => OpenAiFormatter::extract_schema(tool),
            Self::Anthropic => AnthropicFormatter::extract_schema(tool),
        }
    }

    pub fn tool_name<'a>(&self, tool: &'a Value) -> Option<&'a str> {
        match self {
            Self::OpenAi => OpenAiFormatter::tool_name(tool),
            Self::Anthropic => AnthropicFormatter::tool_name(tool),
        }
    }
}
