//! Schema-to-tool conversion.
//!
//! A [`SchemaConverter`] holds one JSON Schema object and turns it into a
//! tool definition for any [`ToolFormat`]. All defaulting of absent or
//! wrong-typed fields happens in [`SchemaFields::extract`], so the rules live
//! in one place:
//!
//! | field         | source                                  | default          |
//! |---------------|-----------------------------------------|------------------|
//! | `name`        | `name`, then `title`                    | `"unnamed_tool"` |
//! | `description` | `description`                           | `""`             |
//! | `type`        | always `"object"`                       | `"object"`       |
//! | `properties`  | parameter source `properties`           | `{}`             |
//! | `required`    | parameter source `required`             | `[]`             |
//!
//! The parameter source is the schema itself, or its nested `parameters`
//! object when the schema has no top-level `properties`. A source `type`
//! other than `"object"` is logged and replaced. Composition and
//! definition keywords on the source are copied through unmodified.

use crate::error::{ConvertError, Result};
use crate::formats::parameter_block;
use crate::types::{ToolFormat, ToolMetadata};
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Name used when a schema carries neither `name` nor `title`.
pub const DEFAULT_TOOL_NAME: &str = "unnamed_tool";

/// Default indentation for [`SchemaConverter::to_json`].
pub const DEFAULT_INDENT: usize = 2;

/// Keywords copied verbatim from the parameter source into the parameter block.
pub const PASSTHROUGH_KEYWORDS: &[&str] = &[
    "additionalProperties",
    "$defs",
    "definitions",
    "$ref",
    "allOf",
    "anyOf",
    "oneOf",
    "not",
];

/// Conversion switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Rewrite the tool name into a function-safe identifier.
    pub normalize_names: bool,
}

/// Converts a JSON Schema into tool definitions.
#[derive(Debug, Clone)]
pub struct SchemaConverter {
    schema: Map<String, Value>,
    options: ConvertOptions,
}

impl SchemaConverter {
    /// Create a converter from a parsed JSON value. Fails unless it is an object.
    pub fn new(schema: Value) -> Result<Self> {
        match schema {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(ConvertError::malformed(format!(
                "Schema must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn from_map(schema: Map<String, Value>) -> Self {
        Self {
            schema,
            options: ConvertOptions::default(),
        }
    }

    /// Parse a converter from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| ConvertError::malformed(format!("Invalid JSON: {}", e)))?;
        Self::new(value)
    }

    /// Read and parse a JSON schema file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
        debug!("Loaded schema from {:?} ({} bytes)", path, text.len());
        Self::from_json(&text).map_err(|e| match e {
            ConvertError::MalformedInput(msg) => {
                ConvertError::malformed(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    pub fn schema(&self) -> &Map<String, Value> {
        &self.schema
    }

    /// Convert to the named format (`"openai"` or `"anthropic"`).
    pub fn convert(&self, format: &str) -> Result<Value> {
        let format: ToolFormat = format.parse()?;
        Ok(self.convert_to(format))
    }

    /// Convert to a known format. Infallible once the format is resolved.
    pub fn convert_to(&self, format: ToolFormat) -> Value {
        format.wrap(self.metadata())
    }

    /// Convert and serialize with `indent` spaces per level.
    pub fn to_json(&self, format: &str, indent: usize) -> Result<String> {
        let tool = self.convert(format)?;
        to_pretty_json(&tool, indent)
    }

    /// Extract the format-independent metadata for this schema.
    pub fn metadata(&self) -> ToolMetadata {
        let fields = SchemaFields::extract(&self.schema);
        let name = if self.options.normalize_names {
            normalize_name(&fields.name)
        } else {
            fields.name
        };

        let mut parameters = parameter_block(fields.properties, fields.required);
        parameters.extend(fields.passthrough);

        ToolMetadata {
            name,
            description: fields.description,
            parameters,
        }
    }
}

/// Fields pulled out of a schema with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaFields {
    pub name: String,
    pub description: String,
    pub properties: Map<String, Value>,
    pub required: Vec<Value>,
    pub passthrough: Map<String, Value>,
}

impl SchemaFields {
    pub fn extract(schema: &Map<String, Value>) -> Self {
        let name = non_empty_str(schema, "name")
            .or_else(|| non_empty_str(schema, "title"))
            .unwrap_or(DEFAULT_TOOL_NAME)
            .to_string();

        let description = match schema.get("description") {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                warn!("Ignoring non-string description ({})", json_kind(other));
                String::new()
            }
        };

        let source = parameter_source(schema);

        match source.get("type") {
            None => {}
            Some(Value::String(t)) if t == "object" => {}
            Some(other) => warn!("Replacing parameter type {} with \"object\"", other),
        }

        let properties = match source.get("properties") {
            None => Map::new(),
            Some(Value::Object(props)) => props.clone(),
            Some(other) => {
                warn!("Ignoring non-object properties ({})", json_kind(other));
                Map::new()
            }
        };

        let required = match source.get("required") {
            None => Vec::new(),
            Some(Value::Array(names)) => names.clone(),
            Some(other) => {
                warn!("Ignoring non-array required ({})", json_kind(other));
                Vec::new()
            }
        };

        let passthrough = PASSTHROUGH_KEYWORDS
            .iter()
            .filter_map(|key| match source.get(*key) {
                Some(Value::Null) | None => None,
                Some(value) => Some((key.to_string(), value.clone())),
            })
            .collect();

        Self {
            name,
            description,
            properties,
            required,
            passthrough,
        }
    }
}

/// The mapping parameters are read from: the schema itself, or its nested
/// `parameters` object when there are no top-level `properties`.
fn parameter_source(schema: &Map<String, Value>) -> &Map<String, Value> {
    if schema.contains_key("properties") {
        return schema;
    }
    match schema.get("parameters") {
        Some(Value::Object(nested)) => {
            debug!("Reading parameters from nested 'parameters' object");
            nested
        }
        _ => schema,
    }
}

fn non_empty_str<'a>(schema: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    match schema.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.as_str()),
        Value::String(_) => None,
        other => {
            warn!("Ignoring non-string '{}' ({})", key, json_kind(other));
            None
        }
    }
}

/// Turn an arbitrary title into a function-safe identifier: spaces and
/// hyphens become underscores, other non-alphanumerics are dropped, and a
/// leading digit is prefixed with `_`.
pub fn normalize_name(name: &str) -> String {
    let mut normalized: String = name
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    if normalized.starts_with(|c: char| c.is_ascii_digit()) {
        normalized.insert(0, '_');
    }

    if normalized.is_empty() {
        DEFAULT_TOOL_NAME.to_string()
    } else {
        normalized
    }
}

/// Serialize `value` with `indent` spaces per nesting level.
pub fn to_pretty_json<T: Serialize>(value: &T, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| ConvertError::malformed(e.to_string()))
}

/// Write `contents` to `path` through a temporary file in the same
/// directory, renamed into place only once fully written.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| ConvertError::io(dir, e))?;
    tmp.write_all(contents.as_bytes()).map_err(|e| ConvertError::io(path, e))?;
    tmp.persist(path).map_err(|e| ConvertError::io(path, e.error))?;
    debug!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
