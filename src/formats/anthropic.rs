//! Anthropic tool-use format: `{name, description, input_schema}`.

use super::{checks, flatten_schema, Formatter};
use crate::types::{ToolMetadata, ValidationReport};
use serde_json::{json, Map, Value};

/// Builds and validates Anthropic tool definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnthropicFormatter;

impl Formatter for AnthropicFormatter {
    fn wrap(metadata: ToolMetadata) -> Value {
        json!({
            "name": metadata.name,
            "description": metadata.description,
            "input_schema": metadata.parameters,
        })
    }

    fn validate(tool: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();

        let Some(tool) = tool.as_object() else {
            report.push("Tool must be an object");
            return report;
        };

        checks::require_string(&mut report, tool, "name", "Tool");
        checks::optional_string(&mut report, tool, "description", "Tool");

        if let Some(schema) = checks::require_object(&mut report, tool, "input_schema", "Tool") {
            checks::check_parameter_schema(&mut report, schema, "Tool input_schema");
        }

        report
    }

    fn extract_schema(tool: &Value) -> Map<String, Value> {
        flatten_schema(&tool["name"], &tool["description"], &tool["input_schema"])
    }

    fn tool_name(tool: &Value) -> Option<&str> {
        tool.get("name")?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_envelope() {
        let props = json!({"query": {"type": "string"}});
        let tool = AnthropicFormatter::build(
            "search",
            "Search the web",
            props.as_object().cloned().unwrap(),
            vec!["query".into()],
        );
        assert_eq!(
            tool,
            json!({
                "name": "search",
                "description": "Search the web",
                "input_schema": {
                    "type": "object",
                    "properties": {"query": {"type": "string"}},
                    "required": ["query"]
                }
            })
        );
        assert!(AnthropicFormatter::validate(&tool).is_valid());
    }

    #[test]
    fn test_validate_name_and_schema_errors_together() {
        let report = AnthropicFormatter::validate(&json!({"name": ["x"]}));
        assert_eq!(
            report.errors(),
            [
                "Tool 'name' must be a string",
                "Tool must have an 'input_schema' field",
            ]
        );
    }

    #[test]
    fn test_validate_input_schema_shape() {
        let report = AnthropicFormatter::validate(&json!({"name": "t", "input_schema": []}));
        assert_eq!(report.errors(), ["Tool 'input_schema' must be an object"]);

        let report = AnthropicFormatter::validate(&json!({"name": "t", "input_schema": {}}));
        assert_eq!(report.errors(), ["Tool input_schema 'type' must be 'object'"]);
    }

    #[test]
    fn test_validate_required_cross_check() {
        let tool = json!({
            "name": "t",
            "input_schema": {
                "type": "object",
                "properties": {"a": {"type": "string"}},
                "required": ["a", "b"]
            }
        });
        let (valid, errors) = AnthropicFormatter::validate(&tool).into_parts();
        assert!(!valid);
        assert_eq!(
            errors,
            ["Required parameter 'b' is not defined in Tool input_schema 'properties'"]
        );
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let tool = json!({"name": 1, "input_schema": {"type": "object", "required": ["z"]}});
        let before = tool.clone();
        let _ = AnthropicFormatter::validate(&tool);
        assert_eq!(tool, before);
    }

    #[test]
    fn test_extract_schema_missing_parts() {
        let schema = AnthropicFormatter::extract_schema(&json!({"name": "t"}));
        assert_eq!(Value::Object(schema), json!({"name": "t", "description": ""}));
    }
}
