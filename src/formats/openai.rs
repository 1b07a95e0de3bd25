//! OpenAI function-calling format.
//!
//! ```json
//! {
//!   "type": "function",
//!   "function": {
//!     "name": "get_weather",
//!     "description": "...",
//!     "parameters": {"type": "object", "properties": {...}, "required": [...]}
//!   }
//! }
//! ```

use super::{checks, flatten_schema, Formatter};
use crate::types::{ToolMetadata, ValidationReport};
use serde_json::{json, Map, Value};

/// Builds and validates OpenAI tool definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAiFormatter;

impl Formatter for OpenAiFormatter {
    fn wrap(metadata: ToolMetadata) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": metadata.name,
                "description": metadata.description,
                "parameters": metadata.parameters,
            }
        })
    }

    fn validate(tool: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();

        let Some(tool) = tool.as_object() else {
            report.push("Tool must be an object");
            return report;
        };

        if tool.get("type").and_then(Value::as_str) != Some("function") {
            report.push("Tool 'type' must be 'function'");
        }

        let Some(function) = checks::require_object(&mut report, tool, "function", "Tool") else {
            return report;
        };

        checks::require_string(&mut report, function, "name", "Function");
        checks::optional_string(&mut report, function, "description", "Function");

        let params = checks::require_object(&mut report, function, "parameters", "Function");
        if let Some(params) = params {
            checks::check_parameter_schema(&mut report, params, "Function parameters");
        }

        report
    }

    fn extract_schema(tool: &Value) -> Map<String, Value> {
        let function = &tool["function"];
        flatten_schema(
            &function["name"],
            &function["description"],
            &function["parameters"],
        )
    }

    fn tool_name(tool: &Value) -> Option<&str> {
        tool.get("function")?.get("name")?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather() -> Value {
        let props = json!({"city": {"type": "string", "description": "City name"}});
        OpenAiFormatter::build(
            "get_weather",
            "Get weather",
            props.as_object().cloned().unwrap(),
            vec!["city".into()],
        )
    }

    #[test]
    fn test_build_envelope() {
        assert_eq!(
            weather(),
            json!({
                "type": "function",
                "function": {
                    "name": "get_weather",
                    "description": "Get weather",
                    "parameters": {
                        "type": "object",
                        "properties": {"city": {"type": "string", "description": "City name"}},
                        "required": ["city"]
                    }
                }
            })
        );
    }

    #[test]
    fn test_build_allows_empty_strings() {
        let tool = OpenAiFormatter::build("", "", Map::new(), Vec::new());
        assert_eq!(tool["function"]["name"], "");
        assert!(OpenAiFormatter::validate(&tool).is_valid());
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(OpenAiFormatter::validate(&weather()).into_parts(), (true, vec![]));
    }

    #[test]
    fn test_validate_non_object() {
        let report = OpenAiFormatter::validate(&json!(["not", "a", "tool"]));
        assert_eq!(report.errors(), ["Tool must be an object"]);
    }

    #[test]
    fn test_validate_missing_function_and_bad_type() {
        let report = OpenAiFormatter::validate(&json!({"type": "tool"}));
        assert_eq!(
            report.errors(),
            ["Tool 'type' must be 'function'", "Tool must have a 'function' field"]
        );
    }

    #[test]
    fn test_validate_function_not_object() {
        let report = OpenAiFormatter::validate(&json!({"type": "function", "function": "x"}));
        assert_eq!(report.errors(), ["Tool 'function' must be an object"]);
    }

    #[test]
    fn test_validate_accumulates_function_errors() {
        let tool = json!({
            "type": "function",
            "function": {"name": 7, "description": false, "parameters": {"type": "string"}}
        });
        let report = OpenAiFormatter::validate(&tool);
        assert_eq!(
            report.errors(),
            [
                "Function 'name' must be a string",
                "Function 'description' must be a string",
                "Function parameters 'type' must be 'object'",
            ]
        );
    }

    #[test]
    fn test_validate_missing_parameters() {
        let tool = json!({"type": "function", "function": {"name": "f"}});
        let report = OpenAiFormatter::validate(&tool);
        assert_eq!(report.errors(), ["Function must have a 'parameters' field"]);
    }

    #[test]
    fn test_validate_required_cross_check() {
        let tool = json!({
            "type": "function",
            "function": {
                "name": "f",
                "parameters": {"type": "object", "properties": {}, "required": ["missing"]}
            }
        });
        let (valid, errors) = OpenAiFormatter::validate(&tool).into_parts();
        assert!(!valid);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("'missing'"));
    }

    #[test]
    fn test_extract_schema() {
        let schema = OpenAiFormatter::extract_schema(&weather());
        assert_eq!(
            Value::Object(schema),
            json!({
                "name": "get_weather",
                "description": "Get weather",
                "type": "object",
                "properties": {"city": {"type": "string", "description": "City name"}},
                "required": ["city"]
            })
        );
    }

    #[test]
    fn test_tool_name() {
        assert_eq!(OpenAiFormatter::tool_name(&weather()), Some("get_weather"));
        assert_eq!(OpenAiFormatter::tool_name(&json!({"name": "x"})), None);
    }
}
