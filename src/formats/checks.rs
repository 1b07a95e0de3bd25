//! Validation helpers shared by the format implementations.
//!
//! Every helper appends to a [`ValidationReport`] and keeps going, so a
//! single pass reports all failures.

use crate::types::ValidationReport;
use serde_json::{Map, Value};

fn article(key: &str) -> &'static str {
    match key.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// `owner.key` must be present and a string.
pub fn require_string(
    report: &mut ValidationReport,
    obj: &Map<String, Value>,
    key: &str,
    owner: &str,
) {
    match obj.get(key) {
        None => report.push(format!("{owner} must have {} '{key}' field", article(key))),
        Some(Value::String(_)) => {}
        Some(_) => report.push(format!("{owner} '{key}' must be a string")),
    }
}

/// `owner.key` may be absent, but if present must be a string.
pub fn optional_string(
    report: &mut ValidationReport,
    obj: &Map<String, Value>,
    key: &str,
    owner: &str,
) {
    if let Some(value) = obj.get(key) {
        if !value.is_string() {
            report.push(format!("{owner} '{key}' must be a string"));
        }
    }
}

/// `owner.key` must be present and an object. Returns the object when it is.
pub fn require_object<'a>(
    report: &mut ValidationReport,
    obj: &'a Map<String, Value>,
    key: &str,
    owner: &str,
) -> Option<&'a Map<String, Value>> {
    match obj.get(key) {
        None => {
            report.push(format!("{owner} must have {} '{key}' field", article(key)));
            None
        }
        Some(Value::Object(inner)) => Some(inner),
        Some(_) => {
            report.push(format!("{owner} '{key}' must be an object"));
            None
        }
    }
}

/// Check a parameter schema (`parameters` / `input_schema`):
/// `type == "object"`, well-typed `properties` and `required`, and every
/// required name defined in `properties`.
///
/// An absent `properties` counts as empty for the required cross-check.
/// A `properties` of the wrong type is reported once and skips the cross-check.
pub fn check_parameter_schema(
    report: &mut ValidationReport,
    params: &Map<String, Value>,
    label: &str,
) {
    if params.get("type").and_then(Value::as_str) != Some("object") {
        report.push(format!("{label} 'type' must be 'object'"));
    }

    let empty = Map::new();
    let properties = match params.get("properties") {
        None => Some(&empty),
        Some(Value::Object(props)) => Some(props),
        Some(_) => {
            report.push(format!("{label} 'properties' must be an object"));
            None
        }
    };

    let required = match params.get("required") {
        None => return,
        Some(Value::Array(required)) => required,
        Some(_) => {
            report.push(format!("{label} 'required' must be an array"));
            return;
        }
    };

    for (index, entry) in required.iter().enumerate() {
        match (entry.as_str(), properties) {
            (None, _) => report.push(format!("{label} 'required' entry {index} must be a string")),
            (Some(name), Some(props)) if !props.contains_key(name) => report.push(format!(
                "Required parameter '{name}' is not defined in {label} 'properties'"
            )),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_require_string() {
        let mut report = ValidationReport::new();
        require_string(&mut report, &obj(json!({})), "name", "Tool");
        require_string(&mut report, &obj(json!({"name": 1})), "name", "Tool");
        require_string(&mut report, &obj(json!({"name": ""})), "name", "Tool");
        assert_eq!(
            report.errors(),
            ["Tool must have a 'name' field", "Tool 'name' must be a string"]
        );
    }

    #[test]
    fn test_require_object_article() {
        let mut report = ValidationReport::new();
        let empty = obj(json!({}));
        let found = require_object(&mut report, &empty, "input_schema", "Tool");
        assert!(found.is_none());
        assert_eq!(report.errors(), ["Tool must have an 'input_schema' field"]);
    }

    #[test]
    fn test_absent_properties_treated_as_empty() {
        let mut report = ValidationReport::new();
        let params = obj(json!({"type": "object", "required": ["x"]}));
        check_parameter_schema(&mut report, &params, "input_schema");
        assert_eq!(
            report.errors(),
            ["Required parameter 'x' is not defined in input_schema 'properties'"]
        );
    }

    #[test]
    fn test_malformed_properties_skips_cross_check() {
        let mut report = ValidationReport::new();
        check_parameter_schema(
            &mut report,
            &obj(json!({"type": "object", "properties": [], "required": ["x"]})),
            "parameters",
        );
        assert_eq!(report.errors(), ["parameters 'properties' must be an object"]);
    }

    #[test]
    fn test_reports_every_failure() {
        let mut report = ValidationReport::new();
        check_parameter_schema(
            &mut report,
            &obj(json!({"type": "array", "properties": {"a": {}}, "required": ["a", 3, "b", "c"]})),
            "parameters",
        );
        assert_eq!(
            report.errors(),
            [
                "parameters 'type' must be 'object'",
                "parameters 'required' entry 1 must be a string",
                "Required parameter 'b' is not defined in parameters 'properties'",
                "Required parameter 'c' is not defined in parameters 'properties'",
            ]
        );
    }

    #[test]
    fn test_required_must_be_array() {
        let mut report = ValidationReport::new();
        let params = obj(json!({"type": "object", "required": "a"}));
        check_parameter_schema(&mut report, &params, "parameters");
        assert_eq!(report.errors(), ["parameters 'required' must be an array"]);
    }
}
