//! Schema to Tool — convert JSON Schema to LLM tool definitions.
//!
//! Turns a JSON-Schema-like function description into OpenAI function
//! definitions or Anthropic tool definitions, and validates definitions
//! already in either format.
//!
//! ```
//! use schema_to_tool::{SchemaConverter, ToolFormat};
//! use serde_json::json;
//!
//! let converter = SchemaConverter::new(json!({
//!     "name": "get_weather",
//!     "properties": {"city": {"type": "string"}},
//!     "required": ["city"]
//! }))
//! .unwrap();
//!
//! let tool = converter.convert_to(ToolFormat::Anthropic);
//! assert_eq!(tool["input_schema"]["required"], json!(["city"]));
//! assert!(ToolFormat::Anthropic.validate(&tool).is_valid());
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod formats;
pub mod types;

pub use converter::{ConvertOptions, SchemaConverter};
pub use error::{ConvertError, Result};
pub use formats::{AnthropicFormatter, Formatter, OpenAiFormatter};
pub use types::{ToolFormat, ToolMetadata, ValidationReport};
