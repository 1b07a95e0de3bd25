//! Error types for schema conversion.

use std::path::PathBuf;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors raised while loading a schema or converting it to a tool definition.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Requested output format is not one of the supported formats.
    #[error("Unsupported format: {0}. Supported formats: openai, anthropic")]
    UnsupportedFormat(String),

    /// Input path does not exist.
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Any other failure reading or writing a file.
    #[error("Failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON, or not a JSON object.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A tool definition failed structural validation.
    #[error("Invalid tool definition: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Map an I/O error on `path` to the matching variant.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}
