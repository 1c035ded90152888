//! Error types for the swatchbook library

use thiserror::Error;

/// Result type alias for swatchbook operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for color description, extraction and export
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Input did not match `#?[0-9a-fA-F]{6}`
    #[error("Malformed color: {input:?} is not a 6-digit hex color")]
    MalformedColor { input: String },

    /// Image file or buffer could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File extension does not map to a supported image format
    #[error("Unsupported image format: {path}")]
    UnsupportedFormat { path: String },

    /// Dominant-color extraction produced nothing usable
    #[error("Color extraction failed: {reason}")]
    ExtractionError { reason: String },

    /// Invalid configuration or input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Reading or writing a config or export file failed
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl PaletteError {
    /// Create a malformed color error for the given input
    pub fn malformed(input: impl Into<String>) -> Self {
        Self::MalformedColor {
            input: input.into(),
        }
    }

    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// A malformed entry only spoils its own record and an extraction
    /// failure can be retried with a generated palette instead.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaletteError::MalformedColor { .. } | PaletteError::ExtractionError { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::MalformedColor { input } => {
                format!("\"{}\" is not a valid color. Use six hex digits such as #2563eb.", input)
            }
            PaletteError::ImageLoadError { .. } | PaletteError::UnsupportedFormat { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            PaletteError::ExtractionError { .. } => {
                "Could not find dominant colors in the image. Try another image or generate a random palette.".to_string()
            }
            _ => "Failed to process colors. Please try again.".to_string(),
        }
    }
}
