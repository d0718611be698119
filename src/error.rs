//! Error types for the salary engine.
//!
//! The calculation core itself is infallible for well-formed numeric input.
//! Errors only arise while loading tax-year configuration and while
//! validating incoming requests before they reach the core.

use thiserror::Error;

/// The main error type for the salary engine.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tax_year.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tax_year.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A request field violated its allowed range or format.
    #[error("Invalid field '{field}': {message}")]
    InvalidField {
        /// The wire name of the offending field.
        field: String,
        /// A description of the violated constraint.
        message: String,
    },

    /// A future-scenario preset name was not recognised.
    #[error("Unknown scenario preset: {name}")]
    UnknownPreset {
        /// The preset name that was requested.
        name: String,
    },

    /// An environment setting could not be interpreted.
    #[error("Invalid setting {name}={value}")]
    InvalidSetting {
        /// The environment variable name.
        name: String,
        /// The rejected value.
        value: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidField`].
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
