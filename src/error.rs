//! Error types for registry operations.
//!
//! This module defines [`RegistryError`], the error type returned by every
//! fallible registry call, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Registration problems are raised immediately at the call that detects them
//! - Errors are built through the constructors on [`RegistryError`] so every
//!   message carries the same framework prefix
//! - Overwriting an existing entry is never an error, only a warning

use std::path::PathBuf;
use thiserror::Error;

/// Prefix carried by every registry failure message.
pub const ERROR_PREFIX: &str = "Formwork Error";

/// Core error type for registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A registration call received input of the wrong shape.
    #[error("Formwork Error: {message}")]
    InvalidArgument { message: String },

    /// A definition violates the registration schema.
    #[error("Formwork Error: {message}")]
    ConfigError { message: String },

    /// A referenced type is not registered.
    #[error("Formwork Error: There is no type by the name of \"{name}\": {context}")]
    NotFound { name: String, context: String },

    /// Failed to parse a definition file.
    #[error("Failed to parse definitions at {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RegistryError {
    /// Build an [`RegistryError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Build a [`RegistryError::ConfigError`].
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Build a [`RegistryError::NotFound`] for `name`, with `context`
    /// describing what asked for it.
    pub fn not_found(name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::NotFound {
            name: name.into(),
            context: context.into(),
        }
    }
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_displays_prefix_and_message() {
        let err = RegistryError::invalid_argument("You must provide an object or array");
        let msg = err.to_string();
        assert!(msg.starts_with(ERROR_PREFIX));
        assert!(msg.contains("object or array"));
    }

    #[test]
    fn config_error_displays_message() {
        let err = RegistryError::config("You must provide a name for setType");
        assert!(err.to_string().contains("You must provide a name"));
        assert!(matches!(err, RegistryError::ConfigError { .. }));
    }

    #[test]
    fn not_found_displays_name_and_context() {
        let err = RegistryError::not_found("missing", r#"{"name":"child"}"#);
        let msg = err.to_string();
        assert!(msg.contains(r#"There is no type by the name of "missing""#));
        assert!(msg.contains(r#"{"name":"child"}"#));
    }

    #[test]
    fn parse_error_displays_path_and_message() {
        let err = RegistryError::ParseError {
            path: PathBuf::from("/forms/types.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/forms/types.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RegistryError = io_err.into();
        assert!(matches!(err, RegistryError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(RegistryError::config("test"))
        }
        assert!(returns_error().is_err());
    }
}
