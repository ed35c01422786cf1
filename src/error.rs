//! Error types for swaggen
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for swaggen
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Inference Errors
    // ============================================================================
    /// A JSON value whose runtime kind has no schema primitive mapping.
    /// Fatal: the traversal aborts and the definitions table is left in its
    /// pre-call state.
    #[error("Unsupported JSON type: {kind}")]
    UnsupportedType {
        /// Runtime kind of the offending value
        kind: String,
    },

    /// The configured nesting bound was exceeded. Only reachable when a
    /// maximum depth has been set on the inferrer.
    #[error("Maximum nesting depth ({limit}) exceeded")]
    MaxDepthExceeded {
        /// The configured bound
        limit: usize,
    },

    // ============================================================================
    // Document / Shell Errors
    // ============================================================================
    /// Invalid caller-supplied input outside the traversal itself
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    /// YAML (de)serialization failure
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON (de)serialization failure
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Wrapped error with caller-supplied context
    #[error("{0}")]
    Other(String),

    /// Any other error
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unsupported-type error
    pub fn unsupported_type(kind: impl Into<String>) -> Self {
        Self::UnsupportedType { kind: kind.into() }
    }
}

/// Result type alias for swaggen
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
