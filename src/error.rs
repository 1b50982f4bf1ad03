//! Error types and handling infrastructure for glossbot.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. Application-level context is added with `anyhow` in `main.rs`.
//!
//! Note that the user-facing conditions of the navigation flow (invalid letter, empty
//! letter, unknown term, short query) are *not* errors: they are answered in place by
//! the dispatcher and never surface as `GlossbotError`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for glossbot infrastructure operations.
#[derive(Error, Debug)]
pub enum GlossbotError {
    /// File system related errors (file not found, permission denied, etc.)
    #[error("File operation failed: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Glossary file missing on disk
    #[error("Glossary file not found: {path}")]
    GlossaryNotFound { path: PathBuf },

    /// Glossary content failed to parse or validate
    #[error("Glossary error: {message}")]
    Glossary { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Delivering an outbound action failed
    #[error("Transport error: {message}")]
    Transport { message: String },
}

/// Standard Result type for glossbot operations.
pub type Result<T> = std::result::Result<T, GlossbotError>;

impl GlossbotError {
    /// Create an Io error from an io::Error with additional context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a Glossary error with a descriptive message
    pub fn glossary(message: impl Into<String>) -> Self {
        Self::Glossary {
            message: message.into(),
        }
    }

    /// Create a Config error with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a Transport error with a descriptive message
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for GlossbotError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::Io {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::Io {
                message: "Permission denied".to_string(),
                source: err,
            },
            std::io::ErrorKind::BrokenPipe => Self::transport(format!("Output closed: {}", err)),
            _ => Self::Io {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let missing = GlossbotError::GlossaryNotFound {
            path: PathBuf::from("/data/glossary.toml"),
        };
        assert_eq!(
            missing.to_string(),
            "Glossary file not found: /data/glossary.toml"
        );

        let glossary = GlossbotError::glossary("duplicate term 'Бот'");
        assert_eq!(glossary.to_string(), "Glossary error: duplicate term 'Бот'");

        let config = GlossbotError::config("bad log level");
        assert_eq!(config.to_string(), "Configuration error: bad log level");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        match GlossbotError::from(io_err) {
            GlossbotError::Io { message, .. } => assert_eq!(message, "File not found"),
            other => panic!("Expected Io variant, got {other:?}"),
        }

        let pipe = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        match GlossbotError::from(pipe) {
            GlossbotError::Transport { message } => assert_eq!(message, "Output closed: closed"),
            other => panic!("Expected Transport variant, got {other:?}"),
        }

        let transport = GlossbotError::transport("stdout gone");
        assert_eq!(transport.to_string(), "Transport error: stdout gone");
    }
}
