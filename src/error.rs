//! Error types for option resolution.
//!
//! Every variant is fatal: resolution stops at the first error and the
//! binary exits with [`OptionsError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Exit status for argv-level mistakes, including a missing root.
pub const EXIT_USAGE: i32 = 2;

/// Exit status for every other resolution failure.
pub const EXIT_FAILURE: i32 = 1;

/// Errors that can occur while resolving server options.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// Malformed command line: missing root, unknown flag, missing value.
    #[error("{message}")]
    Usage { message: String },

    /// `--help` was requested. Not a failure; carries the rendered usage.
    #[error("{usage}")]
    Help { usage: String },

    /// A flag received an argument it cannot accept.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The project configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A file named on the command line could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The root path is not a valid project root.
    #[error("Invalid project root '{root}': {reason}")]
    Validation { root: PathBuf, reason: String },
}

impl OptionsError {
    pub(crate) fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Help { .. } => 0,
            Self::Usage { .. } => EXIT_USAGE,
            Self::InvalidArgument { .. }
            | Self::Config(_)
            | Self::Io { .. }
            | Self::Validation { .. } => EXIT_FAILURE,
        }
    }
}
