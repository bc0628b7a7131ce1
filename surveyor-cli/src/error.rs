//! CLI errors and their exit codes.
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  4   | Configuration error     |
//! | 130  | Cancelled by the user   |

use std::error::Error as _;

use surveyor::{InitError, RegistryError};
use thiserror::Error;
use tracing::debug;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid arguments or an unusable environment.
    #[error("Invalid input: {message}")]
    Usage { message: String },

    /// The settings file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The survey failed.
    #[error("Survey failed")]
    Survey(#[source] InitError),

    /// The operator cancelled the survey.
    #[error("Operation cancelled")]
    Cancelled,

    /// Writing the result failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<InitError> for CliError {
    fn from(err: InitError) -> Self {
        if err.is_cancelled() {
            Self::Cancelled
        } else {
            Self::Survey(err)
        }
    }
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { .. } => 2,
            Self::Survey(InitError::Registry(RegistryError::UnknownFeature(_))) => 2,
            Self::Config { .. } => 4,
            Self::Cancelled => 130,
            Self::Survey(_) | Self::Io { .. } => 1,
        }
    }

    /// The message and its chain of causes, one per line.
    pub fn render(&self) -> String {
        let mut out = format!("error: {self}\n");
        let mut source = self.source();
        while let Some(cause) = source {
            out.push_str(&format!("  caused by: {cause}\n"));
            source = cause.source();
        }
        out
    }

    /// Record the error for `-vv` runs; the operator sees [`CliError::render`].
    pub fn log(&self) {
        match self {
            Self::Cancelled => debug!("survey cancelled by the operator"),
            other => debug!(exit_code = other.exit_code(), error = ?other, "command failed"),
        }
    }
}
