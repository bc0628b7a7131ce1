/// Error type for survey operations.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// User cancelled the survey (Ctrl+C, closed input, etc.)
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An answer failed its validator and the adapter could not ask again.
    #[error("Invalid answer for '{question}': {message}")]
    Validation { question: String, message: String },

    /// The question model itself is malformed.
    #[error("Invalid question '{question}': {reason}")]
    InvalidQuestion { question: String, reason: String },

    /// Adapter-specific failure (I/O, terminal, etc.)
    #[error("Prompt adapter error: {0}")]
    Adapter(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create an adapter error from any error type.
    pub fn adapter(err: impl Into<anyhow::Error>) -> Self {
        Self::Adapter(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Error type for feature and service registries.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Neither the name nor its prefixed form is registered.
    #[error("unknown feature '{0}'")]
    UnknownFeature(String),

    /// The feature failed to turn its answers into a definition.
    #[error("feature '{name}' rejected its answers: {source}")]
    Answers {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}
