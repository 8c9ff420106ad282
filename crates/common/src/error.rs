//! Error types shared across Reelsmith crates.

/// Top-level error type for Reelsmith operations.
#[derive(Debug, thiserror::Error)]
pub enum ReelsmithError {
    /// Malformed caller input: unsorted timestamps, non-finite coordinates,
    /// non-positive frame rates or dimensions. Validated at every public
    /// entry point so it never propagates as silent numeric corruption.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Processing error: {message}")]
    Processing { message: String },

    #[error("Expression compile error: {message}")]
    Compile { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ReelsmithError.
pub type ReelsmithResult<T> = Result<T, ReelsmithError>;

impl ReelsmithError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }

    pub fn processing(msg: impl Into<String>) -> Self {
        Self::Processing {
            message: msg.into(),
        }
    }

    pub fn compile(msg: impl Into<String>) -> Self {
        Self::Compile {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
