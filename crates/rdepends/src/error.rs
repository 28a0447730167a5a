//! Error types for rdepends.

use std::io;
use thiserror::Error;

/// Result type for rdepends operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for rdepends operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A query named a recipe that no edge statement mentions.
    #[error("recipe not found: {0}")]
    RecipeNotFound(String),

    /// The dependency dump could not be read.
    #[error(transparent)]
    Input(#[from] rdepends_dot::Error),

    /// Writing results failed.
    #[error("cannot write output")]
    Io(#[from] io::Error),

    /// Encoding results as JSON failed.
    #[error("cannot encode output as JSON")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` if the reader of our output went away (`| head`).
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        let kind = match self {
            Self::Io(err) => Some(err.kind()),
            Self::Json(err) => err.io_error_kind(),
            Self::RecipeNotFound(_) | Self::Input(_) => None,
        };
        kind == Some(io::ErrorKind::BrokenPipe)
    }
}
