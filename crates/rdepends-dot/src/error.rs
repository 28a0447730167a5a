//! Error types for reading dependency dumps.
//!
//! Malformed input is not an error: the scanner recovers from it silently.
//! Only failing to obtain the input in the first place is reported.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for rdepends-dot operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be opened.
    #[error("cannot access '{}'", path.display())]
    Access {
        /// Path as given by the caller (`-` for stdin).
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The input was opened but reading it failed.
    #[error("cannot read '{}'", path.display())]
    Read {
        /// Path as given by the caller (`-` for stdin).
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// A specialized Result type for rdepends-dot operations.
pub type Result<T> = std::result::Result<T, Error>;
