//! Reading a dependency dump into memory.
//!
//! The scanner needs the whole document at once, so input is read to the
//! end before anything else happens. Regular files and named pipes are read
//! the same way; the path `-` means standard input.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Reads the document at `path`, or standard input for `-`.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD; recipe names
/// are ASCII, so this only affects content the scanner skips anyway.
///
/// # Errors
///
/// Returns [`Error::Access`] if the file cannot be opened and
/// [`Error::Read`] if reading from it fails.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = if path == Path::new(STDIN_PATH) {
        read_all(io::stdin().lock(), path)?
    } else {
        let file = File::open(path).map_err(|source| Error::Access {
            path: path.to_path_buf(),
            source,
        })?;
        read_all(file, path)?
    };
    debug!(path = %path.display(), bytes = bytes.len(), "read input");

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}

/// Reads everything from `reader`, attributing failures to `path`.
fn read_all(mut reader: impl Read, path: &Path) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(bytes)
}
