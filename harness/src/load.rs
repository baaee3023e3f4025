//! Board loading: `load_board(path) -> Board`.
//!
//! Two failure classes are kept apart: the file could not be read at all
//! (resource error) or it was read and is not a valid board (format error).
//! Either aborts that input only.

use std::fmt;
use std::path::{Path, PathBuf};

use tracer_kernel::carrier::board::Board;
use tracer_kernel::carrier::parse::FormatError;

/// Error loading a board file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// File missing or unreadable.
    Io { path: PathBuf, detail: String },
    /// File read but its contents break the board format.
    Format { path: PathBuf, error: FormatError },
}

impl LoadError {
    /// The input this error concerns.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Format { path, .. } => path,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, detail } => {
                write!(f, "cannot read {}: {detail}", path.display())
            }
            Self::Format { path, error } => {
                write!(f, "invalid board file {}: {error}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { .. } => None,
            Self::Format { error, .. } => Some(error),
        }
    }
}

/// Read and validate a board file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Format`] if its contents are not a valid board.
pub fn load_board(path: impl AsRef<Path>) -> Result<Board, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    Board::parse(&text).map_err(|error| LoadError::Format {
        path: path.to_path_buf(),
        error,
    })
}
