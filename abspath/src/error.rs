//! Error types for the abspath library.
//!
//! Every fallible operation in this crate returns [`Result`], built on the
//! single [`Error`] enum below using `thiserror`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an abspath error.
///
/// # Examples
///
/// ```
/// use abspath::{AbsolutePath, Result};
///
/// fn config_file() -> Result<AbsolutePath> {
///     AbsolutePath::from_slash("/etc/app/config.yaml")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the abspath library.
#[derive(Debug, Error)]
pub enum Error {
    /// The input did not denote an absolute path.
    #[error("not an absolute path: '{}'", input.display())]
    NotAbsolutePath {
        /// The rejected input, verbatim.
        input: PathBuf,
    },

    /// An empty string was given to an expanding constructor.
    #[error("empty path cannot be expanded")]
    EmptyPath,

    /// Tilde input that is not valid UTF-8.
    #[error("path contains invalid UTF-8: {}", path.display())]
    InvalidUtf8 {
        /// The rejected input.
        path: PathBuf,
    },

    /// The home directory of the current user could not be determined.
    #[error("cannot determine home directory")]
    HomeDirUnavailable,

    /// The current working directory could not be read.
    #[error("cannot determine current directory: {source}")]
    CurrentDirUnavailable {
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A directory traversal step failed.
    #[error("walk failed at {}: {source}", path.display())]
    Walk {
        /// The entry at which traversal failed.
        path: PathBuf,
        /// The underlying traversal error.
        #[source]
        source: walkdir::Error,
    },

    /// A glob pattern was malformed.
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        /// The rejected pattern.
        pattern: String,
        /// The parser error.
        #[source]
        source: globset::Error,
    },

    /// No relative path leads from `base` to `target`.
    #[error("cannot make {} relative to {}", target.display(), base.display())]
    NoRelativePath {
        /// The path the relative expression would start from.
        base: PathBuf,
        /// The path the relative expression should reach.
        target: PathBuf,
    },

    /// A walk visitor aborted the traversal.
    #[error("walk aborted: {0}")]
    Visitor(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Map an I/O error on `path` to the most specific variant.
    pub(crate) fn from_io(path: &std::path::Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }

    /// Check if error indicates the input was not absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsolutePath;
    ///
    /// let err = AbsolutePath::new("relative/path").unwrap_err();
    /// assert!(err.is_not_absolute());
    /// ```
    #[must_use]
    pub fn is_not_absolute(&self) -> bool {
        matches!(self, Self::NotAbsolutePath { .. })
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::PathNotFound { .. } => true,
            Self::Walk { source, .. } => source
                .io_error()
                .is_some_and(|e| e.kind() == io::ErrorKind::NotFound),
            _ => false,
        }
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
