//! Access to the ambient directories path expansion depends on.
//!
//! Expansion reads the current working directory and the user's home
//! directory at call time. Both go through the [`DirectoryProvider`] trait so
//! tests can substitute fixed values for the process-global ones.

use std::env;
use std::io;
use std::path::PathBuf;

/// Source of the working and home directories.
///
/// # Examples
///
/// ```
/// use abspath::path::{DirectoryProvider, SystemDirectories};
///
/// let dirs = SystemDirectories;
/// if let Ok(cwd) = dirs.current_dir() {
///     println!("cwd: {}", cwd.display());
/// }
/// ```
pub trait DirectoryProvider: Send + Sync {
    /// Return the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be read, for example
    /// because it was removed.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Return the current user's home directory, if one can be determined.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Production implementation backed by the process environment.
///
/// The working directory comes from [`std::env::current_dir`] and the home
/// directory from the `home` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDirectories;

impl DirectoryProvider for SystemDirectories {
    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        home::home_dir()
    }
}

/// Fixed implementation for deterministic expansion.
///
/// # Examples
///
/// ```
/// use abspath::path::{DirectoryProvider, FixedDirectories};
/// use std::path::PathBuf;
///
/// let dirs = FixedDirectories::new("/work", Some(PathBuf::from("/home/ada")));
/// assert_eq!(dirs.current_dir().unwrap(), PathBuf::from("/work"));
/// assert_eq!(dirs.home_dir(), Some(PathBuf::from("/home/ada")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDirectories {
    current_dir: Option<PathBuf>,
    home_dir: Option<PathBuf>,
}

impl FixedDirectories {
    /// Create a provider that reports the given directories.
    #[must_use]
    pub fn new(current_dir: impl Into<PathBuf>, home_dir: Option<PathBuf>) -> Self {
        Self {
            current_dir: Some(current_dir.into()),
            home_dir,
        }
    }

    /// Create a provider where neither directory can be determined.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            current_dir: None,
            home_dir: None,
        }
    }
}

impl DirectoryProvider for FixedDirectories {
    fn current_dir(&self) -> io::Result<PathBuf> {
        self.current_dir.clone().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no current directory configured")
        })
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir.clone()
    }
}
