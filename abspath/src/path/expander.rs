//! Expanding constructors.
//!
//! [`Expander`] turns absolute, relative or tilde-prefixed input into an
//! [`AbsolutePath`], reading the working and home directories from a
//! [`DirectoryProvider`]. The free functions in this module use the system
//! provider.

use std::path::{Component, Path};

use crate::error::{Error, Result};
use crate::path::environment::{DirectoryProvider, SystemDirectories};
use crate::path::normalize;
use crate::path::types::AbsolutePath;

/// Expands path input into absolute paths.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use abspath::path::{Expander, FixedDirectories};
/// use std::path::PathBuf;
///
/// let expander = Expander::with_directories(FixedDirectories::new(
///     "/work/project",
///     Some(PathBuf::from("/home/ada")),
/// ));
///
/// assert_eq!(expander.expand("src/main.rs").unwrap(), "/work/project/src/main.rs");
/// assert_eq!(expander.expand("~/notes.txt").unwrap(), "/home/ada/notes.txt");
/// assert_eq!(expander.expand("/etc/hosts").unwrap(), "/etc/hosts");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Expander<D = SystemDirectories> {
    directories: D,
    expand_tilde: bool,
}

impl Default for Expander {
    fn default() -> Self {
        Self::with_directories(SystemDirectories)
    }
}

impl Expander {
    /// Create an expander that reads the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: DirectoryProvider> Expander<D> {
    /// Create an expander that reads directories from `directories`.
    #[must_use]
    pub fn with_directories(directories: D) -> Self {
        Self {
            directories,
            expand_tilde: true,
        }
    }

    /// Configure whether a leading `~` means the home directory.
    ///
    /// When disabled, `~` is an ordinary path segment and the input is joined
    /// onto the working directory like any other relative path.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use abspath::path::{Expander, FixedDirectories};
    ///
    /// let expander = Expander::with_directories(FixedDirectories::new("/work", None))
    ///     .with_tilde_expansion(false);
    /// assert_eq!(expander.expand("~/x").unwrap(), "/work/~/x");
    /// # }
    /// ```
    #[must_use]
    pub fn with_tilde_expansion(mut self, enabled: bool) -> Self {
        self.expand_tilde = enabled;
        self
    }

    /// Expand a path into an absolute path.
    ///
    /// - Absolute input is cleaned and returned.
    /// - Input starting with `~` is joined onto the home directory with the
    ///   tilde removed.
    /// - Any other input is resolved against the working directory with
    ///   [`PathBuf::push`](std::path::PathBuf::push) semantics. On Windows a
    ///   root-relative `\x` keeps only the working directory's drive, and a
    ///   drive-relative `C:x` is resolved on drive `C:`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input is empty ([`Error::EmptyPath`])
    /// - Tilde input is not valid UTF-8 ([`Error::InvalidUtf8`])
    /// - The home directory is needed but unknown ([`Error::HomeDirUnavailable`])
    /// - The working directory is needed but unreadable
    ///   ([`Error::CurrentDirUnavailable`])
    /// - The provider reports a directory that is not absolute
    pub fn expand(&self, path: impl AsRef<Path>) -> Result<AbsolutePath> {
        let path = path.as_ref();

        if path.is_absolute() {
            return Ok(AbsolutePath::from_absolute(path));
        }

        if path.as_os_str().is_empty() {
            return Err(Error::EmptyPath);
        }

        if self.expand_tilde {
            if let Some(rest) = normalize::split_tilde(path)? {
                let home = self.home_dir()?;
                log::debug!("expanding {} under home {home}", path.display());
                return Ok(home.join([rest]));
            }
        }

        let cwd = self.current_dir()?;
        log::debug!("expanding {} under working directory {cwd}", path.display());
        resolve_relative(&cwd, path)
    }

    /// Expand a slash-separated path into an absolute path.
    ///
    /// Forward slashes are converted to the host separator first.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Expander::expand`].
    pub fn expand_slash(&self, path: &str) -> Result<AbsolutePath> {
        self.expand(normalize::from_slash(path))
    }

    /// Return the working directory as an absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CurrentDirUnavailable`] if the directory cannot be
    /// read, or [`Error::NotAbsolutePath`] if it is not absolute.
    pub fn current_dir(&self) -> Result<AbsolutePath> {
        let cwd = self
            .directories
            .current_dir()
            .map_err(|source| Error::CurrentDirUnavailable { source })?;
        AbsolutePath::new(cwd)
    }

    /// Return the home directory as an absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeDirUnavailable`] if no home directory is known, or
    /// [`Error::NotAbsolutePath`] if it is not absolute.
    pub fn home_dir(&self) -> Result<AbsolutePath> {
        let home = self
            .directories
            .home_dir()
            .filter(|home| !home.as_os_str().is_empty())
            .ok_or(Error::HomeDirUnavailable)?;
        AbsolutePath::new(home)
    }
}

/// Resolve a relative path against `cwd`.
fn resolve_relative(cwd: &AbsolutePath, path: &Path) -> Result<AbsolutePath> {
    let mut components = path.components();
    if let Some(Component::Prefix(prefix)) = components.next() {
        if !path.has_root() && prefix.as_os_str().eq_ignore_ascii_case(cwd.volume_name()) {
            return Ok(cwd.join([components.as_path()]));
        }
    }

    let mut resolved = cwd.as_path().to_path_buf();
    resolved.push(path);
    if resolved.is_absolute() {
        return Ok(AbsolutePath::from_absolute(&resolved));
    }

    // Drive-relative input for another drive: only the host knows that
    // drive's working directory.
    let resolved =
        std::path::absolute(path).map_err(|source| Error::CurrentDirUnavailable { source })?;
    Ok(AbsolutePath::from_absolute(&resolved))
}

impl AbsolutePath {
    /// Expand absolute, relative or `~`-prefixed input.
    ///
    /// See [`Expander::expand`]; this uses the process environment.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Expander::expand`].
    pub fn expand_from(path: impl AsRef<Path>) -> Result<Self> {
        Expander::new().expand(path)
    }

    /// Expand slash-separated absolute, relative or `~`-prefixed input.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Expander::expand`].
    pub fn expand_from_slash(path: &str) -> Result<Self> {
        Expander::new().expand_slash(path)
    }

    /// The process working directory.
    ///
    /// # Errors
    ///
    /// Fails if the working directory cannot be read.
    pub fn current_dir() -> Result<Self> {
        Expander::new().current_dir()
    }

    /// The current user's home directory.
    ///
    /// # Errors
    ///
    /// Fails if no home directory can be determined or it is not absolute.
    pub fn home_dir() -> Result<Self> {
        Expander::new().home_dir()
    }
}

/// Validate an absolute path. Same as [`AbsolutePath::new`].
///
/// # Errors
///
/// Returns [`Error::NotAbsolutePath`] for non-absolute input.
pub fn validate(path: impl AsRef<Path>) -> Result<AbsolutePath> {
    AbsolutePath::new(path)
}

/// Expand a path using the process environment.
///
/// # Errors
///
/// See [`Expander::expand`].
///
/// # Examples
///
/// ```no_run
/// let a = abspath::expand_from("/path/to/file").unwrap();
/// let b = abspath::expand_from("relative_path").unwrap();
/// let c = abspath::expand_from("~/Documents").unwrap();
/// ```
pub fn expand_from(path: impl AsRef<Path>) -> Result<AbsolutePath> {
    AbsolutePath::expand_from(path)
}

/// Validate a slash-separated absolute path.
///
/// # Errors
///
/// Returns [`Error::NotAbsolutePath`] for non-absolute input.
pub fn from_slash(path: &str) -> Result<AbsolutePath> {
    AbsolutePath::from_slash(path)
}

/// Expand a slash-separated path using the process environment.
///
/// # Errors
///
/// See [`Expander::expand`].
pub fn expand_from_slash(path: &str) -> Result<AbsolutePath> {
    AbsolutePath::expand_from_slash(path)
}

/// The process working directory.
///
/// # Errors
///
/// Fails if the working directory cannot be read.
pub fn current_dir() -> Result<AbsolutePath> {
    AbsolutePath::current_dir()
}

/// The current user's home directory.
///
/// # Errors
///
/// Fails if no home directory can be determined or it is not absolute.
pub fn home_dir() -> Result<AbsolutePath> {
    AbsolutePath::home_dir()
}
