//! The [`AbsolutePath`] value type.
//!
//! An `AbsolutePath` can only be obtained from a validating or expanding
//! constructor, so holding one proves the path is absolute and clean.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::path::normalize;

/// An absolute, lexically clean filesystem path.
///
/// The wrapped path:
/// - passes [`Path::is_absolute`] on the host
/// - has no redundant separators, `.` or `..` components
/// - uses host-native separators
///
/// Values are immutable; every derivation returns a new `AbsolutePath`.
/// Equality, ordering and hashing compare the cleaned paths.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use abspath::AbsolutePath;
///
/// let hosts = AbsolutePath::new("/etc/hosts").unwrap();
/// assert_eq!(hosts.to_string(), "/etc/hosts");
/// assert_eq!(hosts.base(), "hosts");
/// assert_eq!(hosts.dir().to_string(), "/etc");
/// assert_eq!(hosts.ext(), "");
///
/// assert!(AbsolutePath::new("relative/path").is_err());
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AbsolutePath {
    path: PathBuf,
}

impl AbsolutePath {
    /// Validate an absolute path.
    ///
    /// The input must already be absolute by the host's rules. It is cleaned
    /// lexically; symlinks are not resolved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAbsolutePath`] carrying the input if it is not
    /// absolute. The empty path is never absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use abspath::AbsolutePath;
    ///
    /// let path = AbsolutePath::new("/path////to//file/").unwrap();
    /// assert_eq!(path.to_string(), "/path/to/file");
    ///
    /// let err = AbsolutePath::new("").unwrap_err();
    /// assert!(err.is_not_absolute());
    /// # }
    /// ```
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_absolute() {
            return Err(Error::NotAbsolutePath {
                input: path.to_path_buf(),
            });
        }
        Ok(Self::from_absolute(path))
    }

    /// Wrap a path the caller has already established to be absolute.
    pub(crate) fn from_absolute(path: &Path) -> Self {
        debug_assert!(path.is_absolute(), "{} is not absolute", path.display());
        let cleaned = normalize::clean(path);
        if cleaned.as_os_str() != path.as_os_str() {
            log::trace!("cleaned {} to {}", path.display(), cleaned.display());
        }
        Self { path: cleaned }
    }

    /// Validate a slash-separated absolute path.
    ///
    /// Forward slashes are converted to the host separator before validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAbsolutePath`] if the converted path is not
    /// absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsolutePath;
    /// # #[cfg(unix)] {
    /// let path = AbsolutePath::from_slash("/foo/bar").unwrap();
    /// assert_eq!(path, AbsolutePath::new("/foo/bar").unwrap());
    /// # }
    /// assert!(AbsolutePath::from_slash("path/to/file").is_err());
    /// ```
    pub fn from_slash(path: &str) -> Result<Self> {
        Self::new(normalize::from_slash(path))
    }

    /// Borrow the path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Borrow the path as an OS string.
    #[must_use]
    pub fn as_os_str(&self) -> &OsStr {
        self.path.as_os_str()
    }

    /// Convert into the underlying `PathBuf`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use abspath::AbsolutePath;
    /// use std::path::PathBuf;
    ///
    /// let path = AbsolutePath::new("/srv/data").unwrap();
    /// assert_eq!(path.into_path_buf(), PathBuf::from("/srv/data"));
    /// # }
    /// ```
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for AbsolutePath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl AsRef<OsStr> for AbsolutePath {
    fn as_ref(&self) -> &OsStr {
        self.path.as_os_str()
    }
}

impl From<AbsolutePath> for PathBuf {
    fn from(path: AbsolutePath) -> Self {
        path.path
    }
}

impl PartialEq<Path> for AbsolutePath {
    fn eq(&self, other: &Path) -> bool {
        self.path.as_path() == other
    }
}

impl PartialEq<str> for AbsolutePath {
    fn eq(&self, other: &str) -> bool {
        self.path.as_os_str() == other
    }
}

impl PartialEq<&str> for AbsolutePath {
    fn eq(&self, other: &&str) -> bool {
        self.path.as_os_str() == *other
    }
}

impl TryFrom<&Path> for AbsolutePath {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self> {
        Self::new(path)
    }
}

impl TryFrom<PathBuf> for AbsolutePath {
    type Error = Error;

    fn try_from(path: PathBuf) -> Result<Self> {
        Self::new(path)
    }
}

impl TryFrom<&str> for AbsolutePath {
    type Error = Error;

    fn try_from(path: &str) -> Result<Self> {
        Self::new(path)
    }
}

impl TryFrom<String> for AbsolutePath {
    type Error = Error;

    fn try_from(path: String) -> Result<Self> {
        Self::new(path)
    }
}

impl FromStr for AbsolutePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
