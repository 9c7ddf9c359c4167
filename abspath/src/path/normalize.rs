//! Lexical path normalization.
//!
//! Nothing in this module touches the filesystem:
//! - Cleaning collapses redundant separators, drops `.` and resolves `..`
//! - Tilde splitting recognizes a leading `~`
//! - Slash conversion translates between `/` and the host separator

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

use crate::error::{Error, Result};

/// Clean a path lexically.
///
/// Redundant separators and `.` components are removed and `..` pops the
/// previous normal component. A `..` directly under the root is dropped, so
/// cleaning an absolute path always yields an absolute path. Leading `..`
/// components of a relative path are kept. Cleaning an empty path yields `.`.
///
/// # Examples
///
/// ```
/// use abspath::path::normalize::clean;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(clean(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(clean(Path::new("/path////to//file/")), PathBuf::from("/path/to/file"));
/// assert_eq!(clean(Path::new("/../a")), PathBuf::from("/a"));
/// assert_eq!(clean(Path::new("../a/..")), PathBuf::from(".."));
/// ```
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut has_root = false;
    // Normal components currently in `result` that a `..` may pop.
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
            }
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                } else if !has_root {
                    result.push("..");
                }
            }
            Component::Normal(c) => {
                result.push(c);
                depth += 1;
            }
        }
    }

    if result.as_os_str().is_empty() {
        result.push(".");
    }

    result
}

/// Split a leading `~` from a path.
///
/// Returns the remainder after the tilde with leading separators removed, so
/// that joining it onto a home directory appends rather than replaces. Returns
/// `None` when the path does not start with `~`.
///
/// # Errors
///
/// Returns [`Error::InvalidUtf8`] if the path starts with `~` but is not
/// valid UTF-8.
///
/// # Examples
///
/// ```
/// use abspath::path::normalize::split_tilde;
/// use std::path::Path;
///
/// assert_eq!(split_tilde(Path::new("~")).unwrap(), Some(""));
/// assert_eq!(split_tilde(Path::new("~/notes.txt")).unwrap(), Some("notes.txt"));
/// assert_eq!(split_tilde(Path::new("~foo")).unwrap(), Some("foo"));
/// assert_eq!(split_tilde(Path::new("foo/~")).unwrap(), None);
/// ```
pub fn split_tilde(path: &Path) -> Result<Option<&str>> {
    if path.as_os_str().as_encoded_bytes().first() != Some(&b'~') {
        return Ok(None);
    }
    let rest = path
        .to_str()
        .and_then(|s| s.strip_prefix('~'))
        .ok_or_else(|| Error::InvalidUtf8 {
            path: path.to_path_buf(),
        })?;
    Ok(Some(
        rest.trim_start_matches(|c: char| c == '/' || c == MAIN_SEPARATOR),
    ))
}

/// Convert a slash-separated string to host-native separators.
///
/// # Examples
///
/// ```
/// use abspath::path::normalize::from_slash;
/// use std::path::{Path, MAIN_SEPARATOR};
///
/// let native = from_slash("a/b");
/// assert_eq!(native, Path::new(&format!("a{MAIN_SEPARATOR}b")));
/// ```
#[must_use]
pub fn from_slash(s: &str) -> PathBuf {
    if MAIN_SEPARATOR == '/' {
        PathBuf::from(s)
    } else {
        PathBuf::from(s.replace('/', MAIN_SEPARATOR_STR))
    }
}

/// Convert host-native separators to forward slashes.
///
/// Non-UTF-8 sequences are replaced lossily.
#[must_use]
pub fn to_slash(path: &Path) -> String {
    let s = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(MAIN_SEPARATOR, "/")
    }
}
