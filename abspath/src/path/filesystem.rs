//! Filesystem queries on [`AbsolutePath`].
//!
//! These are the only operations besides [`AbsolutePath::walk`] that touch
//! the filesystem. They block on I/O.

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::path::types::AbsolutePath;

impl AbsolutePath {
    /// Resolve every symbolic link in the path.
    ///
    /// The path must exist. The result is absolute and clean. On Windows the
    /// `\\?\` verbatim prefix is dropped whenever the path can be spelled
    /// with a plain drive letter or UNC share.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path does not exist (`PathNotFound`)
    /// - Permission is denied (`PermissionDenied`)
    /// - Another I/O error occurs, such as a symlink loop
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use abspath::AbsolutePath;
    ///
    /// let link = AbsolutePath::new("/usr/bin/python3").unwrap();
    /// let real = link.eval_symlinks().unwrap();
    /// println!("{link} -> {real}");
    /// ```
    pub fn eval_symlinks(&self) -> Result<Self> {
        let resolved =
            fs::canonicalize(self.as_path()).map_err(|e| Error::from_io(self.as_path(), e))?;
        Self::new(strip_verbatim(resolved))
    }

    /// Whether anything exists at this path.
    ///
    /// Returns `false` both when nothing exists and when the entry cannot be
    /// examined, for example for lack of permission. Use
    /// [`AbsolutePath::stat`] to tell the two apart.
    #[must_use]
    pub fn exists(&self) -> bool {
        fs::metadata(self.as_path()).is_ok()
    }

    /// Whether this path is an existing directory.
    ///
    /// Returns `false` on any failure to examine the entry.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        fs::metadata(self.as_path()).is_ok_and(|meta| meta.is_dir())
    }

    /// Whether this path exists and is not a directory.
    ///
    /// Anything that is not a directory counts, including devices and
    /// sockets. Returns `false` on any failure to examine the entry.
    #[must_use]
    pub fn is_file(&self) -> bool {
        fs::metadata(self.as_path()).is_ok_and(|meta| !meta.is_dir())
    }

    /// Metadata of the entry, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns `PathNotFound`, `PermissionDenied` or `Io` when the entry
    /// cannot be examined.
    pub fn stat(&self) -> Result<fs::Metadata> {
        fs::metadata(self.as_path()).map_err(|e| Error::from_io(self.as_path(), e))
    }
}

/// Rewrite `\\?\C:\x` as `C:\x` and `\\?\UNC\server\share\x` as
/// `\\server\share\x`, unless a component needs the verbatim form.
#[cfg(windows)]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    use std::ffi::OsString;
    use std::path::{Component, Prefix};

    // Longer paths need the verbatim prefix to stay reachable
    const MAX_PATH: usize = 260;

    let mut components = path.components();
    let plain_prefix = match components.next() {
        Some(Component::Prefix(prefix)) => match prefix.kind() {
            Prefix::VerbatimDisk(drive) => OsString::from(format!("{}:", char::from(drive))),
            Prefix::VerbatimUNC(server, share) => {
                let mut unc = OsString::from(r"\\");
                unc.push(server);
                unc.push(r"\");
                unc.push(share);
                unc
            }
            _ => return path,
        },
        _ => return path,
    };

    let rest = components.as_path();
    let plain_rest = rest.components().all(|component| match component {
        Component::RootDir => true,
        Component::Normal(name) => is_plain_name(name),
        _ => false,
    });
    if !plain_rest || path.as_os_str().len() >= MAX_PATH {
        return path;
    }

    let mut plain = PathBuf::from(plain_prefix);
    plain.push(rest);
    plain
}

#[cfg(not(windows))]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    path
}

/// Whether a file name means the same thing with and without `\\?\`.
#[cfg(windows)]
fn is_plain_name(name: &std::ffi::OsStr) -> bool {
    const RESERVED: [&str; 4] = ["CON", "PRN", "AUX", "NUL"];

    let Some(name) = name.to_str() else {
        return false;
    };
    if name.ends_with(['.', ' '])
        || name
            .chars()
            .any(|c| c.is_control() || matches!(c, '<' | '>' | ':' | '"' | '|' | '?' | '*'))
    {
        return false;
    }

    let stem = name.split('.').next().unwrap_or(name).trim_end().to_ascii_uppercase();
    let device = stem.len() == 4
        && (stem.starts_with("COM") || stem.starts_with("LPT"))
        && stem.as_bytes()[3].is_ascii_digit();
    !device && !RESERVED.contains(&stem.as_str())
}
