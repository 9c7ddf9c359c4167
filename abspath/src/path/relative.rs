//! Relative path computation between absolute paths.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize;
use crate::path::types::AbsolutePath;

/// A cleaned path split into its anchor (volume and root) and the rest.
struct Parts<'a> {
    anchor: Vec<&'a OsStr>,
    names: Vec<Component<'a>>,
}

impl<'a> Parts<'a> {
    fn of(path: &'a Path) -> Self {
        let mut anchor = Vec::new();
        let mut names = Vec::new();
        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => anchor.push(component.as_os_str()),
                Component::CurDir => {}
                Component::Normal(_) | Component::ParentDir => names.push(component),
            }
        }
        Self { anchor, names }
    }

    /// Volume names compare case-insensitively, as drive letters do.
    fn same_anchor(&self, other: &Self) -> bool {
        self.anchor.len() == other.anchor.len()
            && self
                .anchor
                .iter()
                .zip(&other.anchor)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl AbsolutePath {
    /// A relative path that leads from this path to `target`.
    ///
    /// The result is computed lexically: `target` is cleaned but nothing is
    /// looked up on the filesystem. Joining the result onto `self` yields
    /// the cleaned `target`. Identical paths give `.`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRelativePath`] if `target` is not rooted the same
    /// way as `self`: a relative target, or a target on another volume.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use abspath::AbsolutePath;
    /// use std::path::PathBuf;
    ///
    /// let base = AbsolutePath::new("/a/b").unwrap();
    /// assert_eq!(base.rel("/a/b/c/d").unwrap(), PathBuf::from("c/d"));
    /// assert_eq!(base.rel("/a/x").unwrap(), PathBuf::from("../x"));
    /// assert_eq!(base.rel("/a/b").unwrap(), PathBuf::from("."));
    /// assert!(base.rel("c/d").is_err());
    /// # }
    /// ```
    pub fn rel(&self, target: impl AsRef<Path>) -> Result<PathBuf> {
        let target = target.as_ref();
        let cleaned = normalize::clean(target);

        let base = Parts::of(self.as_path());
        let to = Parts::of(&cleaned);
        if !base.same_anchor(&to) {
            return Err(Error::NoRelativePath {
                base: self.as_path().to_path_buf(),
                target: target.to_path_buf(),
            });
        }

        let common = base
            .names
            .iter()
            .zip(&to.names)
            .take_while(|(a, b)| a == b)
            .count();

        let mut relative = PathBuf::new();
        for _ in common..base.names.len() {
            relative.push("..");
        }
        for name in &to.names[common..] {
            relative.push(name);
        }
        if relative.as_os_str().is_empty() {
            relative.push(".");
        }
        Ok(relative)
    }
}
