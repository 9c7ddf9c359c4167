//! Depth-first directory traversal rooted at an [`AbsolutePath`].

use std::fs;

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::path::types::AbsolutePath;

/// What a walk visitor wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkControl {
    /// Keep walking.
    #[default]
    Continue,

    /// Do not descend into the directory just visited.
    ///
    /// When returned for a non-directory entry, the remaining entries of
    /// that entry's parent directory are skipped.
    SkipDir,

    /// End the walk successfully without visiting anything else.
    Stop,
}

/// Options for [`AbsolutePath::walk_with`].
///
/// The defaults match [`AbsolutePath::walk`]: symlinks are not followed,
/// depth is unlimited and each directory is visited in file name order.
///
/// # Examples
///
/// ```
/// use abspath::path::WalkOptions;
///
/// let options = WalkOptions::new().with_max_depth(2).with_follow_links(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    follow_links: bool,
    max_depth: Option<usize>,
    sort_by_name: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            follow_links: false,
            max_depth: None,
            sort_by_name: true,
        }
    }
}

impl WalkOptions {
    /// Create options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow symbolic links to directories.
    #[must_use]
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Limit how deep the walk descends; the root is depth 0.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Visit directory entries in file name order (the default) or in the
    /// order the operating system returns them.
    #[must_use]
    pub fn with_sorting(mut self, sort_by_name: bool) -> Self {
        self.sort_by_name = sort_by_name;
        self
    }
}

impl AbsolutePath {
    /// Walk the tree rooted at this path, depth first, in lexical order.
    ///
    /// The visitor is called once per entry, the root included, with the
    /// entry's path and its metadata (symlinks are not followed). When an
    /// entry cannot be read, the visitor receives the error instead. It may
    /// return an `Err` (for example by applying `?` to the metadata) to abort
    /// the walk with that error, or return `Ok` to carry on past it.
    ///
    /// # Errors
    ///
    /// Returns the first error the visitor returns.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use abspath::AbsolutePath;
    /// use abspath::path::WalkControl;
    ///
    /// let root = AbsolutePath::new("/srv/site").unwrap();
    /// let mut total = 0;
    /// root.walk(|path, meta| {
    ///     let meta = meta?;
    ///     if path.base() == ".git" {
    ///         return Ok(WalkControl::SkipDir);
    ///     }
    ///     total += meta.len();
    ///     Ok(WalkControl::Continue)
    /// })
    /// .unwrap();
    /// ```
    pub fn walk<F>(&self, visit: F) -> Result<()>
    where
        F: FnMut(&AbsolutePath, Result<fs::Metadata>) -> Result<WalkControl>,
    {
        self.walk_with(&WalkOptions::default(), visit)
    }

    /// Walk the tree rooted at this path with explicit options.
    ///
    /// # Errors
    ///
    /// Returns the first error the visitor returns.
    pub fn walk_with<F>(&self, options: &WalkOptions, mut visit: F) -> Result<()>
    where
        F: FnMut(&AbsolutePath, Result<fs::Metadata>) -> Result<WalkControl>,
    {
        let mut walker = WalkDir::new(self.as_path()).follow_links(options.follow_links);
        if let Some(depth) = options.max_depth {
            walker = walker.max_depth(depth);
        }
        if options.sort_by_name {
            walker = walker.sort_by_file_name();
        }

        let mut entries = walker.into_iter();
        while let Some(next) = entries.next() {
            let (path, info) = match next {
                Ok(entry) => {
                    let path = AbsolutePath::from_absolute(entry.path());
                    let info = entry.metadata().map_err(|source| Error::Walk {
                        path: entry.path().to_path_buf(),
                        source,
                    });
                    (path, info)
                }
                Err(source) => {
                    let path = source
                        .path()
                        .map_or_else(|| self.clone(), AbsolutePath::from_absolute);
                    let err = Error::Walk {
                        path: path.as_path().to_path_buf(),
                        source,
                    };
                    (path, Err(err))
                }
            };

            let failed = info.is_err();
            let control = visit(&path, info)?;
            if failed {
                log::debug!("walk visitor continued past error at {path}");
            }

            match control {
                WalkControl::Continue => {}
                WalkControl::SkipDir => entries.skip_current_dir(),
                WalkControl::Stop => break,
            }
        }

        Ok(())
    }
}
