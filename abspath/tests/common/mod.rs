//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for directory trees and a guard for
//! changing the process working directory.

use std::env;
use std::fs;
use std::path::PathBuf;

use abspath::AbsolutePath;
use tempfile::TempDir;

/// Builder for a temporary directory tree.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let (_dir, root) = TreeFixture::new()
///     .with_file("docs/readme.md", "hello")
///     .with_dir("empty")
///     .build();
/// ```
#[allow(dead_code)]
#[derive(Default)]
pub struct TreeFixture {
    files: Vec<(String, String)>,
    dirs: Vec<String>,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file at a slash-separated relative path.
    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.push((path.to_string(), contents.to_string()));
        self
    }

    /// Adds a directory at a slash-separated relative path.
    pub fn with_dir(mut self, path: &str) -> Self {
        self.dirs.push(path.to_string());
        self
    }

    /// Creates the tree and returns the owning temp dir with its root.
    ///
    /// The root has its symlinks resolved so comparisons against canonical
    /// paths hold on systems where the temp directory is a symlink.
    pub fn build(self) -> (TempDir, AbsolutePath) {
        let dir = tempfile::tempdir().unwrap();
        let root = AbsolutePath::new(dir.path())
            .unwrap()
            .eval_symlinks()
            .unwrap();

        for path in &self.dirs {
            fs::create_dir_all(root.join(path.split('/')).as_path()).unwrap();
        }
        for (path, contents) in &self.files {
            let file = root.join(path.split('/'));
            fs::create_dir_all(file.dir().as_path()).unwrap();
            fs::write(file.as_path(), contents).unwrap();
        }

        (dir, root)
    }
}

/// RAII guard that changes the working directory and restores it on drop.
///
/// Note: The working directory is process-global. Tests using this guard
/// must be marked `#[serial]`.
#[allow(dead_code)]
pub struct CwdGuard {
    previous: PathBuf,
}

#[allow(dead_code)]
impl CwdGuard {
    /// Changes into `dir` until the guard is dropped.
    pub fn enter(dir: &AbsolutePath) -> Self {
        let previous = env::current_dir().unwrap();
        env::set_current_dir(dir.as_path()).unwrap();
        Self { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}
