//! Absolute path handling.
//!
//! This module provides the [`AbsolutePath`] type together with the
//! constructors that produce it and the operations defined on it.
//!
//! # Key Concepts
//!
//! ## Validation
//!
//! [`AbsolutePath::new`] accepts only input the host already considers
//! absolute and rejects everything else with
//! [`Error::NotAbsolutePath`](crate::Error::NotAbsolutePath).
//!
//! ## Expansion
//!
//! [`AbsolutePath::expand_from`] accepts any non-empty input:
//! - Absolute paths are kept
//! - A leading `~` is replaced by the home directory
//! - Relative paths are joined onto the working directory
//!
//! The working and home directories come from a [`DirectoryProvider`]; an
//! [`Expander`] built with [`FixedDirectories`] expands deterministically.
//!
//! ## Cleaning
//!
//! Every constructor and derivation cleans its result lexically (see
//! [`normalize::clean`]). Symlinks are only resolved on request by
//! [`AbsolutePath::eval_symlinks`].
//!
//! # Examples
//!
//! ```no_run
//! use abspath::AbsolutePath;
//!
//! let config = AbsolutePath::expand_from("~/.config/app.toml").unwrap();
//! let (dir, file) = config.split();
//! assert_eq!(file, "app.toml");
//! if !dir.is_dir() {
//!     std::fs::create_dir_all(dir.as_path()).unwrap();
//! }
//! ```

mod derive;
pub mod environment;
pub mod expander;
mod filesystem;
pub mod normalize;
mod relative;
mod types;
mod walk;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use environment::{DirectoryProvider, FixedDirectories, SystemDirectories};
pub use expander::Expander;
pub use types::AbsolutePath;
pub use walk::{WalkControl, WalkOptions};
