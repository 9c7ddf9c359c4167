#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # abspath
//!
//! Absolute filesystem paths as a validated, immutable value type.
//!
//! Functions that take a bare string path leave callers guessing whether it
//! must be absolute. Taking an [`AbsolutePath`] instead settles it: the only
//! ways to build one validate or expand the input.
//!
//! ## Core Types
//!
//! - [`AbsolutePath`]: an absolute, lexically clean path
//! - [`Expander`]: expansion of relative and `~` input with injectable
//!   working and home directories
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! # #[cfg(unix)] {
//! use abspath::AbsolutePath;
//!
//! let hosts = AbsolutePath::new("/etc/hosts").unwrap();
//! assert_eq!(hosts.base(), "hosts");
//! assert_eq!(hosts.dir(), "/etc");
//!
//! // Relative input must be expanded, not validated
//! assert!(AbsolutePath::new("relative/path").is_err());
//! let expanded = abspath::expand_from("relative/path").unwrap();
//! assert!(expanded.as_path().ends_with("relative/path"));
//! # }
//! ```

pub mod error;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use path::expander::{
    current_dir, expand_from, expand_from_slash, from_slash, home_dir, validate,
};
pub use path::{AbsolutePath, Expander, WalkControl, WalkOptions};
