//! Pure derivations on [`AbsolutePath`].
//!
//! None of these touch the filesystem.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, MAIN_SEPARATOR};

use globset::GlobBuilder;

use crate::error::{Error, Result};
use crate::path::normalize;
use crate::path::types::AbsolutePath;

impl AbsolutePath {
    /// The last element of the path.
    ///
    /// For the root (or a bare volume root) the whole path is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use abspath::AbsolutePath;
    ///
    /// assert_eq!(AbsolutePath::new("/etc/hosts").unwrap().base(), "hosts");
    /// assert_eq!(AbsolutePath::new("/").unwrap().base(), "/");
    /// # }
    /// ```
    #[must_use]
    pub fn base(&self) -> &OsStr {
        self.as_path()
            .file_name()
            .unwrap_or_else(|| self.as_os_str())
    }

    /// The parent directory; the root is its own parent.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use abspath::AbsolutePath;
    ///
    /// assert_eq!(AbsolutePath::new("/etc/hosts").unwrap().dir(), "/etc");
    /// assert_eq!(AbsolutePath::new("/").unwrap().dir(), "/");
    /// # }
    /// ```
    #[must_use]
    pub fn dir(&self) -> Self {
        match self.as_path().parent() {
            Some(parent) => Self::from_absolute(parent),
            None => self.clone(),
        }
    }

    /// The suffix of the last element starting at its final `.`.
    ///
    /// Returns an empty string when the last element has no dot. Unlike
    /// [`Path::extension`], the dot is included and a leading dot counts, so
    /// `.bashrc` yields `".bashrc"`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use abspath::AbsolutePath;
    ///
    /// assert_eq!(AbsolutePath::new("/src/lib.tar.gz").unwrap().ext(), ".gz");
    /// assert_eq!(AbsolutePath::new("/etc/hosts").unwrap().ext(), "");
    /// # }
    /// ```
    #[must_use]
    pub fn ext(&self) -> String {
        let Some(name) = self.as_path().file_name() else {
            return String::new();
        };
        let name = name.to_string_lossy();
        name.rfind('.')
            .map(|dot| name[dot..].to_string())
            .unwrap_or_default()
    }

    /// Whether the path starts with `prefix` as a plain string.
    ///
    /// This does not respect component boundaries: `/usr/local` has the
    /// prefix `/usr/lo`. Use [`Path::starts_with`] through
    /// [`AbsolutePath::as_path`] for component-wise tests.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use abspath::AbsolutePath;
    ///
    /// let path = AbsolutePath::new("/usr/local").unwrap();
    /// assert!(path.has_prefix("/usr/lo"));
    /// assert!(!path.has_prefix("/opt"));
    /// # }
    /// ```
    #[must_use]
    pub fn has_prefix(&self, prefix: impl AsRef<OsStr>) -> bool {
        self.as_os_str()
            .as_encoded_bytes()
            .starts_with(prefix.as_ref().as_encoded_bytes())
    }

    /// Append path elements and clean the result.
    ///
    /// Elements are always appended, even when they are themselves absolute:
    /// root and volume components of an element are ignored. `..` elements
    /// are resolved lexically and stop at the root. Joining nothing returns
    /// an equal path.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use abspath::AbsolutePath;
    ///
    /// let base = AbsolutePath::new("/srv").unwrap();
    /// assert_eq!(base.join(["www", "index.html"]), "/srv/www/index.html");
    /// assert_eq!(base.join(["../etc"]), "/etc");
    /// assert_eq!(base.join(["/abs"]), "/srv/abs");
    /// assert_eq!(base.join(Vec::<&str>::new()), base);
    /// # }
    /// ```
    #[must_use]
    pub fn join<I, P>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut joined = self.as_path().to_path_buf();
        for element in elements {
            for component in element.as_ref().components() {
                match component {
                    Component::Normal(_) | Component::ParentDir => joined.push(component),
                    Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
                }
            }
        }
        Self::from_absolute(&joined)
    }

    /// Test the whole path against a shell glob pattern.
    ///
    /// `*` matches any run of non-separator characters, `?` a single
    /// non-separator character, and `[...]` a character class. `**` is the
    /// same as `*` and braces match themselves. The pattern must match the
    /// entire path, not just its last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] if the pattern is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use abspath::AbsolutePath;
    ///
    /// let path = AbsolutePath::new("/var/log/syslog").unwrap();
    /// assert!(path.matches("/var/log/*").unwrap());
    /// assert!(!path.matches("*log").unwrap());
    /// assert!(!path.matches("/var/*").unwrap());
    /// assert!(path.matches("[").is_err());
    /// # }
    /// ```
    pub fn matches(&self, pattern: &str) -> Result<bool> {
        let matcher = GlobBuilder::new(&shell_glob(pattern))
            .literal_separator(true)
            .build()
            .map_err(|source| Error::Pattern {
                pattern: pattern.to_string(),
                source,
            })?
            .compile_matcher();
        Ok(matcher.is_match(self.as_path()))
    }

    /// Split into the parent directory and the last element's name.
    ///
    /// For the root, the name is empty. `dir.join([file])` always equals the
    /// original path.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use abspath::AbsolutePath;
    ///
    /// let (dir, file) = AbsolutePath::new("/etc/hosts").unwrap().split();
    /// assert_eq!(dir, "/etc");
    /// assert_eq!(file, "hosts");
    /// # }
    /// ```
    #[must_use]
    pub fn split(&self) -> (Self, OsString) {
        let file = self
            .as_path()
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_default();
        (self.dir(), file)
    }

    /// The path with host separators replaced by `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use abspath::AbsolutePath;
    ///
    /// assert_eq!(AbsolutePath::new("/a/b").unwrap().to_slash(), "/a/b");
    /// # }
    /// ```
    #[must_use]
    pub fn to_slash(&self) -> String {
        normalize::to_slash(self.as_path())
    }

    /// The volume prefix, such as `C:` or `\\server\share` on Windows.
    ///
    /// Empty on hosts without volume names.
    #[must_use]
    pub fn volume_name(&self) -> &OsStr {
        match self.as_path().components().next() {
            Some(Component::Prefix(prefix)) => prefix.as_os_str(),
            _ => OsStr::new(""),
        }
    }
}

/// Rewrite a shell glob so `globset` reads it with shell meaning.
///
/// Runs of `*` outside a class collapse to one `*`, which keeps `globset`
/// from treating `**` as a recursive wildcard. Braces outside a class are
/// wrapped in a class so they match literally instead of alternating.
fn shell_glob(pattern: &str) -> String {
    let escapes = MAIN_SEPARATOR != '\\';
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        if in_class {
            out.push(c);
            if c == ']' {
                in_class = false;
            }
            continue;
        }
        match c {
            '\\' if escapes => {
                out.push(c);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '[' => {
                out.push(c);
                in_class = true;
                // A leading negation and a leading `]` belong to the class
                if let Some(&bang) = chars.peek().filter(|&&n| n == '!' || n == '^') {
                    out.push(bang);
                    chars.next();
                }
                if let Some(&close) = chars.peek().filter(|&&n| n == ']') {
                    out.push(close);
                    chars.next();
                }
            }
            '*' => {
                out.push(c);
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
            }
            '{' => out.push_str("[{]"),
            '}' => out.push_str("[}]"),
            _ => out.push(c),
        }
    }
    out
}
