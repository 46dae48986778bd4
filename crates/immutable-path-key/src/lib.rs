//! Dotted path expressions for immutable document editing.
//!
//! A path addresses a nested location in a document of objects and arrays.
//! It can be written as a `.`-separated string, a single bare index, or a
//! pre-decomposed list of [`Key`]s. [`normalize`] turns any of these into a
//! canonical [`Path`].
//!
//! # Example
//!
//! ```
//! use immutable_path_key::{format_path, normalize, Key};
//!
//! let path = normalize("users.0.name");
//! assert_eq!(
//!     path,
//!     vec![Key::from("users"), Key::Index(0), Key::from("name")]
//! );
//! assert_eq!(format_path(&path), "users.0.name");
//!
//! assert_eq!(normalize(3), vec![Key::Index(3)]);
//! assert!(normalize("").is_empty());
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Key, Path, PathExpr};

pub mod validate;
pub use validate::{validate_path, validate_path_with, MAX_PATH_LENGTH};

/// Separator between tokens of a string path.
pub const DEFAULT_SEPARATOR: char = '.';

/// Turn any accepted path shape into a canonical path.
///
/// - Absent paths and empty strings give an empty path.
/// - A bare integer gives a one-key path.
/// - Strings are split on `.` and every token is classified by [`Key::parse`].
/// - Pre-decomposed keys are returned as given.
pub fn normalize<'a>(path: impl Into<PathExpr<'a>>) -> Path {
    normalize_with(path, DEFAULT_SEPARATOR)
}

/// Like [`normalize`], splitting strings on `separator`.
pub fn normalize_with<'a>(path: impl Into<PathExpr<'a>>, separator: char) -> Path {
    match path.into() {
        PathExpr::Absent => Vec::new(),
        PathExpr::Int(index) => vec![Key::Index(index)],
        PathExpr::Str(s) => parse_path_with(&s, separator),
        PathExpr::Keys(keys) => keys.into_owned(),
    }
}

/// Parse a `.`-separated path string.
///
/// # Example
///
/// ```
/// use immutable_path_key::{parse_path, Key};
///
/// assert_eq!(parse_path(""), Vec::<Key>::new());
/// assert_eq!(parse_path("a"), vec![Key::from("a")]);
/// assert_eq!(parse_path("a..1"), vec![Key::from("a"), Key::from(""), Key::Index(1)]);
/// ```
pub fn parse_path(path: &str) -> Path {
    parse_path_with(path, DEFAULT_SEPARATOR)
}

/// Parse a path string split on `separator`.
pub fn parse_path_with(path: &str, separator: char) -> Path {
    if path.is_empty() {
        return Vec::new();
    }
    path.split(separator).map(Key::parse).collect()
}

/// Format a path as a `.`-separated string.
///
/// Field names are written verbatim, so a field that contains the separator
/// or looks like an integer does not survive a parse round trip.
pub fn format_path(path: &[Key]) -> String {
    format_path_with(path, DEFAULT_SEPARATOR)
}

/// Format a path using `separator` between keys.
pub fn format_path_with(path: &[Key], separator: char) -> String {
    let mut out = String::new();
    for (i, key) in path.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        match key {
            Key::Index(index) => out.push_str(&index.to_string()),
            Key::Field(name) => out.push_str(name),
        }
    }
    out
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path has {len} keys, at most {max} allowed")]
    PathTooLong { len: usize, max: usize },
}
