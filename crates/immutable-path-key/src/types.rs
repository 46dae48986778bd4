//! Type definitions for path keys and path expressions.

use std::borrow::Cow;
use std::fmt;

/// One step of a path.
///
/// An `Index` selects a position in an array (and decides that a missing
/// level is fabricated as an array). A `Field` selects an entry in an
/// object by its exact name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(i64),
    Field(String),
}

impl Key {
    /// Classify a single path token.
    ///
    /// A token is an index only if formatting the parsed integer gives back
    /// exactly the same token, so `"01"`, `"+1"`, `" 1"` and `"-0"` stay
    /// field names while `"-1"` is an index.
    ///
    /// # Example
    ///
    /// ```
    /// use immutable_path_key::Key;
    ///
    /// assert_eq!(Key::parse("12"), Key::Index(12));
    /// assert_eq!(Key::parse("-1"), Key::Index(-1));
    /// assert_eq!(Key::parse("012"), Key::Field("012".to_string()));
    /// assert_eq!(Key::parse("name"), Key::Field("name".to_string()));
    /// ```
    pub fn parse(token: &str) -> Key {
        match token.parse::<i64>() {
            Ok(index) if index.to_string() == token => Key::Index(index),
            _ => Key::Field(token.to_string()),
        }
    }

    #[inline]
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    #[inline]
    pub fn is_field(&self) -> bool {
        matches!(self, Key::Field(_))
    }

    #[inline]
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Field(_) => None,
        }
    }

    #[inline]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Field(name) => Some(name),
        }
    }

    /// The array position this key addresses, if it is a non-negative index.
    pub fn array_index(&self) -> Option<usize> {
        self.as_index().and_then(|index| usize::try_from(index).ok())
    }

    /// The object entry name this key addresses.
    ///
    /// Indices address the entry named by their decimal form.
    pub fn to_field(&self) -> Cow<'_, str> {
        match self {
            Key::Index(index) => Cow::Owned(index.to_string()),
            Key::Field(name) => Cow::Borrowed(name),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Field(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Key::Index(index.into())
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

/// Field names are taken literally; use [`Key::parse`] to classify a token.
impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Field(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Field(name)
    }
}

/// A canonical path.
pub type Path = Vec<Key>;

/// Every shape a caller may hand in as a path.
///
/// Built through the `From` impls below; [`crate::normalize`] turns any of
/// them into a [`Path`].
#[derive(Debug, Clone, PartialEq)]
pub enum PathExpr<'a> {
    /// No path at all.
    Absent,
    /// A delimited string such as `"a.b.0"`.
    Str(Cow<'a, str>),
    /// A single bare index.
    Int(i64),
    /// Keys that were already decomposed by the caller.
    Keys(Cow<'a, [Key]>),
}

impl<'a> From<&'a str> for PathExpr<'a> {
    fn from(s: &'a str) -> Self {
        PathExpr::Str(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for PathExpr<'a> {
    fn from(s: &'a String) -> Self {
        PathExpr::Str(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for PathExpr<'_> {
    fn from(s: String) -> Self {
        PathExpr::Str(Cow::Owned(s))
    }
}

impl From<i64> for PathExpr<'_> {
    fn from(index: i64) -> Self {
        PathExpr::Int(index)
    }
}

impl From<i32> for PathExpr<'_> {
    fn from(index: i32) -> Self {
        PathExpr::Int(index.into())
    }
}

impl From<u32> for PathExpr<'_> {
    fn from(index: u32) -> Self {
        PathExpr::Int(index.into())
    }
}

impl From<usize> for PathExpr<'_> {
    fn from(index: usize) -> Self {
        PathExpr::Int(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<Key> for PathExpr<'_> {
    fn from(key: Key) -> Self {
        PathExpr::Keys(Cow::Owned(vec![key]))
    }
}

impl From<Vec<Key>> for PathExpr<'_> {
    fn from(keys: Vec<Key>) -> Self {
        PathExpr::Keys(Cow::Owned(keys))
    }
}

impl<'a> From<&'a [Key]> for PathExpr<'a> {
    fn from(keys: &'a [Key]) -> Self {
        PathExpr::Keys(Cow::Borrowed(keys))
    }
}

impl<'a> From<&'a Vec<Key>> for PathExpr<'a> {
    fn from(keys: &'a Vec<Key>) -> Self {
        PathExpr::Keys(Cow::Borrowed(keys.as_slice()))
    }
}

impl<'a, const N: usize> From<&'a [Key; N]> for PathExpr<'a> {
    fn from(keys: &'a [Key; N]) -> Self {
        PathExpr::Keys(Cow::Borrowed(keys.as_slice()))
    }
}

impl<'a, T> From<Option<T>> for PathExpr<'a>
where
    T: Into<PathExpr<'a>>,
{
    fn from(path: Option<T>) -> Self {
        path.map_or(PathExpr::Absent, Into::into)
    }
}
