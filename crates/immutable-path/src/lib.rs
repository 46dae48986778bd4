//! Immutable, path-addressed editing of nested documents.
//!
//! Every operation takes a root [`Node`] and a path, and returns a new root.
//! The input is never modified. Only the containers along the path are
//! copied; every other subtree is shared with the input, so an edit costs time
//! proportional to the depth of the path, not the size of the document.
//!
//! Paths are `.`-separated strings (`"a.b.0"`), bare indices (`3`) or
//! pre-decomposed [`Key`] lists. Tokens that are canonical integers address
//! array positions and make missing levels arrays; every other token is an
//! object field.
//!
//! # Operations
//!
//! - [`set`]: store a value.
//! - [`push`]: append values to an array.
//! - [`insert`]: insert a value into an array at a position.
//! - [`del`]: remove an array element or object entry.
//! - [`assign`]: shallow-merge entries into an object.
//!
//! [`Immutable`] chains them, and [`Editor`] runs them with custom
//! [`EditOptions`].
//!
//! # Example
//!
//! ```
//! use immutable_path::{get, set, Node};
//! use serde_json::json;
//!
//! let root = Node::from(json!({"a": {}, "c": {"d": 2}}));
//! let next = set(&root, "a.b.1.f", "x").unwrap();
//!
//! // `a.b` was missing: an array was fabricated because the next key is `1`,
//! // leaving a hole at index 0.
//! let b = get(&next, "a.b").unwrap().as_array().unwrap();
//! assert_eq!(b[0], None);
//! assert_eq!(get(&next, "a.b.1.f"), Some(&Node::from("x")));
//!
//! // The untouched sibling is the very same allocation.
//! assert!(get(&next, "c").unwrap().ptr_eq(get(&root, "c").unwrap()));
//! assert_eq!(root.to_value(), json!({"a": {}, "c": {"d": 2}}));
//! ```

pub mod chain;
pub mod container;
pub mod convert;
pub mod editor;
pub mod error;
pub mod get;
pub mod node;
pub mod ops;

pub use chain::Immutable;
pub use container::Container;
pub use editor::{EditOptions, Editor, DEFAULT_MAX_INDEX};
pub use error::EditError;
pub use get::{get, has};
pub use node::{Array, Node, NodeKind, Object};
pub use ops::{assign, del, insert, push, set};

pub use immutable_path_key::{Key, Path, PathExpr};

/// Apply `op` at the end of `path` with the default options.
///
/// See [`Editor::edit`].
pub fn edit<'a, F>(root: &Node, path: impl Into<PathExpr<'a>>, op: F) -> Result<Node, EditError>
where
    F: FnOnce(&mut Container, &Key) -> Result<(), EditError>,
{
    Editor::default().edit(root, path, op)
}
