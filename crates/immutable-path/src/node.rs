//! The document value model.
//!
//! Containers sit behind an [`Arc`], so cloning a [`Node`] never copies a
//! subtree. An edit copies only the containers along its path, and everything
//! else stays shared with the previous version.

use std::fmt;
use std::sync::Arc;

use immutable_path_key::Key;
use indexmap::IndexMap;
use serde_json::Number;

/// Entries of an object node, in insertion order.
pub type Object = IndexMap<String, Node>;

/// Slots of an array node. `None` is a hole: a slot that was never set,
/// which is different from a slot holding `Node::Null`.
pub type Array = Vec<Option<Node>>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Arc<Array>),
    Object(Arc<Object>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "boolean",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Null => NodeKind::Null,
            Node::Bool(_) => NodeKind::Bool,
            Node::Number(_) => NodeKind::Number,
            Node::String(_) => NodeKind::String,
            Node::Array(_) => NodeKind::Array,
            Node::Object(_) => NodeKind::Object,
        }
    }

    /// An empty object node.
    pub fn object() -> Node {
        Node::Object(Arc::default())
    }

    /// An empty array node.
    pub fn array() -> Node {
        Node::Array(Arc::default())
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    #[inline]
    pub fn is_container(&self) -> bool {
        self.is_array() || self.is_object()
    }

    pub fn as_array(&self) -> Option<&[Option<Node>]> {
        match self {
            Node::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Node::Object(map) => Some(&**map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Whether the value counts as set for positional removal.
    ///
    /// `Null`, `false`, zero (either sign) and the empty string do not.
    /// Containers always do, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Node::Null => false,
            Node::Bool(b) => *b,
            Node::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Node::String(s) => !s.is_empty(),
            Node::Array(_) | Node::Object(_) => true,
        }
    }

    /// Identity comparison.
    ///
    /// Containers are identical only when they are the same allocation.
    /// Scalars have no identity and compare by value.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Array(a), Node::Array(b)) => Arc::ptr_eq(a, b),
            (Node::Object(a), Node::Object(b)) => Arc::ptr_eq(a, b),
            (a, b) if !a.is_container() && !b.is_container() => a == b,
            _ => false,
        }
    }

    /// Look up a direct child.
    ///
    /// Holes, out-of-range and negative indices, and field names on arrays
    /// all read as absent. Indices on objects read the entry named by their
    /// decimal form.
    pub fn child(&self, key: &Key) -> Option<&Node> {
        match self {
            Node::Array(items) => items.get(key.array_index()?)?.as_ref(),
            Node::Object(map) => map.get(&*key.to_field()),
            _ => None,
        }
    }

    /// Number of direct children, holes included. Scalars have none.
    pub fn len(&self) -> usize {
        match self {
            Node::Array(items) => items.len(),
            Node::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl From<i32> for Node {
    fn from(n: i32) -> Self {
        Node::Number(n.into())
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Number(n.into())
    }
}

impl From<u64> for Node {
    fn from(n: u64) -> Self {
        Node::Number(n.into())
    }
}

/// Non-finite floats have no JSON form and become `Null`.
impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Node::Null, Node::Number)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Array(Arc::new(items.into_iter().map(Some).collect()))
    }
}

impl From<Array> for Node {
    fn from(items: Array) -> Self {
        Node::Array(Arc::new(items))
    }
}

impl From<Object> for Node {
    fn from(map: Object) -> Self {
        Node::Object(Arc::new(map))
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::Null
    }
}
