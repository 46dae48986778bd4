//! Chained edits over one document.

use immutable_path_key::PathExpr;

use crate::editor::{EditOptions, Editor};
use crate::error::EditError;
use crate::node::Node;

/// A document with the edit operations as chainable methods.
///
/// Every method consumes the wrapper and returns a new one around the edited
/// document; [`Immutable::value`] unwraps the result.
///
/// # Example
///
/// ```
/// use immutable_path::{Immutable, Node};
/// use serde_json::json;
///
/// let root = Node::from(json!({"a": {"d": 1, "f": 2}, "c": {}}));
/// let next = Immutable::new(root.clone())
///     .set("a.q", "q")?
///     .del("a.d")?
///     .value();
///
/// assert_eq!(next.to_value(), json!({"a": {"f": 2, "q": "q"}, "c": {}}));
/// # Ok::<(), immutable_path::EditError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Immutable {
    root: Node,
    editor: Editor,
}

impl Immutable {
    pub fn new(root: impl Into<Node>) -> Self {
        Self::with_options(root, EditOptions::default())
    }

    pub fn with_options(root: impl Into<Node>, options: EditOptions) -> Self {
        Self {
            root: root.into(),
            editor: Editor::new(options),
        }
    }

    fn wrap(self, root: Node) -> Self {
        Self { root, ..self }
    }

    pub fn set<'a>(
        self,
        path: impl Into<PathExpr<'a>>,
        value: impl Into<Node>,
    ) -> Result<Self, EditError> {
        let root = self.editor.set(&self.root, path, value)?;
        Ok(self.wrap(root))
    }

    pub fn push<'a, I>(self, path: impl Into<PathExpr<'a>>, values: I) -> Result<Self, EditError>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let root = self.editor.push(&self.root, path, values)?;
        Ok(self.wrap(root))
    }

    pub fn insert<'a>(
        self,
        path: impl Into<PathExpr<'a>>,
        value: impl Into<Node>,
        at: i64,
    ) -> Result<Self, EditError> {
        let root = self.editor.insert(&self.root, path, value, at)?;
        Ok(self.wrap(root))
    }

    pub fn del<'a>(self, path: impl Into<PathExpr<'a>>) -> Result<Self, EditError> {
        let root = self.editor.del(&self.root, path)?;
        Ok(self.wrap(root))
    }

    pub fn assign<'a>(
        self,
        path: impl Into<PathExpr<'a>>,
        source: impl Into<Node>,
    ) -> Result<Self, EditError> {
        let root = self.editor.assign(&self.root, path, source)?;
        Ok(self.wrap(root))
    }

    pub fn as_node(&self) -> &Node {
        &self.root
    }

    /// Unwrap the edited document.
    pub fn value(self) -> Node {
        self.root
    }
}

impl From<Node> for Immutable {
    fn from(root: Node) -> Self {
        Immutable::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use immutable_path_key::Key;
    use serde_json::json;

    #[test]
    fn test_chain_all_operations() {
        let root = Node::from(json!({"list": ["b"], "obj": {"x": 1}}));
        let out = Immutable::new(root.clone())
            .push("list", ["c"])
            .and_then(|doc| doc.insert("list", "a", 0))
            .and_then(|doc| doc.assign("obj", json!({"y": 2})))
            .and_then(|doc| doc.set("flag", true))
            .and_then(|doc| doc.del("obj.x"))
            .unwrap()
            .value();

        assert_eq!(
            out,
            Node::from(json!({"list": ["a", "b", "c"], "obj": {"y": 2}, "flag": true}))
        );
        assert_eq!(root, Node::from(json!({"list": ["b"], "obj": {"x": 1}})));
    }

    #[test]
    fn test_chain_keeps_untouched_subtrees_shared() {
        let root = Node::from(json!({"a": {"d": 1}, "c": {"big": [1, 2, 3]}}));
        let out = Immutable::from(root.clone()).set("a.q", "q").unwrap().value();
        let c = Key::from("c");
        assert!(out.child(&c).unwrap().ptr_eq(root.child(&c).unwrap()));
    }

    #[test]
    fn test_chain_stops_on_error() {
        let err = Immutable::new(Node::from(json!({"s": "text"})))
            .insert("s", 1, 0)
            .unwrap_err();
        assert_eq!(err.path(), Some("s"));
    }

    #[test]
    fn test_chain_uses_options() {
        let options = EditOptions {
            separator: '/',
            ..EditOptions::default()
        };
        let doc = Immutable::with_options(Node::Null, options).set("a/b.c", 1).unwrap();
        assert_eq!(doc.as_node(), &Node::from(json!({"a": {"b.c": 1}})));
    }

    #[test]
    fn test_empty_path_keeps_root() {
        let root = Node::from(json!({"a": 1}));
        let out = Immutable::new(root.clone()).set("", 2).unwrap().value();
        assert!(out.ptr_eq(&root));
    }
}
