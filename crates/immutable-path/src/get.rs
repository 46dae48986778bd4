//! Plain path lookup.

use immutable_path_key::{normalize_with, Key, PathExpr};

use crate::editor::Editor;
use crate::node::Node;

impl Editor {
    /// Read the value at `path`.
    ///
    /// Uses the same key rules as the edit operations. An empty path reads
    /// `root` itself; holes read as absent.
    pub fn get<'n, 'a>(&self, root: &'n Node, path: impl Into<PathExpr<'a>>) -> Option<&'n Node> {
        lookup(root, &normalize_with(path, self.options().separator))
    }

    pub fn has<'a>(&self, root: &Node, path: impl Into<PathExpr<'a>>) -> bool {
        self.get(root, path).is_some()
    }
}

fn lookup<'n>(root: &'n Node, keys: &[Key]) -> Option<&'n Node> {
    keys.iter().try_fold(root, |current, key| current.child(key))
}

/// Read the value at `path` in `root`.
///
/// # Example
///
/// ```
/// use immutable_path::{get, Node};
/// use serde_json::json;
///
/// let root = Node::from(json!({"a": [{"b": 1}]}));
/// assert_eq!(get(&root, "a.0.b"), Some(&Node::from(1)));
/// assert_eq!(get(&root, "a.1.b"), None);
/// ```
pub fn get<'n, 'a>(root: &'n Node, path: impl Into<PathExpr<'a>>) -> Option<&'n Node> {
    Editor::default().get(root, path)
}

/// Whether `path` addresses a value in `root`.
pub fn has<'a>(root: &Node, path: impl Into<PathExpr<'a>>) -> bool {
    Editor::default().has(root, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_empty_path_is_root() {
        let root = Node::from(json!({"a": 1}));
        assert!(get(&root, "").unwrap().ptr_eq(&root));
    }

    #[test]
    fn test_get_nested() {
        let root = Node::from(json!({"a": {"b": [10, {"c": "x"}]}}));
        assert_eq!(get(&root, "a.b.0"), Some(&Node::from(10)));
        assert_eq!(get(&root, "a.b.1.c"), Some(&Node::from("x")));
        assert_eq!(get(&root, "a.b.2"), None);
        assert_eq!(get(&root, "a.b.c"), None);
        assert_eq!(get(&root, "a.b.0.deeper"), None);
    }

    #[test]
    fn test_get_explicit_null_vs_missing() {
        let root = Node::from(json!({"n": null}));
        assert_eq!(get(&root, "n"), Some(&Node::Null));
        assert!(has(&root, "n"));
        assert!(!has(&root, "m"));
    }

    #[test]
    fn test_get_hole_is_absent() {
        let root = Node::from(vec![None, Some(Node::from(1))]);
        assert_eq!(get(&root, 0), None);
        assert_eq!(get(&root, 1), Some(&Node::from(1)));
    }

    #[test]
    fn test_get_index_on_object() {
        let root = Node::from(json!({"0": "zero"}));
        assert_eq!(get(&root, 0), Some(&Node::from("zero")));
        assert_eq!(get(&root, vec![Key::from("0")]), Some(&Node::from("zero")));
    }
}
