//! The five edit operations.
//!
//! Each operation walks the path with [`Editor::edit`] and decides, at the
//! last level, what the addressed slot becomes. The free functions run with
//! the default [`EditOptions`](crate::EditOptions).

use std::sync::Arc;

use immutable_path_key::PathExpr;

use crate::container::Container;
use crate::editor::Editor;
use crate::error::EditError;
use crate::node::{Array, Node, NodeKind, Object};

impl Editor {
    /// Store `value` at `path`, replacing whatever was there.
    pub fn set<'a>(
        &self,
        root: &Node,
        path: impl Into<PathExpr<'a>>,
        value: impl Into<Node>,
    ) -> Result<Node, EditError> {
        let value = value.into();
        let max_index = self.options().max_index;
        self.apply("set", root, path.into(), move |container, key| {
            container.set(key, value, max_index)
        })
    }

    /// Append `values` to the array at `path`.
    ///
    /// The array is copied, never extended in place. A slot that is absent
    /// or holds anything but an array becomes a new array of `values`.
    pub fn push<'a, I>(
        &self,
        root: &Node,
        path: impl Into<PathExpr<'a>>,
        values: I,
    ) -> Result<Node, EditError>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let values: Array = values.into_iter().map(|v| Some(v.into())).collect();
        let max_index = self.options().max_index;
        self.apply("push", root, path.into(), move |container, key| {
            let next = match container.get(key)? {
                Some(Node::Array(items)) => {
                    let mut next = Array::with_capacity(items.len() + values.len());
                    next.extend(items.iter().cloned());
                    next.extend(values);
                    next
                }
                _ => values,
            };
            container.set(key, Node::from(next), max_index)
        })
    }

    /// Insert `value` into the array at `path`, before position `at`.
    ///
    /// `at` follows slice rules: negative positions count from the end and
    /// positions outside the array clamp to its bounds. An absent or `Null`
    /// slot starts out as an empty array.
    ///
    /// # Errors
    ///
    /// [`EditError::TypeMismatch`] if the slot holds anything but an array.
    pub fn insert<'a>(
        &self,
        root: &Node,
        path: impl Into<PathExpr<'a>>,
        value: impl Into<Node>,
        at: i64,
    ) -> Result<Node, EditError> {
        let value = value.into();
        let max_index = self.options().max_index;
        self.apply("insert", root, path.into(), move |container, key| {
            let next = match container.get(key)? {
                None | Some(Node::Null) => vec![Some(value)],
                Some(Node::Array(items)) => splice(items, at, value),
                Some(other) => {
                    return Err(EditError::type_mismatch(NodeKind::Array, other.kind()));
                }
            };
            container.set(key, Node::from(next), max_index)
        })
    }

    /// Remove the slot at `path`.
    ///
    /// Array elements are spliced out, shifting later elements down, but only
    /// when they are [truthy](Node::is_truthy): `null`, `false`, `0` and `""`
    /// slots stay where they are. Object entries are dropped whatever they
    /// hold. Missing entries, holes and out-of-range indices leave the
    /// container as it was (though it is still copied).
    pub fn del<'a>(&self, root: &Node, path: impl Into<PathExpr<'a>>) -> Result<Node, EditError> {
        self.apply("del", root, path.into(), |container, key| {
            if let Container::Array(_) = container {
                if !container.get(key)?.is_some_and(Node::is_truthy) {
                    return Ok(());
                }
            }
            container.remove(key).map(drop)
        })
    }

    /// Shallow-merge the entries of `source` into a copy of the object at
    /// `path`.
    ///
    /// Entries of `source` win on collisions; all other entries are kept. An
    /// absent or `Null` slot starts out as an empty object. A `source` that is
    /// not an object has no entries to merge.
    ///
    /// # Errors
    ///
    /// [`EditError::TypeMismatch`] if the slot holds anything but an object.
    pub fn assign<'a>(
        &self,
        root: &Node,
        path: impl Into<PathExpr<'a>>,
        source: impl Into<Node>,
    ) -> Result<Node, EditError> {
        let entries = match source.into() {
            Node::Object(map) => map,
            _ => Arc::default(),
        };
        let max_index = self.options().max_index;
        self.apply("assign", root, path.into(), move |container, key| {
            let mut target = match container.get(key)? {
                None | Some(Node::Null) => Object::with_capacity(entries.len()),
                Some(Node::Object(map)) => (**map).clone(),
                Some(other) => {
                    return Err(EditError::type_mismatch(NodeKind::Object, other.kind()));
                }
            };
            for (name, value) in entries.iter() {
                target.insert(name.clone(), value.clone());
            }
            container.set(key, Node::from(target), max_index)
        })
    }
}

/// `items[..at] ++ [value] ++ items[at..]` with slice-style bounds.
fn splice(items: &[Option<Node>], at: i64, value: Node) -> Array {
    let split = slice_index(at, items.len());
    let mut next = Array::with_capacity(items.len() + 1);
    next.extend_from_slice(&items[..split]);
    next.push(Some(value));
    next.extend_from_slice(&items[split..]);
    next
}

fn slice_index(at: i64, len: usize) -> usize {
    if at < 0 {
        let back = usize::try_from(at.unsigned_abs()).unwrap_or(usize::MAX);
        len.saturating_sub(back)
    } else {
        usize::try_from(at).map_or(len, |at| at.min(len))
    }
}

/// Store `value` at `path` in a copy of `root`.
///
/// # Example
///
/// ```
/// use immutable_path::{set, Node};
/// use serde_json::json;
///
/// let root = Node::from(json!({"a": {"b": 1}, "c": {"d": 2}}));
/// let next = set(&root, "a.b", 3).unwrap();
///
/// assert_eq!(next.to_value(), json!({"a": {"b": 3}, "c": {"d": 2}}));
/// assert_eq!(root.to_value(), json!({"a": {"b": 1}, "c": {"d": 2}}));
/// ```
pub fn set<'a>(
    root: &Node,
    path: impl Into<PathExpr<'a>>,
    value: impl Into<Node>,
) -> Result<Node, EditError> {
    Editor::default().set(root, path, value)
}

/// Append `values` to the array at `path` in a copy of `root`.
pub fn push<'a, I>(root: &Node, path: impl Into<PathExpr<'a>>, values: I) -> Result<Node, EditError>
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    Editor::default().push(root, path, values)
}

/// Insert `value` before position `at` of the array at `path` in a copy of
/// `root`. Pass `0` to insert at the front.
pub fn insert<'a>(
    root: &Node,
    path: impl Into<PathExpr<'a>>,
    value: impl Into<Node>,
    at: i64,
) -> Result<Node, EditError> {
    Editor::default().insert(root, path, value, at)
}

/// Remove the slot at `path` in a copy of `root`.
pub fn del<'a>(root: &Node, path: impl Into<PathExpr<'a>>) -> Result<Node, EditError> {
    Editor::default().del(root, path)
}

/// Merge the entries of `source` into the object at `path` in a copy of
/// `root`.
pub fn assign<'a>(
    root: &Node,
    path: impl Into<PathExpr<'a>>,
    source: impl Into<Node>,
) -> Result<Node, EditError> {
    Editor::default().assign(root, path, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use immutable_path_key::Key;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Node {
        Node::from(value)
    }

    fn strs(items: &[&str]) -> Array {
        items.iter().map(|s| Some(Node::from(*s))).collect()
    }

    #[test]
    fn test_slice_index() {
        assert_eq!(slice_index(0, 3), 0);
        assert_eq!(slice_index(2, 3), 2);
        assert_eq!(slice_index(3, 3), 3);
        assert_eq!(slice_index(10, 3), 3);
        assert_eq!(slice_index(-1, 3), 2);
        assert_eq!(slice_index(-3, 3), 0);
        assert_eq!(slice_index(-10, 3), 0);
        assert_eq!(slice_index(i64::MIN, 3), 0);
        assert_eq!(slice_index(i64::MAX, 3), 3);
    }

    #[test]
    fn test_splice_positions() {
        let items = strs(&["a", "b", "c"]);
        let x = || Node::from("x");
        assert_eq!(splice(&items, 0, x()), strs(&["x", "a", "b", "c"]));
        assert_eq!(splice(&items, 1, x()), strs(&["a", "x", "b", "c"]));
        assert_eq!(splice(&items, 3, x()), strs(&["a", "b", "c", "x"]));
        assert_eq!(splice(&items, 99, x()), strs(&["a", "b", "c", "x"]));
        assert_eq!(splice(&items, -1, x()), strs(&["a", "b", "x", "c"]));
        assert_eq!(splice(&items, -99, x()), strs(&["x", "a", "b", "c"]));
    }

    #[test]
    fn test_set_overwrites_without_merge() {
        let root = doc(json!({"a": {"b": 1, "c": 2}}));
        let out = set(&root, "a", json!({"d": 3})).unwrap();
        assert_eq!(out, doc(json!({"a": {"d": 3}})));
    }

    #[test]
    fn test_set_by_bare_index() {
        let root = doc(json!(["a", "b"]));
        assert_eq!(set(&root, 1, "z").unwrap(), doc(json!(["a", "z"])));
        assert_eq!(
            set(&Node::Null, 1, "z").unwrap(),
            Node::from(vec![None, Some(Node::from("z"))])
        );
    }

    #[test]
    fn test_set_index_on_object_is_decimal_field() {
        let root = doc(json!({"a": {"x": 1}}));
        let out = set(&root, "a.0", "zero").unwrap();
        assert_eq!(out, doc(json!({"a": {"x": 1, "0": "zero"}})));
    }

    #[test]
    fn test_push_copies_existing_array() {
        let root = doc(json!({"a": ["a"]}));
        let out = push(&root, "a", ["b", "c"]).unwrap();
        assert_eq!(out, doc(json!({"a": ["a", "b", "c"]})));
        assert_eq!(root, doc(json!({"a": ["a"]})));
    }

    #[test]
    fn test_push_replaces_non_array() {
        let root = doc(json!({"a": "scalar", "b": {"k": 1}}));
        let out = push(&root, "a", [1]).unwrap();
        let out = push(&out, "b", [2]).unwrap();
        assert_eq!(out, doc(json!({"a": [1], "b": [2]})));
    }

    #[test]
    fn test_push_nothing() {
        let root = doc(json!({"a": [1], "b": 2}));
        let out = push(&root, "a", Vec::<Node>::new()).unwrap();
        let out = push(&out, "b", Vec::<Node>::new()).unwrap();
        assert_eq!(out, doc(json!({"a": [1], "b": []})));
        assert!(!out
            .child(&Key::from("a"))
            .unwrap()
            .ptr_eq(root.child(&Key::from("a")).unwrap()));
    }

    #[test]
    fn test_insert_into_absent_and_null() {
        let root = doc(json!({"n": null}));
        let out = insert(&root, "n", 1, 5).unwrap();
        let out = insert(&out, "m", 2, -5).unwrap();
        assert_eq!(out, doc(json!({"n": [1], "m": [2]})));
    }

    #[test]
    fn test_insert_type_mismatch() {
        let root = doc(json!({"a": {"b": "text"}, "o": {}}));
        assert_eq!(
            insert(&root, "a.b", 1, 0),
            Err(EditError::TypeMismatch {
                path: "a.b".to_string(),
                expected: NodeKind::Array,
                found: NodeKind::String,
            })
        );
        assert!(matches!(
            insert(&root, "o", 1, 0),
            Err(EditError::TypeMismatch {
                found: NodeKind::Object,
                ..
            })
        ));
    }

    #[test]
    fn test_insert_preserves_holes() {
        let sparse = Node::from(vec![
            Some(Node::from("a")),
            Some(Node::from("b")),
            None,
            None,
        ]);
        let mut map = Object::new();
        map.insert("d".to_string(), sparse);
        let root = Node::from(map);

        let out = insert(&root, "d", "asdf", 3).unwrap();
        assert_eq!(
            out.child(&Key::from("d")).unwrap(),
            &Node::from(vec![
                Some(Node::from("a")),
                Some(Node::from("b")),
                None,
                Some(Node::from("asdf")),
                None,
            ])
        );
    }

    #[test]
    fn test_del_array_element_shifts() {
        let root = doc(json!({"a": [1, 2, 3]}));
        assert_eq!(del(&root, "a.0").unwrap(), doc(json!({"a": [2, 3]})));
        assert_eq!(del(&root, "a.2").unwrap(), doc(json!({"a": [1, 2]})));
    }

    #[test]
    fn test_del_keeps_falsy_elements() {
        let root = doc(json!([0, null, false, "", -0.0, 1]));
        for index in 0..5 {
            let out = del(&root, index).unwrap();
            assert_eq!(out, root, "index {index}");
            assert!(!out.ptr_eq(&root));
        }
        assert_eq!(
            del(&root, 5).unwrap(),
            doc(json!([0, null, false, "", -0.0]))
        );
    }

    #[test]
    fn test_del_removes_empty_containers_and_falsy_object_entries() {
        let root = doc(json!({"arr": [[], {}, "x"], "obj": {"z": 0, "n": null}}));
        let out = del(&root, "arr.0").unwrap();
        let out = del(&out, "arr.0").unwrap();
        let out = del(&out, "obj.z").unwrap();
        let out = del(&out, "obj.n").unwrap();
        assert_eq!(out, doc(json!({"arr": ["x"], "obj": {}})));
    }

    #[test]
    fn test_del_missing_is_noop_but_copies() {
        let root = doc(json!({"a": {"b": 1}, "arr": [1]}));
        let out = del(&root, "a.zz").unwrap();
        assert_eq!(out, root);
        assert!(!out.ptr_eq(&root));
        assert!(!out
            .child(&Key::from("a"))
            .unwrap()
            .ptr_eq(root.child(&Key::from("a")).unwrap()));

        assert_eq!(del(&root, "arr.4").unwrap(), root);
    }

    #[test]
    fn test_del_through_missing_levels_fabricates() {
        let root = doc(json!({}));
        let out = del(&root, "a.0.b").unwrap();
        assert_eq!(out, doc(json!({"a": [{}]})));
    }

    #[test]
    fn test_del_field_on_array_is_invalid() {
        let root = doc(json!({"arr": [1]}));
        assert!(matches!(
            del(&root, "arr.x"),
            Err(EditError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_assign_overwrites_collisions() {
        let root = doc(json!({"a": {"b": 1, "c": 1}}));
        let out = assign(&root, "a", json!({"b": 3, "d": 4})).unwrap();
        assert_eq!(out, doc(json!({"a": {"b": 3, "c": 1, "d": 4}})));
    }

    #[test]
    fn test_assign_non_object_source_is_empty_merge() {
        let root = doc(json!({"a": {"b": 1}}));
        for source in [json!(5), json!("str"), json!([1, 2]), json!(null)] {
            let out = assign(&root, "a", source).unwrap();
            assert_eq!(out, root);
            assert!(!out
                .child(&Key::from("a"))
                .unwrap()
                .ptr_eq(root.child(&Key::from("a")).unwrap()));
        }
        assert_eq!(
            assign(&root, "x", 7).unwrap(),
            doc(json!({"a": {"b": 1}, "x": {}}))
        );
    }

    #[test]
    fn test_assign_type_mismatch() {
        let root = doc(json!({"list": [1], "n": 1}));
        assert!(matches!(
            assign(&root, "list", json!({"a": 1})),
            Err(EditError::TypeMismatch {
                expected: NodeKind::Object,
                found: NodeKind::Array,
                ..
            })
        ));
        assert!(assign(&root, "n", json!({"a": 1})).is_err());
    }

    #[test]
    fn test_assign_shares_source_values() {
        let shared = doc(json!({"deep": [1, 2]}));
        let mut source = Object::new();
        source.insert("k".to_string(), shared.clone());
        let out = assign(&Node::object(), "a", source).unwrap();
        let stored = out.child(&Key::from("a")).unwrap().child(&Key::from("k")).unwrap();
        assert!(stored.ptr_eq(&shared));
    }
}
