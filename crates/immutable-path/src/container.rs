//! One level of a document being rebuilt along an edit path.

use std::sync::Arc;

use immutable_path_key::Key;
use tracing::trace;

use crate::error::EditError;
use crate::node::{Array, Node, NodeKind, Object};

/// A freshly cloned (or fabricated) container.
///
/// The editor hands one of these to a terminal operation. Children are
/// shared with the original container until they are replaced.
#[derive(Debug, Clone, PartialEq)]
pub enum Container {
    Array(Array),
    Object(Object),
}

impl Container {
    /// Open the level at `current` for editing with `key` as the next step.
    ///
    /// Absent and `Null` levels are fabricated: an array when `key` is an
    /// index, otherwise an object. Existing containers are shallow-copied.
    pub(crate) fn open(current: Option<&Node>, key: &Key) -> Result<Container, EditError> {
        match current {
            None | Some(Node::Null) => Ok(Container::fabricate(key)),
            Some(Node::Array(items)) => Ok(Container::Array((**items).clone())),
            Some(Node::Object(map)) => Ok(Container::Object((**map).clone())),
            Some(other) => Err(EditError::not_a_container(other.kind())),
        }
    }

    fn fabricate(key: &Key) -> Container {
        if key.is_index() {
            trace!(key = %key, "fabricating array");
            Container::Array(Array::new())
        } else {
            trace!(key = %key, "fabricating object");
            Container::Object(Object::new())
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Container::Array(_) => NodeKind::Array,
            Container::Object(_) => NodeKind::Object,
        }
    }

    /// The child at `key`, or `None` when the slot is missing or a hole.
    ///
    /// # Errors
    ///
    /// Field names and negative indices cannot address array slots.
    pub fn get(&self, key: &Key) -> Result<Option<&Node>, EditError> {
        match self {
            Container::Array(items) => {
                let index = array_index(key)?;
                Ok(items.get(index).and_then(Option::as_ref))
            }
            Container::Object(map) => Ok(map.get(&*key.to_field())),
        }
    }

    /// Store `value` at `key`.
    ///
    /// Writing past the end of an array leaves holes in between.
    pub fn set(&mut self, key: &Key, value: Node, max_index: usize) -> Result<(), EditError> {
        match self {
            Container::Array(items) => {
                let index = array_index(key)?;
                if index > max_index {
                    return Err(EditError::index_out_of_range(index, max_index));
                }
                if index >= items.len() {
                    items.resize(index + 1, None);
                }
                items[index] = Some(value);
            }
            Container::Object(map) => {
                map.insert(key.to_field().into_owned(), value);
            }
        }
        Ok(())
    }

    /// Remove the child at `key`.
    ///
    /// Arrays drop the slot and shift later elements down; holes and
    /// out-of-range indices are left alone. Objects drop the entry if present,
    /// keeping the order of the rest.
    pub fn remove(&mut self, key: &Key) -> Result<Option<Node>, EditError> {
        match self {
            Container::Array(items) => {
                let index = array_index(key)?;
                match items.get(index) {
                    Some(Some(_)) => Ok(items.remove(index)),
                    _ => Ok(None),
                }
            }
            Container::Object(map) => Ok(map.shift_remove(&*key.to_field())),
        }
    }

    pub fn into_node(self) -> Node {
        match self {
            Container::Array(items) => Node::Array(Arc::new(items)),
            Container::Object(map) => Node::Object(Arc::new(map)),
        }
    }
}

fn array_index(key: &Key) -> Result<usize, EditError> {
    key.array_index().ok_or_else(|| EditError::invalid_key(key))
}
