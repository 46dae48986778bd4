use immutable_path_key::{Key, PathError};
use thiserror::Error;

use crate::node::NodeKind;

/// Why an edit could not be applied.
///
/// `path` is the dotted location where the problem was found. It is filled
/// in by the editor, so errors raised inside a terminal operation may be
/// built with an empty path.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditError {
    #[error("expected {expected} at `{path}`, found {found}")]
    TypeMismatch {
        path: String,
        expected: NodeKind,
        found: NodeKind,
    },
    #[error("cannot descend into {found} at `{path}`")]
    NotAContainer { path: String, found: NodeKind },
    #[error("key `{key}` cannot address an array element at `{path}`")]
    InvalidKey { path: String, key: Key },
    #[error("index {index} exceeds the maximum array index {max} at `{path}`")]
    IndexOutOfRange {
        path: String,
        index: usize,
        max: usize,
    },
    #[error(transparent)]
    Path(#[from] PathError),
}

impl EditError {
    pub(crate) fn type_mismatch(expected: NodeKind, found: NodeKind) -> Self {
        EditError::TypeMismatch {
            path: String::new(),
            expected,
            found,
        }
    }

    pub(crate) fn not_a_container(found: NodeKind) -> Self {
        EditError::NotAContainer {
            path: String::new(),
            found,
        }
    }

    pub(crate) fn invalid_key(key: &Key) -> Self {
        EditError::InvalidKey {
            path: String::new(),
            key: key.clone(),
        }
    }

    pub(crate) fn index_out_of_range(index: usize, max: usize) -> Self {
        EditError::IndexOutOfRange {
            path: String::new(),
            index,
            max,
        }
    }

    /// Attach a location, keeping one that is already set.
    pub(crate) fn at(mut self, location: impl FnOnce() -> String) -> Self {
        match &mut self {
            EditError::TypeMismatch { path, .. }
            | EditError::NotAContainer { path, .. }
            | EditError::InvalidKey { path, .. }
            | EditError::IndexOutOfRange { path, .. } => {
                if path.is_empty() {
                    *path = location();
                }
            }
            EditError::Path(_) => {}
        }
        self
    }

    /// The dotted location of the failure, if it has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            EditError::TypeMismatch { path, .. }
            | EditError::NotAContainer { path, .. }
            | EditError::InvalidKey { path, .. }
            | EditError::IndexOutOfRange { path, .. } => Some(path),
            EditError::Path(_) => None,
        }
    }
}
