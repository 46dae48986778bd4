//! The path walk shared by every edit operation.

use immutable_path_key::{format_path_with, normalize_with, validate_path_with, Key, PathExpr};
use immutable_path_key::{DEFAULT_SEPARATOR, MAX_PATH_LENGTH};
use tracing::{debug, trace};

use crate::container::Container;
use crate::error::EditError;
use crate::node::Node;

/// Largest array index an edit may write to by default.
///
/// Arrays are stored densely, so writing far past the end allocates every
/// hole in between.
pub const DEFAULT_MAX_INDEX: usize = 1 << 20;

/// Options for [`Editor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOptions {
    /// Separator between tokens of string paths.
    pub separator: char,
    /// Paths with more keys than this are rejected.
    pub max_depth: usize,
    /// Largest array index a write may address.
    pub max_index: usize,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            max_depth: MAX_PATH_LENGTH,
            max_index: DEFAULT_MAX_INDEX,
        }
    }
}

/// Applies edits under a fixed set of [`EditOptions`].
///
/// The free functions in [`crate::ops`] use `Editor::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editor {
    options: EditOptions,
}

impl Editor {
    pub fn new(options: EditOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EditOptions {
        &self.options
    }

    /// Rebuild `root` along `path`, letting `op` change the last level.
    ///
    /// Every container from the root to the last level is copied once. `op`
    /// receives the copy of the last level together with the final key.
    /// Everything not on the path is shared with `root`. An empty path
    /// returns `root` itself.
    pub fn edit<'a, F>(
        &self,
        root: &Node,
        path: impl Into<PathExpr<'a>>,
        op: F,
    ) -> Result<Node, EditError>
    where
        F: FnOnce(&mut Container, &Key) -> Result<(), EditError>,
    {
        self.apply("edit", root, path.into(), op)
    }

    pub(crate) fn apply<F>(
        &self,
        name: &'static str,
        root: &Node,
        path: PathExpr<'_>,
        op: F,
    ) -> Result<Node, EditError>
    where
        F: FnOnce(&mut Container, &Key) -> Result<(), EditError>,
    {
        let keys = normalize_with(path, self.options.separator);
        if keys.is_empty() {
            debug!(op = name, "empty path, returning root unchanged");
            return Ok(root.clone());
        }
        validate_path_with(&keys, self.options.max_depth)?;
        trace!(op = name, path = %self.format(&keys), "applying edit");

        self.edit_level(Some(root), &keys, 0, op).inspect_err(|err| {
            debug!(op = name, error = %err, "edit failed");
        })
    }

    fn edit_level<F>(
        &self,
        current: Option<&Node>,
        keys: &[Key],
        depth: usize,
        op: F,
    ) -> Result<Node, EditError>
    where
        F: FnOnce(&mut Container, &Key) -> Result<(), EditError>,
    {
        let key = &keys[depth];
        let here = || self.format(&keys[..=depth]);

        let mut container =
            Container::open(current, key).map_err(|err| err.at(|| self.format(&keys[..depth])))?;

        if depth + 1 == keys.len() {
            op(&mut container, key).map_err(|err| err.at(here))?;
            return Ok(container.into_node());
        }

        let child = container.get(key).map_err(|err| err.at(here))?.cloned();
        let replaced = self.edit_level(child.as_ref(), keys, depth + 1, op)?;
        container
            .set(key, replaced, self.options.max_index)
            .map_err(|err| err.at(here))?;
        Ok(container.into_node())
    }

    fn format(&self, keys: &[Key]) -> String {
        format_path_with(keys, self.options.separator)
    }
}
