//! Validation functions for paths.

use crate::{Key, PathError};

/// Maximum allowed path depth.
pub const MAX_PATH_LENGTH: usize = 256;

/// Validate a path against the default depth limit.
///
/// # Errors
///
/// Returns [`PathError::PathTooLong`] if the path has more than
/// [`MAX_PATH_LENGTH`] keys.
///
/// # Example
///
/// ```
/// use immutable_path_key::{normalize, validate_path, Key};
///
/// validate_path(&normalize("a.b.0")).unwrap();
/// validate_path(&(0..300).map(Key::Index).collect::<Vec<_>>()).unwrap_err();
/// ```
pub fn validate_path(path: &[Key]) -> Result<(), PathError> {
    validate_path_with(path, MAX_PATH_LENGTH)
}

/// Validate a path against an explicit depth limit.
pub fn validate_path_with(path: &[Key], max_depth: usize) -> Result<(), PathError> {
    if path.len() > max_depth {
        return Err(PathError::PathTooLong {
            len: path.len(),
            max: max_depth,
        });
    }
    Ok(())
}
