//! Validation functions for JSON Pointer.

use serde_json::Value;
use thiserror::Error;

use crate::types::PathStep;

/// Maximum allowed pointer string length, in characters.
pub const MAX_POINTER_LENGTH: usize = 1024;

/// Maximum allowed path depth.
pub const MAX_PATH_LENGTH: usize = 256;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("POINTER_TOO_LONG")]
    PointerTooLong,
    #[error("Invalid path")]
    InvalidPath,
    #[error("Path too long")]
    PathTooLong,
    #[error("Invalid path step")]
    InvalidPathStep,
}

/// Size limits applied by the validators. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_pointer_length: usize,
    pub max_path_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_pointer_length: MAX_POINTER_LENGTH,
            max_path_length: MAX_PATH_LENGTH,
        }
    }
}

/// Validate a JSON Pointer string.
///
/// # Errors
///
/// Returns an error if:
/// - The pointer is non-empty but doesn't start with `/`
/// - The pointer exceeds the maximum length (1024 characters)
///
/// # Example
///
/// ```
/// use json_pointer_walk::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();  // Root is valid
/// validate_json_pointer("/foo/bar").unwrap();  // Valid absolute pointer
/// validate_json_pointer("foo").unwrap_err();  // Missing leading /
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), ValidationError> {
    validate_json_pointer_with(pointer, &Limits::default())
}

/// Validate a JSON Pointer string against custom limits.
pub fn validate_json_pointer_with(pointer: &str, limits: &Limits) -> Result<(), ValidationError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(ValidationError::PointerInvalid);
    }
    // Byte length bounds the character count from above.
    if pointer.len() > limits.max_pointer_length
        && pointer.chars().count() > limits.max_pointer_length
    {
        return Err(ValidationError::PointerTooLong);
    }
    Ok(())
}

/// Validate a path (array of path steps).
///
/// # Errors
///
/// Returns an error if the path exceeds the maximum length (256 steps).
///
/// # Example
///
/// ```
/// use json_pointer_walk::{validate_path, PathStep};
///
/// validate_path(&["foo".into(), "bar".into()]).unwrap();
/// validate_path(&(0..300).map(PathStep::Index).collect::<Vec<_>>()).unwrap_err();
/// ```
pub fn validate_path(path: &[PathStep]) -> Result<(), ValidationError> {
    validate_path_with(path, &Limits::default())
}

/// Validate a path against custom limits.
pub fn validate_path_with(path: &[PathStep], limits: &Limits) -> Result<(), ValidationError> {
    if path.len() > limits.max_path_length {
        return Err(ValidationError::PathTooLong);
    }
    Ok(())
}

/// Validate an untrusted path given as a JSON array.
///
/// Every step must be a string or a number.
///
/// # Example
///
/// ```
/// use json_pointer_walk::{validate_path_value, ValidationError};
/// use serde_json::json;
///
/// validate_path_value(&json!(["a", 0, 1.5])).unwrap();
/// assert_eq!(validate_path_value(&json!("a")), Err(ValidationError::InvalidPath));
/// assert_eq!(validate_path_value(&json!(["a", true])), Err(ValidationError::InvalidPathStep));
/// ```
pub fn validate_path_value(path: &Value) -> Result<(), ValidationError> {
    validate_path_value_with(path, &Limits::default())
}

/// Validate an untrusted JSON path array against custom limits.
pub fn validate_path_value_with(path: &Value, limits: &Limits) -> Result<(), ValidationError> {
    let steps = path.as_array().ok_or(ValidationError::InvalidPath)?;
    if steps.len() > limits.max_path_length {
        return Err(ValidationError::PathTooLong);
    }
    for step in steps {
        match step {
            Value::String(_) | Value::Number(_) => continue,
            _ => return Err(ValidationError::InvalidPathStep),
        }
    }
    Ok(())
}
