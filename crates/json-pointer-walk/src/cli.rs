//! Library side of the `json-pointer` command-line tool.

use serde_json::{json, Value};
use thiserror::Error;

use crate::validate::{validate_json_pointer_with, validate_path_with, Limits, ValidationError};
use crate::{find_by_pointer, get_by_pointer, parse_json_pointer, JsonPointerError, ReferenceKey};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Pointer(#[from] JsonPointerError),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// Nothing exists at the pointer. Carries the normalized last key.
    #[error("NOT_FOUND: {0}")]
    Absent(String),
}

/// What to print for a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Strict lookup, print the value.
    #[default]
    Find,
    /// Permissive lookup, print the value.
    Get,
    /// Strict lookup, print value, container and key.
    Reference,
}

/// Look up a JSON Pointer (RFC 6901) in a document.
///
/// `doc_json`: the document as a JSON string.
/// `pointer`: the JSON Pointer string (e.g., `/foo/bar`).
///
/// Returns the result as a pretty-printed JSON string.
pub fn lookup_pointer(
    doc_json: &str,
    pointer: &str,
    mode: Mode,
    limits: &Limits,
) -> Result<String, CliError> {
    validate_json_pointer_with(pointer, limits)?;
    validate_path_with(&parse_json_pointer(pointer)?, limits)?;

    let doc: Value = serde_json::from_str(doc_json)?;

    let out = match mode {
        Mode::Get => match get_by_pointer(&doc, pointer).and_then(|v| v.as_json()) {
            Some(val) => val.clone(),
            None => return Err(CliError::Absent(pointer.to_string())),
        },
        Mode::Find => {
            let r = find_by_pointer(&doc, pointer)?;
            match r.val_json() {
                Some(val) => val.clone(),
                None => {
                    let key = r.key.map(|k| k.to_string()).unwrap_or_default();
                    return Err(CliError::Absent(key));
                }
            }
        }
        Mode::Reference => {
            let r = find_by_pointer(&doc, pointer)?;
            let key = match &r.key {
                Some(ReferenceKey::Index(index)) => json!(index),
                Some(ReferenceKey::String(key)) => json!(key),
                None => Value::Null,
            };
            json!({
                "val": r.val_json(),
                "obj": r.obj_json(),
                "key": key,
            })
        }
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"a": {"b": [1, 2, 3]}, "n": null}"#;

    fn parse(out: &str) -> Value {
        serde_json::from_str(out).unwrap()
    }

    #[test]
    fn test_find_mode() {
        let out = lookup_pointer(DOC, "/a/b/1", Mode::Find, &Limits::default()).unwrap();
        assert_eq!(parse(&out), json!(2));
        let out = lookup_pointer(DOC, "", Mode::Find, &Limits::default()).unwrap();
        assert_eq!(parse(&out), parse(DOC));
        let out = lookup_pointer(DOC, "/n", Mode::Find, &Limits::default()).unwrap();
        assert_eq!(parse(&out), Value::Null);
    }

    #[test]
    fn test_find_mode_errors() {
        let limits = Limits::default();
        let err = lookup_pointer(DOC, "/a/b/-", Mode::Find, &limits).unwrap_err();
        assert_eq!(err.to_string(), "NOT_FOUND: 3");
        let err = lookup_pointer(DOC, "/a/b/9", Mode::Find, &limits).unwrap_err();
        assert_eq!(err.to_string(), "INDEX_OUT_OF_BOUNDS");
        let err = lookup_pointer(DOC, "/a/b/01", Mode::Find, &limits).unwrap_err();
        assert_eq!(err.to_string(), "INVALID_INDEX");
        let err = lookup_pointer(DOC, "a", Mode::Find, &limits).unwrap_err();
        assert!(matches!(err, CliError::Validation(ValidationError::PointerInvalid)));
        assert!(matches!(
            lookup_pointer("{", "", Mode::Find, &limits),
            Err(CliError::Json(_))
        ));
    }

    #[test]
    fn test_get_mode() {
        let limits = Limits::default();
        let out = lookup_pointer(DOC, "/a/b/0", Mode::Get, &limits).unwrap();
        assert_eq!(parse(&out), json!(1));
        let err = lookup_pointer(DOC, "/a/b/9", Mode::Get, &limits).unwrap_err();
        assert!(matches!(err, CliError::Absent(_)));
    }

    #[test]
    fn test_reference_mode() {
        let limits = Limits::default();
        let out = lookup_pointer(DOC, "/a/b/-", Mode::Reference, &limits).unwrap();
        assert_eq!(
            parse(&out),
            json!({"val": null, "obj": [1, 2, 3], "key": 3})
        );
        let out = lookup_pointer(DOC, "/a", Mode::Reference, &limits).unwrap();
        assert_eq!(parse(&out)["key"], json!("a"));
    }

    #[test]
    fn test_limits() {
        let limits = Limits {
            max_pointer_length: 5,
            max_path_length: 1,
        };
        assert!(matches!(
            lookup_pointer(DOC, "/abcdef", Mode::Find, &limits),
            Err(CliError::Validation(ValidationError::PointerTooLong))
        ));
        assert!(matches!(
            lookup_pointer(DOC, "/a/b", Mode::Find, &limits),
            Err(CliError::Validation(ValidationError::PathTooLong))
        ));
    }
}
