//! JSON Pointer (RFC 6901) resolution over dynamically-typed documents.
//!
//! This crate implements helper functions for [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901)
//! and a resolution engine that walks a pointer through any document built
//! from [`serde_json::Value`], std/indexmap containers, scalars, indirections
//! (`Option`, `Box`, `Rc`, `Arc`) and typed records declared with
//! [`impl_record!`].
//!
//! Two access policies are available:
//!
//! - [`get`] / [`get_by_pointer`] never fail, every resolution problem is
//!   reported as an absent value;
//! - [`find`] / [`find_by_pointer`] return a [`Reference`] (value, container
//!   and key) or a [`JsonPointerError`].
//!
//! # Example
//!
//! ```
//! use json_pointer_walk::{find_by_pointer, format_json_pointer, get, parse_json_pointer, ReferenceKey};
//! use serde_json::json;
//!
//! let path = parse_json_pointer("/foo/bar").unwrap();
//! assert_eq!(format_json_pointer(&path), "/foo/bar");
//!
//! let doc = json!({"foo": {"bar": 42}, "list": [1, 2, 3]});
//! let val = get(&doc, &path).and_then(|v| v.as_json());
//! assert_eq!(val, Some(&json!(42)));
//!
//! let reference = find_by_pointer(&doc, "/list/-").unwrap();
//! assert!(reference.val.is_none());
//! assert_eq!(reference.key, Some(ReferenceKey::Index(3)));
//! assert!(reference.is_end_of_sequence());
//! ```

use thiserror::Error;

pub mod node;
pub use node::{dereference, AsAny, Mapping, Node, NodeKind, Sequence};

pub mod record;
pub use record::{Field, Record};

pub mod types;
pub use types::{Path, PathStep, Reference, ReferenceKey};

mod resolve;

mod find;
pub use find::find;

mod find_by_pointer;
pub use find_by_pointer::find_by_pointer;

mod get;
pub use get::{get, get_by_pointer};

pub mod util;
pub use util::{
    escape_component, format_json_pointer, is_child, is_integer, is_path_equal, is_root,
    is_valid_index, parent, parse_index, parse_json_pointer, parse_json_pointer_relaxed, to_path,
    unescape_component,
};

pub mod validate;
pub use validate::{
    validate_json_pointer, validate_json_pointer_with, validate_path, validate_path_value,
    validate_path_value_with, validate_path_with, Limits, ValidationError,
};

#[cfg(feature = "cli")]
pub mod cli;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("NOT_FOUND")]
    NotFound,
    #[error("INVALID_INDEX")]
    InvalidIndex,
    #[error("INDEX_OUT_OF_BOUNDS")]
    IndexOutOfBounds,
    #[error("NIL_REFERENCE")]
    NilReference,
    #[error("NO_PARENT")]
    NoParent,
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

impl From<ValidationError> for JsonPointerError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::PointerInvalid => JsonPointerError::PointerInvalid,
            ValidationError::PointerTooLong => JsonPointerError::PointerTooLong,
            ValidationError::InvalidPath => JsonPointerError::InvalidPath,
            ValidationError::PathTooLong => JsonPointerError::PathTooLong,
            ValidationError::InvalidPathStep => JsonPointerError::InvalidPathStep,
        }
    }
}
