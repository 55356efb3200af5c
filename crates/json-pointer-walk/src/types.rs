//! Type definitions for JSON Pointer.

use std::fmt;

use serde_json::Value;

use crate::node::{dereference, Node, NodeKind};
use crate::util::parse_index;

/// A step in a JSON Pointer path.
///
/// Either a string (object key, or array index when it reads as a canonical
/// integer) or a number (array index). Numbers are never coerced to keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

impl PathStep {
    /// The `-` step, one past the last element of an array.
    pub fn end() -> Self {
        PathStep::Key("-".to_string())
    }

    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathStep::Key(key) => Some(key),
            PathStep::Index(_) => None,
        }
    }

    pub fn is_end_marker(&self) -> bool {
        matches!(self, PathStep::Key(key) if key == "-")
    }

    /// Compare two steps by their pointer text, so that `Index(1)` equals
    /// `Key("1")`.
    pub fn text_eq(&self, other: &PathStep) -> bool {
        match (self, other) {
            (PathStep::Key(a), PathStep::Key(b)) => a == b,
            (PathStep::Index(a), PathStep::Index(b)) => a == b,
            (PathStep::Key(key), PathStep::Index(index))
            | (PathStep::Index(index), PathStep::Key(key)) => parse_index(key) == Some(*index),
        }
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        PathStep::Index(index)
    }
}

impl PartialEq<str> for PathStep {
    fn eq(&self, other: &str) -> bool {
        matches!(self, PathStep::Key(key) if key == other)
    }
}

impl PartialEq<&str> for PathStep {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => f.write_str(key),
            PathStep::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A JSON Pointer path.
pub type Path = Vec<PathStep>;

/// The key a [`Reference`] was reached with.
///
/// Array positions are always normalized to [`ReferenceKey::Index`],
/// including the `-` end marker (which becomes the array length).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReferenceKey {
    Index(usize),
    String(String),
}

impl fmt::Display for ReferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKey::Index(index) => write!(f, "{index}"),
            ReferenceKey::String(key) => f.write_str(key),
        }
    }
}

/// A reference to a value in a document.
///
/// Contains the target value, the container that holds it, and the key used
/// to access it. Borrowed from the document it was found in.
#[derive(Debug, Clone)]
pub struct Reference<'a> {
    /// The target value. `None` if nothing exists at the position.
    pub val: Option<&'a dyn Node>,
    /// The array, object or record containing the target value.
    pub obj: Option<&'a dyn Node>,
    /// The key (string for objects, index for arrays) used to access the value.
    pub key: Option<ReferenceKey>,
}

impl<'a> Reference<'a> {
    /// Reference to the document root.
    pub fn root(doc: &'a dyn Node) -> Self {
        Reference {
            val: Some(doc),
            obj: None,
            key: None,
        }
    }

    fn container_kind(&self) -> Option<NodeKind<'a>> {
        dereference(self.obj?).map(|(_, kind)| kind)
    }

    /// Check if this reference points to an array element.
    pub fn is_sequence_reference(&self) -> bool {
        match (self.container_kind(), &self.key) {
            (Some(NodeKind::Sequence(_)), Some(ReferenceKey::Index(_))) => true,
            (Some(NodeKind::Sequence(_)), Some(ReferenceKey::String(key))) => {
                parse_index(key).is_some()
            }
            _ => false,
        }
    }

    /// Check if this reference points to an object property.
    pub fn is_mapping_reference(&self) -> bool {
        matches!(
            (self.container_kind(), &self.key),
            (Some(NodeKind::Mapping(_)), Some(ReferenceKey::String(_)))
        )
    }

    /// Check if this reference points to the end of an array.
    ///
    /// Returns true if the key is equal to the array length.
    pub fn is_end_of_sequence(&self) -> bool {
        match (self.container_kind(), self.index()) {
            (Some(NodeKind::Sequence(seq)), Some(index)) => index == seq.len(),
            _ => false,
        }
    }

    /// Get the numeric index if this is an array reference.
    pub fn index(&self) -> Option<usize> {
        match &self.key {
            Some(ReferenceKey::Index(index)) => Some(*index),
            Some(ReferenceKey::String(key)) => parse_index(key),
            None => None,
        }
    }

    /// The target value, when the document is JSON.
    pub fn val_json(&self) -> Option<&'a Value> {
        self.val.and_then(|v| v.as_json())
    }

    /// The container, when the document is JSON.
    pub fn obj_json(&self) -> Option<&'a Value> {
        self.obj.and_then(|v| v.as_json())
    }
}
