//! Document node model.
//!
//! A document is any tree of values implementing [`Node`]. Each node exposes
//! a [`NodeKind`], a closed tagged view the resolver dispatches on:
//! sequences, string-keyed mappings, typed records, indirections, scalars and
//! null.

use std::any::Any;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::record::Record;

/// Shape of a document node as seen by the resolver.
#[derive(Clone, Copy)]
pub enum NodeKind<'a> {
    /// Integer-indexed sequence.
    Sequence(&'a dyn Sequence),
    /// String-keyed mapping.
    Mapping(&'a dyn Mapping),
    /// Typed record with named fields.
    Record(&'a dyn Record),
    /// Reference to another node. `None` is a null indirection.
    Indirection(Option<&'a dyn Node>),
    /// Leaf value, cannot be traversed.
    Scalar,
    /// Null leaf, cannot be traversed.
    Null,
}

impl fmt::Debug for NodeKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Sequence(seq) => write!(f, "Sequence(len = {})", seq.len()),
            NodeKind::Mapping(map) => write!(f, "Mapping(len = {})", map.len()),
            NodeKind::Record(record) => write!(f, "Record({} fields)", record.fields().len()),
            NodeKind::Indirection(Some(_)) => f.write_str("Indirection"),
            NodeKind::Indirection(None) => f.write_str("Indirection(nil)"),
            NodeKind::Scalar => f.write_str("Scalar"),
            NodeKind::Null => f.write_str("Null"),
        }
    }
}

/// Upcast to [`Any`], implemented for every `'static` type.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A value that can be visited by the pointer walker.
pub trait Node: AsAny + fmt::Debug + 'static {
    /// Classify this node.
    fn kind(&self) -> NodeKind<'_>;

    /// Direct access for JSON values, used by the resolver fast path.
    fn as_json(&self) -> Option<&Value> {
        None
    }
}

impl<'n> dyn Node + 'n {
    /// Downcast to a concrete node type.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer_walk::{get, Node};
    /// use std::collections::HashMap;
    ///
    /// let doc = HashMap::from([("port".to_string(), 8080u16)]);
    /// let port = get(&doc, &["port".into()]).and_then(|v| v.downcast_ref::<u16>());
    /// assert_eq!(port, Some(&8080));
    /// ```
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Check whether the node is of concrete type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// Integer-indexed container.
pub trait Sequence {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&dyn Node>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// String-keyed container.
pub trait Mapping {
    fn len(&self) -> usize;

    fn get(&self, key: &str) -> Option<&dyn Node>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Follow indirections until a non-indirection node is reached.
///
/// Returns the target node with its kind, or `None` when a null indirection
/// is hit on the way.
pub fn dereference(node: &dyn Node) -> Option<(&dyn Node, NodeKind<'_>)> {
    let mut current = node;
    loop {
        match current.kind() {
            NodeKind::Indirection(Some(next)) => current = next,
            NodeKind::Indirection(None) => return None,
            kind => return Some((current, kind)),
        }
    }
}

// ── serde_json ────────────────────────────────────────────────────────────

impl Node for Value {
    fn kind(&self) -> NodeKind<'_> {
        match self {
            Value::Array(arr) => NodeKind::Sequence(arr),
            Value::Object(map) => NodeKind::Mapping(map),
            Value::Null => NodeKind::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => NodeKind::Scalar,
        }
    }

    fn as_json(&self) -> Option<&Value> {
        Some(self)
    }
}

impl Mapping for Map<String, Value> {
    fn len(&self) -> usize {
        Map::len(self)
    }

    fn get(&self, key: &str) -> Option<&dyn Node> {
        Map::get(self, key).map(|v| v as &dyn Node)
    }
}

impl Node for Map<String, Value> {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Mapping(self)
    }
}

// ── sequences ─────────────────────────────────────────────────────────────

impl<T: Node> Sequence for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&dyn Node> {
        self.as_slice().get(index).map(|v| v as &dyn Node)
    }
}

impl<T: Node> Node for Vec<T> {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Sequence(self)
    }
}

impl<T: Node, const N: usize> Sequence for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&dyn Node> {
        self.as_slice().get(index).map(|v| v as &dyn Node)
    }
}

impl<T: Node, const N: usize> Node for [T; N] {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Sequence(self)
    }
}

impl<T: Node> Sequence for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Node> {
        VecDeque::get(self, index).map(|v| v as &dyn Node)
    }
}

impl<T: Node> Node for VecDeque<T> {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Sequence(self)
    }
}

// ── mappings ──────────────────────────────────────────────────────────────

impl<T: Node, S: BuildHasher + 'static> Mapping for HashMap<String, T, S> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &str) -> Option<&dyn Node> {
        HashMap::get(self, key).map(|v| v as &dyn Node)
    }
}

impl<T: Node, S: BuildHasher + 'static> Node for HashMap<String, T, S> {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Mapping(self)
    }
}

impl<T: Node> Mapping for BTreeMap<String, T> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, key: &str) -> Option<&dyn Node> {
        BTreeMap::get(self, key).map(|v| v as &dyn Node)
    }
}

impl<T: Node> Node for BTreeMap<String, T> {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Mapping(self)
    }
}

impl<T: Node, S: BuildHasher + 'static> Mapping for IndexMap<String, T, S> {
    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn get(&self, key: &str) -> Option<&dyn Node> {
        IndexMap::get(self, key).map(|v| v as &dyn Node)
    }
}

impl<T: Node, S: BuildHasher + 'static> Node for IndexMap<String, T, S> {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Mapping(self)
    }
}

// ── indirections ──────────────────────────────────────────────────────────

impl<T: Node> Node for Option<T> {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Indirection(self.as_ref().map(|v| v as &dyn Node))
    }
}

// Owning pointers are transparent: they classify as their target.

impl<T: Node + ?Sized> Node for Box<T> {
    fn kind(&self) -> NodeKind<'_> {
        (**self).kind()
    }

    fn as_json(&self) -> Option<&Value> {
        (**self).as_json()
    }
}

impl<T: Node + ?Sized> Node for Rc<T> {
    fn kind(&self) -> NodeKind<'_> {
        (**self).kind()
    }

    fn as_json(&self) -> Option<&Value> {
        (**self).as_json()
    }
}

impl<T: Node + ?Sized> Node for Arc<T> {
    fn kind(&self) -> NodeKind<'_> {
        (**self).kind()
    }

    fn as_json(&self) -> Option<&Value> {
        (**self).as_json()
    }
}

// ── scalars ───────────────────────────────────────────────────────────────

macro_rules! impl_scalar_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Node for $ty {
                fn kind(&self) -> NodeKind<'_> {
                    NodeKind::Scalar
                }
            }
        )*
    };
}

impl_scalar_node!(
    bool,
    char,
    String,
    &'static str,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    serde_json::Number,
);

impl Node for () {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_kinds() {
        assert!(matches!(json!([1]).kind(), NodeKind::Sequence(s) if s.len() == 1));
        assert!(matches!(json!({"a": 1}).kind(), NodeKind::Mapping(m) if m.len() == 1));
        assert!(matches!(json!(null).kind(), NodeKind::Null));
        assert!(matches!(json!("x").kind(), NodeKind::Scalar));
        assert!(matches!(json!(1.5).kind(), NodeKind::Scalar));
    }

    #[test]
    fn test_sequence_access() {
        let v = vec![10u8, 20, 30];
        let NodeKind::Sequence(seq) = v.kind() else {
            panic!("expected sequence");
        };
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.get(1).and_then(|n| n.downcast_ref::<u8>()), Some(&20));
        assert!(seq.get(3).is_none());
    }

    #[test]
    fn test_mapping_access() {
        let mut m: IndexMap<String, String> = IndexMap::new();
        m.insert("k".to_string(), "v".to_string());
        let NodeKind::Mapping(map) = m.kind() else {
            panic!("expected mapping");
        };
        assert_eq!(
            map.get("k").and_then(|n| n.downcast_ref::<String>()),
            Some(&"v".to_string())
        );
        assert!(map.get("missing").is_none());
    }

    #[test]
    fn test_dereference_chain() {
        let inner: Option<Option<Vec<i32>>> = Some(Some(vec![1, 2]));
        let (target, kind) = dereference(&inner).expect("non-nil");
        assert!(target.is::<Vec<i32>>());
        assert!(matches!(kind, NodeKind::Sequence(_)));

        let nil: Option<Option<Vec<i32>>> = Some(None);
        assert!(dereference(&nil).is_none());
    }

    #[test]
    fn test_transparent_pointers() {
        let boxed: Box<Value> = Box::new(json!({"a": 1}));
        assert!(matches!(boxed.kind(), NodeKind::Mapping(_)));
        assert_eq!(boxed.as_json(), Some(&json!({"a": 1})));

        let shared: Arc<dyn Node> = Arc::new(vec![1u32]);
        assert!(matches!(shared.kind(), NodeKind::Sequence(_)));
    }
}
