//! Single-step resolution.
//!
//! [`resolve_step`] descends one pointer step into one node. Dispatch goes
//! through three tiers that must agree on every result:
//!
//! 1. `serde_json::Value` nodes, matched directly (no allocation);
//! 2. a handful of concrete containers of JSON values, found by downcast;
//! 3. the generic [`NodeKind`] view, which also covers typed records.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::node::{dereference, Node, NodeKind};
use crate::record;
use crate::types::{PathStep, ReferenceKey};
use crate::util::parse_index;
use crate::JsonPointerError;

/// How out-of-range array positions are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Policy {
    /// Positions past the end are absent.
    Permissive,
    /// Positions past the end are errors.
    Strict,
}

/// A borrowed path step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step<'p> {
    Key(&'p str),
    Index(usize),
}

impl Step<'_> {
    /// Key recorded in a [`crate::Reference`] when the container is not a
    /// sequence.
    pub(crate) fn to_reference_key(self) -> ReferenceKey {
        match self {
            Step::Key(key) => ReferenceKey::String(key.to_string()),
            Step::Index(index) => ReferenceKey::Index(index),
        }
    }
}

/// Anything the walkers can take a [`Step`] from.
pub(crate) trait StepSource {
    fn step(&self) -> Step<'_>;
}

impl StepSource for &PathStep {
    fn step(&self) -> Step<'_> {
        match self {
            PathStep::Key(key) => Step::Key(key),
            PathStep::Index(index) => Step::Index(*index),
        }
    }
}

impl StepSource for Cow<'_, str> {
    fn step(&self) -> Step<'_> {
        Step::Key(self)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Outcome<'a> {
    Descended(&'a dyn Node),
    Absent,
}

impl<'a> From<Option<&'a dyn Node>> for Outcome<'a> {
    fn from(node: Option<&'a dyn Node>) -> Self {
        match node {
            Some(node) => Outcome::Descended(node),
            None => Outcome::Absent,
        }
    }
}

/// Result of descending one step.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolved<'a> {
    /// The node the step was applied to, indirections removed.
    pub container: &'a dyn Node,
    pub outcome: Outcome<'a>,
    /// Normalized position when the container is a sequence.
    pub index: Option<usize>,
}

impl Resolved<'_> {
    pub(crate) fn key(&self, step: Step<'_>) -> ReferenceKey {
        match self.index {
            Some(index) => ReferenceKey::Index(index),
            None => step.to_reference_key(),
        }
    }
}

/// Descend one step into `node`.
pub(crate) fn resolve_step<'a>(
    node: &'a dyn Node,
    step: Step<'_>,
    policy: Policy,
) -> Result<Resolved<'a>, JsonPointerError> {
    if let Some(value) = node.as_json() {
        return resolve_json(node, value, step, policy);
    }
    if let Some(resolved) = resolve_typed(node, step, policy) {
        return resolved;
    }
    resolve_generic(node, step, policy)
}

/// `container` is `node` itself, so a `Box<Value>` is recorded as the box,
/// as it would be by the other tiers.
fn resolve_json<'a>(
    container: &'a dyn Node,
    value: &'a Value,
    step: Step<'_>,
    policy: Policy,
) -> Result<Resolved<'a>, JsonPointerError> {
    match value {
        Value::Array(arr) => in_sequence(container, arr, step, policy),
        Value::Object(map) => in_mapping(container, step, |key| map.get(key).map(as_node)),
        _ => Err(JsonPointerError::NotFound),
    }
}

fn resolve_typed<'a>(
    node: &'a dyn Node,
    step: Step<'_>,
    policy: Policy,
) -> Option<Result<Resolved<'a>, JsonPointerError>> {
    let any = node.as_any();
    if let Some(arr) = any.downcast_ref::<Vec<Value>>() {
        return Some(in_sequence(node, arr, step, policy));
    }
    if let Some(map) = any.downcast_ref::<Map<String, Value>>() {
        return Some(in_mapping(node, step, |key| map.get(key).map(as_node)));
    }
    if let Some(map) = any.downcast_ref::<HashMap<String, Value>>() {
        return Some(in_mapping(node, step, |key| map.get(key).map(as_node)));
    }
    if let Some(map) = any.downcast_ref::<BTreeMap<String, Value>>() {
        return Some(in_mapping(node, step, |key| map.get(key).map(as_node)));
    }
    if let Some(map) = any.downcast_ref::<IndexMap<String, Value>>() {
        return Some(in_mapping(node, step, |key| map.get(key).map(as_node)));
    }
    None
}

fn resolve_generic<'a>(
    node: &'a dyn Node,
    step: Step<'_>,
    policy: Policy,
) -> Result<Resolved<'a>, JsonPointerError> {
    let (container, kind) = dereference(node).ok_or(JsonPointerError::NilReference)?;
    match kind {
        NodeKind::Sequence(seq) => {
            let index = sequence_index(step, seq.len(), policy)?;
            Ok(Resolved {
                container,
                outcome: seq.get(index).into(),
                index: Some(index),
            })
        }
        NodeKind::Mapping(map) => in_mapping(container, step, |key| map.get(key)),
        NodeKind::Record(rec) => in_mapping(container, step, |key| record::lookup(rec, key)),
        NodeKind::Scalar | NodeKind::Null | NodeKind::Indirection(_) => {
            Err(JsonPointerError::NotFound)
        }
    }
}

fn as_node(value: &Value) -> &dyn Node {
    value
}

fn in_sequence<'a, T: Node>(
    container: &'a dyn Node,
    items: &'a [T],
    step: Step<'_>,
    policy: Policy,
) -> Result<Resolved<'a>, JsonPointerError> {
    let index = sequence_index(step, items.len(), policy)?;
    Ok(Resolved {
        container,
        outcome: items.get(index).map(|v| v as &dyn Node).into(),
        index: Some(index),
    })
}

fn in_mapping<'a>(
    container: &'a dyn Node,
    step: Step<'_>,
    lookup: impl FnOnce(&str) -> Option<&'a dyn Node>,
) -> Result<Resolved<'a>, JsonPointerError> {
    let Step::Key(key) = step else {
        // Numeric steps are not coerced to object keys.
        return Err(JsonPointerError::NotFound);
    };
    Ok(Resolved {
        container,
        outcome: lookup(key).into(),
        index: None,
    })
}

/// Normalize a step against a sequence of `len` elements.
///
/// `-` maps to `len`. Indices up to `len` inclusive are addressable; beyond
/// that the strict policy fails with `IndexOutOfBounds`.
fn sequence_index(step: Step<'_>, len: usize, policy: Policy) -> Result<usize, JsonPointerError> {
    let index = match step {
        Step::Key("-") => return Ok(len),
        Step::Key(key) => parse_index(key).ok_or(JsonPointerError::InvalidIndex)?,
        Step::Index(index) => index,
    };
    if index > len && policy == Policy::Strict {
        return Err(JsonPointerError::IndexOutOfBounds);
    }
    Ok(index)
}
