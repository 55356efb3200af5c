use std::collections::BTreeMap;

use indexmap::IndexMap;
use json_pointer_walk::{
    escape_component, find, format_json_pointer, get, parse_json_pointer, unescape_component,
    JsonPointerError, Node, NodeKind, PathStep, ReferenceKey,
};
use proptest::prelude::*;
use serde_json::Value;

fn arb_key() -> impl Strategy<Value = String> {
    "[ab01~/-]{0,3}"
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,4}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(arb_key(), inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_path() -> impl Strategy<Value = Vec<PathStep>> {
    let step = prop_oneof![
        prop_oneof![Just("0"), Just("1"), Just("2"), Just("-"), Just("01"), Just("")]
            .prop_map(PathStep::from),
        arb_key().prop_map(PathStep::from),
        (0usize..4).prop_map(PathStep::Index),
    ];
    prop::collection::vec(step, 0..4)
}

/// Rebuild a JSON value out of std containers and plain scalars.
fn to_generic(value: &Value) -> Box<dyn Node> {
    match value {
        Value::Array(items) => Box::new(items.iter().map(to_generic).collect::<Vec<_>>()),
        Value::Object(map) => Box::new(
            map.iter()
                .map(|(k, v)| (k.clone(), to_generic(v)))
                .collect::<BTreeMap<_, _>>(),
        ),
        Value::Null => Box::new(()),
        Value::Bool(b) => Box::new(*b),
        Value::Number(n) => Box::new(n.clone()),
        Value::String(s) => Box::new(s.clone()),
    }
}

/// Shallow view of a node for cross-tier comparison.
fn shape(node: &dyn Node) -> &'static str {
    match node.kind() {
        NodeKind::Sequence(_) => "sequence",
        NodeKind::Mapping(_) => "mapping",
        NodeKind::Record(_) => "record",
        NodeKind::Indirection(_) => "indirection",
        NodeKind::Scalar => "scalar",
        NodeKind::Null => "null",
    }
}

type Summary = Result<(Option<&'static str>, Option<ReferenceKey>), JsonPointerError>;

fn summarize(doc: &dyn Node, path: &[PathStep]) -> Summary {
    find(doc, path).map(|r| (r.val.map(shape), r.key))
}

proptest! {
    #[test]
    fn prop_component_escape_roundtrip(s in "[a-z~/01]{0,8}") {
        let escaped = escape_component(&s);
        prop_assert_eq!(unescape_component(&escaped), s.as_str());
    }

    #[test]
    fn prop_format_parse_roundtrip(keys in prop::collection::vec(arb_key(), 0..6)) {
        let path: Vec<PathStep> = keys.into_iter().map(PathStep::from).collect();
        let pointer = format_json_pointer(&path);
        prop_assert_eq!(parse_json_pointer(&pointer).unwrap(), path);
    }

    #[test]
    fn prop_parse_format_roundtrip(pointer in "(/([a-z]|~0|~1){0,3}){0,5}") {
        let path = parse_json_pointer(&pointer).unwrap();
        prop_assert_eq!(format_json_pointer(&path), pointer);
    }

    #[test]
    fn prop_generic_tier_matches_json_tier(doc in arb_json(), path in arb_path()) {
        let generic = to_generic(&doc);
        prop_assert_eq!(summarize(&doc, &path), summarize(&*generic, &path));
        prop_assert_eq!(
            get(&doc, &path).map(shape),
            get(&*generic, &path).map(shape)
        );
    }

    #[test]
    fn prop_typed_tier_matches_json_tier(doc in arb_json(), path in arb_path()) {
        match &doc {
            Value::Array(items) => {
                let typed: Vec<Value> = items.clone();
                prop_assert_eq!(summarize(&doc, &path), summarize(&typed, &path));
            }
            Value::Object(map) => {
                let typed: IndexMap<String, Value> =
                    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                prop_assert_eq!(summarize(&doc, &path), summarize(&typed, &path));
            }
            _ => {}
        }
    }

    #[test]
    fn prop_get_agrees_with_find(doc in arb_json(), path in arb_path()) {
        let found = find(&doc, &path).ok().and_then(|r| r.val).and_then(|v| v.as_json());
        let got = get(&doc, &path).and_then(|v| v.as_json());
        prop_assert_eq!(found, got);
    }
}
