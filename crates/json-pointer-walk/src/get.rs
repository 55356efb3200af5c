use crate::node::Node;
use crate::resolve::{resolve_step, Outcome, Policy, StepSource};
use crate::types::PathStep;
use crate::util::split_pointer;

/// Get a value from a document by path.
///
/// Never fails: an invalid index, a position past the end of an array, a
/// step into a leaf, a null indirection or a missing key all yield `None`.
///
/// # Example
///
/// ```
/// use json_pointer_walk::{get, PathStep};
/// use serde_json::json;
///
/// let doc = json!({"a": [10, 20]});
/// let v = get(&doc, &["a".into(), PathStep::Index(1)]);
/// assert_eq!(v.and_then(|v| v.as_json()), Some(&json!(20)));
/// assert!(get(&doc, &["a".into(), "-".into()]).is_none());
/// ```
pub fn get<'a>(doc: &'a dyn Node, path: &[PathStep]) -> Option<&'a dyn Node> {
    walk_permissive(doc, path.iter())
}

/// Get a value from a document by pointer string.
///
/// A malformed pointer yields `None`.
pub fn get_by_pointer<'a>(doc: &'a dyn Node, pointer: &str) -> Option<&'a dyn Node> {
    walk_permissive(doc, split_pointer(pointer).ok()?)
}

pub(crate) fn walk_permissive<'a, S: StepSource>(
    doc: &'a dyn Node,
    steps: impl Iterator<Item = S>,
) -> Option<&'a dyn Node> {
    let mut current = doc;
    for source in steps {
        match resolve_step(current, source.step(), Policy::Permissive).ok()?.outcome {
            Outcome::Descended(next) => current = next,
            Outcome::Absent => return None,
        }
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn get_json<'a>(doc: &'a Value, pointer: &str) -> Option<&'a Value> {
        get_by_pointer(doc, pointer).and_then(|v| v.as_json())
    }

    #[test]
    fn test_get_root() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, &[]).and_then(|v| v.as_json()), Some(&doc));
        assert_eq!(get_json(&doc, ""), Some(&doc));
    }

    #[test]
    fn test_get_nested() {
        let doc = json!({"a": {"b": [1, {"c": true}]}});
        assert_eq!(get_json(&doc, "/a/b/0"), Some(&json!(1)));
        assert_eq!(get_json(&doc, "/a/b/1/c"), Some(&json!(true)));
    }

    #[test]
    fn test_get_explicit_null_is_present() {
        let doc = json!({"a": null});
        assert_eq!(get_json(&doc, "/a"), Some(&Value::Null));
        assert!(get_json(&doc, "/a/b").is_none());
    }

    #[test]
    fn test_get_absent() {
        let doc = json!({"a": [1, 2, 3], "s": "text"});
        for pointer in ["/b", "/a/3", "/a/-", "/a/99", "/a/01", "/a/-1", "/s/0", "/a/x"] {
            assert!(get_json(&doc, pointer).is_none(), "{pointer}");
        }
    }

    #[test]
    fn test_get_malformed_pointer() {
        let doc = json!({"a": 1});
        assert!(get_by_pointer(&doc, "a").is_none());
    }

    #[test]
    fn test_get_numeric_step_against_object() {
        let doc = json!({"0": "zero"});
        assert!(get(&doc, &[PathStep::Index(0)]).is_none());
        assert_eq!(
            get(&doc, &["0".into()]).and_then(|v| v.as_json()),
            Some(&json!("zero"))
        );
    }

    #[test]
    fn test_get_through_indirections() {
        let doc: Option<Box<Vec<Option<u32>>>> = Some(Box::new(vec![Some(4), None]));
        let v = get(&doc, &["0".into()]).unwrap();
        assert!(v.is::<Option<u32>>());
        assert!(get(&doc, &["1".into(), "x".into()]).is_none());
        assert!(get(&doc, &["2".into()]).is_none());
    }
}
