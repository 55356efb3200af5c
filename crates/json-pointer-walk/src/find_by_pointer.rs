use crate::find::walk_strict;
use crate::node::Node;
use crate::types::Reference;
use crate::util::split_pointer;
use crate::JsonPointerError;

/// Find a value in a document by JSON Pointer string.
///
/// Same results as [`crate::find`] over the parsed pointer, without building
/// the intermediate path. A non-empty pointer without a leading `/` fails
/// with `JsonPointerError::PointerInvalid`.
///
/// # Example
///
/// ```
/// use json_pointer_walk::{find_by_pointer, ReferenceKey};
/// use serde_json::json;
///
/// let doc = json!({"a~b": {"c/d": 1}});
/// let r = find_by_pointer(&doc, "/a~0b/c~1d").unwrap();
/// assert_eq!(r.val_json(), Some(&json!(1)));
/// assert_eq!(r.key, Some(ReferenceKey::String("c/d".to_string())));
/// ```
pub fn find_by_pointer<'a>(
    doc: &'a dyn Node,
    pointer: &str,
) -> Result<Reference<'a>, JsonPointerError> {
    let steps = split_pointer(pointer)
        .inspect_err(|_| log::debug!("malformed pointer {pointer:?}"))?;
    walk_strict(doc, steps)
}
