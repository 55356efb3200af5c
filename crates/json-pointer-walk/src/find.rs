use crate::node::Node;
use crate::resolve::{resolve_step, Outcome, Policy, StepSource};
use crate::types::{PathStep, Reference};
use crate::JsonPointerError;

/// Find a value in a document by path.
///
/// Returns a [`Reference`] containing the value, its container object, and key.
///
/// # Errors
///
/// - `JsonPointerError::NotFound` - if a parent path doesn't exist, a leaf is
///   traversed, or a numeric step is applied to an object
/// - `JsonPointerError::InvalidIndex` - if an invalid array index is used
/// - `JsonPointerError::IndexOutOfBounds` - if an index is past the end of an
///   array by more than one
/// - `JsonPointerError::NilReference` - if a null indirection is traversed
///
/// # Example
///
/// ```
/// use json_pointer_walk::{find, ReferenceKey};
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": 42}});
/// let r = find(&doc, &["foo".into(), "bar".into()]).unwrap();
/// assert_eq!(r.val_json(), Some(&json!(42)));
/// assert_eq!(r.key, Some(ReferenceKey::String("bar".to_string())));
/// ```
pub fn find<'a>(doc: &'a dyn Node, path: &[PathStep]) -> Result<Reference<'a>, JsonPointerError> {
    walk_strict(doc, path.iter())
}

/// Strict walk shared by [`find`] and [`crate::find_by_pointer`].
pub(crate) fn walk_strict<'a, S: StepSource>(
    doc: &'a dyn Node,
    steps: impl Iterator<Item = S>,
) -> Result<Reference<'a>, JsonPointerError> {
    let mut steps = steps.peekable();
    let mut current = doc;
    let mut depth = 0usize;

    while let Some(source) = steps.next() {
        let step = source.step();
        let is_last = steps.peek().is_none();

        let resolved = resolve_step(current, step, Policy::Strict).inspect_err(|err| {
            log::debug!("pointer walk failed at step {depth} ({step:?}): {err}");
        })?;
        log::trace!("step {depth} ({step:?}) -> {:?}", resolved.outcome);

        match resolved.outcome {
            Outcome::Descended(next) if !is_last => current = next,
            Outcome::Absent if !is_last => {
                log::debug!("pointer walk failed at step {depth} ({step:?}): nothing to descend into");
                return Err(JsonPointerError::NotFound);
            }
            Outcome::Descended(next) => {
                return Ok(Reference {
                    val: Some(next),
                    obj: Some(resolved.container),
                    key: Some(resolved.key(step)),
                });
            }
            Outcome::Absent => {
                return Ok(Reference {
                    val: None,
                    obj: Some(resolved.container),
                    key: Some(resolved.key(step)),
                });
            }
        }
        depth += 1;
    }

    Ok(Reference::root(doc))
}
