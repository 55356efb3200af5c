//! Pointer string codec and path helpers.

use std::borrow::Cow;

use crate::types::{Path, PathStep};
use crate::JsonPointerError;

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use json_pointer_walk::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("~01"), "~1");
/// assert_eq!(unescape_component("no-escapes"), "no-escapes");
/// ```
pub fn unescape_component(component: &str) -> Cow<'_, str> {
    if !component.contains('~') {
        return Cow::Borrowed(component);
    }
    // Order matters: ~1 must be replaced before ~0
    Cow::Owned(component.replace("~1", "/").replace("~0", "~"))
}

/// Escapes a JSON Pointer path component.
///
/// Per RFC 6901, `/` is replaced with `~1` and `~` is replaced with `~0`.
///
/// # Example
///
/// ```
/// use json_pointer_walk::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// assert_eq!(escape_component("no-escapes"), "no-escapes");
/// ```
pub fn escape_component(component: &str) -> Cow<'_, str> {
    if !component.contains('/') && !component.contains('~') {
        return Cow::Borrowed(component);
    }
    // Order matters: ~ must be escaped before /
    Cow::Owned(component.replace('~', "~0").replace('/', "~1"))
}

/// Split a pointer into unescaped components without collecting them.
pub(crate) fn split_pointer(
    pointer: &str,
) -> Result<impl Iterator<Item = Cow<'_, str>>, JsonPointerError> {
    let rest = if pointer.is_empty() {
        None
    } else {
        Some(
            pointer
                .strip_prefix('/')
                .ok_or(JsonPointerError::PointerInvalid)?,
        )
    };
    Ok(rest
        .into_iter()
        .flat_map(|rest| rest.split('/'))
        .map(unescape_component))
}

/// Parse a JSON Pointer string into path components.
///
/// - Empty string returns the root path
/// - A non-empty pointer must start with `/`
/// - Each component is unescaped
///
/// # Example
///
/// ```
/// use json_pointer_walk::{parse_json_pointer, JsonPointerError, PathStep};
///
/// assert_eq!(parse_json_pointer("").unwrap(), Vec::<PathStep>::new());
/// assert_eq!(parse_json_pointer("/").unwrap(), vec![PathStep::from("")]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d").unwrap(), vec!["a~b", "c/d"]);
/// assert_eq!(parse_json_pointer("foo"), Err(JsonPointerError::PointerInvalid));
/// ```
pub fn parse_json_pointer(pointer: &str) -> Result<Path, JsonPointerError> {
    Ok(split_pointer(pointer)?
        .map(|component| PathStep::Key(component.into_owned()))
        .collect())
}

/// Parse a JSON Pointer string that may not have a leading `/`.
///
/// This is a convenience function that handles both absolute and relative pointers.
pub fn parse_json_pointer_relaxed(pointer: &str) -> Path {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer
        .strip_prefix('/')
        .unwrap_or(pointer)
        .split('/')
        .map(|component| PathStep::Key(unescape_component(component).into_owned()))
        .collect()
}

/// Format path components into a JSON Pointer string.
///
/// Returns an empty string for the root path (empty components).
///
/// # Example
///
/// ```
/// use json_pointer_walk::{format_json_pointer, PathStep};
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["foo".into()]), "/foo");
/// assert_eq!(format_json_pointer(&["a/b".into(), PathStep::Index(0)]), "/a~1b/0");
/// ```
pub fn format_json_pointer(path: &[PathStep]) -> String {
    let mut out = String::new();
    for step in path {
        out.push('/');
        match step {
            PathStep::Key(key) => out.push_str(&escape_component(key)),
            PathStep::Index(index) => out.push_str(&index.to_string()),
        }
    }
    out
}

/// Convert a pointer string to a path.
pub fn to_path<'a>(pointer: impl Into<Cow<'a, str>>) -> Result<Path, JsonPointerError> {
    let pointer: Cow<'a, str> = pointer.into();
    parse_json_pointer(&pointer)
}

/// Check if a path points to the root value.
///
/// # Example
///
/// ```
/// use json_pointer_walk::is_root;
///
/// assert!(is_root(&[]));
/// assert!(!is_root(&["foo".into()]));
/// ```
pub fn is_root(path: &[PathStep]) -> bool {
    path.is_empty()
}

/// Check if `parent` path contains the `child` path.
///
/// Steps are compared by their pointer text.
pub fn is_child(parent: &[PathStep], child: &[PathStep]) -> bool {
    if parent.len() >= child.len() {
        return false;
    }
    parent.iter().zip(child).all(|(p, c)| p.text_eq(c))
}

/// Check if two paths are equal.
pub fn is_path_equal(p1: &[PathStep], p2: &[PathStep]) -> bool {
    p1.len() == p2.len() && p1.iter().zip(p2).all(|(a, b)| a.text_eq(b))
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns an error if the path has no parent (is empty/root).
pub fn parent(path: &[PathStep]) -> Result<Path, JsonPointerError> {
    match path.split_last() {
        Some((_, rest)) => Ok(rest.to_vec()),
        None => Err(JsonPointerError::NoParent),
    }
}

/// Check if a string is a valid array position: a canonical non-negative
/// integer or the `-` end marker.
///
/// # Example
///
/// ```
/// use json_pointer_walk::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(is_valid_index("-"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("1.5"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    index == "-" || is_canonical_integer(index)
}

fn is_canonical_integer(s: &str) -> bool {
    // No leading zero unless it's just "0"
    is_integer(s) && !(s.len() > 1 && s.starts_with('0'))
}

/// Parse a canonical array index.
///
/// Returns `None` unless the decimal rendering of the result is exactly
/// `index`, which also rejects values that overflow `usize`. The `-` end
/// marker is not a number and yields `None`.
pub fn parse_index(index: &str) -> Option<usize> {
    if !is_canonical_integer(index) {
        return None;
    }
    index.parse().ok()
}

/// Check if a string consists only of ASCII digits.
pub fn is_integer(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.bytes().all(|b| b.is_ascii_digit())
}
