//! Field path construction.
//!
//! Paths are plain strings: `.key` descends into an object, `[index]` into an
//! array, and the root is the empty string. Keys are not escaped, so an object
//! key that itself contains `.` or `[` yields the same path as a deeper nested
//! location:
//!
//! ```text
//! {"a.b": null}      -> "a.b"
//! {"a": {"b": null}} -> "a.b"
//! ```
//!
//! Optional-field matching inherits this: exempting `a.b` exempts both.

/// Path of the value stored under `key` in the object at `parent`.
pub fn child_key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        return key.to_string();
    }
    let mut path = String::with_capacity(parent.len() + 1 + key.len());
    path.push_str(parent);
    path.push('.');
    path.push_str(key);
    path
}

/// Path of element `index` in the array at `parent`.
pub fn child_index(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}
