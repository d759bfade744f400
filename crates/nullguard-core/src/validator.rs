use crate::optional::OptionalFields;
use crate::path::{child_index, child_key};
use crate::result::ValidationResult;
use serde_json::Value;

/// Reports every `null` in a JSON document whose path is not optional.
///
/// Immutable after construction, so a single instance can be shared across
/// threads and reused for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct NullFieldValidator {
    optional_fields: OptionalFields,
}

impl NullFieldValidator {
    pub fn new<I, S>(optional_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            optional_fields: optional_fields.into_iter().collect(),
        }
    }

    pub fn with_optional_fields(optional_fields: OptionalFields) -> Self {
        Self { optional_fields }
    }

    pub fn optional_fields(&self) -> &OptionalFields {
        &self.optional_fields
    }

    /// Walks `data` depth-first in pre-order, starting at the root path `""`.
    pub fn validate(&self, data: &Value) -> ValidationResult {
        let mut invalid_fields = Vec::new();
        // Children are pushed in reverse so they pop in document order.
        let mut stack: Vec<(&Value, String)> = vec![(data, String::new())];

        while let Some((value, path)) = stack.pop() {
            match value {
                Value::Null => {
                    if !self.optional_fields.contains(&path) {
                        invalid_fields.push(path);
                    }
                }
                Value::Object(map) => {
                    for (key, child) in map.iter().rev() {
                        stack.push((child, child_key(&path, key)));
                    }
                }
                Value::Array(items) => {
                    for (index, child) in items.iter().enumerate().rev() {
                        stack.push((child, child_index(&path, index)));
                    }
                }
                Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
            }
        }

        tracing::debug!(
            invalid = invalid_fields.len(),
            optional = self.optional_fields.len(),
            "null-field check finished"
        );
        ValidationResult::from_invalid(invalid_fields)
    }
}

/// Depth of the deepest container in `data`. Scalars and `null` are 0, an
/// empty array or object is 1.
pub fn nesting_depth(data: &Value) -> usize {
    let mut max = 0;
    let mut stack = vec![(data, 0usize)];
    while let Some((value, depth)) = stack.pop() {
        match value {
            Value::Object(map) => {
                max = max.max(depth + 1);
                stack.extend(map.values().map(|v| (v, depth + 1)));
            }
            Value::Array(items) => {
                max = max.max(depth + 1);
                stack.extend(items.iter().map(|v| (v, depth + 1)));
            }
            _ => {}
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error(paths: &[&str]) -> ValidationResult {
        ValidationResult::Error {
            invalid_fields: paths.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_nested_object_nulls() {
        let v = NullFieldValidator::default();
        let doc = json!({"a": 1, "b": null, "c": {"d": null}});
        assert_eq!(v.validate(&doc), error(&["b", "c.d"]));
    }

    #[test]
    fn test_array_elements() {
        let v = NullFieldValidator::default();
        let doc = json!({"items": [1, null, {"x": null}]});
        assert_eq!(v.validate(&doc), error(&["items[1]", "items[2].x"]));
    }

    #[test]
    fn test_optional_field_exempted() {
        let v = NullFieldValidator::new(["a"]);
        assert_eq!(v.validate(&json!({"a": null})), ValidationResult::Success);
    }

    #[test]
    fn test_optional_is_exact_not_prefix() {
        let v = NullFieldValidator::new(["user"]);
        let doc = json!({"user": {"name": null}});
        assert_eq!(v.validate(&doc), error(&["user.name"]));
    }

    #[test]
    fn test_empty_containers() {
        let v = NullFieldValidator::default();
        assert_eq!(v.validate(&json!({})), ValidationResult::Success);
        assert_eq!(v.validate(&json!([])), ValidationResult::Success);
        assert_eq!(
            v.validate(&json!({"a": {}, "b": [[]]})),
            ValidationResult::Success
        );
    }

    #[test]
    fn test_root_null() {
        assert_eq!(
            NullFieldValidator::default().validate(&Value::Null),
            error(&[""])
        );
        assert_eq!(
            NullFieldValidator::new([""]).validate(&Value::Null),
            ValidationResult::Success
        );
    }

    #[test]
    fn test_root_array() {
        let v = NullFieldValidator::default();
        assert_eq!(
            v.validate(&json!([null, [null], {"k": null}])),
            error(&["[0]", "[1][0]", "[2].k"])
        );
    }

    #[test]
    fn test_scalars_never_reported() {
        let v = NullFieldValidator::default();
        let doc = json!({"s": "null", "n": 0, "b": false, "e": ""});
        assert_eq!(v.validate(&doc), ValidationResult::Success);
        assert_eq!(v.validate(&json!("x")), ValidationResult::Success);
    }

    #[test]
    fn test_document_order_preserved() {
        let v = NullFieldValidator::default();
        let doc: Value =
            serde_json::from_str(r#"{"z": null, "a": {"y": null, "b": null}, "m": [null]}"#)
                .unwrap();
        assert_eq!(v.validate(&doc), error(&["z", "a.y", "a.b", "m[0]"]));
    }

    #[test]
    fn test_duplicate_paths_not_deduplicated() {
        // "a.b" as a literal key collides with the nested path.
        let v = NullFieldValidator::default();
        let doc = json!({"a.b": null, "a": {"b": null}});
        assert_eq!(v.validate(&doc), error(&["a.b", "a.b"]));
    }

    #[test]
    fn test_idempotent() {
        let v = NullFieldValidator::new(["x[0]"]);
        let doc = json!({"x": [null, null], "y": null});
        let first = v.validate(&doc);
        assert_eq!(first, v.validate(&doc));
        assert_eq!(first, error(&["x[1]", "y"]));
    }

    #[test]
    fn test_deep_input_does_not_overflow() {
        let mut doc = Value::Null;
        for _ in 0..10_000 {
            doc = Value::Array(vec![doc]);
        }
        let result = NullFieldValidator::default().validate(&doc);
        assert_eq!(result.invalid_fields().len(), 1);
        assert_eq!(result.invalid_fields()[0], "[0]".repeat(10_000));
        assert_eq!(nesting_depth(&doc), 10_000);
        // Value's own Drop is recursive; unwind it iteratively.
        let mut cur = doc;
        while let Value::Array(mut items) = cur {
            cur = items.pop().unwrap_or(Value::Null);
        }
    }

    #[test]
    fn test_nesting_depth() {
        assert_eq!(nesting_depth(&json!(null)), 0);
        assert_eq!(nesting_depth(&json!(3)), 0);
        assert_eq!(nesting_depth(&json!({})), 1);
        assert_eq!(nesting_depth(&json!({"a": [1, {"b": []}]})), 4);
        assert_eq!(nesting_depth(&json!([[], [[[]]]])), 4);
    }

    #[test]
    fn test_shared_across_threads() {
        let v = std::sync::Arc::new(NullFieldValidator::new(["b"]));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let v = v.clone();
                std::thread::spawn(move || v.validate(&json!({"a": i, "b": null, "c": null})))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), error(&["c"]));
        }
    }
}
