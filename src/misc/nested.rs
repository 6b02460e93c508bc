use serde_json::Value;

/// Resolve a dot-delimited key path against a nested JSON mapping.
///
/// Walks `root` one path segment at a time, treating each segment as a key at
/// the current level. Returns `None` as soon as a segment is missing or the
/// current value is not an object; otherwise returns whatever value sits at the
/// end of the path, including objects and `null`.
///
/// Literal dots in keys cannot be escaped. An empty path is a lookup of the
/// empty-string key.
#[must_use]
pub fn get_nested_value<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;

    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }

    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_deep_path() {
        let obj = json!({"a": {"b": {"c": 5}}});
        assert_eq!(get_nested_value(&obj, "a.b.c"), Some(&json!(5)));
    }

    #[test]
    fn resolves_two_level_path() {
        let obj = json!({"a": {"b": 5}});
        assert_eq!(get_nested_value(&obj, "a.b"), Some(&json!(5)));
    }

    #[test]
    fn missing_segment_short_circuits() {
        let obj = json!({"a": {"b": 5}});
        assert_eq!(get_nested_value(&obj, "a.x.y.z"), None);
    }

    #[test]
    fn traversing_into_scalar_yields_none() {
        let obj = json!({"a": 1});
        assert_eq!(get_nested_value(&obj, "a.b"), None);
    }

    #[test]
    fn empty_path_looks_up_empty_key() {
        assert_eq!(get_nested_value(&json!({}), ""), None);
        assert_eq!(get_nested_value(&json!({"": 7}), ""), Some(&json!(7)));
    }

    #[test]
    fn terminal_object_returned_as_is() {
        let obj = json!({"a": {"b": {"c": 1}}});
        assert_eq!(get_nested_value(&obj, "a.b"), Some(&json!({"c": 1})));
    }

    #[test]
    fn terminal_null_returned_as_is() {
        let obj = json!({"a": {"b": null}});
        assert_eq!(get_nested_value(&obj, "a.b"), Some(&Value::Null));
    }

    #[test]
    fn non_object_root_yields_none() {
        assert_eq!(get_nested_value(&json!(42), "a"), None);
        assert_eq!(get_nested_value(&json!(["a"]), "a"), None);
    }
}
