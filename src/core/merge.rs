use crate::domain::model::SlotConfig;
use serde_json::Value;

/// Deep-merges `overrides` into a copy of `base`.
///
/// Nested objects present on both sides are merged key by key. Any other
/// value in `overrides` (scalar, null, array) replaces the base value as a
/// whole. Keys that only exist in `base` are kept.
pub fn merge_config(base: &SlotConfig, overrides: &SlotConfig) -> SlotConfig {
    let mut merged = base.clone();
    merge_into(&mut merged, overrides);
    merged
}

/// In-place variant of [`merge_config`].
pub fn merge_into(base: &mut SlotConfig, overrides: &SlotConfig) {
    for (key, override_value) in overrides {
        match base.get_mut(key) {
            Some(base_value) => merge_value(base_value, override_value),
            None => {
                base.insert(key.clone(), override_value.clone());
            }
        }
    }
}

/// Merges a single value; recursion only happens when both sides are objects.
pub fn merge_value(base: &mut Value, override_value: &Value) {
    match (base, override_value) {
        (Value::Object(base_map), Value::Object(override_map)) => {
            merge_into(base_map, override_map);
        }
        (base, _) => *base = override_value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(value: Value) -> SlotConfig {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_nested_key_override_keeps_siblings() {
        let base = config(json!({"color": "red", "size": {"w": 10, "h": 20}}));
        let overrides = config(json!({"size": {"w": 99}}));

        let merged = merge_config(&base, &overrides);

        assert_eq!(
            Value::Object(merged),
            json!({"color": "red", "size": {"w": 99, "h": 20}})
        );
    }

    #[test]
    fn test_empty_override_is_identity() {
        let base = config(json!({"content": {"source": "static", "value": "Hello"}}));
        let merged = merge_config(&base, &SlotConfig::new());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_override_only_keys_are_added() {
        let base = config(json!({"a": 1}));
        let overrides = config(json!({"b": {"c": true}}));

        let merged = merge_config(&base, &overrides);

        assert_eq!(Value::Object(merged), json!({"a": 1, "b": {"c": true}}));
    }

    #[test]
    fn test_scalar_replaces_object_and_object_replaces_scalar() {
        let base = config(json!({"media": {"value": "m-1"}, "title": "plain"}));
        let overrides = config(json!({"media": null, "title": {"value": "rich"}}));

        let merged = merge_config(&base, &overrides);

        assert_eq!(
            Value::Object(merged),
            json!({"media": null, "title": {"value": "rich"}})
        );
    }

    #[test]
    fn test_arrays_are_replaced_not_merged() {
        let base = config(json!({"items": [1, 2, 3], "opts": {"tags": ["a", "b"]}}));
        let overrides = config(json!({"items": [9], "opts": {"tags": []}}));

        let merged = merge_config(&base, &overrides);

        assert_eq!(
            Value::Object(merged),
            json!({"items": [9], "opts": {"tags": []}})
        );
    }

    #[test]
    fn test_deeply_nested_merge() {
        let base = config(json!({"a": {"b": {"c": 1, "d": 2}, "e": 3}}));
        let overrides = config(json!({"a": {"b": {"d": 20, "x": 5}}}));

        let merged = merge_config(&base, &overrides);

        assert_eq!(
            Value::Object(merged),
            json!({"a": {"b": {"c": 1, "d": 20, "x": 5}, "e": 3}})
        );
    }

    #[test]
    fn test_merge_is_idempotent() {
        let base = config(json!({"color": "red", "size": {"w": 10, "h": 20}, "list": [1]}));
        let overrides = config(json!({"size": {"w": 99, "d": {"z": 1}}, "list": [2, 3]}));

        let once = merge_config(&base, &overrides);
        let twice = merge_config(&once, &overrides);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_base_is_not_mutated() {
        let base = config(json!({"size": {"w": 10}}));
        let overrides = config(json!({"size": {"w": 99}}));

        let _ = merge_config(&base, &overrides);

        assert_eq!(Value::Object(base), json!({"size": {"w": 10}}));
    }
}
