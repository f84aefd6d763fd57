/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde_json::{Map, Value};

/// Applies a partial update onto the stored representation.
///
/// Keys missing from `patch` or set to `null` keep their current value.
/// Nested objects are merged recursively and `id` is never replaced.
pub fn merge_patch(current: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, value) in patch {
        if key == "id" || value.is_null() {
            continue;
        }

        match value {
            Value::Object(nested) if matches!(current.get(&key), Some(Value::Object(_))) => {
                if let Some(Value::Object(target)) = current.get_mut(&key) {
                    merge_patch(target, nested);
                }
            }
            value => {
                current.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn only_present_fields_change() {
        let mut current = object(json!({"id": 4, "libelle": "Dakar", "responsable": "Diop"}));
        merge_patch(&mut current, object(json!({"libelle": "Thies"})));

        assert_eq!(
            Value::Object(current),
            json!({"id": 4, "libelle": "Thies", "responsable": "Diop"})
        );
    }

    #[test]
    fn null_values_are_ignored() {
        let mut current = object(json!({"id": 4, "adresse": "Rue 10"}));
        merge_patch(&mut current, object(json!({"adresse": null})));

        assert_eq!(current["adresse"], json!("Rue 10"));
    }

    #[test]
    fn id_is_kept() {
        let mut current = object(json!({"id": 4}));
        merge_patch(&mut current, object(json!({"id": 9})));

        assert_eq!(current["id"], json!(4));
    }

    #[test]
    fn nested_objects_are_merged() {
        let mut current = object(json!({"meta": {"a": 1, "b": 2}}));
        merge_patch(&mut current, object(json!({"meta": {"b": 3}})));

        assert_eq!(current["meta"], json!({"a": 1, "b": 3}));
    }
}
