use serde_json::{Map, Value};

/// Fields an update payload is never allowed to touch. Email is the identity
/// key for appointments and messages; role changes go through account
/// recreation, not updates.
const PROTECTED_FIELDS: &[&str] = &["email", "role"];

/// Returns a copy of `obj` with all protected fields removed.
///
/// Pure and total: unknown keys pass through untouched, so the typed update
/// DTO downstream stays the single allow-list.
pub fn strip_protected_fields(obj: &Map<String, Value>) -> Map<String, Value> {
    obj.iter()
        .filter(|(key, _)| !PROTECTED_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn strips_email_and_role() {
        let input = as_map(json!({
            "email": "new@tutortime.dev",
            "role": "admin",
            "name": "Ada",
            "age": 34,
        }));

        let filtered = strip_protected_fields(&input);

        assert!(!filtered.contains_key("email"));
        assert!(!filtered.contains_key("role"));
        assert_eq!(filtered.get("name"), Some(&json!("Ada")));
        assert_eq!(filtered.get("age"), Some(&json!(34)));
    }

    #[test]
    fn preserves_all_other_entries() {
        let input = as_map(json!({
            "name": "Grace",
            "department": "Mathematics",
            "subject": "Calculus",
            "nested": {"email": "kept@tutortime.dev"},
        }));

        let filtered = strip_protected_fields(&input);

        assert_eq!(filtered.len(), input.len());
        for (key, value) in &input {
            assert_eq!(filtered.get(key), Some(value));
        }
    }

    #[test]
    fn is_idempotent() {
        let input = as_map(json!({
            "email": "x@tutortime.dev",
            "role": "teacher",
            "name": "Alan",
        }));

        let once = strip_protected_fields(&input);
        let twice = strip_protected_fields(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn empty_object_stays_empty() {
        let filtered = strip_protected_fields(&Map::new());
        assert!(filtered.is_empty());
    }
}
