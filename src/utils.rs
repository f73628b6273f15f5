use serde_json::Value;
use uuid::Uuid;

/// Fresh entity id: 32 lowercase hex characters.
pub fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Canonical string form of an id that may arrive as a JSON string or number.
pub fn canonical_id(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn next_id_is_hex_and_unique() {
        let a = next_id();
        let b = next_id();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn canonical_id_unifies_strings_and_numbers() {
        assert_eq!(canonical_id(&json!("5")), "5");
        assert_eq!(canonical_id(&json!(5)), "5");
    }
}
