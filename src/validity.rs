//! Validity predicates for request values and field extraction from JSON bodies.
//! An absent field is `None`; JSON `null` counts as unassigned as well.

use crate::error::PreconditionError;
use serde_json::{Map, Value};

/// True if the value is absent, null, not a string, or a zero-length string.
pub fn is_empty_string(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(s)) => s.is_empty(),
        _ => true,
    }
}

/// True if the value is absent or JSON null, whatever its type would have been.
pub fn is_unassigned(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Stricter check used by newer call sites: absent, null, non-string or empty.
pub fn is_empty_or_invalid_string(value: Option<&Value>) -> bool {
    if is_unassigned(value) {
        return true;
    }
    is_empty_string(value)
}

/// Trimmed string field; fails when the field is missing, not a string, or blank.
pub fn require_string_field(body: &Map<String, Value>, field: &str) -> Result<String, PreconditionError> {
    let value = body.get(field);
    if is_empty_or_invalid_string(value) {
        return Err(PreconditionError::InvalidField {
            field: field.to_string(),
            reason: "expected a non-empty string".into(),
        });
    }
    let trimmed = value.and_then(Value::as_str).map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(PreconditionError::InvalidField {
            field: field.to_string(),
            reason: "expected a non-empty string".into(),
        });
    }
    Ok(trimmed.to_string())
}

/// Trimmed string field when present and non-blank.
pub fn optional_string_field(body: &Map<String, Value>, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Finite number field; fails when missing or not a number.
pub fn require_number_field(body: &Map<String, Value>, field: &str) -> Result<f64, PreconditionError> {
    body.get(field)
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
        .ok_or_else(|| PreconditionError::InvalidField {
            field: field.to_string(),
            reason: "expected a number".into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_string_predicates() {
        assert!(is_empty_string(None));
        assert!(is_empty_string(Some(&Value::Null)));
        assert!(is_empty_string(Some(&json!(""))));
        assert!(is_empty_string(Some(&json!(5))));
        assert!(!is_empty_string(Some(&json!("x"))));

        assert!(is_empty_or_invalid_string(Some(&json!([]))));
        assert!(!is_empty_or_invalid_string(Some(&json!(" a "))));
    }

    #[test]
    fn unassigned_is_type_agnostic() {
        assert!(is_unassigned(None));
        assert!(is_unassigned(Some(&Value::Null)));
        assert!(!is_unassigned(Some(&json!(0))));
        assert!(!is_unassigned(Some(&json!(""))));
        assert!(!is_unassigned(Some(&json!({}))));
    }

    #[test]
    fn string_field_extraction() {
        let body = json!({ "name": "  alice ", "blank": "   ", "n": 3 });
        let body = body.as_object().unwrap();
        assert_eq!(require_string_field(body, "name").unwrap(), "alice");
        assert!(matches!(
            require_string_field(body, "blank"),
            Err(PreconditionError::InvalidField { .. })
        ));
        assert!(require_string_field(body, "n").is_err());
        assert!(require_string_field(body, "missing").is_err());
        assert_eq!(optional_string_field(body, "blank"), None);
        assert_eq!(optional_string_field(body, "name").as_deref(), Some("alice"));
    }

    #[test]
    fn number_field_extraction() {
        let body = json!({ "seconds": 12.5, "text": "12" });
        let body = body.as_object().unwrap();
        assert_eq!(require_number_field(body, "seconds").unwrap(), 12.5);
        assert!(require_number_field(body, "text").is_err());
        assert!(require_number_field(body, "missing").is_err());
    }
}
