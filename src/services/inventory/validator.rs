//! Upload gate: raw text or JSON value in, typed snapshot out.
//!
//! Anything that is not clearly an inventory export is refused. A section that
//! is present but empty does not count towards acceptance.

use crate::types::errors::InventoryError;
use crate::types::inventory::InventorySnapshot;
use serde_json::Value;

/// Top-level sections that hold item lists.
const LIST_SECTIONS: &[&str] = &["characters", "weapons", "artifacts"];

/// Parse uploaded file content into a validated snapshot.
pub fn parse_inventory(text: &str) -> Result<InventorySnapshot, InventoryError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| InventoryError::Parse(e.to_string()))?;
    validate_inventory(value)
}

/// Check an already-parsed value against the expected shape, then decode it.
pub fn validate_inventory(value: Value) -> Result<InventorySnapshot, InventoryError> {
    check_shape(&value)?;
    serde_json::from_value(value).map_err(|e| InventoryError::Validation(e.to_string()))
}

/// Shape check without decoding.
///
/// Accepts a non-null object with at least one non-empty list section or a
/// non-empty `materials` object.
fn check_shape(value: &Value) -> Result<(), InventoryError> {
    let object = value.as_object().ok_or_else(|| {
        InventoryError::Validation(format!(
            "expected a JSON object at the top level, found {}",
            json_kind(value)
        ))
    })?;

    let has_list = LIST_SECTIONS.iter().any(|section| {
        object
            .get(*section)
            .and_then(Value::as_array)
            .is_some_and(|items| !items.is_empty())
    });

    let has_materials = object
        .get("materials")
        .and_then(Value::as_object)
        .is_some_and(|m| !m.is_empty());

    if has_list || has_materials {
        Ok(())
    } else {
        Err(InventoryError::Validation(
            "no characters, weapons, artifacts or materials found".to_string(),
        ))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "tests/validator_tests.rs"]
mod tests;
