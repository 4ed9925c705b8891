//! Field-presence validation for untyped request payloads
//!
//! Checks short-circuit on the first failing field, in the order the
//! fields are listed.

use serde_json::{Map, Value};

use crate::core::error::ValidationError;

/// Top-level keys an order payload must contain
pub const ORDER_REQUIRED_FIELDS: &[&str] = &["product", "quantity", "customerDetails"];

/// Customer keys that must be present and non-empty
pub const CUSTOMER_REQUIRED_FIELDS: &[&str] = &[
    "fullName",
    "mobileNumber",
    "email",
    "address",
    "city",
    "province",
];

/// Keys a contact-form payload must carry, non-empty
pub const CONTACT_REQUIRED_FIELDS: &[&str] = &["name", "email", "message"];

/// Whether a JSON value counts as filled in
///
/// `null`, `false`, zero, the empty string and empty containers are empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Require the payload to be a JSON object
pub fn as_object(payload: &Value) -> Result<&Map<String, Value>, ValidationError> {
    payload
        .as_object()
        .ok_or_else(|| ValidationError::InvalidBody {
            message: "expected a JSON object".to_string(),
        })
}

/// First key of `fields` that is absent from `object` (presence only, `null` counts)
fn first_absent<'a>(object: &Map<String, Value>, fields: &[&'a str]) -> Option<&'a str> {
    fields.iter().copied().find(|f| !object.contains_key(*f))
}

/// First key of `fields` that is absent or not truthy
fn first_empty<'a>(object: &Map<String, Value>, fields: &[&'a str]) -> Option<&'a str> {
    fields
        .iter()
        .copied()
        .find(|f| !object.get(*f).is_some_and(is_truthy))
}

/// Validate an order payload: top-level keys, then the customer block
pub fn validate_order(payload: &Value) -> Result<(), ValidationError> {
    let object = as_object(payload)?;

    if let Some(field) = first_absent(object, ORDER_REQUIRED_FIELDS) {
        return Err(ValidationError::MissingField {
            field: field.to_string(),
        });
    }

    // A non-object customer block has none of the required keys
    let empty = Map::new();
    let customer = object
        .get("customerDetails")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    if let Some(field) = first_empty(customer, CUSTOMER_REQUIRED_FIELDS) {
        return Err(ValidationError::MissingCustomerField {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validate a contact-form payload
pub fn validate_contact(payload: &Value) -> Result<(), ValidationError> {
    let object = as_object(payload)?;

    match first_empty(object, CONTACT_REQUIRED_FIELDS) {
        Some(field) => Err(ValidationError::MissingField {
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}
