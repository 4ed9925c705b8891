//! Turns a validated order payload into an [`OrderDraft`]
//!
//! Building is pure: it depends only on the payload and the supplied clock
//! reading. Identifiers are assigned later, by the store.

use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};

use crate::core::error::{StorefrontError, StorefrontResult, ValidationError};
use crate::core::order::{CustomerDetails, OrderDraft, Product};
use crate::core::validation::as_object;

/// Shipping is free
pub const SHIPPING_COST: u64 = 0;

/// Multiply two JSON numbers
///
/// Integer operands stay integers; anything else is computed as `f64`.
/// Returns `None` on integer overflow or a non-finite float result.
pub fn multiply(a: &Number, b: &Number) -> Option<Number> {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x.checked_mul(y).map(Number::from);
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x.checked_mul(y).map(Number::from);
    }
    Number::from_f64(a.as_f64()? * b.as_f64()?)
}

/// Add two JSON numbers, with the same integer/float rules as [`multiply`]
pub fn add(a: &Number, b: &Number) -> Option<Number> {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x.checked_add(y).map(Number::from);
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x.checked_add(y).map(Number::from);
    }
    Number::from_f64(a.as_f64()? + b.as_f64()?)
}

fn product_from(value: &Value) -> StorefrontResult<Product> {
    let mut extra: Map<String, Value> = value
        .as_object()
        .cloned()
        .ok_or_else(|| StorefrontError::internal("product must be an object"))?;

    let name = match extra.remove("name") {
        Some(Value::String(name)) => name,
        _ => return Err(StorefrontError::internal("product name must be a string")),
    };
    let price = match extra.remove("price") {
        Some(Value::Number(price)) => price,
        _ => return Err(StorefrontError::internal("product price must be a number")),
    };

    Ok(Product { name, price, extra })
}

static NULL: Value = Value::Null;

/// Field value, `null` when absent
fn field<'a>(object: &'a Map<String, Value>, key: &str) -> &'a Value {
    object.get(key).unwrap_or(&NULL)
}

/// Optional string field; absent or `null` reads as empty
fn optional_string(object: &Map<String, Value>, key: &str) -> StorefrontResult<String> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::InvalidJson {
            message: format!("{} must be a string", key),
        }
        .into()),
    }
}

/// Build an order draft from a payload that passed [`validate_order`]
///
/// [`validate_order`]: crate::core::validation::validate_order
pub fn build_order(payload: &Value, now: DateTime<Utc>) -> StorefrontResult<OrderDraft> {
    let object = as_object(payload)?;

    let product = product_from(field(object, "product"))?;
    let quantity = match field(object, "quantity") {
        Value::Number(n) => n.clone(),
        _ => return Err(StorefrontError::internal("quantity must be a number")),
    };
    let customer_details: CustomerDetails =
        serde_json::from_value(field(object, "customerDetails").clone())?;

    let subtotal = multiply(&product.price, &quantity)
        .ok_or_else(|| StorefrontError::internal("order subtotal is out of range"))?;
    let shipping = Number::from(SHIPPING_COST);
    let total = add(&subtotal, &shipping)
        .ok_or_else(|| StorefrontError::internal("order total is out of range"))?;

    Ok(OrderDraft {
        product,
        quantity,
        selected_size: optional_string(object, "selectedSize")?,
        selected_color: optional_string(object, "selectedColor")?,
        customer_details,
        subtotal,
        shipping,
        total,
        created_at: now,
    })
}
