//! Order record and its parts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Status every order is created with
pub const STATUS_PENDING: &str = "pending";

/// Sequential order identifier, assigned by the store (starts at 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form customer-supplied value, printed as given
///
/// Strings render without quotes; numbers and other JSON values render as
/// their JSON text, so a phone number sent as `3001234567` prints as such.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldText(pub Value);

impl fmt::Display for FieldText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<&str> for FieldText {
    fn from(s: &str) -> Self {
        FieldText(Value::String(s.to_string()))
    }
}

impl From<String> for FieldText {
    fn from(s: String) -> Self {
        FieldText(Value::String(s))
    }
}

/// Product as supplied by the storefront
///
/// Only `name` and `price` are interpreted; every other key the client
/// sent (images, description, ...) is kept in `extra` and echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Customer contact and delivery details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub full_name: FieldText,
    pub mobile_number: FieldText,
    pub email: FieldText,
    pub address: FieldText,
    pub city: FieldText,
    pub province: FieldText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<FieldText>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A fully built order that has not been assigned an identifier yet
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub product: Product,
    pub quantity: Number,
    pub selected_size: String,
    pub selected_color: String,
    pub customer_details: CustomerDetails,
    pub subtotal: Number,
    pub shipping: Number,
    pub total: Number,
    pub created_at: DateTime<Utc>,
}

impl OrderDraft {
    /// Attach the store-assigned identifier
    pub fn into_order(self, id: OrderId) -> Order {
        Order {
            id,
            product: self.product,
            quantity: self.quantity,
            selected_size: self.selected_size,
            selected_color: self.selected_color,
            customer_details: self.customer_details,
            subtotal: self.subtotal,
            shipping: self.shipping,
            total: self.total,
            status: STATUS_PENDING.to_string(),
            created_at: self.created_at,
            whatsapp_sent: false,
            whatsapp_sent_at: None,
        }
    }
}

/// A stored order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub product: Product,
    pub quantity: Number,
    pub selected_size: String,
    pub selected_color: String,
    pub customer_details: CustomerDetails,
    pub subtotal: Number,
    pub shipping: Number,
    pub total: Number,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub whatsapp_sent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_sent_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Record that the customer dispatched the WhatsApp message
    ///
    /// The flag only ever moves to `true`; a repeat call refreshes the timestamp.
    pub fn mark_whatsapp_sent(&mut self, at: DateTime<Utc>) {
        self.whatsapp_sent = true;
        self.whatsapp_sent_at = Some(at);
    }
}
