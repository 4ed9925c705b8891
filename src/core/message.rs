//! WhatsApp order summary text

use serde_json::Number;
use std::fmt::Write;

use crate::core::order::Order;

/// Shown when the customer gave no WhatsApp number
pub const WHATSAPP_NOT_PROVIDED: &str = "Not provided";

/// Storefront identity printed in the header and footer of the message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub brand_name: String,
    pub site_url: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            brand_name: "Luxera".to_string(),
            site_url: "https://luxera.netlify.app".to_string(),
        }
    }
}

/// Render a number with comma-grouped thousands in its integer part
///
/// `1234567` becomes `1,234,567`; `-1234.5` becomes `-1,234.5`.
/// Exponent notation is returned unchanged.
pub fn group_thousands(amount: &Number) -> String {
    let text = amount.to_string();
    if text.contains(['e', 'E']) {
        return text;
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Compose the message the customer sends to the shop on WhatsApp
pub fn format_order_message(order: &Order, branding: &Branding) -> String {
    let customer = &order.customer_details;
    let whatsapp = customer
        .whatsapp_number
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| WHATSAPP_NOT_PROVIDED.to_string());

    let mut message = format!(
        "🌟 *New Order from {brand} Website!* 🌟\n\
         \n\
         *Customer Name:* {name}\n\
         *Mobile Number:* {mobile}\n\
         *WhatsApp Number:* {whatsapp}\n\
         *Email:* {email}\n\
         *Address:* {address}, {city}, {province}\n\
         \n\
         *--- Order Summary ---*\n\
         *Product:* {product}\n\
         *Quantity:* {quantity}",
        brand = branding.brand_name,
        name = customer.full_name,
        mobile = customer.mobile_number,
        email = customer.email,
        address = customer.address,
        city = customer.city,
        province = customer.province,
        product = order.product.name,
        quantity = order.quantity,
    );

    // Writing to a String cannot fail
    if !order.selected_size.is_empty() {
        let _ = write!(message, "\n*Size:* {}", order.selected_size);
    }
    if !order.selected_color.is_empty() {
        let _ = write!(message, "\n*Color:* {}", order.selected_color);
    }

    let _ = write!(
        message,
        "\n\n*Total Bill:* Rs. {}\n\
         \n\
         -----------------------------------\n\
         This order has been confirmed by the customer.\n\
         \n\
         *Ordered from:* {}",
        group_thousands(&order.total),
        branding.site_url,
    );

    message
}
