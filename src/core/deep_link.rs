//! WhatsApp click-to-chat deep links

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Shop number every order message is addressed to
pub const DEFAULT_WHATSAPP_PHONE: &str = "923261300101";

/// Everything except `A-Z a-z 0-9 - _ . ~ /` is encoded
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Percent-encode message text for use in a query string
pub fn encode_message(message: &str) -> String {
    utf8_percent_encode(message, MESSAGE_ENCODE_SET).to_string()
}

/// Build the `api.whatsapp.com/send` URL that pre-fills `message` for `phone`
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!(
        "https://api.whatsapp.com/send/?phone={}&text={}&type=phone_number&app_absent=0",
        phone,
        encode_message(message)
    )
}
