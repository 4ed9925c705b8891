//! Contact-form submissions
//!
//! Submissions are acknowledged and logged, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::error::StorefrontResult;
use crate::core::order::FieldText;
use crate::core::validation::validate_contact;

/// Type tag carried by every submission
pub const CONTACT_FORM_TYPE: &str = "contact_form";

/// First identifier handed out to a contact submission
pub const CONTACT_ID_BASE: u64 = 1000;

/// Contact submission identifier, unrelated to order identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contact-form message from a visitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: ContactId,
    pub name: FieldText,
    pub email: FieldText,
    pub message: FieldText,
    pub submitted_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Deserialize)]
struct ContactForm {
    name: FieldText,
    email: FieldText,
    message: FieldText,
}

/// Accepts contact-form payloads and numbers them
#[derive(Debug)]
pub struct ContactDesk {
    next_id: AtomicU64,
}

impl ContactDesk {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(CONTACT_ID_BASE),
        }
    }

    /// Validate `payload` and turn it into a submission
    pub fn accept(&self, payload: &Value, now: DateTime<Utc>) -> StorefrontResult<ContactSubmission> {
        validate_contact(payload)?;
        let form: ContactForm = serde_json::from_value(payload.clone())?;

        Ok(ContactSubmission {
            id: ContactId(self.next_id.fetch_add(1, Ordering::Relaxed)),
            name: form.name,
            email: form.email,
            message: form.message,
            submitted_at: now,
            kind: CONTACT_FORM_TYPE.to_string(),
        })
    }
}

impl Default for ContactDesk {
    fn default() -> Self {
        Self::new()
    }
}
