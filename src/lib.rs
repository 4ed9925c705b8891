//! # Storefront Orders
//!
//! Order and contact-form intake for an online storefront.
//!
//! An order submission is validated, priced, stored in memory and answered
//! with a WhatsApp deep link that pre-fills an order summary for the shop.
//!
//! ## Features
//!
//! - **Validation**: required fields are checked in order, the first miss is reported
//! - **Pricing**: subtotal = price × quantity, free shipping
//! - **Pluggable storage**: handlers talk to the [`OrderStore`](core::OrderStore) trait
//! - **Sequential ids**: assigned by the store, atomically with the append
//! - **Deep links**: `api.whatsapp.com/send` URLs with a percent-encoded message
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_config(StorefrontConfig::default())
//!         .with_order_store(InMemoryOrderStore::new())
//!         .serve()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod orders;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        builder::build_order,
        contact::{ContactDesk, ContactId, ContactSubmission},
        deep_link::{DEFAULT_WHATSAPP_PHONE, encode_message, whatsapp_url},
        error::{
            ConfigError, ErrorResponse, OrderError, StorefrontError, StorefrontResult,
            ValidationError,
        },
        message::{Branding, format_order_message, group_thousands},
        order::{CustomerDetails, FieldText, Order, OrderDraft, OrderId, Product},
        service::OrderStore,
        validation::{validate_contact, validate_order},
    };

    // === Handlers ===
    pub use crate::orders::handlers::{
        AppState, create_order, get_order, list_orders, mark_whatsapp_sent, submit_contact_form,
    };

    // === Storage ===
    pub use crate::storage::InMemoryOrderStore;

    // === Config ===
    pub use crate::config::StorefrontConfig;

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
