//! Core module containing the order domain, its rules and the store trait

pub mod builder;
pub mod contact;
pub mod deep_link;
pub mod error;
pub mod message;
pub mod order;
pub mod service;
pub mod validation;

pub use builder::build_order;
pub use contact::{ContactDesk, ContactId, ContactSubmission};
pub use deep_link::whatsapp_url;
pub use error::{StorefrontError, StorefrontResult};
pub use message::{Branding, format_order_message};
pub use order::{CustomerDetails, FieldText, Order, OrderDraft, OrderId, Product};
pub use service::OrderStore;
