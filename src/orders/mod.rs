//! Order and contact-form HTTP handlers

pub mod handlers;

pub use handlers::AppState;
