//! Route table for the order and contact endpoints

use crate::orders::handlers::{
    AppState, create_order, get_order, list_orders, mark_whatsapp_sent, submit_contact_form,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Build the order routes
///
/// - GET  /orders                       - List all orders
/// - POST /orders                       - Create an order
/// - GET  /orders/{id}                  - Get a specific order
/// - POST /orders/{id}/whatsapp-sent    - Mark the WhatsApp message as sent
/// - POST /contact                      - Submit the contact form
pub fn build_order_routes(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{id}", get(get_order))
        .route("/orders/{id}/whatsapp-sent", post(mark_whatsapp_sent))
        .route("/contact", post(submit_contact_form))
        .with_state(state)
}
