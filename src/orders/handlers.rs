//! HTTP handlers for orders and the contact form
//!
//! Handlers return [`StorefrontResult`]; errors become `{ "error": ... }`
//! bodies in one place, the `IntoResponse` impl of `StorefrontError`.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::core::builder::build_order;
use crate::core::contact::ContactDesk;
use crate::core::deep_link::whatsapp_url;
use crate::core::error::{OrderError, StorefrontResult, ValidationError};
use crate::core::message::{Branding, format_order_message};
use crate::core::order::{Order, OrderId};
use crate::core::service::OrderStore;
use crate::core::validation::validate_order;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OrderStore>,
    pub contacts: Arc<ContactDesk>,
    pub branding: Arc<Branding>,
    /// Destination number for every deep link
    pub whatsapp_phone: Arc<str>,
}

/// Response for the create order endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order: Order,
    pub whatsapp_url: String,
    pub message: String,
}

/// Response for the get order endpoint
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order: Order,
}

/// Response for the list orders endpoint
#[derive(Debug, Serialize)]
pub struct ListOrdersResponse {
    pub orders: Vec<Order>,
}

/// Plain acknowledgement
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

impl SuccessResponse {
    fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

fn parse_body(body: &Bytes) -> StorefrontResult<Value> {
    Ok(serde_json::from_slice(body)?)
}

fn parse_order_id(raw: &str) -> StorefrontResult<OrderId> {
    raw.parse::<u64>().map(OrderId).map_err(|_| {
        ValidationError::InvalidPath {
            message: format!("order id must be a positive integer, got '{}'", raw),
        }
        .into()
    })
}

/// Create an order and its WhatsApp deep link
///
/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    body: Bytes,
) -> StorefrontResult<(StatusCode, Json<CreateOrderResponse>)> {
    let payload = parse_body(&body)?;
    validate_order(&payload)?;

    let draft = build_order(&payload, Utc::now())?;
    let order = state.store.append(draft).await?;

    let message = format_order_message(&order, &state.branding);
    let url = whatsapp_url(&state.whatsapp_phone, &message);

    tracing::info!(order_id = %order.id, total = %order.total, "order created");

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            success: true,
            order,
            whatsapp_url: url,
            message: "Order created successfully".to_string(),
        }),
    ))
}

/// Get an order by id
///
/// GET /orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> StorefrontResult<Json<OrderResponse>> {
    let id = parse_order_id(&raw_id)?;
    let order = state
        .store
        .get(id)
        .await?
        .ok_or(OrderError::NotFound { id })?;

    Ok(Json(OrderResponse { order }))
}

/// List every order in creation order
///
/// GET /orders
pub async fn list_orders(
    State(state): State<AppState>,
) -> StorefrontResult<Json<ListOrdersResponse>> {
    let orders = state.store.list().await?;
    Ok(Json(ListOrdersResponse { orders }))
}

/// Record that the customer sent the WhatsApp message
///
/// POST /orders/{id}/whatsapp-sent
pub async fn mark_whatsapp_sent(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> StorefrontResult<Json<SuccessResponse>> {
    let id = parse_order_id(&raw_id)?;
    state.store.mark_sent(id).await?;

    tracing::info!(order_id = %id, "order marked as WhatsApp sent");

    Ok(Json(SuccessResponse::new("Order marked as WhatsApp sent")))
}

/// Accept a contact-form submission
///
/// POST /contact
pub async fn submit_contact_form(
    State(state): State<AppState>,
    body: Bytes,
) -> StorefrontResult<Json<SuccessResponse>> {
    let payload = parse_body(&body)?;
    let submission = state.contacts.accept(&payload, Utc::now())?;

    tracing::info!(
        contact_id = %submission.id,
        name = %submission.name,
        email = %submission.email,
        "contact form received"
    );

    Ok(Json(SuccessResponse::new(
        "Contact form submitted successfully",
    )))
}
