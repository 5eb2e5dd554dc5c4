use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::OrderService;
use crate::domain::order::{format_amount, NewOrder, Order, OrderItem};
use crate::errors::AppError;

use super::parse_id;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    /// Client-side total. Accepted but ignored: totals are always recomputed
    /// from the item prices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    /// Client-side submission time. Accepted but ignored: the server stamps
    /// the order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Explicit creation time to record; the server clock is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        NewOrder {
            items: req.items,
            customer_name: req.customer_name,
            customer_contact: req.customer_contact,
            table_number: req.table_number,
            special_instructions: req.special_instructions,
            created_at: req.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Short display reference shown to kitchen staff.
    pub reference: String,
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Sum of item prices, two decimal places.
    pub total_price: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            reference: order.reference(),
            total_price: format_amount(&order.total()),
            id: order.id,
            items: order.items,
            customer_name: order.customer_name,
            customer_contact: order.customer_contact,
            table_number: order.table_number,
            special_instructions: order.special_instructions,
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /order
///
/// Persists a submitted cart. Item snapshots are stored as sent; the
/// client's `totalPrice` is not trusted.
#[utoipa::path(
    post,
    path = "/order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Malformed or invalid order"),
        (status = 500, description = "Store unavailable"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    orders: web::Data<OrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let order = NewOrder::from(body.into_inner());

    let created = web::block(move || orders.create_order(order)).await??;

    Ok(HttpResponse::Created().json(OrderResponse::from(created)))
}

/// GET /order
#[utoipa::path(
    get,
    path = "/order",
    responses(
        (status = 200, description = "All open orders, oldest first", body = [OrderResponse]),
        (status = 500, description = "Store unavailable"),
    ),
    tag = "orders"
)]
pub async fn list_orders(orders: web::Data<OrderService>) -> Result<HttpResponse, AppError> {
    let all = web::block(move || orders.list_orders()).await??;

    let body: Vec<OrderResponse> = all.into_iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /order/{id}
#[utoipa::path(
    get,
    path = "/order/{id}",
    params(
        ("id" = String, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Store unavailable"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    orders: web::Data<OrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner(), "Order")?;

    let order = web::block(move || orders.get_order(id)).await??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// DELETE /order/{id}
///
/// Marks the order complete, which removes it permanently.
#[utoipa::path(
    delete,
    path = "/order/{id}",
    params(
        ("id" = String, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order completed and removed", body = MessageResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Store unavailable"),
    ),
    tag = "orders"
)]
pub async fn complete_order(
    orders: web::Data<OrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner(), "Order")?;

    web::block(move || orders.complete_order(id)).await??;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Order deleted successfully".to_string(),
    }))
}
