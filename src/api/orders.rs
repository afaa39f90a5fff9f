//! Order intake and lifecycle handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::analytics::window;
use crate::api::error::ApiError;
use crate::api::routes::AppState;
use crate::notify::OrderEvent;
use crate::persistence;
use crate::types::order::{Order, OrderItem, OrderStatus, OrderType, compute_total};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub order_type: String,
    pub customer_name: Option<String>,
    pub mobile: Option<String>,
    pub table_number: Option<String>,
    pub address: Option<String>,
    pub items: Option<Vec<OrderItem>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ListOrdersParams {
    pub date: Option<NaiveDate>,
}

/// Empty strings behave like absent values (the dashboard sends "" for
/// untouched fields), so repeat-customer analytics skip them.
fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn validate_items(items: Option<Vec<OrderItem>>) -> Result<Vec<OrderItem>, ApiError> {
    let items = items.unwrap_or_default();
    if items.is_empty() {
        return Err(ApiError::Validation(
            "order must contain at least one item".to_string(),
        ));
    }
    for item in &items {
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(ApiError::Validation(format!(
                "invalid price for item '{}'",
                item.display_name()
            )));
        }
        if item.qty == 0 {
            return Err(ApiError::Validation(format!(
                "quantity must be positive for item '{}'",
                item.display_name()
            )));
        }
    }
    Ok(items
        .into_iter()
        .map(|item| OrderItem {
            name: item.name.filter(|n| !n.is_empty()),
            price: item.price,
            qty: item.qty,
        })
        .collect())
}

/// POST /api/orders: persist a new order and fan it out to dashboards.
pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<Order>, ApiError> {
    let order_type = OrderType::parse(&req.order_type)
        .ok_or_else(|| ApiError::Validation(format!("unknown order type '{}'", req.order_type)))?;
    let items = validate_items(req.items)?;

    let order = Order {
        id: Uuid::new_v4(),
        order_type,
        customer_name: blank_to_none(req.customer_name),
        mobile: blank_to_none(req.mobile),
        table_number: blank_to_none(req.table_number),
        address: blank_to_none(req.address),
        total: compute_total(&items),
        items,
        status: OrderStatus::Incoming,
        created_at: Utc::now(),
    };

    persistence::insert_order(&state.db, &order).await?;
    tracing::info!(id = %order.id, total = order.total, "order created");
    // Publish only after persistence succeeded; a failed publish (no
    // subscribers) never fails the request.
    state.events.publish(OrderEvent::OrderCreated(order.clone()));
    Ok(Json(order))
}

/// GET /api/orders: orders for one local day (default today), newest
/// first, soft-deleted excluded.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<ListOrdersParams>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let date = params.date.unwrap_or_else(window::today_local);
    let (start, end) = window::window_utc(window::day_bounds(date));
    let orders =
        persistence::find_by_window(&state.db, start, end, persistence::WindowFilter::default())
            .await?;
    Ok(Json(orders))
}

/// GET /api/orders/{id}: direct lookup, including soft-deleted records.
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Order>, ApiError> {
    let order = persistence::get_order_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("order not found".to_string()))?;
    Ok(Json(order))
}

/// PATCH /api/orders/{id}/status: overwrite the status and notify
/// dashboards.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<Order>, ApiError> {
    let status = OrderStatus::parse(&req.status)
        .ok_or_else(|| ApiError::Validation(format!("unknown status '{}'", req.status)))?;
    let order = persistence::update_order_status(&state.db, id, status)
        .await?
        .ok_or_else(|| ApiError::NotFound("order not found".to_string()))?;
    tracing::info!(id = %order.id, status = status.as_str(), "order status updated");
    state
        .events
        .publish(OrderEvent::OrderStatusChanged(order.clone()));
    Ok(Json(order))
}
