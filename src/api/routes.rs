use axum::Router;
use axum::routing::{get, patch};
use sqlx::PgPool;

use crate::api::{dashboard, orders, ws};
use crate::notify::Notifier;

/// Process-scoped services, built once in `main` and shared by every
/// handler.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub events: Notifier,
}

async fn health() -> &'static str {
    "healthy"
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route("/api/orders/{id}", get(orders::get_order))
        .route("/api/orders/{id}/status", patch(orders::update_status))
        .route("/api/dashboard/sales", get(dashboard::sales))
        .route("/api/dashboard/peakhour", get(dashboard::peak_hour))
        .route("/api/dashboard/topdish", get(dashboard::top_dish))
        .route(
            "/api/dashboard/repeatcustomers",
            get(dashboard::repeat_customers),
        )
        .route("/ws", get(ws::ws_handler))
        .with_state(state)
}
