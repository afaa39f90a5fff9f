//! Dashboard metric handlers: thin glue between the window resolver, the
//! order store, and the aggregation engine.

use axum::Json;
use axum::extract::{Query, State};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::analytics::{self, window};
use crate::analytics::window::Period;
use crate::api::error::ApiError;
use crate::api::routes::AppState;
use crate::persistence::{self, WindowFilter};

#[derive(Debug, Deserialize)]
pub struct SalesParams {
    pub period: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct DateParams {
    pub date: Option<NaiveDate>,
}

/// Explicit `from`/`to` instants win over `date`; both default paths fall
/// back to today's day window.
#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub date: Option<NaiveDate>,
    pub name: Option<String>,
}

fn resolve_range(
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    date: Option<NaiveDate>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    match (from, to) {
        // Caller-supplied instants are used verbatim.
        (Some(from), Some(to)) => (from, to),
        _ => window::window_utc(window::day_bounds(date.unwrap_or_else(window::today_local))),
    }
}

/// GET /api/dashboard/sales: `{ total, count }` over a day/week/month
/// window.
pub async fn sales(
    State(state): State<AppState>,
    Query(params): Query<SalesParams>,
) -> Result<Json<analytics::SalesSummary>, ApiError> {
    let period = match params.period.as_deref() {
        None => Period::Day,
        Some(s) => Period::parse(s)
            .ok_or_else(|| ApiError::Validation(format!("unknown period '{s}'")))?,
    };
    let date = params.date.unwrap_or_else(window::today_local);
    let (start, end) = window::window_utc(window::resolve(period, date));
    let orders = persistence::find_by_window(&state.db, start, end, WindowFilter::default())
        .await?;
    Ok(Json(analytics::sales_summary(&orders)))
}

/// GET /api/dashboard/peakhour: busiest local hour of one day;
/// `{ "hour": "-", "count": 0 }` when the window is empty.
pub async fn peak_hour(
    State(state): State<AppState>,
    Query(params): Query<DateParams>,
) -> Result<Json<Value>, ApiError> {
    let date = params.date.unwrap_or_else(window::today_local);
    let (start, end) = window::window_utc(window::day_bounds(date));
    let orders = persistence::find_by_window(&state.db, start, end, WindowFilter::default())
        .await?;
    let body = match analytics::peak_hour(&orders) {
        Some(peak) => json!({ "hour": peak.hour, "count": peak.count }),
        None => json!({ "hour": "-", "count": 0 }),
    };
    Ok(Json(body))
}

/// GET /api/dashboard/topdish: most ordered item, or JSON null when the
/// window holds no line items.
pub async fn top_dish(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<Option<analytics::TopDish>>, ApiError> {
    let (start, end) = resolve_range(params.from, params.to, params.date);
    let orders = persistence::find_by_window(&state.db, start, end, WindowFilter::default())
        .await?;
    Ok(Json(analytics::top_dish(&orders)))
}

/// GET /api/dashboard/repeatcustomers: ranked customer counts, or a
/// single (possibly zero) entry when a name filter is given.
pub async fn repeat_customers(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<Vec<analytics::CustomerOrders>>, ApiError> {
    let (start, end) = resolve_range(params.from, params.to, params.date);
    match params.name {
        Some(name) => {
            let filter = WindowFilter {
                customer_name: Some(&name),
                ..WindowFilter::default()
            };
            let orders = persistence::find_by_window(&state.db, start, end, filter).await?;
            Ok(Json(vec![analytics::orders_for_customer(&orders, &name)]))
        }
        None => {
            let orders =
                persistence::find_by_window(&state.db, start, end, WindowFilter::default())
                    .await?;
            Ok(Json(analytics::repeat_customers(&orders)))
        }
    }
}
