//! Order persistence: insert, status update, and window-filtered reads.
//!
//! Orders are soft-deleted: `status = 'deleted'` records stay in the table
//! and are excluded by window queries, but remain reachable by id.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::types::order::{Order, OrderItem, OrderStatus, OrderType};

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    order_type: String,
    customer_name: Option<String>,
    mobile: Option<String>,
    table_number: Option<String>,
    address: Option<String>,
    items: Json<Vec<OrderItem>>,
    total: f64,
    status: String,
    created_at: DateTime<Utc>,
}

const ORDER_COLUMNS: &str =
    "id, order_type, customer_name, mobile, table_number, address, items, total, status, created_at";

/// Convert a row to the domain type. Rows carrying an unknown status or
/// order type string are skipped, matching how the read paths treat
/// unparseable records.
fn order_row_to_order(row: OrderRow) -> Option<Order> {
    let order_type = OrderType::parse(&row.order_type)?;
    let status = OrderStatus::parse(&row.status)?;
    Some(Order {
        id: row.id,
        order_type,
        customer_name: row.customer_name,
        mobile: row.mobile,
        table_number: row.table_number,
        address: row.address,
        items: row.items.0,
        total: row.total,
        status,
        created_at: row.created_at,
    })
}

/// Insert a fully-built order record.
pub async fn insert_order(pool: &PgPool, order: &Order) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO orders (id, order_type, customer_name, mobile, table_number, address, items, total, status, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
    )
    .bind(order.id)
    .bind(order.order_type.as_str())
    .bind(order.customer_name.as_deref())
    .bind(order.mobile.as_deref())
    .bind(order.table_number.as_deref())
    .bind(order.address.as_deref())
    .bind(Json(&order.items))
    .bind(order.total)
    .bind(order.status.as_str())
    .bind(order.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Overwrite the status of an existing order and return the updated record.
/// `None` when no order has that id. Last write wins; there is no
/// optimistic-concurrency check between concurrent updates.
pub async fn update_order_status(
    pool: &PgPool,
    id: Uuid,
    status: OrderStatus,
) -> Result<Option<Order>, sqlx::Error> {
    let row = sqlx::query_as::<_, OrderRow>(&format!(
        "UPDATE orders SET status = $1 WHERE id = $2 RETURNING {ORDER_COLUMNS}"
    ))
    .bind(status.as_str())
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.and_then(order_row_to_order))
}

/// Fetch one order by id. Deleted orders are returned too: direct lookup is
/// the audit path and bypasses the soft-delete filter.
pub async fn get_order_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Order>, sqlx::Error> {
    let row = sqlx::query_as::<_, OrderRow>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.and_then(order_row_to_order))
}

/// Filters applied on top of the time window.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowFilter<'a> {
    /// Soft-deleted orders are excluded by default; audit-style reads can
    /// opt back in.
    pub include_deleted: bool,
    /// Exact match, used by the repeat-customer path.
    pub customer_name: Option<&'a str>,
}

/// Orders with `created_at` in the inclusive `[start, end]` window, newest
/// first.
pub async fn find_by_window(
    pool: &PgPool,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    filter: WindowFilter<'_>,
) -> Result<Vec<Order>, sqlx::Error> {
    let rows = if let Some(name) = filter.customer_name {
        sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders \
             WHERE created_at >= $1 AND created_at <= $2 \
               AND ($3 OR status <> 'deleted') AND customer_name = $4 \
             ORDER BY created_at DESC"
        ))
        .bind(start)
        .bind(end)
        .bind(filter.include_deleted)
        .bind(name)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders \
             WHERE created_at >= $1 AND created_at <= $2 \
               AND ($3 OR status <> 'deleted') \
             ORDER BY created_at DESC"
        ))
        .bind(start)
        .bind(end)
        .bind(filter.include_deleted)
        .fetch_all(pool)
        .await?
    };
    Ok(rows.into_iter().filter_map(order_row_to_order).collect())
}
