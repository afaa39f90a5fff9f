use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type OrderId = Uuid;

/// Name substituted for line items that arrive without one.
pub const UNNAMED_ITEM: &str = "Unnamed Item";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    DineIn,
    Delivery,
    Takeaway,
}

impl OrderType {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::DineIn => "dine-in",
            OrderType::Delivery => "delivery",
            OrderType::Takeaway => "takeaway",
        }
    }

    pub fn parse(s: &str) -> Option<OrderType> {
        match s {
            "dine-in" => Some(OrderType::DineIn),
            "delivery" => Some(OrderType::Delivery),
            "takeaway" => Some(OrderType::Takeaway),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Incoming,
    Preparing,
    Ready,
    Completed,
    Deleted,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Incoming => "incoming",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Deleted => "deleted",
        }
    }

    pub fn parse(s: &str) -> Option<OrderStatus> {
        match s {
            "incoming" => Some(OrderStatus::Incoming),
            "preparing" => Some(OrderStatus::Preparing),
            "ready" => Some(OrderStatus::Ready),
            "completed" => Some(OrderStatus::Completed),
            "deleted" => Some(OrderStatus::Deleted),
            _ => None,
        }
    }
}

/// A single line item. `name` may be absent; analytics fall back to
/// [`UNNAMED_ITEM`] when reducing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub name: Option<String>,
    pub price: f64,
    pub qty: u32,
}

impl OrderItem {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_ITEM)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub order_type: OrderType,
    pub customer_name: Option<String>,
    pub mobile: Option<String>,
    pub table_number: Option<String>,
    pub address: Option<String>,
    pub items: Vec<OrderItem>,
    /// Computed once at creation from `items`; never recomputed.
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Sum of `price × qty` over all line items.
pub fn compute_total(items: &[OrderItem]) -> f64 {
    items.iter().map(|i| i.price * f64::from(i.qty)).sum()
}
