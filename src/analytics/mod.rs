//! Aggregation engine: pure reductions over a window-filtered order set.
//!
//! Callers supply orders already filtered by time window with deleted
//! records excluded; nothing here touches the store. Tie-breaks are
//! deterministic so repeated runs over the same window agree.

pub mod window;

use std::collections::BTreeMap;

use chrono::{Local, Timelike};
use serde::Serialize;

use crate::types::order::Order;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalesSummary {
    pub total: f64,
    pub count: usize,
}

/// Total sales and order count for the supplied window.
pub fn sales_summary(orders: &[Order]) -> SalesSummary {
    SalesSummary {
        total: orders.iter().map(|o| o.total).sum(),
        count: orders.len(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeakHour {
    pub hour: u32,
    pub count: usize,
}

/// Local hour of day with the most orders, or `None` for an empty window.
/// Ties resolve to the lowest hour.
pub fn peak_hour(orders: &[Order]) -> Option<PeakHour> {
    let mut hourly: BTreeMap<u32, usize> = BTreeMap::new();
    for order in orders {
        let hour = order.created_at.with_timezone(&Local).hour();
        *hourly.entry(hour).or_insert(0) += 1;
    }
    let mut peak: Option<PeakHour> = None;
    for (hour, count) in hourly {
        if peak.is_none_or(|p| count > p.count) {
            peak = Some(PeakHour { hour, count });
        }
    }
    peak
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopDish {
    pub name: String,
    pub count: u64,
}

/// Item name with the highest cumulative quantity, or `None` when no line
/// items exist. Ties resolve lexicographically by name.
pub fn top_dish(orders: &[Order]) -> Option<TopDish> {
    let mut tally: BTreeMap<&str, u64> = BTreeMap::new();
    for order in orders {
        for item in &order.items {
            *tally.entry(item.display_name()).or_insert(0) += u64::from(item.qty);
        }
    }
    let mut top: Option<TopDish> = None;
    for (name, count) in tally {
        if top.as_ref().is_none_or(|t| count > t.count) {
            top = Some(TopDish {
                name: name.to_string(),
                count,
            });
        }
    }
    top
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrders {
    pub customer_name: String,
    pub orders: usize,
}

/// Per-customer order counts, descending by count, ties ascending by name.
/// Orders without a customer name are skipped.
pub fn repeat_customers(orders: &[Order]) -> Vec<CustomerOrders> {
    let mut stats: BTreeMap<&str, usize> = BTreeMap::new();
    for order in orders {
        if let Some(name) = order.customer_name.as_deref() {
            *stats.entry(name).or_insert(0) += 1;
        }
    }
    let mut ranked: Vec<CustomerOrders> = stats
        .into_iter()
        .map(|(name, count)| CustomerOrders {
            customer_name: name.to_string(),
            orders: count,
        })
        .collect();
    // BTreeMap iteration is name-ascending; the stable sort keeps that as
    // the tie-break.
    ranked.sort_by(|a, b| b.orders.cmp(&a.orders));
    ranked
}

/// Order count for one specific customer; zero when absent from the window.
pub fn orders_for_customer(orders: &[Order], name: &str) -> CustomerOrders {
    let count = orders
        .iter()
        .filter(|o| o.customer_name.as_deref() == Some(name))
        .count();
    CustomerOrders {
        customer_name: name.to_string(),
        orders: count,
    }
}
