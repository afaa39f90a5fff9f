//! Real-time order event fan-out.
//!
//! The store's mutations publish domain events here; each connected
//! dashboard session holds a subscription. Delivery is best-effort and
//! at-most-once: there is no replay for sessions that connect late and a
//! slow or dead subscriber never blocks the publishing request.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::types::order::Order;

/// Events delivered to dashboard sessions, serialized as
/// `{"event": "orderCreated", "order": {...}}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "order", rename_all = "camelCase")]
pub enum OrderEvent {
    OrderCreated(Order),
    OrderStatusChanged(Order),
}

impl OrderEvent {
    pub fn order(&self) -> &Order {
        match self {
            OrderEvent::OrderCreated(order) | OrderEvent::OrderStatusChanged(order) => order,
        }
    }
}

/// Events buffered per subscriber before a lagging session starts losing
/// them.
const EVENT_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<OrderEvent>,
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.tx.subscribe()
    }

    /// Publish to all currently connected sessions. A publish with no
    /// subscribers is not an error; the event is simply dropped.
    pub fn publish(&self, event: OrderEvent) {
        match self.tx.send(event) {
            Ok(receivers) => {
                tracing::debug!(receivers, "order event published");
            }
            Err(_) => {
                tracing::debug!("no dashboard sessions connected; order event dropped");
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
