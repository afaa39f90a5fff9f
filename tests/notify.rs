//! Real-time notifier tests: fan-out, late subscribers, wire format.

use chrono::Utc;
use dinehub::notify::{Notifier, OrderEvent};
use dinehub::types::order::{Order, OrderItem, OrderStatus, OrderType, compute_total};
use uuid::Uuid;

fn sample_order(customer: &str) -> Order {
    let items = vec![OrderItem {
        name: Some("Biryani".to_string()),
        price: 200.0,
        qty: 2,
    }];
    Order {
        id: Uuid::new_v4(),
        order_type: OrderType::Delivery,
        customer_name: Some(customer.to_string()),
        mobile: None,
        table_number: None,
        address: Some("12 Park Lane".to_string()),
        total: compute_total(&items),
        items,
        status: OrderStatus::Incoming,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn every_subscriber_receives_the_same_event() {
    let notifier = Notifier::new();
    let mut rx1 = notifier.subscribe();
    let mut rx2 = notifier.subscribe();

    let order = sample_order("Amit");
    notifier.publish(OrderEvent::OrderCreated(order.clone()));

    let got1 = rx1.recv().await.unwrap();
    let got2 = rx2.recv().await.unwrap();
    assert_eq!(got1.order().id, order.id);
    assert_eq!(got2.order().id, order.id);
    assert_eq!(got1.order(), got2.order());
}

#[tokio::test]
async fn late_subscriber_does_not_see_earlier_events() {
    let notifier = Notifier::new();
    let mut early = notifier.subscribe();

    let first = sample_order("Amit");
    notifier.publish(OrderEvent::OrderCreated(first.clone()));

    // Connects after the first publish; only future events arrive.
    let mut late = notifier.subscribe();
    let second = sample_order("Bela");
    notifier.publish(OrderEvent::OrderCreated(second.clone()));

    assert_eq!(early.recv().await.unwrap().order().id, first.id);
    assert_eq!(early.recv().await.unwrap().order().id, second.id);
    assert_eq!(late.recv().await.unwrap().order().id, second.id);
    assert!(late.try_recv().is_err());
}

#[tokio::test]
async fn publish_without_subscribers_is_dropped() {
    let notifier = Notifier::new();
    assert_eq!(notifier.subscriber_count(), 0);
    // Must not fail the publishing operation.
    notifier.publish(OrderEvent::OrderCreated(sample_order("Amit")));

    let mut rx = notifier.subscribe();
    let order = sample_order("Bela");
    notifier.publish(OrderEvent::OrderStatusChanged(order.clone()));
    assert_eq!(rx.recv().await.unwrap().order().id, order.id);
}

#[test]
fn events_serialize_with_tagged_wire_format() {
    let order = sample_order("Amit");
    let created = serde_json::to_value(OrderEvent::OrderCreated(order.clone())).unwrap();
    assert_eq!(created["event"], "orderCreated");
    assert_eq!(created["order"]["customerName"], "Amit");
    assert_eq!(created["order"]["orderType"], "delivery");
    assert_eq!(created["order"]["status"], "incoming");
    assert_eq!(created["order"]["total"], 400.0);
    assert!(created["order"]["createdAt"].is_string());

    let changed = serde_json::to_value(OrderEvent::OrderStatusChanged(order)).unwrap();
    assert_eq!(changed["event"], "orderStatusChanged");
}
