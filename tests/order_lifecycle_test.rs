use comanda::clients::{ActorClient, OrderClient};
use comanda::config::ComandaConfig;
use comanda::model::{NewOrder, OrderItem, OrderStatus};
use comanda::order_actor::OrderError;
use comanda::urgency::{Clock, ManualClock};
use chrono::{TimeZone, Utc};
use std::sync::Arc;

/// Lifecycle tests against a REAL store actor: creation validation, the
/// happy-path state machine, administrative transitions, and statistics.
///
/// Pattern: spawn the actor, drive everything through the typed client.

fn start() -> (OrderClient, ManualClock, tokio::task::JoinHandle<()>) {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 3, 1, 18, 0, 0).unwrap());
    let config = ComandaConfig {
        delivery_window_minutes: 20,
        ..ComandaConfig::default()
    };
    let (actor, client) = comanda::order_actor::new(config, Arc::new(clock.clone()));
    let handle = tokio::spawn(actor.run());
    (client, clock, handle)
}

fn items() -> Vec<OrderItem> {
    vec![
        OrderItem {
            name: "margherita".to_string(),
            quantity: 2,
            unit_price_with_tax: 9.50,
        },
        OrderItem {
            name: "tiramisu".to_string(),
            quantity: 1,
            unit_price_with_tax: 4.80,
        },
    ]
}

fn new_order(slot_number: u32, is_delivery: bool) -> NewOrder {
    NewOrder {
        slot_number,
        is_delivery,
        items: items(),
        notes: None,
        assigned_user: Some("marta".to_string()),
    }
}

#[tokio::test]
async fn create_rejects_empty_items_and_persists_nothing() {
    let (client, _clock, handle) = start();

    let result = client
        .create_order(NewOrder {
            items: vec![],
            ..new_order(4, false)
        })
        .await;
    assert!(matches!(result, Err(OrderError::Validation(_))));

    // no order was persisted
    let all = client.list_orders().await.unwrap();
    assert!(all.is_empty());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn delivery_orders_get_a_deadline_dine_in_does_not() {
    let (client, clock, handle) = start();

    let delivery = client.create_order(new_order(1, true)).await.unwrap();
    assert_eq!(delivery.status, OrderStatus::Pending);
    assert_eq!(
        delivery.expires_at,
        Some(clock.now() + chrono::Duration::minutes(20))
    );

    let dine_in = client.create_order(new_order(4, false)).await.unwrap();
    assert_eq!(dine_in.expires_at, None);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn slot_is_unique_among_active_orders_of_the_same_kind() {
    let (client, _clock, handle) = start();

    client.create_order(new_order(4, false)).await.unwrap();

    // same slot, same kind: rejected while the first is active
    let result = client.create_order(new_order(4, false)).await;
    assert!(matches!(result, Err(OrderError::Validation(_))));

    // same slot number is fine for the other kind
    client.create_order(new_order(4, true)).await.unwrap();

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn slot_frees_up_once_the_order_is_terminal() {
    let (client, _clock, handle) = start();

    let first = client.create_order(new_order(4, false)).await.unwrap();
    client
        .set_status(first.id.clone(), OrderStatus::Delivered)
        .await
        .unwrap();

    client.create_order(new_order(4, false)).await.unwrap();

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn advance_walks_the_happy_path_and_stops_at_terminal() {
    let (client, _clock, handle) = start();

    let order = client.create_order(new_order(2, false)).await.unwrap();

    let order = client.advance(order.id).await.unwrap();
    assert_eq!(order.status, OrderStatus::InProgress);
    let order = client.advance(order.id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Ready);
    let order = client.advance(order.id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Delivered);

    // delivered is terminal: advance fails and the status stays put
    let result = client.advance(order.id.clone()).await;
    assert!(matches!(result, Err(OrderError::InvalidTransition(_))));
    let unchanged = client.get(order.id).await.unwrap().unwrap();
    assert_eq!(unchanged.status, OrderStatus::Delivered);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn set_status_allows_forward_jumps_only() {
    let (client, _clock, handle) = start();

    let order = client.create_order(new_order(3, false)).await.unwrap();

    // pending -> ready skips inProgress; administrative review may do that
    let order = client
        .set_status(order.id, OrderStatus::Ready)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Ready);

    // going back is not a forward transition
    let result = client
        .set_status(order.id.clone(), OrderStatus::Pending)
        .await;
    assert!(matches!(result, Err(OrderError::InvalidTransition(_))));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn clients_may_not_force_expire() {
    let (client, _clock, handle) = start();

    let order = client.create_order(new_order(1, true)).await.unwrap();

    let result = client
        .set_status(order.id.clone(), OrderStatus::Expired)
        .await;
    assert!(matches!(result, Err(OrderError::InvalidTransition(_))));

    let unchanged = client.get(order.id).await.unwrap().unwrap();
    assert_eq!(unchanged.status, OrderStatus::Pending);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn missing_orders_surface_not_found() {
    let (client, _clock, handle) = start();

    let result = client.advance("order_99".to_string()).await;
    assert_eq!(result, Err(OrderError::NotFound("order_99".to_string())));

    let result = client.delete("order_99".to_string()).await;
    assert_eq!(result, Err(OrderError::NotFound("order_99".to_string())));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn statistics_count_persisted_statuses() {
    let (client, _clock, handle) = start();

    let a = client.create_order(new_order(1, false)).await.unwrap();
    let b = client.create_order(new_order(2, false)).await.unwrap();
    client.create_order(new_order(3, false)).await.unwrap();

    client.advance(a.id).await.unwrap();
    let b = client.advance(b.id).await.unwrap();
    let b = client.advance(b.id).await.unwrap();
    client
        .set_status(b.id, OrderStatus::Delivered)
        .await
        .unwrap();

    let stats = client.statistics().await.unwrap();
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.ready, 0);
    assert_eq!(stats.delivered, 1);
    assert_eq!(stats.total, 3);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn delete_is_an_administrative_override() {
    let (client, _clock, handle) = start();

    let order = client.create_order(new_order(5, false)).await.unwrap();
    client.delete(order.id.clone()).await.unwrap();

    let gone = client.get(order.id).await.unwrap();
    assert!(gone.is_none());

    drop(client);
    handle.await.unwrap();
}
