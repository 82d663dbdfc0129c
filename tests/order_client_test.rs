use comanda::clients::{ActorClient, OrderClient};
use comanda::config::ComandaConfig;
use comanda::framework::mock::MockClient;
use comanda::model::{NewOrder, Order, OrderItem, OrderStatus};
use comanda::order_actor::OrderError;
use comanda::urgency::ManualClock;
use chrono::{TimeZone, Utc};
use std::sync::Arc;

/// Client tests with a mocked store: the client's own validation and state
/// machine checks are exercised without a running actor.
///
/// Pattern: Client + Mock
/// - Real `OrderClient` (tests the enforcement logic on the caller side)
/// - `MockClient` standing in for the store (scripts exactly the traffic
///   the client is allowed to produce)

fn client_for(mock: &MockClient<Order>) -> OrderClient {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 3, 1, 18, 0, 0).unwrap());
    OrderClient::new(mock.client(), ComandaConfig::default(), Arc::new(clock))
}

fn stored_order(id: &str, slot_number: u32, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        slot_number,
        is_delivery: false,
        status,
        items: vec![OrderItem {
            name: "paella".to_string(),
            quantity: 1,
            unit_price_with_tax: 14.00,
        }],
        notes: None,
        created_at: Utc.with_ymd_and_hms(2026, 3, 1, 17, 45, 0).unwrap(),
        expires_at: None,
        assigned_user: None,
    }
}

#[tokio::test]
async fn empty_items_are_rejected_before_any_store_traffic() {
    let mock = MockClient::<Order>::new();
    let client = client_for(&mock);

    let result = client
        .create_order(NewOrder {
            slot_number: 4,
            is_delivery: false,
            items: vec![],
            notes: None,
            assigned_user: None,
        })
        .await;

    assert!(matches!(result, Err(OrderError::Validation(_))));
    // no expectations were queued, and none were needed
    mock.verify();
}

#[tokio::test]
async fn occupied_slot_is_rejected_after_the_listing_check() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_list()
        .return_ok(vec![stored_order("order_1", 4, OrderStatus::InProgress)]);
    let client = client_for(&mock);

    let result = client
        .create_order(NewOrder {
            slot_number: 4,
            is_delivery: false,
            items: vec![OrderItem {
                name: "paella".to_string(),
                quantity: 1,
                unit_price_with_tax: 14.00,
            }],
            notes: None,
            assigned_user: None,
        })
        .await;

    assert!(matches!(result, Err(OrderError::Validation(_))));
    // the listing was consumed; no create request followed
    mock.verify();
}

#[tokio::test]
async fn advance_on_a_terminal_order_sends_no_update() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_get("order_1".to_string())
        .return_ok(Some(stored_order("order_1", 4, OrderStatus::Delivered)));
    let client = client_for(&mock);

    let result = client.advance("order_1".to_string()).await;

    assert!(matches!(result, Err(OrderError::InvalidTransition(_))));
    mock.verify();
}

#[tokio::test]
async fn set_status_refuses_the_expired_target() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_get("order_1".to_string())
        .return_ok(Some(stored_order("order_1", 4, OrderStatus::Ready)));
    let client = client_for(&mock);

    let result = client
        .set_status("order_1".to_string(), OrderStatus::Expired)
        .await;

    assert!(matches!(result, Err(OrderError::InvalidTransition(_))));
    mock.verify();
}

#[tokio::test]
async fn store_failures_map_to_transport_errors() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_get("order_1".to_string())
        .return_err(comanda::framework::FrameworkError::ActorClosed);
    let client = client_for(&mock);

    let result = client.get("order_1".to_string()).await;

    assert!(matches!(result, Err(OrderError::Transport(_))));
    mock.verify();
}
