//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables
//! [`Order`] to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Creation invariants and update re-validation both live here, inside the
//! actor, so no request path can slip an illegal order or transition past the
//! store even if a client skipped its own checks.

use crate::framework::ActorEntity;
use crate::model::{validate_transition, Order, OrderCreate, OrderStatus, OrderUpdate};

impl ActorEntity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type UpdateParams = OrderUpdate;

    /// Creates a new pending Order, checking creation invariants:
    /// a non-empty item list and `expires_at` present iff `is_delivery`.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String> {
        if params.items.is_empty() {
            return Err("order must contain at least one item".to_string());
        }
        if params.is_delivery != params.expires_at.is_some() {
            return Err("expiresAt must be set exactly for delivery orders".to_string());
        }
        Ok(Self {
            id,
            slot_number: params.slot_number,
            is_delivery: params.is_delivery,
            status: OrderStatus::Pending,
            items: params.items,
            notes: params.notes,
            created_at: params.created_at,
            expires_at: params.expires_at,
            assigned_user: params.assigned_user,
        })
    }

    /// Re-validates the requested status change against the current state.
    ///
    /// `Expired` is accepted only for non-terminal delivery orders; the time
    /// legality of that transition was already established by
    /// [`evaluate_expiration`](crate::urgency::evaluator::evaluate_expiration)
    /// before the request was issued. Everything else runs through the
    /// forward-transition table.
    fn on_update(&mut self, update: Self::UpdateParams) -> Result<(), String> {
        if update.status == OrderStatus::Expired {
            if !self.can_expire() {
                return Err(format!(
                    "invalid transition: {} -> {} (only active delivery orders can expire)",
                    self.status, update.status
                ));
            }
        } else {
            validate_transition(self.status, update.status)?;
        }
        self.status = update.status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderItem;
    use chrono::{Duration, TimeZone, Utc};

    fn create_params(is_delivery: bool, items: Vec<OrderItem>) -> OrderCreate {
        let created_at = Utc.with_ymd_and_hms(2026, 3, 1, 19, 30, 0).unwrap();
        OrderCreate {
            slot_number: 3,
            is_delivery,
            items,
            notes: Some("no onion".to_string()),
            created_at,
            expires_at: is_delivery.then(|| created_at + Duration::minutes(30)),
            assigned_user: Some("marta".to_string()),
        }
    }

    fn one_item() -> Vec<OrderItem> {
        vec![OrderItem {
            name: "bravas".to_string(),
            quantity: 2,
            unit_price_with_tax: 5.80,
        }]
    }

    #[test]
    fn creation_rejects_empty_items() {
        let result = Order::from_create_params("order_1".to_string(), create_params(false, vec![]));
        assert!(result.is_err());
    }

    #[test]
    fn creation_rejects_mismatched_expiry() {
        let mut params = create_params(true, one_item());
        params.expires_at = None;
        assert!(Order::from_create_params("order_1".to_string(), params).is_err());

        let mut params = create_params(false, one_item());
        params.expires_at = Some(params.created_at + Duration::minutes(30));
        assert!(Order::from_create_params("order_1".to_string(), params).is_err());
    }

    #[test]
    fn new_orders_start_pending() {
        let order =
            Order::from_create_params("order_1".to_string(), create_params(true, one_item()))
                .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.expires_at.is_some());
    }

    #[test]
    fn update_walks_the_happy_path() {
        let mut order =
            Order::from_create_params("order_1".to_string(), create_params(false, one_item()))
                .unwrap();
        for status in [
            OrderStatus::InProgress,
            OrderStatus::Ready,
            OrderStatus::Delivered,
        ] {
            order.on_update(OrderUpdate { status }).unwrap();
            assert_eq!(order.status, status);
        }
        // terminal now: nothing further is legal
        assert!(order
            .on_update(OrderUpdate {
                status: OrderStatus::Pending
            })
            .is_err());
    }

    #[test]
    fn expired_is_rejected_for_dine_in_orders() {
        let mut order =
            Order::from_create_params("order_1".to_string(), create_params(false, one_item()))
                .unwrap();
        assert!(order
            .on_update(OrderUpdate {
                status: OrderStatus::Expired
            })
            .is_err());
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn expired_is_accepted_for_active_delivery_orders() {
        let mut order =
            Order::from_create_params("order_1".to_string(), create_params(true, one_item()))
                .unwrap();
        order
            .on_update(OrderUpdate {
                status: OrderStatus::Expired,
            })
            .unwrap();
        assert_eq!(order.status, OrderStatus::Expired);

        // and it is terminal from here on
        assert!(order
            .on_update(OrderUpdate {
                status: OrderStatus::Expired
            })
            .is_err());
    }
}
