use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::clients::actor_client::ActorClient;
use crate::config::ComandaConfig;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{
    validate_transition, NewOrder, Order, OrderCreate, OrderStatistics, OrderStatus, OrderUpdate,
};
use crate::order_actor::OrderError;
use crate::urgency::Clock;

/// Client for interacting with the order store actor.
///
/// The lifecycle state machine is enforced here, before a request reaches the
/// store; the store's entity hooks re-validate every mutation as a second
/// line of defense. Timestamps are stamped from the injected [`Clock`] and
/// delivery deadlines derived from [`ComandaConfig`], so the store itself
/// never reads ambient time.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    config: ComandaConfig,
    clock: Arc<dyn Clock>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, config: ComandaConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner,
            config,
            clock,
        }
    }

    /// Creates a new order in `Pending` state.
    ///
    /// Fails with [`OrderError::Validation`] if the item list is empty or the
    /// slot already has an active order of the same kind. For delivery
    /// orders, `expires_at` is stamped as `created_at` plus the configured
    /// delivery window.
    #[instrument(skip(self, new_order))]
    pub async fn create_order(&self, new_order: NewOrder) -> Result<Order, OrderError> {
        debug!(?new_order, "create_order called");

        if new_order.items.is_empty() {
            return Err(OrderError::Validation(
                "order must contain at least one item".to_string(),
            ));
        }

        // Slot uniqueness among active orders sharing the delivery flag
        let existing = self.list_orders().await?;
        if existing.iter().any(|order| {
            order.is_active()
                && order.slot_number == new_order.slot_number
                && order.is_delivery == new_order.is_delivery
        }) {
            return Err(OrderError::Validation(format!(
                "slot {} already has an active {} order",
                new_order.slot_number,
                if new_order.is_delivery { "delivery" } else { "dine-in" }
            )));
        }

        let created_at = self.clock.now();
        let expires_at = new_order
            .is_delivery
            .then(|| created_at + self.config.delivery_window());

        info!(
            slot_number = new_order.slot_number,
            is_delivery = new_order.is_delivery,
            "Sending create_order to actor"
        );
        let payload = OrderCreate {
            slot_number: new_order.slot_number,
            is_delivery: new_order.is_delivery,
            items: new_order.items,
            notes: new_order.notes,
            created_at,
            expires_at,
            assigned_user: new_order.assigned_user,
        };
        let id = self.inner.create(payload).await.map_err(Self::map_error)?;
        self.get(id.clone())
            .await?
            .ok_or(OrderError::NotFound(id))
    }

    /// Moves the order to the next state on the happy path.
    ///
    /// Fails with [`OrderError::InvalidTransition`] if the order is already
    /// terminal (`delivered` or `expired`).
    #[instrument(skip(self))]
    pub async fn advance(&self, id: String) -> Result<Order, OrderError> {
        debug!("advance called");
        let order = self
            .get(id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.clone()))?;

        let Some(target) = order.status.next() else {
            return Err(OrderError::InvalidTransition(format!(
                "order {} is terminal ({})",
                id, order.status
            )));
        };

        info!(%id, from = %order.status, to = %target, "Advancing order");
        self.inner
            .update(id, OrderUpdate { status: target })
            .await
            .map_err(Self::map_error)
    }

    /// Explicit transition to an arbitrary state, used by administrative
    /// review.
    ///
    /// Fails with [`OrderError::InvalidTransition`] if `target` is `expired`
    /// (clients may not force-expire), if the order is terminal, or if the
    /// move is not strictly forward.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: String, target: OrderStatus) -> Result<Order, OrderError> {
        debug!("set_status called");
        let order = self
            .get(id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.clone()))?;

        validate_transition(order.status, target).map_err(OrderError::InvalidTransition)?;

        info!(%id, from = %order.status, to = %target, "Setting order status");
        self.inner
            .update(id, OrderUpdate { status: target })
            .await
            .map_err(Self::map_error)
    }

    /// Returns every persisted order regardless of status; callers apply
    /// expiration evaluation and filtering themselves.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.inner.list().await.map_err(Self::map_error)
    }

    /// Aggregate counts as currently persisted. These may lag the locally
    /// evaluated expiration tag by up to one polling interval.
    pub async fn statistics(&self) -> Result<OrderStatistics, OrderError> {
        let orders = self.list_orders().await?;
        let mut stats = OrderStatistics {
            pending: 0,
            in_progress: 0,
            ready: 0,
            delivered: 0,
            total: orders.len(),
        };
        for order in &orders {
            match order.status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::InProgress => stats.in_progress += 1,
                OrderStatus::Ready => stats.ready += 1,
                OrderStatus::Delivered => stats.delivered += 1,
                OrderStatus::Expired => {}
            }
        }
        Ok(stats)
    }

    /// Persists the automatic `Expired` transition for an order whose
    /// deadline has passed.
    ///
    /// This is the only write path that may name `Expired` as a target; the
    /// caller ([`chef_view::poller`](crate::chef_view::poller)) establishes
    /// time legality through
    /// [`evaluate_expiration`](crate::urgency::evaluator::evaluate_expiration)
    /// first, and the entity re-validates the order's shape in the store.
    #[instrument(skip(self))]
    pub(crate) async fn mark_order_expired(&self, id: String) -> Result<Order, OrderError> {
        info!(%id, "Expiring order");
        self.inner
            .update(
                id,
                OrderUpdate {
                    status: OrderStatus::Expired,
                },
            )
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Custom(msg) => OrderError::Validation(msg),
            other => OrderError::Transport(other.to_string()),
        }
    }
}
