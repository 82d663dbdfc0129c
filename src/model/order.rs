use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::OrderStatus;

/// A kitchen order (comanda) tied to a table or delivery slot.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity)
/// trait, allowing it to be managed by a
/// [`ResourceActor`](crate::framework::ResourceActor). Creation-time
/// invariants (non-empty items, `expires_at` iff delivery) are checked in the
/// entity implementation; status changes go through
/// [`on_update`](crate::framework::ActorEntity::on_update) re-validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Table number for dine-in, delivery slot otherwise. Unique among
    /// active orders sharing the same `is_delivery` flag.
    pub slot_number: u32,
    pub is_delivery: bool,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Deadline for delivery orders, `created_at` plus the configured
    /// delivery window. `Some` iff `is_delivery`.
    pub expires_at: Option<DateTime<Utc>>,
    /// Staff member who captured the order. Back-reference only.
    pub assigned_user: Option<String>,
}

impl Order {
    /// Active orders are the chef view's working set.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Whether the automatic expiration path may still apply to this order.
    pub fn can_expire(&self) -> bool {
        self.is_delivery && self.expires_at.is_some() && !self.status.is_terminal()
    }
}

/// A single line of an order. Immutable once the order is created; editing
/// items requires a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price_with_tax: f64,
}

/// Caller-facing payload for creating a new order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub slot_number: u32,
    pub is_delivery: bool,
    pub items: Vec<OrderItem>,
    pub notes: Option<String>,
    pub assigned_user: Option<String>,
}

/// Store-level create payload. Assembled by
/// [`OrderClient`](crate::clients::OrderClient), which stamps `created_at`
/// from the injected clock and derives `expires_at` from configuration.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub slot_number: u32,
    pub is_delivery: bool,
    pub items: Vec<OrderItem>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub assigned_user: Option<String>,
}

/// Store-level update payload. Status is the only mutable field of a
/// persisted order.
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}

/// Aggregate counts as currently persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatistics {
    pub pending: usize,
    pub in_progress: usize,
    pub ready: usize,
    pub delivered: usize,
    /// Every persisted order, expired ones included.
    pub total: usize,
}
