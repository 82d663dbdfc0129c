//! Order lifecycle states and the transition rules between them.
//!
//! The happy path is linear: `Pending → InProgress → Ready → Delivered`.
//! `Expired` is a side exit for delivery orders that is only ever produced by
//! the time-based evaluation in [`crate::urgency::evaluator`]; no client
//! request may name it as a target.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a kitchen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Ready,
    Delivered,
    Expired,
}

impl OrderStatus {
    /// Terminal orders are immutable; no further transition is legal.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Expired)
    }

    /// Successor on the happy path, `None` for terminal states.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::InProgress),
            OrderStatus::InProgress => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Expired => None,
        }
    }

    /// Display weight: orders further from completion rank as more urgent.
    pub fn weight(self) -> u8 {
        match self {
            OrderStatus::Pending => 3,
            OrderStatus::InProgress => 2,
            OrderStatus::Ready => 1,
            OrderStatus::Delivered | OrderStatus::Expired => 0,
        }
    }

    /// Position in the happy-path sequence; `None` for `Expired`, which sits
    /// outside the linear progression.
    fn sequence_index(self) -> Option<u8> {
        match self {
            OrderStatus::Pending => Some(0),
            OrderStatus::InProgress => Some(1),
            OrderStatus::Ready => Some(2),
            OrderStatus::Delivered => Some(3),
            OrderStatus::Expired => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "inProgress",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Expired => "expired",
        };
        f.write_str(name)
    }
}

/// Checks whether an explicit client transition `from → to` is legal.
///
/// Transitions are strictly forward along the happy path (skipping states is
/// allowed, e.g. an administrative `Pending → Delivered`). Terminal sources,
/// same-state moves, backward moves, and the `Expired` target are all
/// rejected; expiration has its own path through
/// [`crate::urgency::evaluator::evaluate_expiration`].
pub fn validate_transition(from: OrderStatus, to: OrderStatus) -> Result<(), String> {
    if from.is_terminal() {
        return Err(format!("order is terminal ({from})"));
    }
    if to == OrderStatus::Expired {
        return Err("expired can only be reached by time-based evaluation".to_string());
    }
    match (from.sequence_index(), to.sequence_index()) {
        (Some(f), Some(t)) if t > f => Ok(()),
        _ => Err(format!("{from} -> {to} is not a forward transition")),
    }
}
