//! Projection of a raw order snapshot into the chef view display model.
//!
//! Derived data only: the projection is recomputed from the current snapshot
//! on every poll tick and never persisted, so there is no cached state to
//! invalidate.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::ComandaConfig;
use crate::model::{Order, OrderStatus};
use crate::urgency::{self, urgency_tag, UrgencyTag};

/// Aggregate counts per status among active orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub ready: usize,
    pub total: usize,
}

/// Aggregate counts per order kind among active orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KindCounts {
    pub dine_in: usize,
    pub delivery: usize,
}

/// One row of the chef view: the order plus its derived display annotations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChefOrder {
    pub order: Order,
    pub urgency: UrgencyTag,
    /// Whole minutes since the order was created.
    pub elapsed_minutes: i64,
    /// Whole minutes until the deadline, delivery orders only. Negative once
    /// the deadline has passed.
    pub remaining_minutes: Option<i64>,
}

/// The data the chef display renders: active orders sorted by urgency, plus
/// aggregate counts.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChefView {
    pub orders: Vec<ChefOrder>,
    pub status_counts: StatusCounts,
    pub kind_counts: KindCounts,
}

/// Builds the chef view from a raw order snapshot at the given reference
/// time.
///
/// Active means the *persisted* status is non-terminal; an overdue delivery
/// order whose `Expired` status has not been persisted yet stays in the list
/// tagged [`UrgencyTag::Expired`], so the display never shows it as on-time.
pub fn project(orders: &[Order], now: DateTime<Utc>, config: &ComandaConfig) -> ChefView {
    let mut active: Vec<Order> = orders
        .iter()
        .filter(|order| order.is_active())
        .cloned()
        .collect();
    urgency::sort_by_urgency(&mut active, now);

    let mut status_counts = StatusCounts::default();
    let mut kind_counts = KindCounts::default();
    for order in &active {
        match order.status {
            OrderStatus::Pending => status_counts.pending += 1,
            OrderStatus::InProgress => status_counts.in_progress += 1,
            OrderStatus::Ready => status_counts.ready += 1,
            OrderStatus::Delivered | OrderStatus::Expired => {}
        }
        if order.is_delivery {
            kind_counts.delivery += 1;
        } else {
            kind_counts.dine_in += 1;
        }
    }
    status_counts.total = active.len();

    let orders = active
        .into_iter()
        .map(|order| {
            let urgency = urgency_tag(&order, now, config);
            let elapsed_minutes = (now - order.created_at).num_minutes();
            let remaining_minutes = order.expires_at.map(|expires_at| (expires_at - now).num_minutes());
            ChefOrder {
                order,
                urgency,
                elapsed_minutes,
                remaining_minutes,
            }
        })
        .collect();

    ChefView {
        orders,
        status_counts,
        kind_counts,
    }
}
