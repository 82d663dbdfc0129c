//! Pure expiration evaluation: map an order's timestamps and a reference
//! `now` to an urgency tag, and decide whether the automatic `Expired`
//! transition applies.
//!
//! Both functions are side-effect-free and must be re-run on every poll tick
//! or render; `now` advances continuously, so a cached tag is a stale tag.

use chrono::{DateTime, Utc};

use crate::config::ComandaConfig;
use crate::model::{Order, OrderStatus};
use serde::Serialize;

/// Derived label describing how close a delivery order is to its deadline.
///
/// Non-delivery orders are always [`Normal`](UrgencyTag::Normal); no
/// expiration concept applies to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UrgencyTag {
    Normal,
    Warning,
    Critical,
    Expired,
}

/// Tags an order for display at the given reference time.
///
/// A delivery order past its deadline tags [`UrgencyTag::Expired`] even if
/// the persisted status has not caught up yet; the display must never show an
/// overdue order as on-time just because the background sweep lagged.
pub fn urgency_tag(order: &Order, now: DateTime<Utc>, config: &ComandaConfig) -> UrgencyTag {
    if !order.is_delivery {
        return UrgencyTag::Normal;
    }
    let Some(expires_at) = order.expires_at else {
        return UrgencyTag::Normal;
    };

    let remaining = expires_at - now;
    if remaining <= chrono::Duration::zero() {
        UrgencyTag::Expired
    } else if remaining <= config.critical_threshold() {
        UrgencyTag::Critical
    } else if remaining <= config.warning_threshold() {
        UrgencyTag::Warning
    } else {
        UrgencyTag::Normal
    }
}

/// Decides whether the automatic `Expired` transition applies to `order` at
/// `now`. This is the only path in the system that produces
/// [`OrderStatus::Expired`].
///
/// Returns `Some(OrderStatus::Expired)` iff the order is a delivery order
/// with a deadline at or before `now` and is not already terminal; `None`
/// otherwise (including for delivered orders, which can no longer expire).
pub fn evaluate_expiration(order: &Order, now: DateTime<Utc>) -> Option<OrderStatus> {
    if !order.can_expire() {
        return None;
    }
    let expires_at = order.expires_at?;
    if now >= expires_at {
        Some(OrderStatus::Expired)
    } else {
        None
    }
}
