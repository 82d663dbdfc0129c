//! Deterministic urgency ranking for the chef view.
//!
//! The comparator produces a total order over orders at a reference time:
//!
//! 1. status weight, descending: orders further from completion first
//!    (`pending > inProgress > ready`);
//! 2. whole minutes to expiration, ascending: among delivery orders the one
//!    racing the nearest deadline first; an order without a deadline compares
//!    as `i64::MAX` at this level, so at equal status weight a
//!    deadline-bearing order outranks an undeadlined one;
//! 3. whole minutes of age, descending: older orders first;
//! 4. creation time, descending: most recently created first.
//!
//! Applied as a stable sort: fully tied orders keep their incoming relative
//! order across repeated sorts.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::model::Order;

/// Whole minutes until the order's deadline; `i64::MAX` when it has none.
/// Negative once the deadline has passed, which correctly sorts an overdue
/// order ahead of one merely close to its deadline.
fn minutes_to_expiry(order: &Order, now: DateTime<Utc>) -> i64 {
    order
        .expires_at
        .map(|expires_at| (expires_at - now).num_minutes())
        .unwrap_or(i64::MAX)
}

/// Whole minutes elapsed since the order was created.
fn age_minutes(order: &Order, now: DateTime<Utc>) -> i64 {
    (now - order.created_at).num_minutes()
}

/// Compares two orders for display urgency at the given reference time.
/// `Ordering::Less` means `a` displays before `b`.
pub fn compare(a: &Order, b: &Order, now: DateTime<Utc>) -> Ordering {
    b.status
        .weight()
        .cmp(&a.status.weight())
        .then_with(|| minutes_to_expiry(a, now).cmp(&minutes_to_expiry(b, now)))
        .then_with(|| age_minutes(b, now).cmp(&age_minutes(a, now)))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Stable-sorts `orders` in place by display urgency.
pub fn sort_by_urgency(orders: &mut [Order], now: DateTime<Utc>) {
    orders.sort_by(|a, b| compare(a, b, now));
}
