//! Error types for the order store and its client.

use thiserror::Error;

/// Errors that can occur during order operations.
///
/// Validation and transition errors are synchronous and non-retryable; the
/// caller must correct the request. Transport errors during polling are
/// recovered automatically on the next scheduled tick.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order data provided is invalid (e.g., no items, occupied slot).
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The attempted status change violates the lifecycle state machine.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// The order store could not be reached or failed mid-request.
    #[error("Order store transport error: {0}")]
    Transport(String),
}
