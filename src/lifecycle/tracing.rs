//! # Observability & Tracing
//!
//! Structured logging setup for the whole subsystem.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: store startup, shutdown, and final state
//! - **Store operations**: Create, Get, List, Update, Delete with entity ids
//! - **Transitions**: every advance/set_status with `from`/`to` fields
//! - **Polling**: refresh failures (with the error), expiration sweeps,
//!   poller start/stop
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo test -- --nocapture
//!
//! # Show full payloads at function entry points
//! RUST_LOG=debug cargo test -- --nocapture
//!
//! # Filter to specific modules
//! RUST_LOG=comanda::chef_view=debug cargo test -- --nocapture
//! ```
//!
//! Functions log full payloads **once** at entry when running with
//! `RUST_LOG=debug`:
//!
//! ```rust,ignore
//! debug!(?new_order, "create_order called");
//! ```
//!
//! The `?` syntax records the variable using its `Debug` representation as a
//! structured field. All subsequent logs stay concise, showing only the
//! workflow hierarchy, e.g.:
//!
//! ```text
//! INFO Created order_id="order_1" size=1
//! INFO advance: Advancing order id="order_1" from=pending to=inProgress
//! WARN Refresh failed, keeping last snapshot error=...
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "advance:get")
        .init();
}
