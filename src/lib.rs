#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Comanda
//!
//! > **Kitchen order lifecycle and urgency scheduling for a live chef view.**
//!
//! This crate tracks each kitchen order (comanda) from creation through
//! fulfillment, automatically expires time-boxed delivery orders, and
//! continuously re-ranks active orders by urgency for the chef display. It
//! combines a **resource-oriented store actor** with a **single-flight
//! polling loop** so one task owns the persisted orders and one task owns
//! the derived view.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Derived state is recomputed, never cached
//!
//! Urgency tags, rankings, and the chef view are always rebuilt from raw
//! timestamps and the current snapshot. Nothing derived is persisted, so
//! there is no cache to invalidate when `now` moves. And `now` always comes
//! from an injected [`Clock`](urgency::Clock), never from an ambient system
//! call, which keeps expiration logic deterministic under test.
//!
//! ### One writer per piece of state
//!
//! The store actor owns the order map and processes requests sequentially;
//! the poller owns the published snapshot and replaces it wholesale on each
//! successful refresh. Neither needs a lock.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! The store client surfaces a typed [`OrderError`](order_actor::OrderError)
//! (`NotFound`, `Validation`, `InvalidTransition`, `Transport`). Validation
//! and transition errors are synchronous and non-retryable; transport errors
//! during polling self-heal on the next tick.
//!
//! ### 2. Defense in Depth for Transitions
//! The lifecycle state machine is enforced in
//! [`OrderClient`](clients::OrderClient) before a request is sent, and
//! re-validated inside the actor by the entity's `on_update` hook. `Expired`
//! can only ever be produced by the time-based evaluation in
//! [`urgency::evaluator`]; no client request may name it as a target.
//!
//! ### 3. Single-Flight Polling
//! The chef view refreshes on a fixed cadence (default 3 s). Refreshes run
//! inline in the poller task, so two can never overlap; ticks that would
//! fire mid-refresh are skipped and duplicate manual requests are
//! suppressed. A failed refresh keeps the last good snapshot, marked stale.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic store actor: [`ResourceActor`](framework::ResourceActor),
//! [`ResourceClient`](framework::ResourceClient), and the
//! [`mock`](framework::mock) client for isolation tests.
//!
//! ### 2. The Domain ([`model`], [`order_actor`])
//! [`Order`](model::Order) and its DTOs, the
//! [`OrderStatus`](model::OrderStatus) transition rules, and the entity
//! implementation that binds them to the store actor.
//!
//! ### 3. The Interface ([`clients`])
//! [`OrderClient`](clients::OrderClient) implements the store contract:
//! create, advance, set-status, list, delete, statistics.
//!
//! ### 4. The Scheduler ([`urgency`], [`chef_view`])
//! The injected clock, the pure expiration evaluator, the ranking
//! comparator, the projection, and the polling loop that ties them together.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`ComandaSystem`](lifecycle::ComandaSystem) spins everything up and shuts
//! it down gracefully; [`setup_tracing`](lifecycle::setup_tracing)
//! configures structured logging.
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! use comanda::config::ComandaConfig;
//! use comanda::lifecycle::ComandaSystem;
//! use comanda::model::{NewOrder, OrderItem};
//!
//! let system = ComandaSystem::new(ComandaConfig::default());
//!
//! let order = system.orders.create_order(NewOrder {
//!     slot_number: 4,
//!     is_delivery: true,
//!     items: vec![OrderItem { name: "margherita".into(), quantity: 1, unit_price_with_tax: 9.50 }],
//!     notes: None,
//!     assigned_user: Some("marta".into()),
//! }).await?;
//!
//! let snapshot = system.chef_view.snapshot();
//! system.shutdown().await?;
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=info cargo test
//! ```

pub mod chef_view;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod urgency;
