//! Runtime orchestration: system wiring and observability setup.

pub mod system;
pub mod tracing;

pub use system::ComandaSystem;
pub use tracing::setup_tracing;
