//! The live chef view: projection of the current order snapshot into the
//! display model, and the single-flight polling loop that keeps it fresh.

pub mod poller;
pub mod projection;

pub use poller::*;
pub use projection::*;
