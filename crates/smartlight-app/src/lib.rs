//! Application layer for the smart light engine
//!
//! A generic serial command loop that owns the [`smartlight_core::Engine`]
//! and talks to the outside world only through a [`Driver`], so the same
//! orchestration runs against stdin/stdout in production and against a
//! virtual clock in simulation.
//!
//! # Components
//!
//! - [`Driver`]: Trait for platform-specific I/O and time
//! - [`Runtime`]: The serial loop interleaving input lines and debounce
//!   deadlines
//! - [`RuntimeStats`]: Counters kept by the runtime

mod driver;
mod runtime;

pub use driver::{Driver, Input};
pub use runtime::{Runtime, RuntimeStats};
