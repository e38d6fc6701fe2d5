//! Scenario testing with mandatory oracles.
//!
//! A scenario is a timed script of protocol lines fed through the real
//! [`smartlight_app::Runtime`] on a virtual clock. It cannot be run without
//! an oracle that checks the resulting [`World`].
//!
//! ```text
//! Scenario::new("departure")
//!     .line("location 0 0")
//!     .line(ownership_line(&[alice]))
//!     .line("sensor_occupied s-alice true")
//!     .wait(Duration::from_secs(1))
//!     .line("sensor_occupied s-alice false")
//!     .oracle(oracle::light_free())
//!     .run()
//! ```

mod builder;
pub mod oracle;
mod world;

pub use builder::{RunnableScenario, Scenario};
pub use world::World;

/// Verification run against the final [`World`].
pub type OracleFn = Box<dyn Fn(&World) -> Result<(), String>>;
