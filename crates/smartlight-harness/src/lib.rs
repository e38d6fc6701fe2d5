//! Deterministic simulation harness for smart light testing.
//!
//! A virtual-clock implementation of the [`smartlight_app::Driver`] trait,
//! plus scenario tooling, so debounce windows of several seconds run in
//! microseconds and every run of a test sees exactly the same timeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod flicker;
pub mod scenario;
pub mod sim_driver;

pub use fixtures::{UserBuilder, ownership_line};
pub use flicker::FlickerSensor;
pub use sim_driver::{Emission, ScriptedLine, SimDriver};
