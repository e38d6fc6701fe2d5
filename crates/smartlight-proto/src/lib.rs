//! Line protocol for the smart light arbitration engine.
//!
//! Input is one command per line: the first word names the command and the
//! remainder of the line is its argument. Output is a group of `set` lines
//! describing the light's new state, written and flushed together so an
//! actuator never observes half an update.
//!
//! ```text
//! location         <x> <y>
//! ownership        <json array of user records>
//! sensor_occupied  <sensor_id> <true|false>
//! user3            <user_id>
//!
//! set color        (r, g, b)
//! set lowlight     true|false
//! set userid       <user_id>
//! set state        USED|FREE
//! set usertype     USER1|USER2|USER3
//! ```
//!
//! The ownership payload is validated upstream. This crate still decodes it
//! into typed records, so a payload missing a field is rejected at the
//! boundary instead of failing later during arbitration.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod command;
pub mod directive;
pub mod errors;
pub mod record;

pub use color::Color;
pub use command::Command;
pub use directive::{Directive, LightState};
pub use errors::{ProtocolError, Result};
pub use record::{LightPosition, UserRecord, UserType};
