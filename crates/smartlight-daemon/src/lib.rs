//! Smart light daemon
//!
//! Runs the arbitration engine as a child process of the light client:
//! commands arrive on stdin, directive groups leave on stdout and logs go to
//! stderr so they never mix with protocol output.
//!
//! # Components
//!
//! - [`Args`]: Command line options and the engine configuration they build
//! - [`StdioDriver`]: [`smartlight_app::Driver`] over any async line reader
//!   and writer
//! - [`DaemonError`]: I/O failures that end the daemon

mod cli;
mod error;
mod stdio;

pub use cli::Args;
pub use error::DaemonError;
pub use stdio::StdioDriver;
