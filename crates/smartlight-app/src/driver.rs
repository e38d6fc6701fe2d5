//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::{future::Future, time::Instant};

use smartlight_proto::Directive;

/// What the driver produced while the runtime was waiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// One raw input line.
    Line(String),

    /// The requested deadline was reached before another line arrived.
    Deadline,

    /// Input is exhausted and no deadline was requested.
    Closed,
}

/// Abstracts I/O operations for the runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`crate::Runtime`] handles orchestration logic. This ensures the same
/// orchestration code runs in production and simulation.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input line or for `deadline`, whichever is first.
    ///
    /// Waiting for the deadline must not stop lines from being consumed.
    /// Once input is exhausted the driver still honours `deadline` and only
    /// reports [`Input::Closed`] when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails irrecoverably.
    fn next_input(
        &mut self,
        deadline: Option<Instant>,
    ) -> impl Future<Output = Result<Input, Self::Error>> + Send;

    /// Write one group of directives and flush it.
    ///
    /// # Errors
    ///
    /// Returns an error if the output is closed or the write fails.
    fn emit(
        &mut self,
        directives: &[Directive],
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Current time. Enables virtual time in simulation.
    fn now(&self) -> Instant;
}
