//! Smart light arbitration core logic
//!
//! Pure state machine logic deciding which user owns a single shared light,
//! completely decoupled from I/O. This enables deterministic testing of the
//! timing rules (debounced departures) without real clocks.
//!
//! # Architecture
//!
//! The [`Engine`] owns every piece of mutable state: the user directory,
//! sensor occupancy, the committed light state and the single pending
//! debounced commit. Time is supplied by the caller on every call and
//! effects are returned as [`EngineAction`]s for a driver to execute.
//!
//! ```text
//!  line ─▶ Command ─▶ Engine::handle ─┬─▶ Directory / Occupancy
//!                                     ├─▶ resolve() ─▶ winner
//!                                     └─▶ apply(winner, delay)
//!                                             │
//!                           delay ◀───────────┴──────────▶ now
//!                             │                             │
//!                         Debounce ── Engine::tick ──▶ Emitter ─▶ EngineAction::Emit
//! ```
//!
//! # Components
//!
//! - [`directory`]: User records, replaced wholesale on reload
//! - [`occupancy`]: Per-sensor presence, survives reloads
//! - [`resolver`]: Tiered priority resolution
//! - [`debounce`]: Single-slot deferred commit
//! - [`emitter`]: Committed state and directive generation
//! - [`engine`]: The state machine tying them together
//! - [`error`]: Engine error types

pub mod debounce;
pub mod directory;
pub mod emitter;
pub mod engine;
pub mod error;
pub mod occupancy;
pub mod resolver;

pub use directory::Directory;
pub use emitter::{Emitter, Palette};
pub use engine::{Engine, EngineAction, EngineConfig};
pub use error::{ClaimRejection, DirectoryError, EngineError};
pub use occupancy::Occupancy;
pub use resolver::Continuity;
