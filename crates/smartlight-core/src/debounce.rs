//! Single-slot deferred commit.
//!
//! Departures are not applied right away: the candidate is parked here with
//! a deadline and committed by [`crate::Engine::tick`] once the deadline
//! passes. Any newer decision replaces or cancels the parked one, so at most
//! one commit is ever outstanding.

use std::time::Instant;

use smartlight_proto::UserRecord;

/// A parked commit.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCommit {
    /// Winner to commit, `None` for a free light.
    pub candidate: Option<UserRecord>,
    /// Earliest instant the commit may be applied.
    pub deadline: Instant,
}

/// Holds at most one [`PendingCommit`].
#[derive(Debug, Clone, Default)]
pub struct Debounce {
    pending: Option<PendingCommit>,
}

impl Debounce {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Park `candidate` until `deadline`, replacing anything already parked.
    pub fn schedule(&mut self, candidate: Option<UserRecord>, deadline: Instant) {
        self.pending = Some(PendingCommit { candidate, deadline });
    }

    /// Drop the parked commit. Returns it if there was one.
    pub fn cancel(&mut self) -> Option<PendingCommit> {
        self.pending.take()
    }

    /// Take the parked commit if its deadline has been reached.
    pub fn take_due(&mut self, now: Instant) -> Option<PendingCommit> {
        if self.pending.as_ref().is_some_and(|pending| now >= pending.deadline) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Deadline of the parked commit.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// The parked commit, if any.
    pub fn pending(&self) -> Option<&PendingCommit> {
        self.pending.as_ref()
    }
}
