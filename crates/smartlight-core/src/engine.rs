//! Arbitration engine for a single shared light.
//!
//! # Architecture: Action-Based State Machine
//!
//! - Methods accept time as a parameter (the engine never reads a clock)
//! - Methods return `Vec<EngineAction>` for the driver to execute
//! - Rejected commands return an [`EngineError`] and change nothing
//!
//! # Timing
//!
//! Arrivals, reloads and claims commit immediately. A sensor reporting
//! `false` schedules its outcome [`EngineConfig::debounce`] later instead,
//! so a brief flicker never shows up on the light. Any later decision
//! cancels the scheduled one.
//!
//! The driver must call [`Engine::tick`] before [`Engine::handle`] for each
//! input, and whenever [`Engine::next_deadline`] passes without input. A
//! window that elapsed before a line arrived therefore commits before that
//! line is processed.

use std::time::{Duration, Instant};

use smartlight_proto::{Command, Directive, LightPosition, UserRecord, UserType};
use tracing::{debug, info};

use crate::{
    debounce::Debounce,
    directory::Directory,
    emitter::{Emitter, Palette},
    error::{ClaimRejection, EngineError},
    occupancy::Occupancy,
    resolver::{self, Continuity},
};

/// Actions returned by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineAction {
    /// Write these directives to the actuator and flush them as one group.
    Emit(Vec<Directive>),
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How long a departure waits before it is committed.
    pub debounce: Duration,
    /// Colors used while the light is free.
    pub palette: Palette,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { debounce: Duration::from_secs(3), palette: Palette::default() }
    }
}

/// Light ownership state machine.
///
/// Owns the directory, occupancy, committed state and the pending debounced
/// commit. All mutation goes through [`Engine::handle`] and [`Engine::tick`].
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    light: Option<LightPosition>,
    directory: Directory,
    occupancy: Occupancy,
    emitter: Emitter,
    debounce: Debounce,
}

impl Engine {
    /// Create an engine with an empty directory and a dark, free light.
    pub fn new(config: EngineConfig) -> Self {
        let emitter = Emitter::new(config.palette);
        Self {
            config,
            light: None,
            directory: Directory::new(),
            occupancy: Occupancy::new(),
            emitter,
            debounce: Debounce::new(),
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Committed owner of the light.
    pub fn winner(&self) -> Option<&UserRecord> {
        self.emitter.winner()
    }

    /// Committed ambient presence.
    pub fn is_present(&self) -> bool {
        self.emitter.is_present()
    }

    /// Light position, once `location` has been received.
    pub fn light(&self) -> Option<LightPosition> {
        self.light
    }

    /// Current directory snapshot.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Current sensor occupancy.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// When the pending debounced commit falls due, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Handle one parsed command.
    ///
    /// # Errors
    ///
    /// Returns an error if an ownership payload violates directory
    /// invariants or a claim is refused. State is unchanged in both cases.
    pub fn handle(
        &mut self,
        command: Command,
        now: Instant,
    ) -> Result<Vec<EngineAction>, EngineError> {
        match command {
            Command::Location(position) => {
                self.set_location(position);
                Ok(Vec::new())
            },
            Command::Ownership(records) => self.reload(records, now),
            Command::SensorOccupied { sensor_id, occupied } => {
                Ok(self.sensor_changed(sensor_id, occupied, now))
            },
            Command::ClaimUser3 { user_id } => self.claim(&user_id, now),
        }
    }

    /// Commit the pending debounced decision if its deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Vec<EngineAction> {
        match self.debounce.take_due(now) {
            Some(pending) => {
                debug!(deadline = ?pending.deadline, "debounce window elapsed");
                self.apply(pending.candidate, false, now)
            },
            None => Vec::new(),
        }
    }

    /// Set the light position. Later calls replace it.
    pub fn set_location(&mut self, position: LightPosition) {
        info!(x = position.x, y = position.y, "light location set");
        self.light = Some(position);
    }

    /// Replace the directory and re-resolve immediately.
    ///
    /// A committed `USER3` owner keeps the light if it is still in the new
    /// directory and still present. The result is never debounced.
    ///
    /// # Errors
    ///
    /// Returns an error if the records contain duplicate user or sensor ids.
    pub fn reload(
        &mut self,
        records: Vec<UserRecord>,
        now: Instant,
    ) -> Result<Vec<EngineAction>, EngineError> {
        let directory = Directory::from_records(records)?;

        let retained = self
            .emitter
            .winner()
            .filter(|winner| winner.user_type == UserType::User3)
            .map(|winner| winner.user_id.clone());

        self.directory = directory;
        // A previous owner may be gone from the new directory; make sure the
        // next commit rewrites the light instead of matching stale state.
        if self.emitter.winner().is_some() {
            self.emitter.invalidate();
        }
        info!(users = self.directory.len(), retained_user3 = ?retained, "directory reloaded");

        let continuity = Continuity { retained_user3: retained.as_deref(), committed: None };
        let winner = resolver::resolve(&self.directory, &self.occupancy, continuity).cloned();
        Ok(self.apply(winner, false, now))
    }

    /// Record a sensor reading and re-resolve.
    ///
    /// Arrivals commit immediately; departures go through the debounce
    /// window.
    pub fn sensor_changed(
        &mut self,
        sensor_id: String,
        occupied: bool,
        now: Instant,
    ) -> Vec<EngineAction> {
        if self.directory.by_sensor(&sensor_id).is_none() {
            debug!(sensor_id = %sensor_id, "sensor not in directory, keeping reading for later reloads");
        }
        self.occupancy.set(sensor_id, occupied);

        let committed = self.emitter.winner().map(|winner| winner.user_id.as_str());
        let continuity = Continuity { retained_user3: None, committed };
        let winner = resolver::resolve(&self.directory, &self.occupancy, continuity).cloned();
        self.apply(winner, !occupied, now)
    }

    /// Explicit `USER3` claim.
    ///
    /// Succeeds when the light is free, or held by a `USER3` that is
    /// strictly farther from the light than the claimant. A claim by the
    /// current owner refreshes its presence. Accepted claims commit
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ClaimRejected`] with the reason.
    pub fn claim(&mut self, user_id: &str, now: Instant) -> Result<Vec<EngineAction>, EngineError> {
        let reject = |reason| EngineError::ClaimRejected { user_id: user_id.to_string(), reason };

        let claimant =
            self.directory.user(user_id).ok_or_else(|| reject(ClaimRejection::UnknownUser))?;
        if claimant.user_type != UserType::User3 {
            return Err(reject(ClaimRejection::NotUser3(claimant.user_type)));
        }

        if let Some(incumbent) = self.emitter.winner() {
            if incumbent.user_type != UserType::User3 {
                return Err(reject(ClaimRejection::Outranked(incumbent.user_type)));
            }
            if incumbent.user_id != claimant.user_id {
                let light = self.light.ok_or_else(|| reject(ClaimRejection::LocationUnset))?;
                if light.priority(incumbent) <= light.priority(claimant) {
                    return Err(reject(ClaimRejection::IncumbentCloser {
                        incumbent: incumbent.user_id.clone(),
                    }));
                }
            }
        }

        let claimant = claimant.clone();
        info!(user_id, "user3 claim accepted");
        // A claim implies the claimant is present.
        self.occupancy.set(claimant.sensor_id.clone(), true);
        Ok(self.apply(Some(claimant), false, now))
    }

    fn apply(
        &mut self,
        candidate: Option<UserRecord>,
        delay: bool,
        now: Instant,
    ) -> Vec<EngineAction> {
        if let Some(superseded) = self.debounce.cancel() {
            debug!(deadline = ?superseded.deadline, "pending commit superseded");
        }

        let present = self.occupancy.any_present();
        if self.emitter.matches(candidate.as_ref(), present) {
            debug!(present, "light state unchanged");
            return Vec::new();
        }

        if delay {
            let deadline = now + self.config.debounce;
            debug!(
                candidate = ?candidate.as_ref().map(|user| user.user_id.as_str()),
                ?deadline,
                "departure deferred"
            );
            self.debounce.schedule(candidate, deadline);
            return Vec::new();
        }

        let user_id = candidate.as_ref().map(|user| user.user_id.clone());
        match self.emitter.commit(candidate, present) {
            Some(directives) => {
                info!(winner = ?user_id, present, "light state committed");
                vec![EngineAction::Emit(directives)]
            },
            None => Vec::new(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
