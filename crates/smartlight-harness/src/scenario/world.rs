//! Final state of a scenario run.
//!
//! The World holds the engine after the script has drained, everything the
//! runtime wrote, and the runtime's counters, plus helpers for oracles.

use std::time::Duration;

use smartlight_app::RuntimeStats;
use smartlight_core::Engine;
use smartlight_proto::{Directive, LightState};

use crate::sim_driver::Emission;

/// Outcome of a scenario run.
#[derive(Debug)]
pub struct World {
    engine: Engine,
    emissions: Vec<Emission>,
    stats: RuntimeStats,
    finished_at: Duration,
}

impl World {
    pub(crate) fn new(
        engine: Engine,
        emissions: Vec<Emission>,
        stats: RuntimeStats,
        finished_at: Duration,
    ) -> Self {
        Self { engine, emissions, stats, finished_at }
    }

    /// The engine after the run.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// User id of the final owner.
    pub fn winner_id(&self) -> Option<&str> {
        self.engine.winner().map(|winner| winner.user_id.as_str())
    }

    /// Every directive group written, in order.
    pub fn emissions(&self) -> &[Emission] {
        &self.emissions
    }

    /// Every line written, in order.
    pub fn output_lines(&self) -> Vec<String> {
        self.emissions
            .iter()
            .flat_map(|emission| emission.directives.iter().map(ToString::to_string))
            .collect()
    }

    /// Runtime counters.
    pub fn stats(&self) -> RuntimeStats {
        self.stats
    }

    /// Virtual time at which the run ended.
    pub fn finished_at(&self) -> Duration {
        self.finished_at
    }

    /// The `set state` value of each group, with its time.
    pub fn state_changes(&self) -> Vec<(Duration, LightState)> {
        self.emissions
            .iter()
            .filter_map(|emission| {
                emission.directives.iter().find_map(|directive| match directive {
                    Directive::State(state) => Some((emission.at, *state)),
                    _ => None,
                })
            })
            .collect()
    }

    /// Groups written in `[from, to)`.
    pub fn emissions_between(&self, from: Duration, to: Duration) -> Vec<&Emission> {
        self.emissions.iter().filter(|emission| emission.at >= from && emission.at < to).collect()
    }

    /// Whether a `FREE` state was written in `[from, to)`.
    pub fn freed_between(&self, from: Duration, to: Duration) -> bool {
        self.state_changes()
            .iter()
            .any(|&(at, state)| state == LightState::Free && at >= from && at < to)
    }
}
