//! Scenario builder API.
//!
//! Provides a declarative API for constructing scenario tests that enforce
//! the Oracle Pattern.

use std::time::Duration;

use smartlight_app::Runtime;
use smartlight_core::{Engine, EngineConfig};

use crate::{
    scenario::{OracleFn, World},
    sim_driver::{ScriptedLine, SimDriver},
};

/// Scenario builder.
///
/// Lines are placed on a cursor that starts at zero and moves forward with
/// [`Scenario::wait`]. Must call `.oracle()` to get a [`RunnableScenario`].
pub struct Scenario {
    name: String,
    config: EngineConfig,
    script: Vec<ScriptedLine>,
    cursor: Duration,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: EngineConfig::default(),
            script: Vec::new(),
            cursor: Duration::ZERO,
        }
    }

    /// Run the engine with a custom configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Send a line at the cursor.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.script.push(ScriptedLine { at: self.cursor, line: line.into() });
        self
    }

    /// Move the cursor forward.
    pub fn wait(mut self, duration: Duration) -> Self {
        self.cursor += duration;
        self
    }

    /// Move the cursor to an absolute time and send a line there.
    ///
    /// Moving the cursor backwards is ignored.
    pub fn at(mut self, at: Duration, line: impl Into<String>) -> Self {
        self.cursor = self.cursor.max(at);
        self.line(line)
    }

    /// Append pre-timed lines, e.g. from a [`crate::FlickerSensor`].
    pub fn script(mut self, lines: impl IntoIterator<Item = ScriptedLine>) -> Self {
        for scripted in lines {
            self.cursor = self.cursor.max(scripted.at);
            self.script.push(scripted);
        }
        self
    }

    /// Set the oracle function and return a runnable scenario.
    ///
    /// The oracle is mandatory - you cannot run a scenario without
    /// verification.
    pub fn oracle(self, oracle: OracleFn) -> RunnableScenario {
        RunnableScenario { scenario: self, oracle }
    }
}

/// A scenario with an oracle function that can be executed.
pub struct RunnableScenario {
    scenario: Scenario,
    oracle: OracleFn,
}

impl RunnableScenario {
    /// Execute the scenario.
    ///
    /// Feeds the script through a [`Runtime`] until input is exhausted and
    /// any pending debounce window has drained, then invokes the oracle on
    /// the resulting [`World`].
    pub fn run(self) -> Result<(), String> {
        let name = self.scenario.name;

        let mut driver = SimDriver::new();
        driver.extend(self.scenario.script);

        let mut runtime = Runtime::new(driver, Engine::new(self.scenario.config));
        let executor = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| format!("Scenario '{name}': failed to build executor: {e}"))?;
        executor.block_on(runtime.run()).unwrap_or_else(|never| match never {});

        let stats = runtime.stats();
        let (driver, engine) = runtime.into_parts();
        let world = World::new(engine, driver.emissions().to_vec(), stats, driver.elapsed());

        (self.oracle)(&world).map_err(|e| format!("Scenario '{name}': {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_requires_oracle() {
        // This should compile - oracle provided
        let _scenario = Scenario::new("test").line("location 0 0").oracle(Box::new(|_world| Ok(())));

        // This should NOT compile - no oracle
        // let scenario = Scenario::new("test").line("location 0 0");
        // scenario.run(); // ERROR: no method `run` on type `Scenario`
    }

    #[test]
    fn scenario_runs_script() {
        let scenario = Scenario::new("test")
            .line("location 3 4")
            .wait(Duration::from_secs(2))
            .line("nonsense")
            .oracle(Box::new(|world| {
                assert_eq!(world.stats().lines, 2);
                assert_eq!(world.stats().unparsable, 1);
                assert_eq!(world.finished_at(), Duration::from_secs(2));
                assert!(world.engine().light().is_some());
                Ok(())
            }));

        scenario.run().expect("scenario should succeed");
    }

    #[test]
    fn oracle_failure_names_scenario() {
        let result = Scenario::new("doomed").oracle(Box::new(|_| Err("nope".into()))).run();
        assert_eq!(result.unwrap_err(), "Scenario 'doomed': nope");
    }
}
