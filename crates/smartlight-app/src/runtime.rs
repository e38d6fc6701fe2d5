//! Generic serial command loop.
//!
//! One input is handled completely, including any commit it causes, before
//! the next one is read. A debounce deadline is just another input: the
//! driver reports it in the same stream as lines, so a timer never commits
//! concurrently with a command.

use smartlight_core::{Engine, EngineAction};
use smartlight_proto::Command;
use tracing::{debug, info, warn};

use crate::driver::{Driver, Input};

/// Counters kept by the [`Runtime`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeStats {
    /// Non-blank lines read.
    pub lines: u64,
    /// Lines that failed to parse.
    pub unparsable: u64,
    /// Parsed commands the engine refused.
    pub rejected: u64,
    /// Directive groups written.
    pub emitted: u64,
}

/// Drives an [`Engine`] with inputs from a [`Driver`].
#[derive(Debug)]
pub struct Runtime<D: Driver> {
    driver: D,
    engine: Engine,
    stats: RuntimeStats,
}

impl<D: Driver> Runtime<D> {
    /// Create a runtime.
    pub fn new(driver: D, engine: Engine) -> Self {
        Self { driver, engine, stats: RuntimeStats::default() }
    }

    /// Run until input is closed and no debounced commit is pending.
    ///
    /// # Errors
    ///
    /// Returns the driver's error if I/O fails. Bad lines and rejected
    /// commands are logged and never end the loop.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        while self.step().await? {}

        info!(
            lines = self.stats.lines,
            unparsable = self.stats.unparsable,
            rejected = self.stats.rejected,
            emitted = self.stats.emitted,
            "input closed"
        );
        Ok(())
    }

    /// Process one input. Returns `false` once input is closed.
    ///
    /// # Errors
    ///
    /// Returns the driver's error if I/O fails.
    pub async fn step(&mut self) -> Result<bool, D::Error> {
        let deadline = self.engine.next_deadline();

        match self.driver.next_input(deadline).await? {
            Input::Line(line) => {
                self.process_line(&line).await?;
                Ok(true)
            },
            Input::Deadline => {
                let actions = self.engine.tick(self.driver.now());
                self.execute(actions).await?;
                Ok(true)
            },
            Input::Closed => Ok(false),
        }
    }

    async fn process_line(&mut self, line: &str) -> Result<(), D::Error> {
        if line.trim().is_empty() {
            debug!("skipping blank line");
            return Ok(());
        }
        self.stats.lines += 1;

        let now = self.driver.now();
        let mut actions = self.engine.tick(now);

        match Command::parse(line) {
            Ok(command) => match self.engine.handle(command, now) {
                Ok(more) => actions.extend(more),
                Err(error) => {
                    self.stats.rejected += 1;
                    warn!(line = line.trim(), %error, "command rejected");
                },
            },
            Err(error) => {
                self.stats.unparsable += 1;
                warn!(line = line.trim(), %error, "failed to process line");
            },
        }

        self.execute(actions).await
    }

    async fn execute(&mut self, actions: Vec<EngineAction>) -> Result<(), D::Error> {
        for action in actions {
            let EngineAction::Emit(directives) = action;
            self.driver.emit(&directives).await?;
            self.stats.emitted += 1;
        }
        Ok(())
    }

    /// The engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable access to the driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Counters so far.
    pub fn stats(&self) -> RuntimeStats {
        self.stats
    }

    /// Tear down the runtime, returning the driver and the engine.
    pub fn into_parts(self) -> (D, Engine) {
        (self.driver, self.engine)
    }
}
