//! Virtual-time driver.
//!
//! Input lines are scripted at fixed offsets from a simulation epoch. The
//! clock jumps straight to the next line or the requested deadline,
//! whichever comes first; at equal instants the deadline is reported first.

use std::{
    collections::VecDeque,
    convert::Infallible,
    time::{Duration, Instant},
};

use smartlight_app::{Driver, Input};
use smartlight_proto::Directive;
use tracing::trace;

/// An input line scheduled at an offset from the epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedLine {
    /// When the line arrives.
    pub at: Duration,
    /// Raw line text.
    pub line: String,
}

/// A directive group written by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    /// When the group was written.
    pub at: Duration,
    /// The group, in order.
    pub directives: Vec<Directive>,
}

/// Driver with a virtual clock and a scripted input.
#[derive(Debug, Clone)]
pub struct SimDriver {
    epoch: Instant,
    elapsed: Duration,
    script: VecDeque<ScriptedLine>,
    emissions: Vec<Emission>,
}

impl SimDriver {
    /// Create a driver with an empty script at time zero.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            elapsed: Duration::ZERO,
            script: VecDeque::new(),
            emissions: Vec::new(),
        }
    }

    /// Append a line arriving at `at`.
    ///
    /// Lines keep script order: one scheduled earlier than the previous line
    /// arrives together with it.
    pub fn push_line(&mut self, at: Duration, line: impl Into<String>) {
        let at = self.script.back().map_or(at, |last| at.max(last.at));
        self.script.push_back(ScriptedLine { at, line: line.into() });
    }

    /// Append several scripted lines.
    pub fn extend(&mut self, lines: impl IntoIterator<Item = ScriptedLine>) {
        for ScriptedLine { at, line } in lines {
            self.push_line(at, line);
        }
    }

    /// Simulation epoch; `now() == epoch() + elapsed()`.
    pub fn epoch(&self) -> Instant {
        self.epoch
    }

    /// Virtual time since the epoch.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Everything written so far.
    pub fn emissions(&self) -> &[Emission] {
        &self.emissions
    }

    /// Everything written so far, as protocol lines.
    pub fn output_lines(&self) -> Vec<String> {
        self.emissions
            .iter()
            .flat_map(|emission| emission.directives.iter().map(ToString::to_string))
            .collect()
    }

    fn advance_to(&mut self, at: Duration) {
        if at > self.elapsed {
            trace!(from = ?self.elapsed, to = ?at, "advancing virtual clock");
            self.elapsed = at;
        }
    }
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for SimDriver {
    type Error = Infallible;

    async fn next_input(&mut self, deadline: Option<Instant>) -> Result<Input, Self::Error> {
        let deadline = deadline.map(|deadline| deadline.saturating_duration_since(self.epoch));
        let next_line = self.script.front().map(|scripted| scripted.at);

        if let Some(deadline) = deadline
            && next_line.is_none_or(|line_at| deadline <= line_at)
        {
            self.advance_to(deadline);
            return Ok(Input::Deadline);
        }

        match self.script.pop_front() {
            Some(ScriptedLine { at, line }) => {
                self.advance_to(at);
                Ok(Input::Line(line))
            },
            None => Ok(Input::Closed),
        }
    }

    async fn emit(&mut self, directives: &[Directive]) -> Result<(), Self::Error> {
        self.emissions.push(Emission { at: self.elapsed, directives: directives.to_vec() });
        Ok(())
    }

    fn now(&self) -> Instant {
        self.epoch + self.elapsed
    }
}
