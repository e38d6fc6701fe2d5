//! Seeded fake sensor.
//!
//! Mimics the camera-less fallback of the sensor process: report "free"
//! once at start-up, then a coin flip every period. Good for shaking out
//! debounce bugs, since real departures and returns interleave at random.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::sim_driver::ScriptedLine;

/// Deterministic random presence generator for one sensor.
#[derive(Debug, Clone)]
pub struct FlickerSensor {
    sensor_id: String,
    period: Duration,
    rng: ChaCha8Rng,
}

impl FlickerSensor {
    /// A sensor reporting once per second, seeded with `seed`.
    pub fn new(sensor_id: impl Into<String>, seed: u64) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            period: Duration::from_secs(1),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Change the reporting period.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Sensor id used in generated lines.
    pub fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    /// `count` readings starting at `start`. The first is always "free".
    pub fn readings(&mut self, start: Duration, count: u32) -> Vec<(Duration, bool)> {
        (0..count)
            .map(|i| {
                let occupied = i > 0 && self.rng.gen_bool(0.5);
                (start + self.period * i, occupied)
            })
            .collect()
    }

    /// Render readings as `sensor_occupied` lines.
    pub fn script(&self, readings: &[(Duration, bool)]) -> Vec<ScriptedLine> {
        readings
            .iter()
            .map(|&(at, occupied)| ScriptedLine {
                at,
                line: format!("sensor_occupied {} {occupied}", self.sensor_id),
            })
            .collect()
    }
}
