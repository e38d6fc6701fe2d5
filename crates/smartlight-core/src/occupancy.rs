//! Sensor occupancy.
//!
//! Entries are keyed by sensor id and live independently of the directory:
//! a reload does not clear them, and ids the directory has never heard of
//! are kept in case a later reload introduces them.

use std::collections::HashMap;

/// Last reported presence per sensor.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    sensors: HashMap<String, bool>,
}

impl Occupancy {
    /// Create an empty occupancy map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sensor reading. Returns the previous reading, if any.
    pub fn set(&mut self, sensor_id: impl Into<String>, occupied: bool) -> Option<bool> {
        self.sensors.insert(sensor_id.into(), occupied)
    }

    /// Whether the sensor last reported presence. Unknown sensors are free.
    pub fn is_occupied(&self, sensor_id: &str) -> bool {
        self.sensors.get(sensor_id).copied().unwrap_or(false)
    }

    /// Ambient presence: whether any sensor currently reports presence.
    pub fn any_present(&self) -> bool {
        self.sensors.values().any(|&occupied| occupied)
    }

    /// Number of sensors ever reported.
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    /// Whether no sensor has reported yet.
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sensor_is_free() {
        let occupancy = Occupancy::new();
        assert!(!occupancy.is_occupied("s1"));
        assert!(!occupancy.any_present());
    }

    #[test]
    fn set_returns_previous() {
        let mut occupancy = Occupancy::new();
        assert_eq!(occupancy.set("s1", true), None);
        assert_eq!(occupancy.set("s1", false), Some(true));
        assert_eq!(occupancy.len(), 1);
    }

    #[test]
    fn any_present_tracks_all_sensors() {
        let mut occupancy = Occupancy::new();
        occupancy.set("s1", true);
        occupancy.set("s2", false);
        assert!(occupancy.any_present());

        occupancy.set("s1", false);
        assert!(!occupancy.any_present());
    }
}
