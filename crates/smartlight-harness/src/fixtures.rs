//! Directory fixtures.

use serde_json::{Value, json};
use smartlight_proto::{Color, UserRecord, UserType};

/// Builder for [`UserRecord`]s with test-friendly defaults.
///
/// Defaults: sensor `s-<user_id>`, color `(10, 20, 30)`, low light off,
/// located at the origin.
#[derive(Debug, Clone)]
pub struct UserBuilder {
    record: UserRecord,
}

impl UserBuilder {
    /// Start a record for `user_id` in tier `user_type`.
    pub fn new(user_id: impl Into<String>, user_type: UserType) -> Self {
        let user_id = user_id.into();
        Self {
            record: UserRecord {
                sensor_id: format!("s-{user_id}"),
                user_id,
                user_type,
                light_color: Color::new(10, 20, 30),
                low_light: false,
                location_x: 0.0,
                location_y: 0.0,
            },
        }
    }

    /// Use a specific sensor id.
    pub fn sensor(mut self, sensor_id: impl Into<String>) -> Self {
        self.record.sensor_id = sensor_id.into();
        self
    }

    /// Preferred color.
    pub fn color(mut self, color: Color) -> Self {
        self.record.light_color = color;
        self
    }

    /// Preferred low-light mode.
    pub fn low_light(mut self, low_light: bool) -> Self {
        self.record.low_light = low_light;
        self
    }

    /// User position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.record.location_x = x;
        self.record.location_y = y;
        self
    }

    /// Finish the record.
    pub fn build(self) -> UserRecord {
        self.record
    }
}

/// Render an `ownership` command line for `records`.
///
/// Fields are written out by their wire names rather than through the
/// record's own serializer, so tests exercise the decoder against the
/// documented format.
pub fn ownership_line(records: &[UserRecord]) -> String {
    let array: Vec<Value> = records
        .iter()
        .map(|record| {
            json!({
                "user_id": record.user_id,
                "user_type": record.user_type.as_str(),
                "sensor_id": record.sensor_id,
                "light_color": record.light_color.to_string(),
                "low_light": record.low_light,
                "user_location_x": record.location_x,
                "user_location_y": record.location_y,
            })
        })
        .collect();

    format!("ownership {}", Value::Array(array))
}
