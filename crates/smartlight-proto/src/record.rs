//! User records from the ownership directory, and the light's position.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Priority tier of a user.
///
/// Ordered from highest to lowest priority: `User1` beats everyone on
/// occupancy alone, `User2` beats `User3`, and `User3` only gets the light
/// through an explicit claim or continuity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserType {
    /// Highest tier.
    User1,
    /// Middle tier.
    User2,
    /// Claim-based tier, ranked among itself by distance to the light.
    User3,
}

impl UserType {
    /// Wire name (`USER1`, `USER2`, `USER3`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User1 => "USER1",
            Self::User2 => "USER2",
            Self::User3 => "USER3",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the ownership directory.
///
/// A record is addressable both by `user_id` and by `sensor_id`; within one
/// directory snapshot each is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique user identifier.
    pub user_id: String,
    /// Priority tier.
    pub user_type: UserType,
    /// Sensor reporting this user's presence.
    pub sensor_id: String,
    /// Preferred light color.
    pub light_color: Color,
    /// Preferred low-light mode.
    pub low_light: bool,
    /// Horizontal position of the user.
    #[serde(rename = "user_location_x")]
    pub location_x: f64,
    /// Vertical position of the user.
    #[serde(rename = "user_location_y")]
    pub location_y: f64,
}

/// Position of the light, set by the `location` command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightPosition {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl LightPosition {
    /// Claim priority of `record` relative to this light. Lower is better.
    ///
    /// Squared Euclidean distance; only the ordering between users matters so
    /// the square root is skipped.
    pub fn priority(&self, record: &UserRecord) -> f64 {
        let dx = record.location_x - self.x;
        let dy = record.location_y - self.y;
        dx * dx + dy * dy
    }
}
