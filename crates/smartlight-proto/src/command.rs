//! Input command parsing.
//!
//! This module parses protocol lines into structured [`Command`] values.

use crate::{
    errors::{ProtocolError, Result},
    record::{LightPosition, UserRecord},
};

/// Parsed input command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set the position of the light.
    Location(LightPosition),

    /// Replace the ownership directory.
    Ownership(Vec<UserRecord>),

    /// Report a sensor's occupancy.
    SensorOccupied {
        /// Reporting sensor. Need not be known to the current directory.
        sensor_id: String,
        /// Whether someone is present.
        occupied: bool,
    },

    /// A `USER3` user explicitly asks for the light.
    ClaimUser3 {
        /// Claiming user.
        user_id: String,
    },
}

impl Command {
    /// Parse one input line.
    ///
    /// The first space separates the command word from its argument.
    /// Surrounding whitespace, including a trailing `\r`, is ignored.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (command, args) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "location" => parse_location(args),
            "ownership" => Ok(Self::Ownership(serde_json::from_str(args)?)),
            "sensor_occupied" => parse_sensor_occupied(args),
            "user3" => parse_claim(args),
            _ => Err(ProtocolError::UnknownCommand { command: command.to_string() }),
        }
    }

    /// Command word, as used on the wire.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Location(_) => "location",
            Self::Ownership(_) => "ownership",
            Self::SensorOccupied { .. } => "sensor_occupied",
            Self::ClaimUser3 { .. } => "user3",
        }
    }
}

fn parse_location(args: &str) -> Result<Command> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [x, y] = parts.as_slice() else {
        return Err(invalid("location", "usage: location <x> <y>"));
    };

    Ok(Command::Location(LightPosition { x: parse_coordinate(x)?, y: parse_coordinate(y)? }))
}

fn parse_coordinate(input: &str) -> Result<f64> {
    match input.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid("location", format!("invalid coordinate {input:?}"))),
    }
}

fn parse_sensor_occupied(args: &str) -> Result<Command> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [sensor_id, occupied] = parts.as_slice() else {
        return Err(invalid("sensor_occupied", "usage: sensor_occupied <sensor_id> <true|false>"));
    };

    let occupied = match *occupied {
        "true" => true,
        "false" => false,
        other => {
            return Err(invalid("sensor_occupied", format!("expected true or false, got {other:?}")));
        },
    };

    Ok(Command::SensorOccupied { sensor_id: (*sensor_id).to_string(), occupied })
}

fn parse_claim(args: &str) -> Result<Command> {
    if args.is_empty() {
        return Err(invalid("user3", "usage: user3 <user_id>"));
    }

    Ok(Command::ClaimUser3 { user_id: args.to_string() })
}

fn invalid(command: &'static str, reason: impl Into<String>) -> ProtocolError {
    ProtocolError::InvalidArgs { command, reason: reason.into() }
}
