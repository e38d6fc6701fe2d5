//! Output directives (`set ...` lines) consumed by the light actuator.

use std::fmt;

use crate::{color::Color, record::UserType};

/// Whether the light currently belongs to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightState {
    /// A user owns the light.
    Used,
    /// Nobody owns the light.
    Free,
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Used => "USED",
            Self::Free => "FREE",
        })
    }
}

/// One output line. Formats as `set <key> <value>` without a newline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `set color (r, g, b)`
    Color(Color),
    /// `set lowlight true|false`
    LowLight(bool),
    /// `set userid <id>`
    UserId(String),
    /// `set state USED|FREE`
    State(LightState),
    /// `set usertype USER1|USER2|USER3`
    UserType(UserType),
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => write!(f, "set color {color}"),
            Self::LowLight(low) => write!(f, "set lowlight {low}"),
            Self::UserId(id) => write!(f, "set userid {id}"),
            Self::State(state) => write!(f, "set state {state}"),
            Self::UserType(user_type) => write!(f, "set usertype {user_type}"),
        }
    }
}

/// Render a group of directives as newline-terminated lines.
pub fn render(directives: &[Directive]) -> String {
    directives.iter().map(|directive| format!("{directive}\n")).collect()
}
