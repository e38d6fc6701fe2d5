//! Command line options.

use std::time::Duration;

use clap::Parser;
use smartlight_core::{EngineConfig, Palette};
use smartlight_proto::Color;

/// Smart light daemon command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "smartlight")]
#[command(about = "Decide who owns a shared smart light, one command per stdin line")]
pub struct Args {
    /// How long a departure must last before the light is released, in
    /// milliseconds
    #[arg(long, value_name = "MS", default_value_t = 3000)]
    pub debounce_ms: u64,

    /// Color shown while the light is free but someone is nearby
    #[arg(long, value_name = "COLOR", default_value = "(250, 200, 100)")]
    pub ambient_color: Color,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log: String,
}

impl Args {
    /// Engine configuration described by these arguments.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            debounce: Duration::from_millis(self.debounce_ms),
            palette: Palette { ambient: self.ambient_color, ..Palette::default() },
        }
    }
}
