//! Fuzz the line parser with arbitrary text.
//!
//! Parsing must never panic, and a parsed command's name must match the
//! first word of the line.

#![no_main]

use libfuzzer_sys::fuzz_target;
use smartlight_proto::Command;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(command) = Command::parse(line) {
        let word = line.trim().split(' ').next().unwrap_or_default();
        assert_eq!(command.name(), word);
    }
});
