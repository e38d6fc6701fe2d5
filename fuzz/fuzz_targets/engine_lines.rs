//! Fuzz the engine with arbitrary command streams.
//!
//! Each input line is parsed and handled one millisecond after the previous
//! one. The engine must never panic, and every emitted group must describe
//! exactly one state.

#![no_main]

use std::time::{Duration, Instant};

use libfuzzer_sys::fuzz_target;
use smartlight_core::{Engine, EngineAction};
use smartlight_proto::{Command, Directive};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut engine = Engine::default();
    let mut now = Instant::now();

    for line in text.lines() {
        now += Duration::from_millis(1);
        let mut actions = engine.tick(now);
        if let Ok(command) = Command::parse(line)
            && let Ok(more) = engine.handle(command, now)
        {
            actions.extend(more);
        }

        for EngineAction::Emit(directives) in actions {
            let states = directives.iter().filter(|d| matches!(d, Directive::State(_))).count();
            assert_eq!(states, 1);
        }
    }

    if let Some(deadline) = engine.next_deadline() {
        engine.tick(deadline);
        assert!(engine.next_deadline().is_none());
    }
});
