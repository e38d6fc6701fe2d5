//! Reusable oracles.

use std::time::Duration;

use crate::scenario::OracleFn;

/// The light ends up owned by `user_id`.
pub fn winner_is(user_id: impl Into<String>) -> OracleFn {
    let expected = user_id.into();
    Box::new(move |world| match world.winner_id() {
        Some(actual) if actual == expected => Ok(()),
        actual => Err(format!("expected winner {expected}, got {actual:?}")),
    })
}

/// The light ends up free.
pub fn light_free() -> OracleFn {
    Box::new(|world| match world.winner_id() {
        None => Ok(()),
        Some(winner) => Err(format!("expected a free light, {winner} owns it")),
    })
}

/// No `FREE` state is written in `[from, to)`.
pub fn never_freed_between(from: Duration, to: Duration) -> OracleFn {
    Box::new(move |world| {
        if world.freed_between(from, to) {
            Err(format!("light was freed between {from:?} and {to:?}"))
        } else {
            Ok(())
        }
    })
}

/// Exactly these lines are written over the whole run.
pub fn output_is(expected: &[&str]) -> OracleFn {
    let expected: Vec<String> = expected.iter().map(ToString::to_string).collect();
    Box::new(move |world| {
        let actual = world.output_lines();
        if actual == expected {
            Ok(())
        } else {
            Err(format!("unexpected output\nexpected: {expected:#?}\nactual: {actual:#?}"))
        }
    })
}

/// Exactly `count` directive groups are written.
pub fn emission_count(count: usize) -> OracleFn {
    Box::new(move |world| {
        let actual = world.emissions().len();
        if actual == count {
            Ok(())
        } else {
            Err(format!("expected {count} emissions, got {actual}"))
        }
    })
}

/// Every oracle passes. Reports the first failure.
pub fn all_of(oracles: Vec<OracleFn>) -> OracleFn {
    Box::new(move |world| oracles.iter().try_for_each(|oracle| oracle(world)))
}
