//! End-to-end scenarios through the runtime on a virtual clock.
//!
//! Each scenario feeds protocol lines exactly as the supervising process
//! would write them and checks what the actuator would see.

use std::time::Duration;

use smartlight_core::EngineConfig;
use smartlight_harness::{
    UserBuilder, ownership_line,
    scenario::{Scenario, World, oracle},
};
use smartlight_proto::{Color, LightState, UserType};

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[test]
fn user1_arrives_then_leaves() {
    let alice =
        UserBuilder::new("A", UserType::User1).sensor("s1").color(Color::new(1, 2, 3)).build();

    let result = Scenario::new("user1 arrives then leaves")
        .line("location 0 0")
        .line(ownership_line(&[alice]))
        .line("sensor_occupied s1 true")
        .wait(secs(1))
        .line("sensor_occupied s1 false")
        .oracle(oracle::all_of(vec![
            oracle::output_is(&[
                "set color (1, 2, 3)",
                "set lowlight false",
                "set userid A",
                "set state USED",
                "set usertype USER1",
                "set state FREE",
                "set color (0, 0, 0)",
            ]),
            oracle::light_free(),
            Box::new(|world: &World| {
                // FREE only after the full window.
                assert_eq!(
                    world.state_changes(),
                    [(secs(0), LightState::Used), (secs(4), LightState::Free)]
                );
                Ok(())
            }),
        ]))
        .run();

    assert!(result.is_ok(), "scenario should succeed: {result:?}");
}

#[test]
fn departure_with_someone_else_present_goes_ambient() {
    let alice = UserBuilder::new("A", UserType::User1).sensor("s1").build();

    let result = Scenario::new("ambient after departure")
        .line("location 0 0")
        .line(ownership_line(&[alice]))
        .line("sensor_occupied hallway true")
        .line("sensor_occupied s1 true")
        .wait(secs(1))
        .line("sensor_occupied s1 false")
        .oracle(oracle::output_is(&[
            // Unknown sensor: presence only.
            "set state FREE",
            "set color (250, 200, 100)",
            "set lowlight true",
            "set color (10, 20, 30)",
            "set lowlight false",
            "set userid A",
            "set state USED",
            "set usertype USER1",
            "set state FREE",
            "set color (250, 200, 100)",
            "set lowlight true",
        ]))
        .run();

    assert!(result.is_ok(), "scenario should succeed: {result:?}");
}

#[test]
fn returning_within_window_does_not_flicker() {
    let alice = UserBuilder::new("alice", UserType::User2).build();

    let result = Scenario::new("flicker absorbed")
        .line(ownership_line(&[alice]))
        .line("sensor_occupied s-alice true")
        .wait(secs(1))
        .line("sensor_occupied s-alice false")
        .wait(Duration::from_millis(2900))
        .line("sensor_occupied s-alice true")
        .wait(secs(1))
        .line("sensor_occupied s-alice false")
        .wait(secs(2))
        .line("sensor_occupied s-alice true")
        .oracle(oracle::all_of(vec![
            oracle::winner_is("alice"),
            oracle::emission_count(1),
            oracle::never_freed_between(Duration::ZERO, secs(60)),
        ]))
        .run();

    assert!(result.is_ok(), "scenario should succeed: {result:?}");
}

#[test]
fn user3_claims_ranked_by_distance() {
    let p = UserBuilder::new("P", UserType::User3).at(10.0, 0.0).build();
    let q = UserBuilder::new("Q", UserType::User3).at(0.0, 3.0).build();

    let result = Scenario::new("claim preemption")
        .line("location 0 0")
        .line(ownership_line(&[p, q]))
        .line("user3 P")
        .line("user3 Q")
        .line("user3 P")
        .oracle(oracle::all_of(vec![
            oracle::winner_is("Q"),
            oracle::emission_count(2),
            Box::new(|world: &World| {
                assert_eq!(world.stats().rejected, 1);
                let lines = world.output_lines();
                assert_eq!(lines[2], "set userid P");
                assert_eq!(lines[7], "set userid Q");
                Ok(())
            }),
        ]))
        .run();

    assert!(result.is_ok(), "scenario should succeed: {result:?}");
}

#[test]
fn claims_bounce_off_higher_tiers() {
    let boss = UserBuilder::new("boss", UserType::User2).build();
    let p = UserBuilder::new("P", UserType::User3).build();

    let result = Scenario::new("claim against user2")
        .line("location 0 0")
        .line(ownership_line(&[boss, p]))
        .line("sensor_occupied s-boss true")
        .line("user3 P")
        .line("user3 boss")
        .line("user3 nobody")
        .oracle(oracle::all_of(vec![
            oracle::winner_is("boss"),
            oracle::emission_count(1),
            Box::new(|world: &World| {
                assert_eq!(world.stats().rejected, 3);
                assert!(!world.engine().occupancy().is_occupied("s-P"));
                Ok(())
            }),
        ]))
        .run();

    assert!(result.is_ok(), "scenario should succeed: {result:?}");
}

#[test]
fn reload_keeps_present_user3() {
    let p = UserBuilder::new("P", UserType::User3).at(1.0, 1.0).build();
    let other = UserBuilder::new("other", UserType::User2).build();

    let result = Scenario::new("reload continuity")
        .line("location 0 0")
        .line(ownership_line(std::slice::from_ref(&p)))
        .line("user3 P")
        .wait(secs(1))
        .line(ownership_line(&[p, other]))
        .oracle(oracle::all_of(vec![
            oracle::winner_is("P"),
            oracle::never_freed_between(Duration::ZERO, secs(60)),
            Box::new(|world: &World| {
                assert_eq!(
                    world.state_changes(),
                    [(secs(0), LightState::Used), (secs(1), LightState::Used)]
                );
                Ok(())
            }),
        ]))
        .run();

    assert!(result.is_ok(), "scenario should succeed: {result:?}");
}

#[test]
fn reload_without_user3_owner_needs_new_claim() {
    let p = UserBuilder::new("P", UserType::User3).build();

    let result = Scenario::new("user3 without continuity")
        .line("location 0 0")
        .line(ownership_line(std::slice::from_ref(&p)))
        .line("sensor_occupied s-P true")
        .line(ownership_line(&[p]))
        .oracle(oracle::all_of(vec![
            oracle::light_free(),
            // Presence only: the ambient group once, the reload changes nothing.
            oracle::emission_count(1),
        ]))
        .run();

    assert!(result.is_ok(), "scenario should succeed: {result:?}");
}

#[test]
fn user1_preempts_during_departure_window() {
    let boss = UserBuilder::new("boss", UserType::User1).build();
    let b = UserBuilder::new("b", UserType::User2).build();

    let result = Scenario::new("user1 mid debounce")
        .line(ownership_line(&[boss, b]))
        .line("sensor_occupied s-b true")
        .wait(secs(1))
        .line("sensor_occupied s-b false")
        .wait(secs(1))
        .line("sensor_occupied s-boss true")
        .oracle(oracle::all_of(vec![
            oracle::winner_is("boss"),
            oracle::never_freed_between(Duration::ZERO, secs(60)),
            Box::new(|world: &World| {
                assert_eq!(
                    world.state_changes(),
                    [(secs(0), LightState::Used), (secs(2), LightState::Used)]
                );
                Ok(())
            }),
        ]))
        .run();

    assert!(result.is_ok(), "scenario should succeed: {result:?}");
}

#[test]
fn window_elapsing_at_line_arrival_commits_first() {
    let a = UserBuilder::new("a", UserType::User2).build();

    let result = Scenario::new("timer before line")
        .line(ownership_line(&[a]))
        .line("sensor_occupied s-a true")
        .wait(secs(1))
        .line("sensor_occupied s-a false")
        .wait(secs(3))
        .line("sensor_occupied s-a true")
        .oracle(Box::new(|world: &World| {
            assert_eq!(
                world.state_changes(),
                [
                    (secs(0), LightState::Used),
                    (secs(4), LightState::Free),
                    (secs(4), LightState::Used),
                ]
            );
            Ok(())
        }))
        .run();

    assert!(result.is_ok(), "scenario should succeed: {result:?}");
}

#[test]
fn bad_lines_do_not_stop_processing() {
    let a = UserBuilder::new("a", UserType::User1).build();

    let result = Scenario::new("fault isolation")
        .line("hello world")
        .line("ownership [{\"user_id\": ")
        .line(r#"ownership [{"user_id": "a", "user_type": "USER1"}]"#)
        .line("sensor_occupied s-a maybe")
        .line("location here")
        .line("")
        .line(ownership_line(&[a]))
        .line("sensor_occupied s-a true")
        .oracle(oracle::all_of(vec![
            oracle::winner_is("a"),
            Box::new(|world: &World| {
                let stats = world.stats();
                assert_eq!(stats.lines, 7);
                assert_eq!(stats.unparsable, 5);
                assert_eq!(stats.rejected, 0);
                assert_eq!(stats.emitted, 1);
                Ok(())
            }),
        ]))
        .run();

    assert!(result.is_ok(), "scenario should succeed: {result:?}");
}

#[test]
fn duplicate_ids_reject_whole_reload() {
    let a = UserBuilder::new("a", UserType::User2).build();
    let dup = UserBuilder::new("a", UserType::User1).sensor("other").build();

    let result = Scenario::new("duplicate reload")
        .line(ownership_line(std::slice::from_ref(&a)))
        .line("sensor_occupied s-a true")
        .line(ownership_line(&[a, dup]))
        .oracle(oracle::all_of(vec![
            oracle::winner_is("a"),
            oracle::emission_count(1),
            Box::new(|world: &World| {
                assert_eq!(world.stats().rejected, 1);
                assert_eq!(world.engine().directory().len(), 1);
                Ok(())
            }),
        ]))
        .run();

    assert!(result.is_ok(), "scenario should succeed: {result:?}");
}

#[test]
fn shorter_debounce_from_config() {
    let a = UserBuilder::new("a", UserType::User2).build();
    let config = EngineConfig { debounce: Duration::from_millis(500), ..EngineConfig::default() };

    let result = Scenario::new("custom window")
        .config(config)
        .line(ownership_line(&[a]))
        .line("sensor_occupied s-a true")
        .wait(secs(1))
        .line("sensor_occupied s-a false")
        .oracle(Box::new(|world: &World| {
            assert_eq!(
                world.state_changes(),
                [(secs(0), LightState::Used), (Duration::from_millis(1500), LightState::Free)]
            );
            assert_eq!(world.finished_at(), Duration::from_millis(1500));
            Ok(())
        }))
        .run();

    assert!(result.is_ok(), "scenario should succeed: {result:?}");
}
