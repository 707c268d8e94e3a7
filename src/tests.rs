//! Unit tests for the `circuit_trainer` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical rounds and run; different seeds → varied rounds |
//! | Structural | Exactly one correct candidate; chi-square positional uniformity; distinct candidates |
//! | Lifecycle | Score monotonicity and bounds; one active round while playing; defaults per activity |
//! | Terminal | At-most-one terminal transition in both orderings; callback exactly once, never early |
//! | Guards | Defensive no-ops for out-of-order calls; `InsufficientPool` at start; idempotent restart |
//! | Scenarios | Resistor 4-7-2 → 4700Ω; order-free power set; bug-hunter miss/hit; 120-tick timeout |
//! | Adapter | Shell view never carries `is_correct`, solutions, or flaw markers |

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::session_engine::activities::resistor_color;
use crate::{
    Activity, EngineError, Round, Selection, Session, SessionConfig,
    SessionState, SubmitOutcome, TickOutcome,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn started(activity: Activity, seed: u64) -> Session {
    let mut session = Session::new(SessionConfig::new(activity).with_seed(seed));
    session.start().expect("default configs fit their pools");
    session
}

/// Attach a callback that records every completion score.
fn record_completions(session: &mut Session) -> Rc<RefCell<Vec<u32>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    session.on_complete(move |score| sink.borrow_mut().push(score));
    log
}

/// Id of the correct candidate in the active choice round.
fn correct_choice_id(session: &Session) -> u32 {
    match session.active_round().expect("an active round while playing") {
        Round::Choice(round) => {
            round
                .choices
                .iter()
                .find(|c| c.is_correct)
                .expect("exactly one correct candidate")
                .id
        }
        other => panic!("expected a choice round, got {other:?}"),
    }
}

/// Id of some incorrect candidate in the active choice round.
fn wrong_choice_id(session: &Session) -> u32 {
    match session.active_round().expect("an active round while playing") {
        Round::Choice(round) => {
            round
                .choices
                .iter()
                .find(|c| !c.is_correct)
                .expect("at least one distractor")
                .id
        }
        other => panic!("expected a choice round, got {other:?}"),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_runs() {
    for activity in Activity::all() {
        let mut a = started(activity, 12345);
        let mut b = started(activity, 12345);

        for _ in 0..3 {
            let round_a = serde_json::to_string(&a.snapshot().round).unwrap();
            let round_b = serde_json::to_string(&b.snapshot().round).unwrap();
            assert_eq!(round_a, round_b, "round mismatch for {activity:?}");

            if a.state() != SessionState::Playing {
                break;
            }
            // Drive both sessions identically.
            let selection = match a.active_round().unwrap() {
                Round::Choice(_) => Selection::Choice(correct_choice_id(&a)),
                Round::Flaw(circuit) => {
                    Selection::Component(circuit.components[0].id.to_string())
                }
                Round::Set(_) => Selection::Set(strings(&["LED"])),
            };
            assert_eq!(
                a.submit_answer(selection.clone()),
                b.submit_answer(selection),
                "outcome mismatch for {activity:?}"
            );
            assert_eq!(a.score(), b.score());
        }
    }
}

#[test]
fn different_seeds_produce_varied_rounds() {
    // Not a hard guarantee, but over 40 seed pairs the synthesized resistor
    // rounds should rarely coincide.
    let mut same = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = started(Activity::ResistorColorGame, seed);
        let b = started(Activity::ResistorColorGame, seed + 500);
        let ra = serde_json::to_string(&a.snapshot().round).unwrap();
        let rb = serde_json::to_string(&b.snapshot().round).unwrap();
        if ra == rb {
            same += 1;
        }
    }
    assert!(same < pairs as usize / 4, "too many identical rounds ({same}/{pairs})");
}

// ── structural invariants ────────────────────────────────────────────────────

#[test]
fn every_choice_round_has_exactly_one_correct_candidate() {
    for activity in [
        Activity::Quiz,
        Activity::ResistorColorGame,
        Activity::ComponentDash,
        Activity::ComponentDetective,
    ] {
        for seed in SEEDS {
            let mut session = started(activity, seed);
            while session.state() == SessionState::Playing {
                let Round::Choice(round) = session.active_round().unwrap() else {
                    panic!("{activity:?} must produce choice rounds");
                };
                let correct = round.choices.iter().filter(|c| c.is_correct).count();
                assert_eq!(correct, 1, "{activity:?} seed={seed}");
                assert!(
                    round.choices.iter().any(|c| c.id == round.target_id && c.is_correct),
                    "target id must name the correct candidate"
                );
                let id = correct_choice_id(&session);
                session.submit_answer(Selection::Choice(id));
            }
        }
    }
}

#[test]
fn correct_candidate_position_is_uniform() {
    // 2000 synthesized rounds, 4 candidate slots. Chi-square against the
    // uniform distribution, 3 degrees of freedom: reject above 16.27
    // (p = 0.001). Deterministic via the fixed seed.
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let rounds = 2000usize;
    let mut observed = [0f64; 4];

    for _ in 0..rounds {
        let Round::Choice(round) = resistor_color::build_round(&mut rng, 3) else {
            panic!("resistor game must build choice rounds");
        };
        let position = round
            .choices
            .iter()
            .position(|c| c.is_correct)
            .expect("one correct candidate");
        observed[position] += 1.0;
    }

    let expected = rounds as f64 / 4.0;
    let chi_square: f64 = observed
        .iter()
        .map(|obs| (obs - expected).powi(2) / expected)
        .sum();
    assert!(
        chi_square < 16.27,
        "correct-candidate position is biased: chi-square = {chi_square:.2}, counts = {observed:?}"
    );
}

#[test]
fn score_is_monotonic_and_bounded() {
    for seed in SEEDS {
        let mut session = started(Activity::Quiz, seed);
        let mut previous = session.score();
        let mut submissions = 0u32;

        while session.state() == SessionState::Playing {
            // Alternate correct and incorrect answers.
            let (id, expect_correct) = if submissions % 2 == 0 {
                (correct_choice_id(&session), true)
            } else {
                (wrong_choice_id(&session), false)
            };
            let outcome = session.submit_answer(Selection::Choice(id));
            submissions += 1;

            let SubmitOutcome::Scored(attempt) = outcome else {
                panic!("submission while playing must be scored");
            };
            assert_eq!(attempt.correct, expect_correct);

            let delta = session.score() - previous;
            assert_eq!(delta, u32::from(attempt.correct), "score moves by 1 iff correct");
            assert!(session.score() <= submissions, "score cannot exceed attempts");
            assert!(
                session.score() as usize <= session.total_rounds(),
                "score cannot exceed total rounds"
            );
            previous = session.score();
        }
        assert_eq!(session.state(), SessionState::Finished);
        assert_eq!(session.attempts().len() as u32, submissions);
    }
}

#[test]
fn exactly_one_round_is_active_while_playing() {
    let mut session = Session::new(SessionConfig::new(Activity::BugHunter).with_seed(5));
    assert!(session.snapshot().round.is_none(), "nothing active before start");

    session.start().unwrap();
    assert!(session.snapshot().round.is_some(), "one active round while playing");

    while session.state() == SessionState::Playing {
        let Round::Flaw(circuit) = session.active_round().unwrap() else {
            panic!("bug hunter must produce flaw rounds");
        };
        let flaw = circuit
            .components
            .iter()
            .find(|c| !c.is_correct)
            .expect("one flawed component")
            .id;
        session.submit_answer(Selection::Component(flaw.to_string()));
    }
    assert!(session.snapshot().round.is_none(), "nothing active once finished");
}

#[test]
fn shipped_defaults_match_the_catalogue() {
    let expect = [
        (Activity::Quiz, 20, None),
        (Activity::ResistorColorGame, 20, Some(120)),
        (Activity::ComponentDash, 15, Some(90)),
        (Activity::ComponentDetective, 10, None),
        (Activity::BugHunter, 5, Some(180)),
        (Activity::PowerSaver, 3, None),
    ];
    for (activity, rounds, clock) in expect {
        let config = SessionConfig::new(activity);
        assert_eq!(config.total_rounds, rounds, "{activity:?}");
        assert_eq!(config.time_limit, clock, "{activity:?}");
    }
}

// ── terminal transition ──────────────────────────────────────────────────────

#[test]
fn final_submit_then_tick_reports_once() {
    let mut session = Session::new(
        SessionConfig::new(Activity::ResistorColorGame)
            .with_seed(11)
            .with_rounds(1),
    );
    let completions = record_completions(&mut session);
    session.start().unwrap();

    let id = correct_choice_id(&session);
    session.submit_answer(Selection::Choice(id));
    assert_eq!(session.state(), SessionState::Finished);
    assert_eq!(*completions.borrow(), vec![1]);

    // A racing timer tick after the terminal transition must change nothing.
    assert_eq!(session.tick(), TickOutcome::Ignored);
    assert_eq!(session.score(), 1);
    assert_eq!(*completions.borrow(), vec![1]);
}

#[test]
fn timeout_then_submit_reports_once_with_frozen_score() {
    let mut session = Session::new(
        SessionConfig::new(Activity::ResistorColorGame)
            .with_seed(11)
            .with_time_limit(Some(1)),
    );
    let completions = record_completions(&mut session);
    session.start().unwrap();

    let id = correct_choice_id(&session);
    assert_eq!(session.tick(), TickOutcome::Expired);
    assert_eq!(session.state(), SessionState::Finished);
    assert_eq!(*completions.borrow(), vec![0]);

    // The in-flight answer arrives after the clock won the race.
    assert_eq!(session.submit_answer(Selection::Choice(id)), SubmitOutcome::Ignored);
    assert_eq!(session.score(), 0, "score frozen at the terminal transition");
    assert_eq!(*completions.borrow(), vec![0]);
}

#[test]
fn completion_callback_never_fires_before_finished() {
    let mut session = Session::with_defaults(Activity::Quiz);
    let completions = record_completions(&mut session);
    session.start().unwrap();

    for _ in 0..5 {
        let id = correct_choice_id(&session);
        session.submit_answer(Selection::Choice(id));
        assert!(completions.borrow().is_empty(), "no report while playing");
    }
}

#[test]
fn callback_fires_once_per_run_across_restarts() {
    let mut session = Session::new(
        SessionConfig::new(Activity::PowerSaver).with_seed(3).with_rounds(1),
    );
    let completions = record_completions(&mut session);

    for expected_runs in 1..=3usize {
        session.start().unwrap();
        session.submit_answer(Selection::Set(strings(&[
            "LED",
            "470Ω Resistor",
            "9V Battery",
        ])));
        assert_eq!(session.state(), SessionState::Finished);
        assert_eq!(completions.borrow().len(), expected_runs);
        session.restart();
    }
    assert_eq!(*completions.borrow(), vec![1, 1, 1]);
}

// ── guards ───────────────────────────────────────────────────────────────────

#[test]
fn out_of_order_calls_are_no_ops() {
    let mut session = Session::with_defaults(Activity::Quiz);

    // Nothing started yet.
    assert_eq!(session.submit_answer(Selection::Choice(0)), SubmitOutcome::Ignored);
    assert_eq!(session.tick(), TickOutcome::Ignored);

    session.start().unwrap();
    // Untimed activity: ticks are meaningless but harmless.
    assert_eq!(session.tick(), TickOutcome::Ignored);
    assert_eq!(session.state(), SessionState::Playing);

    // A second start mid-play changes nothing.
    let before = serde_json::to_string(&session.snapshot().round).unwrap();
    session.start().unwrap();
    let after = serde_json::to_string(&session.snapshot().round).unwrap();
    assert_eq!(before, after, "start while playing must not redeal");
}

#[test]
fn insufficient_pool_fails_start_and_leaves_session_ready() {
    // 16 dash rounds need 16 distinct symbols; the pool holds 15.
    let mut session = Session::new(SessionConfig::new(Activity::ComponentDash).with_rounds(16));
    let err = session.start().unwrap_err();
    assert_eq!(err, EngineError::InsufficientPool { needed: 16, available: 15 });
    assert_eq!(session.state(), SessionState::Ready);
    assert!(session.active_round().is_none());

    // A distractor count the pool cannot cover fails the same way.
    let mut config = SessionConfig::new(Activity::ComponentDash);
    config.distractor_count = 15;
    let mut session = Session::new(config);
    assert!(session.start().is_err());

    // A zero-round config is rejected the same way.
    let mut session = Session::new(SessionConfig::new(Activity::Quiz).with_rounds(0));
    assert!(session.start().is_err());
    assert_eq!(session.state(), SessionState::Ready);

    // And the session is still usable with a fixed configuration.
    let mut session = Session::new(SessionConfig::new(Activity::ComponentDash).with_seed(1));
    assert!(session.start().is_ok());
}

#[test]
fn restart_is_idempotent_and_releases_the_clock() {
    let mut session = started(Activity::ResistorColorGame, 8);
    assert!(session.time_remaining().is_some());

    for _ in 0..3 {
        session.restart();
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_round(), 0);
        assert!(session.time_remaining().is_none(), "clock released on reset");
        assert!(session.active_round().is_none());
        assert!(session.attempts().is_empty());
    }

    session.start().unwrap();
    assert_eq!(session.state(), SessionState::Playing);
    assert_eq!(session.time_remaining(), Some(120));
}

#[test]
fn start_from_finished_is_an_implicit_restart() {
    let mut session = Session::new(
        SessionConfig::new(Activity::ResistorColorGame)
            .with_seed(2)
            .with_rounds(1),
    );
    session.start().unwrap();
    let id = correct_choice_id(&session);
    session.submit_answer(Selection::Choice(id));
    assert_eq!(session.state(), SessionState::Finished);
    assert_eq!(session.score(), 1);

    session.start().unwrap();
    assert_eq!(session.state(), SessionState::Playing);
    assert_eq!(session.score(), 0);
    assert_eq!(session.current_round(), 0);
}

// ── literal scenarios ────────────────────────────────────────────────────────

#[test]
fn resistor_digits_4_7_2_read_4700_ohms() {
    let (resistance, bands) = resistor_color::from_digits(4, 7, 2);
    assert_eq!(resistance, 4700);
    assert_eq!(
        bands.map(|b| b.to_string()),
        ["Yellow", "Violet", "Red"].map(String::from)
    );

    // Selecting 4700 in a live round scores it.
    let mut session = started(Activity::ResistorColorGame, 42);
    let target = correct_choice_id(&session);
    let SubmitOutcome::Scored(attempt) = session.submit_answer(Selection::Choice(target)) else {
        panic!("submission while playing must be scored");
    };
    assert!(attempt.correct);
    assert_eq!(session.score(), 1);
}

#[test]
fn power_saver_set_match_ignores_selection_order() {
    let mut session = started(Activity::PowerSaver, 6);

    // Declared solution {LED, 470Ω Resistor, 9V Battery}, picked in a
    // different order.
    let SubmitOutcome::Scored(attempt) = session.submit_answer(Selection::Set(strings(&[
        "470Ω Resistor",
        "LED",
        "9V Battery",
    ]))) else {
        panic!("submission while playing must be scored");
    };
    assert!(attempt.correct, "set match must be order-independent");
    assert_eq!(session.score(), 1);
    assert_eq!(session.current_round(), 1, "set rounds are consumed by any attempt");
}

#[test]
fn bug_hunter_miss_stays_and_hit_advances() {
    let mut session = started(Activity::BugHunter, 9);

    // First circuit: r1 is flawed, led1 is sound.
    let SubmitOutcome::Scored(miss) =
        session.submit_answer(Selection::Component("led1".to_string()))
    else {
        panic!("submission while playing must be scored");
    };
    assert!(!miss.correct);
    assert_eq!(session.score(), 0, "a miss costs nothing but time");
    assert_eq!(session.current_round(), 0, "the circuit stays on a miss");

    let SubmitOutcome::Scored(hit) =
        session.submit_answer(Selection::Component("r1".to_string()))
    else {
        panic!("submission while playing must be scored");
    };
    assert!(hit.correct);
    assert_eq!(session.score(), 1);
    assert_eq!(session.current_round(), 1, "a hit advances to the next circuit");
}

#[test]
fn idle_session_times_out_at_zero_score() {
    let mut session = Session::new(SessionConfig::new(Activity::ResistorColorGame).with_seed(4));
    let completions = record_completions(&mut session);
    session.start().unwrap();
    assert_eq!(session.time_remaining(), Some(120));

    for second in 1..120 {
        assert_eq!(session.tick(), TickOutcome::Running(120 - second));
    }
    assert_eq!(session.tick(), TickOutcome::Expired);

    assert_eq!(session.state(), SessionState::Finished);
    assert_eq!(session.score(), 0);
    assert_eq!(*completions.borrow(), vec![0]);
}

// ── shell adapter ────────────────────────────────────────────────────────────

#[test]
fn shell_view_never_leaks_answers() {
    for activity in Activity::all() {
        let session = started(activity, 13);
        let view = crate::to_shell_view(&session);
        let text = view.to_string();

        assert!(!text.contains("is_correct"), "{activity:?} view leaks candidate flags");
        assert!(!text.contains("solutions"), "{activity:?} view leaks solution sets");
        assert!(!text.contains("bug_description"), "{activity:?} view leaks the flaw");
        assert!(!text.contains("correct_value"), "{activity:?} view leaks the fix");

        assert_eq!(view["state"], "playing");
        assert_eq!(view["progress"]["score"], 0);
    }
}

#[test]
fn shell_view_reports_selection_power_for_set_rounds_only() {
    let session = started(Activity::PowerSaver, 1);
    let picked = strings(&["LED", "470Ω Resistor", "9V Battery"]);
    assert_eq!(crate::shell_adapter::selection_power_view(&session, &picked), Some(23));

    let quiz = started(Activity::Quiz, 1);
    assert_eq!(crate::shell_adapter::selection_power_view(&quiz, &picked), None);
}
