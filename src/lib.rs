//! # circuit_trainer
//!
//! A fully offline, deterministic electronics-training session engine.
//!
//! This library runs six learning activities — a twenty-question electronics
//! quiz, a timed resistor colour-code game, schematic-symbol identification
//! in timed (dash) and untimed (detective) variants, a find-the-flaw circuit
//! hunt, and a power-budget building puzzle — on top of one shared session
//! state machine with pluggable correctness rules.
//!
//! ## How it works
//!
//! 1. Build a [`SessionConfig`] for an [`Activity`] (round count, clock, and
//!    distractor count default to the shipped values) and wrap it in a
//!    [`Session`].
//! 2. Call `start()` — the engine validates the content pool, fixes this
//!    run's target order, deals the first round, and arms the countdown for
//!    timed activities.
//! 3. Feed player input to `submit_answer()` and, for timed activities, one
//!    `tick()` per real second. The session scores attempts, advances
//!    rounds, and finishes itself when the rounds or the clock run out.
//! 4. Render from `snapshot()` (or [`to_shell_view`] for a ready-made JSON
//!    projection with the answers stripped); the completion callback fires
//!    exactly once per run with the final score.
//!
//! ## Key features
//!
//! - **Deterministic**: pass a seed via [`SessionConfig::with_seed`] to
//!   reproduce an entire run — every shuffle, sample, and synthesized
//!   resistor — which is what the test-suite's literal scenarios rely on.
//! - **One engine, three rules**: multiple-choice, any-of-N exact-set match,
//!   and find-the-flaw rounds all run through the same lifecycle; activities
//!   are data, not separate state machines.
//! - **Shell-safe projections**: the adapter view carries no `is_correct`
//!   flags, solution sets, or flaw markers, so a renderer cannot leak the
//!   answer no matter what it does with the payload.
//!
//! ## Quick start
//!
//! ```rust
//! use circuit_trainer::{Activity, Round, Selection, Session, SessionConfig, SubmitOutcome};
//!
//! let mut session = Session::new(SessionConfig::new(Activity::Quiz).with_seed(42));
//! session.on_complete(|score| println!("final score: {score}"));
//! session.start().expect("quiz pool is large enough");
//!
//! // Answer whatever is on offer; the snapshot shows the candidates.
//! let first = session.snapshot().round.expect("one active round while playing");
//! if let Round::Choice(round) = first {
//!     let outcome = session.submit_answer(Selection::Choice(round.choices[0].id));
//!     assert!(matches!(outcome, SubmitOutcome::Scored(_)));
//! }
//! println!("score so far: {}", session.score());
//! ```

pub mod session_engine;
pub mod shell_adapter;

// Convenience re-exports so callers can use `circuit_trainer::Session`
// directly without reaching into `session_engine::`.
pub use session_engine::{
    Activity, ActivityInfo, Attempt, BandColor, BuggyCircuit, Choice,
    ChoiceRound, CircuitComponent, ComponentSymbol, ContentItem, Countdown,
    Difficulty, EngineError, ItemId, PowerComponent, PowerPuzzle,
    PowerSolution, Prompt, QuizQuestion, Repository, Round, Selection,
    Session, SessionConfig, SessionSnapshot, SessionState, SubmitOutcome,
    SymbolCategory, TickOutcome,
};
pub use shell_adapter::to_shell_view;

#[cfg(test)]
mod tests;
