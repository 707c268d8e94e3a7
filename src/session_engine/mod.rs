//! Core session engine — content pools, round generation, scoring, and the
//! session lifecycle shared by every activity.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | All shared types: content records, rounds, selections, config |
//! | `error`      | `EngineError` taxonomy (`InsufficientPool`, `InvalidTransition`) |
//! | `repository` | Read-only content pools with uniform exclusion sampling |
//! | `generator`  | Fisher-Yates shuffle, candidate assembly, round dispatch |
//! | `evaluator`  | Pure correctness rules: scalar, any-of-N set, find-the-flaw |
//! | `countdown`  | Per-second clock for the timed activities |
//! | `session`    | The `ready → playing → finished` state machine |
//! | `activities` | Six activity definitions with their content tables |

pub mod activities;
pub mod countdown;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod models;
pub mod repository;
pub mod session;

// Re-export the public API surface so callers can use
// `session_engine::Session` without reaching into sub-modules.
pub use activities::{Activity, ActivityInfo};
pub use countdown::Countdown;
pub use error::EngineError;
pub use models::{
    Attempt, BandColor, BuggyCircuit, Choice, ChoiceRound, CircuitComponent,
    ComponentSymbol, Difficulty, ItemId, PowerComponent, PowerPuzzle,
    PowerSolution, Prompt, QuizQuestion, Round, Selection, SessionConfig,
    SessionState, SymbolCategory,
};
pub use repository::{ContentItem, Repository};
pub use session::{Session, SessionSnapshot, SubmitOutcome, TickOutcome};
