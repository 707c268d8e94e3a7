//! The six training activities, one module each, plus the `Activity` selector
//! the session engine dispatches on.
//!
//! | Module            | Rounds | Clock | Rule   |
//! |-------------------|--------|-------|--------|
//! | `quiz`            | 20     | —     | scalar |
//! | `resistor_color`  | 20     | 120 s | scalar |
//! | `component_dash`  | 15     | 90 s  | scalar |
//! | (detective)       | 10     | —     | scalar |
//! | `bug_hunter`      | 5      | 180 s | flaw   |
//! | `power_saver`     | 3      | —     | set    |
//!
//! The detective variant is a configuration over the `component_dash` pool
//! rather than a module of its own.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::session_engine::models::Difficulty;

pub mod bug_hunter;
pub mod component_dash;
pub mod power_saver;
pub mod quiz;
pub mod resistor_color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    Quiz,
    ResistorColorGame,
    ComponentDash,
    ComponentDetective,
    BugHunter,
    PowerSaver,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().title)
    }
}

/// Catalogue metadata the shell shows on its menu screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub objective: &'static str,
    pub difficulty: Difficulty,
    pub estimated_time: &'static str,
}

impl Activity {
    /// All activities in menu order.
    pub fn all() -> [Activity; 6] {
        [
            Activity::Quiz,
            Activity::ResistorColorGame,
            Activity::ComponentDash,
            Activity::ComponentDetective,
            Activity::BugHunter,
            Activity::PowerSaver,
        ]
    }

    /// Default round count and clock, as shipped.
    pub(crate) fn defaults(self) -> (usize, Option<u32>) {
        match self {
            Activity::Quiz               => (20, None),
            Activity::ResistorColorGame  => (20, Some(120)),
            Activity::ComponentDash      => (15, Some(90)),
            Activity::ComponentDetective => (10, None),
            Activity::BugHunter          => (5, Some(180)),
            Activity::PowerSaver         => (3, None),
        }
    }

    /// Size of the activity's content pool. The resistor game synthesizes
    /// values from `(10..100) × 10^(0..4)`, 360 distinct resistances.
    pub(crate) fn pool_len(self) -> usize {
        match self {
            Activity::Quiz => quiz::questions().len(),
            Activity::ResistorColorGame => 360,
            Activity::ComponentDash | Activity::ComponentDetective => {
                component_dash::symbols().len()
            }
            Activity::BugHunter => bug_hunter::circuits().len(),
            Activity::PowerSaver => power_saver::puzzles().len(),
        }
    }

    /// True for activities whose targets are drawn from a shuffled pool
    /// rather than presented in authored order.
    pub(crate) fn shuffles_targets(self) -> bool {
        matches!(self, Activity::ComponentDash | Activity::ComponentDetective)
    }

    pub fn info(self) -> ActivityInfo {
        match self {
            Activity::Quiz => ActivityInfo {
                title: "Electronics Quiz",
                description: "Twenty questions covering components, circuit laws, and everyday electronics knowledge.",
                objective: "Answer all questions correctly",
                difficulty: Difficulty::Medium,
                estimated_time: "10-15 minutes",
            },
            Activity::ResistorColorGame => ActivityInfo {
                title: "Resistor Color Code Master",
                description: "Match resistor color bands to their resistance values in this fast-paced memory game.",
                objective: "Correctly identify 20 resistor values within 2 minutes",
                difficulty: Difficulty::Easy,
                estimated_time: "3-5 minutes",
            },
            Activity::ComponentDash => ActivityInfo {
                title: "Component Dash",
                description: "Name schematic symbols against the clock.",
                objective: "Identify 15 symbols in 90 seconds",
                difficulty: Difficulty::Medium,
                estimated_time: "2-3 minutes",
            },
            Activity::ComponentDetective => ActivityInfo {
                title: "Component Detective",
                description: "Identify mystery electronic components from their symbols and characteristics.",
                objective: "Identify 10 components correctly",
                difficulty: Difficulty::Medium,
                estimated_time: "10-15 minutes",
            },
            Activity::BugHunter => ActivityInfo {
                title: "Bug Hunter",
                description: "Each circuit hides one error. Find it before time runs out.",
                objective: "Find the flaw in 5 circuits within 3 minutes",
                difficulty: Difficulty::Medium,
                estimated_time: "3-5 minutes",
            },
            Activity::PowerSaver => ActivityInfo {
                title: "Power Saver",
                description: "Complete circuit objectives using the minimum power consumption.",
                objective: "Find the efficient build for 3 circuits",
                difficulty: Difficulty::Hard,
                estimated_time: "5-10 minutes",
            },
        }
    }
}
