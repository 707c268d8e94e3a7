//! Answer evaluation: pure correctness rules, no session access.
//!
//! The session owns all score mutation; keeping these functions pure lets the
//! scoring policy change without touching correctness logic.

use std::collections::BTreeSet;

use crate::session_engine::models::{
    Attempt, BuggyCircuit, ChoiceRound, PowerPuzzle, Round, Selection,
};

/// Score one selection against the active round.
///
/// Every selection is scoreable: a selection whose shape does not match the
/// round (a shell bug, not a player error) is recorded as incorrect.
pub fn evaluate(round: &Round, selection: &Selection) -> Attempt {
    let correct = match (round, selection) {
        (Round::Choice(r), Selection::Choice(id))      => scalar_match(r, *id),
        (Round::Flaw(circuit), Selection::Component(id)) => flaw_match(circuit, id),
        (Round::Set(puzzle), Selection::Set(picked))   => set_match(puzzle, picked),
        _ => {
            log::debug!("selection shape does not match round shape; scoring incorrect");
            false
        }
    };

    Attempt {
        selection: selection.clone(),
        correct,
    }
}

/// Scalar rule: the chosen candidate is the target.
pub fn scalar_match(round: &ChoiceRound, chosen: u32) -> bool {
    chosen == round.target_id
}

/// Find-the-flaw rule: correct iff the chosen component exists and is the
/// deliberately flawed one. Clicking a sound component is a miss.
pub fn flaw_match(circuit: &BuggyCircuit, component_id: &str) -> bool {
    circuit
        .components
        .iter()
        .any(|c| c.id == component_id && !c.is_correct)
}

/// Any-of-N exact-set rule: correct iff the selection, as a set, equals the
/// component set of some declared solution. Order and duplicates in the
/// selection are irrelevant; declared wattage is never consulted.
pub fn set_match(puzzle: &PowerPuzzle, picked: &[String]) -> bool {
    let picked: BTreeSet<&str> = picked.iter().map(String::as_str).collect();
    puzzle.solutions.iter().any(|solution| {
        let wanted: BTreeSet<&str> = solution.components.iter().copied().collect();
        picked == wanted
    })
}

/// Total wattage of the picked component kinds, for the shell's live readout.
/// Unknown kinds contribute nothing.
pub fn selection_power(puzzle: &PowerPuzzle, picked: &[String]) -> u32 {
    picked
        .iter()
        .filter_map(|kind| {
            puzzle
                .available
                .iter()
                .find(|c| c.kind == kind.as_str())
                .map(|c| c.power)
        })
        .sum()
}
