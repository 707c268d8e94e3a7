//! Render-ready projection of a session for the hosting shell.
//!
//! The engine's own types carry `is_correct` flags, declared solutions, and
//! flaw markers so the evaluator and tests can see them. The shell does not
//! need any of that to draw a screen, and a projection that omits them
//! cannot leak an answer. This module builds that stripped JSON view.

use serde_json::{json, Value};

use crate::session_engine::evaluator::selection_power;
use crate::session_engine::models::{Prompt, Round, Selection};
use crate::session_engine::session::Session;

/// Full shell view: progress header plus the public part of the active round.
pub fn to_shell_view(session: &Session) -> Value {
    let snapshot = session.snapshot();
    json!({
        "activity": session.activity().info().title,
        "state": snapshot.state.to_string(),
        "round": snapshot.round.as_ref().map(round_view),
        "progress": {
            "current_round": snapshot.current_round,
            "total_rounds": snapshot.total_rounds,
            "score": snapshot.score,
            "time_remaining": snapshot.time_remaining,
        },
    })
}

/// Live wattage readout for a set round's current selection; `None` when the
/// active round is not a power puzzle.
pub fn selection_power_view(session: &Session, picked: &[String]) -> Option<u32> {
    match session.active_round() {
        Some(Round::Set(puzzle)) => Some(selection_power(puzzle, picked)),
        _ => None,
    }
}

/// Echo a selection back in the same shape the view uses, for shells that
/// render a confirmation row.
pub fn selection_view(selection: &Selection) -> Value {
    match selection {
        Selection::Choice(id)      => json!({ "kind": "choice", "id": id }),
        Selection::Component(id)   => json!({ "kind": "component", "id": id }),
        Selection::Set(components) => json!({ "kind": "set", "components": components }),
    }
}

fn round_view(round: &Round) -> Value {
    match round {
        Round::Choice(r) => {
            // Candidates go out without is_correct; the shell colours the
            // feedback from the submit outcome instead.
            let choices: Vec<Value> = r
                .choices
                .iter()
                .map(|c| json!({ "id": c.id, "label": c.label }))
                .collect();
            json!({
                "kind": "choice",
                "prompt": prompt_view(&r.prompt),
                "choices": choices,
            })
        }
        Round::Flaw(circuit) => {
            let components: Vec<Value> = circuit
                .components
                .iter()
                .map(|c| json!({ "id": c.id, "type": c.kind, "value": c.value }))
                .collect();
            json!({
                "kind": "find_the_flaw",
                "title": circuit.title,
                "description": circuit.description,
                "components": components,
            })
        }
        Round::Set(puzzle) => {
            let available: Vec<Value> = puzzle
                .available
                .iter()
                .map(|c| json!({
                    "type": c.kind,
                    "quantity": c.quantity,
                    "power": c.power,
                }))
                .collect();
            json!({
                "kind": "power_puzzle",
                "title": puzzle.title,
                "objective": puzzle.objective,
                "target_function": puzzle.target_function,
                "available": available,
                "max_components": puzzle.max_components,
            })
        }
    }
}

fn prompt_view(prompt: &Prompt) -> Value {
    match prompt {
        Prompt::Text(text) => json!({ "kind": "text", "text": text }),
        Prompt::Resistor { bands } => {
            let bands: Vec<Value> = bands
                .iter()
                .map(|b| json!({ "name": b.to_string(), "hex": b.hex() }))
                .collect();
            json!({ "kind": "resistor", "bands": bands })
        }
        Prompt::Symbol { symbol, emoji, description, category } => json!({
            "kind": "symbol",
            "symbol": symbol,
            "emoji": emoji,
            "description": description,
            "category": category.to_string(),
        }),
    }
}
