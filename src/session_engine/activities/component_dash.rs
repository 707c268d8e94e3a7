//! Schematic-symbol identification: the shared symbol pool and the
//! pool-sampled choice rounds used by both the timed dash and the untimed
//! detective variant.

use rand::Rng;

use crate::session_engine::error::EngineError;
use crate::session_engine::generator;
use crate::session_engine::models::{
    Choice, ChoiceRound, ComponentSymbol, Prompt, Round, SymbolCategory,
};
use crate::session_engine::repository::Repository;

pub(crate) fn symbols() -> &'static [ComponentSymbol] {
    SYMBOLS
}

pub(crate) fn repository() -> Repository<ComponentSymbol> {
    Repository::new(SYMBOLS)
}

/// Build a round asking for the symbol at `table_index`, with distractor
/// names sampled from the rest of the pool.
pub(crate) fn build_round<R: Rng>(
    rng: &mut R,
    table_index: usize,
    distractor_count: usize,
) -> Result<Round, EngineError> {
    let target = &SYMBOLS[table_index];
    let sampled = repository().sample(rng, distractor_count, &[target.id])?;

    let distractors = sampled
        .iter()
        .map(|s| Choice {
            id: s.id,
            label: s.name.to_string(),
            is_correct: false,
        })
        .collect();
    let correct = Choice {
        id: target.id,
        label: target.name.to_string(),
        is_correct: true,
    };

    Ok(Round::Choice(ChoiceRound {
        prompt: Prompt::Symbol {
            symbol: target.symbol,
            emoji: target.emoji,
            description: target.description,
            category: target.category,
        },
        choices: generator::assemble_choices(rng, correct, distractors),
        target_id: target.id,
        explanation: Some(target.description),
    }))
}

const SYMBOLS: &[ComponentSymbol] = &[
    ComponentSymbol {
        id: 1,
        name: "Resistor",
        symbol: "⚡",
        emoji: "🔲",
        description: "Limits current flow",
        category: SymbolCategory::Passive,
    },
    ComponentSymbol {
        id: 2,
        name: "Capacitor",
        symbol: "||",
        emoji: "⚡",
        description: "Stores electrical energy",
        category: SymbolCategory::Passive,
    },
    ComponentSymbol {
        id: 3,
        name: "Inductor",
        symbol: "🌀",
        emoji: "🔄",
        description: "Stores magnetic energy",
        category: SymbolCategory::Passive,
    },
    ComponentSymbol {
        id: 4,
        name: "Diode",
        symbol: "▶|",
        emoji: "🔺",
        description: "One-way current flow",
        category: SymbolCategory::Active,
    },
    ComponentSymbol {
        id: 5,
        name: "LED",
        symbol: "💡",
        emoji: "💡",
        description: "Light emitting diode",
        category: SymbolCategory::Active,
    },
    ComponentSymbol {
        id: 6,
        name: "Zener Diode",
        symbol: "▶|◀",
        emoji: "⚡",
        description: "Voltage regulator",
        category: SymbolCategory::Active,
    },
    ComponentSymbol {
        id: 7,
        name: "NPN Transistor",
        symbol: "🔺",
        emoji: "📡",
        description: "Current amplifier/switch",
        category: SymbolCategory::Active,
    },
    ComponentSymbol {
        id: 8,
        name: "PNP Transistor",
        symbol: "🔻",
        emoji: "📡",
        description: "Current amplifier/switch",
        category: SymbolCategory::Active,
    },
    ComponentSymbol {
        id: 9,
        name: "MOSFET",
        symbol: "🔲",
        emoji: "🎛️",
        description: "Voltage controlled switch",
        category: SymbolCategory::Active,
    },
    ComponentSymbol {
        id: 10,
        name: "Op-Amp",
        symbol: "🔺",
        emoji: "📈",
        description: "Operational amplifier",
        category: SymbolCategory::Logic,
    },
    ComponentSymbol {
        id: 11,
        name: "AND Gate",
        symbol: "&",
        emoji: "🔗",
        description: "Logic AND operation",
        category: SymbolCategory::Logic,
    },
    ComponentSymbol {
        id: 12,
        name: "OR Gate",
        symbol: "≥1",
        emoji: "🔀",
        description: "Logic OR operation",
        category: SymbolCategory::Logic,
    },
    ComponentSymbol {
        id: 13,
        name: "NOT Gate",
        symbol: "¬",
        emoji: "🚫",
        description: "Logic NOT (inverter)",
        category: SymbolCategory::Logic,
    },
    ComponentSymbol {
        id: 14,
        name: "Battery",
        symbol: "🔋",
        emoji: "🔋",
        description: "DC power source",
        category: SymbolCategory::Power,
    },
    ComponentSymbol {
        id: 15,
        name: "Ground",
        symbol: "⏚",
        emoji: "🌍",
        description: "Reference point (0V)",
        category: SymbolCategory::Power,
    },
];
