//! The resistor colour-code game. Unlike the table-backed activities, every
//! round is synthesized: three band digits are drawn, the resistance computed,
//! and distractor resistances rejection-sampled until pairwise distinct.

use rand::Rng;

use crate::session_engine::generator;
use crate::session_engine::models::{BandColor, Choice, ChoiceRound, Prompt, Round};

/// Resistance and band colours for a three-band code.
///
/// `d1` is the first significant digit (1–9), `d2` the second (0–9), and
/// `multiplier` the exponent band (0–3). Digits outside 0–9 panic.
pub fn from_digits(d1: u32, d2: u32, multiplier: u32) -> (u32, [BandColor; 3]) {
    let resistance = (d1 * 10 + d2) * 10u32.pow(multiplier);
    let bands = [
        BandColor::from_digit(d1),
        BandColor::from_digit(d2),
        BandColor::from_digit(multiplier),
    ];
    (resistance, bands)
}

/// Synthesize one round: a random three-band resistor and `distractor_count`
/// wrong resistances drawn from the same value space.
pub(crate) fn build_round<R: Rng>(rng: &mut R, distractor_count: usize) -> Round {
    let d1 = rng.gen_range(1..=9u32);
    let d2 = rng.gen_range(0..=9u32);
    let multiplier = rng.gen_range(0..=3u32);
    let (resistance, bands) = from_digits(d1, d2, multiplier);

    // Rejection-sample distractors until distinct from the target and from
    // each other. The value space holds 360 resistances, so retries are rare.
    let mut values = vec![resistance];
    while values.len() < distractor_count + 1 {
        let candidate = rng.gen_range(10..100u32) * 10u32.pow(rng.gen_range(0..4u32));
        if !values.contains(&candidate) {
            values.push(candidate);
        }
    }

    let target = Choice {
        id: resistance,
        label: format!("{resistance}Ω"),
        is_correct: true,
    };
    let distractors = values[1..]
        .iter()
        .map(|&v| Choice {
            id: v,
            label: format!("{v}Ω"),
            is_correct: false,
        })
        .collect();

    Round::Choice(ChoiceRound {
        prompt: Prompt::Resistor { bands },
        choices: generator::assemble_choices(rng, target, distractors),
        target_id: resistance,
        explanation: None,
    })
}
