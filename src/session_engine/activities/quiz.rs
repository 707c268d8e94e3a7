//! The authored electronics quiz: twenty fixed questions, asked in authored
//! order with candidate answers shuffled per round.

use rand::Rng;

use crate::session_engine::generator;
use crate::session_engine::models::{
    Choice, ChoiceRound, Difficulty, ItemId, Prompt, QuizQuestion, Round,
};

pub(crate) fn questions() -> &'static [QuizQuestion] {
    QUESTIONS
}

/// Build the round for the question at `table_index`, with the authored
/// options shuffled so the correct answer's position carries no signal.
pub(crate) fn build_round<R: Rng>(rng: &mut R, table_index: usize) -> Round {
    let q = &QUESTIONS[table_index];

    let mut choices: Vec<Choice> = q
        .choices
        .iter()
        .enumerate()
        .map(|(i, text)| Choice {
            id: i as ItemId,
            label: (*text).to_string(),
            is_correct: i == q.correct,
        })
        .collect();
    generator::shuffle(rng, &mut choices);

    Round::Choice(ChoiceRound {
        prompt: Prompt::Text(q.prompt),
        choices,
        target_id: q.correct as ItemId,
        explanation: Some(q.explanation),
    })
}

const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: 1,
        prompt: "What is the unit of electrical resistance?",
        choices: ["Ampere", "Volt", "Ohm", "Watt"],
        correct: 2,
        explanation: "The ohm (Ω) is the unit of electrical resistance, named after Georg Ohm.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        id: 2,
        prompt: "According to Ohm's law, if voltage increases and resistance stays constant, what happens to current?",
        choices: ["Decreases", "Increases", "Stays the same", "Becomes zero"],
        correct: 1,
        explanation: "According to Ohm's law (V = I × R), if voltage increases and resistance is constant, current must increase proportionally.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        id: 3,
        prompt: "What does the first color band on a resistor represent?",
        choices: ["Tolerance", "Multiplier", "Second digit", "First digit"],
        correct: 3,
        explanation: "The first color band represents the first significant digit of the resistance value.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        id: 4,
        prompt: "A capacitor stores energy in the form of:",
        choices: ["Magnetic field", "Electric field", "Heat", "Light"],
        correct: 1,
        explanation: "Capacitors store electrical energy in an electric field between their plates.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        id: 5,
        prompt: "What is the total resistance of two 100Ω resistors connected in series?",
        choices: ["50Ω", "100Ω", "200Ω", "400Ω"],
        correct: 2,
        explanation: "In series connection, total resistance equals the sum of individual resistances: 100Ω + 100Ω = 200Ω",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        id: 6,
        prompt: "What is the total resistance of two 100Ω resistors connected in parallel?",
        choices: ["25Ω", "50Ω", "100Ω", "200Ω"],
        correct: 1,
        explanation: "In parallel: 1/Rtotal = 1/R1 + 1/R2 = 1/100 + 1/100 = 2/100, so Rtotal = 50Ω",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        id: 7,
        prompt: "What does LED stand for?",
        choices: [
            "Light Emitting Diode",
            "Low Energy Device",
            "Linear Electronic Display",
            "Liquid Electric Display",
        ],
        correct: 0,
        explanation: "LED stands for Light Emitting Diode - a semiconductor device that emits light when current passes through it.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        id: 8,
        prompt: "Which component allows current to flow in only one direction?",
        choices: ["Resistor", "Capacitor", "Diode", "Inductor"],
        correct: 2,
        explanation: "A diode is a semiconductor device that allows current to flow in only one direction.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        id: 9,
        prompt: "What is the typical voltage of a standard AA battery?",
        choices: ["1.2V", "1.5V", "3V", "9V"],
        correct: 1,
        explanation: "A standard alkaline AA battery provides approximately 1.5 volts.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        id: 10,
        prompt: "In a transistor, what are the three terminals called?",
        choices: [
            "Anode, Cathode, Grid",
            "Base, Collector, Emitter",
            "Source, Drain, Gate",
            "Positive, Negative, Ground",
        ],
        correct: 1,
        explanation: "A bipolar transistor has three terminals: Base, Collector, and Emitter.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        id: 11,
        prompt: "What happens to the total capacitance when capacitors are connected in parallel?",
        choices: ["Decreases", "Increases", "Stays the same", "Becomes zero"],
        correct: 1,
        explanation: "In parallel connection, total capacitance is the sum of individual capacitances, so it increases.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        id: 12,
        prompt: "What is the power dissipated by a 100Ω resistor with 2A current flowing through it?",
        choices: ["200W", "400W", "50W", "100W"],
        correct: 1,
        explanation: "Power = I²R = (2A)² × 100Ω = 4 × 100 = 400W",
        difficulty: Difficulty::Hard,
    },
    QuizQuestion {
        id: 13,
        prompt: "What does PWM stand for in electronics?",
        choices: [
            "Power Wave Modulation",
            "Pulse Width Modulation",
            "Phase Wave Management",
            "Positive Wave Motion",
        ],
        correct: 1,
        explanation: "PWM stands for Pulse Width Modulation - a technique for controlling power delivery.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        id: 14,
        prompt: "Which law states that the sum of currents entering a node equals the sum leaving?",
        choices: [
            "Ohm's Law",
            "Kirchhoff's Current Law",
            "Faraday's Law",
            "Lenz's Law",
        ],
        correct: 1,
        explanation: "Kirchhoff's Current Law (KCL) states that the algebraic sum of currents at any node is zero.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        id: 15,
        prompt: "What is the impedance of a pure capacitor at zero frequency (DC)?",
        choices: ["Zero", "Infinite", "Equal to capacitance", "Equal to 1/C"],
        correct: 1,
        explanation: "At DC (zero frequency), a capacitor acts as an open circuit, so impedance is infinite.",
        difficulty: Difficulty::Hard,
    },
    QuizQuestion {
        id: 16,
        prompt: "What is the frequency of AC mains power in most countries?",
        choices: ["50Hz", "60Hz", "Both 50Hz and 60Hz", "100Hz"],
        correct: 2,
        explanation: "Most countries use either 50Hz (Europe, Asia, Africa) or 60Hz (North America, parts of South America).",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        id: 17,
        prompt: "What does IC stand for in electronics?",
        choices: [
            "Internal Circuit",
            "Integrated Circuit",
            "Individual Component",
            "Insulated Conductor",
        ],
        correct: 1,
        explanation: "IC stands for Integrated Circuit - a semiconductor device containing multiple electronic components.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        id: 18,
        prompt: "In which configuration do operational amplifiers have the highest input impedance?",
        choices: ["Inverting", "Non-inverting", "Differential", "Common mode"],
        correct: 1,
        explanation: "Non-inverting configuration has higher input impedance because the input signal is applied to the positive terminal.",
        difficulty: Difficulty::Hard,
    },
    QuizQuestion {
        id: 19,
        prompt: "What is the typical forward voltage drop across a silicon diode?",
        choices: ["0.3V", "0.7V", "1.2V", "3.3V"],
        correct: 1,
        explanation: "A silicon diode typically has a forward voltage drop of approximately 0.7V when conducting.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        id: 20,
        prompt: "Which component is used to step up or step down AC voltage?",
        choices: ["Resistor", "Capacitor", "Transformer", "Inductor"],
        correct: 2,
        explanation: "A transformer uses electromagnetic induction to step up or step down AC voltage levels.",
        difficulty: Difficulty::Easy,
    },
];
