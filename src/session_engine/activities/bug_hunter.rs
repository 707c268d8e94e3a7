//! Bug hunter: five circuits, each carrying exactly one deliberately flawed
//! component. Circuits are presented in authored order.

use crate::session_engine::models::{BuggyCircuit, CircuitComponent, Round};

pub(crate) fn circuits() -> &'static [BuggyCircuit] {
    CIRCUITS
}

pub(crate) fn build_round(table_index: usize) -> Round {
    Round::Flaw(&CIRCUITS[table_index])
}

const CIRCUITS: &[BuggyCircuit] = &[
    BuggyCircuit {
        id: 1,
        title: "LED Circuit with Wrong Resistor",
        description: "This LED circuit has a resistor that's too small, causing excessive current.",
        components: &[
            CircuitComponent {
                id: "r1",
                kind: "resistor",
                value: Some("10Ω"),
                is_correct: false,
                correct_value: Some("220Ω"),
            },
            CircuitComponent {
                id: "led1",
                kind: "led",
                value: None,
                is_correct: true,
                correct_value: None,
            },
            CircuitComponent {
                id: "bat1",
                kind: "battery",
                value: Some("9V"),
                is_correct: true,
                correct_value: None,
            },
        ],
        bug_description: "The 10Ω resistor is too small and will cause the LED to burn out.",
        solution: "Replace the 10Ω resistor with a 220Ω resistor for safe LED operation.",
    },
    BuggyCircuit {
        id: 2,
        title: "Reversed Capacitor",
        description: "This power supply circuit has a polarized capacitor connected backwards.",
        components: &[
            CircuitComponent {
                id: "c1",
                kind: "capacitor",
                value: Some("1000μF"),
                is_correct: false,
                correct_value: Some("1000μF (reversed)"),
            },
            CircuitComponent {
                id: "r1",
                kind: "resistor",
                value: Some("1kΩ"),
                is_correct: true,
                correct_value: None,
            },
            CircuitComponent {
                id: "bat1",
                kind: "battery",
                value: Some("12V"),
                is_correct: true,
                correct_value: None,
            },
        ],
        bug_description: "The electrolytic capacitor is connected with reversed polarity.",
        solution: "Flip the capacitor so the positive terminal connects to the positive voltage.",
    },
    BuggyCircuit {
        id: 3,
        title: "Missing Current Limiting Resistor",
        description: "This transistor circuit is missing a base current limiting resistor.",
        components: &[
            CircuitComponent {
                id: "t1",
                kind: "transistor",
                value: Some("NPN"),
                is_correct: true,
                correct_value: None,
            },
            CircuitComponent {
                id: "r1",
                kind: "resistor",
                value: Some("1kΩ"),
                is_correct: true,
                correct_value: None,
            },
            CircuitComponent {
                id: "bat1",
                kind: "battery",
                value: Some("5V"),
                is_correct: false,
                correct_value: Some("add 10kΩ base resistor"),
            },
        ],
        bug_description: "Direct connection to transistor base without current limiting resistor.",
        solution: "Add a 10kΩ resistor between the input signal and the transistor base.",
    },
    BuggyCircuit {
        id: 4,
        title: "Incorrect Op-Amp Connections",
        description: "This op-amp circuit has the inverting and non-inverting inputs swapped.",
        components: &[
            CircuitComponent {
                id: "op1",
                kind: "opamp",
                value: None,
                is_correct: false,
                correct_value: Some("inputs swapped"),
            },
            CircuitComponent {
                id: "r1",
                kind: "resistor",
                value: Some("10kΩ"),
                is_correct: true,
                correct_value: None,
            },
            CircuitComponent {
                id: "r2",
                kind: "resistor",
                value: Some("20kΩ"),
                is_correct: true,
                correct_value: None,
            },
        ],
        bug_description: "The inverting (-) and non-inverting (+) inputs are connected incorrectly.",
        solution: "Swap the connections to the op-amp inputs for proper amplification.",
    },
    BuggyCircuit {
        id: 5,
        title: "Wrong Diode Orientation",
        description: "This rectifier circuit has a diode installed backwards.",
        components: &[
            CircuitComponent {
                id: "d1",
                kind: "diode",
                value: None,
                is_correct: false,
                correct_value: Some("reversed"),
            },
            CircuitComponent {
                id: "r1",
                kind: "resistor",
                value: Some("1kΩ"),
                is_correct: true,
                correct_value: None,
            },
            CircuitComponent {
                id: "ac1",
                kind: "ac_source",
                value: Some("12VAC"),
                is_correct: true,
                correct_value: None,
            },
        ],
        bug_description: "The diode is installed backwards, blocking all current flow.",
        solution: "Flip the diode so current can flow in the forward direction.",
    },
];
