//! Power saver: build a circuit from the offered parts so the selection
//! matches one of the puzzle's declared solution sets. Puzzles run in
//! authored order.

use crate::session_engine::models::{PowerComponent, PowerPuzzle, PowerSolution, Round};

pub(crate) fn puzzles() -> &'static [PowerPuzzle] {
    PUZZLES
}

pub(crate) fn build_round(table_index: usize) -> Round {
    Round::Set(&PUZZLES[table_index])
}

const PUZZLES: &[PowerPuzzle] = &[
    PowerPuzzle {
        id: 1,
        title: "Efficient LED Driver",
        objective: "Light an LED with minimum power consumption",
        target_function: "Illuminate LED at safe brightness",
        available: &[
            PowerComponent { kind: "LED", quantity: 1, power: 20 },
            PowerComponent { kind: "220Ω Resistor", quantity: 2, power: 5 },
            PowerComponent { kind: "470Ω Resistor", quantity: 2, power: 3 },
            PowerComponent { kind: "1kΩ Resistor", quantity: 2, power: 2 },
            PowerComponent { kind: "9V Battery", quantity: 1, power: 0 },
        ],
        max_components: 3,
        solutions: &[
            PowerSolution {
                components: &["LED", "470Ω Resistor", "9V Battery"],
                total_power: 23,
            },
            PowerSolution {
                components: &["LED", "1kΩ Resistor", "9V Battery"],
                total_power: 22,
            },
        ],
    },
    PowerPuzzle {
        id: 2,
        title: "Low Power Amplifier",
        objective: "Create a simple amplifier using minimal components",
        target_function: "Amplify audio signal with low power consumption",
        available: &[
            PowerComponent { kind: "NPN Transistor", quantity: 1, power: 15 },
            PowerComponent { kind: "1kΩ Resistor", quantity: 3, power: 2 },
            PowerComponent { kind: "10kΩ Resistor", quantity: 2, power: 1 },
            PowerComponent { kind: "100μF Capacitor", quantity: 2, power: 1 },
            PowerComponent { kind: "12V Battery", quantity: 1, power: 0 },
        ],
        max_components: 5,
        solutions: &[PowerSolution {
            components: &[
                "NPN Transistor",
                "10kΩ Resistor",
                "1kΩ Resistor",
                "100μF Capacitor",
                "12V Battery",
            ],
            total_power: 19,
        }],
    },
    PowerPuzzle {
        id: 3,
        title: "Voltage Divider Challenge",
        objective: "Create 5V output from 12V input with minimal power loss",
        target_function: "Output exactly 5V with lowest current draw",
        available: &[
            PowerComponent { kind: "1kΩ Resistor", quantity: 3, power: 12 },
            PowerComponent { kind: "2.2kΩ Resistor", quantity: 2, power: 5 },
            PowerComponent { kind: "4.7kΩ Resistor", quantity: 2, power: 3 },
            PowerComponent { kind: "10kΩ Resistor", quantity: 2, power: 1 },
            PowerComponent { kind: "12V Battery", quantity: 1, power: 0 },
        ],
        max_components: 3,
        solutions: &[
            PowerSolution {
                components: &["10kΩ Resistor", "10kΩ Resistor", "12V Battery"],
                total_power: 2,
            },
            PowerSolution {
                components: &["4.7kΩ Resistor", "4.7kΩ Resistor", "12V Battery"],
                total_power: 6,
            },
        ],
    },
];
