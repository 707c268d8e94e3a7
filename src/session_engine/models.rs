use std::fmt;
use serde::{Deserialize, Serialize};

use crate::session_engine::activities::Activity;

/// Stable identifier of a quizzable unit or candidate answer.
pub type ItemId = u32;

// ---------------------------------------------------------------------------
// Shared content primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard   => write!(f, "hard"),
        }
    }
}

/// The ten-colour resistor band code. Digit value 0–9 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
}

impl BandColor {
    pub const ALL: [BandColor; 10] = [
        BandColor::Black, BandColor::Brown, BandColor::Red, BandColor::Orange,
        BandColor::Yellow, BandColor::Green, BandColor::Blue, BandColor::Violet,
        BandColor::Grey, BandColor::White,
    ];

    /// The digit this band encodes (Black = 0 .. White = 9).
    pub fn digit(self) -> u32 {
        self as u32
    }

    /// Band for a digit; panics if `digit` is not 0–9.
    pub fn from_digit(digit: u32) -> Self {
        Self::ALL[digit as usize]
    }

    /// Swatch colour for rendering the band.
    pub fn hex(self) -> &'static str {
        match self {
            BandColor::Black  => "#000000",
            BandColor::Brown  => "#8B4513",
            BandColor::Red    => "#FF0000",
            BandColor::Orange => "#FFA500",
            BandColor::Yellow => "#FFFF00",
            BandColor::Green  => "#008000",
            BandColor::Blue   => "#0000FF",
            BandColor::Violet => "#800080",
            BandColor::Grey   => "#808080",
            BandColor::White  => "#FFFFFF",
        }
    }
}

impl fmt::Display for BandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BandColor::Black  => "Black",
            BandColor::Brown  => "Brown",
            BandColor::Red    => "Red",
            BandColor::Orange => "Orange",
            BandColor::Yellow => "Yellow",
            BandColor::Green  => "Green",
            BandColor::Blue   => "Blue",
            BandColor::Violet => "Violet",
            BandColor::Grey   => "Grey",
            BandColor::White  => "White",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolCategory {
    Passive,
    Active,
    Power,
    Logic,
}

impl fmt::Display for SymbolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolCategory::Passive => write!(f, "passive"),
            SymbolCategory::Active  => write!(f, "active"),
            SymbolCategory::Power   => write!(f, "power"),
            SymbolCategory::Logic   => write!(f, "logic"),
        }
    }
}

// ---------------------------------------------------------------------------
// Compiled-in content records
// ---------------------------------------------------------------------------

/// One schematic-symbol flash card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentSymbol {
    pub id: ItemId,
    pub name: &'static str,
    pub symbol: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub category: SymbolCategory,
}

/// One authored multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: ItemId,
    pub prompt: &'static str,
    pub choices: [&'static str; 4],
    /// Index into `choices` of the correct answer.
    pub correct: usize,
    pub explanation: &'static str,
    pub difficulty: Difficulty,
}

/// One component instance inside a buggy circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CircuitComponent {
    pub id: &'static str,
    pub kind: &'static str,
    pub value: Option<&'static str>,
    /// `false` marks the deliberately flawed element.
    pub is_correct: bool,
    pub correct_value: Option<&'static str>,
}

/// A labelled circuit containing exactly one flawed component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuggyCircuit {
    pub id: ItemId,
    pub title: &'static str,
    pub description: &'static str,
    pub components: &'static [CircuitComponent],
    pub bug_description: &'static str,
    pub solution: &'static str,
}

/// One selectable part in a power-budget puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerComponent {
    pub kind: &'static str,
    pub quantity: u32,
    /// Consumption in watts while the circuit runs.
    pub power: u32,
}

/// One acceptable component set for a power-budget puzzle. `total_power` is
/// display data; correctness is decided on the set alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerSolution {
    pub components: &'static [&'static str],
    pub total_power: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerPuzzle {
    pub id: ItemId,
    pub title: &'static str,
    pub objective: &'static str,
    pub target_function: &'static str,
    pub available: &'static [PowerComponent],
    pub max_components: usize,
    pub solutions: &'static [PowerSolution],
}

// ---------------------------------------------------------------------------
// Rounds: one generated question, in one of three evaluation shapes
// ---------------------------------------------------------------------------

/// What the player is shown for a choice round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Prompt {
    /// Authored question text.
    Text(&'static str),
    /// Read the colour bands, name the resistance.
    Resistor { bands: [BandColor; 3] },
    /// Identify the component behind a schematic symbol.
    Symbol {
        symbol: &'static str,
        emoji: &'static str,
        description: &'static str,
        category: SymbolCategory,
    },
}

/// One candidate answer in a choice round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub id: ItemId,
    pub label: String,
    pub is_correct: bool,
}

/// A fully assembled multiple-choice round: one target, shuffled candidates,
/// exactly one of which is correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceRound {
    pub prompt: Prompt,
    pub choices: Vec<Choice>,
    pub target_id: ItemId,
    pub explanation: Option<&'static str>,
}

/// One active round, in whichever shape the activity produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Round {
    Choice(ChoiceRound),
    /// Find the one component with `is_correct: false`.
    Flaw(&'static BuggyCircuit),
    /// Build a component set matching any declared solution.
    Set(&'static PowerPuzzle),
}

// ---------------------------------------------------------------------------
// Player input and its evaluation
// ---------------------------------------------------------------------------

/// The player's input for the active round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// A candidate id from a choice round.
    Choice(ItemId),
    /// A component instance id from a flaw round.
    Component(String),
    /// The picked component kinds for a set round; order is irrelevant.
    Set(Vec<String>),
}

/// One scored response. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub selection: Selection,
    pub correct: bool,
}

// ---------------------------------------------------------------------------
// Session configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Ready,
    Playing,
    Finished,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Ready    => write!(f, "ready"),
            SessionState::Playing  => write!(f, "playing"),
            SessionState::Finished => write!(f, "finished"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub activity: Activity,
    pub total_rounds: usize,
    /// Countdown in seconds; `None` runs untimed.
    pub time_limit: Option<u32>,
    /// Incorrect candidates per choice round.
    pub distractor_count: usize,
    /// Fixed seed for reproducible sessions; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl SessionConfig {
    /// Per-activity defaults: round count and clock as shipped.
    pub fn new(activity: Activity) -> Self {
        let (total_rounds, time_limit) = activity.defaults();
        SessionConfig {
            activity,
            total_rounds,
            time_limit,
            distractor_count: 3,
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_rounds(mut self, total_rounds: usize) -> Self {
        self.total_rounds = total_rounds;
        self
    }

    pub fn with_time_limit(mut self, seconds: Option<u32>) -> Self {
        self.time_limit = seconds;
        self
    }
}
