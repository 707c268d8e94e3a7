//! Round assembly: shuffling, candidate-list construction, and the dispatch
//! that routes each activity to its round builder.
//!
//! Candidate order matters for fairness: without the uniform permutation the
//! correct answer's position would track insertion order and leak the answer
//! pattern over many rounds.

use rand::Rng;

use crate::session_engine::activities::{self, Activity};
use crate::session_engine::error::EngineError;
use crate::session_engine::models::{Choice, Round};

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Form the candidate list for a choice round: distractors plus the one
/// correct answer, uniformly permuted.
pub fn assemble_choices<R: Rng>(
    rng: &mut R,
    target: Choice,
    mut distractors: Vec<Choice>,
) -> Vec<Choice> {
    distractors.push(target);
    shuffle(rng, &mut distractors);
    distractors
}

/// Build the round at `table_index` for `activity`.
///
/// `table_index` addresses the activity's content table and is ignored by the
/// procedural resistor generator. Pool sizes are validated at session start,
/// so an `Err` here means the caller skipped that check.
pub(crate) fn build_round<R: Rng>(
    activity: Activity,
    rng: &mut R,
    table_index: usize,
    distractor_count: usize,
) -> Result<Round, EngineError> {
    match activity {
        Activity::Quiz =>
            Ok(activities::quiz::build_round(rng, table_index)),

        Activity::ResistorColorGame =>
            Ok(activities::resistor_color::build_round(rng, distractor_count)),

        Activity::ComponentDash | Activity::ComponentDetective =>
            activities::component_dash::build_round(rng, table_index, distractor_count),

        Activity::BugHunter =>
            Ok(activities::bug_hunter::build_round(table_index)),

        Activity::PowerSaver =>
            Ok(activities::power_saver::build_round(table_index)),
    }
}
