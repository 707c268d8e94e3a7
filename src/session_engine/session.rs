//! The session state machine: `ready → playing → finished`.
//!
//! One engine runs every activity. The session owns its RNG, its active
//! round, and its countdown; the hosting shell drives it with discrete calls
//! (`start`, `submit_answer`, `tick`, `restart`) and reads back snapshots.
//! Out-of-order calls are logged no-ops, never panics: they indicate a
//! shell-timing bug, not a player error.
//!
//! Terminal-transition discipline: both the clock path (`tick` hitting zero)
//! and the answer path (final round submitted) funnel into `finish()`, which
//! checks the current state before applying any effect. Whichever arrives
//! first wins; the loser is a no-op. The countdown is dropped on every exit
//! from `playing`, so a superseded run can never receive a stale tick.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::session_engine::activities::Activity;
use crate::session_engine::countdown::Countdown;
use crate::session_engine::error::EngineError;
use crate::session_engine::evaluator;
use crate::session_engine::generator;
use crate::session_engine::models::{
    Attempt, Round, Selection, SessionConfig, SessionState,
};

/// Result of a `submit_answer` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmitOutcome {
    /// The selection was evaluated and recorded.
    Scored(Attempt),
    /// The call arrived out of order and was dropped.
    Ignored,
}

/// Result of a `tick` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TickOutcome {
    /// Seconds left on the clock.
    Running(u32),
    /// The clock hit zero; the session is now finished.
    Expired,
    /// No clock to tick (untimed, or not playing).
    Ignored,
}

/// Read-only projection of the session for rendering. Never fed back in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub activity: Activity,
    pub state: SessionState,
    pub current_round: usize,
    pub total_rounds: usize,
    pub score: u32,
    pub time_remaining: Option<u32>,
    pub round: Option<Round>,
}

pub struct Session {
    config: SessionConfig,
    state: SessionState,
    current_round: usize,
    score: u32,
    attempts: Vec<Attempt>,
    active: Option<Round>,
    clock: Option<Countdown>,
    /// Table indices of this run's targets, fixed at `start()`. Empty for the
    /// procedural resistor game.
    target_order: Vec<usize>,
    rng: StdRng,
    on_complete: Option<Box<dyn FnMut(u32)>>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Session {
            config,
            state: SessionState::Ready,
            current_round: 0,
            score: 0,
            attempts: Vec::new(),
            active: None,
            clock: None,
            target_order: Vec::new(),
            rng,
            on_complete: None,
        }
    }

    /// Shorthand for a session with the activity's shipped defaults.
    pub fn with_defaults(activity: Activity) -> Self {
        Session::new(SessionConfig::new(activity))
    }

    /// Register the completion callback. Fired exactly once per run, at the
    /// terminal transition, with the final score.
    pub fn on_complete(&mut self, callback: impl FnMut(u32) + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn activity(&self) -> Activity {
        self.config.activity
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Zero-based index of the round in play (or, once finished, the number
    /// of rounds consumed).
    pub fn current_round(&self) -> usize {
        self.current_round
    }

    pub fn total_rounds(&self) -> usize {
        self.config.total_rounds
    }

    pub fn time_remaining(&self) -> Option<u32> {
        self.clock.as_ref().map(Countdown::remaining)
    }

    pub fn active_round(&self) -> Option<&Round> {
        self.active.as_ref()
    }

    /// Every scored attempt of the current run, oldest first.
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            activity: self.config.activity,
            state: self.state,
            current_round: self.current_round,
            total_rounds: self.config.total_rounds,
            score: self.score,
            time_remaining: self.time_remaining(),
            round: self.active.clone(),
        }
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Begin a run: reset per-run state, validate the content pool, deal the
    /// first round, and arm the clock for timed activities.
    ///
    /// `InsufficientPool` is fatal to this call and leaves the session
    /// `ready`. Starting from `finished` is accepted as an implicit restart;
    /// starting mid-play is a logged no-op.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.state == SessionState::Playing {
            log::debug!(
                "{}",
                EngineError::InvalidTransition { op: "start", state: self.state }
            );
            return Ok(());
        }

        self.reset_run_state();
        self.state = SessionState::Ready;
        self.check_pool()?;

        self.target_order = self.build_target_order();
        let first = self.make_round(0)?;
        self.active = Some(first);
        self.clock = self.config.time_limit.map(Countdown::new);
        self.state = SessionState::Playing;
        Ok(())
    }

    /// Score the player's selection against the active round.
    ///
    /// A correct answer bumps the score. Scalar and set rounds are consumed
    /// by every attempt; a flaw round stays active on a miss so the player
    /// can keep hunting. Consuming the final round finishes the session.
    pub fn submit_answer(&mut self, selection: Selection) -> SubmitOutcome {
        if self.state != SessionState::Playing {
            log::debug!(
                "{}",
                EngineError::InvalidTransition { op: "submit_answer", state: self.state }
            );
            return SubmitOutcome::Ignored;
        }
        let Some(round) = self.active.as_ref() else {
            log::debug!("submit_answer dropped: no active round");
            return SubmitOutcome::Ignored;
        };

        let attempt = evaluator::evaluate(round, &selection);
        let consume = attempt.correct || !matches!(round, Round::Flaw(_));

        if attempt.correct {
            self.score += 1;
        }
        self.attempts.push(attempt.clone());

        if consume {
            self.current_round += 1;
            if self.current_round >= self.config.total_rounds {
                self.finish();
            } else {
                match self.make_round(self.current_round) {
                    Ok(round) => self.active = Some(round),
                    // Unreachable after the start-time pool check; finish
                    // with the score earned rather than panic.
                    Err(err) => {
                        log::warn!("round generation failed mid-session: {err}");
                        self.finish();
                    }
                }
            }
        }

        SubmitOutcome::Scored(attempt)
    }

    /// Consume one second of the clock. At zero the session finishes, the
    /// active round is discarded unscored, and no further ticks have any
    /// effect.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != SessionState::Playing {
            log::debug!(
                "{}",
                EngineError::InvalidTransition { op: "tick", state: self.state }
            );
            return TickOutcome::Ignored;
        }
        let Some(clock) = self.clock.as_mut() else {
            log::debug!("tick dropped: activity is untimed");
            return TickOutcome::Ignored;
        };

        let left = clock.tick();
        if left == 0 {
            self.finish();
            TickOutcome::Expired
        } else {
            TickOutcome::Running(left)
        }
    }

    /// Return to `ready`, clearing all per-run state. Never fires the
    /// completion callback; callable from any state, any number of times.
    pub fn restart(&mut self) {
        self.reset_run_state();
        self.state = SessionState::Ready;
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// The single terminal transition. Checking state first makes a second
    /// finish (timeout racing a final submit, duplicate events) a no-op, so
    /// the completion callback fires at most once per run.
    fn finish(&mut self) {
        if self.state == SessionState::Finished {
            return;
        }
        self.state = SessionState::Finished;
        self.active = None;
        self.clock = None;

        let score = self.score;
        if let Some(callback) = self.on_complete.as_mut() {
            callback(score);
        }
    }

    fn reset_run_state(&mut self) {
        self.current_round = 0;
        self.score = 0;
        self.attempts.clear();
        self.active = None;
        self.clock = None;
        self.target_order.clear();
    }

    /// Smallest pool this configuration needs. Checked once, at start;
    /// a pass here means round generation cannot fail mid-run.
    fn check_pool(&self) -> Result<(), EngineError> {
        // A zero-round session could never satisfy its own lifecycle: it
        // would be playing while already meeting the finish condition.
        if self.config.total_rounds == 0 {
            return Err(EngineError::InsufficientPool { needed: 1, available: 0 });
        }
        let activity = self.config.activity;
        let needed = match activity {
            Activity::ResistorColorGame => self.config.distractor_count + 1,
            Activity::ComponentDash | Activity::ComponentDetective => self
                .config
                .total_rounds
                .max(self.config.distractor_count + 1),
            Activity::Quiz | Activity::BugHunter | Activity::PowerSaver => {
                self.config.total_rounds
            }
        };
        let available = activity.pool_len();
        if available < needed {
            return Err(EngineError::InsufficientPool { needed, available });
        }
        Ok(())
    }

    /// Fix this run's target order: authored order for table activities,
    /// a shuffled draw for the pool-sampled ones, nothing for procedural
    /// synthesis.
    fn build_target_order(&mut self) -> Vec<usize> {
        let activity = self.config.activity;
        if activity == Activity::ResistorColorGame {
            return Vec::new();
        }

        let mut order: Vec<usize> = (0..activity.pool_len()).collect();
        if activity.shuffles_targets() {
            generator::shuffle(&mut self.rng, &mut order);
        }
        order.truncate(self.config.total_rounds);
        order
    }

    fn make_round(&mut self, round_index: usize) -> Result<Round, EngineError> {
        let table_index = self.target_order.get(round_index).copied().unwrap_or(0);
        generator::build_round(
            self.config.activity,
            &mut self.rng,
            table_index,
            self.config.distractor_count,
        )
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("activity", &self.config.activity)
            .field("state", &self.state)
            .field("current_round", &self.current_round)
            .field("score", &self.score)
            .field("time_remaining", &self.time_remaining())
            .finish_non_exhaustive()
    }
}
