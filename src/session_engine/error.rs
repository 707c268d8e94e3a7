//! Engine error taxonomy.
//!
//! Deliberately narrow: `InsufficientPool` is a configuration error caught at
//! session start and fatal to that `start()` call; `InvalidTransition` is a
//! defensive guard for out-of-order calls (double submit, stale timer tick)
//! that the engine logs and swallows rather than surfacing to the player.

use thiserror::Error;

use crate::session_engine::models::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The content pool cannot supply enough distinct items for the
    /// configured session.
    #[error("content pool holds {available} eligible items, {needed} needed")]
    InsufficientPool { needed: usize, available: usize },

    /// An operation arrived in a state that cannot accept it.
    #[error("{op} ignored while session is {state}")]
    InvalidTransition { op: &'static str, state: SessionState },
}

impl EngineError {
    /// Returns `true` if this error must abort session setup rather than be
    /// swallowed as a no-op.
    pub fn is_setup_failure(&self) -> bool {
        matches!(self, EngineError::InsufficientPool { .. })
    }
}
