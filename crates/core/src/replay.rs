use std::error::Error;
use std::fmt;

use crate::game::Game;
use crate::journal::InputJournal;
use crate::types::{GameError, RunOutcome, TurnOutcome};

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    Setup(GameError),
    RejectedInput { seq: u64 },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup(err) => write!(f, "cannot start session from journal: {err}"),
            Self::RejectedInput { seq } => write!(f, "journaled input #{seq} was rejected"),
        }
    }
}

impl Error for ReplayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Setup(err) => Some(err),
            Self::RejectedInput { .. } => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_depth: u32,
    pub final_turn: u64,
    pub outcome: Option<RunOutcome>,
    pub final_snapshot_hash: u64,
}

/// Rebuilds a session from the journal seed and rules and re-applies every input.
/// Recorded inputs were all accepted once, so any `Ignored` move or upgrade error
/// means the journal does not belong to this rule set or build.
pub fn replay(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::new(journal.seed, journal.rules.clone()).map_err(ReplayError::Setup)?;

    for record in &journal.inputs {
        match game.apply_intent(record.payload.intent()) {
            Ok(TurnOutcome::Ignored) | Err(_) => {
                return Err(ReplayError::RejectedInput { seq: record.seq });
            }
            Ok(_) => {}
        }
    }

    Ok(ReplayResult {
        final_depth: game.depth(),
        final_turn: game.turn(),
        outcome: game.outcome(),
        final_snapshot_hash: game.snapshot_hash(),
    })
}
