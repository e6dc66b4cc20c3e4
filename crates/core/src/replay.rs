use thiserror::Error;

use crate::config::ConfigError;
use crate::game::Game;
use crate::journal::InputJournal;
use crate::types::{GameError, PlayerId};

#[derive(Debug, PartialEq, Error)]
pub enum ReplayError {
    #[error("journal config is invalid: {0}")]
    Config(#[from] ConfigError),
    #[error("input {seq} belongs to player {found:?} but player {expected:?} is active")]
    PlayerMismatch { seq: u64, expected: PlayerId, found: PlayerId },
    #[error("input {seq} was rejected: {error}")]
    RejectedInput { seq: u64, error: GameError },
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_snapshot_hash: u64,
    pub final_turn: u64,
    pub final_level: u8,
    pub finished: bool,
}

/// Rebuilds the session by feeding every recorded command back in order.
pub fn replay_journal_inputs(journal: &InputJournal) -> Result<Game, ReplayError> {
    let mut game = Game::new(journal.seed, journal.config.clone())?;
    for record in &journal.inputs {
        let expected = game.active_player();
        if record.player != expected {
            return Err(ReplayError::PlayerMismatch {
                seq: record.seq,
                expected,
                found: record.player,
            });
        }
        game.apply_command(record.command)
            .map_err(|error| ReplayError::RejectedInput { seq: record.seq, error })?;
    }
    Ok(game)
}

pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    let game = replay_journal_inputs(journal)?;
    Ok(ReplayResult {
        final_snapshot_hash: game.snapshot_hash(),
        final_turn: game.turn(),
        final_level: game.level(),
        finished: game.is_finished(),
    })
}
