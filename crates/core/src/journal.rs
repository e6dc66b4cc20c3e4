use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::{Command, PlayerId};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Accepted commands of one session, enough to rebuild it from the seed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub build_id: String,
    pub seed: u64,
    pub config: GameConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub player: PlayerId,
    pub command: Command,
}

impl InputJournal {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            build_id: env!("CARGO_PKG_VERSION").to_string(),
            seed,
            config,
            inputs: Vec::new(),
        }
    }

    pub fn append(&mut self, player: PlayerId, command: Command) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, player, command });
    }
}
