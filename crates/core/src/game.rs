//! Game session: owns the roster, the current level and the turn-time random stream.
//! Level flow lives in `level`, command handling in `turn`, and the resolver
//! operations in `movement` and `combat`.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use crate::config::{ConfigError, GameConfig};
use crate::grid::Grid;
use crate::mapgen::{MazeGenerator, STARTING_LEVEL, derive_turn_seed};
use crate::state::{GameState, Player};
use crate::types::*;

mod combat;
mod hash;
mod level;
mod movement;
mod turn;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub struct Game {
    seed: u64,
    generator: MazeGenerator,
    rng: ChaCha8Rng,
    state: GameState,
    session: SessionState,
    active_player: PlayerId,
    turn: u64,
    log: Vec<LogEvent>,
}

impl Game {
    pub fn new(seed: u64, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let players = (0..config.player_count)
            .map(|index| {
                Player::new(PlayerId(index), config.player_health, config.starting_sword)
            })
            .collect();
        let state = GameState {
            level: STARTING_LEVEL,
            grid: Grid::new(config.min_size),
            goal: Pos { y: 0, x: 0 },
            players,
            monsters: SlotMap::with_key(),
        };

        let mut game = Self {
            seed,
            generator: MazeGenerator::new(seed, config),
            rng: ChaCha8Rng::seed_from_u64(derive_turn_seed(seed)),
            state,
            session: SessionState::Playing { level: STARTING_LEVEL },
            active_player: PlayerId(0),
            turn: 0,
            log: Vec::new(),
        };
        game.enter_level(STARTING_LEVEL)?;
        Ok(game)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        self.generator.config()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn level(&self) -> u8 {
        self.state.level
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn is_finished(&self) -> bool {
        self.session == SessionState::Finished
    }

    /// Player whose command is resolved next.
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Number of accepted commands so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn is_level_complete(&self) -> bool {
        self.state.is_level_complete()
    }

    pub fn player_status(&self, player: PlayerId) -> PlayerStatus {
        self.state.player(player).status()
    }

    pub fn grant_sword(&mut self, player: PlayerId) {
        self.state.players[player.index()].has_sword = true;
    }
}
