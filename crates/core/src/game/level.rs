//! Level entry and completion: installs generated layouts and walks the level counter.

use log::{debug, info};

use super::*;
use crate::mapgen::GeneratedLevel;
use crate::mapgen::progression::{is_final_level, next_level};
use crate::state::Monster;

impl Game {
    pub(super) fn enter_level(&mut self, level: u8) -> Result<(), ConfigError> {
        let generated = self.generator.generate(level)?;
        self.install_level(generated);
        Ok(())
    }

    /// Replaces grid, goal and monsters wholesale. Players keep health and sword.
    pub(super) fn install_level(&mut self, generated: GeneratedLevel) {
        let size = generated.size();
        let level = generated.level;

        let mut monsters = SlotMap::with_key();
        for pos in generated.monster_spawns {
            let monster =
                Monster { id: MonsterId::default(), pos, health: self.config().monster_health };
            let id = monsters.insert(monster);
            monsters[id].id = id;
        }

        for (player, start) in self.state.players.iter_mut().zip(generated.player_starts) {
            player.pos = start;
        }

        self.state.grid = generated.grid;
        self.state.goal = generated.goal;
        self.state.monsters = monsters;
        self.state.level = level;
        self.session = SessionState::Playing { level };
        self.active_player = PlayerId(0);

        info!("level {level} started on a {size}x{size} grid");
        if is_final_level(level, self.config().max_levels) {
            debug!("level {level} is the final level");
        }
        self.log.push(LogEvent::LevelStarted { level, size });
    }

    pub(super) fn complete_level(&mut self, player: PlayerId, level: u8) -> Result<(), GameError> {
        self.log.push(LogEvent::GoalReached { player, level });
        match next_level(level, self.config().max_levels) {
            Some(next) => self.enter_level(next)?,
            None => {
                info!("all {level} levels complete");
                self.session = SessionState::Finished;
                self.log.push(LogEvent::GameCompleted);
            }
        }
        Ok(())
    }
}
