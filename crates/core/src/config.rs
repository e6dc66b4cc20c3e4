//! Tunable game rules. Every field has a default matching the classic
//! two-player, three-level game, so a partial TOML table is enough.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest player count that still renders as a single digit.
pub const MAX_PLAYERS: u8 = 9;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_count: u8,
    pub max_levels: u8,
    pub min_size: usize,
    pub max_size: usize,
    pub obstacle_count: usize,
    pub teleporter_count: usize,
    /// Wall draws per level are `size * size / wall_divisor`.
    pub wall_divisor: usize,
    pub monster_probability: f64,
    pub monster_health: i32,
    pub player_health: i32,
    pub attack_damage: i32,
    pub regen_amount: i32,
    pub starting_sword: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            max_levels: 3,
            min_size: 10,
            max_size: 15,
            obstacle_count: 15,
            teleporter_count: 5,
            wall_divisor: 4,
            monster_probability: 0.2,
            monster_health: 50,
            player_health: 100,
            attack_damage: 20,
            regen_amount: 40,
            starting_sword: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("player_count must be between 1 and {MAX_PLAYERS}, got {0}")]
    PlayerCount(u8),
    #[error("max_levels must be at least 1")]
    NoLevels,
    #[error("min_size must be at least 2, got {0}")]
    GridTooSmall(usize),
    #[error("final level needs a {needed}x{needed} grid but max_size is {max_size}")]
    GridTooLarge { needed: usize, max_size: usize },
    #[error("wall_divisor must be at least 1")]
    WallDivisor,
    #[error("monster_probability must be within [0, 1], got {0}")]
    Probability(f64),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: i32 },
    #[error("level {level} needs up to {needed} claimed cells but only has {cells}")]
    Overcrowded { level: u8, needed: usize, cells: usize },
    #[error("no empty cell left for {feature} on level {level}")]
    GridExhausted { feature: &'static str, level: u8 },
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count == 0 || self.player_count > MAX_PLAYERS {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.max_levels == 0 {
            return Err(ConfigError::NoLevels);
        }
        if self.min_size < 2 {
            return Err(ConfigError::GridTooSmall(self.min_size));
        }
        let needed = self.level_size(self.max_levels);
        if needed > self.max_size {
            return Err(ConfigError::GridTooLarge { needed, max_size: self.max_size });
        }
        if self.wall_divisor == 0 {
            return Err(ConfigError::WallDivisor);
        }
        if !(0.0..=1.0).contains(&self.monster_probability) {
            return Err(ConfigError::Probability(self.monster_probability));
        }
        for (field, value) in [
            ("monster_health", self.monster_health),
            ("player_health", self.player_health),
            ("attack_damage", self.attack_damage),
            ("regen_amount", self.regen_amount),
        ] {
            if value <= 0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        for level in 1..=self.max_levels {
            let size = self.level_size(level);
            let needed = usize::from(self.player_count)
                + 1
                + self.obstacle_count
                + self.wall_attempts(size)
                + self.teleporter_count;
            if needed > size * size {
                return Err(ConfigError::Overcrowded { level, needed, cells: size * size });
            }
        }
        Ok(())
    }

    /// Side length of the square grid for a 1-based level index.
    pub fn level_size(&self, level: u8) -> usize {
        self.min_size + usize::from(level.saturating_sub(1))
    }

    pub fn wall_attempts(&self, size: usize) -> usize {
        size * size / self.wall_divisor
    }
}
