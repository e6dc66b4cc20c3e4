//! Procedural level generation split into placement, seeding and progression rules.

pub mod model;
pub mod progression;

mod generator;
pub(crate) mod placement;
mod seed;

pub use generator::MazeGenerator;
pub use model::GeneratedLevel;
pub use progression::STARTING_LEVEL;

pub(crate) use seed::derive_turn_seed;

use crate::config::{ConfigError, GameConfig};

pub fn generate_level(
    run_seed: u64,
    config: &GameConfig,
    level: u8,
) -> Result<GeneratedLevel, ConfigError> {
    MazeGenerator::new(run_seed, config.clone()).generate(level)
}
