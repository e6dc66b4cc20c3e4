pub mod config;
pub mod game;
pub mod grid;
pub mod journal;
pub mod mapgen;
pub mod replay;
pub mod state;
pub mod types;

pub use config::{ConfigError, GameConfig, MAX_PLAYERS};
pub use game::Game;
pub use grid::Grid;
pub use journal::{InputJournal, InputRecord};
pub use mapgen::{GeneratedLevel, MazeGenerator, generate_level};
pub use replay::*;
pub use state::{GameState, Monster, Player};
pub use types::*;
