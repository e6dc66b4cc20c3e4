//! Public data model for a generated level.

use crate::grid::Grid;
use crate::types::{CellKind, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLevel {
    pub level: u8,
    pub grid: Grid,
    /// Start cell per player, in roster order.
    pub player_starts: Vec<Pos>,
    pub goal: Pos,
    pub monster_spawns: Vec<Pos>,
}

impl GeneratedLevel {
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.push(self.level);
        bytes.extend((self.grid.size() as u32).to_le_bytes());
        for cell in self.grid.cells() {
            bytes.push(match cell {
                CellKind::Empty => 0,
                CellKind::Wall => 1,
                CellKind::Obstacle => 2,
                CellKind::Teleporter => 3,
                CellKind::Goal => 4,
                CellKind::Monster => 5,
                CellKind::Player(id) => 16 + id.0,
            });
        }
        bytes.extend((self.player_starts.len() as u32).to_le_bytes());
        for start in &self.player_starts {
            bytes.extend(start.y.to_le_bytes());
            bytes.extend(start.x.to_le_bytes());
        }
        bytes.extend(self.goal.y.to_le_bytes());
        bytes.extend(self.goal.x.to_le_bytes());
        bytes.extend((self.monster_spawns.len() as u32).to_le_bytes());
        for spawn in &self.monster_spawns {
            bytes.extend(spawn.y.to_le_bytes());
            bytes.extend(spawn.x.to_le_bytes());
        }
        bytes
    }
}
