use slotmap::SlotMap;

use crate::grid::Grid;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub pos: Pos,
    pub health: i32,
    pub has_sword: bool,
}

impl Player {
    pub fn new(id: PlayerId, health: i32, has_sword: bool) -> Self {
        Self { id, pos: Pos { y: 0, x: 0 }, health, has_sword }
    }

    pub fn symbol(&self) -> char {
        self.id.symbol()
    }

    pub fn status(&self) -> PlayerStatus {
        PlayerStatus { player: self.id, health: self.health, has_sword: self.has_sword }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monster {
    pub id: MonsterId,
    pub pos: Pos,
    pub health: i32,
}

pub struct GameState {
    pub level: u8,
    pub grid: Grid,
    pub goal: Pos,
    /// Session roster, indexed by `PlayerId`. Outlives levels.
    pub players: Vec<Player>,
    /// Live monsters of the current level only.
    pub monsters: SlotMap<MonsterId, Monster>,
}

impl GameState {
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn monster_at(&self, pos: Pos) -> Option<MonsterId> {
        self.monsters.iter().find(|(_, monster)| monster.pos == pos).map(|(id, _)| id)
    }

    pub fn player_at(&self, pos: Pos) -> Option<PlayerId> {
        self.players.iter().find(|player| player.pos == pos).map(|player| player.id)
    }

    pub fn is_level_complete(&self) -> bool {
        self.players.iter().any(|player| player.pos == self.goal)
    }

    /// Marker a cell falls back to once a player leaves it.
    pub(crate) fn vacated_marker(&self, pos: Pos) -> CellKind {
        if self.monster_at(pos).is_some() { CellKind::Monster } else { CellKind::Empty }
    }
}
