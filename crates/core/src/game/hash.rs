//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.turn);
        hasher.write_u8(self.state.level);
        hasher.write_u8(u8::from(self.is_finished()));
        hasher.write_u8(self.active_player.0);
        hasher.write_i32(self.state.goal.y);
        hasher.write_i32(self.state.goal.x);
        for player in &self.state.players {
            hasher.write_i32(player.pos.y);
            hasher.write_i32(player.pos.x);
            hasher.write_i32(player.health);
            hasher.write_u8(u8::from(player.has_sword));
        }
        for monster in self.state.monsters.values() {
            hasher.write_i32(monster.pos.y);
            hasher.write_i32(monster.pos.x);
            hasher.write_i32(monster.health);
        }
        for row in self.state.grid.rows() {
            for symbol in row {
                hasher.write_u32(u32::from(symbol));
            }
        }
        hasher.finish()
    }
}
