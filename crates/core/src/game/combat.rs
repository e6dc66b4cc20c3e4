//! Encounter checks, melee against monsters and health regeneration.

use super::*;

impl Game {
    pub fn check_encounter(&self, player: PlayerId) -> bool {
        self.state.monster_at(self.state.player(player).pos).is_some()
    }

    /// Hits the monster sharing the player's cell. Monsters at or below zero
    /// health leave the active set; the player's marker keeps the cell.
    pub fn attack(&mut self, player: PlayerId) -> AttackOutcome {
        let pos = self.state.player(player).pos;
        let Some(monster) = self.state.monster_at(pos) else {
            return AttackOutcome::NoMonsterPresent;
        };

        let damage = self.config().attack_damage;
        let target = &mut self.state.monsters[monster];
        target.health -= damage;
        let remaining_health = target.health;
        self.log.push(LogEvent::MonsterAttacked { player, monster, remaining_health });

        if remaining_health > 0 {
            return AttackOutcome::Hit { monster, remaining_health };
        }

        self.state.monsters.remove(monster);
        if self.state.grid.at(pos) == CellKind::Monster {
            self.state.grid.set(pos, CellKind::Empty);
        }
        self.log.push(LogEvent::MonsterDefeated { player, monster });
        AttackOutcome::Defeated { monster }
    }

    /// Returns the new health, or `None` when the player was already at full health.
    pub fn regenerate(&mut self, player: PlayerId) -> Option<i32> {
        let max_health = self.config().player_health;
        let amount = self.config().regen_amount;
        let target = &mut self.state.players[player.index()];
        if target.health >= max_health {
            return None;
        }
        target.health = (target.health + amount).min(max_health);
        let health = target.health;
        self.log.push(LogEvent::HealthRegenerated { player, health });
        Some(health)
    }
}
