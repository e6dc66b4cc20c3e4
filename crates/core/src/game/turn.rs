//! Command dispatch for the active player, including the automatic combat and
//! regeneration that follow every successful move.

use super::*;

impl Game {
    pub fn apply_token(&mut self, token: char) -> Result<TurnOutcome, GameError> {
        let command = Command::from_token(token)?;
        self.apply_command(command)
    }

    /// Resolves one command for the active player. Rejected commands change
    /// nothing, so the same player acts again.
    pub fn apply_command(&mut self, command: Command) -> Result<TurnOutcome, GameError> {
        let SessionState::Playing { level } = self.session else {
            return Err(GameError::GameOver);
        };
        let player = self.active_player;

        let outcome = match command {
            Command::Move(direction) => self.resolve_move(player, direction, level)?,
            Command::Attack => {
                if !self.state.player(player).has_sword {
                    return Err(GameError::NoEquipmentForAttack);
                }
                TurnOutcome::Attacked(self.attack(player))
            }
            Command::Regenerate => TurnOutcome::Regenerated(self.regenerate(player)),
            Command::Status => TurnOutcome::Status(self.state.player(player).status()),
        };
        self.turn += 1;

        if self.state.is_level_complete() {
            self.complete_level(player, level)?;
        } else {
            self.active_player = self.next_player(player);
        }
        Ok(outcome)
    }

    fn resolve_move(
        &mut self,
        player: PlayerId,
        direction: Direction,
        level: u8,
    ) -> Result<TurnOutcome, GameError> {
        let movement = self.apply_move(player, direction)?;
        if self.state.is_level_complete() {
            return Ok(TurnOutcome::ReachedGoal { level });
        }

        let combat = if self.check_encounter(player) { Some(self.attack(player)) } else { None };
        let regenerated = self.regenerate(player);
        Ok(TurnOutcome::Moved { movement, combat, regenerated })
    }

    fn next_player(&self, player: PlayerId) -> PlayerId {
        PlayerId((player.0 + 1) % self.config().player_count)
    }
}
