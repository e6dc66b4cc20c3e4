//! Step validation, relocation and teleport chaining for a single player move.

use log::trace;

use super::*;
use crate::mapgen::placement::find_random_empty;

impl Game {
    /// Moves `player` one cell. Blocked moves leave grid and positions untouched.
    pub fn apply_move(
        &mut self,
        player: PlayerId,
        direction: Direction,
    ) -> Result<MoveOutcome, GameError> {
        let from = self.state.player(player).pos;
        let to = from.step(direction);
        if !self.state.grid.in_bounds(to) || self.state.grid.at(to).blocks_movement() {
            return Err(GameError::MoveBlocked);
        }

        let landed_on = self.state.grid.at(to);
        self.relocate_player(player, from, to);
        self.log.push(LogEvent::PlayerMoved { player, to });

        if landed_on != CellKind::Teleporter {
            return Ok(MoveOutcome::Moved { to });
        }

        // The teleporter is consumed even when no empty cell is left to land on.
        let Some(target) = find_random_empty(&self.state.grid, &mut self.rng) else {
            return Ok(MoveOutcome::Moved { to });
        };
        self.state.grid.set(to, CellKind::Empty);
        self.state.grid.set(target, CellKind::Player(player));
        self.state.players[player.index()].pos = target;
        trace!("player {} teleported {to:?} -> {target:?}", player.symbol());
        self.log.push(LogEvent::PlayerTeleported { player, from: to, to: target });
        Ok(MoveOutcome::Teleported { via: to, to: target })
    }

    fn relocate_player(&mut self, player: PlayerId, from: Pos, to: Pos) {
        let vacated = self.state.vacated_marker(from);
        self.state.grid.set(from, vacated);
        self.state.grid.set(to, CellKind::Player(player));
        self.state.players[player.index()].pos = to;
    }
}
