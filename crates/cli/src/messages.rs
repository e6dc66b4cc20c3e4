//! Player-facing wording for engine events, outcomes and rejected commands.

use maze_core::{AttackOutcome, GameError, LogEvent, PlayerId, TurnOutcome};

use crate::render::render_status;

pub const WELCOME: &str = "Welcome to the Complicated Maze Game!\n\
Navigate through the maze to find the goal ('G').\n\
Commands: 'w' (up), 'a' (left), 's' (down), 'd' (right)\n\
Commands: 'k' (kill the monster), 'r' (regenerate health), 'p' (player status)";

pub fn prompt(player: PlayerId) -> String {
    format!("Player {}, enter your move (w/a/s/d/k/r/p): ", player.symbol())
}

/// Plain moves are shown by the board itself and produce no line.
pub fn event_message(event: &LogEvent) -> Option<String> {
    let line = match *event {
        LogEvent::LevelStarted { level, .. } => format!("Level {level}"),
        LogEvent::PlayerMoved { .. } => return None,
        LogEvent::PlayerTeleported { player, to, .. } => format!(
            "Player {} stepped on a teleporter ('T') and reappeared at row {}, column {}.",
            player.symbol(),
            to.y,
            to.x
        ),
        LogEvent::MonsterAttacked { player, remaining_health, .. } => format!(
            "Player {} attacked the monster ('M'). Monster health reduced to {}.",
            player.symbol(),
            remaining_health
        ),
        LogEvent::MonsterDefeated { player, .. } => {
            format!("Player {} defeated the monster ('M').", player.symbol())
        }
        LogEvent::HealthRegenerated { player, health } => {
            format!("Player {} regenerated health. Current health: {health}", player.symbol())
        }
        LogEvent::GoalReached { player, .. } => format!(
            "Player {} reached the goal ('G'). Move to the next level.",
            player.symbol()
        ),
        LogEvent::GameCompleted => "You completed all levels. Game over!".to_string(),
    };
    Some(line)
}

/// Lines an accepted command adds on top of its logged events.
pub fn outcome_message(player: PlayerId, outcome: &TurnOutcome) -> Option<String> {
    match outcome {
        TurnOutcome::Status(status) => Some(render_status(*status)),
        TurnOutcome::Attacked(AttackOutcome::NoMonsterPresent) => {
            Some("There is no monster here to attack.".to_string())
        }
        TurnOutcome::Regenerated(None) => {
            Some(format!("Player {} is already at full health.", player.symbol()))
        }
        _ => None,
    }
}

pub fn error_message(error: &GameError) -> String {
    match error {
        GameError::MoveBlocked => "Invalid move. Try again.".to_string(),
        GameError::UnknownCommand(_) => {
            "Invalid command. Use 'w', 'a', 's', 'd', 'k', 'r', or 'p'.".to_string()
        }
        GameError::NoEquipmentForAttack => {
            "You need a sword to attack the monster ('k').".to_string()
        }
        GameError::GameOver => "The game is already over.".to_string(),
        GameError::Generation(err) => format!("Could not build the next level: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{PlayerStatus, Pos};

    #[test]
    fn plain_moves_are_silent() {
        let event = LogEvent::PlayerMoved { player: PlayerId(0), to: Pos { y: 1, x: 2 } };
        assert_eq!(event_message(&event), None);
    }

    #[test]
    fn combat_lines_name_the_player_and_remaining_health() {
        let monster = Default::default();
        let hit = LogEvent::MonsterAttacked { player: PlayerId(1), monster, remaining_health: 30 };
        assert_eq!(
            event_message(&hit).as_deref(),
            Some("Player 2 attacked the monster ('M'). Monster health reduced to 30.")
        );
        let kill = LogEvent::MonsterAttacked { player: PlayerId(0), monster, remaining_health: -10 };
        assert!(event_message(&kill).is_some_and(|line| line.ends_with("reduced to -10.")));
    }

    #[test]
    fn goal_and_completion_lines() {
        let goal = LogEvent::GoalReached { player: PlayerId(0), level: 1 };
        assert_eq!(
            event_message(&goal).as_deref(),
            Some("Player 1 reached the goal ('G'). Move to the next level.")
        );
        assert_eq!(
            event_message(&LogEvent::GameCompleted).as_deref(),
            Some("You completed all levels. Game over!")
        );
    }

    #[test]
    fn status_outcome_renders_the_status_block() {
        let status = PlayerStatus { player: PlayerId(0), health: 100, has_sword: false };
        let line = outcome_message(PlayerId(0), &TurnOutcome::Status(status));
        assert_eq!(line.as_deref(), Some("Player 1 status:\n - Health: 100\n - Inventory: None"));
        assert_eq!(outcome_message(PlayerId(0), &TurnOutcome::Regenerated(Some(90))), None);
    }

    #[test]
    fn rejected_commands_get_retry_hints() {
        assert_eq!(error_message(&GameError::MoveBlocked), "Invalid move. Try again.");
        assert!(error_message(&GameError::UnknownCommand('x')).starts_with("Invalid command."));
        assert!(error_message(&GameError::NoEquipmentForAttack).contains("sword"));
    }
}
