//! The console turn loop: reads command tokens, feeds the engine and reports what happened.

use std::io::{BufRead, Write};

use color_eyre::eyre::Result;
use log::debug;
use maze_core::{Command, Game, InputJournal};

use crate::messages::{WELCOME, error_message, event_message, outcome_message, prompt};
use crate::render::render_grid;

/// Drives `game` until it finishes or `input` runs dry. Every character that is
/// not whitespace is one command token, so `wasd` on a line is four commands.
pub fn run<R: BufRead, W: Write>(
    game: &mut Game,
    input: R,
    out: &mut W,
    mut journal: Option<&mut InputJournal>,
) -> Result<()> {
    writeln!(out, "{WELCOME}")?;
    let mut seen_events = flush_events(game, 0, out)?;
    write!(out, "{}", render_grid(game.grid()))?;
    write!(out, "{}", prompt(game.active_player()))?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        for token in line.chars().filter(|token| !token.is_whitespace()) {
            let player = game.active_player();
            let resolved = Command::from_token(token).and_then(|command| {
                game.apply_command(command).map(|outcome| (command, outcome))
            });
            match resolved {
                Ok((command, outcome)) => {
                    if let Some(journal) = journal.as_deref_mut() {
                        journal.append(player, command);
                    }
                    seen_events = flush_events(game, seen_events, out)?;
                    if let Some(line) = outcome_message(player, &outcome) {
                        writeln!(out, "{line}")?;
                    }
                    if game.is_finished() {
                        out.flush()?;
                        return Ok(());
                    }
                    write!(out, "{}", render_grid(game.grid()))?;
                }
                Err(err) => {
                    debug!("rejected '{token}' from player {}: {err}", player.symbol());
                    writeln!(out, "{}", error_message(&err))?;
                }
            }
            write!(out, "{}", prompt(game.active_player()))?;
        }
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn flush_events<W: Write>(game: &Game, seen: usize, out: &mut W) -> Result<usize> {
    let events = game.log();
    for event in &events[seen..] {
        if let Some(line) = event_message(event) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(events.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{GameConfig, PlayerId};

    fn play(seed: u64, input: &str) -> (Game, String, InputJournal) {
        let config = GameConfig::default();
        let mut game = Game::new(seed, config.clone()).unwrap();
        let mut journal = InputJournal::new(seed, config);
        let mut out = Vec::new();
        run(&mut game, input.as_bytes(), &mut out, Some(&mut journal)).unwrap();
        (game, String::from_utf8(out).unwrap(), journal)
    }

    #[test]
    fn opening_shows_welcome_level_and_first_prompt() {
        let (_, out, journal) = play(1, "");
        assert!(out.starts_with("Welcome to the Complicated Maze Game!"));
        assert!(out.contains("Level 1\n"));
        assert!(out.contains("Player 1, enter your move (w/a/s/d/k/r/p): "));
        assert!(journal.inputs.is_empty());
    }

    #[test]
    fn unknown_tokens_reprompt_the_same_player() {
        let (game, out, journal) = play(1, "x\n");
        assert!(out.contains("Invalid command. Use 'w', 'a', 's', 'd', 'k', 'r', or 'p'."));
        assert_eq!(out.matches("Player 1, enter your move").count(), 2);
        assert_eq!(game.active_player(), PlayerId(0));
        assert!(journal.inputs.is_empty());
    }

    #[test]
    fn each_character_is_its_own_command() {
        let (game, out, journal) = play(1, "p p\n");
        assert_eq!(game.turn(), 2);
        assert!(out.contains("Player 1 status:"));
        assert!(out.contains("Player 2 status:"));
        assert_eq!(journal.inputs.len(), 2);
        assert_eq!(journal.inputs[1].player, PlayerId(1));
    }

    #[test]
    fn sword_gate_message_keeps_the_turn() {
        let (game, out, _) = play(3, "k\n");
        assert!(out.contains("You need a sword to attack the monster ('k')."));
        assert_eq!(game.turn(), 0);
    }
}
