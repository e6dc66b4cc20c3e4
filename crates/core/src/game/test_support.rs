//! Shared fixtures for the `game` test suites: hand-drawn levels installed into a live session.

use super::*;
use crate::mapgen::GeneratedLevel;

/// Parses rows of cell symbols; `.` and space are empty, digits are players.
pub(super) fn level_from_rows(level: u8, rows: &[&str]) -> GeneratedLevel {
    let size = rows.len();
    let mut grid = Grid::new(size);
    let mut player_starts = Vec::new();
    let mut goal = Pos { y: 0, x: 0 };
    let mut monster_spawns = Vec::new();

    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), size, "fixture rows must form a square");
        for (x, symbol) in row.chars().enumerate() {
            let pos = Pos { y: y as i32, x: x as i32 };
            let cell = match symbol {
                '.' | ' ' => CellKind::Empty,
                '#' => CellKind::Wall,
                'X' => CellKind::Obstacle,
                'T' => CellKind::Teleporter,
                'G' => {
                    goal = pos;
                    CellKind::Goal
                }
                'M' => {
                    monster_spawns.push(pos);
                    CellKind::Monster
                }
                digit @ '1'..='9' => {
                    let id = PlayerId(digit as u8 - b'1');
                    player_starts.push((id, pos));
                    CellKind::Player(id)
                }
                other => panic!("unknown fixture symbol {other:?}"),
            };
            grid.set(pos, cell);
        }
    }

    player_starts.sort();
    GeneratedLevel {
        level,
        grid,
        player_starts: player_starts.into_iter().map(|(_, pos)| pos).collect(),
        goal,
        monster_spawns,
    }
}

pub(super) fn game_with_rows(rows: &[&str]) -> Game {
    game_with_config(GameConfig::default(), rows)
}

pub(super) fn game_with_config(config: GameConfig, rows: &[&str]) -> Game {
    let mut game = Game::new(4242, config).expect("fixture config should be valid");
    let level = game.level();
    game.install_level(level_from_rows(level, rows));
    game
}

/// Every player marker matches a cached position and vice versa.
pub(super) fn assert_markers_agree(game: &Game) {
    for player in &game.state.players {
        assert_eq!(
            game.state.grid.at(player.pos),
            CellKind::Player(player.id),
            "player {} cache {:?} disagrees with grid",
            player.symbol(),
            player.pos
        );
    }
    let marked = game.state.grid.positions().filter(|&pos| game.state.grid.at(pos).is_player());
    assert_eq!(marked.count(), game.state.players.len());
}

pub(super) const P1: PlayerId = PlayerId(0);
pub(super) const P2: PlayerId = PlayerId(1);
