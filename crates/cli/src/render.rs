//! Plain-text board rendering: two columns per cell between dashed rules.

use maze_core::{Grid, PlayerStatus};

pub fn render_grid(grid: &Grid) -> String {
    let rule = "-".repeat(grid.size() * 2 + 1);
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    for row in grid.rows() {
        for symbol in row {
            out.push_str(&format!("{symbol:>2}"));
        }
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

pub fn render_status(status: PlayerStatus) -> String {
    let inventory = if status.has_sword { "Sword" } else { "None" };
    format!(
        "Player {} status:\n - Health: {}\n - Inventory: {inventory}",
        status.player.symbol(),
        status.health
    )
}
