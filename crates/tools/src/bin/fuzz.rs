use anyhow::{Result, bail};
use clap::Parser;
use maze_core::{CellKind, Game, GameConfig, GameError};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    turns: u32,
    #[arg(short, long, default_value_t = 2)]
    players: u8,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for max {} turns...", args.seed, args.turns);
    let config =
        GameConfig { player_count: args.players, starting_sword: true, ..GameConfig::default() };
    let mut game = Game::new(args.seed, config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut attempts = 0u64;
    while game.turn() < u64::from(args.turns) {
        attempts += 1;
        // Bias towards movement so levels actually get explored
        let token = choose(&mut rng, &['w', 'a', 's', 'd', 'w', 'a', 's', 'd', 'k', 'r', 'p']);
        let before = game.snapshot_hash();
        match game.apply_token(token) {
            Ok(_) => {}
            Err(GameError::GameOver) => {
                println!("All levels complete after {} turns", game.turn());
                break;
            }
            Err(_) if game.snapshot_hash() != before => {
                bail!("Invariant failed: rejected '{token}' changed state");
            }
            Err(_) => {}
        }

        let state = game.state();
        for player in &state.players {
            if state.grid.at(player.pos) != CellKind::Player(player.id) {
                bail!("Invariant failed: player {} marker missing", player.symbol());
            }
            if player.health > game.config().player_health {
                bail!("Invariant failed: health above maximum");
            }
        }
        if state.monsters.values().any(|monster| monster.health <= 0) {
            bail!("Invariant failed: defeated monster still active");
        }
    }

    println!(
        "Fuzzing completed successfully: {} turns from {} inputs, level {}.",
        game.turn(),
        attempts,
        game.level()
    );
    Ok(())
}
