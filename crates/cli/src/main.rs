use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr};
use log::{LevelFilter, info};
use maze_cli::seed::SeedChoice;
use maze_cli::session;
use maze_cli::settings::{apply_overrides, load_config};
use maze_core::{Game, InputJournal};

#[derive(Parser)]
#[command(author, version, about = "Turn-based maze game for players sharing one terminal")]
struct Args {
    /// Run seed; a fresh one is generated when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// TOML file with game rules
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of players, overriding the config file
    #[arg(short, long)]
    players: Option<u8>,
    /// Write the accepted commands to this journal file on exit
    #[arg(long)]
    record: Option<PathBuf>,
    /// Raise diagnostic logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.verbose);

    let config = apply_overrides(load_config(args.config.as_deref())?, args.players)?;
    let seed = SeedChoice::resolve(args.seed);
    info!("starting session with seed {} ({seed:?})", maze_cli::format_seed(seed.value()));

    let mut game = Game::new(seed.value(), config.clone()).wrap_err("Failed to start the game")?;
    let mut journal = args.record.as_ref().map(|_| InputJournal::new(seed.value(), config));

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session::run(&mut game, stdin.lock(), &mut stdout, journal.as_mut())?;
    stdout.flush()?;

    if let (Some(path), Some(journal)) = (args.record, journal) {
        let json = serde_json::to_string_pretty(&journal)?;
        fs::write(&path, json)
            .wrap_err_with(|| format!("Failed to write journal {}", path.display()))?;
        info!("journal with {} inputs written to {}", journal.inputs.len(), path.display());
    }
    Ok(())
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    let base_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    builder.parse_default_env();
    builder.init();
}
