//! `draughts` - play international draughts against the computer in a
//! terminal, let the engine play itself, or show lifetime stats.

mod interactive;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use draughts_core::{Color, Engine};
use draughts_game::{Game, GameConfig, GameError, GameStats, Phase, RecordWriter, StatsObserver};
use refutation_engine::RefutationEngine;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "draughts", version, about = "International draughts against a one-ply engine")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play against the computer
    Play(GameArgs),
    /// Let the engine play both sides
    Autoplay {
        #[command(flatten)]
        game: GameArgs,
        /// Number of games
        #[arg(long, default_value_t = 1)]
        games: u32,
        /// Give up on a game after this many plies
        #[arg(long, default_value_t = 1000)]
        max_plies: u32,
    },
    /// Show the stats file
    Stats {
        #[arg(long)]
        stats: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct GameArgs {
    /// Side played by the human (or by the second engine in autoplay)
    #[arg(long, value_enum)]
    human: Option<Side>,
    #[arg(long)]
    seed: Option<u64>,
    /// Directory for JSON game records
    #[arg(long)]
    record_dir: Option<PathBuf>,
    /// Stats file
    #[arg(long)]
    stats: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    White,
    Brown,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Brown => Color::Brown,
        }
    }
}

const DEFAULT_STATS: &str = "draughts-stats.json";

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// File settings overridden by command-line flags. Games always update a
/// stats file, `draughts-stats.json` unless one is named.
fn resolve_config(path: Option<&PathBuf>, args: &GameArgs) -> Result<GameConfig> {
    let mut config = match path {
        Some(p) => GameConfig::load(p).with_context(|| format!("loading {}", p.display()))?,
        None => GameConfig::default(),
    };
    if let Some(side) = args.human {
        config.human = side.into();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.record_dir.is_some() {
        config.record_dir = args.record_dir.clone();
    }
    if args.stats.is_some() {
        config.stats_path = args.stats.clone();
    }
    if config.stats_path.is_none() {
        config.stats_path = Some(PathBuf::from(DEFAULT_STATS));
    }
    Ok(config)
}

fn engine_for(config: &GameConfig, offset: u64) -> RefutationEngine {
    match config.seed {
        Some(seed) => RefutationEngine::with_seed(seed.wrapping_add(offset)),
        None => RefutationEngine::new(),
    }
}

fn new_game(config: &GameConfig, offset: u64) -> Game<RefutationEngine> {
    let mut game = Game::new(config.human, engine_for(config, offset));
    if let Some(dir) = &config.record_dir {
        game.add_observer(Box::new(RecordWriter::new(dir)));
    }
    if let Some(path) = &config.stats_path {
        game.add_observer(Box::new(StatsObserver::new(path)));
    }
    game
}

fn autoplay(config: &GameConfig, games: u32, max_plies: u32) -> Result<()> {
    for n in 0..games {
        let offset = u64::from(n) * 2;
        let mut game = new_game(config, offset);
        let mut pilot = engine_for(config, offset + 1);
        let mut plies = 0;

        while !game.is_over() && plies < max_plies {
            let step = if matches!(game.phase(), Phase::ComputerTurn) {
                game.computer_turn()
            } else {
                let side = game.turn().side_to_move;
                let result = pilot.search(game.board(), side)?;
                match result.best_move {
                    Some(mv) => game.play(&mv),
                    None => Err(GameError::NoLegalMoves(side)),
                }
            };
            match step {
                Ok(c) => println!("{:>4}. {}", plies + 1, c.entry.notation()),
                Err(GameError::NoLegalMoves(side)) => {
                    warn!(%side, "side to move is blocked, stopping game");
                    break;
                }
                Err(e) => return Err(anyhow::Error::from(e).context("autoplay failed")),
            }
            plies += 1;
        }

        println!("{}", game.board());
        match game.terminal() {
            Some(signal) => println!(
                "Game {}: {:?} (winner: {})",
                n + 1,
                signal.result,
                signal.winner.map_or("none".to_string(), |c| c.to_string())
            ),
            None => println!("Game {}: unfinished after {plies} plies", n + 1),
        }
    }
    Ok(())
}

fn show_stats(path: PathBuf) -> Result<()> {
    let stats = GameStats::load_or_default(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    println!("{stats}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match &cli.command {
        Command::Play(args) => {
            let config = resolve_config(cli.config.as_ref(), args)?;
            info!(human = %config.human, "starting interactive game");
            let mut game = new_game(&config, 0);
            interactive::run(&mut game)
        }
        Command::Autoplay {
            game,
            games,
            max_plies,
        } => {
            let config = resolve_config(cli.config.as_ref(), game)?;
            autoplay(&config, *games, *max_plies)
        }
        Command::Stats { stats } => {
            let args = GameArgs {
                stats: stats.clone(),
                ..GameArgs::default()
            };
            let config = resolve_config(cli.config.as_ref(), &args)?;
            show_stats(config.stats_path.unwrap_or_else(|| PathBuf::from(DEFAULT_STATS)))
        }
    }
}
