//! NoGo-Rust: a NoGo engine.
//!
//! ## Usage
//!
//! - `nogo-rust` - Show a demo
//! - `nogo-rust protocol` - Serve the text protocol on stdin/stdout
//! - `nogo-rust selfplay` - Let the engine play itself
//!
//! Logs go to stderr; set `RUST_LOG` or `--log-level` to see them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use nogo_rust::constants::DEFAULT_SEARCH_DEPTH;
use nogo_rust::game::{ComputerMove, GameSession, GameState, GameType, PlaceOutcome};
use nogo_rust::protocol::{ProtocolEngine, vertex_str};
use nogo_rust::record::from_record;
use nogo_rust::rules::legal_moves;

/// NoGo-Rust: a NoGo engine with alpha-beta search
#[derive(Parser)]
#[command(name = "nogo-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Copy, Clone, ValueEnum)]
enum Mode {
    Pvp,
    Pve,
}

impl From<Mode> for GameType {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Pvp => GameType::Pvp,
            Mode::Pve => GameType::Pve,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the text protocol on stdin/stdout
    Protocol {
        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
        depth: u32,
        /// Game type of the initial game
        #[arg(long, value_enum, default_value_t = Mode::Pve)]
        mode: Mode,
        /// Start from a saved game record instead of an empty board
        #[arg(long)]
        load: Option<PathBuf>,
    },
    /// Run a short demo game against the engine
    Demo,
    /// Let the engine play both sides
    Selfplay {
        /// Search depth in plies
        #[arg(long, default_value_t = 2)]
        depth: u32,
        /// Random opening plies before the engine takes over
        #[arg(long, default_value_t = 4)]
        openings: usize,
        /// Seed for the opening moves
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Protocol { depth, mode, load }) => {
            let game = match load {
                Some(path) => {
                    let text = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    from_record(&text).with_context(|| format!("loading {}", path.display()))?
                }
                None => GameSession::new(mode.into()),
            };
            let mut engine = ProtocolEngine::with_game(game, depth);
            engine.run_stdio()?;
        }
        Some(Commands::Selfplay {
            depth,
            openings,
            seed,
        }) => run_selfplay(depth, openings, seed),
        Some(Commands::Demo) | None => run_demo(),
    }
    Ok(())
}

fn run_demo() {
    println!("NoGo-Rust: NoGo engine with alpha-beta search\n");

    let mut game = GameSession::new(GameType::Pve);
    let human = [(5, 5), (3, 3), (7, 7)];
    for (x, y) in human {
        let outcome = game.place_stone(x, y);
        println!("Black at {}: {outcome:?}", vertex_str(x, y));
        if outcome != PlaceOutcome::Placed {
            break;
        }
        match game.play_computer_move(2) {
            ComputerMove::Played { x, y } => println!("White at {}", vertex_str(x, y)),
            other => {
                println!("White: {other:?}");
                break;
            }
        }
    }
    println!("\n{}", game.board());
    println!("Forbidden for {}: {:?}", game.active_player(), game.forbidden_points());
}

fn run_selfplay(depth: u32, openings: usize, seed: Option<u64>) {
    let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    let mut game = GameSession::new(GameType::Pvp);

    for _ in 0..openings {
        let moves = legal_moves(game.board(), game.active_player());
        if moves.is_empty() || game.state() != GameState::Playing {
            break;
        }
        let (x, y) = moves[rng.usize(..moves.len())];
        game.place_stone(x, y);
    }

    while game.state() == GameState::Playing {
        let color = game.active_player();
        match game.play_computer_move(depth) {
            ComputerMove::Played { x, y } => {
                println!("{:>3}. {color} {}", game.move_count(), vertex_str(x, y));
            }
            ComputerMove::Resigned | ComputerMove::NotComputersTurn => break,
        }
    }

    println!("\n{}", game.board());
    match game.winner() {
        Some(w) => println!("{w} wins after {} moves", game.move_count()),
        None => println!("no result"),
    }
}
