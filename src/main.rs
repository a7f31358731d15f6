//! Go-Rules: two-player Go in the terminal.
//!
//! ## Usage
//!
//! - `go-rules` - Play on the default board
//! - `go-rules --size 13 play` - Play on a 13x13 board
//! - `go-rules demo` - Replay a short capture sequence
//!
//! Set `RUST_LOG=debug` to trace moves on stderr.

use std::io;

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use go_rules::board::Board;
use go_rules::console::{Console, Outcome};
use go_rules::constants::DEFAULT_BOARD_SIZE;

/// Go-Rules: two-player Go on a square board
#[derive(Parser)]
#[command(name = "go-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (NxN)
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game on stdin/stdout
    Play,
    /// Replay a scripted game showing a capture
    Demo,
}

/// Scripted demo moves; `None` is a pass.
const DEMO_MOVES: &[Option<(isize, isize)>] = &[
    Some((2, 2)),
    Some((1, 2)),
    Some((0, 0)),
    Some((2, 1)),
    Some((0, 4)),
    Some((3, 2)),
    Some((4, 0)),
    Some((2, 3)),
    None,
    None,
];

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let board = Board::new(cli.size).context("cannot create board")?;

    match cli.command {
        Some(Commands::Play) | None => run_play(board),
        Some(Commands::Demo) => run_demo(board),
    }
}

fn run_play(board: Board) -> Result<()> {
    let mut console = Console::new(board);
    let stdin = io::stdin();
    let outcome = console
        .run(stdin.lock(), io::stdout())
        .context("console session failed")?;
    tracing::debug!(?outcome, "session ended");
    if outcome == Outcome::InputClosed {
        println!("Input closed; game abandoned.");
    }
    Ok(())
}

fn run_demo(mut board: Board) -> Result<()> {
    ensure!(board.size() >= 5, "the demo needs a board of at least 5x5");
    println!("Go-Rules: capture demo\n");

    for mv in DEMO_MOVES {
        let mover = board.turn();
        match *mv {
            Some((row, col)) => {
                board
                    .place_stone(row, col)
                    .with_context(|| format!("demo move ({row}, {col}) was rejected"))?;
                println!("{mover} plays ({row}, {col})");
            }
            None => {
                board.pass();
                println!("{mover} passes");
            }
        }
        println!("{board}\n");
    }

    if board.is_game_over() {
        println!("Game over! Both players passed.");
    }
    Ok(())
}
