use std::panic;
use std::thread;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gridsnake::config::{GAME_OVER_LINGER_SECS, GRID, TICK_TIMEOUT_MS};
use gridsnake::console::{restore_terminal_best_effort, TerminalConsole};
use gridsnake::error::Result;
use gridsnake::game::Game;

/// Classic bounded-arena snake for the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the food spawner for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    install_panic_hook();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let console = TerminalConsole::enter(GRID, Duration::from_millis(TICK_TIMEOUT_MS))?;
    let mut game = Game::new(console, GRID, rng);
    game.run()?;

    // Leave the final board visible before the console restores the screen.
    thread::sleep(Duration::from_secs(GAME_OVER_LINGER_SECS));
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_best_effort();
        default_hook(panic_info);
    }));
}
