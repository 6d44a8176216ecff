use std::io;

use cave_adventure::{GameError, GameState, console};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), GameError> {
    init_logging();

    let mut game = GameState::with_default_world()?;
    console::run(&mut game, io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
