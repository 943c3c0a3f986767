//! Headless autoplay runner (default binary).
//!
//! Plays one or more games with the greedy policy and prints a JSON summary
//! line per game. Configuration comes from `BLOCK_GRID_*` environment
//! variables; log verbosity from `RUST_LOG` (default `info`).

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use block_grid::autoplay::play_game;
use block_grid::config::AutoplayConfig;
use block_grid::core::{GameSession, GameSnapshot};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AutoplayConfig::from_env();
    info!(?config, "starting autoplay");

    let mut session =
        GameSession::with_seed(config.seed).context("failed to build the piece catalog")?;

    for game in 1..=config.games {
        if game > 1 {
            session.restart();
        }

        let summary = play_game(&mut session, game, config.max_moves);
        println!(
            "{}",
            serde_json::to_string(&summary).context("failed to encode game summary")?
        );

        if config.print_snapshot {
            let snapshot = GameSnapshot::from(&session);
            println!(
                "{}",
                serde_json::to_string(&snapshot).context("failed to encode snapshot")?
            );
            eprint!("{}", session.board());
        }
    }

    Ok(())
}
