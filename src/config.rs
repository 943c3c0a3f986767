//! Autoplay configuration read from the environment.

use std::env;

/// Settings for the headless autoplay runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayConfig {
    /// Catalog seed (`BLOCK_GRID_SEED`, default 1)
    pub seed: u32,
    /// Games to play back to back (`BLOCK_GRID_GAMES`, default 1)
    pub games: u32,
    /// Placement cap per game (`BLOCK_GRID_MAX_MOVES`, default 10000)
    pub max_moves: u32,
    /// Print the final snapshot of each game as JSON (`BLOCK_GRID_PRINT_SNAPSHOT`)
    pub print_snapshot: bool,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            games: 1,
            max_moves: 10_000,
            print_snapshot: false,
        }
    }
}

impl AutoplayConfig {
    /// Create from environment variables, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("BLOCK_GRID_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let games = lookup("BLOCK_GRID_GAMES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.games);

        let max_moves = lookup("BLOCK_GRID_MAX_MOVES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_moves);

        let print_snapshot = lookup("BLOCK_GRID_PRINT_SNAPSHOT")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(defaults.print_snapshot);

        Self {
            seed,
            games,
            max_moves,
            print_snapshot,
        }
    }
}
