//! Block grid (workspace facade crate).
//!
//! Re-exports the engine crates under `block_grid::{core, types}` and hosts
//! the headless autoplay runner used by the `block-grid` binary.

pub use block_grid_core as core;
pub use block_grid_types as types;

pub mod autoplay;
pub mod config;
