//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole block-placement engine: the board, the piece
//! catalog, scoring and the game-over check. It has **no dependencies** on UI,
//! input handling or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is a plain function or method over owned state
//! - **Portable**: A renderer only needs [`GameSession`] or a [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`board`]: 10x10 occupancy grid, placement checks and row/column clearing
//! - [`pieces`]: Polyomino shapes, offered pieces and the standard template table
//! - [`catalog`]: Weighted, anti-repetition piece generation
//! - [`rng`]: Seeded LCG used by the catalog
//! - [`scoring`]: Quadratic line-clear points and the running/best score
//! - [`moves`]: Legal placement enumeration and the game-over check
//! - [`session`]: The game session tying it all together
//! - [`snapshot`]: Serializable view of a session for renderers
//!
//! # Game Rules
//!
//! - Three pieces are offered at a time; a new set is dealt once all three are placed
//! - A piece may go anywhere it fits entirely on empty cells; pieces never rotate
//! - Every full row and every full column is cleared after each placement
//! - Clearing `k` lines at once scores `100 * k²`
//! - The game ends when no offered piece fits anywhere
//!
//! # Example
//!
//! ```
//! use block_grid_core::GameSession;
//!
//! let mut game = GameSession::with_seed(12345).unwrap();
//! assert_eq!(game.offer().len(), 3);
//!
//! // The empty board accepts any piece at the top-left corner
//! let id = game.offer()[0].id;
//! let outcome = game.try_place(id, 0, 0);
//! assert!(outcome.accepted);
//! assert_eq!(outcome.points_awarded, 0);
//! assert!(!game.over());
//! ```

pub mod board;
pub mod catalog;
pub mod error;
pub mod moves;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use block_grid_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LineClear};
pub use catalog::{Catalog, CatalogConfig, TemplateDraw, WeightClass};
pub use error::{CatalogError, ShapeError};
pub use moves::{can_place_any, legal_placements, shape_fits};
pub use pieces::{Piece, Shape};
pub use rng::SimpleRng;
pub use scoring::{points_for, Scoreboard};
pub use session::{GameSession, PlaceOutcome};
pub use snapshot::{GameSnapshot, PieceSnapshot};
