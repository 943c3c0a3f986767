//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the engine.
//! All types are plain data with no external dependencies, so they can be
//! used by the core engine, a renderer, or any tooling that inspects a game.
//!
//! # Board Dimensions
//!
//! The playfield is a fixed square grid:
//!
//! - **Size**: 10 rows × 10 columns (indexed 0-9 each)
//! - **Cell index**: `row * 10 + col`, in `0..100`
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 10 | Rows and columns on the board |
//! | `CELL_COUNT` | 100 | Total cells on the board |
//! | `OFFER_SIZE` | 3 | Pieces offered to the player at once |
//! | `HISTORY_WINDOW` | 5 | Recent template draws excluded from selection |
//! | `LINE_BASE_POINTS` | 100 | Base value of a single cleared line |
//!
//! # Examples
//!
//! ```
//! use block_grid_types::{cell_index, Color, BOARD_SIZE, CELL_COUNT};
//!
//! assert_eq!(BOARD_SIZE, 10);
//! assert_eq!(CELL_COUNT, 100);
//!
//! // Cell indices are row-major
//! assert_eq!(cell_index(3, 7), Some(37));
//! assert_eq!(cell_index(10, 0), None);
//!
//! // Colors map to their hex code
//! assert_eq!(Color::Gold.as_hex(), "#FFD700");
//! assert_eq!(Color::from_hex("#ffd700"), Some(Color::Gold));
//! ```

/// Board width and height in cells (10)
pub const BOARD_SIZE: u8 = 10;

/// Total number of cells on the board (100)
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Number of pieces offered at once (3)
pub const OFFER_SIZE: usize = 3;

/// Number of recent template draws excluded from the next selection (5)
pub const HISTORY_WINDOW: usize = 5;

/// Base points for one cleared line.
///
/// Clearing `k` lines in a single placement is worth `LINE_BASE_POINTS * k * k`.
pub const LINE_BASE_POINTS: u32 = 100;

/// Flat row-major index of a board cell (`row * 10 + col`).
pub type CellIndex = u8;

/// Identifier of a piece within the current offer (`0..OFFER_SIZE`).
pub type PieceId = u8;

/// Compute the flat index for `(row, col)`.
///
/// Returns `None` when either coordinate is outside the board.
#[inline]
pub fn cell_index(row: usize, col: usize) -> Option<CellIndex> {
    let size = BOARD_SIZE as usize;
    if row >= size || col >= size {
        return None;
    }
    Some((row * size + col) as CellIndex)
}

/// Split a flat index back into `(row, col)`.
#[inline]
pub fn cell_position(index: CellIndex) -> (usize, usize) {
    let size = BOARD_SIZE as usize;
    let index = index as usize;
    (index / size, index % size)
}

/// The fixed color palette pieces are painted with.
///
/// Colors only matter to renderers; placement legality never looks at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    RoyalBlue,
    Emerald,
    OrangeRed,
    MediumPurple,
    Gold,
    SkyBlue,
    HotPink,
    LimeGreen,
    Coral,
}

impl Color {
    /// Every palette entry, in palette order.
    pub const ALL: [Color; 9] = [
        Color::RoyalBlue,
        Color::Emerald,
        Color::OrangeRed,
        Color::MediumPurple,
        Color::Gold,
        Color::SkyBlue,
        Color::HotPink,
        Color::LimeGreen,
        Color::Coral,
    ];

    /// Hex code used by renderers
    pub fn as_hex(&self) -> &'static str {
        match self {
            Color::RoyalBlue => "#4169E1",
            Color::Emerald => "#50C878",
            Color::OrangeRed => "#FF4500",
            Color::MediumPurple => "#9370DB",
            Color::Gold => "#FFD700",
            Color::SkyBlue => "#87CEEB",
            Color::HotPink => "#FF69B4",
            Color::LimeGreen => "#32CD32",
            Color::Coral => "#FF7F50",
        }
    }

    /// Parse from a hex code (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use block_grid_types::Color;
    ///
    /// assert_eq!(Color::from_hex("#4169e1"), Some(Color::RoyalBlue));
    /// assert_eq!(Color::from_hex("#000000"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_hex().eq_ignore_ascii_case(s))
    }

    /// Position of this color in [`Color::ALL`]
    pub fn palette_index(&self) -> usize {
        *self as usize
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a piece of the given color
pub type Cell = Option<Color>;
