//! Game session module - ties board, offer, catalog and scoring together
//!
//! [`GameSession`] is the single owner of all mutable game state. The only
//! mutating entry points are [`GameSession::try_place`],
//! [`GameSession::offer_pieces`] and [`GameSession::restart`]; each runs to
//! completion and leaves the session consistent. Renderers read state through
//! the accessors or a [`crate::GameSnapshot`], and are free to animate clears
//! after the fact: the engine never waits for them.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use block_grid_types::{CellIndex, PieceId, CELL_COUNT, OFFER_SIZE};

use crate::board::Board;
use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::moves::can_place_any;
use crate::pieces::Piece;
use crate::scoring::{points_for, Scoreboard};

/// Result of [`GameSession::try_place`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaceOutcome {
    pub accepted: bool,
    /// Cells emptied by line clears, ascending
    pub cleared_cells: ArrayVec<CellIndex, CELL_COUNT>,
    pub lines_cleared: u32,
    pub points_awarded: u32,
    /// Whether the session is over after this placement
    pub game_over: bool,
}

impl PlaceOutcome {
    fn rejected(game_over: bool) -> Self {
        Self {
            game_over,
            ..Self::default()
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    offer: ArrayVec<Piece, OFFER_SIZE>,
    scoreboard: Scoreboard,
    catalog: Catalog,
    over: bool,
    /// Pieces committed in the current game
    placed: u32,
    /// Lines cleared in the current game
    lines: u32,
}

impl GameSession {
    /// Start a game on an empty board with a fresh offer.
    pub fn new(catalog: Catalog) -> Self {
        Self::from_board(Board::new(), catalog)
    }

    /// Start a game with the standard catalog seeded with `seed`.
    pub fn with_seed(seed: u32) -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::standard(seed)?))
    }

    /// Start a game that keeps the high score of an earlier session.
    pub fn with_scoreboard(catalog: Catalog, scoreboard: Scoreboard) -> Self {
        Self::from_parts(Board::new(), catalog, scoreboard)
    }

    /// Start a game from a prepared board (puzzle setups, replays, tests).
    pub fn from_board(board: Board, catalog: Catalog) -> Self {
        Self::from_parts(board, catalog, Scoreboard::new())
    }

    fn from_parts(board: Board, catalog: Catalog, mut scoreboard: Scoreboard) -> Self {
        scoreboard.reset();
        let mut session = Self {
            board,
            offer: ArrayVec::new(),
            scoreboard,
            catalog,
            over: false,
            placed: 0,
            lines: 0,
        };
        session.offer_pieces(OFFER_SIZE);
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn offer(&self) -> &[Piece] {
        &self.offer
    }

    /// Offered piece with the given id
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.offer.iter().find(|p| p.id == id)
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn high_score(&self) -> u32 {
        self.scoreboard.high_score()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Terminal flag, updated after every offer change and placement
    pub fn over(&self) -> bool {
        self.over
    }

    pub fn placed(&self) -> u32 {
        self.placed
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Replace the offer with `n` new pieces (ids `0..n`).
    ///
    /// `n` is capped at [`OFFER_SIZE`]. Re-evaluates the game-over flag.
    pub fn offer_pieces(&mut self, n: usize) -> &[Piece] {
        self.offer.clear();
        for id in 0..n.min(OFFER_SIZE) {
            let piece = self.catalog.draw_piece(id as PieceId, &self.offer);
            self.offer.push(piece);
        }
        debug!(pieces = self.offer.len(), "offer refilled");
        self.refresh_over();
        &self.offer
    }

    /// Replace the offer with caller-provided pieces.
    ///
    /// Pieces beyond [`OFFER_SIZE`] are dropped. Ids are kept as given.
    pub fn set_offer(&mut self, pieces: impl IntoIterator<Item = Piece>) {
        self.offer.clear();
        for piece in pieces.into_iter().take(OFFER_SIZE) {
            self.offer.push(piece);
        }
        self.refresh_over();
    }

    /// Termination check against the current offer and board.
    pub fn is_over(&self) -> bool {
        !can_place_any(&self.offer, &self.board)
    }

    /// Place an offered piece with its top-left corner at (row, col).
    ///
    /// Unknown ids, illegal positions and placements after game over are
    /// rejected without touching any state.
    pub fn try_place(&mut self, piece_id: PieceId, row: i32, col: i32) -> PlaceOutcome {
        if self.over {
            debug!(piece_id, row, col, "placement rejected: game over");
            return PlaceOutcome::rejected(true);
        }

        let Some(slot) = self.offer.iter().position(|p| p.id == piece_id) else {
            debug!(piece_id, "placement rejected: unknown piece");
            return PlaceOutcome::rejected(false);
        };

        let piece = &self.offer[slot];
        if !self.board.place(row, col, &piece.shape, piece.color) {
            debug!(piece_id, row, col, "placement rejected: does not fit");
            return PlaceOutcome::rejected(false);
        }

        self.offer.remove(slot);
        self.placed += 1;

        let clear = self.board.clear_lines();
        let lines_cleared = clear.lines_cleared();
        let points_awarded = if lines_cleared > 0 {
            points_for(lines_cleared)
        } else {
            0
        };
        if lines_cleared > 0 {
            self.lines += lines_cleared;
            self.scoreboard.apply_points(points_awarded);
            debug!(
                lines_cleared,
                points_awarded,
                score = self.scoreboard.score(),
                "lines cleared"
            );
        }

        if self.offer.is_empty() {
            self.offer_pieces(OFFER_SIZE);
        } else {
            self.refresh_over();
        }

        PlaceOutcome {
            accepted: true,
            cleared_cells: clear.cleared_cells,
            lines_cleared,
            points_awarded,
            game_over: self.over,
        }
    }

    /// Empty the board, zero the score and deal a fresh offer.
    ///
    /// The high score survives.
    pub fn restart(&mut self) {
        self.board.clear();
        self.scoreboard.reset();
        self.over = false;
        self.placed = 0;
        self.lines = 0;
        self.offer_pieces(OFFER_SIZE);
        info!(high_score = self.scoreboard.high_score(), "game restarted");
    }

    fn refresh_over(&mut self) {
        let over = self.is_over();
        if over && !self.over {
            info!(
                score = self.scoreboard.score(),
                high_score = self.scoreboard.high_score(),
                placed = self.placed,
                "game over"
            );
        }
        self.over = over;
    }
}
