//! Headless autoplay: a greedy policy driving a [`GameSession`].
//!
//! The policy tries every offered piece at every legal anchor on a scratch
//! copy of the board and keeps the move that clears the most lines. Ties go
//! to the first candidate in offer order, then row-major anchor order.

use serde::Serialize;
use tracing::{debug, info};

use crate::core::{legal_placements, GameSession};
use crate::types::PieceId;

/// A chosen placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub piece_id: PieceId,
    pub row: i32,
    pub col: i32,
    /// Lines this move clears
    pub lines: u32,
}

/// Per-game totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub game: u32,
    pub score: u32,
    pub high_score: u32,
    pub placed: u32,
    pub lines: u32,
    pub game_over: bool,
}

/// Best greedy move for the current offer, `None` when nothing fits.
pub fn choose_move(session: &GameSession) -> Option<Move> {
    let mut best: Option<Move> = None;

    for piece in session.offer() {
        for (row, col) in legal_placements(&piece.shape, session.board()) {
            let mut scratch = session.board().clone();
            scratch.place(row, col, &piece.shape, piece.color);
            let lines = scratch.clear_lines().lines_cleared();

            if best.map_or(true, |b| lines > b.lines) {
                best = Some(Move {
                    piece_id: piece.id,
                    row,
                    col,
                    lines,
                });
            }
        }
    }

    best
}

/// Play until game over or `max_moves` placements.
pub fn play_game(session: &mut GameSession, game: u32, max_moves: u32) -> GameSummary {
    let mut moves = 0;
    while !session.over() && moves < max_moves {
        let Some(m) = choose_move(session) else {
            break;
        };

        let outcome = session.try_place(m.piece_id, m.row, m.col);
        if !outcome.accepted {
            // choose_move only proposes legal placements
            debug!(?m, "policy move rejected");
            break;
        }
        moves += 1;

        if outcome.lines_cleared > 0 {
            debug!(
                game,
                lines = outcome.lines_cleared,
                points = outcome.points_awarded,
                score = session.score(),
                "clear"
            );
        }
    }

    let summary = GameSummary {
        game,
        score: session.score(),
        high_score: session.high_score(),
        placed: session.placed(),
        lines: session.lines(),
        game_over: session.over(),
    };
    info!(
        game,
        score = summary.score,
        placed = summary.placed,
        lines = summary.lines,
        game_over = summary.game_over,
        "game finished"
    );
    summary
}
