use serde::{Deserialize, Serialize};

use block_grid_types::{PieceId, BOARD_SIZE};

use crate::pieces::Piece;
use crate::session::GameSession;

const SIZE: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub id: PieceId,
    /// Hex color code, e.g. `#4169E1`
    pub color: String,
    /// Shape rows as 0/1
    pub shape: Vec<Vec<u8>>,
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            id: value.id,
            color: value.color.as_hex().to_string(),
            shape: value.shape.to_bits(),
        }
    }
}

/// Render-ready copy of a session.
///
/// Board cells hold 0 for empty, otherwise palette index + 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: [[u8; SIZE]; SIZE],
    pub offer: Vec<PieceSnapshot>,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
    pub placed: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; SIZE]; SIZE];
        self.offer.clear();
        self.score = 0;
        self.high_score = 0;
        self.game_over = false;
        self.placed = 0;
        self.lines = 0;
    }

    /// Refill from `session`, reusing the offer allocation.
    pub fn fill_from(&mut self, session: &GameSession) {
        for (idx, cell) in session.board().cells().iter().enumerate() {
            self.board[idx / SIZE][idx % SIZE] =
                cell.map_or(0, |c| c.palette_index() as u8 + 1);
        }
        self.offer.clear();
        self.offer.extend(session.offer().iter().map(PieceSnapshot::from));
        self.score = session.score();
        self.high_score = session.high_score();
        self.game_over = session.over();
        self.placed = session.placed();
        self.lines = session.lines();
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.offer.is_empty()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; SIZE]; SIZE],
            offer: Vec::new(),
            score: 0,
            high_score: 0,
            game_over: false,
            placed: 0,
            lines: 0,
        }
    }
}

impl From<&GameSession> for GameSnapshot {
    fn from(session: &GameSession) -> Self {
        let mut s = Self::default();
        s.fill_from(session);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use block_grid_types::Color;

    #[test]
    fn test_snapshot_board_encoding() {
        let mut session = GameSession::with_seed(8).unwrap();
        let piece = session.offer()[0].clone();
        assert!(session.try_place(piece.id, 0, 0).accepted);

        let snap = GameSnapshot::from(&session);
        let code = piece.color.palette_index() as u8 + 1;
        for &(i, j) in piece.shape.offsets() {
            assert_eq!(snap.board[i as usize][j as usize], code);
        }
        let filled = snap.board.iter().flatten().filter(|&&c| c != 0).count();
        assert_eq!(filled, piece.shape.cell_count());
        assert_eq!(snap.placed, 1);
        assert!(snap.playable());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let session = GameSession::with_seed(8).unwrap();
        let snap = GameSnapshot::from(&session);
        let json = serde_json::to_value(&snap).unwrap();

        assert_eq!(json["board"].as_array().unwrap().len(), 10);
        assert_eq!(json["offer"].as_array().unwrap().len(), 3);
        let color = json["offer"][0]["color"].as_str().unwrap();
        assert!(Color::from_hex(color).is_some());
    }

    #[test]
    fn test_clear_resets_everything() {
        let session = GameSession::with_seed(8).unwrap();
        let mut snap = GameSnapshot::from(&session);
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
        assert!(!snap.playable());
    }
}
