use block_grid::core::{Board, Catalog, GameSession, GameSnapshot, Piece, Shape};
use block_grid::types::Color;

fn fnv1a64_bytes(bytes: impl Iterator<Item = u8>) -> u64 {
    // FNV-1a 64-bit.
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

fn fnv1a64_board(board: &[[u8; 10]; 10]) -> u64 {
    fnv1a64_bytes(board.iter().flat_map(|row| row.iter().copied()))
}

#[test]
fn snapshot_tracks_placements_and_clears() {
    let mut board = Board::new();
    for col in 0..9 {
        board.set(0, col, Some(Color::Emerald));
    }
    let mut gs = GameSession::from_board(board, Catalog::standard(1).unwrap());
    gs.set_offer([
        Piece::new(0, Shape::from_bits(&[&[1]]).unwrap(), Color::Gold),
        Piece::new(1, Shape::from_bits(&[&[1, 1]]).unwrap(), Color::Coral),
    ]);

    let mut snap = GameSnapshot::default();
    snap.fill_from(&gs);
    let before = fnv1a64_board(&snap.board);
    assert_eq!(snap.board[0][..9], [Color::Emerald.palette_index() as u8 + 1; 9]);
    assert_eq!(snap.board[0][9], 0);
    assert_eq!(snap.offer.len(), 2);

    assert!(gs.try_place(1, 5, 5).accepted);
    snap.fill_from(&gs);
    assert_ne!(fnv1a64_board(&snap.board), before);
    let coral = Color::Coral.palette_index() as u8 + 1;
    assert_eq!(snap.board[5][5], coral);
    assert_eq!(snap.board[5][6], coral);

    // Completing row 0 empties it in the snapshot too
    assert_eq!(gs.try_place(0, 0, 9).lines_cleared, 1);
    snap.fill_from(&gs);
    assert_eq!(snap.board[0], [0u8; 10]);
    assert_eq!(snap.score, 100);
    assert_eq!(snap.high_score, 100);
    assert_eq!(snap.lines, 1);
    assert_eq!(snap.placed, 2);
    // Offer was emptied and dealt again
    assert_eq!(snap.offer.len(), 3);
}

#[test]
fn snapshot_is_stable_for_unchanged_session() {
    let gs = GameSession::with_seed(77).unwrap();
    let a = GameSnapshot::from(&gs);
    let b = GameSnapshot::from(&gs);
    assert_eq!(a, b);
    assert_eq!(fnv1a64_board(&a.board), fnv1a64_board(&b.board));
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut gs = GameSession::with_seed(5).unwrap();
    let id = gs.offer()[0].id;
    assert!(gs.try_place(id, 2, 2).accepted);

    let snap = GameSnapshot::from(&gs);
    let json = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}

#[test]
fn snapshot_offer_matches_session_pieces() {
    let gs = GameSession::with_seed(21).unwrap();
    let snap = GameSnapshot::from(&gs);

    for (piece, view) in gs.offer().iter().zip(&snap.offer) {
        assert_eq!(view.id, piece.id);
        assert_eq!(Color::from_hex(&view.color), Some(piece.color));
        let rows: Vec<&[u8]> = view.shape.iter().map(Vec::as_slice).collect();
        assert_eq!(Shape::from_bits(&rows).unwrap(), piece.shape);
    }
}

#[test]
fn snapshot_reports_game_over() {
    let mut board = Board::new();
    for row in 0..10 {
        for col in 0..10 {
            if (row + col) % 2 == 0 {
                board.set(row, col, Some(Color::Coral));
            }
        }
    }
    let mut gs = GameSession::from_board(board, Catalog::standard(1).unwrap());
    gs.set_offer([Piece::new(0, Shape::from_bits(&[&[1, 1]]).unwrap(), Color::Gold)]);

    let snap = GameSnapshot::from(&gs);
    assert!(snap.game_over);
    assert!(!snap.playable());
}
