//! Game-over detection tests

use block_grid::core::{can_place_any, legal_placements, Board, Piece, Shape};
use block_grid::types::Color;

fn piece(id: u8, bits: &[&[u8]]) -> Piece {
    Piece::new(id, Shape::from_bits(bits).unwrap(), Color::RoyalBlue)
}

fn full_board_except(holes: &[(i32, i32)]) -> Board {
    let mut board = Board::new();
    for row in 0..10 {
        for col in 0..10 {
            if !holes.contains(&(row, col)) {
                board.set(row, col, Some(Color::Coral));
            }
        }
    }
    board
}

/// Reference semantics: every piece at every anchor.
fn exhaustive(offer: &[Piece], board: &Board) -> bool {
    for p in offer {
        for row in 0..10 {
            for col in 0..10 {
                if board.can_place(row, col, &p.shape) {
                    return true;
                }
            }
        }
    }
    false
}

#[test]
fn test_isolated_gaps_end_the_game() {
    // Every empty cell is isolated; nothing bigger than 1x1 fits
    let holes = [(0, 0), (2, 5), (4, 9), (7, 3), (9, 9)];
    let board = full_board_except(&holes);
    let offer = [
        piece(0, &[&[1, 1]]),
        piece(1, &[&[1], &[1]]),
        piece(2, &[&[1, 1], &[1, 1]]),
    ];

    assert!(!can_place_any(&offer, &board));
    assert_eq!(can_place_any(&offer, &board), exhaustive(&offer, &board));
}

#[test]
fn test_single_gap_with_dot_can_continue() {
    let board = full_board_except(&[(5, 5)]);
    let offer = [piece(0, &[&[1, 1, 1]]), piece(1, &[&[1]])];

    assert!(can_place_any(&offer, &board));
    let spots: Vec<(i32, i32)> = legal_placements(&offer[1].shape, &board).collect();
    assert_eq!(spots, vec![(5, 5)]);
}

#[test]
fn test_empty_board_is_never_over() {
    let board = Board::new();
    let offer = [piece(0, &[&[1, 1], &[1, 1], &[1, 1]])];
    assert!(can_place_any(&offer, &board));
}

#[test]
fn test_empty_offer_is_over() {
    assert!(!can_place_any(&[], &Board::new()));
}

#[test]
fn test_fit_only_at_far_corner() {
    // The only 2x2 hole is at the bottom-right corner
    let board = full_board_except(&[(8, 8), (8, 9), (9, 8), (9, 9)]);
    let square = piece(0, &[&[1, 1], &[1, 1]]);
    let line = piece(1, &[&[1, 1, 1]]);

    assert!(can_place_any(&[line.clone(), square.clone()], &board));
    assert!(!can_place_any(&[line], &board));
    assert_eq!(
        legal_placements(&square.shape, &board).collect::<Vec<_>>(),
        vec![(8, 8)]
    );
}

#[test]
fn test_agrees_with_exhaustive_on_patterned_boards() {
    let offers = vec![
        vec![piece(0, &[&[1]])],
        vec![piece(0, &[&[1, 1]])],
        vec![piece(0, &[&[1], &[1], &[1]])],
        vec![piece(0, &[&[0, 1, 0], &[1, 1, 1], &[0, 1, 0]])],
        vec![piece(0, &[&[1, 1, 1, 1], &[1, 0, 0, 0]]), piece(1, &[&[1, 1, 0], &[0, 1, 1]])],
    ];

    // Deterministic patterns of varying density
    for modulus in 2..9 {
        for phase in 0..modulus {
            let mut board = Board::new();
            for row in 0..10 {
                for col in 0..10 {
                    if (row * 7 + col * 3 + phase) % modulus != 0 {
                        board.set(row, col, Some(Color::Gold));
                    }
                }
            }
            for offer in &offers {
                assert_eq!(
                    can_place_any(offer, &board),
                    exhaustive(offer, &board),
                    "modulus {} phase {}",
                    modulus,
                    phase
                );
            }
        }
    }
}
