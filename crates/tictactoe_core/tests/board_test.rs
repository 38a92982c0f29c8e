//! Tests for the board's public query and mutation interface.

use tictactoe_core::{Board, BoardError, Cell, Marker, Position};

fn x() -> Marker {
    Marker::new('X')
}

#[test]
fn test_mark_removes_square_from_unmarked() {
    let mut board = Board::new();
    board.mark(1, x()).unwrap();
    board.mark(5, Marker::new('O')).unwrap();

    let unmarked = board.unmarked_positions();
    assert_eq!(unmarked.len(), 7);
    assert!(!unmarked.contains(&Position::TopLeft));
    assert!(!unmarked.contains(&Position::Center));
    assert!(unmarked.contains(&Position::BottomRight));
}

#[test]
fn test_unmarked_positions_ascending() {
    let mut board = Board::new();
    board.mark(8, x()).unwrap();
    board.mark(2, x()).unwrap();
    let numbers: Vec<u8> = board.unmarked_positions().iter().map(|p| p.number()).collect();
    assert_eq!(numbers, vec![1, 3, 4, 5, 6, 7, 9]);
}

#[test]
fn test_occupied_square_error_mentions_square() {
    let mut board = Board::new();
    board.mark(4, x()).unwrap();
    let err = board.mark(4, x()).unwrap_err();
    assert_eq!(err, BoardError::CellOccupied(Position::MiddleLeft));
    assert!(err.to_string().contains("occupied"));
}

#[test]
fn test_reset_restores_all_squares() {
    let mut board = Board::new();
    for n in 1..=9 {
        board.mark(n, x()).unwrap();
    }
    assert!(board.is_full());
    assert!(board.someone_won());

    board.reset();
    assert!(!board.is_full());
    assert_eq!(board.winning_marker(), None);
    assert_eq!(board.unmarked_positions(), Position::ALL.to_vec());
    assert!(board.cells().iter().all(|&c| c == Cell::Empty));
}

#[test]
fn test_game_to_a_win() {
    let (x, o) = (x(), Marker::new('O'));
    let mut board = Board::new();
    for (n, marker) in [(1, x), (5, o), (2, x), (9, o)] {
        board.mark(n, marker).unwrap();
        assert_eq!(board.winning_marker(), None);
    }
    board.mark(3, x).unwrap();
    assert_eq!(board.winning_marker(), Some(x));
    assert!(!board.is_full());
}

#[test]
fn test_board_serializes() {
    let mut board = Board::new();
    board.mark(5, x()).unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, board);
}
