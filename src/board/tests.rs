use super::*;
use crate::error::EngineError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_for_move_parity() {
    assert_eq!(Stone::for_move(0), Stone::Black);
    assert_eq!(Stone::for_move(1), Stone::White);
    assert_eq!(Stone::for_move(2), Stone::Black);
    assert_eq!(Stone::for_move(223), Stone::White);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2.x, 7);
    assert_eq!(pos2.y, 7);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));

    assert!(Pos::new(14, 0).is_on_board());
    assert!(!Pos::new(15, 0).is_on_board());
    assert!(!Pos::new(3, 200).is_on_board());
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 14);
    assert_eq!(pos.offset(1, 0, 1), Some(Pos::new(1, 14)));
    assert_eq!(pos.offset(-1, 0, 1), None);
    assert_eq!(pos.offset(1, -1, 3), Some(Pos::new(3, 11)));
    assert_eq!(pos.offset(0, 1, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_ordering_is_x_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_direction_steps() {
    assert_eq!(Direction::Horizontal.step(), (1, 0));
    assert_eq!(Direction::Vertical.step(), (0, 1));
    assert_eq!(Direction::DiagonalDown.step(), (1, 1));
    assert_eq!(Direction::DiagonalUp.step(), (1, -1));
}

#[test]
fn test_materialize_empty_history() {
    let board = materialize(&[]).unwrap();
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.side_to_move(), Stone::Black);
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS);
}

#[test]
fn test_materialize_assigns_colors_by_parity() {
    let history = [
        Pos::new(7, 7),
        Pos::new(7, 8),
        Pos::new(8, 8),
        Pos::new(0, 14),
        Pos::new(14, 0),
    ];
    let board = materialize(&history).unwrap();

    for (i, &pos) in history.iter().enumerate() {
        let expected = if i % 2 == 0 { Stone::Black } else { Stone::White };
        assert_eq!(board.get(pos), expected, "move #{} at {:?}", i, pos);
    }

    assert_eq!(board.stone_count(), history.len());
    let occupied = (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .filter(|&p| !board.is_empty(p))
        .count();
    assert_eq!(occupied, history.len());

    // Odd history length: White to move
    assert_eq!(board.side_to_move(), Stone::White);
}

#[test]
fn test_materialize_side_to_move_even() {
    let board = materialize(&[Pos::new(1, 1), Pos::new(2, 2)]).unwrap();
    assert_eq!(board.side_to_move(), Stone::Black);
}

#[test]
fn test_materialize_rejects_out_of_range() {
    let history = [Pos::new(7, 7), Pos::new(3, 15), Pos::new(20, 0)];
    let err = materialize(&history).unwrap_err();
    assert_eq!(err, EngineError::OutOfRange { index: 1, x: 3, y: 15 });
}

#[test]
fn test_get_checked_off_board() {
    let board = materialize(&[Pos::new(0, 0)]).unwrap();
    assert_eq!(board.get_checked(0, 0), Some(Stone::Black));
    assert_eq!(board.get_checked(1, 0), Some(Stone::Empty));
    assert_eq!(board.get_checked(-1, 0), None);
    assert_eq!(board.get_checked(0, 15), None);
}

#[test]
fn test_empty_cells_row_major() {
    let board = materialize(&[Pos::new(0, 0), Pos::new(0, 2)]).unwrap();
    let first: Vec<Pos> = board.empty_cells().take(3).collect();
    assert_eq!(first, vec![Pos::new(0, 1), Pos::new(0, 3), Pos::new(0, 4)]);

    let all: Vec<Pos> = board.empty_cells().collect();
    assert_eq!(all.len(), TOTAL_CELLS - 2);
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_full_board() {
    let history: Vec<Pos> = (0..TOTAL_CELLS).map(Pos::from_index).collect();
    let board = materialize(&history).unwrap();
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}
