use rand::rngs::SmallRng;
use rand::SeedableRng;
use slidepuzzle::{shuffled_tiles, Board, BoardError, BoardSnapshot, Slot};

#[test]
fn snapshot_round_trips_through_json() {
    let mut rng = SmallRng::seed_from_u64(7);
    let board = Board::from_cells(4, shuffled_tiles(&mut rng, 4)).unwrap();

    let snapshot = BoardSnapshot::from(&board);
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: BoardSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);

    let board2 = Board::try_from(restored).unwrap();
    assert_eq!(board2, board);
    assert_eq!(board2.blank_index(), board.blank_index());
}

#[test]
fn corrupt_snapshots_are_rejected() {
    let mut snapshot = BoardSnapshot::from(&Board::solved(3));
    snapshot.cells[0] = Slot::Blank; // second blank
    assert_eq!(
        Board::try_from(snapshot).unwrap_err(),
        BoardError::NotAPermutation
    );
}
