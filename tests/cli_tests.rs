use slidepuzzle::{
    parse_key, render_board, slide, solved_tiles, Direction, Event, GameStatus, PuzzleEngine,
    DEFAULT_TILE_EXTENT,
};

fn engine_with(size: usize, tiles: Vec<slidepuzzle::Slot>) -> PuzzleEngine {
    let mut engine = PuzzleEngine::new();
    engine.new_game(size, tiles, DEFAULT_TILE_EXTENT).unwrap();
    engine
}

#[test]
fn renders_a_numbered_grid_with_a_dot_for_the_blank() {
    let engine = engine_with(3, solved_tiles(3));
    assert_eq!(render_board(&engine), "1 2 3\n4 5 6\n7 8 .\n");
}

#[test]
fn renders_wide_grids_with_aligned_columns() {
    let engine = engine_with(4, solved_tiles(4));
    let last_line = render_board(&engine).lines().last().unwrap().to_string();
    assert_eq!(last_line, "13 14 15  .");
}

#[test]
fn wasd_maps_to_slide_directions() {
    assert_eq!(parse_key('w'), Some(Direction::Up));
    assert_eq!(parse_key('A'), Some(Direction::Left));
    assert_eq!(parse_key('s'), Some(Direction::Down));
    assert_eq!(parse_key('d'), Some(Direction::Right));
    assert_eq!(parse_key('x'), None);
}

#[test]
fn slide_moves_the_blank_opposite_to_the_tile() {
    let mut engine = engine_with(3, solved_tiles(3));
    // blank at 8; the tile above it (cell 5) slides down
    assert!(slide(&mut engine, Direction::Down));
    assert_eq!(engine.board().blank_index(), 5);
}

#[test]
fn slide_into_a_wall_reports_failure() {
    let mut engine = engine_with(3, solved_tiles(3));
    // blank in the bottom-right corner: nothing can slide up or left
    assert!(!slide(&mut engine, Direction::Up));
    assert!(!slide(&mut engine, Direction::Left));
    assert_eq!(engine.board().blank_index(), 8);
}

#[test]
fn scripted_slides_solve_a_one_move_game() {
    let mut tiles = solved_tiles(3);
    tiles.swap(7, 8);
    let mut engine = engine_with(3, tiles);

    // blank at 7, tile 7 at 8 slides left to finish
    assert!(slide(&mut engine, Direction::Left));
    assert_eq!(engine.status(), GameStatus::Finished);
    assert!(engine
        .take_events()
        .iter()
        .any(|e| matches!(e, Event::Solved { .. })));
}
