use slidepuzzle::{solved_tiles, Event, GameStatus, GestureKind, Point, PuzzleEngine, Slot};

const EXTENT: f32 = 100.0;

/// 4x4 board one slide from solved: blank at 14, tile 14 waiting at 15.
fn one_move_from_solved() -> PuzzleEngine {
    let mut tiles = solved_tiles(4);
    tiles.swap(14, 15);
    let mut engine = PuzzleEngine::new();
    engine.new_game(4, tiles, EXTENT).unwrap();
    engine
}

/// 4x4 board far from solved: first two tiles swapped, blank at 15.
fn scrambled() -> PuzzleEngine {
    let mut tiles = solved_tiles(4);
    tiles.swap(0, 1);
    let mut engine = PuzzleEngine::new();
    engine.new_game(4, tiles, EXTENT).unwrap();
    engine
}

fn press(engine: &mut PuzzleEngine, cell: usize) {
    engine.start_session(GestureKind::Drag, cell, Point { x: 200.0, y: 200.0 });
}

fn release_at(engine: &mut PuzzleEngine, dx: f32, dy: f32) {
    engine.release_session(Point {
        x: 200.0 + dx,
        y: 200.0 + dy,
    });
}

#[test]
fn drag_past_threshold_commits_and_solves() {
    let mut engine = one_move_from_solved();
    // the tile right of the blank slides left
    press(&mut engine, 15);
    engine.update_session(Point { x: 139.0, y: 200.0 });
    let offset = engine.tile_offset().unwrap();
    assert_eq!(offset.cell, 15);
    assert_eq!((offset.dx, offset.dy), (-61.0, 0.0));

    release_at(&mut engine, -61.0, 0.0);
    assert_eq!(engine.tile_offset(), None);
    assert!(engine.board().is_solved());
    assert_eq!(engine.status(), GameStatus::Finished);
    assert_eq!(
        engine.take_events(),
        vec![
            Event::TileSwapped { from: 15, to: 14 },
            Event::Solved { play_time_ms: 0 },
        ]
    );
}

#[test]
fn drag_at_59_percent_cancels() {
    let mut engine = one_move_from_solved();
    press(&mut engine, 15);
    release_at(&mut engine, -59.0, 0.0);

    assert_eq!(engine.board().blank_index(), 14);
    assert_eq!(engine.board().at(15).unwrap(), Slot::Tile(14));
    assert_eq!(engine.tile_offset(), None);
    assert!(engine.take_events().is_empty());
}

#[test]
fn drag_at_exactly_60_percent_cancels() {
    // the threshold is strict: the projection must exceed it
    let mut engine = one_move_from_solved();
    press(&mut engine, 15);
    release_at(&mut engine, -60.0, 0.0);
    assert_eq!(engine.board().blank_index(), 14);
    assert!(engine.take_events().is_empty());
}

#[test]
fn drag_commit_without_solving_keeps_running() {
    let mut engine = scrambled();
    // the tile left of the blank slides right
    press(&mut engine, 14);
    release_at(&mut engine, 61.0, 0.0);

    assert_eq!(engine.board().blank_index(), 14);
    assert_eq!(engine.board().at(15).unwrap(), Slot::Tile(14));
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(
        engine.take_events(),
        vec![Event::TileSwapped { from: 14, to: 15 }]
    );
}

#[test]
fn off_axis_drag_projects_to_zero() {
    let mut engine = one_move_from_solved();
    press(&mut engine, 15);
    // dominant axis is vertical but the tile can only slide left
    engine.update_session(Point { x: 200.0, y: 280.0 });
    let offset = engine.tile_offset().unwrap();
    assert_eq!((offset.dx, offset.dy), (0.0, 0.0));

    release_at(&mut engine, 0.0, 80.0);
    assert_eq!(engine.board().blank_index(), 14);
    assert!(engine.take_events().is_empty());
}

#[test]
fn drag_away_from_the_blank_projects_to_zero() {
    let mut engine = one_move_from_solved();
    press(&mut engine, 15);
    // dragging right moves the tile away from the blank on its left
    release_at(&mut engine, 80.0, 0.0);
    assert_eq!(engine.board().blank_index(), 14);
    assert!(engine.take_events().is_empty());
}

#[test]
fn drag_offset_clamps_to_one_tile() {
    let mut engine = one_move_from_solved();
    press(&mut engine, 15);
    engine.update_session(Point { x: 200.0 - 250.0, y: 200.0 });
    let offset = engine.tile_offset().unwrap();
    assert_eq!((offset.dx, offset.dy), (-EXTENT, 0.0));

    release_at(&mut engine, -250.0, 0.0);
    assert!(engine.board().is_solved());
}

#[test]
fn press_on_a_cell_away_from_the_blank_is_ignored() {
    let mut engine = scrambled();
    press(&mut engine, 0);
    engine.update_session(Point { x: 300.0, y: 200.0 });
    assert_eq!(engine.tile_offset(), None);
    release_at(&mut engine, 100.0, 0.0);
    assert_eq!(engine.board().blank_index(), 15);
    assert!(engine.take_events().is_empty());
}

#[test]
fn press_while_paused_is_ignored() {
    let mut engine = one_move_from_solved();
    engine.set_paused(true);
    press(&mut engine, 15);
    engine.set_paused(false);
    release_at(&mut engine, -80.0, 0.0);
    assert_eq!(engine.board().blank_index(), 14);
    assert!(engine.take_events().is_empty());
}

#[test]
fn press_after_the_game_finished_is_ignored() {
    let mut engine = one_move_from_solved();
    press(&mut engine, 15);
    release_at(&mut engine, -61.0, 0.0);
    assert_eq!(engine.status(), GameStatus::Finished);
    engine.take_events();

    press(&mut engine, 11);
    release_at(&mut engine, 0.0, 80.0);
    assert!(engine.board().is_solved());
    assert!(engine.take_events().is_empty());
}

#[test]
fn release_without_press_is_a_noop() {
    let mut engine = scrambled();
    release_at(&mut engine, -100.0, 0.0);
    engine.update_session(Point { x: 0.0, y: 0.0 });
    assert_eq!(engine.board().blank_index(), 15);
    assert_eq!(engine.tile_offset(), None);
    assert!(engine.take_events().is_empty());
}

#[test]
fn second_press_during_a_session_is_ignored() {
    let mut engine = one_move_from_solved();
    press(&mut engine, 15);
    // cell 10 sits above the blank and could otherwise move
    press(&mut engine, 10);
    release_at(&mut engine, -61.0, 0.0);
    // the release resolved against the first target
    assert!(engine.board().is_solved());
}

#[test]
fn pausing_abandons_the_session() {
    let mut engine = one_move_from_solved();
    press(&mut engine, 15);
    engine.update_session(Point { x: 150.0, y: 200.0 });
    assert!(engine.tile_offset().is_some());

    engine.set_paused(true);
    assert_eq!(engine.tile_offset(), None);
    engine.set_paused(false);
    release_at(&mut engine, -80.0, 0.0);
    assert_eq!(engine.board().blank_index(), 14);
    assert!(engine.take_events().is_empty());
}
