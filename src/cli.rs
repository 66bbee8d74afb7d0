#![cfg(feature = "std")]
//! Terminal front-end helpers: board rendering and key-to-gesture
//! mapping. This is the rendering/session collaborator the engine is
//! designed against, in its simplest possible form.

use crate::common::{Direction, Slot};
use crate::game::{GestureKind, PuzzleEngine};
use crate::gesture::Point;
use crate::moves;

/// Render the board as a numbered text grid; the blank prints as a dot.
pub fn render_board(engine: &PuzzleEngine) -> String {
    let size = engine.board().size();
    let width = (size * size - 1).to_string().len();
    let mut out = String::new();
    for row in 0..size {
        for col in 0..size {
            let slot = engine.cells()[row * size + col];
            match slot {
                // tiles are displayed 1-based, as on physical puzzles
                Slot::Tile(ord) => out.push_str(&format!("{:>width$}", ord + 1)),
                Slot::Blank => out.push_str(&format!("{:>width$}", ".")),
            }
            out.push(if col + 1 == size { '\n' } else { ' ' });
        }
    }
    out
}

/// Map a command key to the slide direction it asks for.
pub fn parse_key(key: char) -> Option<Direction> {
    match key.to_ascii_lowercase() {
        'w' => Some(Direction::Up),
        's' => Some(Direction::Down),
        'a' => Some(Direction::Left),
        'd' => Some(Direction::Right),
        _ => None,
    }
}

/// Slide the tile that can move in `dir` by synthesizing a full drag
/// session: a press on the movable neighbor of the blank and a release
/// one tile extent away. Returns `false` when no tile can slide that way
/// or the engine refused the gesture.
pub fn slide(engine: &mut PuzzleEngine, dir: Direction) -> bool {
    let board = engine.board();
    // the tile sliding `dir` sits on the opposite side of the blank
    let Some(cell) = moves::neighbor_in_direction(board.blank_index(), dir.opposite(), board.size())
    else {
        return false;
    };
    let extent = engine.tile_extent();
    let release = match dir {
        Direction::Up => Point { x: 0.0, y: -extent },
        Direction::Down => Point { x: 0.0, y: extent },
        Direction::Left => Point { x: -extent, y: 0.0 },
        Direction::Right => Point { x: extent, y: 0.0 },
    };
    let blank_before = engine.board().blank_index();
    engine.start_session(GestureKind::Drag, cell, Point::default());
    engine.update_session(release);
    engine.release_session(release);
    engine.board().blank_index() != blank_before
}
