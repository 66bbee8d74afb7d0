//! Pointer-drag state machine: press, move, release against one target
//! cell, committed or cancelled at release time.

use crate::board::Board;
use crate::domain::TileOffset;
use crate::gesture::{self, Point};
use crate::moves;

/// Converts a press → move → release pointer gesture into at most one
/// committed tile move. The controller itself never mutates the board;
/// the engine applies the swap when `on_release` reports a commit.
#[derive(Debug, Default)]
pub struct DragController {
    target: Option<usize>,
    origin: Point,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell targeted by the live session, if any.
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// True while a session is open.
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Open a session on `cell`, recording the gesture origin. Refused
    /// (returning `false`) when a session is already open or the cell has
    /// no path into the blank.
    pub fn on_press(&mut self, cell: usize, origin: Point, board: &Board) -> bool {
        if self.target.is_some() {
            return false;
        }
        if moves::direction_from_blank(cell, board.blank_index(), board.size()).is_none() {
            return false;
        }
        self.target = Some(cell);
        self.origin = origin;
        true
    }

    /// In-progress visual offset for the rendering layer. Silently a no-op
    /// without an open session.
    pub fn on_move(&self, point: Point, board: &Board, extent: f32) -> Option<TileOffset> {
        let cell = self.target?;
        let slide = moves::direction_from_blank(cell, board.blank_index(), board.size())?.opposite();
        let (dx, dy) = gesture::project(
            point.x - self.origin.x,
            point.y - self.origin.y,
            slide,
            extent,
        );
        Some(TileOffset { cell, dx, dy })
    }

    /// Close the session. Returns `Some(cell)` when the final projected
    /// delta beats the commit threshold and the move should be applied;
    /// the visual offset resets to zero either way.
    pub fn on_release(&mut self, point: Point, board: &Board, extent: f32) -> Option<usize> {
        let cell = self.target.take()?;
        let slide = moves::direction_from_blank(cell, board.blank_index(), board.size())?.opposite();
        let (dx, dy) = gesture::project(
            point.x - self.origin.x,
            point.y - self.origin.y,
            slide,
            extent,
        );
        if gesture::meets_commit_threshold(dx, dy, extent) {
            Some(cell)
        } else {
            None
        }
    }

    /// Drop any live session without committing.
    pub fn cancel(&mut self) {
        self.target = None;
    }
}
