//! Data types crossing the engine boundary: events for the session layer,
//! in-progress offsets for the renderer, and serializable board layouts.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::{BoardError, Slot};

/// Notification emitted by the engine and drained by the session layer.
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A tile slid out of `from` into the blank at `to`.
    TileSwapped { from: usize, to: usize },
    /// The board reached the solved layout.
    Solved { play_time_ms: u64 },
}

/// Visual offset of an in-progress gesture, in gesture units. Purely a
/// rendering hint; the board itself has not changed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TileOffset {
    pub cell: usize,
    pub dx: f32,
    pub dy: f32,
}

/// Serializable board layout for session persistence outside the engine.
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub size: usize,
    pub cells: Vec<Slot>,
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        BoardSnapshot {
            size: board.size(),
            cells: board.cells().to_vec(),
        }
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = BoardError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        Board::from_cells(snapshot.size, snapshot.cells)
    }
}
