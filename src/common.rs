//! Common types for the puzzle engine: grid directions, tile slots, and
//! board errors.

use core::fmt;

/// Compass direction on the grid. Rows grow downward, so `Up` means a
/// smaller row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The reverse direction. A tile lying `Up` of the blank slides `Down`
    /// into it.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Contents of one board cell: a numbered tile or the single blank.
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Tile identity; ordinal `i` belongs at cell `i` when solved.
    Tile(usize),
    /// The empty cell tiles slide into.
    Blank,
}

impl Slot {
    /// Returns `true` for the blank slot.
    pub fn is_blank(self) -> bool {
        matches!(self, Slot::Blank)
    }

    /// Tile ordinal, or `None` for the blank.
    pub fn ordinal(self) -> Option<usize> {
        match self {
            Slot::Tile(ord) => Some(ord),
            Slot::Blank => None,
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Cell index is outside `[0, size²)`.
    OutOfRange { index: usize, len: usize },
    /// Attempted swap where neither (or both) of the cells holds the blank.
    InvalidSwap { a: usize, b: usize },
    /// Grid dimension below the playable minimum.
    SizeTooSmall { size: usize },
    /// Tile list is not a permutation of every ordinal plus one blank.
    NotAPermutation,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfRange { index, len } => {
                write!(f, "OutOfRange: index={} len={}", index, len)
            }
            BoardError::InvalidSwap { a, b } => {
                write!(f, "InvalidSwap: neither {} nor {} is the blank", a, b)
            }
            BoardError::SizeTooSmall { size } => {
                write!(f, "SizeTooSmall: grid of {} is not playable", size)
            }
            BoardError::NotAPermutation => {
                write!(
                    f,
                    "NotAPermutation: tiles must cover every ordinal once plus one blank"
                )
            }
        }
    }
}
