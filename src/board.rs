//! Board state: an N×N permutation of tiles with a single tracked blank.

use alloc::vec::Vec;

use crate::common::{BoardError, Slot};
use crate::config::MIN_GRID_SIZE;
use crate::shuffle::solved_tiles;

/// The playing surface. `cells[row * size + col]` holds the tile currently
/// occupying that position; exactly one cell holds [`Slot::Blank`], and its
/// index is cached in `blank_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Slot>,
    blank_index: usize,
}

impl Board {
    /// A board in the solved arrangement: ordinals in order, blank last.
    /// `size` must be at least [`MIN_GRID_SIZE`]; use [`Board::from_cells`]
    /// for untrusted input.
    pub fn solved(size: usize) -> Self {
        debug_assert!(size >= MIN_GRID_SIZE);
        let cells = solved_tiles(size);
        let blank_index = cells.len() - 1;
        Board {
            size,
            cells,
            blank_index,
        }
    }

    /// Build a board from a shuffled tile list, validating that the list is
    /// a permutation of every ordinal in `0..size²-1` plus exactly one blank.
    pub fn from_cells(size: usize, cells: Vec<Slot>) -> Result<Self, BoardError> {
        if size < MIN_GRID_SIZE {
            return Err(BoardError::SizeTooSmall { size });
        }
        let len = size * size;
        if cells.len() != len {
            return Err(BoardError::NotAPermutation);
        }
        let mut seen = alloc::vec![false; len - 1];
        let mut blank = None;
        for (i, slot) in cells.iter().enumerate() {
            match *slot {
                Slot::Blank => {
                    if blank.is_some() {
                        return Err(BoardError::NotAPermutation);
                    }
                    blank = Some(i);
                }
                Slot::Tile(ord) => {
                    if ord >= len - 1 || seen[ord] {
                        return Err(BoardError::NotAPermutation);
                    }
                    seen[ord] = true;
                }
            }
        }
        let blank_index = blank.ok_or(BoardError::NotAPermutation)?;
        Ok(Board {
            size,
            cells,
            blank_index,
        })
    }

    /// Grid dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells, N².
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Immutable view of every cell for layout rendering.
    pub fn cells(&self) -> &[Slot] {
        &self.cells
    }

    /// Cached position of the blank cell.
    pub fn blank_index(&self) -> usize {
        self.blank_index
    }

    /// Slot at `index`, or `OutOfRange` beyond the grid.
    pub fn at(&self, index: usize) -> Result<Slot, BoardError> {
        self.check_bounds(index)?;
        Ok(self.cells[index])
    }

    /// Exchange the contents of two cells. Exactly one of them must hold
    /// the blank; the cached blank position follows the swap.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), BoardError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        let blank_at_a = self.cells[a].is_blank();
        let blank_at_b = self.cells[b].is_blank();
        if blank_at_a == blank_at_b {
            return Err(BoardError::InvalidSwap { a, b });
        }
        self.cells.swap(a, b);
        self.blank_index = if blank_at_a { b } else { a };
        Ok(())
    }

    /// True when every tile sits at its own ordinal and the blank is last.
    pub fn is_solved(&self) -> bool {
        let last = self.cell_count() - 1;
        self.cells.iter().enumerate().all(|(i, slot)| match *slot {
            Slot::Blank => i == last,
            Slot::Tile(ord) => ord == i,
        })
    }

    fn check_bounds(&self, index: usize) -> Result<(), BoardError> {
        let len = self.cell_count();
        if index >= len {
            return Err(BoardError::OutOfRange { index, len });
        }
        Ok(())
    }
}
