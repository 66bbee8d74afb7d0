//! Move legality: pure row/column adjacency between a cell and the blank.

use crate::common::Direction;

/// Direction `cell` lies relative to `blank`, or `None` when the two are
/// not orthogonally adjacent.
///
/// Adjacency is decided on rows and columns, never on raw index deltas:
/// the last cell of one row and the first cell of the next differ by one
/// in index but are not neighbors.
pub fn direction_from_blank(cell: usize, blank: usize, size: usize) -> Option<Direction> {
    let len = size * size;
    if cell >= len || blank >= len || cell == blank {
        return None;
    }
    let (cell_row, cell_col) = (cell / size, cell % size);
    let (blank_row, blank_col) = (blank / size, blank % size);

    if cell_col == blank_col && cell_row + 1 == blank_row {
        Some(Direction::Up)
    } else if cell_col == blank_col && blank_row + 1 == cell_row {
        Some(Direction::Down)
    } else if cell_row == blank_row && cell_col + 1 == blank_col {
        Some(Direction::Left)
    } else if cell_row == blank_row && blank_col + 1 == cell_col {
        Some(Direction::Right)
    } else {
        None
    }
}

/// Index of the blank's neighbor lying in `dir`, or `None` at the grid
/// edge. Inverse of [`direction_from_blank`].
pub fn neighbor_in_direction(blank: usize, dir: Direction, size: usize) -> Option<usize> {
    if blank >= size * size {
        return None;
    }
    let (row, col) = (blank / size, blank % size);
    match dir {
        Direction::Up if row > 0 => Some(blank - size),
        Direction::Down if row + 1 < size => Some(blank + size),
        Direction::Left if col > 0 => Some(blank - 1),
        Direction::Right if col + 1 < size => Some(blank + 1),
        _ => None,
    }
}
