//! Initial layouts: the solved arrangement, random shuffles, and the
//! classic reachability parity test.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::Slot;

/// Tiles in their solved order: ordinals ascending with the blank last.
pub fn solved_tiles(size: usize) -> Vec<Slot> {
    let len = size * size;
    let mut tiles = Vec::with_capacity(len);
    for ord in 0..len - 1 {
        tiles.push(Slot::Tile(ord));
    }
    tiles.push(Slot::Blank);
    tiles
}

/// Uniform random arrangement of the full tile set, blank included.
///
/// Reachability is not enforced: roughly half of all permutations cannot
/// be slid back to the solved layout. Callers that need a playable board
/// retry until [`is_solvable`] accepts the result.
pub fn shuffled_tiles<R: Rng>(rng: &mut R, size: usize) -> Vec<Slot> {
    let mut tiles = solved_tiles(size);
    tiles.shuffle(rng);
    tiles
}

/// Whether `cells` can be slid into the solved layout.
///
/// Inversion-count parity: on odd-width grids the inversion count must be
/// even; on even-width grids the inversion count plus the blank's row
/// distance from the bottom (counting the bottom row as 1) must be odd.
/// Assumes `cells` holds exactly one blank.
pub fn is_solvable(cells: &[Slot], size: usize) -> bool {
    let ordinals: Vec<usize> = cells.iter().filter_map(|slot| slot.ordinal()).collect();
    let mut inversions = 0usize;
    for i in 0..ordinals.len() {
        for j in i + 1..ordinals.len() {
            if ordinals[i] > ordinals[j] {
                inversions += 1;
            }
        }
    }
    let blank_row = cells
        .iter()
        .position(|slot| slot.is_blank())
        .unwrap_or(0)
        / size;
    if size % 2 == 1 {
        inversions % 2 == 0
    } else {
        let rows_from_bottom = size - blank_row;
        (inversions + rows_from_bottom) % 2 == 1
    }
}
