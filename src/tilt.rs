//! Accelerometer state machine: accumulates noisy tilt readings into a
//! locked target cell and, after enough sustained motion, a committed
//! move.

use crate::board::Board;
use crate::common::Direction;
use crate::config::{ACCEL_COMMIT_TICK, ACCEL_DEAD_ZONE, ACCEL_GAIN, ACCEL_LOCK_TICK};
use crate::domain::TileOffset;
use crate::gesture;
use crate::moves;

/// One accelerometer reading, in g-units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccelSample {
    pub x: f32,
    pub y: f32,
}

/// What one tilt evaluation asks the engine to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TiltAction {
    /// Nothing to render or apply.
    None,
    /// A locked target lost its gesture; snap its offset back to zero.
    Cancel { cell: usize },
    /// A target is locked or still tracking; render its offset.
    Track(TileOffset),
    /// The locked gesture reached the commit tick and was released.
    Release { cell: usize, committed: bool },
}

/// Tilt input runs on qualifying ticks: the engine feeds a sample roughly
/// every 50 ms of sensor time. Two consecutive out-of-dead-zone ticks lock
/// a target; eight release it through the same threshold as a drag.
#[derive(Debug, Default)]
pub struct TiltController {
    target: Option<usize>,
    accum_dx: f32,
    accum_dy: f32,
    ticks: u32,
}

impl TiltController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell currently locked as the tilt target, if any.
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// True while a target is locked.
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Forget the locked target and all accumulated motion.
    pub fn reset(&mut self) {
        self.target = None;
        self.accum_dx = 0.0;
        self.accum_dy = 0.0;
        self.ticks = 0;
    }

    /// Evaluate one qualifying sensor reading.
    pub fn on_sample(&mut self, sample: AccelSample, board: &Board, extent: f32) -> TiltAction {
        if libm::fabsf(sample.x) <= ACCEL_DEAD_ZONE && libm::fabsf(sample.y) <= ACCEL_DEAD_ZONE {
            // no intentional tilt; any in-progress gesture is abandoned
            let cancelled = self.target;
            self.reset();
            return match cancelled {
                Some(cell) => TiltAction::Cancel { cell },
                None => TiltAction::None,
            };
        }

        self.ticks += 1;
        self.accum_dx += sample.x * ACCEL_GAIN;
        self.accum_dy += sample.y * -ACCEL_GAIN;

        if self.ticks < ACCEL_LOCK_TICK {
            return TiltAction::None;
        }
        if self.ticks == ACCEL_LOCK_TICK {
            return self.lock_target(board, extent);
        }

        let Some(cell) = self.target else {
            self.reset();
            return TiltAction::None;
        };
        let Some(slide) = slide_direction(cell, board) else {
            // target is no longer next to the blank; treat as lost
            self.reset();
            return TiltAction::Cancel { cell };
        };
        let (dx, dy) = gesture::project(self.accum_dx, self.accum_dy, slide, extent);
        if self.ticks >= ACCEL_COMMIT_TICK {
            let committed = gesture::meets_commit_threshold(dx, dy, extent);
            self.reset();
            return TiltAction::Release { cell, committed };
        }
        TiltAction::Track(TileOffset { cell, dx, dy })
    }

    /// Second qualifying tick: the dominant accumulated axis and its sign
    /// pick which neighbor of the blank is being pushed. Tilting right
    /// raises X, reaching for the tile left of the blank, which slides
    /// right; the other three directions mirror.
    fn lock_target(&mut self, board: &Board, extent: f32) -> TiltAction {
        let abs_dx = libm::fabsf(self.accum_dx);
        let abs_dy = libm::fabsf(self.accum_dy);
        let from_blank = if abs_dx > abs_dy {
            if self.accum_dx > 0.0 {
                Direction::Left
            } else {
                Direction::Right
            }
        } else if self.accum_dy > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };
        match moves::neighbor_in_direction(board.blank_index(), from_blank, board.size()) {
            Some(cell) => {
                self.target = Some(cell);
                let (dx, dy) =
                    gesture::project(self.accum_dx, self.accum_dy, from_blank.opposite(), extent);
                TiltAction::Track(TileOffset { cell, dx, dy })
            }
            None => {
                self.reset();
                TiltAction::None
            }
        }
    }
}

fn slide_direction(cell: usize, board: &Board) -> Option<Direction> {
    moves::direction_from_blank(cell, board.blank_index(), board.size()).map(Direction::opposite)
}
