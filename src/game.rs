//! Engine facade: owns the board, both input controllers, the play clock,
//! and the event queue consumed by the session layer.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::{BoardError, Slot};
use crate::config::{ACCEL_ACT_INTERVAL_MS, DEFAULT_GRID_SIZE, DEFAULT_TILE_EXTENT};
use crate::domain::{Event, TileOffset};
use crate::drag::DragController;
use crate::gesture::Point;
use crate::tilt::{AccelSample, TiltAction, TiltController};

/// Which input modality a gesture session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Tilt,
}

/// Coarse phase of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    Finished,
}

/// Core game logic driving one puzzle session.
///
/// All operations are synchronous; the host calls `tick` from its timer
/// and the `*_session` commands from its pointer events, then drains
/// events and reads `cells`/`tile_offset` to render. At most one gesture
/// session (drag or tilt) is live at a time.
pub struct PuzzleEngine {
    board: Board,
    drag: DragController,
    tilt: TiltController,
    tile_extent: f32,
    paused: bool,
    finished: bool,
    accel_enabled: bool,
    accel_gate_ms: u64,
    play_time_ms: u64,
    offset: Option<TileOffset>,
    events: Vec<Event>,
}

impl PuzzleEngine {
    /// Engine holding a solved default board, finished until `new_game`.
    pub fn new() -> Self {
        Self {
            board: Board::solved(DEFAULT_GRID_SIZE),
            drag: DragController::new(),
            tilt: TiltController::new(),
            tile_extent: DEFAULT_TILE_EXTENT,
            paused: true,
            finished: true,
            accel_enabled: false,
            accel_gate_ms: 0,
            play_time_ms: 0,
            offset: None,
            events: Vec::new(),
        }
    }

    /// Start a fresh game from a shuffled tile list. `tile_extent` is the
    /// tile edge length in the host's gesture units.
    pub fn new_game(
        &mut self,
        size: usize,
        tiles: Vec<Slot>,
        tile_extent: f32,
    ) -> Result<(), BoardError> {
        self.board = Board::from_cells(size, tiles)?;
        self.drag.cancel();
        self.tilt.reset();
        self.tile_extent = tile_extent;
        self.paused = false;
        self.finished = false;
        self.accel_gate_ms = 0;
        self.play_time_ms = 0;
        self.offset = None;
        self.events.clear();
        Ok(())
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every cell, for layout rendering.
    pub fn cells(&self) -> &[Slot] {
        self.board.cells()
    }

    /// Tile edge length in gesture units for the current game.
    pub fn tile_extent(&self) -> f32 {
        self.tile_extent
    }

    /// Offset of the tile currently following a gesture, if any.
    pub fn tile_offset(&self) -> Option<TileOffset> {
        self.offset
    }

    /// Milliseconds of play time accumulated while running.
    pub fn play_time_ms(&self) -> u64 {
        self.play_time_ms
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.finished {
            GameStatus::Finished
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Running
        }
    }

    /// True when the accelerometer feed is being consumed.
    pub fn accelerometer_enabled(&self) -> bool {
        self.accel_enabled
    }

    /// Drain all queued events.
    pub fn take_events(&mut self) -> Vec<Event> {
        core::mem::take(&mut self.events)
    }

    /// Pause or resume. Pausing abandons any live gesture session.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        if paused {
            self.clear_sessions();
        }
    }

    /// Enable or disable tilt input. Disabling abandons a live tilt lock.
    pub fn set_accelerometer_enabled(&mut self, enabled: bool) {
        self.accel_enabled = enabled;
        if !enabled && self.tilt.is_active() {
            self.tilt.reset();
            self.offset = None;
        }
    }

    /// Open a gesture session on `cell`. Only `Drag` opens here: tilt
    /// sessions are sensor-driven and lock their own targets from `tick`.
    /// Ignored while paused or finished, or while any session is live.
    pub fn start_session(&mut self, kind: GestureKind, cell: usize, origin: Point) {
        if kind != GestureKind::Drag {
            return;
        }
        if !self.running() || self.tilt.is_active() {
            return;
        }
        self.drag.on_press(cell, origin, &self.board);
    }

    /// Update the live drag session with the current pointer position.
    /// A no-op without a session.
    pub fn update_session(&mut self, point: Point) {
        if !self.running() {
            return;
        }
        if let Some(offset) = self.drag.on_move(point, &self.board, self.tile_extent) {
            self.offset = Some(offset);
        }
    }

    /// Release the live drag session, committing the move when the final
    /// projected delta beats the commit threshold. The visual offset
    /// resets to zero regardless of the outcome.
    pub fn release_session(&mut self, point: Point) {
        if !self.running() {
            self.drag.cancel();
            return;
        }
        if !self.drag.is_active() {
            return;
        }
        let commit = self.drag.on_release(point, &self.board, self.tile_extent);
        self.offset = None;
        if let Some(cell) = commit {
            self.apply_move(cell);
        }
    }

    /// Advance the play clock and, roughly every 50 ms of sensor time,
    /// feed the tilt controller. Tilt processing is suppressed while the
    /// accelerometer is disabled, the game is not running, or a drag
    /// session is live.
    pub fn tick(&mut self, elapsed_ms: u64, accel: Option<AccelSample>) {
        if self.running() {
            self.play_time_ms += elapsed_ms;
        }
        self.accel_gate_ms = self.accel_gate_ms.saturating_add(elapsed_ms);
        if !self.accel_enabled || !self.running() || self.drag.is_active() {
            return;
        }
        if self.accel_gate_ms <= ACCEL_ACT_INTERVAL_MS {
            return;
        }
        let Some(sample) = accel else {
            return;
        };
        self.accel_gate_ms = 0;
        match self.tilt.on_sample(sample, &self.board, self.tile_extent) {
            TiltAction::None => {}
            TiltAction::Cancel { .. } => self.offset = None,
            TiltAction::Track(offset) => self.offset = Some(offset),
            TiltAction::Release { cell, committed } => {
                self.offset = None;
                if committed {
                    self.apply_move(cell);
                }
            }
        }
    }

    fn running(&self) -> bool {
        !self.paused && !self.finished
    }

    fn clear_sessions(&mut self) {
        self.drag.cancel();
        self.tilt.reset();
        self.offset = None;
    }

    /// Slide the tile at `cell` into the blank and run the solved check.
    fn apply_move(&mut self, cell: usize) {
        let blank = self.board.blank_index();
        match self.board.swap(cell, blank) {
            Ok(()) => {
                self.events.push(Event::TileSwapped {
                    from: cell,
                    to: blank,
                });
                #[cfg(feature = "std")]
                log::debug!("tile slid from {} into blank at {}", cell, blank);
                if self.board.is_solved() {
                    self.finished = true;
                    self.paused = true;
                    self.clear_sessions();
                    self.events.push(Event::Solved {
                        play_time_ms: self.play_time_ms,
                    });
                    #[cfg(feature = "std")]
                    log::info!("puzzle solved in {} ms", self.play_time_ms);
                }
            }
            Err(err) => {
                // a controller handed us an illegal move; drop it rather
                // than poison the board
                #[cfg(feature = "std")]
                log::error!("rejected illegal swap: {}", err);
                #[cfg(not(feature = "std"))]
                let _ = err;
            }
        }
    }
}

impl Default for PuzzleEngine {
    fn default() -> Self {
        Self::new()
    }
}
