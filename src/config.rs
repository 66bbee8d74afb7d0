/// Default grid dimension (4 => 4 x 4).
pub const DEFAULT_GRID_SIZE: usize = 4;
/// Smallest playable grid.
pub const MIN_GRID_SIZE: usize = 2;
/// Fraction of a tile's extent a gesture must cover to commit a move.
pub const COMMIT_RATIO: f32 = 0.6;
/// Accelerometer readings within this band on both axes count as no tilt.
pub const ACCEL_DEAD_ZONE: f32 = 0.10;
/// Amplification applied to raw g readings when accumulating tilt deltas.
pub const ACCEL_GAIN: f32 = 30.0;
/// Minimum elapsed sensor time between tilt evaluations, in milliseconds.
pub const ACCEL_ACT_INTERVAL_MS: u64 = 50;
/// Qualifying tick on which the tilt controller locks a target.
pub const ACCEL_LOCK_TICK: u32 = 2;
/// Qualifying tick on which a locked tilt gesture is released.
pub const ACCEL_COMMIT_TICK: u32 = 8;
/// Tile edge length in gesture units, used when the host supplies none.
pub const DEFAULT_TILE_EXTENT: f32 = 64.0;
