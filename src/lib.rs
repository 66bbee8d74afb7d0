#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
#[cfg(feature = "std")]
mod cli;
mod common;
mod config;
mod domain;
mod drag;
mod game;
mod gesture;
#[cfg(feature = "std")]
mod leaderboard;
#[cfg(feature = "std")]
mod logging;
pub mod moves;
mod shuffle;
mod tilt;

pub use board::*;
#[cfg(feature = "std")]
pub use cli::*;
pub use common::*;
pub use config::*;
pub use domain::*;
pub use drag::*;
pub use game::*;
pub use gesture::*;
#[cfg(feature = "std")]
pub use leaderboard::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use moves::*;
pub use shuffle::*;
pub use tilt::*;
