#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod error;
pub mod board;
pub mod state;
pub mod rng;

pub mod engine {
    pub mod apply;
    pub mod spawn;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{Board, Tile};
pub use crate::engine::apply::{apply_move, contact, Contact, MoveSummary};
pub use crate::engine::spawn::{spawn_tile, SPAWN_VALUE};
pub use crate::error::ParseDirectionError;
pub use crate::rng::{rng_for_seed, rng_from_clock, GameRng};
pub use crate::state::{is_game_over, GameState, Snapshot, TurnReport};
pub use crate::types::{Direction, Pos, CELLS, SIZE};
