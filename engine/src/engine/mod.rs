// engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod board;
mod game;
mod geometry;

/**
 * Curated engine public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use board::{Board, Cell, Player};
pub use game::{Game, StepResult, DEFAULT_MAX_TURNS};
pub use geometry::{Direction, Position};
