// engine/src/agents/mod.rs
#![forbid(unsafe_code)]

mod pursuit;
mod random;
mod space_grab;

/**
 * Curated agent public API.
 *
 * Internal implementation modules remain private; only stable agent entrypoints are re-exported.
 */
pub use pursuit::PursuitAgent;
pub use random::RandomAgent;
pub use space_grab::{path_to_nearest_empty, SpaceGrabAgent};

use crate::engine::{Direction, Game};

/// A strategy picks one direction per turn for the player to move.
///
/// `decide` is called exactly once per turn with a read-only snapshot.
/// `cleanup` is invoked by the driver between games and must restore the
/// agent's pre-game planning state; calling it twice is the same as once.
///
/// Object-safe so drivers can hold `Box<dyn Agent>`.
pub trait Agent {
    fn decide(&mut self, game: &Game) -> Direction;
    fn cleanup(&mut self);
}

/// Last-resort move when a strategy has nothing safe to play.
/// Returning it concedes the turn to the engine rather than erroring out.
pub const DEFAULT_ACTION: Direction = Direction::Up;
