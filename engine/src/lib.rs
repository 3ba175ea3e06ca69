// engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod agents;
pub mod engine;

// Re-export the bits the CLI and tests need:
pub use agents::{path_to_nearest_empty, Agent, PursuitAgent, RandomAgent, SpaceGrabAgent};
pub use engine::{Board, Cell, Direction, Game, Player, Position, StepResult};
