//! Deterministic maze generation
//!
//! The generator must be pure and deterministic:
//! - All randomness comes from a caller-supplied `rand::Rng`
//! - No I/O, no ambient entropy, no platform dependencies
//! - Identical RNG sequences produce bit-identical mazes

pub mod carve;
pub mod grid;

pub use carve::{Maze, carve, carve_from};
pub use grid::{Cell, Direction, GridSize, SizeError};
