//! Maze Roll - a grid maze game core
//!
//! Core modules:
//! - `maze`: Deterministic spanning-tree maze carving
//! - `world`: Session object and the static-body layout consumed by an
//!   external physics/render engine
//! - `settings`: World/grid configuration
//!
//! The crate deliberately stops at body descriptors: physics simulation,
//! rendering, and input handling all belong to the consuming engine.

pub mod maze;
pub mod settings;
pub mod world;

pub use maze::{Cell, Direction, GridSize, Maze, SizeError, carve, carve_from};
pub use settings::Settings;
pub use world::{BallSpawn, BodyKind, StaticBody, World};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Thickness of internal wall bodies (world units)
    pub const WALL_THICKNESS: f32 = 5.0;
    /// Thickness of the four border bodies
    pub const BORDER_THICKNESS: f32 = 2.0;
    /// Goal rectangle side length as a fraction of one cell
    pub const GOAL_SIZE_FACTOR: f32 = 0.7;
    /// Ball radius is `min(unit_x, unit_y) / BALL_RADIUS_DIVISOR`
    pub const BALL_RADIUS_DIVISOR: f32 = 3.0;

    /// Default world dimensions
    pub const DEFAULT_WORLD_WIDTH: f32 = 800.0;
    pub const DEFAULT_WORLD_HEIGHT: f32 = 600.0;
    /// Default grid size (cells)
    pub const DEFAULT_CELLS_HORIZONTAL: usize = 5;
    pub const DEFAULT_CELLS_VERTICAL: usize = 5;
}

/// Center of a cell in world coordinates, given the cell unit lengths
#[inline]
pub fn cell_center(cell: Cell, unit: Vec2) -> Vec2 {
    Vec2::new(
        (cell.col as f32 + 0.5) * unit.x,
        (cell.row as f32 + 0.5) * unit.y,
    )
}
