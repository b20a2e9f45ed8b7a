//! Static-body layout handed to the external physics engine
//!
//! Pure geometry: closed walls become blocking rectangles centered on the
//! boundary between their two cells, the world edge gets four border
//! rectangles, the goal fills most of the bottom-right cell, and the ball
//! spawns in the top-left cell. Open walls produce no body at all.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::cell_center;
use crate::consts::{BALL_RADIUS_DIVISOR, BORDER_THICKNESS, GOAL_SIZE_FACTOR, WALL_THICKNESS};
use crate::maze::{Cell, GridSize, Maze};

/// What a static rectangle body represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    /// World-edge border
    Border,
    /// Closed internal maze wall
    Wall,
    /// Goal region in the bottom-right cell
    Goal,
}

/// A static rectangle body descriptor (center + full extents)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticBody {
    pub kind: BodyKind,
    pub center: Vec2,
    pub size: Vec2,
}

/// Where the ball spawns, in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSpawn {
    pub center: Vec2,
    pub radius: f32,
}

/// The four border rectangles along the world edges
pub fn border_bodies(width: f32, height: f32) -> [StaticBody; 4] {
    let make = |center: Vec2, size: Vec2| StaticBody {
        kind: BodyKind::Border,
        center,
        size,
    };
    [
        make(Vec2::new(width / 2.0, 0.0), Vec2::new(width, BORDER_THICKNESS)),
        make(Vec2::new(width / 2.0, height), Vec2::new(width, BORDER_THICKNESS)),
        make(Vec2::new(0.0, height / 2.0), Vec2::new(BORDER_THICKNESS, height)),
        make(Vec2::new(width, height / 2.0), Vec2::new(BORDER_THICKNESS, height)),
    ]
}

/// One rectangle per closed wall, centered on the cell boundary
pub fn wall_bodies(maze: &Maze, unit: Vec2) -> Vec<StaticBody> {
    let size = maze.size();
    let mut bodies = Vec::new();

    // Closed horizontal wall (r,c): boundary between (r,c) and (r+1,c)
    for row in 0..size.rows().saturating_sub(1) {
        for col in 0..size.cols() {
            if maze.horizontal_open(row, col) {
                continue;
            }
            bodies.push(StaticBody {
                kind: BodyKind::Wall,
                center: Vec2::new(
                    col as f32 * unit.x + unit.x / 2.0,
                    row as f32 * unit.y + unit.y,
                ),
                size: Vec2::new(unit.x, WALL_THICKNESS),
            });
        }
    }

    // Closed vertical wall (r,c): boundary between (r,c) and (r,c+1)
    for row in 0..size.rows() {
        for col in 0..size.cols().saturating_sub(1) {
            if maze.vertical_open(row, col) {
                continue;
            }
            bodies.push(StaticBody {
                kind: BodyKind::Wall,
                center: Vec2::new(
                    col as f32 * unit.x + unit.x,
                    row as f32 * unit.y + unit.y / 2.0,
                ),
                size: Vec2::new(WALL_THICKNESS, unit.y),
            });
        }
    }

    bodies
}

/// Goal rectangle centered in the bottom-right cell
pub fn goal_body(size: GridSize, unit: Vec2) -> StaticBody {
    let goal_cell = Cell::new(size.rows() - 1, size.cols() - 1);
    StaticBody {
        kind: BodyKind::Goal,
        center: cell_center(goal_cell, unit),
        size: unit * GOAL_SIZE_FACTOR,
    }
}

/// Ball spawn centered in the top-left cell
pub fn ball_spawn(unit: Vec2) -> BallSpawn {
    BallSpawn {
        center: cell_center(Cell::new(0, 0), unit),
        radius: unit.x.min(unit.y) / BALL_RADIUS_DIVISOR,
    }
}
