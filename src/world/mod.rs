//! Game world session: one maze instance plus its body layout
//!
//! Owns the full lifecycle the consuming engine drives: create with a seed,
//! hand out body descriptors, and reset by discarding everything and
//! regenerating from a fresh seed. No state survives a reset.

pub mod layout;

pub use layout::{BallSpawn, BodyKind, StaticBody, ball_spawn, border_bodies, goal_body, wall_bodies};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::maze::{Cell, GridSize, Maze, SizeError, carve};
use crate::settings::Settings;

/// A complete world instance (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Seed the current maze was generated from
    seed: u64,
    width: f32,
    height: f32,
    size: GridSize,
    maze: Maze,
    bodies: Vec<StaticBody>,
    ball: BallSpawn,
}

impl World {
    /// Build a world from settings; fails only on zero grid dimensions
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, SizeError> {
        let size = settings.grid_size()?;
        Ok(Self::build(
            settings.world_width,
            settings.world_height,
            size,
            seed,
        ))
    }

    /// Throw the current maze away and generate a fresh one
    ///
    /// Prior bodies and matrices are discarded wholesale; nothing is
    /// mutated incrementally.
    pub fn reset(&mut self, seed: u64) {
        *self = Self::build(self.width, self.height, self.size, seed);
        log::info!("world reset (seed {seed})");
    }

    fn build(width: f32, height: f32, size: GridSize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let maze = carve(size, &mut rng);
        let unit = Vec2::new(width / size.cols() as f32, height / size.rows() as f32);

        let mut bodies = Vec::new();
        bodies.extend(border_bodies(width, height));
        bodies.extend(wall_bodies(&maze, unit));
        bodies.push(goal_body(size, unit));
        let ball = ball_spawn(unit);

        log::info!(
            "generated {}x{} world (seed {seed}): {} static bodies",
            size.rows(),
            size.cols(),
            bodies.len()
        );

        Self {
            seed,
            width,
            height,
            size,
            maze,
            bodies,
            ball,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// All static bodies: borders, closed walls, goal
    pub fn bodies(&self) -> &[StaticBody] {
        &self.bodies
    }

    pub fn ball(&self) -> BallSpawn {
        self.ball
    }

    /// Cell the ball spawns in
    pub fn spawn_cell(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// Cell the goal occupies
    pub fn goal_cell(&self) -> Cell {
        Cell::new(self.size.rows() - 1, self.size.cols() - 1)
    }

    /// Cell-edge unit lengths in world coordinates
    pub fn unit_lengths(&self) -> Vec2 {
        Vec2::new(
            self.width / self.size.cols() as f32,
            self.height / self.size.rows() as f32,
        )
    }
}
