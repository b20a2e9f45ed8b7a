//! Maze Roll entry point
//!
//! Generates a world and prints the maze plus the static-body layout an
//! external physics engine would instantiate.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::Rng;

use maze_roll::{BodyKind, Maze, Settings, World};

#[derive(Debug, Parser)]
#[command(name = "maze-roll", about = "Generate a maze and its physics-body layout")]
struct Args {
    /// Grid rows (overrides settings)
    #[arg(long)]
    rows: Option<usize>,
    /// Grid columns (overrides settings)
    #[arg(long)]
    cols: Option<usize>,
    /// World width in world units
    #[arg(long)]
    width: Option<f32>,
    /// World height in world units
    #[arg(long)]
    height: Option<f32>,
    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    if let Some(rows) = args.rows {
        settings.cells_vertical = rows;
    }
    if let Some(cols) = args.cols {
        settings.cells_horizontal = cols;
    }
    if let Some(width) = args.width {
        settings.world_width = width;
    }
    if let Some(height) = args.height {
        settings.world_height = height;
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let world = World::new(&settings, seed)?;

    println!("{}", render_ascii(world.maze()));

    let walls = count_kind(&world, BodyKind::Wall);
    let borders = count_kind(&world, BodyKind::Border);
    println!("seed: {seed}");
    println!(
        "bodies: {} ({borders} border, {walls} wall, 1 goal)",
        world.bodies().len()
    );
    let ball = world.ball();
    println!(
        "ball: spawn ({:.1}, {:.1}) radius {:.1}",
        ball.center.x, ball.center.y, ball.radius
    );
    println!(
        "goal: cell ({}, {})",
        world.goal_cell().row,
        world.goal_cell().col
    );

    Ok(())
}

fn count_kind(world: &World, kind: BodyKind) -> usize {
    world.bodies().iter().filter(|b| b.kind == kind).count()
}

/// Render the maze as an ASCII grid, closed walls drawn as `--` / `|`
fn render_ascii(maze: &Maze) -> String {
    let size = maze.size();
    let mut out = String::new();

    out.push('+');
    for _ in 0..size.cols() {
        out.push_str("--+");
    }
    out.push('\n');

    for row in 0..size.rows() {
        out.push('|');
        for col in 0..size.cols() {
            out.push_str("  ");
            let open = col + 1 < size.cols() && maze.vertical_open(row, col);
            out.push(if open { ' ' } else { '|' });
        }
        out.push('\n');

        out.push('+');
        for col in 0..size.cols() {
            let open = row + 1 < size.rows() && maze.horizontal_open(row, col);
            out.push_str(if open { "  +" } else { "--+" });
        }
        out.push('\n');
    }

    out
}
