//! Grid addressing: validated dimensions, cell coordinates, directions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a grid dimension is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeError {
    pub rows: usize,
    pub cols: usize,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid grid size {}x{}: both dimensions must be at least 1",
            self.rows, self.cols
        )
    }
}

impl std::error::Error for SizeError {}

/// Validated grid dimensions (rows x columns, both >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

impl GridSize {
    /// Validate dimensions; zero rows or columns is the only failure mode
    pub fn new(rows: usize, cols: usize) -> Result<Self, SizeError> {
        if rows == 0 || cols == 0 {
            return Err(SizeError { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// True if the cell lies inside the grid
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }
}

/// A cell address, 0-indexed from the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step one cell in `dir`, or `None` if that leaves the grid
    pub fn neighbor(self, dir: Direction, size: GridSize) -> Option<Cell> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let cell = Cell { row, col };
        size.contains(cell).then_some(cell)
    }

    /// Direction from `self` to an adjacent cell, `None` if not 4-adjacent
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            if self.row.checked_add_signed(dr) == Some(other.row)
                && self.col.checked_add_signed(dc) == Some(other.col)
            {
                return Some(dir);
            }
        }
        None
    }
}

/// The four cardinal neighbor directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Candidate order before shuffling: up, right, down, left
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// (row delta, column delta)
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}
