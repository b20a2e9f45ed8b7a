//! Randomized depth-first spanning-tree carving
//!
//! The carver opens exactly `rows * cols - 1` walls, leaving a maze whose
//! open-wall graph is a spanning tree: every pair of cells is connected by
//! exactly one path. Recursion is replaced with an explicit frame stack so
//! large grids cannot exhaust the call stack; visitation order is identical
//! to the recursive form.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Direction, GridSize};

/// A carved maze: which walls between adjacent cells are open
///
/// Matrices are fixed once carving completes; all mutation is internal to
/// [`carve_from`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    size: GridSize,
    /// rows x (cols - 1); `[r][c]` is the wall between (r,c) and (r,c+1)
    vertical_open: Vec<Vec<bool>>,
    /// (rows - 1) x cols; `[r][c]` is the wall between (r,c) and (r+1,c)
    horizontal_open: Vec<Vec<bool>>,
}

impl Maze {
    fn closed(size: GridSize) -> Self {
        Self {
            size,
            vertical_open: vec![vec![false; size.cols() - 1]; size.rows()],
            horizontal_open: vec![vec![false; size.cols()]; size.rows() - 1],
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Is the wall between (row,col) and (row,col+1) open?
    pub fn vertical_open(&self, row: usize, col: usize) -> bool {
        self.vertical_open[row][col]
    }

    /// Is the wall between (row,col) and (row+1,col) open?
    pub fn horizontal_open(&self, row: usize, col: usize) -> bool {
        self.horizontal_open[row][col]
    }

    /// Is there an open wall between two adjacent cells?
    ///
    /// Returns false for non-adjacent or out-of-grid pairs.
    pub fn open_between(&self, a: Cell, b: Cell) -> bool {
        if !self.size.contains(a) || !self.size.contains(b) {
            return false;
        }
        match a.direction_to(b) {
            Some(Direction::Right) => self.vertical_open[a.row][a.col],
            Some(Direction::Left) => self.vertical_open[a.row][a.col - 1],
            Some(Direction::Down) => self.horizontal_open[a.row][a.col],
            Some(Direction::Up) => self.horizontal_open[a.row - 1][a.col],
            None => false,
        }
    }

    /// Cells reachable from `cell` in one step through an open wall
    pub fn open_neighbors(&self, cell: Cell) -> Vec<Cell> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| cell.neighbor(dir, self.size))
            .filter(|&n| self.open_between(cell, n))
            .collect()
    }

    /// Total number of opened walls (spanning tree: `cells - 1`)
    pub fn open_wall_count(&self) -> usize {
        let vertical = self
            .vertical_open
            .iter()
            .flatten()
            .filter(|&&open| open)
            .count();
        let horizontal = self
            .horizontal_open
            .iter()
            .flatten()
            .filter(|&&open| open)
            .count();
        vertical + horizontal
    }

    fn open_wall(&mut self, cell: Cell, dir: Direction) {
        match dir {
            Direction::Right => self.vertical_open[cell.row][cell.col] = true,
            Direction::Left => self.vertical_open[cell.row][cell.col - 1] = true,
            Direction::Down => self.horizontal_open[cell.row][cell.col] = true,
            Direction::Up => self.horizontal_open[cell.row - 1][cell.col] = true,
        }
    }
}

/// One in-progress cell on the carving stack: its shuffled neighbor order
/// and how far through it we are
struct Frame {
    cell: Cell,
    order: [Direction; 4],
    next: usize,
}

/// Fisher-Yates shuffle of the four candidate directions
fn shuffled_directions(rng: &mut impl Rng) -> [Direction; 4] {
    let mut order = Direction::ALL;
    let mut counter = order.len();
    while counter > 1 {
        let index = rng.random_range(0..counter);
        counter -= 1;
        order.swap(counter, index);
    }
    order
}

/// Carve a maze starting from a uniformly random cell
pub fn carve(size: GridSize, rng: &mut impl Rng) -> Maze {
    let start = Cell::new(
        rng.random_range(0..size.rows()),
        rng.random_range(0..size.cols()),
    );
    carve_from(size, start, rng)
}

/// Carve a maze rooted at `start`
///
/// # Panics
///
/// Panics if `start` lies outside the grid.
pub fn carve_from(size: GridSize, start: Cell, rng: &mut impl Rng) -> Maze {
    assert!(size.contains(start), "start cell outside grid");

    let mut maze = Maze::closed(size);
    let mut visited = vec![vec![false; size.cols()]; size.rows()];

    visited[start.row][start.col] = true;
    let mut stack = vec![Frame {
        cell: start,
        order: shuffled_directions(rng),
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.order.len() {
            stack.pop();
            continue;
        }
        let cell = frame.cell;
        let dir = frame.order[frame.next];
        frame.next += 1;

        // Out-of-bounds neighbors are silently skipped
        let Some(neighbor) = cell.neighbor(dir, size) else {
            continue;
        };
        if visited[neighbor.row][neighbor.col] {
            continue;
        }

        // First discovery: open the wall, then descend
        maze.open_wall(cell, dir);
        visited[neighbor.row][neighbor.col] = true;
        stack.push(Frame {
            cell: neighbor,
            order: shuffled_directions(rng),
            next: 0,
        });
    }

    log::debug!(
        "carved {}x{} maze from ({},{}): {} walls open",
        size.rows(),
        size.cols(),
        start.row,
        start.col,
        maze.open_wall_count()
    );
    maze
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_pcg::Pcg32;

    /// RNG whose every draw is zero, so `random_range` always returns the
    /// low bound. Drives the carver through a known path: start (0,0),
    /// neighbor order [right, down, left, up] at every cell.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
    }

    fn reachable_count(maze: &Maze) -> usize {
        let size = maze.size();
        let mut seen = vec![vec![false; size.cols()]; size.rows()];
        let mut queue = vec![Cell::new(0, 0)];
        seen[0][0] = true;
        let mut count = 0;
        while let Some(cell) = queue.pop() {
            count += 1;
            for next in maze.open_neighbors(cell) {
                if !seen[next.row][next.col] {
                    seen[next.row][next.col] = true;
                    queue.push(next);
                }
            }
        }
        count
    }

    /// DFS with parent tracking; any open edge back to a non-parent
    /// visited cell is a cycle.
    fn has_cycle(maze: &Maze) -> bool {
        let size = maze.size();
        let mut seen = vec![vec![false; size.cols()]; size.rows()];
        let mut stack = vec![(Cell::new(0, 0), None::<Cell>)];
        seen[0][0] = true;
        while let Some((cell, parent)) = stack.pop() {
            for next in maze.open_neighbors(cell) {
                if Some(next) == parent {
                    continue;
                }
                if seen[next.row][next.col] {
                    return true;
                }
                seen[next.row][next.col] = true;
                stack.push((next, Some(cell)));
            }
        }
        false
    }

    #[test]
    fn test_one_by_one_has_no_walls() {
        let size = GridSize::new(1, 1).unwrap();
        let maze = carve(size, &mut Pcg32::seed_from_u64(7));
        assert_eq!(maze.open_wall_count(), 0);
        assert!(maze.open_neighbors(Cell::new(0, 0)).is_empty());
    }

    #[test]
    fn test_single_row_is_a_path() {
        let size = GridSize::new(1, 5).unwrap();
        let maze = carve(size, &mut Pcg32::seed_from_u64(3));
        // Only one way to span a single row: every vertical wall open
        for col in 0..4 {
            assert!(maze.vertical_open(0, col));
        }
        assert_eq!(maze.open_wall_count(), 4);
    }

    #[test]
    fn test_scripted_two_by_two() {
        let size = GridSize::new(2, 2).unwrap();
        let maze = carve(size, &mut ZeroRng);

        // Start (0,0), order [right, down, left, up] everywhere:
        // (0,0)->(0,1), (0,1)->(1,1), (1,1)->(1,0)
        assert!(maze.vertical_open(0, 0));
        assert!(maze.horizontal_open(0, 1));
        assert!(maze.vertical_open(1, 0));
        assert!(!maze.horizontal_open(0, 0));
        assert_eq!(maze.open_wall_count(), 3);
        assert_eq!(reachable_count(&maze), 4);
    }

    #[test]
    fn test_spanning_tree_default_grid() {
        let size = GridSize::new(5, 5).unwrap();
        let maze = carve(size, &mut Pcg32::seed_from_u64(42));
        assert_eq!(maze.open_wall_count(), 24);
        assert_eq!(reachable_count(&maze), 25);
        assert!(!has_cycle(&maze));
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let size = GridSize::new(6, 4).unwrap();
        let a = carve(size, &mut Pcg32::seed_from_u64(99));
        let b = carve(size, &mut Pcg32::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_open_between_rejects_non_adjacent() {
        let size = GridSize::new(3, 3).unwrap();
        let maze = carve(size, &mut Pcg32::seed_from_u64(1));
        assert!(!maze.open_between(Cell::new(0, 0), Cell::new(2, 2)));
        assert!(!maze.open_between(Cell::new(0, 0), Cell::new(0, 0)));
        assert!(!maze.open_between(Cell::new(0, 0), Cell::new(0, 7)));
    }

    #[test]
    #[should_panic(expected = "start cell outside grid")]
    fn test_carve_from_rejects_outside_start() {
        let size = GridSize::new(2, 2).unwrap();
        let _ = carve_from(size, Cell::new(2, 0), &mut Pcg32::seed_from_u64(0));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn wall_count_is_cells_minus_one(
                rows in 1usize..9,
                cols in 1usize..9,
                seed: u64,
            ) {
                let size = GridSize::new(rows, cols).unwrap();
                let maze = carve(size, &mut Pcg32::seed_from_u64(seed));
                prop_assert_eq!(maze.open_wall_count(), rows * cols - 1);
            }

            #[test]
            fn every_cell_is_reachable(
                rows in 1usize..9,
                cols in 1usize..9,
                seed: u64,
            ) {
                let size = GridSize::new(rows, cols).unwrap();
                let maze = carve(size, &mut Pcg32::seed_from_u64(seed));
                prop_assert_eq!(reachable_count(&maze), rows * cols);
            }

            #[test]
            fn open_walls_form_no_cycle(
                rows in 1usize..9,
                cols in 1usize..9,
                seed: u64,
            ) {
                let size = GridSize::new(rows, cols).unwrap();
                let maze = carve(size, &mut Pcg32::seed_from_u64(seed));
                prop_assert!(!has_cycle(&maze));
            }

            #[test]
            fn same_seed_same_maze(
                rows in 1usize..9,
                cols in 1usize..9,
                seed: u64,
            ) {
                let size = GridSize::new(rows, cols).unwrap();
                let a = carve(size, &mut Pcg32::seed_from_u64(seed));
                let b = carve(size, &mut Pcg32::seed_from_u64(seed));
                prop_assert_eq!(a, b);
            }
        }
    }
}
