// src/generator/smoother.rs

use crate::map::{Grid, Tile};

/// Counts walls among the 8 neighbours of `(x, y)`. Cells outside the grid count as walls.
pub fn surrounding_wall_count(grid: &Grid, x: i32, y: i32) -> u32 {
    let mut count = 0;
    for nx in x - 1..=x + 1 {
        for ny in y - 1..=y + 1 {
            if (nx != x || ny != y) && grid.is_wall(nx, ny) {
                count += 1;
            }
        }
    }
    count
}

/// Runs one cellular-automaton pass and returns the next grid.
///
/// The write buffer starts as a copy of `current`, so cells whose count lies
/// between the thresholds keep their previous value.
pub fn smooth_once(current: &Grid, wall_threshold: u32, floor_threshold: u32) -> Grid {
    let mut next = current.clone();
    for c in current.coords() {
        let walls = surrounding_wall_count(current, c.x, c.y);
        if walls > wall_threshold {
            next.set_coord(c, Tile::Wall);
        } else if walls < floor_threshold {
            next.set_coord(c, Tile::Floor);
        }
    }
    next
}

/// Applies `cycles` smoothing passes, handing each result on as the next read buffer.
pub fn smooth(mut grid: Grid, cycles: usize, wall_threshold: u32, floor_threshold: u32) -> Grid {
    for _ in 0..cycles {
        grid = smooth_once(&grid, wall_threshold, floor_threshold);
    }
    grid
}
