// src/generator/regions.rs

use std::collections::VecDeque;

use crate::map::{Coord, Grid, Tile};

/// A maximal 4-connected set of same-valued tiles, in flood-fill order.
pub type Region = Vec<Coord>;

/// Finds every region of `tile` in the grid.
///
/// The grid is scanned row-major; each unvisited matching cell seeds a
/// breadth-first flood fill over its orthogonal neighbours. Diagonal cells are
/// never connected, and no cell ends up in two regions.
pub fn extract_regions(grid: &Grid, tile: Tile) -> Vec<Region> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut regions = Vec::new();

    for start in grid.coords() {
        if !visited[flag_index(grid, start)] && grid.tile(start) == Some(tile) {
            regions.push(flood_fill(grid, start, tile, &mut visited));
        }
    }

    regions
}

fn flag_index(grid: &Grid, c: Coord) -> usize {
    c.y as usize * grid.width() + c.x as usize
}

fn flood_fill(grid: &Grid, start: Coord, tile: Tile, visited: &mut [bool]) -> Region {
    let mut region = Vec::new();
    let mut queue = VecDeque::new();

    visited[flag_index(grid, start)] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        region.push(current);
        for next in current.neighbours4() {
            if grid.tile(next) != Some(tile) {
                continue;
            }
            let flag = flag_index(grid, next);
            if !visited[flag] {
                visited[flag] = true;
                queue.push_back(next);
            }
        }
    }

    region
}
