// src/generator/passage.rs

use serde::Serialize;

use crate::map::{Coord, Grid, Tile};
use crate::utils::GridLine;

/// A carved connection between two rooms, recorded in carving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Passage {
    pub room_a: usize,
    pub room_b: usize,
    pub tile_a: Coord,
    pub tile_b: Coord,
}

/// Sets every in-bounds cell within `radius` of `center` (inclusive) to floor.
///
/// Only the part of the stamp that overlaps the grid is visited, and distances
/// are compared in `i64`, so any non-negative radius is safe.
pub fn draw_circle(grid: &mut Grid, center: Coord, radius: i32) {
    let r = radius as i64;
    let r2 = r * r;
    let (cx, cy) = (center.x as i64, center.y as i64);

    let min_x = (cx - r).max(0);
    let max_x = (cx + r).min(grid.width() as i64 - 1);
    let min_y = (cy - r).max(0);
    let max_y = (cy + r).min(grid.height() as i64 - 1);

    for x in min_x..=max_x {
        for y in min_y..=max_y {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r2 {
                grid.set(x as i32, y as i32, Tile::Floor);
            }
        }
    }
}

/// Opens a walkable passage between two tiles by stamping a circle on every
/// cell of the line joining them.
pub fn carve_passage(grid: &mut Grid, from: Coord, to: Coord, radius: i32) {
    for cell in GridLine::new(from, to).cells() {
        draw_circle(grid, cell, radius);
    }
}
