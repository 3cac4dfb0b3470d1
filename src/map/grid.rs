// src/map/grid.rs

use std::fmt;

use serde::Serialize;

use crate::map::{Coord, Tile};

/// A fixed-size 2D tile grid stored row-major (`y * width + x`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Creates a grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: Tile) -> Self {
        Grid {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Returns the tile at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn tile(&self, coord: Coord) -> Option<Tile> {
        self.get(coord.x, coord.y)
    }

    /// Out-of-bounds positions read as walls.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.get(x, y).map_or(true, Tile::is_wall)
    }

    /// Sets the tile at `(x, y)`. Returns false (and does nothing) outside the grid.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = tile;
                true
            }
            None => false,
        }
    }

    pub fn set_coord(&mut self, coord: Coord, tile: Tile) -> bool {
        self.set(coord.x, coord.y, tile)
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// Iterates every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height as i32).flat_map(move |y| (0..self.width as i32).map(move |x| Coord::new(x, y)))
    }

    pub fn row(&self, y: usize) -> &[Tile] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let line: String = self.row(y).iter().map(|t| t.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
