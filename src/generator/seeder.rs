// src/generator/seeder.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::map::{Grid, Tile};
use crate::utils::util::hash_seed;

/// Builds the RNG owned by a single generation run.
pub fn seeded_rng(seed: &str) -> StdRng {
    StdRng::seed_from_u64(hash_seed(seed))
}

/// Produces the initial noise grid.
///
/// Border cells are always walls; every interior cell is a wall with
/// probability `fill_percent` / 100. Cells are drawn column by column so a
/// given seed always consumes the RNG in the same order.
pub fn random_fill<R: Rng>(width: usize, height: usize, fill_percent: u32, rng: &mut R) -> Grid {
    let mut grid = Grid::new(width, height, Tile::Wall);

    for x in 0..width {
        for y in 0..height {
            let on_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
            let tile = if on_border || rng.random_range(0..100) < fill_percent {
                Tile::Wall
            } else {
                Tile::Floor
            };
            grid.set(x as i32, y as i32, tile);
        }
    }

    grid
}
