// src/generator/border.rs

use crate::map::{Grid, Tile};

/// Embeds `grid` in a larger all-wall grid with `border` cells of padding on
/// every side.
///
/// This is a one-shot step of a generation run; padding an already padded
/// grid simply adds another ring.
pub fn add_border(grid: &Grid, border: usize) -> Grid {
    let mut bordered = Grid::new(grid.width() + border * 2, grid.height() + border * 2, Tile::Wall);
    let offset = border as i32;
    for c in grid.coords() {
        if let Some(tile) = grid.tile(c) {
            bordered.set(c.x + offset, c.y + offset, tile);
        }
    }
    bordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::seeder::{random_fill, seeded_rng};

    #[test]
    fn test_dimensions() {
        let grid = Grid::new(20, 15, Tile::Floor);
        let bordered = add_border(&grid, 5);
        assert_eq!(bordered.width(), 30);
        assert_eq!(bordered.height(), 25);
    }

    #[test]
    fn test_border_ring_and_interior() {
        let grid = random_fill(17, 11, 40, &mut seeded_rng("border"));
        let border = 3;
        let bordered = add_border(&grid, border);
        let b = border as i32;
        for c in bordered.coords() {
            let inside = c.x >= b && c.y >= b && c.x < b + 17 && c.y < b + 11;
            if inside {
                assert_eq!(bordered.tile(c), grid.get(c.x - b, c.y - b));
            } else {
                assert_eq!(bordered.tile(c), Some(Tile::Wall));
            }
        }
    }

    #[test]
    fn test_zero_border_is_copy() {
        let grid = random_fill(8, 8, 50, &mut seeded_rng("zero"));
        assert_eq!(add_border(&grid, 0), grid);
    }
}
