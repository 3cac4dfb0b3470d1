// src/map/mod.rs
pub mod coord;
pub mod grid;
pub mod tile;

pub use coord::Coord;
pub use grid::Grid;
pub use tile::Tile;
