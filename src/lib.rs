// src/lib.rs

pub mod generator;
pub mod map;
pub mod utils;

pub use generator::{generate, CaveError, CaveGenerator, CaveMap, GeneratorConfig};
pub use map::{Coord, Grid, Tile};
