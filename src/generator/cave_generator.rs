// src/generator/cave_generator.rs

use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;
use union_find::{QuickUnionUf, UnionBySize, UnionFind};

use crate::generator::border::add_border;
use crate::generator::config::GeneratorConfig;
use crate::generator::connector::connect_closest_rooms;
use crate::generator::error::Result;
use crate::generator::passage::Passage;
use crate::generator::rooms::{filter_regions, Room};
use crate::generator::seeder::{random_fill, seeded_rng};
use crate::generator::smoother::smooth;
use crate::map::{Coord, Grid, Tile};
use crate::utils::util::time_seed;

/// Runs the full cave pipeline for a validated configuration.
#[derive(Debug, Clone)]
pub struct CaveGenerator {
    config: GeneratorConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationStats {
    /// Wall-clock seconds spent in `generate`.
    pub generation_time: f64,
    pub room_count: usize,
    pub passage_count: usize,
    pub wall_regions_removed: usize,
    pub floor_regions_removed: usize,
    /// Tile counts of the final grid, border included.
    pub floor_tiles: usize,
    pub wall_tiles: usize,
}

impl GenerationStats {
    pub fn floor_ratio(&self) -> f64 {
        let total = self.floor_tiles + self.wall_tiles;
        if total == 0 {
            0.0
        } else {
            self.floor_tiles as f64 / total as f64
        }
    }
}

/// A finished cave: the bordered grid plus room and passage metadata.
///
/// Room tiles and passage endpoints are expressed in the unbordered frame; use
/// [`CaveMap::to_bordered`] to index `grid` with them.
#[derive(Debug, Clone, Serialize)]
pub struct CaveMap {
    pub grid: Grid,
    /// The seed that produced this map (the drawn one when a random seed was requested).
    pub seed: String,
    pub width: usize,
    pub height: usize,
    pub border_size: usize,
    /// Rooms sorted largest first; `rooms[0]` is the main room.
    pub rooms: Vec<Room>,
    pub passages: Vec<Passage>,
    pub stats: GenerationStats,
}

impl CaveMap {
    pub fn main_room(&self) -> Option<&Room> {
        self.rooms.iter().find(|room| room.is_main_room)
    }

    pub fn to_bordered(&self, coord: Coord) -> Coord {
        let offset = self.border_size as i32;
        coord.offset(offset, offset)
    }

    /// World-space position of a tile centre, with the unbordered map centred on the origin.
    pub fn world_position(&self, coord: Coord) -> (f32, f32) {
        let half_w = (self.width / 2) as f32;
        let half_h = (self.height / 2) as f32;
        (-half_w + 0.5 + coord.x as f32, -half_h + 0.5 + coord.y as f32)
    }

    /// True when the room connection graph is a single component.
    pub fn is_fully_connected(&self) -> bool {
        if self.rooms.is_empty() {
            return false;
        }
        let mut components = QuickUnionUf::<UnionBySize>::new(self.rooms.len());
        for (index, room) in self.rooms.iter().enumerate() {
            for &other in &room.connected_rooms {
                components.union(index, other);
            }
        }
        let root = components.find(0);
        (1..self.rooms.len()).all(|index| components.find(index) == root)
    }
}

impl CaveGenerator {
    /// Validates `config` and builds a generator for it.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(CaveGenerator { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates one map using the configured seed (or a time-derived one).
    pub fn generate(&self) -> Result<CaveMap> {
        let seed = if self.config.use_random_seed {
            let seed = time_seed();
            info!("Drew random seed {}", seed);
            seed
        } else {
            self.config.seed.clone()
        };
        self.generate_with_seed(&seed)
    }

    /// Generates one map from an explicit seed, ignoring `use_random_seed`.
    pub fn generate_with_seed(&self, seed: &str) -> Result<CaveMap> {
        let started = Instant::now();
        let config = &self.config;
        let width = config.width as usize;
        let height = config.height as usize;

        info!("Generating {}x{} cave with seed {:?}", width, height, seed);

        let mut rng = seeded_rng(seed);
        let noise = random_fill(width, height, config.random_wall_fill_percent as u32, &mut rng);

        let mut grid = smooth(
            noise,
            config.smooth_cycles as usize,
            config.wall_threshold as u32,
            config.floor_threshold as u32,
        );
        debug!("Smoothed grid has {} floor tile(s)", grid.count(Tile::Floor));

        let filtered = filter_regions(
            &mut grid,
            config.wall_region_threshold as usize,
            config.room_region_threshold as usize,
        )?;
        let mut rooms = filtered.rooms;

        let passages = connect_closest_rooms(&mut rooms, &mut grid, config.passage_radius)?;

        let border_size = config.border_size as usize;
        let grid = add_border(&grid, border_size);

        let stats = GenerationStats {
            generation_time: started.elapsed().as_secs_f64(),
            room_count: rooms.len(),
            passage_count: passages.len(),
            wall_regions_removed: filtered.wall_regions_removed,
            floor_regions_removed: filtered.floor_regions_removed,
            floor_tiles: grid.count(Tile::Floor),
            wall_tiles: grid.count(Tile::Wall),
        };
        info!(
            "Generated cave: {} room(s), {} passage(s), {:.1}% floor in {:.3}s",
            stats.room_count,
            stats.passage_count,
            stats.floor_ratio() * 100.0,
            stats.generation_time
        );

        Ok(CaveMap {
            grid,
            seed: seed.to_string(),
            width,
            height,
            border_size,
            rooms,
            passages,
            stats,
        })
    }

    /// Generates one independent map per seed in parallel.
    ///
    /// Every run owns its grid and RNG; results come back in input order.
    pub fn generate_batch<S: AsRef<str> + Sync>(&self, seeds: &[S]) -> Vec<Result<CaveMap>> {
        seeds
            .par_iter()
            .map(|seed| self.generate_with_seed(seed.as_ref()))
            .collect()
    }
}

/// Validates `config` and generates a single map.
pub fn generate(config: &GeneratorConfig) -> Result<CaveMap> {
    CaveGenerator::new(config.clone())?.generate()
}
