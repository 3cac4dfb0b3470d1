// src/generator/rooms.rs

use std::cmp::Reverse;
use std::collections::BTreeSet;

use log::debug;
use serde::Serialize;

use crate::generator::error::{CaveError, Result};
use crate::generator::regions::{extract_regions, Region};
use crate::map::{Coord, Grid, Tile};

/// A floor region that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub tiles: Vec<Coord>,
    /// Member tiles with at least one orthogonal wall neighbour.
    pub edge_tiles: Vec<Coord>,
    pub size: usize,
    pub is_main_room: bool,
    pub is_accessible_from_main_room: bool,
    /// Indices of directly connected rooms in the owning room list.
    pub connected_rooms: BTreeSet<usize>,
}

impl Room {
    pub fn new(tiles: Region, grid: &Grid) -> Self {
        let edge_tiles = tiles
            .iter()
            .copied()
            .filter(|tile| tile.neighbours4().iter().any(|n| grid.is_wall(n.x, n.y)))
            .collect();
        Room {
            size: tiles.len(),
            tiles,
            edge_tiles,
            is_main_room: false,
            is_accessible_from_main_room: false,
            connected_rooms: BTreeSet::new(),
        }
    }

    pub fn is_connected(&self, other: usize) -> bool {
        self.connected_rooms.contains(&other)
    }
}

/// Ordering key for rooms: largest first.
pub fn largest_first(room: &Room) -> Reverse<usize> {
    Reverse(room.size)
}

/// Result of the two filtering passes.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Surviving rooms, sorted largest first; index 0 is the main room.
    pub rooms: Vec<Room>,
    pub wall_regions_removed: usize,
    pub floor_regions_removed: usize,
}

/// Overwrites every region of `tile` smaller than `threshold` with `replacement`.
///
/// Returns the regions that were kept and the number of regions replaced.
pub fn fill_small_regions(grid: &mut Grid, tile: Tile, threshold: usize, replacement: Tile) -> (Vec<Region>, usize) {
    let mut kept = Vec::new();
    let mut removed = 0;

    for region in extract_regions(grid, tile) {
        if region.len() < threshold {
            for c in &region {
                grid.set_coord(*c, replacement);
            }
            removed += 1;
        } else {
            kept.push(region);
        }
    }

    (kept, removed)
}

/// Removes small wall blobs and small floor pockets, then promotes the
/// remaining floor regions to rooms and designates the largest as main room.
pub fn filter_regions(grid: &mut Grid, wall_threshold: usize, room_threshold: usize) -> Result<FilterOutcome> {
    let (_, wall_regions_removed) = fill_small_regions(grid, Tile::Wall, wall_threshold, Tile::Floor);
    let (floor_regions, floor_regions_removed) = fill_small_regions(grid, Tile::Floor, room_threshold, Tile::Wall);

    debug!(
        "Region filter removed {} wall region(s) and {} floor region(s); {} room(s) survive",
        wall_regions_removed,
        floor_regions_removed,
        floor_regions.len()
    );

    let mut rooms: Vec<Room> = floor_regions.into_iter().map(|region| Room::new(region, grid)).collect();
    rooms.sort_by_key(largest_first);

    let main_room = rooms.first_mut().ok_or(CaveError::NoSurvivingRooms {
        threshold: room_threshold,
    })?;
    main_room.is_main_room = true;
    main_room.is_accessible_from_main_room = true;

    Ok(FilterOutcome {
        rooms,
        wall_regions_removed,
        floor_regions_removed,
    })
}
