// src/generator/connector.rs

use std::collections::VecDeque;

use log::{debug, trace};

use crate::generator::error::{CaveError, Result};
use crate::generator::passage::{carve_passage, Passage};
use crate::generator::rooms::Room;
use crate::map::Grid;

/// Best connection found so far during a nearest-pair search.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: i64,
    passage: Passage,
}

/// Keeps the closest edge-tile pair between `room_a` and `room_b` in `best`.
///
/// Only a strictly smaller distance replaces the current best, so on ties the
/// first pair in iteration order wins.
fn consider_pair(room_a: &Room, room_b: &Room, a: usize, b: usize, best: &mut Option<Candidate>) {
    for &tile_a in &room_a.edge_tiles {
        for &tile_b in &room_b.edge_tiles {
            let distance = tile_a.distance_squared(&tile_b);
            if best.map_or(true, |current| distance < current.distance) {
                *best = Some(Candidate {
                    distance,
                    passage: Passage {
                        room_a: a,
                        room_b: b,
                        tile_a,
                        tile_b,
                    },
                });
            }
        }
    }
}

/// Marks `start` and every room reachable from it as accessible from the main room.
fn mark_accessible(rooms: &mut [Room], start: usize) {
    if rooms[start].is_accessible_from_main_room {
        return;
    }
    rooms[start].is_accessible_from_main_room = true;

    let mut queue = VecDeque::from([start]);
    while let Some(index) = queue.pop_front() {
        let neighbours: Vec<usize> = rooms[index].connected_rooms.iter().copied().collect();
        for next in neighbours {
            if !rooms[next].is_accessible_from_main_room {
                rooms[next].is_accessible_from_main_room = true;
                queue.push_back(next);
            }
        }
    }
}

/// Records a symmetric connection between two rooms and propagates accessibility.
pub fn connect_rooms(rooms: &mut [Room], a: usize, b: usize) {
    if rooms[a].is_accessible_from_main_room {
        mark_accessible(rooms, b);
    } else if rooms[b].is_accessible_from_main_room {
        mark_accessible(rooms, a);
    }
    rooms[a].connected_rooms.insert(b);
    rooms[b].connected_rooms.insert(a);
}

fn create_connection(rooms: &mut [Room], grid: &mut Grid, passage: Passage, radius: i32) {
    connect_rooms(rooms, passage.room_a, passage.room_b);
    trace!(
        "Carving passage {} -> {} from ({}, {}) to ({}, {})",
        passage.room_a,
        passage.room_b,
        passage.tile_a.x,
        passage.tile_a.y,
        passage.tile_b.x,
        passage.tile_b.y
    );
    carve_passage(grid, passage.tile_a, passage.tile_b, radius);
}

/// Connects every room that has no connection yet to its nearest neighbour.
fn connect_isolated_rooms(rooms: &mut [Room], grid: &mut Grid, radius: i32, passages: &mut Vec<Passage>) {
    for a in 0..rooms.len() {
        if !rooms[a].connected_rooms.is_empty() {
            continue;
        }

        let mut best = None;
        for b in 0..rooms.len() {
            if a == b || rooms[a].is_connected(b) {
                continue;
            }
            consider_pair(&rooms[a], &rooms[b], a, b, &mut best);
        }

        if let Some(candidate) = best {
            create_connection(rooms, grid, candidate.passage, radius);
            passages.push(candidate.passage);
        }
    }
}

/// Joins the single closest (inaccessible, accessible) pair until every room
/// is reachable from the main room.
fn force_main_room_access(rooms: &mut [Room], grid: &mut Grid, radius: i32, passages: &mut Vec<Passage>) -> Result<()> {
    loop {
        let (accessible, inaccessible): (Vec<usize>, Vec<usize>) =
            (0..rooms.len()).partition(|&i| rooms[i].is_accessible_from_main_room);
        if inaccessible.is_empty() {
            return Ok(());
        }

        let mut best = None;
        for &a in &inaccessible {
            for &b in &accessible {
                if rooms[a].is_connected(b) {
                    continue;
                }
                consider_pair(&rooms[a], &rooms[b], a, b, &mut best);
            }
        }

        let candidate = best.ok_or(CaveError::NoConnectionFound {
            inaccessible: inaccessible.len(),
        })?;
        create_connection(rooms, grid, candidate.passage, radius);
        passages.push(candidate.passage);
    }
}

/// Builds the room graph and carves a passage for every connection made.
///
/// `rooms[0]` must already be the accessible main room. Returns the passages
/// in the order they were carved.
pub fn connect_closest_rooms(rooms: &mut [Room], grid: &mut Grid, passage_radius: i32) -> Result<Vec<Passage>> {
    let mut passages = Vec::new();

    connect_isolated_rooms(rooms, grid, passage_radius, &mut passages);
    let nearest = passages.len();
    force_main_room_access(rooms, grid, passage_radius, &mut passages)?;

    debug!(
        "Connected {} room(s) with {} passage(s) ({} nearest-neighbour, {} for main-room access)",
        rooms.len(),
        passages.len(),
        nearest,
        passages.len() - nearest
    );

    Ok(passages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::regions::extract_regions;
    use crate::generator::rooms::filter_regions;
    use crate::map::Tile;

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows[0].len(), rows.len(), Tile::Floor);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    grid.set(x as i32, y as i32, Tile::Wall);
                }
            }
        }
        grid
    }

    fn is_graph_connected(rooms: &[Room]) -> bool {
        let mut seen = vec![false; rooms.len()];
        let mut queue = VecDeque::from([0]);
        seen[0] = true;
        while let Some(i) = queue.pop_front() {
            for &n in &rooms[i].connected_rooms {
                if !seen[n] {
                    seen[n] = true;
                    queue.push_back(n);
                }
            }
        }
        seen.into_iter().all(|s| s)
    }

    #[test]
    fn test_connect_rooms_is_symmetric_and_propagates() {
        let mut grid = grid_from(&["#########", "#.#.#.#.#", "#########"]);
        let mut rooms = filter_regions(&mut grid, 0, 1).unwrap().rooms;
        assert_eq!(rooms.len(), 4);

        connect_rooms(&mut rooms, 2, 3);
        assert!(rooms[2].is_connected(3));
        assert!(rooms[3].is_connected(2));
        assert!(!rooms[2].is_accessible_from_main_room);

        connect_rooms(&mut rooms, 0, 2);
        assert!(rooms[2].is_accessible_from_main_room);
        assert!(rooms[3].is_accessible_from_main_room);
        assert!(!rooms[1].is_accessible_from_main_room);
    }

    #[test]
    fn test_four_rooms_in_a_row() {
        let mut grid = grid_from(&[
            "#################",
            "#...#.....#..#..#",
            "#...#.....#..#..#",
            "#...#.....#..#..#",
            "#################",
        ]);
        let mut rooms = filter_regions(&mut grid, 0, 6).unwrap().rooms;
        assert_eq!(rooms.len(), 4);

        let passages = connect_closest_rooms(&mut rooms, &mut grid, 0).unwrap();
        assert!(!passages.is_empty());
        assert!(is_graph_connected(&rooms));
        assert!(rooms.iter().all(|r| r.is_accessible_from_main_room));
        assert_eq!(rooms.iter().filter(|r| r.is_main_room).count(), 1);

        // After carving, the floor is one region.
        assert_eq!(extract_regions(&grid, Tile::Floor).len(), 1);
    }

    #[test]
    fn test_nearest_pair_is_carved() {
        let mut grid = grid_from(&[
            "############",
            "#...##...###",
            "#...##...###",
            "############",
        ]);
        let mut rooms = filter_regions(&mut grid, 0, 6).unwrap().rooms;
        let passages = connect_closest_rooms(&mut rooms, &mut grid, 0).unwrap();
        assert_eq!(passages.len(), 1);
        let p = passages[0];
        assert_eq!(p.tile_a.distance_squared(&p.tile_b), 9);
        assert_eq!(p.tile_a.y, p.tile_b.y);
    }

    #[test]
    fn test_first_found_wins_ties() {
        let grid = grid_from(&[
            "#######",
            "#.#.#.#",
            "#######",
        ]);
        let rooms: Vec<Room> = extract_regions(&grid, Tile::Floor)
            .into_iter()
            .map(|r| Room::new(r, &grid))
            .collect();
        // Rooms 0 and 2 are both at distance 4 from room 1.
        let mut best = None;
        consider_pair(&rooms[1], &rooms[0], 1, 0, &mut best);
        consider_pair(&rooms[1], &rooms[2], 1, 2, &mut best);
        assert_eq!(best.map(|c| c.passage.room_b), Some(0));
    }

    #[test]
    fn test_single_room_needs_no_passage() {
        let mut grid = grid_from(&["#####", "#...#", "#...#", "#####"]);
        let mut rooms = filter_regions(&mut grid, 0, 1).unwrap().rooms;
        let passages = connect_closest_rooms(&mut rooms, &mut grid, 1).unwrap();
        assert!(passages.is_empty());
        assert!(rooms[0].is_accessible_from_main_room);
    }

    #[test]
    fn test_room_without_edge_tiles_is_an_error() {
        let mut grid = grid_from(&["#####", "#.#.#", "#####"]);
        let mut rooms = filter_regions(&mut grid, 0, 1).unwrap().rooms;
        rooms[1].edge_tiles.clear();
        match connect_closest_rooms(&mut rooms, &mut grid, 0) {
            Err(CaveError::NoConnectionFound { inaccessible }) => assert_eq!(inaccessible, 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
