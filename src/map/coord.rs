// src/map/coord.rs
use serde::{Deserialize, Serialize};

/// An integer tile position. Used both as a grid index and as a tile identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// Squared Euclidean distance between two tile centers.
    pub fn distance_squared(&self, other: &Coord) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    /// The four orthogonal neighbours: left, down, up, right.
    pub fn neighbours4(&self) -> [Coord; 4] {
        [
            Coord::new(self.x - 1, self.y),
            Coord::new(self.x, self.y - 1),
            Coord::new(self.x, self.y + 1),
            Coord::new(self.x + 1, self.y),
        ]
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Coord {
        Coord::new(self.x + dx, self.y + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_squared() {
        let a = Coord::new(1, 2);
        let b = Coord::new(4, 6);
        assert_eq!(a.distance_squared(&b), 25);
        assert_eq!(b.distance_squared(&a), 25);
        assert_eq!(a.distance_squared(&a), 0);
    }

    #[test]
    fn test_neighbours_are_orthogonal() {
        let c = Coord::new(3, 3);
        for n in c.neighbours4() {
            assert_eq!(c.distance_squared(&n), 1);
        }
    }
}
