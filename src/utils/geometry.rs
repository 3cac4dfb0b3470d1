// src/utils/geometry.rs
use crate::map::Coord;

/// A straight segment between two tile positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLine {
    pub start: Coord,
    pub end: Coord,
}

impl GridLine {
    pub fn new(start: Coord, end: Coord) -> Self {
        Self { start, end }
    }

    /// Number of steps along the dominant axis.
    pub fn length(&self) -> i32 {
        let dx = (self.end.x - self.start.x).abs();
        let dy = (self.end.y - self.start.y).abs();
        dx.max(dy)
    }

    /// Rasterizes the segment with an integer error accumulator.
    ///
    /// Walks the axis with the larger delta one cell at a time and steps the
    /// minor axis whenever the accumulated minor delta reaches the major extent.
    /// Both endpoints are included and consecutive cells are 8-connected.
    pub fn cells(&self) -> Vec<Coord> {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;

        let mut step = dx.signum();
        let mut gradient_step = dy.signum();
        let mut longest = dx.abs();
        let mut shortest = dy.abs();

        let inverted = longest < shortest;
        if inverted {
            std::mem::swap(&mut longest, &mut shortest);
            std::mem::swap(&mut step, &mut gradient_step);
        }

        let mut x = self.start.x;
        let mut y = self.start.y;
        let mut accumulator = longest / 2;
        let mut cells = Vec::with_capacity(self.length() as usize + 1);

        for _ in 0..longest {
            cells.push(Coord::new(x, y));
            if inverted {
                y += step;
            } else {
                x += step;
            }

            accumulator += shortest;
            if accumulator >= longest {
                if inverted {
                    x += gradient_step;
                } else {
                    y += gradient_step;
                }
                accumulator -= longest;
            }
        }
        cells.push(Coord::new(x, y));

        cells
    }
}
