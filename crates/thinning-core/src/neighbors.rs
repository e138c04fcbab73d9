//! 8-neighborhood classification shared by both thinning engines.
//!
//! The ring is ordered clockwise from north:
//!
//! ```text
//!   P9 P2 P3        NW N  NE
//!   P8 P1 P4   =    W  .  E
//!   P7 P6 P5        SW S  SE
//! ```
//!
//! `P1` is the pixel itself; ring index 0 holds `P2` (north).

use crate::consts::FOREGROUND;
use crate::grid::Grid;

/// Compass position of a neighbor relative to the center pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in ring order (clockwise from north).
    pub const RING: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// `(d_row, d_col)` offset of this neighbor.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Position of this direction in the neighbor ring.
    pub fn ring_index(self) -> usize {
        self as usize
    }
}

/// Snapshot of one pixel's eight neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    ring: [u8; 8],
}

impl Neighborhood {
    /// Read the neighbors of `(row, col)`. Positions outside the grid are background.
    pub fn classify(grid: &Grid, row: usize, col: usize) -> Self {
        let (row, col) = (row as isize, col as isize);
        let mut ring = [0u8; 8];
        for (slot, dir) in ring.iter_mut().zip(Direction::RING) {
            let (dr, dc) = dir.offset();
            *slot = u8::from(grid.get(row + dr, col + dc) == FOREGROUND);
        }
        Self { ring }
    }

    /// Build directly from a ring (index 0 = north, clockwise).
    pub fn from_ring(ring: [u8; 8]) -> Self {
        Self {
            ring: ring.map(|v| u8::from(v != 0)),
        }
    }

    pub fn ring(&self) -> [u8; 8] {
        self.ring
    }

    pub fn get(&self, dir: Direction) -> u8 {
        self.ring[dir.ring_index()]
    }

    /// `B`: number of foreground neighbors.
    pub fn foreground_count(&self) -> u8 {
        self.ring.iter().sum()
    }

    /// `A`: number of 0 -> 1 transitions walking the ring once around.
    pub fn transitions(&self) -> u8 {
        (0..8)
            .filter(|&i| self.ring[i] == 0 && self.ring[(i + 1) % 8] == 1)
            .count() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_order_starts_north_and_runs_clockwise() {
        // Corners only: NW, NE, SE, SW.
        let grid = Grid::from_vec(3, 3, vec![1, 0, 1, 0, 0, 0, 1, 0, 1]).unwrap();
        let n = Neighborhood::classify(&grid, 1, 1);
        assert_eq!(n.ring(), [0, 1, 0, 1, 0, 1, 0, 1]);
        assert_eq!(n.get(Direction::NorthWest), 1);
        assert_eq!(n.get(Direction::North), 0);
    }

    #[test]
    fn transitions_wrap_around_the_ring() {
        // W -> NW is the only 0 -> 1 step.
        let n = Neighborhood::from_ring([0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(n.transitions(), 1);

        // NW -> N wraps around.
        let n = Neighborhood::from_ring([1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(n.transitions(), 1);

        let n = Neighborhood::from_ring([1, 0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(n.transitions(), 4);
        assert_eq!(n.foreground_count(), 4);
    }

    #[test]
    fn from_ring_normalizes_values() {
        let n = Neighborhood::from_ring([255, 0, 7, 0, 0, 0, 0, 0]);
        assert_eq!(n.ring(), [1, 0, 1, 0, 0, 0, 0, 0]);
    }
}
