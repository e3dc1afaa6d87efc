//! Compass directions for ray walks.

use std::fmt;

use super::Square;

/// Classification of a compass direction.
///
/// Rooks slide along orthogonal directions, bishops along diagonal ones,
/// queens along both.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    Orthogonal,
    Diagonal,
}

/// One of the 8 compass directions, as a (row, col) unit step.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Direction {
    pub(crate) dr: isize,
    pub(crate) dc: isize,
}

impl Direction {
    pub const NW: Direction = Direction { dr: -1, dc: -1 };
    pub const N: Direction = Direction { dr: -1, dc: 0 };
    pub const NE: Direction = Direction { dr: -1, dc: 1 };
    pub const W: Direction = Direction { dr: 0, dc: -1 };
    pub const E: Direction = Direction { dr: 0, dc: 1 };
    pub const SW: Direction = Direction { dr: 1, dc: -1 };
    pub const S: Direction = Direction { dr: 1, dc: 0 };
    pub const SE: Direction = Direction { dr: 1, dc: 1 };

    /// All 8 directions in row-major order. Attacker enumeration visits
    /// them in this order, which fixes which attacker a quick check finds
    /// first.
    pub const ALL: [Direction; 8] = [
        Direction::NW,
        Direction::N,
        Direction::NE,
        Direction::W,
        Direction::E,
        Direction::SW,
        Direction::S,
        Direction::SE,
    ];

    /// Whether this direction runs along a rank/file or a diagonal
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        if self.dr == 0 || self.dc == 0 {
            Axis::Orthogonal
        } else {
            Axis::Diagonal
        }
    }

    /// The unit step between two colinear squares, if any
    #[must_use]
    pub fn between(origin: Square, destination: Square) -> Option<Direction> {
        if origin == destination || !origin.colinear(destination) {
            return None;
        }
        let dr = (destination.row() as isize - origin.row() as isize).signum();
        let dc = (destination.col() as isize - origin.col() as isize).signum();
        Some(Direction { dr, dc })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match (self.dr, self.dc) {
            (-1, -1) => "NW",
            (-1, 0) => "N",
            (-1, 1) => "NE",
            (0, -1) => "W",
            (0, 1) => "E",
            (1, -1) => "SW",
            (1, 0) => "S",
            (1, 1) => "SE",
            _ => "?",
        };
        write!(f, "{name}")
    }
}
