//! Offset coordinates on a "brick wall" hexagonal layout.

use std::fmt;

use crate::direction::HexDir;

/// Position on a hexagonal grid of ⬢ cells, odd rows shifted half a cell
/// to the right:
///
/// ```text
/// (0,0) (1,0) (2,0) (3,0)
///    (0,1) (1,1) (2,1) (3,1)
/// (0,2) (1,2) (2,2) (3,2)
/// ```
///
/// Coordinates are unbounded; wrapping onto a torus is the grid's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexCoord {
    pub x: i32,
    pub y: i32,
}

impl HexCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one step away in direction `dir`.
    ///
    /// Diagonal steps shift x depending on the parity of the row they start
    /// from, since even rows sit half a cell left of odd rows.
    pub const fn step(self, dir: HexDir) -> Self {
        let even = self.y % 2 == 0;
        match dir {
            HexDir::UpLeft => Self::new(if even { self.x - 1 } else { self.x }, self.y - 1),
            HexDir::UpRight => Self::new(if even { self.x } else { self.x + 1 }, self.y - 1),
            HexDir::Right => Self::new(self.x + 1, self.y),
            HexDir::DownRight => Self::new(if even { self.x } else { self.x + 1 }, self.y + 1),
            HexDir::DownLeft => Self::new(if even { self.x - 1 } else { self.x }, self.y + 1),
            HexDir::Left => Self::new(self.x - 1, self.y),
        }
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_from_an_even_row() {
        let coord = HexCoord::new(2, 2);
        assert_eq!(coord.step(HexDir::UpLeft), HexCoord::new(1, 1));
        assert_eq!(coord.step(HexDir::UpRight), HexCoord::new(2, 1));
        assert_eq!(coord.step(HexDir::Right), HexCoord::new(3, 2));
        assert_eq!(coord.step(HexDir::DownRight), HexCoord::new(2, 3));
        assert_eq!(coord.step(HexDir::DownLeft), HexCoord::new(1, 3));
        assert_eq!(coord.step(HexDir::Left), HexCoord::new(1, 2));
    }

    #[test]
    fn steps_from_an_odd_row() {
        let coord = HexCoord::new(2, 3);
        assert_eq!(coord.step(HexDir::UpLeft), HexCoord::new(2, 2));
        assert_eq!(coord.step(HexDir::UpRight), HexCoord::new(3, 2));
        assert_eq!(coord.step(HexDir::Right), HexCoord::new(3, 3));
        assert_eq!(coord.step(HexDir::DownRight), HexCoord::new(3, 4));
        assert_eq!(coord.step(HexDir::DownLeft), HexCoord::new(2, 4));
        assert_eq!(coord.step(HexDir::Left), HexCoord::new(1, 3));
    }

    #[test]
    fn step_and_back_is_identity() {
        for y in -3..3 {
            for x in -3..3 {
                let coord = HexCoord::new(x, y);
                for dir in HexDir::ALL {
                    assert_eq!(coord.step(dir).step(dir.invert()), coord, "{coord} via {dir:?}");
                }
            }
        }
    }

    #[test]
    fn one_step_in_each_direction_returns_home() {
        for start in [HexCoord::new(5, 4), HexCoord::new(-2, -3)] {
            let mut coord = start;
            for dir in HexDir::ALL {
                coord = coord.step(dir);
            }
            assert_eq!(coord, start);
        }
    }

    #[test]
    fn displays_as_an_angle_pair() {
        assert_eq!(HexCoord::new(3, -4).to_string(), "<3,-4>");
    }
}
