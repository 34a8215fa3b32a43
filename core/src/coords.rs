//! Grid positions, displacements, and extents.

use itertools::iproduct;
use std::fmt;
use std::ops::{Add, Sub};

/// Width and height of a field.
///
/// A `Size` is a plain value; it is validated (see `is_valid()`) when a
/// `Field` or `Game` is constructed from it.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Size {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}
impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
impl From<(usize, usize)> for Size {
    fn from((width, height): (usize, usize)) -> Self {
        Self { width, height }
    }
}
impl Size {
    /// Constructs a new size.
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Returns true if both dimensions are nonzero, every cell is addressable
    /// by a `Coordinate`, and the number of cells fits in a `usize`.
    pub fn is_valid(self) -> bool {
        self.width > 0
            && self.height > 0
            && self.width <= isize::MAX as usize
            && self.height <= isize::MAX as usize
            && self.width.checked_mul(self.height).is_some()
    }
    /// Returns the number of cells in a field of this size.
    pub fn area(self) -> usize {
        self.width * self.height
    }
    /// Returns true if `coord` lies within `[0, width) x [0, height)`.
    pub fn contains(self, coord: Coordinate) -> bool {
        0 <= coord.x
            && 0 <= coord.y
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Returns an iterator over every coordinate inside the size, in
    /// column-major order (all of column 0, then all of column 1, etc.).
    pub fn coords(self) -> impl Iterator<Item = Coordinate> {
        iproduct!(0..self.width as isize, 0..self.height as isize).map(|(x, y)| Coordinate { x, y })
    }

    /// Returns the flat index of an in-bounds coordinate.
    pub(crate) fn flatten_idx(self, coord: Coordinate) -> usize {
        debug_assert!(self.contains(coord));
        coord.x as usize * self.height + coord.y as usize
    }
    /// Converts a flat index back into a coordinate.
    pub(crate) fn unflatten_idx(self, idx: usize) -> Coordinate {
        debug_assert!(idx < self.area());
        Coordinate {
            x: (idx / self.height) as isize,
            y: (idx % self.height) as isize,
        }
    }
}

/// Absolute position of a cell.
///
/// Coordinates have no inherent bounds; whether one is valid depends on the
/// size of the field it is used with.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Column.
    pub x: isize,
    /// Row. Row 0 is the top of the field.
    pub y: isize,
}
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
impl From<(isize, isize)> for Coordinate {
    fn from((x, y): (isize, isize)) -> Self {
        Self { x, y }
    }
}
impl Coordinate {
    /// The top-left corner of every field.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Constructs a new coordinate.
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }
}

// Saturating so that a huge offset resolves to an out-of-bounds coordinate
// instead of overflowing.
impl Add<Offset> for Coordinate {
    type Output = Coordinate;
    fn add(self, offset: Offset) -> Coordinate {
        Coordinate {
            x: self.x.saturating_add(offset.dx),
            y: self.y.saturating_add(offset.dy),
        }
    }
}
impl Sub<Coordinate> for Coordinate {
    type Output = Offset;
    fn sub(self, other: Coordinate) -> Offset {
        Offset {
            dx: self.x.saturating_sub(other.x),
            dy: self.y.saturating_sub(other.y),
        }
    }
}

/// Relative displacement from one cell to another.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Horizontal displacement; positive is to the right.
    pub dx: isize,
    /// Vertical displacement; positive is downward.
    pub dy: isize,
}
impl From<(isize, isize)> for Offset {
    fn from((dx, dy): (isize, isize)) -> Self {
        Self { dx, dy }
    }
}
impl Offset {
    /// The eight cells of the range-1 Moore neighborhood.
    pub const MOORE: [Offset; 8] = [
        Offset::new(-1, -1),
        Offset::new(0, -1),
        Offset::new(1, -1),
        Offset::new(-1, 0),
        Offset::new(1, 0),
        Offset::new(-1, 1),
        Offset::new(0, 1),
        Offset::new(1, 1),
    ];
    /// The four orthogonally adjacent cells.
    pub const VON_NEUMANN: [Offset; 4] = [
        Offset::new(0, -1),
        Offset::new(-1, 0),
        Offset::new(1, 0),
        Offset::new(0, 1),
    ];

    /// Constructs a new offset.
    pub const fn new(dx: isize, dy: isize) -> Self {
        Self { dx, dy }
    }

    /// Returns true if the offset is `(0, 0)`.
    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Returns every offset of the Moore neighborhood with the given radius,
    /// excluding the center.
    pub fn moore(radius: usize) -> impl Iterator<Item = Offset> {
        let r = radius as isize;
        iproduct!(-r..=r, -r..=r)
            .map(|(dx, dy)| Offset { dx, dy })
            .filter(|offset| !offset.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_contains() {
        let size = Size::new(3, 2);
        assert!(size.contains(Coordinate::new(0, 0)));
        assert!(size.contains(Coordinate::new(2, 1)));
        assert!(!size.contains(Coordinate::new(3, 0)));
        assert!(!size.contains(Coordinate::new(0, 2)));
        assert!(!size.contains(Coordinate::new(-1, 0)));
        assert!(!size.contains(Coordinate::new(0, -1)));
    }

    #[test]
    fn test_size_is_valid() {
        assert!(Size::new(1, 1).is_valid());
        assert!(Size::new(isize::MAX as usize, 1).is_valid());
        assert!(!Size::new(0, 1).is_valid());
        assert!(!Size::new(1, 0).is_valid());
        assert!(!Size::new(isize::MAX as usize + 1, 1).is_valid());
        assert!(!Size::new(1, usize::MAX).is_valid());
        assert!(!Size::new(usize::MAX / 2, 3).is_valid());
    }

    #[test]
    fn test_flatten_idx() {
        let size = Size::new(4, 3);
        for (i, coord) in size.coords().enumerate() {
            assert_eq!(i, size.flatten_idx(coord));
            assert_eq!(coord, size.unflatten_idx(i));
        }
        assert_eq!(12, size.coords().count());
    }

    #[test]
    fn test_offset_add() {
        let c = Coordinate::new(1, 1) + Offset::new(-1, 2);
        assert_eq!(Coordinate::new(0, 3), c);
        assert_eq!(Offset::new(-1, 2), c - Coordinate::new(1, 1));

        let far = Coordinate::new(isize::MAX, 0) + Offset::new(1, 0);
        assert_eq!(isize::MAX, far.x);
    }

    #[test]
    fn test_moore_neighborhood() {
        let r1: Vec<Offset> = Offset::moore(1).collect();
        assert_eq!(8, r1.len());
        for offset in &Offset::MOORE {
            assert!(r1.contains(offset));
        }
        assert_eq!(24, Offset::moore(2).count());
        assert_eq!(0, Offset::moore(0).count());
    }
}
