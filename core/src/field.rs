//! Fixed-size 2D storage for one generation of cells.

use std::fmt;
use std::ops::Index;

use crate::coords::{Coordinate, Offset, Size};
use crate::errors::{InvalidSize, OutOfBounds};

/// Rectangular grid of cells of type `T`.
///
/// The size of a field is fixed when it is created. Every coordinate-addressed
/// accessor checks bounds and leaves the field untouched when it fails.
#[derive(Clone, PartialEq, Eq)]
pub struct Field<T> {
    size: Size,
    /// Cells in column-major order; see `Size::flatten_idx()`.
    cells: Box<[T]>,
}

impl<T: fmt::Debug> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("size", &self.size)
            .field("columns", &self.cells.chunks(self.size.height).collect::<Vec<_>>())
            .finish()
    }
}

impl<T: Clone> Field<T> {
    /// Creates a field with every cell set to `initial`.
    pub fn new(size: Size, initial: T) -> Result<Self, InvalidSize> {
        Self::from_fn(size, |_| initial.clone())
    }

    /// Returns the field as a vector of columns, so that the cell at `(x, y)`
    /// is at `columns[x][y]`.
    pub fn columns(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.size.height)
            .map(<[T]>::to_vec)
            .collect()
    }
}

impl<T> Field<T> {
    /// Creates a field by evaluating `generator` at each coordinate.
    pub fn from_fn(size: Size, generator: impl FnMut(Coordinate) -> T) -> Result<Self, InvalidSize> {
        if !size.is_valid() {
            return Err(InvalidSize::from(size));
        }
        let cells = size.coords().map(generator).collect();
        Ok(Self { size, cells })
    }

    /// Creates a field from cells that are already in flat order.
    ///
    /// # Panics
    ///
    /// This function panics if the number of cells does not match `size`.
    pub(crate) fn from_flat(size: Size, cells: Vec<T>) -> Self {
        assert_eq!(size.area(), cells.len(), "Wrong number of cells for field");
        Self {
            size,
            cells: cells.into_boxed_slice(),
        }
    }

    /// Returns the width and height of the field.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }
    /// Returns true if `coord` lies inside the field.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.size.contains(coord)
    }

    /// Returns the cell at `coord`.
    #[inline]
    pub fn get(&self, coord: Coordinate) -> Result<&T, OutOfBounds> {
        let idx = self.idx(coord)?;
        Ok(&self.cells[idx])
    }
    /// Returns a mutable reference to the cell at `coord`.
    #[inline]
    pub fn get_mut(&mut self, coord: Coordinate) -> Result<&mut T, OutOfBounds> {
        let idx = self.idx(coord)?;
        Ok(&mut self.cells[idx])
    }
    /// Overwrites the cell at `coord`.
    #[inline]
    pub fn set(&mut self, coord: Coordinate, value: T) -> Result<(), OutOfBounds> {
        *self.get_mut(coord)? = value;
        Ok(())
    }

    /// Returns the cell at `origin + offset`. There is no wraparound: cells
    /// near the edge have fewer neighbors.
    #[inline]
    pub fn resolve_neighbor(&self, origin: Coordinate, offset: Offset) -> Result<&T, OutOfBounds> {
        self.get(origin + offset)
    }

    /// Returns an iterator over all the cells in the field, enumerated by
    /// their coordinates.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (Coordinate, &T)> {
        self.size.coords().zip(&*self.cells)
    }

    /// Creates a new field of the same size by applying a function to every
    /// cell.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Field<U> {
        Field::from_flat(self.size, self.cells.iter().map(f).collect())
    }

    /// Returns the cells in flat (column-major) order.
    pub(crate) fn flat(&self) -> &[T] {
        &self.cells
    }

    fn idx(&self, coord: Coordinate) -> Result<usize, OutOfBounds> {
        if self.size.contains(coord) {
            Ok(self.size.flatten_idx(coord))
        } else {
            Err(OutOfBounds {
                coord,
                size: self.size,
            })
        }
    }
}

impl<T> Index<Coordinate> for Field<T> {
    type Output = T;

    /// # Panics
    ///
    /// This function panics if `coord` is out of bounds. Use `Field::get()` for
    /// a checked alternative.
    #[inline]
    fn index(&self, coord: Coordinate) -> &T {
        match self.get(coord) {
            Ok(cell) => cell,
            Err(e) => panic!("{}", e),
        }
    }
}
