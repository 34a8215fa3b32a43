//! Everything related to the description of a cellular automaton rule,
//! primarily the transition function.

use std::fmt;

use crate::coords::{Coordinate, Offset, Size};
use crate::errors::OutOfBounds;
use crate::field::Field;

mod life;
mod matrix;

pub use life::{MooreTotalistic2D, LIFE};
pub use matrix::{MatrixCell, MatrixRain};

/// A cellular automaton transition rule.
///
/// The rule is invoked once per cell per generation. It receives the cell's
/// coordinate, the cell's value in the previous generation, and a resolver for
/// neighbors in that same previous generation, and returns the cell's next
/// value.
///
/// Rules must not keep state of their own between invocations; anything that
/// has to persist from one generation to the next belongs in the cell type.
///
/// This trait is implemented for any `Fn(Coordinate, &T, &Neighbors<'_, T>) ->
/// T` closure that is `Send + Sync`. See also `from_fn()`.
pub trait TransitionRule<T>: Send + Sync {
    /// Computes the next value of the cell at `coord`.
    fn next(&self, coord: Coordinate, cell: &T, neighbors: &Neighbors<'_, T>) -> T;
}

impl<T, F> TransitionRule<T> for F
where
    F: Send + Sync + Fn(Coordinate, &T, &Neighbors<'_, T>) -> T,
{
    fn next(&self, coord: Coordinate, cell: &T, neighbors: &Neighbors<'_, T>) -> T {
        self(coord, cell, neighbors)
    }
}

/// Helps type inference for closures used as transition rules.
///
/// ```
/// use cellgrid_core::prelude::*;
///
/// // Every cell becomes the number of live cells orthogonally adjacent to it.
/// let rule = rule::from_fn(|_coord, _cell: &u8, nbhd| {
///     nbhd.count(Offset::VON_NEUMANN.iter().copied(), |&c| c != 0) as u8
/// });
/// let game = Game::new(Size::new(3, 3), 1_u8, rule).unwrap();
/// game.advance();
/// assert_eq!(Ok(4), game.get_cell(Coordinate::new(1, 1)));
/// assert_eq!(Ok(2), game.get_cell(Coordinate::new(0, 0)));
/// ```
pub fn from_fn<T, F>(f: F) -> F
where
    F: Send + Sync + Fn(Coordinate, &T, &Neighbors<'_, T>) -> T,
{
    f
}

/// Something that can turn a relative offset into a cell value.
pub trait ResolveNeighbor<T> {
    /// Returns the cell at the given offset, or an error if that cell is
    /// outside the field.
    fn resolve(&self, offset: Offset) -> Result<&T, OutOfBounds>;
}

/// Neighbor resolver bound to one cell of a frozen field.
///
/// During an advance, this always refers to the previous generation, so a rule
/// never observes values that were computed earlier in the same advance.
pub struct Neighbors<'a, T> {
    field: &'a Field<T>,
    origin: Coordinate,
}
impl<T> fmt::Debug for Neighbors<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Neighbors(origin = {}, size = {})", self.origin, self.field.size())
    }
}
impl<T> Clone for Neighbors<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Neighbors<'_, T> {}

impl<'a, T> Neighbors<'a, T> {
    /// Binds a resolver to `origin` within `field`.
    pub fn new(field: &'a Field<T>, origin: Coordinate) -> Self {
        Self { field, origin }
    }

    /// Returns the coordinate that offsets are relative to.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }
    /// Returns the size of the underlying field.
    pub fn size(&self) -> Size {
        self.field.size()
    }

    /// Returns the cell at `origin + offset`.
    pub fn get(&self, offset: impl Into<Offset>) -> Result<&'a T, OutOfBounds> {
        self.field.resolve_neighbor(self.origin, offset.into())
    }
    /// Returns the cell at `origin + offset`, or `default` if that cell is
    /// outside the field.
    pub fn get_or<'b>(&self, offset: impl Into<Offset>, default: &'b T) -> &'b T
    where
        'a: 'b,
    {
        self.get(offset).unwrap_or(default)
    }

    /// Returns the number of cells at the given offsets that are inside the
    /// field and satisfy `predicate`.
    pub fn count(
        &self,
        offsets: impl IntoIterator<Item = Offset>,
        mut predicate: impl FnMut(&T) -> bool,
    ) -> usize {
        offsets
            .into_iter()
            .filter_map(|offset| self.get(offset).ok())
            .filter(|cell| predicate(*cell))
            .count()
    }
}

impl<T> ResolveNeighbor<T> for Neighbors<'_, T> {
    fn resolve(&self, offset: Offset) -> Result<&T, OutOfBounds> {
        self.get(offset)
    }
}

/// A basic rule that never changes any cell states.
#[derive(Debug, Default, Copy, Clone)]
pub struct DummyRule;
impl<T: Clone> TransitionRule<T> for DummyRule {
    fn next(&self, _coord: Coordinate, cell: &T, _neighbors: &Neighbors<'_, T>) -> T {
        cell.clone()
    }
}
