//! Generation-advance algorithm.
//!
//! Every cell of the next generation is computed from the previous generation
//! alone, into a freshly allocated buffer. Because cells of one generation never
//! depend on each other, they can be computed in any order or in parallel and
//! the result is the same.

use rayon::prelude::*;

use crate::field::Field;
use crate::rule::{Neighbors, TransitionRule};

/// How the cells of one generation are computed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parallelism {
    /// Compute every cell on the calling thread.
    Serial,
    /// Split the field across the global rayon thread pool.
    Rayon,
}
impl Default for Parallelism {
    fn default() -> Self {
        Self::Rayon
    }
}

/// Returns the generation after `prev` according to `rule`.
///
/// `prev` is never modified; the caller decides when to publish the result.
pub fn next_generation<T, R>(prev: &Field<T>, rule: &R, parallelism: Parallelism) -> Field<T>
where
    T: Send + Sync,
    R: ?Sized + TransitionRule<T>,
{
    let size = prev.size();
    let cell_at = |(idx, cell): (usize, &T)| {
        let coord = size.unflatten_idx(idx);
        rule.next(coord, cell, &Neighbors::new(prev, coord))
    };
    let cells: Vec<T> = match parallelism {
        Parallelism::Serial => prev.flat().iter().enumerate().map(cell_at).collect(),
        Parallelism::Rayon => prev.flat().par_iter().enumerate().map(cell_at).collect(),
    };
    Field::from_flat(size, cells)
}
