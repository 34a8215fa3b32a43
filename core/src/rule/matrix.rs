use rand::Rng;

use super::{Neighbors, TransitionRule};
use crate::coords::{Coordinate, Offset};

/// Cell of the "falling streams of words" simulation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MatrixCell {
    /// Length of the stream passing through this cell, or 0 if there is none.
    pub words_len: u32,
    /// Position within the stream, starting at 1 for the head.
    pub words_count: u32,
    /// Number of generations since a stream last started in this column. Only
    /// meaningful in the top row.
    pub column_age: u32,
}
impl MatrixCell {
    /// Returns true if a stream is passing through this cell.
    pub fn is_active(self) -> bool {
        self.words_len != 0
    }
    /// Returns true if this cell holds the leading word of a stream.
    pub fn is_head(self) -> bool {
        self.is_active() && self.words_count == 1
    }
}

/// Rule for streams of words falling down the field.
///
/// Streams start at random in the top row and every other row copies the cell
/// directly above it from the previous generation, so each stream moves down
/// one row per generation. A column only starts a new stream once its previous
/// stream has fully left the top row and `column_cooldown` generations have
/// passed.
///
/// The number of concurrent streams is bounded by counting the active cells in
/// the top row of the previous generation, so several columns may start a
/// stream in the same generation and briefly exceed `max_streams`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MatrixRain {
    /// A stream starts in an idle column with probability `1 / spawn_one_in`
    /// per generation.
    pub spawn_one_in: u32,
    /// Minimum length of a stream.
    pub min_len: u32,
    /// Stream length is chosen uniformly from `min_len..min_len + len_spread`.
    pub len_spread: u32,
    /// Generations a column stays idle after starting a stream.
    pub column_cooldown: u32,
    /// Maximum number of streams in the top row.
    pub max_streams: usize,
}
impl Default for MatrixRain {
    fn default() -> Self {
        Self {
            spawn_one_in: 50,
            min_len: 30,
            len_spread: 40,
            column_cooldown: 50,
            max_streams: 50,
        }
    }
}

impl MatrixRain {
    /// Returns the value every cell should start with so that columns are
    /// immediately allowed to start a stream.
    pub fn initial_cell(&self) -> MatrixCell {
        MatrixCell {
            column_age: self.column_cooldown,
            ..MatrixCell::default()
        }
    }

    /// Returns the number of streams in the top row of the generation that
    /// `nbhd` is bound to.
    ///
    /// This is recomputed for every idle top-row cell, so a generation costs
    /// O(width²) in the worst case. The rule keeps no state between cells and
    /// generations, which lets every cell be computed independently.
    fn active_streams(nbhd: &Neighbors<'_, MatrixCell>) -> usize {
        let origin = nbhd.origin();
        let width = nbhd.size().width as isize;
        let top_row = (0..width).map(|x| Offset::new(x - origin.x, -origin.y));
        nbhd.count(top_row, |cell| cell.is_active())
    }

    fn next_top_row(&self, cell: MatrixCell, nbhd: &Neighbors<'_, MatrixCell>) -> MatrixCell {
        let mut next = cell;
        if cell.words_count == 0 && cell.column_age >= self.column_cooldown {
            if Self::active_streams(nbhd) < self.max_streams {
                let mut rng = rand::thread_rng();
                if rng.gen_range(0..self.spawn_one_in.max(1)) == 0 {
                    next.words_len = self
                        .min_len
                        .max(1)
                        .saturating_add(rng.gen_range(0..self.len_spread.max(1)));
                    next.words_count = 1;
                    next.column_age = 0;
                }
            }
        } else if cell.words_count < cell.words_len {
            next.words_count += 1;
        } else if cell.words_count == cell.words_len && cell.words_count != 0 {
            next.words_len = 0;
            next.words_count = 0;
        }
        next.column_age = next.column_age.saturating_add(1);
        next
    }
}

impl TransitionRule<MatrixCell> for MatrixRain {
    fn next(&self, coord: Coordinate, &cell: &MatrixCell, nbhd: &Neighbors<'_, MatrixCell>) -> MatrixCell {
        if coord.y == 0 {
            self.next_top_row(cell, nbhd)
        } else {
            nbhd.get(Offset::new(0, -1)).copied().unwrap_or_default()
        }
    }
}
