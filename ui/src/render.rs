//! Text rendering of generation snapshots.

use cellgrid_core::prelude::*;
use itertools::Itertools;

use crate::config::DisplayConfig;

/// Something that can be drawn as a single character.
pub trait Glyph {
    fn glyph(&self, display: &DisplayConfig) -> char;
}

impl Glyph for bool {
    fn glyph(&self, display: &DisplayConfig) -> char {
        if *self {
            display.live_glyph
        } else {
            display.dead_glyph
        }
    }
}

impl Glyph for MatrixCell {
    fn glyph(&self, display: &DisplayConfig) -> char {
        if !self.is_active() {
            return ' ';
        }
        let glyphs = &display.stream_glyphs;
        if glyphs.is_empty() {
            return '*';
        }
        if self.is_head() {
            return glyphs[0];
        }
        // Fade from the second glyph to the last one along the stream.
        let tail = &glyphs[1.min(glyphs.len() - 1)..];
        let fraction = self.words_count.saturating_sub(1) as f64 / self.words_len as f64;
        tail[((fraction * tail.len() as f64) as usize).min(tail.len() - 1)]
    }
}

/// Renders one generation, with a header line containing the generation
/// number.
pub fn render_generation<T: Glyph>(generation: &Generation<T>, display: &DisplayConfig) -> String {
    let field = &generation.field;
    let size = field.size();
    let rows = (0..size.height as isize).map(|y| {
        (0..size.width as isize)
            .map(|x| field[Coordinate::new(x, y)].glyph(display))
            .collect::<String>()
    });
    format!("generation {}\n{}\n", generation.number, rows.format("\n"))
}
