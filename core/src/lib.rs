//! Generic 2D cellular automaton engine.
//!
//! A `Game` owns a fixed-size `Field` of cells of any type, and advances it one
//! generation at a time using a pluggable `TransitionRule`. Each advance reads
//! only from the previous generation and publishes the next one atomically, so
//! a `Game` can be driven from many threads at once.
//!
//! ```
//! use cellgrid_core::prelude::*;
//!
//! let game = Game::new(Size::new(3, 3), false, LIFE).unwrap();
//! for y in 0..3 {
//!     game.set_cell(Coordinate::new(1, y), true).unwrap();
//! }
//! game.advance();
//! assert_eq!(Ok(true), game.get_cell(Coordinate::new(0, 1)));
//! assert_eq!(Ok(false), game.get_cell(Coordinate::new(1, 0)));
//! ```

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod coords;
pub mod errors;
pub mod field;
pub mod game;
pub mod rule;
pub mod sim;

pub mod traits {
    //! Traits needed to implement and call transition rules.
    pub use crate::game::CellType;
    pub use crate::rule::{ResolveNeighbor, TransitionRule};
}

pub mod prelude {
    //! Everything needed to build and run a simulation.
    pub use crate::traits::*;

    pub use crate::coords::{Coordinate, Offset, Size};
    pub use crate::errors::{Error, InvalidSize, OutOfBounds, Result, RuleParseError};
    pub use crate::field::Field;
    pub use crate::game::{Game, Generation};
    pub use crate::rule::{self, DummyRule, MatrixCell, MatrixRain, MooreTotalistic2D, Neighbors, LIFE};
    pub use crate::sim::Parallelism;
}
