//! Error types.

use thiserror::Error;

use crate::coords::{Coordinate, Size};

/// `Result` type alias for operations that may fail with any engine error.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error returned when a field is constructed with a zero dimension.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("invalid field size {width}x{height}: both dimensions must be positive")]
pub struct InvalidSize {
    /// Requested width.
    pub width: usize,
    /// Requested height.
    pub height: usize,
}
impl From<Size> for InvalidSize {
    fn from(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

/// Error returned when a coordinate lies outside of a field.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("coordinate {coord} is outside of the {size} field")]
pub struct OutOfBounds {
    /// The coordinate that was requested.
    pub coord: Coordinate,
    /// The size of the field.
    pub size: Size,
}

/// Error encountered while parsing a rule string.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleParseError {
    #[error("malformed rule string {0:?}; expected something like \"B3/S23\"")]
    Malformed(String),
    #[error("neighbor count {0} is out of range (0 to 8)")]
    CountOutOfRange(usize),
}

/// Any error produced by the engine.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    InvalidSize(#[from] InvalidSize),
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
    #[error(transparent)]
    RuleParse(#[from] RuleParseError),
}
