use lazy_static::lazy_static;
use regex::Regex;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use super::{Neighbors, ResolveNeighbor, TransitionRule};
use crate::coords::{Coordinate, Offset};
use crate::errors::RuleParseError;

lazy_static! {
    static ref RULESTRING_REGEX: Regex = Regex::new(r"^[Bb]([0-9]*)/?[Ss]([0-9]*)$").unwrap();
}

/// A 2-state totalistic 2D range-1 Moore-neighborhood rule, such as Conway's
/// Game of Life.
///
/// Cells outside the field count as dead.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MooreTotalistic2D {
    birth: [bool; 9],
    survival: [bool; 9],
}
impl Default for MooreTotalistic2D {
    fn default() -> Self {
        LIFE
    }
}

impl MooreTotalistic2D {
    /// Constructs a rule from lists of neighbor counts that cause a dead cell
    /// to be born and a live cell to survive.
    pub fn new(birth: &[usize], survival: &[usize]) -> Result<Self, RuleParseError> {
        Ok(Self {
            birth: Self::make_lut(birth)?,
            survival: Self::make_lut(survival)?,
        })
    }

    fn make_lut(counts: &[usize]) -> Result<[bool; 9], RuleParseError> {
        let mut lut = [false; 9];
        for &n in counts {
            *lut.get_mut(n)
                .ok_or(RuleParseError::CountOutOfRange(n))? = true;
        }
        Ok(lut)
    }

    /// Returns the number of live cells in the Moore neighborhood.
    pub fn live_neighbors(nbhd: &impl ResolveNeighbor<bool>) -> usize {
        Offset::MOORE
            .iter()
            .filter(|&&offset| matches!(nbhd.resolve(offset), Ok(&true)))
            .count()
    }
}

impl TryFrom<&str> for MooreTotalistic2D {
    type Error = RuleParseError;
    fn try_from(s: &str) -> Result<Self, RuleParseError> {
        let captures = RULESTRING_REGEX
            .captures(s.trim())
            .ok_or_else(|| RuleParseError::Malformed(s.to_owned()))?;
        let mut conditions = [[false; 9]; 2];
        for i in 0..2 {
            for ch in captures[i + 1].chars() {
                // The regex only admits ASCII digits.
                let n = ch.to_digit(10).unwrap_or_default() as usize;
                *conditions[i]
                    .get_mut(n)
                    .ok_or(RuleParseError::CountOutOfRange(n))? = true;
            }
        }
        Ok(Self {
            birth: conditions[0],
            survival: conditions[1],
        })
    }
}
impl FromStr for MooreTotalistic2D {
    type Err = RuleParseError;
    fn from_str(s: &str) -> Result<Self, RuleParseError> {
        Self::try_from(s)
    }
}

impl fmt::Display for MooreTotalistic2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in (0..9).filter(|&n| self.birth[n]) {
            write!(f, "{}", n)?;
        }
        write!(f, "/S")?;
        for n in (0..9).filter(|&n| self.survival[n]) {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

impl TransitionRule<bool> for MooreTotalistic2D {
    fn next(&self, _coord: Coordinate, &alive: &bool, nbhd: &Neighbors<'_, bool>) -> bool {
        // Index LUT to get next cell state.
        let live_neighbors = Self::live_neighbors(nbhd);
        if alive {
            self.survival[live_neighbors]
        } else {
            self.birth[live_neighbors]
        }
    }
}

/// Conway's Game of Life, simulated using a general 2-state totalistic
/// 2D range-1 Moore-neighborhood algorithm.
pub const LIFE: MooreTotalistic2D = MooreTotalistic2D {
    birth: [false, false, false, true, false, false, false, false, false],
    survival: [false, false, true, true, false, false, false, false, false],
};
