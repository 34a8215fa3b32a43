//! Starting patterns for Life-like rules.

use cellgrid_core::prelude::*;
use clap::ValueEnum;
use rand::Rng;

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// 2x2 still life
    Block,
    /// Period-2 oscillator
    Blinker,
    /// Diagonal spaceship
    Glider,
    /// Random cells with a density of about 1/3
    Soup,
}

const BLOCK: &[(isize, isize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];
const BLINKER: &[(isize, isize)] = &[(1, 0), (1, 1), (1, 2)];
const GLIDER: &[(isize, isize)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

impl Pattern {
    /// Returns the live cells of the pattern relative to its top-left corner,
    /// or `None` for patterns that depend on the field size.
    pub fn cells(self) -> Option<&'static [(isize, isize)]> {
        match self {
            Pattern::Block => Some(BLOCK),
            Pattern::Blinker => Some(BLINKER),
            Pattern::Glider => Some(GLIDER),
            Pattern::Soup => None,
        }
    }

    /// Sets the cells of the pattern to live, centered in the field. Cells
    /// that do not fit are skipped.
    pub fn seed(self, game: &Game<bool>) -> usize {
        let size = game.size();
        let mut seeded = 0;
        match self.cells() {
            Some(cells) => {
                let center = Coordinate::new(size.width as isize / 2 - 1, size.height as isize / 2 - 1);
                for &offset in cells {
                    if game.set_cell(center + Offset::from(offset), true).is_ok() {
                        seeded += 1;
                    }
                }
            }
            None => {
                let mut rng = rand::thread_rng();
                for coord in size.coords() {
                    if rng.gen_ratio(1, 3) && game.set_cell(coord, true).is_ok() {
                        seeded += 1;
                    }
                }
            }
        }
        seeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_count(game: &Game<bool>) -> usize {
        game.generation().field.iter().filter(|(_, &alive)| alive).count()
    }

    #[test]
    fn test_seed_centered() {
        let game = Game::new(Size::new(10, 10), false, LIFE).unwrap();
        assert_eq!(5, Pattern::Glider.seed(&game));
        assert_eq!(5, live_count(&game));
        assert_eq!(Ok(true), game.get_cell(Coordinate::new(5, 4)));
    }

    #[test]
    fn test_seed_clipped() {
        let game = Game::new(Size::new(1, 1), false, LIFE).unwrap();
        assert_eq!(1, Pattern::Block.seed(&game));
        assert_eq!(1, live_count(&game));
    }

    #[test]
    fn test_seed_still_life() {
        let game = Game::new(Size::new(6, 6), false, LIFE).unwrap();
        Pattern::Block.seed(&game);
        let before = game.generation();
        game.step(5);
        assert_eq!(before.field, game.generation().field);
    }

    #[test]
    fn test_seed_soup() {
        let game = Game::new(Size::new(30, 30), false, LIFE).unwrap();
        let seeded = Pattern::Soup.seed(&game);
        assert_eq!(seeded, live_count(&game));
    }
}
