use proptest::prelude::*;

use super::*;
use crate::errors::Result;
use crate::rule::{self, LIFE};

fn alive_set(game: &Game<bool>) -> Vec<(isize, isize)> {
    game.generation()
        .field
        .iter()
        .filter(|(_, &alive)| alive)
        .map(|(c, _)| (c.x, c.y))
        .collect()
}

#[test]
fn test_game_new() -> Result<()> {
    let game = Game::new(Size::new(30, 10), false, LIFE)?;
    assert_eq!(Size::new(30, 10), game.size());
    let generation = game.generation();
    assert_eq!(0, generation.number);
    let columns = generation.field.columns();
    assert_eq!(30, columns.len());
    assert_eq!(10, columns[0].len());
    Ok(())
}

#[test]
fn test_game_invalid_size() {
    assert_eq!(
        InvalidSize {
            width: 0,
            height: 3
        },
        Game::new(Size::new(0, 3), false, LIFE).unwrap_err()
    );
    assert!(Game::with_default_rule(Size::new(4, 0), 0_u8).is_err());
}

#[test]
fn test_game_oversized() {
    assert_eq!(
        InvalidSize {
            width: usize::MAX,
            height: 1
        },
        Game::new(Size::new(usize::MAX, 1), false, LIFE).unwrap_err()
    );
    assert!(Game::with_default_rule(Size::new(2, isize::MAX as usize + 1), 0_u8).is_err());
}

#[test]
fn test_game_set_get_cell() -> Result<()> {
    let game = Game::new(Size::new(3, 3), false, LIFE)?;
    game.set_cell(Coordinate::new(1, 1), true)?;
    assert_eq!(true, game.get_cell(Coordinate::new(1, 1))?);
    assert_eq!(false, game.get_cell(Coordinate::new(1, 0))?);
    assert_eq!(0, game.generation_count());
    Ok(())
}

#[test]
fn test_game_out_of_bounds() -> Result<()> {
    let game = Game::new(Size::new(2, 2), false, LIFE)?;
    let coord = Coordinate::new(0, 10);
    let err = game.set_cell(coord, true).unwrap_err();
    assert_eq!(coord, err.coord);
    assert_eq!(Size::new(2, 2), err.size);
    assert!(game.get_cell(Coordinate::new(1, 4)).is_err());
    assert!(game.get_cell(Coordinate::new(-1, 0)).is_err());
    assert!(alive_set(&game).is_empty());
    Ok(())
}

#[test]
fn test_game_reset() -> Result<()> {
    let game = Game::new(Size::new(3, 3), false, LIFE)?;
    for y in 0..3 {
        game.set_cell(Coordinate::new(1, y), true)?;
    }
    game.step(3);
    assert_eq!(3, game.generation_count());
    assert!(!alive_set(&game).is_empty());

    game.reset();
    assert_eq!(0, game.generation_count());
    assert!(alive_set(&game).is_empty());

    // The rule survives a reset.
    game.set_cell(Coordinate::new(0, 0), true)?;
    game.advance();
    assert!(alive_set(&game).is_empty());
    Ok(())
}

#[test]
fn test_game_reset_to_initial_value() -> Result<()> {
    let game = Game::new(Size::new(4, 2), 7_u32, rule::from_fn(|_, &n: &u32, _| n * 2))?;
    game.step(2);
    assert_eq!(28, game.get_cell(Coordinate::new(3, 1))?);
    game.reset();
    assert!(game.generation().field.iter().all(|(_, &n)| n == 7));
    Ok(())
}

#[test]
fn test_game_set_transition_rule() -> Result<()> {
    let game = Game::with_default_rule(Size::new(3, 3), false)?;
    game.advance();
    assert!(alive_set(&game).is_empty());

    // Bring every cell to life, regardless of its neighbors.
    game.set_transition_rule(rule::from_fn(|_, _: &bool, _| true));
    game.advance();
    assert_eq!(9, alive_set(&game).len());
    assert_eq!(2, game.generation_count());

    game.set_transition_rule(LIFE);
    game.advance();
    // Only the corners survive with 3 neighbors each.
    assert_eq!(vec![(0, 0), (0, 2), (2, 0), (2, 2)], alive_set(&game));
    Ok(())
}

#[test]
fn test_game_shared_rule() -> Result<()> {
    let rule: Arc<dyn TransitionRule<bool>> = Arc::new(LIFE);
    let a = Game::with_rule_arc(Size::new(3, 3), false, Arc::clone(&rule))?;
    let b = Game::with_default_rule(Size::new(3, 3), false)?;
    b.set_transition_rule_arc(rule);
    for game in &[&a, &b] {
        for x in 0..3 {
            game.set_cell(Coordinate::new(x, 1), true)?;
        }
        game.advance();
        assert_eq!(vec![(1, 0), (1, 1), (1, 2)], alive_set(game));
    }
    Ok(())
}

#[test]
fn test_generation_snapshot_is_stable() -> Result<()> {
    let game = Game::new(Size::new(3, 3), false, LIFE)?;
    game.set_cell(Coordinate::new(1, 1), true)?;
    let before = game.generation();

    game.set_cell(Coordinate::new(0, 0), true)?;
    game.advance();
    game.reset();

    assert_eq!(0, before.number);
    assert_eq!(Ok(&true), before.field.get(Coordinate::new(1, 1)));
    assert_eq!(Ok(&false), before.field.get(Coordinate::new(0, 0)));
    Ok(())
}

#[test]
fn test_reset_does_not_see_edits() -> Result<()> {
    // Edits are copy-on-write, so they must never leak into the field that
    // `reset()` restores.
    let game = Game::new(Size::new(2, 2), 0_i32, rule::DummyRule)?;
    game.set_cell(Coordinate::new(1, 1), 5)?;
    game.reset();
    assert_eq!(0, game.get_cell(Coordinate::new(1, 1))?);
    game.set_cell(Coordinate::new(1, 1), 6)?;
    game.reset();
    assert_eq!(0, game.get_cell(Coordinate::new(1, 1))?);
    Ok(())
}

#[test]
fn test_step_zero() -> Result<()> {
    let game = Game::new(Size::new(3, 3), false, LIFE)?;
    game.set_cell(Coordinate::new(1, 1), true)?;
    game.step(0);
    assert_eq!(0, game.generation_count());
    assert_eq!(vec![(1, 1)], alive_set(&game));
    Ok(())
}

#[test]
fn test_game_debug() -> Result<()> {
    let game = Game::new(Size::new(3, 2), false, LIFE)?;
    game.set_parallelism(Parallelism::Serial);
    assert_eq!(
        "Game { size: Size { width: 3, height: 2 }, generation: 0, parallelism: Serial }",
        format!("{:?}", game)
    );
    Ok(())
}

fn arb_soup() -> impl Strategy<Value = (Size, Vec<(isize, isize)>)> {
    (1..16_usize, 1..16_usize).prop_flat_map(|(w, h)| {
        let coords = prop::collection::vec((0..w as isize, 0..h as isize), 0..40);
        (Just(Size::new(w, h)), coords)
    })
}

proptest! {
    /// Tests that serial and parallel advances give identical results.
    #[test]
    fn test_game_parallelism_is_unobservable(
        (size, live) in arb_soup(),
        gens in 1..8_u64,
    ) {
        let serial = Game::new(size, false, LIFE).unwrap();
        serial.set_parallelism(Parallelism::Serial);
        let parallel = Game::new(size, false, LIFE).unwrap();
        parallel.set_parallelism(Parallelism::Rayon);
        for &(x, y) in &live {
            serial.set_cell(Coordinate::new(x, y), true).unwrap();
            parallel.set_cell(Coordinate::new(x, y), true).unwrap();
        }
        serial.step(gens);
        for _ in 0..gens {
            parallel.advance();
        }
        prop_assert_eq!(gens, serial.generation_count());
        prop_assert_eq!(gens, parallel.generation_count());
        prop_assert_eq!(serial.generation().field, parallel.generation().field);
    }

    /// Tests that a reset always restores the initial state.
    #[test]
    fn test_game_reset_restores_initial(
        (size, live) in arb_soup(),
        gens in 0..8_u64,
    ) {
        let game = Game::new(size, false, LIFE).unwrap();
        for &(x, y) in &live {
            game.set_cell(Coordinate::new(x, y), true).unwrap();
        }
        game.step(gens);
        game.reset();
        prop_assert_eq!(0, game.generation_count());
        prop_assert!(alive_set(&game).is_empty());
    }

    /// Tests that failed edits leave the game unchanged.
    #[test]
    fn test_game_out_of_bounds_is_harmless(
        (size, live) in arb_soup(),
        x in -20..40_isize,
        y in -20..40_isize,
    ) {
        let game = Game::new(size, false, LIFE).unwrap();
        for &(x, y) in &live {
            game.set_cell(Coordinate::new(x, y), true).unwrap();
        }
        let before = game.generation();
        let coord = Coordinate::new(x, y);
        if size.contains(coord) {
            prop_assert!(game.get_cell(coord).is_ok());
        } else {
            prop_assert!(game.set_cell(coord, true).is_err());
            prop_assert!(game.get_cell(coord).is_err());
            let after = game.generation();
            prop_assert_eq!(&before.field, &after.field);
        }
    }
}
