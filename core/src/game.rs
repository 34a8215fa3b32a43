//! High-level CA interface.

use log::{debug, trace};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::coords::{Coordinate, Size};
use crate::errors::{InvalidSize, OutOfBounds};
use crate::field::Field;
use crate::rule::{DummyRule, TransitionRule};
use crate::sim::{self, Parallelism};

/// A "trait alias" for types that can be stored in the cells of a `Game`.
pub trait CellType: 'static + Clone + Send + Sync {}
impl<T: 'static + Clone + Send + Sync> CellType for T {}

/// Consistent snapshot of a game: one field together with its generation
/// number.
///
/// The field is never modified after the snapshot is taken, even if the game
/// is advanced or edited afterwards.
#[derive(Debug, Clone)]
pub struct Generation<T> {
    /// Cells of the generation.
    pub field: Arc<Field<T>>,
    /// Number of advances since construction or the last reset.
    pub number: u64,
}

#[derive(Debug)]
struct State<T> {
    field: Arc<Field<T>>,
    generation: u64,
}

/// Cellular automaton simulation, including a field of cells, a transition
/// rule, and a generation count.
///
/// All methods take `&self`, so a `Game` can be shared between threads using
/// an `Arc`. Advances are serialized with each other and with edits, and
/// readers always observe either the generation before an advance or the one
/// after it, never a mix.
pub struct Game<T: CellType> {
    /// Live field and generation count.
    ///
    /// The field is behind an `Arc` so that advances can read it without holding
    /// this lock and snapshots can be handed out without copying. Edits go
    /// through `Arc::make_mut()`, so an outstanding snapshot is never mutated.
    state: RwLock<State<T>>,
    /// Held for the whole read-compute-swap cycle of an advance, and by every
    /// other operation that writes to `state`.
    advance_lock: Mutex<()>,
    rule: RwLock<Arc<dyn TransitionRule<T>>>,
    parallelism: RwLock<Parallelism>,
    /// Field restored by `reset()`.
    initial_field: Arc<Field<T>>,
}

impl<T: CellType> fmt::Debug for Game<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("size", &self.size())
            .field("generation", &self.generation_count())
            .field("parallelism", &self.parallelism())
            .finish()
    }
}

impl<T: CellType> Game<T> {
    /// Constructs a new game with every cell set to `initial`.
    pub fn new(
        size: Size,
        initial: T,
        rule: impl 'static + TransitionRule<T>,
    ) -> Result<Self, InvalidSize> {
        Self::with_rule_arc(size, initial, Arc::new(rule))
    }
    /// Constructs a new game with a rule that may be shared with other games.
    pub fn with_rule_arc(
        size: Size,
        initial: T,
        rule: Arc<dyn TransitionRule<T>>,
    ) -> Result<Self, InvalidSize> {
        let initial_field = Arc::new(Field::new(size, initial)?);
        Ok(Self {
            state: RwLock::new(State {
                field: Arc::clone(&initial_field),
                generation: 0,
            }),
            advance_lock: Mutex::new(()),
            rule: RwLock::new(rule),
            parallelism: RwLock::new(Parallelism::default()),
            initial_field,
        })
    }
    /// Constructs a new game whose rule never changes any cells.
    pub fn with_default_rule(size: Size, initial: T) -> Result<Self, InvalidSize> {
        Self::new(size, initial, DummyRule)
    }

    /// Returns the size of the field.
    pub fn size(&self) -> Size {
        self.initial_field.size()
    }

    /// Returns the current field and generation number.
    pub fn generation(&self) -> Generation<T> {
        let state = self.state.read();
        Generation {
            field: Arc::clone(&state.field),
            number: state.generation,
        }
    }
    /// Returns the number of generations that have elapsed since construction
    /// or the last reset.
    pub fn generation_count(&self) -> u64 {
        self.state.read().generation
    }

    /// Returns the value of the cell at `coord`.
    pub fn get_cell(&self, coord: Coordinate) -> Result<T, OutOfBounds> {
        self.state.read().field.get(coord).cloned()
    }
    /// Sets the value of the cell at `coord`. This does not change the
    /// generation count.
    pub fn set_cell(&self, coord: Coordinate, value: T) -> Result<(), OutOfBounds> {
        // Check bounds first so that a failed call never clones the field.
        if !self.size().contains(coord) {
            return Err(OutOfBounds {
                coord,
                size: self.size(),
            });
        }
        let _advance_guard = self.advance_lock.lock();
        let mut state = self.state.write();
        Arc::make_mut(&mut state.field).set(coord, value)
    }

    /// Replaces the transition rule. The new rule is used starting with the
    /// next advance.
    pub fn set_transition_rule(&self, rule: impl 'static + TransitionRule<T>) {
        self.set_transition_rule_arc(Arc::new(rule));
    }
    /// Replaces the transition rule with one that may be shared with other
    /// games.
    pub fn set_transition_rule_arc(&self, rule: Arc<dyn TransitionRule<T>>) {
        *self.rule.write() = rule;
        debug!("Replaced transition rule");
    }

    /// Returns how cells are computed during an advance.
    pub fn parallelism(&self) -> Parallelism {
        *self.parallelism.read()
    }
    /// Sets how cells are computed during an advance. This has no effect on the
    /// results.
    pub fn set_parallelism(&self, parallelism: Parallelism) {
        *self.parallelism.write() = parallelism;
    }

    /// Advances the simulation by one generation.
    pub fn advance(&self) {
        let _advance_guard = self.advance_lock.lock();
        self.advance_locked();
    }
    /// Advances the simulation by `gens` generations without letting any other
    /// advance or edit in between.
    pub fn step(&self, gens: u64) {
        let _advance_guard = self.advance_lock.lock();
        for _ in 0..gens {
            self.advance_locked();
        }
    }

    /// Restores every cell to the value the game was constructed with and sets
    /// the generation count back to 0. The transition rule is unchanged.
    pub fn reset(&self) {
        let _advance_guard = self.advance_lock.lock();
        let mut state = self.state.write();
        state.field = Arc::clone(&self.initial_field);
        state.generation = 0;
        debug!("Reset {} field", self.size());
    }

    /// Computes and publishes one generation. `advance_lock` must be held.
    fn advance_locked(&self) {
        let start = Instant::now();
        let rule = Arc::clone(&*self.rule.read());
        let parallelism = self.parallelism();
        // Nothing else can write to `state` while `advance_lock` is held, so
        // this is still the current field when the result is published.
        let prev = Arc::clone(&self.state.read().field);

        let next = sim::next_generation(&*prev, &*rule, parallelism);

        let mut state = self.state.write();
        state.field = Arc::new(next);
        state.generation += 1;
        trace!(
            "Computed generation {} in {:?} ({:?})",
            state.generation,
            start.elapsed(),
            parallelism,
        );
    }
}

#[cfg(test)]
mod tests;
