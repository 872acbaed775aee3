//! Test utilities for technique implementations.
//!
//! [`TechniqueTester`] tracks the initial and current state of a board,
//! applies techniques against a chosen variant's topology, and asserts the
//! expected changes with `#[track_caller]` so failures point at the test.

use xdoku_core::{Board, Cell, Digit, DigitSet};

use crate::{technique::Technique, topology::Topology, variant::Variant};

/// A fluent harness for verifying technique implementations.
///
/// All methods return `self`, so a test reads as one chain: build a board,
/// apply a technique, assert the changed and unchanged cells.
#[derive(Debug)]
pub struct TechniqueTester {
    topology: Topology,
    initial: Board,
    current: Board,
}

impl TechniqueTester {
    /// Creates a tester from a variant and an initial board state.
    pub fn new(variant: Variant, board: Board) -> Self {
        let current = board.clone();
        Self {
            topology: Topology::new(variant),
            initial: board,
            current,
        }
    }

    /// Creates a tester from a variant and an 81-character puzzle string.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed.
    #[track_caller]
    pub fn from_text(variant: Variant, text: &str) -> Self {
        Self::new(variant, Board::from_text(text).unwrap())
    }

    /// Applies the technique once.
    #[track_caller]
    pub fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        technique.apply(&mut self.current, &self.topology);
        self
    }

    /// Applies the technique repeatedly until it makes no more progress.
    #[track_caller]
    pub fn apply_until_stuck<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        while technique.apply(&mut self.current, &self.topology) {}
        self
    }

    /// Asserts that a cell is now solved as the given digit.
    #[track_caller]
    pub fn assert_solved_as(self, cell: Cell, digit: Digit) -> Self {
        let current = self.current.candidates(cell);
        assert_eq!(
            current.as_single(),
            Some(digit),
            "expected {cell} to be solved as {digit}, but candidates are {current:?}"
        );
        self
    }

    /// Asserts that a cell's candidates are now exactly the given set.
    #[track_caller]
    pub fn assert_candidates<C>(self, cell: Cell, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let expected = DigitSet::from_iter(digits);
        let current = self.current.candidates(cell);
        assert_eq!(
            current, expected,
            "expected {cell} to have candidates {expected:?}, but found {current:?}"
        );
        self
    }

    /// Asserts that all of the given digits were removed from a cell.
    ///
    /// The digits must have been present initially; other candidates may
    /// also have been removed.
    #[track_caller]
    pub fn assert_removed_includes<C>(self, cell: Cell, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates(cell);
        let current = self.current.candidates(cell);
        assert!(
            initial.is_superset(digits),
            "expected initial candidates at {cell} to include {digits:?}, but found {initial:?}"
        );
        assert!(
            (current & digits).is_empty(),
            "expected all of {digits:?} removed from {cell}, but {current:?} still contains {:?}",
            current & digits
        );
        self
    }

    /// Asserts that a cell's candidates have not changed.
    #[track_caller]
    pub fn assert_no_change(self, cell: Cell) -> Self {
        let initial = self.initial.candidates(cell);
        let current = self.current.candidates(cell);
        assert_eq!(
            initial, current,
            "expected no change at {cell}, but candidates changed from {initial:?} to {current:?}"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::technique::BoxedTechnique;

    #[derive(Debug)]
    struct NoOp;

    impl Technique for NoOp {
        fn name(&self) -> &'static str {
            "no-op"
        }

        fn clone_box(&self) -> BoxedTechnique {
            Box::new(NoOp)
        }

        fn apply(&self, _board: &mut Board, _topology: &Topology) -> bool {
            false
        }
    }

    #[derive(Debug)]
    struct AssignD1AtA1;

    impl Technique for AssignD1AtA1 {
        fn name(&self) -> &'static str {
            "assign-d1-at-a1"
        }

        fn clone_box(&self) -> BoxedTechnique {
            Box::new(AssignD1AtA1)
        }

        fn apply(&self, board: &mut Board, _topology: &Topology) -> bool {
            let cell = Cell::new(0, 0);
            if board.candidates(cell).len() == 1 {
                return false;
            }
            board.assign(cell, Digit::D1);
            true
        }
    }

    #[test]
    fn test_apply_once_and_assert_solved() {
        TechniqueTester::from_text(Variant::Standard, &".".repeat(81))
            .apply_once(&AssignD1AtA1)
            .assert_solved_as(Cell::new(0, 0), Digit::D1)
            .assert_no_change(Cell::new(4, 4));
    }

    #[test]
    fn test_apply_until_stuck_terminates() {
        TechniqueTester::from_text(Variant::Standard, &".".repeat(81))
            .apply_until_stuck(&AssignD1AtA1)
            .assert_solved_as(Cell::new(0, 0), Digit::D1);
    }

    #[test]
    fn test_no_op_changes_nothing() {
        TechniqueTester::from_text(Variant::Standard, &".".repeat(81))
            .apply_once(&NoOp)
            .assert_no_change(Cell::new(0, 0))
            .assert_candidates(Cell::new(8, 8), Digit::ALL);
    }

    #[test]
    #[should_panic(expected = "expected A1 to be solved as 5")]
    fn test_assert_solved_as_fails_when_not_solved() {
        TechniqueTester::from_text(Variant::Standard, &".".repeat(81))
            .apply_once(&NoOp)
            .assert_solved_as(Cell::new(0, 0), Digit::D5);
    }

    #[test]
    #[should_panic(expected = "expected no change at A1")]
    fn test_assert_no_change_fails_when_changed() {
        TechniqueTester::from_text(Variant::Standard, &".".repeat(81))
            .apply_once(&AssignD1AtA1)
            .assert_no_change(Cell::new(0, 0));
    }
}
