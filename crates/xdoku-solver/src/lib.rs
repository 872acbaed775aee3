//! Constraint-propagation and backtracking solver for standard and diagonal
//! 9×9 Sudoku puzzles.
//!
//! The solver treats a puzzle as a constraint-satisfaction problem over the
//! candidate board from [`xdoku_core`]:
//!
//! - [`Topology`] builds the *units* (groups of nine cells that must hold
//!   every digit exactly once) and the *peers* of every cell for the chosen
//!   [`Variant`]. The standard variant has 27 units; the diagonal variant
//!   adds the two main diagonals for 29.
//! - The [`technique`] module provides the three local deduction rules:
//!   elimination, hidden single, and naked twins.
//! - [`Propagator`] composes the rules into a fixed-point loop that either
//!   reaches a stable board or reports a contradiction.
//! - [`search`] drives minimum-remaining-values backtracking over the
//!   propagator, giving every branch its own board copy.
//! - [`Solver`] is the facade: parse, validate the givens, search.
//!
//! # Examples
//!
//! ```
//! use xdoku_solver::{Solver, Variant};
//!
//! let solver = Solver::new(Variant::Standard);
//! let puzzle =
//!     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
//! let solution = solver.solve(puzzle)?;
//! assert!(solution.is_solved());
//! # Ok::<(), xdoku_solver::SolveError>(())
//! ```

pub use self::{
    error::*, propagator::*, search::*, solver::*, topology::*, validate::*, variant::*,
};

mod error;
mod propagator;
mod search;
mod solver;
pub mod technique;
mod topology;
mod validate;
mod variant;

#[cfg(test)]
mod testing;
