use xdoku_core::Board;

use crate::{
    error::SolveError,
    propagator::Propagator,
    search::{SolveStats, search},
    topology::Topology,
    validate::givens_are_consistent,
    variant::Variant,
};

/// The solver facade: parse, validate the givens, search.
///
/// A `Solver` fixes the puzzle variant at construction, builds the topology
/// once, and reuses it for every solve.
///
/// # Examples
///
/// ```
/// use xdoku_solver::{Solver, Variant};
///
/// let solver = Solver::new(Variant::Standard);
/// let puzzle =
///     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
///
/// let (solution, stats) = solver.solve_with_stats(puzzle)?;
/// assert!(solution.is_solved());
/// // This puzzle needs no backtracking at all.
/// assert_eq!(stats.search.branches, 0);
/// # Ok::<(), xdoku_solver::SolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    topology: Topology,
    propagator: Propagator,
}

impl Solver {
    /// Creates a solver for the given variant with all techniques.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            topology: Topology::new(variant),
            propagator: Propagator::with_all_techniques(),
        }
    }

    /// Creates a solver with a custom propagator.
    ///
    /// Useful for restricting the technique set, for instance to measure how
    /// far elimination alone gets on a puzzle.
    #[must_use]
    pub fn with_propagator(variant: Variant, propagator: Propagator) -> Self {
        Self {
            topology: Topology::new(variant),
            propagator,
        }
    }

    /// Returns the variant this solver was built for.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.topology.variant()
    }

    /// Returns the topology shared by every solve.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Solves an 81-character puzzle string.
    ///
    /// # Errors
    ///
    /// - [`SolveError::Parse`] if the text is malformed.
    /// - [`SolveError::InconsistentGivens`] if the fixed digits already
    ///   repeat within a unit.
    /// - [`SolveError::Unsatisfiable`] if the givens are consistent but no
    ///   completion exists.
    pub fn solve(&self, text: &str) -> Result<Board, SolveError> {
        self.solve_with_stats(text).map(|(board, _)| board)
    }

    /// Solves a puzzle and reports propagation and search statistics.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_with_stats(&self, text: &str) -> Result<(Board, SolveStats), SolveError> {
        let board = Board::from_text(text)?;
        if !givens_are_consistent(&board, &self.topology) {
            return Err(SolveError::InconsistentGivens);
        }
        let mut stats = SolveStats::default();
        match search(&self.propagator, &self.topology, board, &mut stats) {
            Some(solution) => Ok((solution, stats)),
            None => Err(SolveError::Unsatisfiable),
        }
    }
}
