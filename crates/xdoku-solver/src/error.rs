use xdoku_core::{Cell, ParseBoardError};

/// Error produced while reducing a board.
///
/// A contradiction is not exceptional during search; every failed branch
/// produces one, and callers treat it as an ordinary backtrack signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// A cell's candidate set became empty: the board has no solution down
    /// this path.
    #[display("cell {cell} has no remaining candidates")]
    Contradiction {
        /// The first contradicted cell, in row-major order.
        cell: Cell,
    },
}

/// Error returned by the [`Solver`](crate::Solver) facade.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolveError {
    /// The puzzle text was malformed (wrong length or invalid character).
    #[display("invalid puzzle text: {_0}")]
    Parse(ParseBoardError),
    /// The puzzle's fixed digits already repeat within a unit, so the givens
    /// themselves are inconsistent.
    #[display("the puzzle's givens repeat a digit within a unit")]
    InconsistentGivens,
    /// The givens are self-consistent, but no completion exists.
    #[display("the puzzle has no solution")]
    Unsatisfiable,
}
