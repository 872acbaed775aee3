use std::fmt::{self, Display};

/// Which family of units constrains the puzzle.
///
/// The variant is the only configuration that affects solving behavior; it is
/// passed to [`Solver::new`](crate::Solver::new) and fixed for the lifetime
/// of the solver.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Rows, columns, and 3×3 boxes (27 units).
    #[default]
    Standard,
    /// Standard units plus the two main diagonals (29 units).
    Diagonal,
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::Diagonal => f.write_str("diagonal"),
        }
    }
}
