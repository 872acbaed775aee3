use std::collections::HashMap;

use xdoku_core::Board;

use crate::{
    error::SolverError,
    technique::{self, BoxedTechnique},
    topology::Topology,
};

/// Statistics collected while reducing boards.
///
/// Tracks how many passes each technique changed the board in, across every
/// reduction the stats object is threaded through (search accumulates one
/// object over all of its nodes).
#[derive(Debug, Default, Clone)]
pub struct PropagatorStats {
    /// Map of technique names to the number of passes in which each one
    /// changed the board.
    pub applications: HashMap<&'static str, usize>,
    /// Total number of full passes over the technique list.
    pub passes: usize,
}

impl PropagatorStats {
    /// Creates a new empty statistics object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of passes in which a specific technique changed
    /// the board.
    #[must_use]
    pub fn count(&self, technique_name: &str) -> usize {
        self.applications.get(technique_name).copied().unwrap_or(0)
    }

    /// Returns `true` if any technique changed a board at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        !self.applications.is_empty()
    }
}

/// Applies the deduction techniques to a board until a fixed point.
///
/// One pass applies every technique once, in order. The loop stops only when
/// a full pass leaves the number of solved cells unchanged; a single pass is
/// not enough, because hidden singles and naked twins expose new eliminations
/// for the next pass.
///
/// # Examples
///
/// ```
/// use xdoku_core::Board;
/// use xdoku_solver::{Propagator, Topology, Variant};
///
/// let topology = Topology::new(Variant::Standard);
/// let propagator = Propagator::with_all_techniques();
///
/// let text = format!("12345678.{}", ".".repeat(72));
/// let mut board = Board::from_text(&text)?;
/// propagator.reduce(&mut board, &topology)?;
///
/// // The blank cell of the first row is forced by elimination.
/// assert_eq!(&board.to_string()[..9], "123456789");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Propagator {
    techniques: Vec<BoxedTechnique>,
}

impl Propagator {
    /// Creates a propagator with the specified techniques, applied in order
    /// within each pass.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a propagator with all techniques, in the order defined by
    /// [`technique::all_techniques`].
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self {
            techniques: technique::all_techniques(),
        }
    }

    /// Returns the configured techniques in application order.
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Reduces the board to a propagation fixed point.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if any cell's candidate set
    /// becomes empty: the board has no solution down this path.
    pub fn reduce(&self, board: &mut Board, topology: &Topology) -> Result<(), SolverError> {
        let mut stats = PropagatorStats::new();
        self.reduce_with_stats(board, topology, &mut stats)
    }

    /// Reduces the board to a fixed point, accumulating statistics into a
    /// caller-owned object.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if any cell's candidate set
    /// becomes empty.
    pub fn reduce_with_stats(
        &self,
        board: &mut Board,
        topology: &Topology,
        stats: &mut PropagatorStats,
    ) -> Result<(), SolverError> {
        loop {
            let solved_before = board.solved_count();

            for technique in &self.techniques {
                if technique.apply(board, topology) {
                    *stats.applications.entry(technique.name()).or_default() += 1;
                }
            }
            stats.passes += 1;

            if let Some(cell) = board.contradicted_cell() {
                return Err(SolverError::Contradiction { cell });
            }
            if board.solved_count() == solved_before {
                return Ok(());
            }
        }
    }
}
