//! Local deduction rules.
//!
//! Each rule implements the [`Technique`] trait: given a board and the active
//! topology, it applies every deduction it can find in one pass and reports
//! whether the board changed. Rules never fail on their own: a rule may
//! empty a cell's candidate set, and the reduction loop in
//! [`Propagator`](crate::Propagator) is what detects and reports the
//! contradiction.

use std::fmt::Debug;

use xdoku_core::Board;

use crate::topology::Topology;

pub use self::{elimination::Elimination, hidden_single::HiddenSingle, naked_twins::NakedTwins};

mod elimination;
mod hidden_single;
mod naked_twins;

/// Returns all techniques in application order: elimination, hidden single,
/// naked twins.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(Elimination::new()),
        Box::new(HiddenSingle::new()),
        Box::new(NakedTwins::new()),
    ]
}

/// A local deduction rule over a candidate board.
pub trait Technique: Debug {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Applies every deduction this rule can find in one pass.
    ///
    /// Returns `true` if the board changed.
    fn apply(&self, board: &mut Board, topology: &Topology) -> bool;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
