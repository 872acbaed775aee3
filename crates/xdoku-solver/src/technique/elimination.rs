use xdoku_core::Board;

use crate::{
    technique::{BoxedTechnique, Technique},
    topology::Topology,
};

const NAME: &str = "elimination";

/// Removes each solved cell's value from the candidates of its peers.
///
/// A peer shares a unit with the solved cell, so it cannot hold the value
/// already fixed there. The solved cells are snapshotted at the start of the
/// pass; cells that become singletons during the pass propagate on the next
/// pass of the reduction loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct Elimination;

impl Elimination {
    /// Creates a new `Elimination` technique.
    #[must_use]
    pub const fn new() -> Self {
        Elimination
    }
}

impl Technique for Elimination {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board, topology: &Topology) -> bool {
        let mut changed = false;
        let solved = board.solved_cells();
        for cell in solved {
            // Two identical solved peers empty each other out here; the
            // emptied cell is skipped when its turn comes and the reduction
            // loop reports the contradiction.
            let Some(digit) = board.candidates(cell).as_single() else {
                continue;
            };
            for peer in topology.peers(cell) {
                changed |= board.remove_candidate(peer, digit);
            }
        }
        changed
    }
}
