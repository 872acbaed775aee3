use xdoku_core::{Board, DigitSet};

use crate::topology::Topology;

/// Checks that the fixed digits of an initial, unpropagated board do not
/// repeat within any unit of the topology.
///
/// This only considers cells that are already singletons, the puzzle's
/// givens, and must run before any propagation: a duplicated given would
/// otherwise surface much later as a hard-to-diagnose contradiction deep in
/// the reduction loop.
#[must_use]
pub fn givens_are_consistent(board: &Board, topology: &Topology) -> bool {
    for unit in topology.units() {
        let mut seen = DigitSet::EMPTY;
        for cell in unit.cells() {
            let Some(digit) = board.candidates(cell).as_single() else {
                continue;
            };
            if !seen.insert(digit) {
                return false;
            }
        }
    }
    true
}
