use xdoku_core::{Board, Digit, DigitSet};

use crate::{
    technique::{BoxedTechnique, Technique},
    topology::Topology,
};

const NAME: &str = "hidden single";

/// Forces a digit into the only cell of a unit that still admits it.
///
/// If a digit must appear somewhere in a unit and exactly one cell can hold
/// it, that cell is collapsed to the digit, regardless of how many other
/// candidates the cell currently has.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        HiddenSingle
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board, topology: &Topology) -> bool {
        let mut changed = false;
        for unit in topology.units() {
            for digit in Digit::ALL {
                let mut count = 0;
                let mut holder = None;
                for cell in unit.cells() {
                    if board.candidates(cell).contains(digit) {
                        count += 1;
                        if count > 1 {
                            break;
                        }
                        holder = Some(cell);
                    }
                }
                if count != 1 {
                    continue;
                }
                let Some(cell) = holder else {
                    continue;
                };
                let target = DigitSet::from_elem(digit);
                if board.candidates(cell) != target {
                    board.set_candidates(cell, target);
                    changed = true;
                }
            }
        }
        changed
    }
}
