use tinyvec::ArrayVec;
use xdoku_core::{Board, Cell, DigitSet};

use crate::{
    technique::{BoxedTechnique, Technique},
    topology::Topology,
};

const NAME: &str = "naked twins";

/// Purges the digits of a two-cell naked pair from the rest of their unit.
///
/// When exactly two cells of a unit share an identical two-digit candidate
/// set, those two digits must occupy exactly those two cells, so no other
/// cell of the unit may hold either.
///
/// A candidate pair shared by three or more cells of a unit triggers no
/// elimination; that board is already unsolvable and the reduction loop
/// discovers the contradiction on a later pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedTwins;

impl NakedTwins {
    /// Creates a new `NakedTwins` technique.
    #[must_use]
    pub const fn new() -> Self {
        NakedTwins
    }
}

impl Technique for NakedTwins {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board, topology: &Topology) -> bool {
        let mut changed = false;
        for unit in topology.units() {
            let cells = unit.cells();

            let mut pairs: ArrayVec<[(Cell, DigitSet); 9]> = ArrayVec::new();
            for cell in cells {
                let candidates = board.candidates(cell);
                if candidates.len() == 2 {
                    pairs.push((cell, candidates));
                }
            }

            for (i, &(first, twin)) in pairs.iter().enumerate() {
                // Handle each distinct pair set at its first occurrence.
                if pairs[..i].iter().any(|&(_, set)| set == twin) {
                    continue;
                }
                let matching = pairs.iter().filter(|&&(_, set)| set == twin).count();
                if matching != 2 {
                    continue;
                }
                let Some(&(second, _)) = pairs[i + 1..].iter().find(|&&(_, set)| set == twin)
                else {
                    continue;
                };
                for cell in cells {
                    if cell == first || cell == second {
                        continue;
                    }
                    for digit in twin {
                        changed |= board.remove_candidate(cell, digit);
                    }
                }
            }
        }
        changed
    }
}
