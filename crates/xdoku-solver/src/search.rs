use xdoku_core::{Board, Cell};

use crate::{
    propagator::{Propagator, PropagatorStats},
    topology::Topology,
};

/// Counters describing one backtracking search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of search nodes visited, including the root.
    pub nodes: usize,
    /// Number of candidate assignments tried. Zero means propagation solved
    /// the puzzle at the root without branching.
    pub branches: usize,
}

/// Statistics for a whole solve: propagation and search combined.
#[derive(Debug, Default, Clone)]
pub struct SolveStats {
    /// Technique statistics accumulated over every search node.
    pub propagation: PropagatorStats,
    /// Search node and branch counters.
    pub search: SearchStats,
}

/// Depth-first backtracking search over the propagator's output.
///
/// Every node first reduces its board to a fixed point; a contradiction makes
/// the node fail, a fully solved board makes it succeed. Otherwise the node
/// branches on the unsolved cell with the fewest remaining candidates (ties
/// broken by row-major cell order), trying its digits in ascending order.
/// Each branch gets its own copy of the board, so failed branches leave no
/// trace, and the first solution found is returned without exploring
/// alternatives.
///
/// `None` means the board has no completion. That is an ordinary outcome of
/// search, not an error; every failed branch produces it internally.
#[must_use]
pub fn search(
    propagator: &Propagator,
    topology: &Topology,
    mut board: Board,
    stats: &mut SolveStats,
) -> Option<Board> {
    stats.search.nodes += 1;

    if propagator
        .reduce_with_stats(&mut board, topology, &mut stats.propagation)
        .is_err()
    {
        return None;
    }
    if board.is_solved() {
        return Some(board);
    }

    let cell = branch_cell(&board)?;
    for digit in board.candidates(cell) {
        stats.search.branches += 1;
        let mut child = board.clone();
        child.assign(cell, digit);
        if let Some(solution) = search(propagator, topology, child, stats) {
            return Some(solution);
        }
    }
    None
}

/// Selects the unsolved cell with the fewest remaining candidates.
///
/// Returns `None` only for a fully solved board, which callers have already
/// handled.
fn branch_cell(board: &Board) -> Option<Cell> {
    Cell::all()
        .filter(|&cell| board.candidates(cell).len() > 1)
        .min_by_key(|&cell| board.candidates(cell).len())
}

#[cfg(test)]
mod tests {
    use xdoku_core::{DigitSet, Digit::*};

    use super::*;
    use crate::variant::Variant;

    const EASY: &str =
        "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";

    /// Norvig's hard puzzle: propagation alone is not enough.
    const HARD: &str =
        "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";
    const HARD_SOLUTION: &str =
        "417369825632158947958724316825437169791586432346912758289643571573291684164875293";

    fn run(variant: Variant, text: &str) -> (Option<Board>, SolveStats) {
        let board = Board::from_text(text).unwrap();
        let topology = Topology::new(variant);
        let propagator = Propagator::with_all_techniques();
        let mut stats = SolveStats::default();
        let solution = search(&propagator, &topology, board, &mut stats);
        (solution, stats)
    }

    #[test]
    fn test_easy_puzzle_needs_no_branching() {
        let (solution, stats) = run(Variant::Standard, EASY);
        assert!(solution.unwrap().is_solved());
        assert_eq!(stats.search.nodes, 1);
        assert_eq!(stats.search.branches, 0);
    }

    #[test]
    fn test_hard_puzzle_reaches_unique_solution() {
        let (solution, stats) = run(Variant::Standard, HARD);
        assert_eq!(solution.unwrap().to_string(), HARD_SOLUTION);
        assert!(stats.search.branches > 0);
        assert!(stats.search.nodes > 1);
    }

    #[test]
    fn test_unsatisfiable_board_returns_none() {
        let text = format!(
            "12345678.{}{}{}",
            ".".repeat(27),
            "........9",
            ".".repeat(36)
        );
        let (solution, stats) = run(Variant::Standard, &text);
        assert_eq!(solution, None);
        assert_eq!(stats.search.nodes, 1);
    }

    #[test]
    fn test_blank_board_finds_some_standard_solution() {
        let (solution, _) = run(Variant::Standard, &".".repeat(81));
        let solution = solution.unwrap();
        assert!(solution.is_solved());

        let topology = Topology::new(Variant::Standard);
        for unit in topology.units() {
            let digits: DigitSet = unit
                .cells()
                .iter()
                .filter_map(|&cell| solution.candidates(cell).as_single())
                .collect();
            assert_eq!(digits, DigitSet::FULL, "unit {unit} is not a permutation");
        }
    }

    #[test]
    fn test_blank_board_finds_some_diagonal_solution() {
        let (solution, _) = run(Variant::Diagonal, &".".repeat(81));
        let solution = solution.unwrap();
        assert!(solution.is_solved());

        let topology = Topology::new(Variant::Diagonal);
        for unit in topology.units() {
            let digits: DigitSet = unit
                .cells()
                .iter()
                .filter_map(|&cell| solution.candidates(cell).as_single())
                .collect();
            assert_eq!(digits, DigitSet::FULL, "unit {unit} is not a permutation");
        }
    }

    #[test]
    fn test_branch_cell_prefers_fewest_candidates() {
        let mut board = Board::new();
        board.set_candidates(Cell::new(5, 5), DigitSet::from_iter([D1, D2, D3]));
        board.set_candidates(Cell::new(7, 2), DigitSet::from_iter([D4, D5]));
        assert_eq!(branch_cell(&board), Some(Cell::new(7, 2)));
    }

    #[test]
    fn test_branch_cell_breaks_ties_in_row_major_order() {
        let mut board = Board::new();
        let pair = DigitSet::from_iter([D1, D2]);
        board.set_candidates(Cell::new(6, 6), pair);
        board.set_candidates(Cell::new(3, 8), pair);
        board.set_candidates(Cell::new(3, 2), pair);
        assert_eq!(branch_cell(&board), Some(Cell::new(3, 2)));
    }

    #[test]
    fn test_branch_cell_ignores_solved_cells() {
        let mut board = Board::new();
        board.assign(Cell::new(0, 0), D9);
        board.set_candidates(Cell::new(8, 8), DigitSet::from_iter([D1, D2]));
        assert_eq!(branch_cell(&board), Some(Cell::new(8, 8)));

        let solved = Board::from_text(
            "123456789456789123789123456231564897564897231897231564312645978645978312978312645",
        )
        .unwrap();
        assert_eq!(branch_cell(&solved), None);
    }
}
