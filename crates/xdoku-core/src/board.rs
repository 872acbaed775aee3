//! The 81-cell candidate board and its text format.
//!
//! A [`Board`] maps every cell to the set of digits still possible for it.
//! Boards are created from 81-character puzzle strings and transformed only
//! through the operations below; the fixed-size representation makes cloning
//! a board cheap, which is what backtracking search relies on to give every
//! branch its own private copy.

use std::{fmt, str::FromStr};

use crate::{
    cell::{Cell, CellSet},
    digit::Digit,
    digit_set::DigitSet,
};

/// Error parsing an 81-character puzzle string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The input was not exactly 81 characters long.
    #[display("puzzle text must be exactly 81 characters, got {len}")]
    InvalidLength {
        /// Length of the rejected input, in characters.
        len: usize,
    },
    /// The input contained a character outside `.` and `1`-`9`.
    #[display("invalid character {ch:?} at position {index}")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
        /// Zero-based position of the rejected character.
        index: usize,
    },
}

/// A total mapping from every cell to its current candidate set.
///
/// Fixed digits are singleton sets; blank cells start with all nine
/// candidates. A cell whose set becomes empty signals a contradiction, which
/// the solver checks for explicitly; the board itself never rejects the
/// state.
///
/// # Examples
///
/// ```
/// use xdoku_core::{Board, Cell, Digit};
///
/// let text = format!("5{}", ".".repeat(80));
/// let board = Board::from_text(&text)?;
///
/// assert_eq!(board.candidates(Cell::new(0, 0)).as_single(), Some(Digit::D5));
/// assert_eq!(board.candidates(Cell::new(0, 1)).len(), 9);
/// assert_eq!(board.solved_count(), 1);
/// # Ok::<(), xdoku_core::ParseBoardError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [DigitSet; Cell::COUNT],
}

impl Board {
    /// Creates a board where every cell admits all nine digits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; Cell::COUNT],
        }
    }

    /// Parses an 81-character puzzle string in row-major order.
    ///
    /// `'.'` marks a blank cell (all nine candidates); `'1'`-`'9'` fix the
    /// cell to that digit. No other characters, separators, or whitespace are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError::InvalidLength`] if the input is not exactly
    /// 81 characters, or [`ParseBoardError::InvalidCharacter`] for the first
    /// character outside the alphabet.
    pub fn from_text(text: &str) -> Result<Self, ParseBoardError> {
        let len = text.chars().count();
        if len != Cell::COUNT {
            return Err(ParseBoardError::InvalidLength { len });
        }
        let mut board = Self::new();
        for (index, ch) in text.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let digit = Digit::from_char(ch)
                .ok_or(ParseBoardError::InvalidCharacter { ch, index })?;
            board.cells[index] = DigitSet::from_elem(digit);
        }
        Ok(board)
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub const fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Replaces the candidate set of a cell.
    pub fn set_candidates(&mut self, cell: Cell, candidates: DigitSet) {
        self.cells[cell.index()] = candidates;
    }

    /// Collapses a cell to a single digit.
    pub fn assign(&mut self, cell: Cell, digit: Digit) {
        self.cells[cell.index()] = DigitSet::from_elem(digit);
    }

    /// Removes one candidate from a cell. Returns `true` if it was present.
    ///
    /// Removing the last candidate is allowed and leaves the cell's set
    /// empty; the caller detects that through [`contradicted_cell`].
    ///
    /// [`contradicted_cell`]: Self::contradicted_cell
    pub fn remove_candidate(&mut self, cell: Cell, digit: Digit) -> bool {
        self.cells[cell.index()].remove(digit)
    }

    /// Returns the set of cells whose candidate set is a singleton.
    #[must_use]
    pub fn solved_cells(&self) -> CellSet {
        Cell::all()
            .filter(|&cell| self.candidates(cell).len() == 1)
            .collect()
    }

    /// Returns the number of solved (singleton) cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|set| set.len() == 1).count()
    }

    /// Returns `true` if every cell is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|set| set.len() == 1)
    }

    /// Returns the first cell (in row-major order) whose candidate set is
    /// empty, or `None` if no cell is contradicted.
    #[must_use]
    pub fn contradicted_cell(&self) -> Option<Cell> {
        Cell::all().find(|&cell| self.candidates(cell).is_empty())
    }

    /// Renders the board as nine rows of nine characters, with a space
    /// between 3-column groups. Unsolved cells print as `.`.
    ///
    /// This is the quick terminal form for demos and debugging; per-cell
    /// candidate detail is available through [`candidates`] and
    /// [`DigitSet`]'s `Display`.
    ///
    /// [`candidates`]: Self::candidates
    #[must_use]
    pub fn to_grid_string(&self) -> String {
        let mut out = String::with_capacity(9 * 12);
        for row in 0..9 {
            for col in 0..9 {
                out.push(self.cell_char(Cell::new(row, col)));
                if col == 2 || col == 5 {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }

    fn cell_char(&self, cell: Cell) -> char {
        match self.candidates(cell).as_single() {
            Some(digit) => digit.to_char(),
            None => '.',
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, ParseBoardError> {
        Self::from_text(s)
    }
}

impl fmt::Display for Board {
    /// Formats the board as the 81-character line form: solved cells print
    /// their digit, everything else prints `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in Cell::all() {
            write!(f, "{}", self.cell_char(cell))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({self})")
    }
}
