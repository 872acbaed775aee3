//! Core data structures for the xdoku solver.
//!
//! This crate provides the board data model shared by everything that solves
//! or displays a puzzle:
//!
//! - [`digit`]: type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: the candidate set of a single cell, a 9-bit mask
//! - [`cell`]: board positions in row-major order, plus 81-bit cell sets
//! - [`board`]: the 81-cell candidate board and its text format
//!
//! # Examples
//!
//! ```
//! use xdoku_core::{Board, Cell, Digit};
//!
//! let text = "123456789".repeat(9);
//! let board = Board::from_text(&text)?;
//!
//! assert!(board.is_solved());
//! assert_eq!(
//!     board.candidates(Cell::new(0, 4)).as_single(),
//!     Some(Digit::D5)
//! );
//! # Ok::<(), xdoku_core::ParseBoardError>(())
//! ```

pub mod board;
pub mod cell;
pub mod digit;
pub mod digit_set;

pub use self::{
    board::{Board, ParseBoardError},
    cell::{Cell, CellSet},
    digit::Digit,
    digit_set::DigitSet,
};
