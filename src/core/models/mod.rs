//! Domain models for puzzlebox
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`BitMatrix`] - Rows of a binary diagnostic report
//! - [`BitColumnCounts`] - How often each bit occurs per column
//! - [`Rating`] - Which bit a filtering search keeps
//! - [`TextGrid`] - Worksheet lines, padded and transposed
//! - [`Block`] - One worksheet problem after transposition
//! - [`Operator`] - How a problem's operands are combined

mod bit_matrix;
mod text_grid;

pub use bit_matrix::{BitColumnCounts, BitMatrix, DiagnosticError, MAX_WIDTH, Rating, to_value};
pub use text_grid::{Block, Operator, TextGrid, WorksheetError, parse_numbers};
