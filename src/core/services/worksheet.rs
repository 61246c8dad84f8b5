//! Worksheet service
//!
//! A worksheet can be read two ways:
//!
//! - [`evaluate_rows`] - each problem's numbers are written across the rows
//! - [`evaluate`] - each number is written down a column, so the grid is
//!   transposed first and every column group becomes one [`Block`]
//!
//! [`Block`]: crate::core::models::Block

use log::debug;

use crate::core::models::{Operator, TextGrid, WorksheetError, parse_numbers};

/// Right-pad every line to the longest line's width.
#[must_use]
pub fn pad_lines(text: &str) -> String {
    let mut grid = TextGrid::parse(text);
    grid.pad();
    grid.to_string()
}

/// Transpose a text grid: line `i` of the output is column `i` of the
/// input read top to bottom, with trailing whitespace removed.
#[must_use]
pub fn flip_input(text: &str) -> String {
    TextGrid::parse(text).transpose().to_string()
}

/// Total a worksheet whose numbers are written down columns.
///
/// A blank line is inserted above the operator row so that an operator never
/// touches a digit once transposed, then every block of the transposed grid
/// is reduced with its operator and the results summed.
pub fn evaluate(text: &str) -> Result<u64, WorksheetError> {
    let mut grid = TextGrid::parse(text.trim_end());
    if grid.height() == 0 {
        return Err(WorksheetError::Empty);
    }
    grid.insert_separator();
    grid.pad();

    let mut total = 0_u64;
    for (idx, block) in grid.transpose().blocks().iter().enumerate() {
        let index = idx + 1;
        let operator = block.operator(index)?;
        let operands = block.operands()?;
        let value = operator.reduce(&operands)?;
        debug!("block {index}: {operator} of {operands:?} = {value}");

        total = total
            .checked_add(value)
            .ok_or_else(|| WorksheetError::Overflow(format!("total {total} + {value}")))?;
    }

    Ok(total)
}

/// Total a worksheet whose numbers are written across rows.
///
/// The last non-blank line holds one operator per problem; every other line
/// holds one number per problem.
pub fn evaluate_rows(text: &str) -> Result<u64, WorksheetError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty()).rev();
    let operator_row = lines.next().ok_or(WorksheetError::Empty)?;
    let operators = operator_row
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Operator::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let rows = lines
        .rev()
        .map(|line| parse_numbers(line).collect::<Result<Vec<_>, _>>())
        .collect::<Result<Vec<_>, _>>()?;

    for (idx, row) in rows.iter().enumerate() {
        if row.len() != operators.len() {
            return Err(WorksheetError::OperandCount {
                row: idx + 1,
                expected: operators.len(),
                found: row.len(),
            });
        }
    }

    let mut total = 0_u64;
    for (idx, operator) in operators.iter().enumerate() {
        let operands: Vec<u64> = rows.iter().map(|row| row[idx]).collect();
        let value = operator.reduce(&operands)?;
        debug!("problem {}: {operator} of {operands:?} = {value}", idx + 1);

        total = total
            .checked_add(value)
            .ok_or_else(|| WorksheetError::Overflow(format!("total {total} + {value}")))?;
    }

    Ok(total)
}

/// Number of operator markers on the last non-blank line
#[must_use]
pub fn count_problems(text: &str) -> usize {
    text.lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .map_or(0, |row| row.chars().filter(|&c| matches!(c, '*' | '+')).count())
}
