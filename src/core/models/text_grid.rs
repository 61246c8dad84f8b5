//! Worksheet text grids and the problems read out of them
//!
//! A worksheet lays arithmetic problems side by side. Each problem is a
//! stack of numbers with an operator marker (`*` or `+`) on the last row:
//!
//! ```text
//! 123 328  51 64
//!  45 64  387 23
//!   6 98  215 314
//! *   +   *   +
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// Errors raised while reading or evaluating a worksheet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorksheetError {
    /// The worksheet contained no lines
    #[error("worksheet is empty")]
    Empty,

    /// A block had neither `*` nor `+`
    #[error("block {block} has no operator")]
    MissingOperator {
        /// 1-indexed block number
        block: usize,
    },

    /// A block had both `*` and `+`
    #[error("block {block} has both '*' and '+'")]
    ConflictingOperators {
        /// 1-indexed block number
        block: usize,
    },

    /// The operator row held something other than `*` or `+`
    #[error("unknown operator {found:?}")]
    InvalidOperator {
        /// The offending character
        found: char,
    },

    /// An operand row does not line up with the operator row
    #[error("row {row} has {found} numbers, expected {expected}")]
    OperandCount {
        /// 1-indexed row number
        row: usize,
        /// Number of operators
        expected: usize,
        /// Numbers found on the row
        found: usize,
    },

    /// A digit run does not fit a `u64`
    #[error("number {digits} is too large")]
    NumberTooLarge {
        /// The digit run as written
        digits: String,
    },

    /// A sum or product did not fit a `u64`
    #[error("{0} overflows a 64-bit integer")]
    Overflow(String),
}

/// Reduction applied to the operands of one problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `+`, identity 0
    Add,
    /// `*`, identity 1
    Multiply,
}

impl Operator {
    /// Fold operands, failing on overflow
    pub fn reduce(self, operands: &[u64]) -> Result<u64, WorksheetError> {
        let overflow = || WorksheetError::Overflow(format!("{self} of {operands:?}"));
        match self {
            Self::Add => operands
                .iter()
                .try_fold(0_u64, |acc, &n| acc.checked_add(n))
                .ok_or_else(overflow),
            Self::Multiply => operands
                .iter()
                .try_fold(1_u64, |acc, &n| acc.checked_mul(n))
                .ok_or_else(overflow),
        }
    }

    /// The marker character
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Multiply => '*',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = WorksheetError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            '*' => Ok(Self::Multiply),
            found => Err(WorksheetError::InvalidOperator { found }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "sum"),
            Self::Multiply => write!(f, "product"),
        }
    }
}

/// An ordered list of text lines, possibly ragged
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextGrid {
    lines: Vec<String>,
}

impl TextGrid {
    /// Split text into lines, keeping interior and leading whitespace
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Build a grid from lines
    #[must_use]
    pub const fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// The lines in order
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Length of the longest line, in characters
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines.iter().map(|l| l.chars().count()).max().unwrap_or(0)
    }

    /// Insert an empty line before the last one.
    ///
    /// Does nothing on an empty grid.
    pub fn insert_separator(&mut self) {
        if let Some(last) = self.lines.len().checked_sub(1) {
            self.lines.insert(last, String::new());
        }
    }

    /// Right-pad every line with spaces to the longest line's width
    pub fn pad(&mut self) {
        let width = self.width();
        for line in &mut self.lines {
            let missing = width - line.chars().count();
            line.extend(std::iter::repeat_n(' ', missing));
        }
    }

    /// Read columns as lines, top to bottom, trailing whitespace removed.
    ///
    /// Short lines read as spaces, so a ragged grid loses nothing.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let width = self.width();
        let rows: Vec<Vec<char>> = self.lines.iter().map(|l| l.chars().collect()).collect();
        let lines = (0..width)
            .map(|column| {
                let read: String = rows.iter().map(|row| row.get(column).copied().unwrap_or(' ')).collect();
                read.trim_end().to_string()
            })
            .collect();
        Self { lines }
    }

    /// Split the grid at blank lines into non-empty blocks
    #[must_use]
    pub fn blocks(&self) -> Vec<Block> {
        self.lines
            .split(|line| line.trim().is_empty())
            .filter(|group| !group.is_empty())
            .map(|group| Block {
                lines: group.to_vec(),
            })
            .collect()
    }
}

impl fmt::Display for TextGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// A run of transposed lines holding one problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
}

impl Block {
    /// The block's lines
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Every maximal digit run, in reading order
    pub fn operands(&self) -> Result<Vec<u64>, WorksheetError> {
        self.lines.iter().flat_map(|line| parse_numbers(line)).collect()
    }

    /// The block's operator marker.
    ///
    /// `index` is the 1-indexed block number used in errors.
    pub fn operator(&self, index: usize) -> Result<Operator, WorksheetError> {
        let has = |c: char| self.lines.iter().any(|line| line.contains(c));
        match (has('*'), has('+')) {
            (true, false) => Ok(Operator::Multiply),
            (false, true) => Ok(Operator::Add),
            (true, true) => Err(WorksheetError::ConflictingOperators { block: index }),
            (false, false) => Err(WorksheetError::MissingOperator { block: index }),
        }
    }
}

/// Extract every maximal digit run in `line` as a number
pub fn parse_numbers(line: &str) -> impl Iterator<Item = Result<u64, WorksheetError>> + '_ {
    DIGIT_RUN.find_iter(line).map(|m| {
        m.as_str().parse::<u64>().map_err(|_| WorksheetError::NumberTooLarge {
            digits: m.as_str().to_string(),
        })
    })
}
