//! Binary diagnostic report rows
//!
//! A [`BitMatrix`] is the validated form of a diagnostic report: a non-empty
//! list of rows, each made of the characters `0` and `1`, all the same width.
//!
//! # Examples
//!
//! ```
//! use puzzlebox::core::models::BitMatrix;
//!
//! let matrix = BitMatrix::parse("101\n001\n110").unwrap();
//! assert_eq!(matrix.width(), 3);
//! assert_eq!(matrix.len(), 3);
//! assert_eq!(matrix.column_counts().ones(0), 2);
//! ```

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Widest row that still fits a `u64`
pub const MAX_WIDTH: usize = 64;

/// Errors raised while reading or evaluating a diagnostic report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticError {
    /// The report contained no rows
    #[error("diagnostic report is empty")]
    Empty,

    /// A row contained something other than `0` or `1`
    #[error("line {line}, column {column}: expected '0' or '1', found {found:?}")]
    InvalidBit {
        /// 1-indexed line number
        line: usize,
        /// 1-indexed column number
        column: usize,
        /// The offending character
        found: char,
    },

    /// A row's width differs from the first row
    #[error("line {line} has {found} bits, expected {expected}")]
    RaggedRow {
        /// 1-indexed line number
        line: usize,
        /// Width of the first row
        expected: usize,
        /// Width of this row
        found: usize,
    },

    /// Rows are wider than a `u64`
    #[error("rows are {width} bits wide, at most {max} are supported", max = MAX_WIDTH)]
    TooWide {
        /// Width of the rows
        width: usize,
    },

    /// Columns had equal counts of `0` and `1` and ties were rejected
    #[error("tied columns {columns:?} have no most common bit")]
    TiedColumns {
        /// 0-indexed tied columns
        columns: Vec<usize>,
    },

    /// A product did not fit in a `u64`
    #[error("{0} overflows a 64-bit integer")]
    Overflow(String),
}

/// Which bit a filtering search keeps at every column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// Keep the most common bit, `1` on a tie (oxygen generator rating)
    MostCommon,
    /// Keep the least common bit, `0` on a tie (CO2 scrubber rating)
    LeastCommon,
}

impl Rating {
    /// Pick a bit given how many candidates carry `0` and `1`.
    ///
    /// When only one bit value is present it is always selected, whatever
    /// the rating.
    #[must_use]
    pub const fn select(self, zeros: usize, ones: usize) -> char {
        if zeros == 0 {
            return '1';
        }
        if ones == 0 {
            return '0';
        }
        match self {
            Self::MostCommon => {
                if ones >= zeros {
                    '1'
                } else {
                    '0'
                }
            },
            Self::LeastCommon => {
                if zeros <= ones {
                    '0'
                } else {
                    '1'
                }
            },
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MostCommon => write!(f, "most common"),
            Self::LeastCommon => write!(f, "least common"),
        }
    }
}

/// Per-column counts of `0` and `1`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitColumnCounts {
    zeros: Vec<usize>,
    ones: Vec<usize>,
}

impl BitColumnCounts {
    /// Number of columns
    #[must_use]
    pub fn width(&self) -> usize {
        self.ones.len()
    }

    /// Count of `0` in a column
    #[must_use]
    pub fn zeros(&self, column: usize) -> usize {
        self.zeros[column]
    }

    /// Count of `1` in a column
    #[must_use]
    pub fn ones(&self, column: usize) -> usize {
        self.ones[column]
    }

    /// Columns where `0` and `1` occur equally often
    #[must_use]
    pub fn ties(&self) -> Vec<usize> {
        self.zeros
            .iter()
            .zip(&self.ones)
            .enumerate()
            .filter(|(_, (z, o))| z == o)
            .map(|(column, _)| column)
            .collect()
    }

    /// Iterate over `(zeros, ones)` per column
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.zeros.iter().copied().zip(self.ones.iter().copied())
    }
}

/// A validated, rectangular list of binary rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: Vec<String>,
    width: usize,
}

impl BitMatrix {
    /// Parse a report, one row per line.
    ///
    /// Surrounding whitespace on each line is ignored, and blank lines are
    /// skipped.
    pub fn parse(input: &str) -> Result<Self, DiagnosticError> {
        let rows: Vec<(usize, &str)> = input
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();

        let Some(&(_, first)) = rows.first() else {
            return Err(DiagnosticError::Empty);
        };
        let width = first.chars().count();
        if width > MAX_WIDTH {
            return Err(DiagnosticError::TooWide { width });
        }

        for &(line, row) in &rows {
            if let Some((column, found)) = row.chars().enumerate().find(|&(_, c)| !matches!(c, '0' | '1')) {
                return Err(DiagnosticError::InvalidBit {
                    line,
                    column: column + 1,
                    found,
                });
            }
            if row.len() != width {
                return Err(DiagnosticError::RaggedRow {
                    line,
                    expected: width,
                    found: row.len(),
                });
            }
        }

        Ok(Self {
            rows: rows.into_iter().map(|(_, row)| row.to_string()).collect(),
            width,
        })
    }

    /// Build a matrix from already separated rows
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, DiagnosticError> {
        let joined = rows.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join("\n");
        Self::parse(&joined)
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a parsed matrix
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bits per row
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// The rows in input order
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Count `0` and `1` in every column
    #[must_use]
    pub fn column_counts(&self) -> BitColumnCounts {
        let mut counts = BitColumnCounts {
            zeros: vec![0; self.width],
            ones: vec![0; self.width],
        };
        for row in &self.rows {
            for (column, bit) in row.bytes().enumerate() {
                if bit == b'1' {
                    counts.ones[column] += 1;
                } else {
                    counts.zeros[column] += 1;
                }
            }
        }
        counts
    }
}

/// Interpret a string of `0`/`1` as an unsigned integer
pub fn to_value(bits: &str) -> Result<u64, DiagnosticError> {
    if bits.is_empty() {
        return Ok(0);
    }
    u64::from_str_radix(bits, 2).map_err(|_| DiagnosticError::TooWide { width: bits.len() })
}
