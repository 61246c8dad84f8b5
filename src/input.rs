//! Puzzle input store
//!
//! Puzzle text comes from an explicit file, from stdin (`-`), or from the
//! per-user cache keyed by year and day.
//!
//! # Examples
//!
//! ```
//! use puzzlebox::input::{InputSource, Selector};
//!
//! let selector = Selector::new(2021, 3).unwrap();
//! assert_eq!(selector.to_string(), "2021-03");
//!
//! let source = InputSource::from_arg(None, selector);
//! assert_eq!(source, InputSource::Cache(selector));
//! ```

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::paths;

/// Last day of an event
pub const LAST_DAY: u8 = 25;

/// Errors that can occur while locating or reading puzzle input
#[derive(Debug, Error)]
pub enum InputError {
    /// Day outside 1..=25
    #[error("day {0} is not between 1 and {last}", last = LAST_DAY)]
    InvalidDay(u8),

    /// No cached input for the selector
    #[error("no cached input at {}; store one with `puzzlebox input save`", .path.display())]
    NotCached {
        /// Where the input was expected
        path: PathBuf,
    },

    /// IO error reading or writing input
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A puzzle, by year and day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    /// Event year
    pub year: u16,
    /// Day of the event, 1-indexed
    pub day: u8,
}

impl Selector {
    /// Binary Diagnostic puzzle
    pub const DIAGNOSTIC: Self = Self { year: 2021, day: 3 };

    /// Worksheet puzzle
    pub const WORKSHEET: Self = Self { year: 2025, day: 6 };

    /// Create a selector, validating the day
    pub fn new(year: u16, day: u8) -> Result<Self, InputError> {
        if day == 0 || day > LAST_DAY {
            return Err(InputError::InvalidDay(day));
        }
        Ok(Self { year, day })
    }

    /// Path of this puzzle's cached input below `root`
    #[must_use]
    pub fn path_in(&self, root: &Path) -> PathBuf {
        paths::input_file(root, self.year, self.day)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.day)
    }
}

/// Where puzzle text is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
    /// The input cache
    Cache(Selector),
}

impl InputSource {
    /// Interpret an optional CLI path, falling back to the cache
    #[must_use]
    pub fn from_arg(path: Option<&Path>, fallback: Selector) -> Self {
        match path {
            Some(p) if p == Path::new("-") => Self::Stdin,
            Some(p) => Self::File(p.to_path_buf()),
            None => Self::Cache(fallback),
        }
    }
}

/// Puzzle text with a label for where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleInput {
    /// Human-readable origin (path, `stdin`)
    pub source: String,
    /// Normalised text
    pub text: String,
}

/// Read puzzle text from `source`, resolving cache lookups in `cache_root`
pub fn read(source: &InputSource, cache_root: &Path) -> Result<PuzzleInput, InputError> {
    let (label, raw) = match source {
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            ("stdin".to_string(), buf)
        },
        InputSource::File(path) => (path.display().to_string(), fs::read_to_string(path)?),
        InputSource::Cache(selector) => {
            let path = selector.path_in(cache_root);
            if !path.exists() {
                return Err(InputError::NotCached { path });
            }
            let text = fs::read_to_string(&path)?;
            (path.display().to_string(), text)
        },
    };
    debug!("read {} bytes from {label}", raw.len());

    Ok(PuzzleInput {
        source: label,
        text: normalize(&raw),
    })
}

/// Store puzzle text in the cache, returning the written path
pub fn save(selector: Selector, cache_root: &Path, text: &str) -> Result<PathBuf, InputError> {
    let path = selector.path_in(cache_root);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&path, format!("{}\n", normalize(text)))?;
    debug!("stored {selector} at {}", path.display());
    Ok(path)
}

/// Drop trailing line breaks and carriage returns.
///
/// Leading and interior whitespace is kept; worksheets are column sensitive.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").trim_end_matches('\n').to_string()
}
