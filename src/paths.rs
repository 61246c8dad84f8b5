//! Centralized path definitions for puzzlebox
//!
//! This module provides a single source of truth for all filesystem paths
//! used by puzzlebox.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.puzzlebox/                 # or $PUZZLEBOX_HOME
//! ├── config.toml               # User preferences
//! └── input/                    # Cached puzzle inputs
//!     ├── 2021/
//!     │   └── 03/
//!     │       └── input
//!     └── 2025/
//!         └── 06/
//!             └── input
//! ```

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that relocates the puzzlebox home directory
pub const HOME_ENV: &str = "PUZZLEBOX_HOME";

/// Home directory name under the user's home
const HOME_DIR: &str = ".puzzlebox";

/// Global config filename
const CONFIG_FILE: &str = "config.toml";

/// Input cache subdirectory
const INPUT_DIR: &str = "input";

/// Cached input filename inside a day directory
const INPUT_FILE: &str = "input";

/// Get the puzzlebox home directory.
///
/// Returns `$PUZZLEBOX_HOME` when set and non-empty, otherwise
/// `~/.puzzlebox/`.
#[must_use]
pub fn home_dir() -> PathBuf {
    match env::var_os(HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(HOME_DIR),
    }
}

/// Get the global config file path.
///
/// Returns `<home>/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    home_dir().join(CONFIG_FILE)
}

/// Get the default input cache directory.
///
/// Returns `<home>/input/`.
#[must_use]
pub fn input_cache_dir() -> PathBuf {
    home_dir().join(INPUT_DIR)
}

/// Get the path of one cached input below `root`.
///
/// Days are zero-padded: `<root>/2021/03/input`.
#[must_use]
pub fn input_file(root: &Path, year: u16, day: u8) -> PathBuf {
    root.join(year.to_string()).join(format!("{day:02}")).join(INPUT_FILE)
}
