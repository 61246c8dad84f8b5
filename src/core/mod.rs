//! Core puzzle logic for puzzlebox
//!
//! This module contains pure computation with no I/O dependencies.
//! Callers hand in puzzle text and get back typed results.
//!
//! ## Architecture
//!
//! - `models/` - Validated puzzle inputs (`BitMatrix`, `TextGrid`, `Block`)
//! - `services/` - The puzzle computations over those models

pub mod models;
pub mod services;
