//! Puzzle services
//!
//! Pure computations over domain models. These services have no I/O
//! dependencies - they operate on text or models passed in and return
//! results.
//!
//! - [`diagnostic`] - Power consumption and life support ratings
//! - [`worksheet`] - Grid transposition and worksheet totals

pub mod diagnostic;
pub mod worksheet;

pub use diagnostic::{LifeSupport, PowerConsumption, life_support, power_consumption, search};
pub use worksheet::{count_problems, evaluate, evaluate_rows, flip_input, pad_lines};
