//! Command implementations

mod config;
mod diagnostic;
mod input;
mod worksheet;

pub use config::config;
pub use diagnostic::diagnostic;
pub use input::input;
pub use worksheet::worksheet;
