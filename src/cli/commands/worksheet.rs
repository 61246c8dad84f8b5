//! Worksheet command - total a worksheet both ways

use std::path::Path;

use puzzlebox::config::GlobalConfig;
use puzzlebox::core::services::worksheet::{count_problems, evaluate, evaluate_rows};
use puzzlebox::input::{self, InputSource, Selector};
use puzzlebox::output::{OutputMode, WorksheetResult};

/// Total a worksheet read across rows and down columns
pub fn worksheet(file: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::try_load()?;
    let source = InputSource::from_arg(file, Selector::WORKSHEET);
    let puzzle = input::read(&source, &config.input_dir())?;

    let result = WorksheetResult {
        source: puzzle.source,
        problems: count_problems(&puzzle.text),
        rows_total: evaluate_rows(&puzzle.text)?,
        columns_total: evaluate(&puzzle.text)?,
    };
    result.render(mode);

    Ok(())
}
