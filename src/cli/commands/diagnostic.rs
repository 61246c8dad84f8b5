//! Diagnostic command - solve a binary diagnostic report

use std::path::Path;

use log::info;
use puzzlebox::config::GlobalConfig;
use puzzlebox::core::models::{BitMatrix, DiagnosticError};
use puzzlebox::core::services::{life_support, power_consumption};
use puzzlebox::input::{self, InputSource, Selector};
use puzzlebox::output::{DiagnosticResult, OutputMode};

/// Compute power consumption and life support rating
pub fn diagnostic(file: Option<&Path>, reject_ties: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::try_load()?;
    let source = InputSource::from_arg(file, Selector::DIAGNOSTIC);
    let puzzle = input::read(&source, &config.input_dir())?;

    let matrix = BitMatrix::parse(&puzzle.text)?;
    info!("diagnostic report: {} rows of {} bits", matrix.len(), matrix.width());

    let power = power_consumption(&matrix)?;
    if (reject_ties || config.diagnostic.reject_ties) && !power.tied_columns.is_empty() {
        return Err(DiagnosticError::TiedColumns {
            columns: power.tied_columns,
        }
        .into());
    }
    let support = life_support(&matrix)?;

    let result = DiagnosticResult {
        source: puzzle.source,
        rows: matrix.len(),
        width: matrix.width(),
        power_consumption: power,
        life_support: support,
    };
    result.render(mode);

    Ok(())
}
