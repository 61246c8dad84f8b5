//! Input command - manage cached puzzle inputs

use puzzlebox::config::GlobalConfig;
use puzzlebox::input::{self, InputSource, Selector};
use puzzlebox::output::{OperationResult, OutputMode};

use crate::cli::app::InputAction;

/// Dispatch an input subcommand
pub fn input(action: InputAction, mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::try_load()?;
    let cache = config.input_dir();

    match action {
        InputAction::Path { year, day } => {
            let selector = Selector::new(year, day)?;
            let result = OperationResult {
                success: true,
                message: selector.path_in(&cache).display().to_string(),
            };
            result.render(mode);
        },
        InputAction::Show { year, day } => {
            let selector = Selector::new(year, day)?;
            let puzzle = input::read(&InputSource::Cache(selector), &cache)?;
            let result = OperationResult {
                success: true,
                message: puzzle.text,
            };
            result.render(mode);
        },
        InputAction::Save { year, day, file } => {
            let selector = Selector::new(year, day)?;
            let puzzle = input::read(&InputSource::from_arg(Some(file.as_path()), selector), &cache)?;
            let path = input::save(selector, &cache, &puzzle.text)?;
            let result = OperationResult {
                success: true,
                message: format!("Stored {selector} at {}", path.display()),
            };
            result.render(mode);
        },
    }

    Ok(())
}
