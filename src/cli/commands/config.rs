//! Config command - inspect the configuration

use puzzlebox::config::GlobalConfig;
use puzzlebox::output::{ConfigResult, OperationResult, OutputMode};

use crate::cli::app::ConfigAction;

/// Show the configuration or where it lives
pub fn config(action: &ConfigAction, mode: OutputMode) -> anyhow::Result<()> {
    let path = GlobalConfig::config_path();

    match action {
        ConfigAction::Show => {
            let result = ConfigResult {
                exists: path.exists(),
                config: GlobalConfig::try_load()?,
                path: path.display().to_string(),
            };
            result.render(mode);
        },
        ConfigAction::Path => {
            let result = OperationResult {
                success: true,
                message: path.display().to_string(),
            };
            result.render(mode);
        },
    }

    Ok(())
}
