//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::config::GlobalConfig;
use crate::core::services::{LifeSupport, PowerConsumption};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Answers for a binary diagnostic report
#[derive(Debug, Serialize)]
pub struct DiagnosticResult {
    /// Where the report was read from
    pub source: String,
    /// Number of rows in the report
    pub rows: usize,
    /// Bits per row
    pub width: usize,
    /// Gamma/epsilon reading
    pub power_consumption: PowerConsumption,
    /// Oxygen/CO2 reading
    pub life_support: LifeSupport,
}

/// Answers for a worksheet
#[derive(Debug, Serialize)]
pub struct WorksheetResult {
    /// Where the worksheet was read from
    pub source: String,
    /// Number of problems on the worksheet
    pub problems: usize,
    /// Grand total reading numbers across rows
    pub rows_total: u64,
    /// Grand total reading numbers down columns
    pub columns_total: u64,
}

/// The effective configuration and where it lives
#[derive(Debug, Serialize)]
pub struct ConfigResult {
    /// Config file path
    pub path: String,
    /// Whether the file exists
    pub exists: bool,
    /// Effective configuration
    pub config: GlobalConfig,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl DiagnosticResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn human(&self) -> String {
        let power = &self.power_consumption;
        let support = &self.life_support;
        let mut out = format!(
            "Binary diagnostic: {} ({} rows x {} bits)\n\n",
            self.source.dimmed(),
            self.rows,
            self.width
        );

        out.push_str(&format!("{}\n", "Power consumption".cyan().bold()));
        out.push_str(&format!("  gamma    {} ({})\n", power.gamma, power.gamma_value));
        out.push_str(&format!("  epsilon  {} ({})\n", power.epsilon, power.epsilon_value));
        if !power.tied_columns.is_empty() {
            out.push_str(&format!(
                "  {} tied columns {:?} count as 0 in both rates\n",
                "Warning:".yellow().bold(),
                power.tied_columns
            ));
        }
        out.push_str(&format!("  part_1 => {}\n\n", power.product.to_string().green().bold()));

        out.push_str(&format!("{}\n", "Life support".cyan().bold()));
        out.push_str(&format!("  oxygen   {} ({})\n", support.oxygen, support.oxygen_value));
        out.push_str(&format!("  co2      {} ({})\n", support.co2, support.co2_value));
        out.push_str(&format!("  part_2 => {}\n", support.product.to_string().green().bold()));
        out
    }
}

impl WorksheetResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn human(&self) -> String {
        format!(
            "Worksheet: {} ({} problems)\n\n  part_1 => {}\n  part_2 => {}\n",
            self.source.dimmed(),
            self.problems,
            self.rows_total.to_string().green().bold(),
            self.columns_total.to_string().green().bold()
        )
    }
}

impl ConfigResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let state = if self.exists { "" } else { " (not created, showing defaults)" };
                println!("# {}{}", self.path, state);
                println!("{}", toml::to_string_pretty(&self.config).unwrap_or_default());
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
