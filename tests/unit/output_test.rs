//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use puzzlebox::core::models::BitMatrix;
use puzzlebox::core::services::{life_support, power_consumption};
use puzzlebox::output::{DiagnosticResult, OperationResult, OutputMode, WorksheetResult};

use crate::common::REPORT;

fn diagnostic_result(report: &str) -> DiagnosticResult {
    let matrix = BitMatrix::parse(report).unwrap();
    DiagnosticResult {
        source: "report.txt".to_string(),
        rows: matrix.len(),
        width: matrix.width(),
        power_consumption: power_consumption(&matrix).unwrap(),
        life_support: life_support(&matrix).unwrap(),
    }
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn diagnostic_result_serialization() {
    let json = serde_json::to_value(diagnostic_result(REPORT)).unwrap();

    assert_eq!(json["rows"], 12);
    assert_eq!(json["width"], 5);
    assert_eq!(json["power_consumption"]["gamma"], "10110");
    assert_eq!(json["power_consumption"]["product"], 198);
    assert_eq!(json["power_consumption"]["tied_columns"], serde_json::json!([]));
    assert_eq!(json["life_support"]["oxygen"], "10111");
    assert_eq!(json["life_support"]["co2"], "01010");
    assert_eq!(json["life_support"]["product"], 230);
}

#[test]
fn worksheet_result_serialization() {
    let result = WorksheetResult {
        source: "stdin".to_string(),
        problems: 4,
        rows_total: 4_277_556,
        columns_total: 3_263_827,
    };
    let json = serde_json::to_string(&result).unwrap();

    assert!(json.contains("\"rows_total\":4277556"));
    assert!(json.contains("\"columns_total\":3263827"));
    assert!(json.contains("\"source\":\"stdin\""));
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Stored 2021-03".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
}

// =============================================================================
// Human rendering Tests
// =============================================================================

#[test]
fn diagnostic_human_lists_answers() {
    let text = diagnostic_result(REPORT).human();
    assert!(text.contains("10110 (22)"));
    assert!(text.contains("01001 (9)"));
    assert!(text.contains("198"));
    assert!(text.contains("230"));
    assert!(!text.contains("tied columns"));
}

#[test]
fn diagnostic_human_warns_on_ties() {
    let text = diagnostic_result("10\n01").human();
    assert!(text.contains("tied columns [0, 1]"));
}

#[test]
fn worksheet_human_lists_answers() {
    let result = WorksheetResult {
        source: "stdin".to_string(),
        problems: 4,
        rows_total: 4_277_556,
        columns_total: 3_263_827,
    };
    let text = result.human();
    assert!(text.contains("4 problems"));
    assert!(text.contains("4277556"));
    assert!(text.contains("3263827"));
}
