//! Tests for the worksheet service

use puzzlebox::core::models::{Operator, TextGrid, WorksheetError};
use puzzlebox::core::services::{count_problems, evaluate, evaluate_rows, flip_input, pad_lines};

use crate::common::WORKSHEET;

// =============================================================================
// Padding and transposition
// =============================================================================

#[test]
fn test_pad_lines_uniform_width() {
    let padded = pad_lines("abc\nd\nef");
    assert_eq!(padded, "abc\nd  \nef ");
    assert!(padded.lines().all(|line| line.len() == 3));
}

#[test]
fn test_pad_lines_counts_characters_not_bytes() {
    assert_eq!(pad_lines("é\nab"), "é \nab");
}

#[test]
fn test_flip_input_transposes() {
    assert_eq!(flip_input("abc\ndef"), "ad\nbe\ncf");
}

#[test]
fn test_flip_input_blank_column_becomes_empty_line() {
    assert_eq!(flip_input("1 2\n3 4"), "13\n\n24");
}

#[test]
fn test_flip_input_ragged_input_keeps_characters() {
    assert_eq!(flip_input("ab\nc"), "ac\nb");
}

#[test]
fn test_double_flip_restores_padded_grid() {
    let padded = pad_lines(WORKSHEET);
    let restored = pad_lines(&flip_input(&flip_input(&padded)));
    let expected: Vec<&str> = padded.lines().map(str::trim_end).collect();
    let actual: Vec<&str> = restored.lines().map(str::trim_end).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_transposed_blocks_of_example() {
    let mut grid = TextGrid::parse(WORKSHEET);
    grid.insert_separator();
    grid.pad();
    let blocks = grid.transpose().blocks();

    assert_eq!(blocks.len(), 4);
    assert_eq!(blocks[0].lines(), ["1   *", "24", "356"]);
    assert_eq!(blocks[0].operands().unwrap(), vec![1, 24, 356]);
    assert_eq!(blocks[0].operator(1).unwrap(), Operator::Multiply);
    assert_eq!(blocks[3].operands().unwrap(), vec![623, 431, 4]);
    assert_eq!(blocks[3].operator(4).unwrap(), Operator::Add);
}

// =============================================================================
// Evaluation
// =============================================================================

#[test]
fn test_evaluate_rows_example() {
    // (123*45*6) + (328+64+98) + (51*387*215) + (64+23+314)
    assert_eq!(evaluate_rows(WORKSHEET).unwrap(), 33_210 + 490 + 4_243_455 + 401);
    assert_eq!(evaluate_rows(WORKSHEET).unwrap(), 4_277_556);
}

#[test]
fn test_evaluate_columns_example() {
    // (1*24*356) + (369+248+8) + (32*581*175) + (623+431+4)
    assert_eq!(evaluate(WORKSHEET).unwrap(), 8_544 + 625 + 3_253_600 + 1_058);
    assert_eq!(evaluate(WORKSHEET).unwrap(), 3_263_827);
}

#[test]
fn test_evaluate_ignores_trailing_blank_lines() {
    let text = format!("{WORKSHEET}\n\n   \n");
    assert_eq!(evaluate(&text).unwrap(), 3_263_827);
    assert_eq!(evaluate_rows(&text).unwrap(), 4_277_556);
}

#[test]
fn test_evaluate_single_problem() {
    assert_eq!(evaluate("12\n34\n+").unwrap(), 13 + 24);
    assert_eq!(evaluate_rows("12\n34\n+").unwrap(), 46);
}

#[test]
fn test_count_problems() {
    assert_eq!(count_problems(WORKSHEET), 4);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_evaluate_empty() {
    assert_eq!(evaluate(""), Err(WorksheetError::Empty));
    assert_eq!(evaluate_rows(""), Err(WorksheetError::Empty));
}

#[test]
fn test_evaluate_missing_operator() {
    assert_eq!(evaluate("1 2\n3 4\n*"), Err(WorksheetError::MissingOperator { block: 2 }));
}

#[test]
fn test_evaluate_conflicting_operators() {
    assert_eq!(evaluate("12\n34\n*+"), Err(WorksheetError::ConflictingOperators { block: 1 }));
}

#[test]
fn test_evaluate_rows_invalid_operator() {
    assert_eq!(evaluate_rows("1 2\n- +"), Err(WorksheetError::InvalidOperator { found: '-' }));
}

#[test]
fn test_evaluate_rows_operand_count_mismatch() {
    assert_eq!(
        evaluate_rows("1 2\n3\n* +"),
        Err(WorksheetError::OperandCount {
            row: 2,
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn test_number_too_large() {
    let err = evaluate_rows("99999999999999999999\n+").unwrap_err();
    assert!(matches!(err, WorksheetError::NumberTooLarge { .. }));
}

#[test]
fn test_total_overflow() {
    let big = u64::MAX.to_string();
    let err = evaluate_rows(&format!("{big} 1\n+ +")).unwrap_err();
    assert!(matches!(err, WorksheetError::Overflow(_)));
}
