//! Property-based tests for the puzzle services
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use puzzlebox::core::models::{BitMatrix, Rating};
use puzzlebox::core::services::{flip_input, pad_lines, power_consumption, search};

/// Rows of `width` bits; an odd row count rules out tied columns
fn odd_report() -> impl Strategy<Value = Vec<String>> {
    (1_usize..=12).prop_flat_map(|width| {
        (0_usize..8).prop_flat_map(move |half| {
            prop::collection::vec(prop::collection::vec(prop::bool::ANY, width), half * 2 + 1)
        })
    })
    .prop_map(|rows| {
        rows.into_iter()
            .map(|bits| bits.into_iter().map(|b| if b { '1' } else { '0' }).collect())
            .collect()
    })
}

/// Any non-empty rectangular report
fn any_report() -> impl Strategy<Value = Vec<String>> {
    (1_usize..=10).prop_flat_map(|width| prop::collection::vec(prop::collection::vec("[01]", width), 1..20))
        .prop_map(|rows| rows.into_iter().map(|bits| bits.concat()).collect())
}

proptest! {
    /// Without ties gamma and epsilon are bitwise complements
    #[test]
    fn gamma_epsilon_complement(rows in odd_report()) {
        let matrix = BitMatrix::from_rows(&rows).unwrap();
        let power = power_consumption(&matrix).unwrap();
        prop_assert!(power.tied_columns.is_empty());
        let mask = (1_u64 << matrix.width()) - 1;
        prop_assert_eq!(power.gamma_value ^ power.epsilon_value, mask);
    }

    /// Both searches return one of the input rows
    #[test]
    fn search_returns_member(rows in any_report()) {
        let matrix = BitMatrix::from_rows(&rows).unwrap();
        for rating in [Rating::MostCommon, Rating::LeastCommon] {
            let survivor = search(&matrix, rating);
            prop_assert_eq!(survivor.len(), matrix.width());
            prop_assert!(rows.contains(&survivor), "{} not in {:?}", survivor, rows);
        }
    }

    /// Transposing twice restores the padded grid up to trailing whitespace
    #[test]
    fn double_flip_round_trip(lines in prop::collection::vec("[0-9*+ ]{0,12}", 1..8)) {
        let text = lines.join("\n");
        let padded = pad_lines(&text);
        let restored = flip_input(&flip_input(&padded));

        let expected: Vec<&str> = padded.lines().map(str::trim_end).collect();
        let mut actual: Vec<&str> = restored.lines().map(str::trim_end).collect();
        // Rows that were entirely blank at the bottom vanish in the first flip
        actual.resize(expected.len(), "");
        prop_assert_eq!(actual, expected);
    }

    /// Padding never changes line count and makes every line equally wide
    #[test]
    fn pad_lines_uniform(lines in prop::collection::vec("[a-z ]{1,10}", 1..8)) {
        let text = lines.join("\n");
        let padded = pad_lines(&text);
        let widths: Vec<usize> = padded.lines().map(|l| l.chars().count()).collect();
        prop_assert_eq!(widths.len(), text.lines().count());
        prop_assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
