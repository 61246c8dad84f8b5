//! Binary diagnostic service
//!
//! Two readings of a [`BitMatrix`]:
//!
//! - [`power_consumption`] - gamma and epsilon rates from column majorities
//! - [`life_support`] - oxygen and CO2 ratings from [`search`]

use log::{debug, warn};
use serde::Serialize;

use crate::core::models::{BitMatrix, DiagnosticError, Rating, to_value};

/// Gamma and epsilon rates and their product
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PowerConsumption {
    /// Most common bit per column, `0` on ties
    pub gamma: String,
    /// Least common bit per column, `0` on ties
    pub epsilon: String,
    /// `gamma` as an integer
    pub gamma_value: u64,
    /// `epsilon` as an integer
    pub epsilon_value: u64,
    /// `gamma_value * epsilon_value`
    pub product: u64,
    /// 0-indexed columns where `0` and `1` were equally common
    pub tied_columns: Vec<usize>,
}

/// Oxygen generator and CO2 scrubber ratings and their product
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifeSupport {
    /// Survivor of the most-common-bit search
    pub oxygen: String,
    /// Survivor of the least-common-bit search
    pub co2: String,
    /// `oxygen` as an integer
    pub oxygen_value: u64,
    /// `co2` as an integer
    pub co2_value: u64,
    /// `oxygen_value * co2_value`
    pub product: u64,
}

/// Compute gamma and epsilon rates.
///
/// A tied column contributes `0` to both rates. The tie is kept, logged and
/// listed in [`PowerConsumption::tied_columns`].
pub fn power_consumption(matrix: &BitMatrix) -> Result<PowerConsumption, DiagnosticError> {
    let counts = matrix.column_counts();

    let gamma: String = counts.iter().map(|(zeros, ones)| if ones > zeros { '1' } else { '0' }).collect();
    let epsilon: String = counts.iter().map(|(zeros, ones)| if ones < zeros { '1' } else { '0' }).collect();

    let tied_columns = counts.ties();
    if !tied_columns.is_empty() {
        warn!("columns {tied_columns:?} are tied; gamma and epsilon both take 0 there");
    }

    let gamma_value = to_value(&gamma)?;
    let epsilon_value = to_value(&epsilon)?;
    debug!("gamma={gamma} ({gamma_value}) epsilon={epsilon} ({epsilon_value})");

    let product = gamma_value
        .checked_mul(epsilon_value)
        .ok_or_else(|| DiagnosticError::Overflow(format!("{gamma_value} * {epsilon_value}")))?;

    Ok(PowerConsumption {
        gamma,
        epsilon,
        gamma_value,
        epsilon_value,
        product,
        tied_columns,
    })
}

/// Filter rows column by column until one remains.
///
/// At each column the candidates are counted, [`Rating::select`] picks a
/// bit, and only candidates carrying that bit survive. The selected bits
/// spell out the surviving row.
#[must_use]
pub fn search(matrix: &BitMatrix, rating: Rating) -> String {
    let width = matrix.width();
    let mut candidates: Vec<&[u8]> = matrix.rows().iter().map(String::as_bytes).collect();
    let mut selected_bits = String::with_capacity(width);
    let mut column = 0;

    while !candidates.is_empty() && column < width {
        if let [only] = candidates.as_slice() {
            debug!("{rating}: one candidate left at column {column}");
            selected_bits.extend(only[column..].iter().map(|&b| char::from(b)));
            break;
        }

        let ones = candidates.iter().filter(|row| row[column] == b'1').count();
        let zeros = candidates.len() - ones;
        let selected = rating.select(zeros, ones);
        selected_bits.push(selected);

        let keep = if selected == '1' { b'1' } else { b'0' };
        candidates.retain(|row| row[column] == keep);
        debug!("{rating}: column {column} kept '{selected}', {} candidate(s) left", candidates.len());
        column += 1;
    }

    selected_bits
}

/// Run both searches and combine the ratings
pub fn life_support(matrix: &BitMatrix) -> Result<LifeSupport, DiagnosticError> {
    let oxygen = search(matrix, Rating::MostCommon);
    let co2 = search(matrix, Rating::LeastCommon);

    let oxygen_value = to_value(&oxygen)?;
    let co2_value = to_value(&co2)?;

    let product = oxygen_value
        .checked_mul(co2_value)
        .ok_or_else(|| DiagnosticError::Overflow(format!("{oxygen_value} * {co2_value}")))?;

    Ok(LifeSupport {
        oxygen,
        co2,
        oxygen_value,
        co2_value,
        product,
    })
}
