//! Side-by-side comparison of every strategy against the direct formula
//!
//! A disagreement beyond tolerance is a correctness bug: [`Comparison::verify`]
//! reports it as [`DctError::NumericalMismatch`] and nothing retries.

use crate::CompareOptions;
use dctfft_core::consts::MAX_DIGITS;
use dctfft_core::{
    allclose, first_mismatch, max_abs_error, root_mean_squared_error, round_to_digits, DctError, DctResult,
    Sequence,
};
use dctfft_transform::{dct2_direct, Dct2Plan, Strategy};
use rayon::prelude::*;
use std::fmt;

const DIRECT_LABEL: &str = "direct";

/// One strategy's result and its distance from the direct result
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyRow {
    pub strategy: Strategy,
    pub values: Vec<f64>,
    pub max_abs_error: f64,
    pub rmse: f64,
}

/// The direct result and every strategy's result for one input
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub input: Vec<f64>,
    pub direct: Vec<f64>,
    pub rows: Vec<StrategyRow>,
    pub options: CompareOptions,
}

/// Run the direct formula and all strategies on `input`
pub fn compare_strategies(input: &[f64], options: &CompareOptions) -> DctResult<Comparison> {
    options.validate()?;
    let sequence = Sequence::from_slice(input)?;
    let direct = dct2_direct(sequence.as_slice())?;

    let rows = Strategy::ALL
        .iter()
        .map(|&strategy| -> DctResult<StrategyRow> {
            let plan = Dct2Plan::with_backend(strategy, sequence.len(), options.backend)?;
            let values = plan.process(&sequence)?;
            Ok(StrategyRow {
                strategy,
                max_abs_error: max_abs_error(&direct, &values)?,
                rmse: root_mean_squared_error(&direct, &values)?,
                values,
            })
        })
        .collect::<DctResult<Vec<_>>>()?;

    Ok(Comparison {
        input: sequence.into_inner(),
        direct,
        rows,
        options: options.clone(),
    })
}

/// Compare all strategies on the ramp `1..=len` for every length, in parallel
///
/// Results come back in the order of `lengths`.
pub fn sweep(lengths: &[usize], options: &CompareOptions) -> DctResult<Vec<Comparison>> {
    options.validate()?;
    tracing::debug!(count = lengths.len(), backend = %options.backend, "sweeping lengths");
    lengths
        .par_iter()
        .map(|&len| {
            let ramp = Sequence::<f64>::ramp(len)?;
            compare_strategies(&ramp, options)
        })
        .collect()
}

impl Comparison {
    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn row(&self, strategy: Strategy) -> Option<&StrategyRow> {
        self.rows.iter().find(|row| row.strategy == strategy)
    }

    /// Largest error of any strategy against the direct result
    pub fn worst_error(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.max_abs_error)
            .fold(0.0, f64::max)
    }

    /// `values` rounded to the configured number of digits
    pub fn rounded(&self, values: &[f64]) -> DctResult<Vec<f64>> {
        values
            .iter()
            .map(|&v| round_to_digits(v, self.options.digits))
            .collect()
    }

    /// Fail on the first element outside tolerance
    ///
    /// Every strategy is checked against the direct result, then, with
    /// `cross_validate`, every pair of strategies against each other.
    pub fn verify(&self) -> DctResult<()> {
        let tolerance = self.options.tolerance;

        for row in &self.rows {
            check(row.strategy.name(), DIRECT_LABEL, &row.values, &self.direct, tolerance)?;
        }

        if self.options.cross_validate {
            for (i, lhs) in self.rows.iter().enumerate() {
                for rhs in &self.rows[i + 1..] {
                    check(
                        rhs.strategy.name(),
                        lhs.strategy.name(),
                        &rhs.values,
                        &lhs.values,
                        tolerance,
                    )?;
                }
            }
        }

        Ok(())
    }
}

fn check(
    subject: &str,
    reference: &str,
    actual: &[f64],
    expected: &[f64],
    tolerance: f64,
) -> DctResult<()> {
    if allclose(expected, actual, tolerance) {
        return Ok(());
    }
    if actual.len() != expected.len() {
        return Err(DctError::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    match first_mismatch(expected, actual, tolerance) {
        None => Ok(()),
        Some(index) => {
            tracing::warn!(
                subject,
                reference,
                index,
                expected = expected[index],
                actual = actual[index],
                "DCT-II results disagree"
            );
            Err(DctError::NumericalMismatch {
                subject: subject.to_string(),
                reference: reference.to_string(),
                index,
                expected: expected[index],
                actual: actual[index],
                tolerance,
            })
        }
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, label: &str, values: &[f64], digits: u32) -> fmt::Result {
    // options is public, so digits may not have been validated
    let digits = digits.min(MAX_DIGITS);
    write!(f, "{label:<16}[")?;
    for (i, &v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        let rounded = round_to_digits(v, digits).map_err(|_| fmt::Error)?;
        write!(f, "{rounded}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.options.digits;
        write_row(f, "input", &self.input, digits)?;
        writeln!(f)?;
        write_row(f, DIRECT_LABEL, &self.direct, digits)?;
        for row in &self.rows {
            writeln!(f)?;
            write_row(f, row.strategy.name(), &row.values, digits)?;
            write!(f, "  max_err={:.3e} rmse={:.3e}", row.max_abs_error, row.rmse)?;
        }
        Ok(())
    }
}
