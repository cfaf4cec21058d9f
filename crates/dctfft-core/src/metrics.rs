//! Element-wise comparison helpers for transform results

use crate::consts::MAX_DIGITS;
use crate::{DctError, DctResult};
use num_traits::Float;

/// True when both slices have the same length and every pair of elements
/// differs by at most `tolerance`
pub fn allclose<T: Float>(lhs: &[T], rhs: &[T], tolerance: T) -> bool {
    lhs.len() == rhs.len()
        && lhs
            .iter()
            .zip(rhs.iter())
            .all(|(&l, &r)| (l - r).abs() <= tolerance)
}

/// Index of the first element whose absolute difference exceeds `tolerance`
///
/// NaN on either side counts as a mismatch.
pub fn first_mismatch<T: Float>(lhs: &[T], rhs: &[T], tolerance: T) -> Option<usize> {
    lhs.iter()
        .zip(rhs.iter())
        .position(|(&l, &r)| {
            let diff = (l - r).abs();
            diff.is_nan() || diff > tolerance
        })
}

/// Largest absolute element-wise difference
pub fn max_abs_error<T: Float>(lhs: &[T], rhs: &[T]) -> DctResult<T> {
    check_lengths(lhs, rhs)?;
    Ok(lhs
        .iter()
        .zip(rhs.iter())
        .fold(T::zero(), |acc, (&l, &r)| acc.max((l - r).abs())))
}

pub fn mean_squared_error<T: Float>(lhs: &[T], rhs: &[T]) -> DctResult<T> {
    check_lengths(lhs, rhs)?;
    if lhs.is_empty() {
        return Err(DctError::EmptySequence);
    }
    let sum = lhs
        .iter()
        .zip(rhs.iter())
        .fold(T::zero(), |acc, (&l, &r)| acc + (l - r) * (l - r));
    let len = T::from(lhs.len()).ok_or(DctError::SampleConversion(lhs.len()))?;
    Ok(sum / len)
}

pub fn root_mean_squared_error<T: Float>(lhs: &[T], rhs: &[T]) -> DctResult<T> {
    mean_squared_error(lhs, rhs).map(Float::sqrt)
}

/// Round half away from zero to `digits` decimal places
///
/// Negative zero produced by rounding tiny negative values is folded to
/// positive zero so rounded results compare and print consistently.
pub fn round_to_digits(value: f64, digits: u32) -> DctResult<f64> {
    if digits > MAX_DIGITS {
        return Err(DctError::InvalidPrecision(digits));
    }
    let scale = 10f64.powi(digits as i32);
    let rounded = (value * scale).round() / scale;
    Ok(if rounded == 0.0 { 0.0 } else { rounded })
}

fn check_lengths<T>(lhs: &[T], rhs: &[T]) -> DctResult<()> {
    if lhs.len() != rhs.len() {
        return Err(DctError::LengthMismatch {
            expected: lhs.len(),
            actual: rhs.len(),
        });
    }
    Ok(())
}
