//! Constants shared by the transform and comparison crates

/// Default number of decimal digits used when rounding results for display
pub const DEFAULT_DIGITS: u32 = 8;

/// Largest rounding precision that still fits an f64 mantissa
pub const MAX_DIGITS: u32 = 15;

/// Default absolute per-element tolerance for double precision
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Default absolute per-element tolerance for single precision
pub const DEFAULT_TOLERANCE_F32: f32 = 1e-4;

/// Sequence lengths every strategy is checked against, covering both parities
/// and power-of-two / non-power-of-two sizes
pub const TEST_LENGTHS: [usize; 9] = [1, 2, 3, 4, 5, 8, 9, 16, 17];

/// Input used by the comparison tool when no values are given
pub const DEFAULT_INPUT: [f64; 8] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
