//! # dctfft - DCT-II through an FFT
//!
//! This crate computes the Type-II Discrete Cosine Transform
//! `X[k] = 2 * sum_{n=0}^{N-1} x[n] * cos(pi/N * (n + 0.5) * k)`
//! using only a forward complex FFT, and cross-checks three reductions
//! against the direct formula.
//!
//! ## Quick Start
//!
//! ### One-off transform
//!
//! ```
//! use dctfft::{dct2, Strategy};
//!
//! let coefficients = dct2(Strategy::EvenOdd, &[1.0f64, 2.0, 3.0, 4.0]).unwrap();
//! assert!((coefficients[0] - 20.0).abs() < 1e-12);
//! ```
//!
//! ### Reusable plan
//!
//! ```
//! use dctfft::{Dct2Executor, Dct2Plan, FftBackend, Strategy};
//!
//! let plan = Dct2Plan::<f64>::with_backend(Strategy::ZeroPadDouble, 8, FftBackend::RustFft).unwrap();
//! let mut data: Vec<f64> = (1..=8).map(f64::from).collect();
//! plan.execute(&mut data).unwrap();
//! assert!((data[0] - 72.0).abs() < 1e-9);
//! ```
//!
//! ### Comparing strategies
//!
//! ```
//! use dctfft::{compare_strategies, CompareOptions};
//!
//! let comparison = compare_strategies(&[1.0, 2.0, 3.0], &CompareOptions::default()).unwrap();
//! comparison.verify().unwrap();
//! println!("{comparison}");
//! ```
//!
//! ## Strategies
//!
//! - `MirrorDouble`: FFT of `x ++ reverse(x)` (2N points)
//! - `ZeroPadDouble`: FFT of `x ++ zeros(N)` (2N points), extra factor 2
//! - `EvenOdd`: FFT of the even samples followed by the odd samples reversed
//!   (N points), extra factor 2
//!
//! All of them assume the unnormalized forward FFT convention
//! `X[k] = sum x[n] * exp(-2*pi*i*n*k / N)`.

mod compare;
mod options;

pub use compare::{compare_strategies, sweep, Comparison, StrategyRow};
pub use options::CompareOptions;

pub use dctfft_core::{consts, DctError, DctResult, Sequence};
pub use dctfft_transform::{
    dct2, dct2_direct, even_odd_order, transform_batch, Dct2Executor, Dct2Plan, DctFloat,
    DirectDct2, FftBackend, FftPrimitive, Strategy,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
