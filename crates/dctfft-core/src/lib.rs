//! Core types and utilities for computing DCT-II through an FFT
//!
//! This crate provides the pieces shared by every transform strategy:
//! the error type, the validated input sequence, numeric comparison helpers
//! and the default constants used by the comparison tooling.

pub mod consts;
pub mod error;
pub mod metrics;
pub mod sequence;

pub use error::{DctError, DctResult};
pub use metrics::*;
pub use sequence::Sequence;
