//! The three reductions of DCT-II to a forward FFT

use dctfft_core::{DctError, DctResult};
use std::fmt;
use std::str::FromStr;

/// DCT-via-FFT strategy
///
/// | strategy        | FFT input                         | FFT size | scale |
/// |-----------------|-----------------------------------|----------|-------|
/// | `MirrorDouble`  | `x ++ reverse(x)`                 | 2N       | 1     |
/// | `ZeroPadDouble` | `x ++ zeros(N)`                   | 2N       | 2     |
/// | `EvenOdd`       | even indices, then odd reversed   | N        | 2     |
///
/// Each keeps the first N bins, multiplies bin k by
/// `scale * exp(-i*pi*k / (2N))` and takes the real part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    MirrorDouble,
    ZeroPadDouble,
    EvenOdd,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::MirrorDouble,
        Strategy::ZeroPadDouble,
        Strategy::EvenOdd,
    ];

    /// Family name, also the benchmark group prefix (`"<name>/<size>"`)
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::MirrorDouble => "mirror_double",
            Strategy::ZeroPadDouble => "zero_pad_double",
            Strategy::EvenOdd => "even_odd",
        }
    }

    /// Size of the FFT this strategy needs for a length-`len` sequence
    pub fn fft_len(&self, len: usize) -> usize {
        match self {
            Strategy::MirrorDouble | Strategy::ZeroPadDouble => 2 * len,
            Strategy::EvenOdd => len,
        }
    }

    /// Real factor folded into the phase correction
    ///
    /// The mirrored sequence already carries both halves of the cosine sum;
    /// the other two only see one and need the factor of two back.
    pub fn phase_scale(&self) -> f64 {
        match self {
            Strategy::MirrorDouble => 1.0,
            Strategy::ZeroPadDouble | Strategy::EvenOdd => 2.0,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = DctError;

    fn from_str(s: &str) -> DctResult<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "mirror_double" | "mirror" | "2n_mirror" => Ok(Strategy::MirrorDouble),
            "zero_pad_double" | "zero_pad" | "2n_zero_pad" => Ok(Strategy::ZeroPadDouble),
            "even_odd" | "makhoul" | "n" => Ok(Strategy::EvenOdd),
            _ => Err(DctError::UnknownStrategy(s.to_string())),
        }
    }
}
