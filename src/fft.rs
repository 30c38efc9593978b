//! Radix-2 fast Fourier transform on complex row/column vectors.
//!
//! An [`Fft`] plan is built once per length and reused:
//!
//! ```
//! use numkit::{Complex, Matvec};
//! use numkit::fft::Fft;
//!
//! let plan = Fft::<f64>::new(4).unwrap();
//! let mut x = Matvec::row_vector(&[
//!     Complex::new(1.0, 0.0),
//!     Complex::new(0.0, 0.0),
//!     Complex::new(0.0, 0.0),
//!     Complex::new(0.0, 0.0),
//! ]);
//! plan.forward(&mut x).unwrap();
//! // an impulse has a flat spectrum
//! for k in 0..4 {
//!     assert!((x[(0, k)] - Complex::new(1.0, 0.0)).norm() < 1e-12);
//! }
//! ```

use alloc::vec::Vec;
use core::f64::consts::PI;

use log::trace;
use num_complex::Complex;
use num_traits::{One, Zero};

use crate::traits::{real_const, FloatScalar};
use crate::Matvec;

/// Errors from FFT planning and execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The transform length is zero or not a power of two.
    NotPowerOfTwo(usize),
    /// The operand has more than one row and more than one column.
    NotAVector { rows: usize, cols: usize },
    /// The operand length differs from the plan length.
    LengthMismatch { expected: usize, got: usize },
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::NotPowerOfTwo(n) => write!(f, "fft length {} is not a power of two", n),
            FftError::NotAVector { rows, cols } => {
                write!(f, "fft operand is {}x{}, expected a row or column vector", rows, cols)
            }
            FftError::LengthMismatch { expected, got } => {
                write!(f, "fft length mismatch: expected {}, got {}", expected, got)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Precomputed radix-2 plan for one transform length.
///
/// Holds the bit-reversal permutation and the twiddle factors
/// `exp(−2πik/n)` for `k < n/2`.
#[derive(Debug, Clone)]
pub struct Fft<T: FloatScalar> {
    n: usize,
    bitrev: Vec<usize>,
    twiddles: Vec<Complex<T>>,
}

impl<T: FloatScalar> Fft<T> {
    /// Plan a transform of length `n`, which must be a power of two.
    ///
    /// ```
    /// use numkit::fft::{Fft, FftError};
    /// assert!(Fft::<f64>::new(8).is_ok());
    /// assert_eq!(Fft::<f64>::new(6).unwrap_err(), FftError::NotPowerOfTwo(6));
    /// ```
    pub fn new(n: usize) -> Result<Self, FftError> {
        if !n.is_power_of_two() {
            return Err(FftError::NotPowerOfTwo(n));
        }

        let bits = n.trailing_zeros();
        let bitrev = (0..n)
            .map(|i| {
                if bits == 0 {
                    0
                } else {
                    i.reverse_bits() >> (usize::BITS - bits)
                }
            })
            .collect();

        let step = -2.0 * PI / n as f64;
        let twiddles = (0..n / 2)
            .map(|k| Complex::from_polar(T::one(), real_const::<T>(step * k as f64)))
            .collect();

        trace!(target: "numkit", "fft plan for length {}", n);
        Ok(Self { n, bitrev, twiddles })
    }

    /// Transform length.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`: a plan has length at least one.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// In-place forward transform `X_k = Σ x_j · exp(−2πijk/n)`.
    pub fn forward(&self, x: &mut Matvec<Complex<T>>) -> Result<(), FftError> {
        self.check(x)?;
        self.transform(x.as_mut_slice(), false);
        Ok(())
    }

    /// In-place inverse transform, scaled by `1/n` so that
    /// `inverse(forward(x)) == x` up to rounding.
    pub fn inverse(&self, x: &mut Matvec<Complex<T>>) -> Result<(), FftError> {
        self.check(x)?;
        self.transform(x.as_mut_slice(), true);
        Ok(())
    }

    fn check(&self, x: &Matvec<Complex<T>>) -> Result<(), FftError> {
        let (rows, cols) = (x.nrows(), x.ncols());
        if rows != 1 && cols != 1 {
            return Err(FftError::NotAVector { rows, cols });
        }
        let got = rows * cols;
        if got != self.n {
            return Err(FftError::LengthMismatch {
                expected: self.n,
                got,
            });
        }
        Ok(())
    }

    fn transform(&self, data: &mut [Complex<T>], inverse: bool) {
        let n = self.n;
        for i in 0..n {
            let j = self.bitrev[i];
            if i < j {
                data.swap(i, j);
            }
        }

        let mut len = 2;
        while len <= n {
            let half = len / 2;
            let stride = n / len;
            for start in (0..n).step_by(len) {
                for k in 0..half {
                    let w = self.twiddles[k * stride];
                    let w = if inverse { w.conj() } else { w };
                    let even = data[start + k];
                    let odd = w * data[start + k + half];
                    data[start + k] = even + odd;
                    data[start + k + half] = even - odd;
                }
            }
            len <<= 1;
        }

        if inverse {
            let scale = <T as One>::one() / real_const::<T>(n as f64);
            for x in data.iter_mut() {
                *x = *x * scale;
            }
        }
    }
}

/// Convenience transforms on complex row/column vectors.
impl<T: FloatScalar> Matvec<Complex<T>> {
    /// Forward FFT, returning a new vector of the same shape.
    ///
    /// ```
    /// use numkit::{Complex, Matvec};
    ///
    /// let x = Matvec::column_vector(&[
    ///     Complex::new(1.0_f64, 0.0),
    ///     Complex::new(2.0, 0.0),
    ///     Complex::new(3.0, 0.0),
    ///     Complex::new(4.0, 0.0),
    /// ]);
    /// let spec = x.fft().unwrap();
    /// assert!((spec[(0, 0)] - Complex::new(10.0, 0.0)).norm() < 1e-12);
    /// assert!((spec[(1, 0)] - Complex::new(-2.0, 2.0)).norm() < 1e-12);
    /// ```
    pub fn fft(&self) -> Result<Matvec<Complex<T>>, FftError> {
        let plan = Fft::new(self.nrows() * self.ncols())?;
        let mut out = self.clone();
        plan.forward(&mut out)?;
        Ok(out)
    }

    /// Inverse FFT (scaled by `1/n`), returning a new vector.
    pub fn ifft(&self) -> Result<Matvec<Complex<T>>, FftError> {
        let plan = Fft::new(self.nrows() * self.ncols())?;
        let mut out = self.clone();
        plan.inverse(&mut out)?;
        Ok(out)
    }
}

/// Zero-padded copy of `x` to the next power of two, same orientation.
///
/// ```
/// use numkit::{Complex, Matvec};
/// use numkit::fft::zero_pad;
///
/// let x = Matvec::row_vector(&[Complex::new(1.0_f64, 0.0); 3]);
/// let p = zero_pad(&x);
/// assert_eq!(p.ncols(), 4);
/// assert_eq!(p[(0, 3)], Complex::new(0.0, 0.0));
/// ```
pub fn zero_pad<T: FloatScalar>(x: &Matvec<Complex<T>>) -> Matvec<Complex<T>> {
    let len = x.nrows() * x.ncols();
    let padded = len.next_power_of_two();
    let mut data = x.as_slice().to_vec();
    data.resize(padded, Complex::zero());
    if x.nrows() == 1 {
        Matvec::from_vec(1, padded, data)
    } else {
        Matvec::from_vec(padded, 1, data)
    }
}
