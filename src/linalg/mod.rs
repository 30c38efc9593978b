pub(crate) mod jacobi;
pub(crate) mod svd;

pub use jacobi::{pair_rotation, rotate_pair, Axis, PairRotation};
pub use svd::JacobiSvd;

use crate::matvec::DimensionMismatch;

/// Errors from linear algebra operations.
///
/// Returned by the [`JacobiSvd`] configuration setters, `svd()`, and the
/// derived-quantity methods (`inverse`, `reconstructed_input`).
///
/// ```
/// use numkit::linalg::{JacobiSvd, LinalgError};
///
/// let mut svd = JacobiSvd::<f64>::new();
/// assert_eq!(svd.svd().unwrap_err(), LinalgError::NoInput);
/// assert_eq!(
///     svd.set_rotation_error(0.0).unwrap_err(),
///     LinalgError::NonPositiveTolerance,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// No input matrix has been set on the engine.
    NoInput,
    /// The input matrix has zero rows or zero columns.
    EmptyMatrix,
    /// A tolerance was zero, negative, or NaN.
    NonPositiveTolerance,
    /// The sweep budget was set to zero.
    ZeroSweeps,
    /// A derived quantity was requested before `svd()` completed.
    NotDecomposed,
    /// Operand shapes do not agree.
    DimensionMismatch {
        /// Expected `(rows, cols)`.
        expected: (usize, usize),
        /// Got `(rows, cols)`.
        got: (usize, usize),
    },
    /// The sweep budget ran out before the convergence check was met.
    ConvergenceFailure,
}

/// Coarse classification of a [`LinalgError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value outside the accepted domain.
    InvalidArgument,
    /// The operation was called in a state or with shapes it does not accept.
    PreconditionViolated,
    /// The numerics did not reach the requested accuracy.
    NumericDegenerate,
}

impl LinalgError {
    /// Classify the error.
    ///
    /// ```
    /// use numkit::linalg::{ErrorKind, LinalgError};
    /// assert_eq!(LinalgError::NotDecomposed.kind(), ErrorKind::PreconditionViolated);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinalgError::NoInput
            | LinalgError::EmptyMatrix
            | LinalgError::NonPositiveTolerance
            | LinalgError::ZeroSweeps => ErrorKind::InvalidArgument,
            LinalgError::NotDecomposed | LinalgError::DimensionMismatch { .. } => {
                ErrorKind::PreconditionViolated
            }
            LinalgError::ConvergenceFailure => ErrorKind::NumericDegenerate,
        }
    }
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::NoInput => write!(f, "no input matrix has been set"),
            LinalgError::EmptyMatrix => write!(f, "input matrix has no elements"),
            LinalgError::NonPositiveTolerance => write!(f, "tolerance must be strictly positive"),
            LinalgError::ZeroSweeps => write!(f, "sweep count must be at least one"),
            LinalgError::NotDecomposed => write!(f, "decomposition has not been computed"),
            LinalgError::DimensionMismatch { expected, got } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            LinalgError::ConvergenceFailure => write!(f, "iterative algorithm did not converge"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

impl From<DimensionMismatch> for LinalgError {
    fn from(e: DimensionMismatch) -> Self {
        LinalgError::DimensionMismatch {
            expected: e.expected,
            got: e.got,
        }
    }
}
