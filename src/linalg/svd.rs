use log::{debug, trace};
use num_traits::{Float, One, Zero};

use crate::linalg::jacobi::{self, Axis};
use crate::linalg::LinalgError;
use crate::traits::{real_const, LinalgScalar};
use crate::Matvec;

/// Default `rotation_error` and `singular_value_threshold`.
const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Default number of Jacobi sweeps.
const DEFAULT_SWEEPS: usize = 2;

// ── Engine ──────────────────────────────────────────────────────────

/// One-sided Jacobi singular value decomposition.
///
/// Holds a borrowed input matrix, the numerical settings, and after
/// [`svd`](Self::svd) the factors of `A = U · diag(σ) · Vᴴ`:
///
/// - `U`: `rows × k` left singular vectors, `k = min(rows, cols)`
/// - `σ`: `k × 1` column vector of singular values
/// - `V`: `cols × k` right singular vectors
///
/// Tall and square inputs (`rows >= cols`) are orthogonalized column by
/// column; wide inputs row by row. Both variants store the same canonical
/// factors.
///
/// ```
/// use numkit::{JacobiSvd, Matvec};
///
/// let a = Matvec::from_rows(2, 3, &[1.0_f64, 0.0, 0.0, 0.0, 2.0, 0.0]);
/// let mut svd = JacobiSvd::with_input(&a).unwrap();
/// svd.svd().unwrap();
///
/// let s = svd.singular_values().unwrap();
/// assert_eq!(s.as_slice(), &[2.0, 1.0]);
/// assert!(!svd.is_column_svd());
///
/// let r = svd.reconstructed_input().unwrap();
/// assert!(r.max_abs_diff(&a) < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct JacobiSvd<'a, T: LinalgScalar> {
    input: Option<&'a Matvec<T>>,
    rotation_error: T::Real,
    singular_value_threshold: T::Real,
    max_sweeps: usize,
    convergence_tolerance: Option<T::Real>,
    is_column_svd: bool,
    sweeps_performed: usize,
    matrix: Option<Matvec<T>>,
    rotation_matrix: Option<Matvec<T>>,
    singular_value: Option<Matvec<T::Real>>,
}

impl<T: LinalgScalar> Default for JacobiSvd<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_tolerance<R: Float>(value: R) -> Result<R, LinalgError> {
    // NaN fails the comparison too
    if value > R::zero() {
        Ok(value)
    } else {
        Err(LinalgError::NonPositiveTolerance)
    }
}

impl<'a, T: LinalgScalar> JacobiSvd<'a, T> {
    /// Empty engine with default settings: tolerances `1e-7`, two sweeps,
    /// no convergence check.
    pub fn new() -> Self {
        Self {
            input: None,
            rotation_error: real_const(DEFAULT_TOLERANCE),
            singular_value_threshold: real_const(DEFAULT_TOLERANCE),
            max_sweeps: DEFAULT_SWEEPS,
            convergence_tolerance: None,
            is_column_svd: false,
            sweeps_performed: 0,
            matrix: None,
            rotation_matrix: None,
            singular_value: None,
        }
    }

    /// Engine with default settings bound to `input`.
    ///
    /// Fails with `EmptyMatrix` if `input` has no rows or no columns.
    pub fn with_input(input: &'a Matvec<T>) -> Result<Self, LinalgError> {
        let mut svd = Self::new();
        svd.set_input(input)?;
        Ok(svd)
    }

    // ── Configuration ───────────────────────────────────────────────

    /// Replace the input matrix. Any previous decomposition is discarded.
    ///
    /// ```
    /// use numkit::{JacobiSvd, LinalgError, Matvec};
    ///
    /// let empty = Matvec::zeros(0, 3, 0.0_f64);
    /// let mut svd = JacobiSvd::new();
    /// assert_eq!(svd.set_input(&empty).unwrap_err(), LinalgError::EmptyMatrix);
    /// ```
    pub fn set_input(&mut self, input: &'a Matvec<T>) -> Result<(), LinalgError> {
        if input.nrows() == 0 || input.ncols() == 0 {
            return Err(LinalgError::EmptyMatrix);
        }
        self.invalidate();
        self.input = Some(input);
        Ok(())
    }

    /// The borrowed input matrix, if one is set.
    #[inline]
    pub fn input(&self) -> Option<&'a Matvec<T>> {
        self.input
    }

    /// Set the skip tolerance of the pair test
    /// `|p|² ≤ rotation_error · (q² + v²)`. Must be strictly positive.
    pub fn set_rotation_error(&mut self, value: T::Real) -> Result<(), LinalgError> {
        self.rotation_error = check_tolerance(value)?;
        Ok(())
    }

    #[inline]
    pub fn rotation_error(&self) -> T::Real {
        self.rotation_error
    }

    /// Set the pseudo-inverse cut-off, relative to the largest singular
    /// value. Must be strictly positive.
    pub fn set_singular_value_threshold(&mut self, value: T::Real) -> Result<(), LinalgError> {
        self.singular_value_threshold = check_tolerance(value)?;
        Ok(())
    }

    #[inline]
    pub fn singular_value_threshold(&self) -> T::Real {
        self.singular_value_threshold
    }

    /// Set the sweep budget. Must be at least one.
    pub fn set_max_sweeps(&mut self, sweeps: usize) -> Result<(), LinalgError> {
        if sweeps == 0 {
            return Err(LinalgError::ZeroSweeps);
        }
        self.max_sweeps = sweeps;
        Ok(())
    }

    #[inline]
    pub fn max_sweeps(&self) -> usize {
        self.max_sweeps
    }

    /// Enable (`Some(tol)`) or disable (`None`) the convergence check.
    ///
    /// When enabled, sweeping stops once the off-diagonal mass of the
    /// working Gram matrix satisfies `Σ|p_ij|² ≤ tol · Σ q_i²`, and
    /// [`svd`](Self::svd) returns `ConvergenceFailure` if the sweep budget
    /// runs out first. Pair rotations below `rotation_error` are skipped,
    /// so `tol` should not be much smaller than `rotation_error`.
    pub fn set_convergence_tolerance(&mut self, tol: Option<T::Real>) -> Result<(), LinalgError> {
        self.convergence_tolerance = match tol {
            Some(t) => Some(check_tolerance(t)?),
            None => None,
        };
        Ok(())
    }

    #[inline]
    pub fn convergence_tolerance(&self) -> Option<T::Real> {
        self.convergence_tolerance
    }

    // ── State ───────────────────────────────────────────────────────

    /// Whether the last decomposition used the column variant
    /// (`rows >= cols`).
    #[inline]
    pub fn is_column_svd(&self) -> bool {
        self.is_column_svd
    }

    /// Whether all three factors are available.
    #[inline]
    pub fn is_svd_done(&self) -> bool {
        self.matrix.is_some() && self.rotation_matrix.is_some() && self.singular_value.is_some()
    }

    /// Sweeps executed by the last successful [`svd`](Self::svd).
    #[inline]
    pub fn sweeps_performed(&self) -> usize {
        self.sweeps_performed
    }

    /// Singular values as a `k × 1` column vector, ordered like the factor
    /// columns.
    pub fn singular_values(&self) -> Result<&Matvec<T::Real>, LinalgError> {
        self.singular_value.as_ref().ok_or(LinalgError::NotDecomposed)
    }

    /// Left singular vectors `U` (`rows × k`), one per column.
    pub fn left_singular_vectors(&self) -> Result<&Matvec<T>, LinalgError> {
        self.matrix.as_ref().ok_or(LinalgError::NotDecomposed)
    }

    /// Right singular vectors `V` (`cols × k`), one per column.
    pub fn right_singular_vectors(&self) -> Result<&Matvec<T>, LinalgError> {
        self.rotation_matrix.as_ref().ok_or(LinalgError::NotDecomposed)
    }

    fn invalidate(&mut self) {
        self.matrix = None;
        self.rotation_matrix = None;
        self.singular_value = None;
        self.sweeps_performed = 0;
    }

    fn factors(&self) -> Result<(&Matvec<T>, &Matvec<T::Real>, &Matvec<T>), LinalgError> {
        match (&self.matrix, &self.singular_value, &self.rotation_matrix) {
            (Some(u), Some(s), Some(v)) => Ok((u, s, v)),
            _ => Err(LinalgError::NotDecomposed),
        }
    }

    // ── Decomposition ───────────────────────────────────────────────

    /// Compute the decomposition of the current input.
    ///
    /// Previous factors are dropped first. Running `svd()` again on the same
    /// input reproduces the same factors exactly.
    ///
    /// Errors: `NoInput` without an input; `ConvergenceFailure` when a
    /// convergence tolerance is set and the sweep budget runs out.
    pub fn svd(&mut self) -> Result<(), LinalgError> {
        let input = self.input.ok_or(LinalgError::NoInput)?;
        self.invalidate();

        let (m, n) = (input.nrows(), input.ncols());
        let column = m >= n;
        let axis = if column { Axis::Columns } else { Axis::Rows };
        let k = m.min(n);

        let (factor, mut work) = balanced_copy(input);
        let mut acc = Matvec::eye(k, T::zero());
        let sweeps = self.run_sweeps(&mut work, &mut acc, axis)?;

        let zero = <T::Real as Zero>::zero();
        let mut sigma = Matvec::zeros(k, 1, zero);
        for i in 0..k {
            let d = jacobi::line_norm_squared(&work, axis, i).lsqrt();
            sigma[(i, 0)] = d * factor;
            if d != zero {
                jacobi::scale_line(&mut work, axis, i, T::from_real(<T::Real as One>::one() / d));
            }
        }

        // rows: acc · A = diag(σ) · work, so U = accᴴ and V = workᴴ
        let (u, v) = if column {
            (work, acc)
        } else {
            (acc.conjugate_transpose(), work.conjugate_transpose())
        };

        debug!(
            target: "numkit",
            "jacobi svd {}x{}: {} variant, {} sweep(s)",
            m,
            n,
            if column { "column" } else { "row" },
            sweeps
        );

        self.is_column_svd = column;
        self.sweeps_performed = sweeps;
        self.matrix = Some(u);
        self.rotation_matrix = Some(v);
        self.singular_value = Some(sigma);
        Ok(())
    }

    fn run_sweeps(
        &self,
        work: &mut Matvec<T>,
        acc: &mut Matvec<T>,
        axis: Axis,
    ) -> Result<usize, LinalgError> {
        for sweep in 1..=self.max_sweeps {
            let stats = jacobi::sweep(work, acc, axis, self.rotation_error);
            trace!(
                target: "numkit",
                "sweep {}: {} rotation(s), {} swap(s)",
                sweep,
                stats.rotations,
                stats.swaps
            );

            if let Some(tol) = self.convergence_tolerance {
                let (off, diag) = jacobi::gram_off_diagonal(&*work, axis);
                trace!(target: "numkit", "sweep {}: off-diagonal {:?} of {:?}", sweep, off, diag);
                if diag == <T::Real as Zero>::zero() || off <= tol * diag {
                    debug!(target: "numkit", "converged after {} sweep(s)", sweep);
                    return Ok(sweep);
                }
            }
        }

        if self.convergence_tolerance.is_some() {
            debug!(
                target: "numkit",
                "no convergence within {} sweep(s)",
                self.max_sweeps
            );
            return Err(LinalgError::ConvergenceFailure);
        }
        Ok(self.max_sweeps)
    }

    // ── Derived quantities ──────────────────────────────────────────

    /// `U · diag(σ) · Vᴴ`, which approximates the input.
    pub fn reconstructed_input(&self) -> Result<Matvec<T>, LinalgError> {
        let (u, sigma, v) = self.factors()?;
        let mut us = u.clone();
        for i in 0..sigma.nrows() {
            us.scale_col(i, T::from_real(sigma[(i, 0)]));
        }
        Ok(us.try_mul(&v.conjugate_transpose())?)
    }

    /// Moore–Penrose pseudo-inverse `V · diag(σ⁺) · Uᴴ` (`cols × rows`).
    ///
    /// `σ⁺ᵢ = 1/σᵢ` when `σᵢ > singular_value_threshold · σ_max`, and `0`
    /// otherwise, so near-singular directions are dropped instead of
    /// amplified.
    ///
    /// ```
    /// use numkit::{JacobiSvd, Matvec};
    ///
    /// let a = Matvec::from_diag(&[1.0_f64, 1e-12]);
    /// let mut svd = JacobiSvd::with_input(&a).unwrap();
    /// svd.svd().unwrap();
    /// let inv = svd.inverse().unwrap();
    /// assert_eq!(inv[(0, 0)], 1.0);
    /// assert_eq!(inv[(1, 1)], 0.0);
    /// ```
    pub fn inverse(&self) -> Result<Matvec<T>, LinalgError> {
        let (u, sigma, v) = self.factors()?;
        let zero = <T::Real as Zero>::zero();
        let one = <T::Real as One>::one();

        let s_max = sigma
            .as_slice()
            .iter()
            .fold(zero, |acc, &s| if s > acc { s } else { acc });
        let cutoff = self.singular_value_threshold * s_max;

        let mut vs = v.clone();
        let mut dropped = 0;
        for i in 0..sigma.nrows() {
            let s = sigma[(i, 0)];
            let s_inv = if s > cutoff {
                one / s
            } else {
                dropped += 1;
                zero
            };
            vs.scale_col(i, T::from_real(s_inv));
        }
        if dropped > 0 {
            debug!(
                target: "numkit",
                "pseudo-inverse dropped {} of {} singular direction(s)",
                dropped,
                sigma.nrows()
            );
        }

        Ok(vs.try_mul(&u.conjugate_transpose())?)
    }

    /// Numerical rank: number of singular values strictly above `tol`.
    pub fn rank(&self, tol: T::Real) -> Result<usize, LinalgError> {
        let sigma = self.singular_values()?;
        Ok(sigma.as_slice().iter().filter(|&&s| s > tol).count())
    }

    /// Condition number `σ_max / σ_min`.
    ///
    /// Returns infinity if the smallest singular value is zero.
    pub fn condition_number(&self) -> Result<T::Real, LinalgError> {
        let sigma = self.singular_values()?;
        let values = sigma.as_slice();
        let mut s_max = values[0];
        let mut s_min = values[0];
        for &s in &values[1..] {
            if s > s_max {
                s_max = s;
            }
            if s < s_min {
                s_min = s;
            }
        }
        if s_min == <T::Real as Zero>::zero() {
            Ok(T::Real::infinity())
        } else {
            Ok(s_max / s_min)
        }
    }
}

/// Convenience methods for SVD on any non-empty matrix.
impl<T: LinalgScalar> Matvec<T> {
    /// One-sided Jacobi SVD with default settings.
    ///
    /// ```
    /// use numkit::Matvec;
    ///
    /// let a = Matvec::from_rows(3, 2, &[1.0_f64, 0.0, 0.0, 2.0, 0.0, 0.0]);
    /// let svd = a.svd().unwrap();
    /// let s = svd.singular_values().unwrap();
    /// assert!((s[(0, 0)] - 2.0).abs() < 1e-12);
    /// assert!((s[(1, 0)] - 1.0).abs() < 1e-12);
    /// ```
    pub fn svd(&self) -> Result<JacobiSvd<'_, T>, LinalgError> {
        let mut svd = JacobiSvd::with_input(self)?;
        svd.svd()?;
        Ok(svd)
    }

    /// Moore–Penrose pseudo-inverse with default settings.
    ///
    /// ```
    /// use numkit::Matvec;
    ///
    /// let a = Matvec::row_vector(&[3.0_f64, 0.0, 4.0]);
    /// let p = a.pseudo_inverse().unwrap();
    /// assert_eq!((p.nrows(), p.ncols()), (3, 1));
    /// assert!((p[(0, 0)] - 0.12).abs() < 1e-12);
    /// assert!((p[(2, 0)] - 0.16).abs() < 1e-12);
    /// ```
    pub fn pseudo_inverse(&self) -> Result<Matvec<T>, LinalgError> {
        self.svd()?.inverse()
    }
}

// ── Scaling ─────────────────────────────────────────────────────────

/// Copy of `a` scaled by a power of two so that its largest entry lies in
/// `[1, 2)`, together with the factor that undoes the scaling.
///
/// Squared line norms of entries near the ends of the float range would
/// otherwise overflow or flush to zero. Power-of-two factors keep every
/// scaled entry exact. Zero, non-finite and subnormal-limited inputs are
/// copied unscaled with factor `1`.
fn balanced_copy<T: LinalgScalar>(a: &Matvec<T>) -> (T::Real, Matvec<T>) {
    let one = <T::Real as One>::one();
    let zero = <T::Real as Zero>::zero();
    let amax = a.max_abs();
    if amax == zero || !amax.is_finite() {
        return (one, a.clone());
    }

    let factor = amax.log2().floor().exp2();
    let recip = one / factor;
    if factor == zero || !factor.is_finite() || recip == zero || !recip.is_finite() {
        return (one, a.clone());
    }
    if factor != one {
        trace!(target: "numkit", "scaling input by {:?}", recip);
    }

    let r = T::from_real(recip);
    (factor, a.map(|x| x * r))
}

// ── Tests ───────────────────────────────────────────────────────────
