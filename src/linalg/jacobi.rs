use num_traits::{Float, One, Zero};

use crate::traits::{LinalgScalar, MatrixMut, MatrixRef};
use crate::Matvec;

// ── Pair selection ──────────────────────────────────────────────────

/// Which lines of a matrix a rotation mixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Rotate column pairs (tall inputs, `rows >= columns`).
    Columns,
    /// Rotate row pairs (wide inputs, `rows < columns`).
    Rows,
}

impl Axis {
    /// Number of lines along this axis: columns for `Columns`, rows for `Rows`.
    #[inline]
    pub fn count<T>(self, m: &impl MatrixRef<T>) -> usize {
        match self {
            Axis::Columns => m.ncols(),
            Axis::Rows => m.nrows(),
        }
    }

    /// Length of one line along this axis.
    #[inline]
    fn line_len<T>(self, m: &impl MatrixRef<T>) -> usize {
        match self {
            Axis::Columns => m.nrows(),
            Axis::Rows => m.ncols(),
        }
    }

    /// Matrix position of element `k` of line `line`.
    #[inline]
    fn at(self, line: usize, k: usize) -> (usize, usize) {
        match self {
            Axis::Columns => (k, line),
            Axis::Rows => (line, k),
        }
    }
}

/// The transform chosen for one pair of lines `(i1, i2)`, `i1 < i2`.
///
/// Produced by [`pair_rotation`] and consumed by [`rotate_pair`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairRotation<T: LinalgScalar> {
    /// Already orthogonal and already ordered; leave both lines alone.
    Skip,
    /// Already orthogonal but `i1` is the shorter line; exchange them.
    Swap,
    /// `x' = c·x + s·y`, `y' = −conj(s)·x + c·y`.
    Rotate { c: T::Real, s: T },
    /// `x' = c·y + s·x`, `y' = −conj(s)·y + c·x`.
    RotateSwap { c: T::Real, s: T },
}

/// Choose the 2×2 unitary transform that zeroes the off-diagonal of the
/// Gram block `[[q, p], [conj(p), v]]`.
///
/// - `p`: Hermitian inner product of the two lines, conjugate-linear in the
///   second one.
/// - `q`, `v`: squared norms of the first and second line.
///
/// The pair counts as orthogonal when `|p|² ≤ rotation_error·(q² + v²)`.
/// Otherwise the branch on the sign of `q − v` keeps `c` free of
/// cancellation, and in both branches the first line ends up with the
/// larger norm.
///
/// ```
/// use numkit::linalg::{pair_rotation, PairRotation};
///
/// // orthogonal, shorter line first: swap
/// assert_eq!(pair_rotation(0.0_f64, 1.0, 4.0, 1e-7), PairRotation::Swap);
/// assert_eq!(pair_rotation(0.0_f64, 4.0, 1.0, 1e-7), PairRotation::Skip);
///
/// // equal norms, p = 12: a 45° rotation
/// match pair_rotation(12.0_f64, 13.0, 13.0, 1e-7) {
///     PairRotation::Rotate { c, s } => {
///         assert!((c - 0.5_f64.sqrt()).abs() < 1e-15);
///         assert!((s - 0.5_f64.sqrt()).abs() < 1e-15);
///     }
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn pair_rotation<T: LinalgScalar>(
    p: T,
    q: T::Real,
    v: T::Real,
    rotation_error: T::Real,
) -> PairRotation<T> {
    let p_sq = p.modulus_squared();
    if p_sq <= rotation_error * (q * q + v * v) {
        return if q < v {
            PairRotation::Swap
        } else {
            PairRotation::Skip
        };
    }

    let two = <T::Real as One>::one() + <T::Real as One>::one();
    let four = two * two;
    let dq = q - v;
    let r = Float::sqrt(four * p_sq + dq * dq);

    if dq >= <T::Real as Zero>::zero() {
        let c = Float::sqrt((r + dq) / (two * r));
        let s = p / T::from_real(r * c);
        PairRotation::Rotate { c, s }
    } else {
        let c = Float::sqrt((r - dq) / (two * r));
        let s = (p / T::from_real(r * c)).conj();
        PairRotation::RotateSwap { c, s }
    }
}

/// Apply `rotation` to lines `i1` and `i2` of `m` in place.
///
/// Every new value is computed from the pre-update pair, so the same call
/// can be made on the working matrix and on its companion accumulator.
pub fn rotate_pair<T: LinalgScalar>(
    m: &mut impl MatrixMut<T>,
    axis: Axis,
    i1: usize,
    i2: usize,
    rotation: PairRotation<T>,
) {
    match rotation {
        PairRotation::Skip => {}
        PairRotation::Swap => {
            rotate_with_swap(m, axis, i1, i2, <T::Real as One>::one(), T::zero())
        }
        PairRotation::Rotate { c, s } => rotate_without_swap(m, axis, i1, i2, c, s),
        PairRotation::RotateSwap { c, s } => rotate_with_swap(m, axis, i1, i2, c, s),
    }
}

fn rotate_without_swap<T: LinalgScalar>(
    m: &mut impl MatrixMut<T>,
    axis: Axis,
    i1: usize,
    i2: usize,
    c: T::Real,
    s: T,
) {
    let c = T::from_real(c);
    let s_conj = s.conj();
    for k in 0..axis.line_len(&*m) {
        let (r1, c1) = axis.at(i1, k);
        let (r2, c2) = axis.at(i2, k);
        let x = *m.get(r1, c1);
        let y = *m.get(r2, c2);
        *m.get_mut(r1, c1) = c * x + s * y;
        *m.get_mut(r2, c2) = c * y - s_conj * x;
    }
}

fn rotate_with_swap<T: LinalgScalar>(
    m: &mut impl MatrixMut<T>,
    axis: Axis,
    i1: usize,
    i2: usize,
    c: T::Real,
    s: T,
) {
    let c = T::from_real(c);
    let s_conj = s.conj();
    for k in 0..axis.line_len(&*m) {
        let (r1, c1) = axis.at(i1, k);
        let (r2, c2) = axis.at(i2, k);
        let x = *m.get(r1, c1);
        let y = *m.get(r2, c2);
        *m.get_mut(r1, c1) = c * y + s * x;
        *m.get_mut(r2, c2) = c * x - s_conj * y;
    }
}

// ── Gram entries ────────────────────────────────────────────────────
//
// The sweep kernel reads the working matrix through `Matvec`'s own row and
// column helpers; only `rotate_pair` needs to work on any `MatrixMut`.

/// Hermitian inner product of lines `i1` and `i2`.
pub(crate) fn line_dot<T: LinalgScalar>(m: &Matvec<T>, axis: Axis, i1: usize, i2: usize) -> T {
    match axis {
        Axis::Columns => m.col_dot(i1, i2),
        Axis::Rows => m.row_dot(i1, i2),
    }
}

/// Squared Euclidean norm of line `i`.
pub(crate) fn line_norm_squared<T: LinalgScalar>(m: &Matvec<T>, axis: Axis, i: usize) -> T::Real {
    match axis {
        Axis::Columns => m.col_norm_squared(i),
        Axis::Rows => m.row_norm_squared(i),
    }
}

/// Multiply line `i` by `s` in place.
pub(crate) fn scale_line<T: LinalgScalar>(m: &mut Matvec<T>, axis: Axis, i: usize, s: T) {
    match axis {
        Axis::Columns => m.scale_col(i, s),
        Axis::Rows => m.scale_row(i, s),
    }
}

// ── Sweeps ──────────────────────────────────────────────────────────

/// What one sweep did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SweepStats {
    pub rotations: usize,
    pub swaps: usize,
}

/// One cyclic sweep over all pairs `0 <= i < j < n` along `axis`.
///
/// `a` is orthogonalized; `b` receives the identical transforms.
pub(crate) fn sweep<T: LinalgScalar>(
    a: &mut Matvec<T>,
    b: &mut impl MatrixMut<T>,
    axis: Axis,
    rotation_error: T::Real,
) -> SweepStats {
    let n = axis.count(&*a);
    let mut stats = SweepStats::default();
    for i in 0..n {
        for j in (i + 1)..n {
            let p = line_dot(&*a, axis, i, j);
            let q = line_norm_squared(&*a, axis, i);
            let v = line_norm_squared(&*a, axis, j);
            let rotation = pair_rotation(p, q, v, rotation_error);
            match rotation {
                PairRotation::Skip => continue,
                PairRotation::Swap => stats.swaps += 1,
                PairRotation::Rotate { .. } | PairRotation::RotateSwap { .. } => {
                    stats.rotations += 1
                }
            }
            rotate_pair(a, axis, i, j, rotation);
            rotate_pair(b, axis, i, j, rotation);
        }
    }
    stats
}

/// Off-diagonal and diagonal mass of the Gram matrix along `axis`:
/// `(Σ_{i<j} |p_ij|², Σ_i q_i²)`.
pub(crate) fn gram_off_diagonal<T: LinalgScalar>(
    a: &Matvec<T>,
    axis: Axis,
) -> (T::Real, T::Real) {
    let n = axis.count(a);
    let mut off = <T::Real as Zero>::zero();
    let mut diag = <T::Real as Zero>::zero();
    for i in 0..n {
        let q = line_norm_squared(a, axis, i);
        diag = diag + q * q;
        for j in (i + 1)..n {
            off = off + line_dot(a, axis, i, j).modulus_squared();
        }
    }
    (off, diag)
}
