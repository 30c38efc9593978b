pub mod aliases;
mod norm;
mod ops;
mod util;
mod vector;

pub use aliases::*;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Dimension mismatch error for shape-checked operations.
///
/// Returned by [`Matvec::try_mul`] when the inner dimensions disagree.
///
/// # Example
///
/// ```
/// use numkit::Matvec;
/// use numkit::matvec::DimensionMismatch;
///
/// let a = Matvec::zeros(2, 3, 0.0_f64);
/// let b = Matvec::zeros(2, 3, 0.0_f64);
/// let err = a.try_mul(&b).unwrap_err();
/// assert_eq!(err, DimensionMismatch { expected: (3, 3), got: (2, 3) });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionMismatch {
    /// Expected `(rows, cols)`.
    pub expected: (usize, usize),
    /// Got `(rows, cols)`.
    pub got: (usize, usize),
}

impl core::fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "dimension mismatch: expected {}x{}, got {}x{}",
            self.expected.0, self.expected.1, self.got.0, self.got.1
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DimensionMismatch {}

/// Dense heap-allocated matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage. A matrix with one row is a row vector, one
/// with one column is a column vector; both are ordinary `Matvec`s and every
/// matrix operation applies to them. Implements [`MatrixRef`] and
/// [`MatrixMut`], so the rotation kernels in [`crate::linalg`] work on it
/// directly.
///
/// # Examples
///
/// ```
/// use numkit::Matvec;
///
/// let a = Matvec::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b = Matvec::eye(3, 0.0_f64);
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matvec<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matvec<T> {
    /// Create an `nrows x ncols` zero matrix.
    ///
    /// The `_zero` parameter is only used for type inference.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let m = Matvec::zeros(2, 3, 0.0_f64);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize, _zero: T) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix filled with a given value.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let m = Matvec::fill(2, 3, 7.0_f64);
    /// assert_eq!(m[(0, 0)], 7.0);
    /// assert_eq!(m[(1, 2)], 7.0);
    /// ```
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// The `_zero` parameter is only used for type inference.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let id = Matvec::eye(3, 0.0_f64);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// ```
    pub fn eye(n: usize, _zero: T) -> Self {
        let mut m = Self::zeros(n, n, T::zero());
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let m = Matvec::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        Self {
            data: row_major.to_vec(),
            nrows,
            ncols,
        }
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let m = Matvec::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(0, 1)], 2.0);
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Create a `1 x n` row vector.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let v = Matvec::row_vector(&[1.0, 2.0, 3.0]);
    /// assert!(v.is_row_vector());
    /// assert_eq!(v[(0, 2)], 3.0);
    /// ```
    pub fn row_vector(values: &[T]) -> Self {
        Self::from_rows(1, values.len(), values)
    }

    /// Create an `n x 1` column vector.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let v = Matvec::column_vector(&[1.0, 2.0, 3.0]);
    /// assert!(v.is_column_vector());
    /// assert_eq!(v[(2, 0)], 3.0);
    /// ```
    pub fn column_vector(values: &[T]) -> Self {
        Self::from_rows(values.len(), 1, values)
    }

    /// Square diagonal matrix from a list of diagonal entries.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let d = Matvec::from_diag(&[2.0, 3.0]);
    /// assert_eq!(d[(0, 0)], 2.0);
    /// assert_eq!(d[(1, 1)], 3.0);
    /// assert_eq!(d[(0, 1)], 0.0);
    /// ```
    pub fn from_diag(diag: &[T]) -> Self {
        let n = diag.len();
        let mut m = Self::zeros(n, n, T::zero());
        for (i, &d) in diag.iter().enumerate() {
            m[(i, i)] = d;
        }
        m
    }

    /// Element at `(row, col)`, by value.
    #[inline]
    pub fn item(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    /// Store `value` at `(row, col)`.
    #[inline]
    pub fn put(&mut self, value: T, row: usize, col: usize) {
        self[(row, col)] = value;
    }
}

impl<T> Matvec<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Whether the matrix has exactly one row.
    #[inline]
    pub fn is_row_vector(&self) -> bool {
        self.nrows == 1
    }

    /// Whether the matrix has exactly one column.
    #[inline]
    pub fn is_column_vector(&self) -> bool {
        self.ncols == 1
    }

    /// Whether the matrix has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Length along the longer dimension.
    ///
    /// For row and column vectors this is the number of elements.
    ///
    /// ```
    /// use numkit::Matvec;
    /// assert_eq!(Matvec::row_vector(&[1.0, 2.0, 3.0]).vector_length(), 3);
    /// assert_eq!(Matvec::column_vector(&[1.0, 2.0]).vector_length(), 2);
    /// ```
    #[inline]
    pub fn vector_length(&self) -> usize {
        self.nrows.max(self.ncols)
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let m = Matvec::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// View the matrix data as a row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the matrix data as a mutable row-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Contiguous slice of row `i`.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Mutable contiguous slice of row `i`.
    #[inline]
    pub fn row_slice_mut(&mut self, i: usize) -> &mut [T] {
        let start = i * self.ncols;
        &mut self.data[start..start + self.ncols]
    }

    /// Consume the matrix, returning its row-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for Matvec<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> MatrixMut<T> for Matvec<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matvec<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.nrows && col < self.ncols, "index out of bounds");
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matvec<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.nrows && col < self.ncols, "index out of bounds");
        &mut self.data[row * self.ncols + col]
    }
}
