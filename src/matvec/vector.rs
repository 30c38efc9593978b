//! Row- and column-restricted helpers.
//!
//! These operate on one or two rows/columns of a single matrix in place and
//! are the primitives the Jacobi sweeps are built from.

use alloc::vec::Vec;

use num_traits::Zero;

use crate::traits::{LinalgScalar, Scalar};

use super::Matvec;

// ── Sub-vector extraction ───────────────────────────────────────────

impl<T: Scalar> Matvec<T> {
    /// Extract row `i` as a `1 x ncols` row vector.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let m = Matvec::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let r = m.row(1);
    /// assert!(r.is_row_vector());
    /// assert_eq!(r.as_slice(), &[3.0, 4.0]);
    /// ```
    pub fn row(&self, i: usize) -> Matvec<T> {
        Matvec::row_vector(self.row_slice(i))
    }

    /// Extract column `j` as an `nrows x 1` column vector.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let m = Matvec::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let c = m.col(1);
    /// assert!(c.is_column_vector());
    /// assert_eq!(c.as_slice(), &[2.0, 4.0]);
    /// ```
    pub fn col(&self, j: usize) -> Matvec<T> {
        let data: Vec<T> = (0..self.nrows).map(|i| self[(i, j)]).collect();
        Matvec::from_vec(self.nrows, 1, data)
    }

    /// Overwrite row `i` with the elements of `v` (any vector shape).
    pub fn set_row(&mut self, i: usize, v: &Matvec<T>) {
        assert_eq!(v.data.len(), self.ncols, "vector length mismatch");
        self.row_slice_mut(i).copy_from_slice(&v.data);
    }

    /// Overwrite column `j` with the elements of `v` (any vector shape).
    pub fn set_col(&mut self, j: usize, v: &Matvec<T>) {
        assert_eq!(v.data.len(), self.nrows, "vector length mismatch");
        for i in 0..self.nrows {
            self[(i, j)] = v.data[i];
        }
    }

    /// Multiply column `j` by `s` in place.
    pub fn scale_col(&mut self, j: usize, s: T) {
        for i in 0..self.nrows {
            self[(i, j)] = self[(i, j)] * s;
        }
    }

    /// Multiply row `i` by `s` in place.
    pub fn scale_row(&mut self, i: usize, s: T) {
        for x in self.row_slice_mut(i) {
            *x = *x * s;
        }
    }
}

impl<T> Matvec<T> {
    /// Swap two rows in place.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let mut m = Matvec::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// m.swap_rows(0, 1);
    /// assert_eq!(m[(0, 0)], 3.0);
    /// assert_eq!(m[(1, 0)], 1.0);
    /// ```
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            let n = self.ncols;
            for j in 0..n {
                self.data.swap(a * n + j, b * n + j);
            }
        }
    }

    /// Swap two columns in place.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let mut m = Matvec::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// m.swap_cols(0, 1);
    /// assert_eq!(m[(0, 0)], 2.0);
    /// assert_eq!(m[(0, 1)], 1.0);
    /// ```
    pub fn swap_cols(&mut self, a: usize, b: usize) {
        if a != b {
            let n = self.ncols;
            for i in 0..self.nrows {
                self.data.swap(i * n + a, i * n + b);
            }
        }
    }
}

// ── Inner products within one matrix ────────────────────────────────

impl<T: LinalgScalar> Matvec<T> {
    /// Hermitian inner product of columns `a` and `b`:
    /// `Σ_k m[k, a] · conj(m[k, b])`.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let m = Matvec::from_rows(2, 2, &[1.0_f64, 3.0, 2.0, 4.0]);
    /// assert_eq!(m.col_dot(0, 1), 11.0);
    /// ```
    pub fn col_dot(&self, a: usize, b: usize) -> T {
        let mut sum = T::zero();
        for k in 0..self.nrows {
            sum = sum + self[(k, a)] * self[(k, b)].conj();
        }
        sum
    }

    /// Hermitian inner product of rows `a` and `b`:
    /// `Σ_k m[a, k] · conj(m[b, k])`.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let m = Matvec::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.row_dot(0, 1), 11.0);
    /// ```
    pub fn row_dot(&self, a: usize, b: usize) -> T {
        self.row_slice(a)
            .iter()
            .zip(self.row_slice(b))
            .fold(T::zero(), |acc, (&x, &y)| acc + x * y.conj())
    }

    /// Squared Euclidean norm of column `j`.
    pub fn col_norm_squared(&self, j: usize) -> T::Real {
        let mut sum = <T::Real as Zero>::zero();
        for k in 0..self.nrows {
            sum = sum + self[(k, j)].modulus_squared();
        }
        sum
    }

    /// Squared Euclidean norm of row `i`.
    pub fn row_norm_squared(&self, i: usize) -> T::Real {
        self.row_slice(i)
            .iter()
            .fold(<T::Real as Zero>::zero(), |acc, &x| acc + x.modulus_squared())
    }

    /// Hermitian dot product of two vectors of equal length.
    ///
    /// Both operands may be row or column vectors.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let a = Matvec::row_vector(&[1.0_f64, 2.0, 3.0]);
    /// let b = Matvec::column_vector(&[4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Matvec<T>) -> T {
        assert!(
            (self.is_row_vector() || self.is_column_vector())
                && (rhs.is_row_vector() || rhs.is_column_vector()),
            "dot requires vector operands",
        );
        assert_eq!(self.data.len(), rhs.data.len(), "vector length mismatch");
        self.data
            .iter()
            .zip(rhs.data.iter())
            .fold(T::zero(), |acc, (&x, &y)| acc + x * y.conj())
    }
}
