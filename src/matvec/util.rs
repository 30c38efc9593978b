use alloc::vec::Vec;

use crate::traits::{LinalgScalar, Scalar};

use super::Matvec;

// ── Map / aggregation ───────────────────────────────────────────────

impl<T> Matvec<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let m = Matvec::from_rows(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matvec<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        Matvec {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Matvec<T> {
    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Sum of the main diagonal.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let m = Matvec::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.trace(), 6.0);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows.min(self.ncols);
        (0..n).fold(T::zero(), |acc, i| acc + self[(i, i)])
    }

    /// Main diagonal as a column vector.
    pub fn diag(&self) -> Matvec<T> {
        let n = self.nrows.min(self.ncols);
        let data: Vec<T> = (0..n).map(|i| self[(i, i)]).collect();
        Matvec::from_vec(n, 1, data)
    }

    /// Transpose: (M×N) → (N×M).
    ///
    /// ```
    /// use numkit::Matvec;
    /// let a = Matvec::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let t = a.transpose();
    /// assert_eq!(t.nrows(), 3);
    /// assert_eq!(t[(2, 1)], 6.0);
    /// ```
    pub fn transpose(&self) -> Matvec<T> {
        Matvec::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }
}

impl<T: LinalgScalar> Matvec<T> {
    /// Hermitian (conjugate) transpose. Same as [`transpose`](Self::transpose)
    /// for real element types.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let a = Matvec::from_rows(1, 2, &[1.0_f64, 2.0]);
    /// let h = a.conjugate_transpose();
    /// assert!(h.is_column_vector());
    /// assert_eq!(h[(1, 0)], 2.0);
    /// ```
    pub fn conjugate_transpose(&self) -> Matvec<T> {
        Matvec::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)].conj())
    }

    /// Element-wise complex conjugate.
    pub fn conj(&self) -> Matvec<T> {
        self.map(|x| x.conj())
    }
}
