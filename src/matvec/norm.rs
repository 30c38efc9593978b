use num_traits::Zero;

use crate::traits::LinalgScalar;

use super::Matvec;

// ── Norms ───────────────────────────────────────────────────────────

impl<T: LinalgScalar> Matvec<T> {
    /// Frobenius norm (square root of sum of squared moduli).
    ///
    /// For a row or column vector this is the Euclidean norm.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let m = Matvec::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T::Real {
        let mut sum = <T::Real as Zero>::zero();
        for &x in &self.data {
            sum = sum + x.modulus_squared();
        }
        sum.lsqrt()
    }

    /// Infinity norm (maximum row sum of moduli).
    ///
    /// ```
    /// use numkit::Matvec;
    /// let m = Matvec::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]);
    /// assert!((m.norm_inf() - 7.0).abs() < 1e-12);
    /// ```
    pub fn norm_inf(&self) -> T::Real {
        let mut max = <T::Real as Zero>::zero();
        for i in 0..self.nrows {
            let row_sum = self
                .row_slice(i)
                .iter()
                .fold(<T::Real as Zero>::zero(), |acc, &x| acc + x.modulus());
            if row_sum > max {
                max = row_sum;
            }
        }
        max
    }

    /// One norm (maximum column sum of moduli).
    ///
    /// ```
    /// use numkit::Matvec;
    /// let m = Matvec::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]);
    /// assert!((m.norm_one() - 6.0).abs() < 1e-12);
    /// ```
    pub fn norm_one(&self) -> T::Real {
        let mut max = <T::Real as Zero>::zero();
        for j in 0..self.ncols {
            let mut col_sum = <T::Real as Zero>::zero();
            for i in 0..self.nrows {
                col_sum = col_sum + self[(i, j)].modulus();
            }
            if col_sum > max {
                max = col_sum;
            }
        }
        max
    }

    /// Largest element modulus, `0` for an empty matrix.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let m = Matvec::from_rows(2, 2, &[1.0_f64, -5.0, 3.0, 4.0]);
    /// assert_eq!(m.max_abs(), 5.0);
    /// ```
    pub fn max_abs(&self) -> T::Real {
        self.data.iter().fold(<T::Real as Zero>::zero(), |acc, &x| {
            let d = x.modulus();
            if d > acc { d } else { acc }
        })
    }

    /// Largest element-wise modulus difference to `other`.
    ///
    /// Panics if the shapes differ.
    pub fn max_abs_diff(&self, other: &Matvec<T>) -> T::Real {
        assert_eq!(
            (self.nrows, self.ncols),
            (other.nrows, other.ncols),
            "dimension mismatch",
        );
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(<T::Real as Zero>::zero(), |acc, (&a, &b)| {
                let d = (a - b).modulus();
                if d > acc { d } else { acc }
            })
    }
}
