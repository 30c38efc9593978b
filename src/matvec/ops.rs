use alloc::vec;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;

use super::{DimensionMismatch, Matvec};

// ── Element-wise addition / subtraction ─────────────────────────────

impl<T: Scalar> Matvec<T> {
    fn zip_with(&self, rhs: &Self, op: &str, f: impl Fn(T, T) -> T) -> Self {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} {} {}x{}",
            self.nrows, self.ncols, op, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matvec {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Add<&Matvec<T>> for &Matvec<T> {
    type Output = Matvec<T>;
    fn add(self, rhs: &Matvec<T>) -> Matvec<T> {
        self.zip_with(rhs, "+", |a, b| a + b)
    }
}

impl<T: Scalar> Add for Matvec<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matvec<T>> for Matvec<T> {
    type Output = Matvec<T>;
    fn add(self, rhs: &Matvec<T>) -> Matvec<T> {
        &self + rhs
    }
}

impl<T: Scalar> AddAssign<&Matvec<T>> for Matvec<T> {
    fn add_assign(&mut self, rhs: &Matvec<T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} += {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar> Sub<&Matvec<T>> for &Matvec<T> {
    type Output = Matvec<T>;
    fn sub(self, rhs: &Matvec<T>) -> Matvec<T> {
        self.zip_with(rhs, "-", |a, b| a - b)
    }
}

impl<T: Scalar> Sub for Matvec<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matvec<T>> for Matvec<T> {
    type Output = Matvec<T>;
    fn sub(self, rhs: &Matvec<T>) -> Matvec<T> {
        &self - rhs
    }
}

impl<T: Scalar> SubAssign<&Matvec<T>> for Matvec<T> {
    fn sub_assign(&mut self, rhs: &Matvec<T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} -= {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for &Matvec<T> {
    type Output = Matvec<T>;

    fn neg(self) -> Matvec<T> {
        self.map(|x| T::zero() - x)
    }
}

impl<T: Scalar> Neg for Matvec<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar> Matvec<T> {
    /// Matrix product with a shape check instead of a panic.
    ///
    /// ```
    /// use numkit::Matvec;
    /// let a = Matvec::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let b = Matvec::from_rows(2, 1, &[1.0, 1.0]);
    /// let c = a.try_mul(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 3.0);
    /// assert_eq!(c[(1, 0)], 7.0);
    /// ```
    pub fn try_mul(&self, rhs: &Matvec<T>) -> Result<Matvec<T>, DimensionMismatch> {
        if self.ncols != rhs.nrows {
            return Err(DimensionMismatch {
                expected: (self.ncols, rhs.ncols),
                got: (rhs.nrows, rhs.ncols),
            });
        }
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![T::zero(); m * p];
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                if a_ik == T::zero() {
                    continue;
                }
                for j in 0..p {
                    data[i * p + j] = data[i * p + j] + a_ik * rhs.data[k * p + j];
                }
            }
        }
        Ok(Matvec {
            data,
            nrows: m,
            ncols: p,
        })
    }
}

impl<T: Scalar> Mul<&Matvec<T>> for &Matvec<T> {
    type Output = Matvec<T>;

    fn mul(self, rhs: &Matvec<T>) -> Matvec<T> {
        match self.try_mul(rhs) {
            Ok(product) => product,
            Err(_) => panic!(
                "dimension mismatch: {}x{} * {}x{}",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols,
            ),
        }
    }
}

impl<T: Scalar> Mul for Matvec<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matvec<T>> for Matvec<T> {
    type Output = Matvec<T>;
    fn mul(self, rhs: &Matvec<T>) -> Matvec<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Matvec<T>> for &Matvec<T> {
    type Output = Matvec<T>;
    fn mul(self, rhs: Matvec<T>) -> Matvec<T> {
        self * &rhs
    }
}

// ── Scalar multiplication / division ────────────────────────────────

impl<T: Scalar> Mul<T> for Matvec<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar> Mul<T> for &Matvec<T> {
    type Output = Matvec<T>;

    fn mul(self, rhs: T) -> Matvec<T> {
        self.map(|x| x * rhs)
    }
}

impl<T: Scalar> MulAssign<T> for Matvec<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

impl<T: Scalar> Div<T> for Matvec<T> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

impl<T: Scalar> Div<T> for &Matvec<T> {
    type Output = Matvec<T>;

    fn div(self, rhs: T) -> Matvec<T> {
        self.map(|x| x / rhs)
    }
}

impl<T: Scalar> DivAssign<T> for Matvec<T> {
    fn div_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x / rhs;
        }
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul_matvec {
    ($($t:ty),*) => {
        $(
            impl Mul<Matvec<$t>> for $t {
                type Output = Matvec<$t>;
                fn mul(self, rhs: Matvec<$t>) -> Matvec<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matvec<$t>> for $t {
                type Output = Matvec<$t>;
                fn mul(self, rhs: &Matvec<$t>) -> Matvec<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul_matvec!(f32, f64);
