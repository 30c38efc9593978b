//! # numkit
//!
//! Dense linear-algebra toolkit, no-std compatible (requires `alloc`). The
//! core is a one-sided Jacobi singular value decomposition that works for
//! real and complex matrices of any shape, with a numerically guarded
//! pseudo-inverse and reconstruction.
//!
//! ## Quick start
//!
//! ```
//! use numkit::Matvec;
//!
//! let a = Matvec::from_rows(2, 2, &[4.0_f64, 1.0, 2.0, 3.0]);
//! let svd = a.svd().unwrap();
//!
//! let s = svd.singular_values().unwrap();
//! assert!(s[(0, 0)] >= s[(1, 0)]);
//!
//! let inv = svd.inverse().unwrap();
//! let id = &a * &inv;
//! assert!(id.max_abs_diff(&Matvec::eye(2, 0.0)) < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matvec`]: Heap-allocated `Matvec<T>` with runtime dimensions.
//!   `Vec<T>` row-major storage; row and column vectors are 1-row and
//!   1-column matrices. Implements [`MatrixRef`] / [`MatrixMut`], so the
//!   rotation kernels work on it directly. Arithmetic, transposes, norms,
//!   and row/column helpers (Hermitian dot products, scaling, swaps).
//!
//! - [`linalg`]: [`JacobiSvd`], the one-sided Jacobi SVD engine. Tall and
//!   square inputs are orthogonalized by column rotations, wide inputs by row
//!   rotations; both store `A = U·diag(σ)·Vᴴ`. Provides `inverse()`
//!   (pseudo-inverse with a relative singular-value cut-off),
//!   `reconstructed_input()`, `rank()` and `condition_number()`. The pair
//!   rotation itself is public as [`linalg::pair_rotation`] /
//!   [`linalg::rotate_pair`]. Convenience methods on `Matvec`:
//!   `a.svd()`, `a.pseudo_inverse()`.
//!
//! - [`fft`]: Radix-2 FFT on complex row/column vectors. Requires the
//!   `complex` feature.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats, the real half of every [`LinalgScalar`]
//!   - [`LinalgScalar`]: real floats and complex numbers, used by the SVD and norms
//!   - [`MatrixRef`] / [`MatrixMut`]: generic read/write access for algorithms
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade under the
//! `numkit` target: one `debug` record per decomposition, `trace` records
//! per sweep. Install any logger to see them.
//!
//! ## Complex matrices
//!
//! With the `complex` feature, `Complex<f32>` / `Complex<f64>` elements use
//! Hermitian inner products and conjugate transposes throughout; singular
//! values stay real.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | `std::error::Error` impls, hardware FPU via system libm |
//! | `libm`    | baseline | Pure-Rust software float fallback |
//! | `complex` | yes      | `Complex<f32>` / `Complex<f64>` support via `num-complex`, FFT |
//! | `all`     | no       | All features: `std` + `complex` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "complex")]
pub mod fft;
pub mod linalg;
pub mod matvec;
pub mod traits;

pub use linalg::{JacobiSvd, LinalgError};
pub use matvec::{Matvec, Matvecf32, Matvecf64};
#[cfg(feature = "complex")]
pub use matvec::{Matvecz32, Matvecz64};
pub use traits::{FloatScalar, LinalgScalar, MatrixMut, MatrixRef, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
