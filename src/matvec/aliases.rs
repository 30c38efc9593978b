//! Pre-defined type aliases for the supported `Matvec` element types.

use super::Matvec;

/// Matrix with `f32` elements.
pub type Matvecf32 = Matvec<f32>;
/// Matrix with `f64` elements.
pub type Matvecf64 = Matvec<f64>;

// ── Complex aliases (behind `complex` feature) ──────────────────────

/// Matrix with `Complex<f32>` elements.
#[cfg(feature = "complex")]
pub type Matvecz32 = Matvec<num_complex::Complex<f32>>;
/// Matrix with `Complex<f64>` elements.
#[cfg(feature = "complex")]
pub type Matvecz64 = Matvec<num_complex::Complex<f64>>;
