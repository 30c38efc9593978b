#![cfg(feature = "complex")]

use num_complex::Complex;
use numkit::fft::{Fft, FftError};
use numkit::{JacobiSvd, Matvec};

type C = Complex<f64>;

fn c(re: f64, im: f64) -> C {
    Complex::new(re, im)
}

const TOL: f64 = 1e-10;

fn assert_complex_near(a: C, b: C, tol: f64, msg: &str) {
    assert!(
        (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

fn assert_mat_near(a: &Matvec<C>, b: &Matvec<C>, tol: f64, msg: &str) {
    assert_eq!((a.nrows(), a.ncols()), (b.nrows(), b.ncols()), "{}: shape", msg);
    let diff = a.max_abs_diff(b);
    assert!(diff < tol, "{}: max diff {}", msg, diff);
}

fn sample(m: usize, n: usize) -> Matvec<C> {
    Matvec::from_fn(m, n, |i, j| {
        let re = ((i * 5 + j * 3 + 1) % 7) as f64 / 3.0 - 1.0;
        let im = ((i * 2 + j * 7 + 4) % 11) as f64 / 5.0 - 1.0;
        c(re, im)
    })
}

fn converged(a: &Matvec<C>) -> JacobiSvd<'_, C> {
    let mut svd = JacobiSvd::with_input(a).unwrap();
    svd.set_rotation_error(1e-28).unwrap();
    svd.set_max_sweeps(40).unwrap();
    svd.set_convergence_tolerance(Some(1e-24)).unwrap();
    svd.svd().unwrap();
    svd
}

// ── Complex SVD ──────────────────────────────────────────────────────

#[test]
fn complex_reconstruction() {
    for &(m, n) in &[(3, 2), (2, 3), (4, 4), (1, 3)] {
        let a = sample(m, n);
        let svd = a.svd().unwrap();
        assert!(svd
            .singular_values()
            .unwrap()
            .as_slice()
            .iter()
            .all(|&s| s >= 0.0));
        assert_mat_near(&svd.reconstructed_input().unwrap(), &a, 1e-12, "U·Σ·Vᴴ");
    }
}

#[test]
fn complex_factors_are_unitary() {
    for &(m, n) in &[(4, 3), (3, 4)] {
        let a = sample(m, n);
        let svd = converged(&a);
        let k = m.min(n);
        let u = svd.left_singular_vectors().unwrap();
        let v = svd.right_singular_vectors().unwrap();
        let s = svd.singular_values().unwrap();

        for i in 0..k {
            if s[(i, 0)] < 1e-8 {
                continue;
            }
            for j in 0..k {
                if s[(j, 0)] < 1e-8 {
                    continue;
                }
                let expected = if i == j { c(1.0, 0.0) } else { c(0.0, 0.0) };
                // col_dot(j, i) = Σ conj(u_i) u_j = (UᴴU)[i, j]
                assert_complex_near(u.col_dot(j, i), expected, TOL, "UᴴU");
                assert_complex_near(v.col_dot(j, i), expected, TOL, "VᴴV");
            }
        }
    }
}

#[test]
fn complex_2x2_inverse() {
    let a = Matvec::from_rows(2, 2, &[c(2.0, 1.0), c(1.0, -1.0), c(1.0, 0.0), c(3.0, 2.0)]);
    let inv = a.pseudo_inverse().unwrap();
    let id = &a * &inv;
    assert_mat_near(&id, &Matvec::eye(2, c(0.0, 0.0)), TOL, "A·A⁻¹");
}

#[test]
fn complex_pseudo_inverse_wide() {
    let a = sample(2, 4);
    let p = converged(&a).inverse().unwrap();
    assert_eq!((p.nrows(), p.ncols()), (4, 2));
    let apa = &(&a * &p) * &a;
    assert_mat_near(&apa, &a, 1e-9, "A·A⁺·A");
    let ap = &a * &p;
    assert_mat_near(&ap, &ap.conjugate_transpose(), 1e-9, "A·A⁺ Hermitian");
}

#[test]
fn complex_rank_one() {
    // outer product u·vᴴ has a single singular value ‖u‖·‖v‖
    let u = Matvec::column_vector(&[c(1.0, 1.0), c(0.0, 2.0), c(-1.0, 0.0)]);
    let v = Matvec::column_vector(&[c(2.0, 0.0), c(1.0, -1.0)]);
    let a = &u * &v.conjugate_transpose();
    let svd = converged(&a);
    let s = svd.singular_values().unwrap();
    let expected = u.frobenius_norm() * v.frobenius_norm();
    assert!((s[(0, 0)] - expected).abs() < TOL);
    assert!(s[(1, 0)] < 1e-8);
    assert_eq!(svd.rank(1e-8).unwrap(), 1);
}

#[test]
fn complex_transpose_duality() {
    let a = sample(2, 4);
    let at = a.transpose();
    let wide = a.svd().unwrap();
    let tall = at.svd().unwrap();

    let sw = wide.singular_values().unwrap();
    let st = tall.singular_values().unwrap();
    assert!(sw.max_abs_diff(st) < 1e-12);

    // plain transpose conjugates the factors
    assert_mat_near(
        wide.left_singular_vectors().unwrap(),
        &tall.right_singular_vectors().unwrap().conj(),
        1e-12,
        "U(M) = conj V(Mᵗ)",
    );
    assert_mat_near(
        wide.right_singular_vectors().unwrap(),
        &tall.left_singular_vectors().unwrap().conj(),
        1e-12,
        "V(M) = conj U(Mᵗ)",
    );
}

#[test]
fn complex_f32_reconstruction() {
    let a = Matvec::from_fn(3, 2, |i, j| Complex::new((i + j) as f32, i as f32 - j as f32));
    let svd = a.svd().unwrap();
    let r = svd.reconstructed_input().unwrap();
    assert!(r.max_abs_diff(&a) < 1e-4);
}

// ── FFT ──────────────────────────────────────────────────────────────

#[test]
fn fft_impulse_is_flat() {
    let mut x = Matvec::zeros(8, 1, c(0.0, 0.0));
    x[(0, 0)] = c(1.0, 0.0);
    let plan = Fft::new(8).unwrap();
    plan.forward(&mut x).unwrap();
    for k in 0..8 {
        assert_complex_near(x[(k, 0)], c(1.0, 0.0), 1e-12, "flat");
    }
}

#[test]
fn fft_shifted_impulse_is_twiddle() {
    let n = 16;
    let mut vals = vec![c(0.0, 0.0); n];
    vals[1] = c(1.0, 0.0);
    let y = Matvec::row_vector(&vals).fft().unwrap();
    for k in 0..n {
        let theta = -2.0 * core::f64::consts::PI * k as f64 / n as f64;
        assert_complex_near(y[(0, k)], Complex::from_polar(1.0, theta), 1e-12, "e^{-iθ}");
    }
}

#[test]
fn fft_round_trip_and_parseval() {
    let vals: Vec<C> = (0..32)
        .map(|i| c((i as f64 * 0.37).cos(), (i as f64 * 0.11).sin() - 0.5))
        .collect();
    let x = Matvec::row_vector(&vals);
    let y = x.fft().unwrap();

    // Σ|x|² = Σ|X|² / n
    let ex: f64 = x.as_slice().iter().map(|z| z.norm_sqr()).sum();
    let ey: f64 = y.as_slice().iter().map(|z| z.norm_sqr()).sum();
    assert!((ex - ey / 32.0).abs() < 1e-10);

    let back = y.ifft().unwrap();
    assert_mat_near(&back, &x, 1e-12, "round trip");
}

#[test]
fn fft_plan_reuse() {
    let plan = Fft::<f64>::new(4).unwrap();
    let mut a = Matvec::row_vector(&[c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0), c(4.0, 0.0)]);
    let mut b = a.transpose();
    plan.forward(&mut a).unwrap();
    plan.forward(&mut b).unwrap();
    assert_mat_near(&a.transpose(), &b, 1e-15, "row vs column");
    plan.inverse(&mut a).unwrap();
    assert_complex_near(a[(0, 3)], c(4.0, 0.0), 1e-12, "inverse");
}

#[test]
fn fft_errors() {
    assert_eq!(Fft::<f64>::new(10).unwrap_err(), FftError::NotPowerOfTwo(10));
    let plan = Fft::<f64>::new(2).unwrap();
    let mut m = Matvec::zeros(2, 2, c(0.0, 0.0));
    assert_eq!(
        plan.forward(&mut m).unwrap_err(),
        FftError::NotAVector { rows: 2, cols: 2 }
    );
    assert_eq!(
        FftError::LengthMismatch { expected: 2, got: 4 }.to_string(),
        "fft length mismatch: expected 2, got 4"
    );
}
