use numkit::{JacobiSvd, LinalgError, Matvec};

fn assert_mat_near(a: &Matvec<f64>, b: &Matvec<f64>, tol: f64, msg: &str) {
    assert_eq!((a.nrows(), a.ncols()), (b.nrows(), b.ncols()), "{}: shape", msg);
    let diff = a.max_abs_diff(b);
    assert!(diff < tol, "{}: max diff {}", msg, diff);
}

/// Deterministic test matrix with entries in [-1, 1].
fn sample(m: usize, n: usize) -> Matvec<f64> {
    Matvec::from_fn(m, n, |i, j| {
        let x = (i * 7 + j * 13 + 3) % 17;
        x as f64 / 8.0 - 1.0
    })
}

fn converged(a: &Matvec<f64>) -> JacobiSvd<'_, f64> {
    let mut svd = JacobiSvd::with_input(a).unwrap();
    svd.set_rotation_error(1e-28).unwrap();
    svd.set_max_sweeps(40).unwrap();
    svd.set_convergence_tolerance(Some(1e-24)).unwrap();
    svd.svd().unwrap();
    svd
}

// ── Reconstruction ───────────────────────────────────────────────────

#[test]
fn reconstruction_all_shapes() {
    for &(m, n) in &[(1, 1), (1, 5), (5, 1), (3, 3), (5, 3), (3, 5), (6, 4), (4, 6)] {
        let a = sample(m, n);
        let svd = a.svd().unwrap();
        assert_eq!(svd.is_column_svd(), m >= n);

        let k = m.min(n);
        let u = svd.left_singular_vectors().unwrap();
        let v = svd.right_singular_vectors().unwrap();
        let s = svd.singular_values().unwrap();
        assert_eq!((u.nrows(), u.ncols()), (m, k));
        assert_eq!((v.nrows(), v.ncols()), (n, k));
        assert_eq!((s.nrows(), s.ncols()), (k, 1));
        assert!(s.as_slice().iter().all(|&x| x >= 0.0));

        let r = svd.reconstructed_input().unwrap();
        assert_mat_near(&r, &a, 1e-12, "U·Σ·Vᴴ");
    }
}

#[test]
fn reconstruction_f32() {
    let a = Matvec::from_fn(4, 3, |i, j| ((i + 2 * j) % 5) as f32 - 2.0);
    let svd = a.svd().unwrap();
    let r = svd.reconstructed_input().unwrap();
    assert!(r.max_abs_diff(&a) < 1e-5);

    let w = a.transpose();
    let svd = w.svd().unwrap();
    let r = svd.reconstructed_input().unwrap();
    assert!(r.max_abs_diff(&w) < 1e-5);
}

// ── Orthogonality after convergence ──────────────────────────────────

#[test]
fn converged_tall_and_wide_factors() {
    for &(m, n) in &[(6, 4), (4, 6), (5, 5)] {
        let a = sample(m, n);
        let svd = converged(&a);
        let k = m.min(n);

        let u = svd.left_singular_vectors().unwrap();
        let v = svd.right_singular_vectors().unwrap();
        let s = svd.singular_values().unwrap();

        // a rank-deficient input leaves zero or noise vectors behind;
        // compare only directions with a non-negligible singular value
        let keep: Vec<usize> = (0..k).filter(|&i| s[(i, 0)] > 1e-8).collect();
        for &i in &keep {
            for &j in &keep {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((u.col_dot(i, j) - expected).abs() < 1e-10, "UᴴU[{},{}]", i, j);
                assert!((v.col_dot(i, j) - expected).abs() < 1e-10, "VᴴV[{},{}]", i, j);
            }
        }

        let sv = s.as_slice();
        for w in sv.windows(2) {
            assert!(w[0] >= w[1] - 1e-10, "not descending: {:?}", sv);
        }
    }
}

// ── Pseudo-inverse ───────────────────────────────────────────────────

#[test]
fn pseudo_inverse_penrose_conditions() {
    for &(m, n) in &[(5, 3), (3, 5), (4, 4)] {
        let a = sample(m, n);
        let p = converged(&a).inverse().unwrap();
        assert_eq!((p.nrows(), p.ncols()), (n, m));

        let apa = &(&a * &p) * &a;
        assert_mat_near(&apa, &a, 1e-9, "A·A⁺·A");
        let pap = &(&p * &a) * &p;
        assert_mat_near(&pap, &p, 1e-9, "A⁺·A·A⁺");

        let ap = &a * &p;
        assert_mat_near(&ap, &ap.transpose(), 1e-9, "A·A⁺ symmetric");
        let pa = &p * &a;
        assert_mat_near(&pa, &pa.transpose(), 1e-9, "A⁺·A symmetric");
    }
}

#[test]
fn singular_directions_are_dropped_not_amplified() {
    // third column is the sum of the first two
    let a = Matvec::from_rows(
        4,
        3,
        &[1.0_f64, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, -1.0, 1.0],
    );
    let svd = converged(&a);
    assert_eq!(svd.rank(1e-8).unwrap(), 2);

    let p = svd.inverse().unwrap();
    assert!(p.frobenius_norm() < 10.0, "pseudo-inverse blew up: {}", p.frobenius_norm());
    let proj = &a * &p;
    assert_mat_near(&(&proj * &proj), &proj, 1e-9, "A·A⁺ is a projector");
}

#[test]
fn square_inverse() {
    let a = Matvec::from_rows(3, 3, &[2.0_f64, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0]);
    let inv = converged(&a).inverse().unwrap();
    // inverse of the 1-D Laplacian
    let expected = Matvec::from_rows(3, 3, &[0.75, 0.5, 0.25, 0.5, 1.0, 0.5, 0.25, 0.5, 0.75]);
    assert_mat_near(&inv, &expected, 1e-10, "A⁻¹");
}

// ── Extreme magnitudes ───────────────────────────────────────────────

fn assert_scaled_3_2(scale: f64) {
    // [[3, 2], [2, 3]] has singular values 5 and 1
    let a = Matvec::from_rows(2, 2, &[3.0, 2.0, 2.0, 3.0]).map(|x: f64| x * scale);
    let svd = a.svd().unwrap();
    let s = svd.singular_values().unwrap();
    assert!((s[(0, 0)] / scale - 5.0).abs() < 1e-12, "σ₀ = {:e}", s[(0, 0)]);
    assert!((s[(1, 0)] / scale - 1.0).abs() < 1e-12, "σ₁ = {:e}", s[(1, 0)]);

    let r = svd.reconstructed_input().unwrap();
    assert!(r.max_abs_diff(&a) < 1e-12 * a.max_abs(), "reconstruction at scale {:e}", scale);

    let p = svd.inverse().unwrap();
    let id = &a * &p;
    assert_mat_near(&id, &Matvec::eye(2, 0.0), 1e-10, "A·A⁺");
}

#[test]
fn huge_entries() {
    assert_scaled_3_2(1e80);
    assert_scaled_3_2(1e300);
}

#[test]
fn tiny_entries() {
    assert_scaled_3_2(1e-170);
    assert_scaled_3_2(1e-300);
}

#[test]
fn wide_tiny_entries() {
    let a = sample(2, 5).map(|x| x * 1e-200);
    let svd = a.svd().unwrap();
    assert!(svd.singular_values().unwrap()[(0, 0)] > 0.0);
    let r = svd.reconstructed_input().unwrap();
    assert!(r.max_abs_diff(&a) < 1e-12 * a.max_abs());
}

// ── Orientation duality ──────────────────────────────────────────────

#[test]
fn transpose_swaps_factors() {
    for &(m, n) in &[(2, 5), (3, 4)] {
        let a = sample(m, n);
        let at = a.transpose();
        let wide = a.svd().unwrap();
        let tall = at.svd().unwrap();

        assert_mat_near(
            wide.singular_values().unwrap(),
            tall.singular_values().unwrap(),
            1e-12,
            "σ(M) = σ(Mᵗ)",
        );
        assert_mat_near(
            wide.left_singular_vectors().unwrap(),
            tall.right_singular_vectors().unwrap(),
            1e-12,
            "U(M) = V(Mᵗ)",
        );
        assert_mat_near(
            wide.right_singular_vectors().unwrap(),
            tall.left_singular_vectors().unwrap(),
            1e-12,
            "V(M) = U(Mᵗ)",
        );
    }
}

// ── Scenarios ────────────────────────────────────────────────────────

#[test]
fn identity_scenario() {
    let i2 = Matvec::eye(2, 0.0_f64);
    let svd = i2.svd().unwrap();
    assert_eq!(svd.singular_values().unwrap().as_slice(), &[1.0, 1.0]);
    assert_eq!(svd.left_singular_vectors().unwrap(), &i2);
    assert_eq!(svd.right_singular_vectors().unwrap(), &i2);
    assert_eq!(svd.inverse().unwrap(), i2);
}

#[test]
fn wide_scenario() {
    let a = Matvec::from_rows(2, 3, &[1.0_f64, 0.0, 0.0, 0.0, 2.0, 0.0]);
    let svd = a.svd().unwrap();
    assert_eq!(svd.singular_values().unwrap().as_slice(), &[2.0, 1.0]);
    assert_eq!(svd.reconstructed_input().unwrap(), a);

    let p = svd.inverse().unwrap();
    let expected = Matvec::from_rows(3, 2, &[1.0, 0.0, 0.0, 0.5, 0.0, 0.0]);
    assert_mat_near(&p, &expected, 1e-15, "A⁺");
}

#[test]
fn threshold_boundary_scenario() {
    let below = Matvec::from_diag(&[1.0_f64, 1e-9]);
    assert_eq!(below.pseudo_inverse().unwrap()[(1, 1)], 0.0);

    let above = Matvec::from_diag(&[1.0_f64, 1e-6]);
    let p = above.pseudo_inverse().unwrap();
    assert!((p[(1, 1)] - 1e6).abs() < 1e-3);
}

// ── Engine lifecycle ─────────────────────────────────────────────────

#[test]
fn engine_reuse_across_inputs() {
    let a = sample(3, 2);
    let b = sample(2, 4);
    let mut svd = JacobiSvd::new();
    assert_eq!(svd.svd().unwrap_err(), LinalgError::NoInput);

    svd.set_input(&a).unwrap();
    svd.svd().unwrap();
    assert!(svd.is_column_svd());
    let first = svd.singular_values().unwrap().clone();

    svd.set_input(&b).unwrap();
    assert_eq!(svd.inverse().unwrap_err(), LinalgError::NotDecomposed);
    svd.svd().unwrap();
    assert!(!svd.is_column_svd());
    assert_mat_near(&svd.reconstructed_input().unwrap(), &b, 1e-12, "B");

    svd.set_input(&a).unwrap();
    svd.svd().unwrap();
    assert_eq!(svd.singular_values().unwrap(), &first);
}

#[test]
fn settings_survive_set_input() {
    let a = sample(3, 3);
    let mut svd = JacobiSvd::new();
    svd.set_max_sweeps(7).unwrap();
    svd.set_rotation_error(1e-20).unwrap();
    svd.set_input(&a).unwrap();
    assert_eq!(svd.max_sweeps(), 7);
    assert_eq!(svd.rotation_error(), 1e-20);
    svd.svd().unwrap();
    assert_eq!(svd.sweeps_performed(), 7);
}

#[cfg(feature = "std")]
#[test]
fn errors_display() {
    let e = JacobiSvd::<f64>::new().singular_values().unwrap_err();
    assert_eq!(e.to_string(), "decomposition has not been computed");
    let boxed: Box<dyn std::error::Error> = Box::new(LinalgError::ConvergenceFailure);
    assert_eq!(boxed.to_string(), "iterative algorithm did not converge");
}
