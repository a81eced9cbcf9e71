//! Integration tests for determinant, inverse, LU and solve

mod common;

use common::{assert_allclose_f64, hilbert4, residual, well_conditioned};
use statarr::prelude::*;

#[test]
fn test_det_and_inv_1x1() {
    let a = SMatrix::<f64, 1, 1>::new(&[2.0]).unwrap();
    assert_eq!(det(&a), 2.0);
    assert_eq!(inv(&a).unwrap().as_slice(), &[0.5]);
}

#[test]
fn test_inv_2x2() {
    let a = SMatrix::<f64, 2, 2>::from_rows([[1.0, 2.0], [2.0, 1.0]]);
    let b = inv(&a).unwrap();
    let expected = SMatrix::<f64, 2, 2>::from_rows([[-1.0 / 3.0, 2.0 / 3.0], [2.0 / 3.0, -1.0 / 3.0]]);
    assert_allclose_f64(b.as_slice(), expected.as_slice(), 1e-14, 1e-15, "inv 2x2");
}

#[test]
fn test_inv_unsigned_promotes_to_float() {
    let a = SMatrix::<u32, 2, 2>::from_rows([[1, 2], [2, 1]]);
    let b = inv(&a).unwrap();
    assert_eq!(b.dtype(), DType::F64);

    let expected = inv(&a.to_float()).unwrap();
    assert_eq!(b, expected);
    assert_allclose_f64(
        b.as_slice(),
        &[-1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, -1.0 / 3.0],
        1e-14,
        1e-15,
        "inv u32",
    );
}

#[test]
fn test_integer_det() {
    let a = SMatrix::<i64, 3, 3>::from_rows([[6, 1, 1], [4, -2, 5], [2, 8, 7]]);
    assert_eq!(det(&a), -306.0);
}

#[test]
fn test_closed_form_residual_within_10x_of_lu() {
    fn check<const N: usize>() {
        for seed in 1..=64 {
            let a = well_conditioned::<N>(seed);
            let closed = inv(&a).unwrap();
            let factored = lu(&a).inverse().unwrap();

            let (rc, rl) = (residual(&a, &closed), residual(&a, &factored));
            assert!(
                rc <= 10.0 * rl + 10.0 * f64::EPSILON,
                "{N}x{N} seed {seed}: A*inv(A) residual {rc:e} vs LU {rl:e}"
            );

            let (lc, ll) = (residual(&closed, &a), residual(&factored, &a));
            assert!(
                lc <= 10.0 * ll + 10.0 * f64::EPSILON,
                "{N}x{N} seed {seed}: inv(A)*A residual {lc:e} vs LU {ll:e}"
            );
        }
    }
    check::<2>();
    check::<3>();
    check::<4>();
}

#[test]
fn test_lu_path_residuals() {
    fn check<const N: usize>() {
        for seed in 1..=16 {
            let a = well_conditioned::<N>(seed);
            let x = inv(&a).unwrap();
            assert!(residual(&a, &x) < 1e-12, "{N}x{N} seed {seed}");
            assert!(residual(&x, &a) < 1e-12, "{N}x{N} seed {seed}");
            // N > 4 always goes through LU, so both entry points agree exactly
            assert_eq!(x, lu(&a).inverse().unwrap());
        }
    }
    check::<5>();
    check::<6>();
    check::<8>();
}

#[test]
fn test_det_matches_lu_for_small_orders() {
    fn check<const N: usize>() {
        for seed in 1..=16 {
            let a = well_conditioned::<N>(seed);
            let (closed, factored) = (det(&a), lu(&a).det());
            assert!(
                (closed - factored).abs() <= 1e-12 * factored.abs(),
                "{N}x{N} seed {seed}: {closed} vs {factored}"
            );
        }
    }
    check::<2>();
    check::<3>();
    check::<4>();
}

/// The 4×4 closed form does not pivot; on the Hilbert matrix it loses
/// roughly two more digits than LU. This pins the current behavior.
#[test]
fn test_hilbert_4x4_known_deviation() {
    let h = hilbert4();
    let closed = inv(&h).unwrap();
    let factored = lu(&h).inverse().unwrap();

    let (rc, rl) = (residual(&h, &closed), residual(&h, &factored));
    assert!(rc > 10.0 * rl, "closed {rc:e}, lu {rl:e}");
    assert!(rc < 1e-9, "closed-form residual grew: {rc:e}");
    assert!(rl < 1e-11, "lu residual grew: {rl:e}");
}

#[test]
#[ignore = "4x4 closed form is not pivoted; fails on ill-conditioned input"]
fn test_hilbert_4x4_parity_with_lu() {
    let h = hilbert4();
    let rc = residual(&h, &inv(&h).unwrap());
    let rl = residual(&h, &lu(&h).inverse().unwrap());
    assert!(rc <= 10.0 * rl + 10.0 * f64::EPSILON);
}

#[test]
fn test_singular_matrix_error() {
    let a = SMatrix::<f64, 4, 4>::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [2.0, 4.0, 6.0, 8.0],
        [0.0, 1.0, 0.0, 1.0],
        [5.0, 0.0, 0.0, 1.0],
    ]);
    let err = inv(&a).unwrap_err();
    assert!(matches!(err, Error::SingularMatrix { order: 4 }));
    assert!(err.is_recoverable());
    assert_eq!(det(&a), 0.0);

    let z = SMatrix::<i32, 7, 7>::zeros();
    assert!(matches!(inv(&z), Err(Error::SingularMatrix { order: 7 })));
}

#[test]
fn test_lu_factors_reconstruct() {
    let a = well_conditioned::<6>(3);
    let f = lu(&a);
    let pa = f.p() * a;
    let l_u = f.l() * f.u();
    assert_allclose_f64(pa.as_slice(), l_u.as_slice(), 0.0, 1e-13, "PA = LU");

    let l = f.l();
    let u = f.u();
    for i in 0..6 {
        assert_eq!(l[(i, i)], 1.0);
        for j in (i + 1)..6 {
            assert_eq!(l[(i, j)], 0.0);
            assert_eq!(u[(j, i)], 0.0);
        }
    }
}

#[test]
fn test_solve_matches_inverse() {
    let a = well_conditioned::<5>(11);
    let b = SVector::<f64, 5>::from_fn(|i| i as f64 - 2.0);
    let x = solve(&a, &b).unwrap();
    let via_inv = inv(&a).unwrap() * b;
    assert_allclose_f64(x.as_slice(), via_inv.as_slice(), 1e-12, 1e-13, "solve");

    let back = a * x;
    assert_allclose_f64(back.as_slice(), b.as_slice(), 1e-12, 1e-13, "A x = b");
}

#[test]
fn test_runtime_checked_api() {
    let m = well_conditioned::<3>(5).to_mut();
    assert_eq!(m.try_det().unwrap(), det(&m));
    assert_eq!(m.try_inv().unwrap(), inv(&m).unwrap());

    let rect = SMatrix::<f64, 3, 2>::zeros();
    let err = rect.try_det().unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn test_inverse_returns_new_array() {
    let a = well_conditioned::<4>(9);
    let copy = a;
    let _ = a.inv().unwrap();
    assert_eq!(a, copy);
}
