//! Common test utilities
#![allow(dead_code)]

use statarr::prelude::*;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Deterministic 64-bit LCG (Knuth's MMIX constants)
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Uniform sample in [0, 1) with 53 bits of precision
    pub fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Diagonally dominant N×N matrix: entries in [-1, 1) plus N on the diagonal
///
/// Filled column by column, so a given seed always yields the same matrix.
pub fn well_conditioned<const N: usize>(seed: u64) -> SMatrix<f64, N, N> {
    let mut rng = Lcg::new(seed);
    SMatrix::from_fn(|k| {
        let v = 2.0 * rng.next_f64() - 1.0;
        if k % N == k / N { v + N as f64 } else { v }
    })
}

/// 4×4 Hilbert matrix, H[i, j] = 1 / (i + j + 1)
pub fn hilbert4() -> SMatrix<f64, 4, 4> {
    SMatrix::from_fn(|k| 1.0 / ((k % 4) + (k / 4) + 1) as f64)
}

/// ‖A·X − I‖_F
pub fn residual<const N: usize>(a: &SMatrix<f64, N, N>, x: &SMatrix<f64, N, N>) -> f64 {
    (a.matmul(x) - SMatrix::identity()).frobenius_norm()
}
