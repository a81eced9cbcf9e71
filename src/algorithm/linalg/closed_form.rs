//! Closed-form determinant and inverse for 1×1 through 4×4 matrices
//!
//! All kernels read an N×N matrix as a column-major slice `m` where element
//! (i, j) is `m[i + N * j]`, and write the inverse in the same layout.
//! No pivoting: these are straight algebraic formulas, fast and unrolled, but
//! less accurate than a pivoted factorization on ill-conditioned input. The
//! 4×4 inverse in particular can lose several digits relative to LU.

use crate::dtype::LinalgElement;

#[inline]
pub(crate) fn det1<F: LinalgElement>(m: &[F]) -> F {
    m[0]
}

#[inline]
pub(crate) fn det2<F: LinalgElement>(m: &[F]) -> F {
    m[0] * m[3] - m[2] * m[1]
}

#[inline]
pub(crate) fn det3<F: LinalgElement>(m: &[F]) -> F {
    let a = |i: usize, j: usize| m[i + 3 * j];
    a(0, 0) * (a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1))
        - a(0, 1) * (a(1, 0) * a(2, 2) - a(1, 2) * a(2, 0))
        + a(0, 2) * (a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0))
}

/// 2×2 minors of the top two rows (`s`) and bottom two rows (`c`)
///
/// The determinant and every cofactor of a 4×4 matrix are sums of products
/// of one top minor and one bottom entry (or vice versa), so both
/// [`det4`] and [`inv4`] start here.
struct Minors4<F> {
    s: [F; 6],
    c: [F; 6],
}

#[inline]
fn minors4<F: LinalgElement>(m: &[F]) -> Minors4<F> {
    let a = |i: usize, j: usize| m[i + 4 * j];
    Minors4 {
        s: [
            a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
            a(0, 0) * a(1, 2) - a(1, 0) * a(0, 2),
            a(0, 0) * a(1, 3) - a(1, 0) * a(0, 3),
            a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2),
            a(0, 1) * a(1, 3) - a(1, 1) * a(0, 3),
            a(0, 2) * a(1, 3) - a(1, 2) * a(0, 3),
        ],
        c: [
            a(2, 0) * a(3, 1) - a(3, 0) * a(2, 1),
            a(2, 0) * a(3, 2) - a(3, 0) * a(2, 2),
            a(2, 0) * a(3, 3) - a(3, 0) * a(2, 3),
            a(2, 1) * a(3, 2) - a(3, 1) * a(2, 2),
            a(2, 1) * a(3, 3) - a(3, 1) * a(2, 3),
            a(2, 2) * a(3, 3) - a(3, 2) * a(2, 3),
        ],
    }
}

#[inline]
fn det4_from_minors<F: LinalgElement>(mn: &Minors4<F>) -> F {
    let (s, c) = (&mn.s, &mn.c);
    s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
}

#[inline]
pub(crate) fn det4<F: LinalgElement>(m: &[F]) -> F {
    det4_from_minors(&minors4(m))
}

/// Determinant of an N×N matrix, 1 ≤ N ≤ 4
#[inline]
pub(crate) fn det<F: LinalgElement>(n: usize, m: &[F]) -> F {
    match n {
        1 => det1(m),
        2 => det2(m),
        3 => det3(m),
        4 => det4(m),
        _ => unreachable!("no closed-form determinant for {n}x{n}"),
    }
}

#[inline]
pub(crate) fn inv1<F: LinalgElement>(m: &[F], det: F, out: &mut [F]) {
    debug_assert_eq!(m[0], det);
    out[0] = det.recip_val();
}

#[inline]
pub(crate) fn inv2<F: LinalgElement>(m: &[F], det: F, out: &mut [F]) {
    let r = det.recip_val();
    out[0] = m[3] * r;
    out[1] = -m[1] * r;
    out[2] = -m[2] * r;
    out[3] = m[0] * r;
}

/// Adjugate (transposed cofactor matrix) scaled by `1 / det`
#[inline]
pub(crate) fn inv3<F: LinalgElement>(m: &[F], det: F, out: &mut [F]) {
    let a = |i: usize, j: usize| m[i + 3 * j];
    let r = det.recip_val();

    out[0] = (a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1)) * r;
    out[1] = -(a(1, 0) * a(2, 2) - a(1, 2) * a(2, 0)) * r;
    out[2] = (a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0)) * r;

    out[3] = -(a(0, 1) * a(2, 2) - a(0, 2) * a(2, 1)) * r;
    out[4] = (a(0, 0) * a(2, 2) - a(0, 2) * a(2, 0)) * r;
    out[5] = -(a(0, 0) * a(2, 1) - a(0, 1) * a(2, 0)) * r;

    out[6] = (a(0, 1) * a(1, 2) - a(0, 2) * a(1, 1)) * r;
    out[7] = -(a(0, 0) * a(1, 2) - a(0, 2) * a(1, 0)) * r;
    out[8] = (a(0, 0) * a(1, 1) - a(0, 1) * a(1, 0)) * r;
}

/// Cofactor expansion over the 2×2 minors from [`minors4`]
#[inline]
pub(crate) fn inv4<F: LinalgElement>(m: &[F], det: F, out: &mut [F]) {
    let a = |i: usize, j: usize| m[i + 4 * j];
    let Minors4 { s, c } = minors4(m);
    let r = det.recip_val();
    let mut b = |i: usize, j: usize, v: F| out[i + 4 * j] = v * r;

    b(0, 0, a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3]);
    b(0, 1, -a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3]);
    b(0, 2, a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3]);
    b(0, 3, -a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3]);

    b(1, 0, -a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1]);
    b(1, 1, a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1]);
    b(1, 2, -a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1]);
    b(1, 3, a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1]);

    b(2, 0, a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0]);
    b(2, 1, -a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0]);
    b(2, 2, a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0]);
    b(2, 3, -a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0]);

    b(3, 0, -a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0]);
    b(3, 1, a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0]);
    b(3, 2, -a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0]);
    b(3, 3, a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0]);
}

/// Inverse of an N×N matrix, 1 ≤ N ≤ 4, given its nonzero determinant
#[inline]
pub(crate) fn inv<F: LinalgElement>(n: usize, m: &[F], det: F, out: &mut [F]) {
    match n {
        1 => inv1(m, det, out),
        2 => inv2(m, det, out),
        3 => inv3(m, det, out),
        4 => inv4(m, det, out),
        _ => unreachable!("no closed-form inverse for {n}x{n}"),
    }
}
