//! LU factorization with partial pivoting (Doolittle algorithm)
//!
//! The slice kernels here serve two callers: the size-generic dispatcher,
//! which falls back to them for matrices larger than 4×4, and the public
//! [`LuDecomposition`] type, which is available for every order.
//!
//! All slices are column-major: element (i, j) of an n-row matrix is
//! `v[i + j * n]`.

use crate::array::{MMatrix, SMatrix, SVector, StaticArray};
use crate::dtype::LinalgElement;
use crate::error::{Error, Result};

/// Swap rows `a` and `b` of a column-major matrix with `nrows` rows
#[inline]
pub(crate) fn swap_rows<F: Copy>(v: &mut [F], nrows: usize, a: usize, b: usize) {
    for col in v.chunks_exact_mut(nrows) {
        col.swap(a, b);
    }
}

/// Factor the n×n matrix `lu` in place so that PA = LU
///
/// On return the strict lower triangle holds L (unit diagonal implied) and
/// the upper triangle holds U. Step `col` swaps rows `col` and `p` with
/// `p >= col`; `on_swap(col, p)` is called for every such swap so callers
/// can track the permutation or apply it to a right-hand side. A column
/// whose largest candidate pivot is exactly zero is left uneliminated.
///
/// Returns the number of row swaps.
pub(crate) fn lu_factor_in_place<F: LinalgElement>(
    lu: &mut [F],
    n: usize,
    mut on_swap: impl FnMut(usize, usize),
) -> usize {
    let mut num_swaps = 0usize;

    for col in 0..n {
        // Find pivot: max absolute value in column col, rows col..n
        let mut pivot_row = col;
        let mut max_val = lu[col + col * n].abs_val();
        for row in (col + 1)..n {
            let val = lu[row + col * n].abs_val();
            if val > max_val {
                max_val = val;
                pivot_row = row;
            }
        }

        if pivot_row != col {
            swap_rows(lu, n, col, pivot_row);
            on_swap(col, pivot_row);
            num_swaps += 1;
        }

        let pivot = lu[col + col * n];
        if pivot == F::zero() {
            continue;
        }

        // Compute multipliers (L column)
        for row in (col + 1)..n {
            lu[row + col * n] = lu[row + col * n] / pivot;
        }

        // Update trailing submatrix
        for j in (col + 1)..n {
            let u = lu[col + j * n];
            for row in (col + 1)..n {
                let update = lu[row + col * n] * u;
                lu[row + j * n] = lu[row + j * n] - update;
            }
        }
    }

    num_swaps
}

/// det(A) = (-1)^swaps · ∏ U[i, i]
#[inline]
pub(crate) fn lu_det<F: LinalgElement>(lu: &[F], n: usize, num_swaps: usize) -> F {
    let sign = if num_swaps % 2 == 0 { F::one() } else { -F::one() };
    (0..n).fold(sign, |det, i| det * lu[i + i * n])
}

/// Whether the factored matrix has an exactly zero pivot on U's diagonal
#[inline]
pub(crate) fn lu_has_zero_pivot<F: LinalgElement>(lu: &[F], n: usize) -> bool {
    (0..n).any(|i| lu[i + i * n] == F::zero())
}

/// Solve LU x = y for every column of `x`, which holds y (already permuted)
///
/// Forward substitution with the unit lower factor, then back substitution
/// with the upper factor. The diagonal of U must be nonzero.
pub(crate) fn lu_substitute<F: LinalgElement>(lu: &[F], n: usize, x: &mut [F]) {
    for col in x.chunks_exact_mut(n) {
        for i in 0..n {
            let mut sum = F::zero();
            for k in 0..i {
                sum = sum + lu[i + k * n] * col[k];
            }
            col[i] = col[i] - sum;
        }
        for i in (0..n).rev() {
            let mut sum = F::zero();
            for k in (i + 1)..n {
                sum = sum + lu[i + k * n] * col[k];
            }
            col[i] = (col[i] - sum) / lu[i + i * n];
        }
    }
}

/// Invert the n×n matrix `lu` (destroyed) into `out`
///
/// `out` must hold the identity on entry. Fails with `SingularMatrix` if a
/// pivot of the factorization is exactly zero.
pub(crate) fn lu_inverse_in_place<F: LinalgElement>(
    lu: &mut [F],
    n: usize,
    out: &mut [F],
) -> Result<()> {
    lu_factor_in_place(lu, n, |a, b| swap_rows(out, n, a, b));
    if lu_has_zero_pivot(lu, n) {
        return Err(Error::singular(n));
    }
    lu_substitute(lu, n, out);
    Ok(())
}

/// LU decomposition result: PA = LU
///
/// L is lower triangular with unit diagonal, U is upper triangular, and P is
/// the row permutation chosen by partial pivoting.
///
/// # Example
///
/// ```
/// use statarr::prelude::*;
///
/// let a = SMatrix::<f64, 2, 2>::from_rows([[1.0, 2.0], [3.0, 4.0]]);
/// let f = lu(&a);
/// assert_eq!(f.num_swaps, 1);
/// assert_eq!(f.permutation(), [1, 0]);
/// assert!((f.det() - -2.0).abs() < 1e-12);
/// assert!(f.inverse().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LuDecomposition<F: LinalgElement, const N: usize> {
    /// Lower factor L (unit diagonal, stored in lower part)
    /// and upper factor U (stored in upper part including diagonal)
    pub lu: SMatrix<F, N, N>,

    /// Pivot indices: step i swapped row i with row pivots[i]
    pub pivots: [usize; N],

    /// Number of row swaps (for determinant sign)
    pub num_swaps: usize,
}

impl<F: LinalgElement, const N: usize> LuDecomposition<F, N> {
    /// Factor a promoted copy of the input
    pub(crate) fn factor(mut work: MMatrix<F, N, N>) -> Self {
        let mut pivots: [usize; N] = std::array::from_fn(|i| i);
        let num_swaps = lu_factor_in_place(work.as_mut_slice(), N, |a, b| pivots[a] = b);
        Self {
            lu: work.freeze(),
            pivots,
            num_swaps,
        }
    }

    /// Unit lower triangular factor L
    pub fn l(&self) -> SMatrix<F, N, N> {
        let lu = self.lu.as_slice();
        SMatrix::from_fn(|k| {
            let (i, j) = (k % N, k / N);
            match i.cmp(&j) {
                std::cmp::Ordering::Greater => lu[k],
                std::cmp::Ordering::Equal => F::one(),
                std::cmp::Ordering::Less => F::zero(),
            }
        })
    }

    /// Upper triangular factor U
    pub fn u(&self) -> SMatrix<F, N, N> {
        let lu = self.lu.as_slice();
        SMatrix::from_fn(|k| if k % N <= k / N { lu[k] } else { F::zero() })
    }

    /// Row permutation: row `i` of PA is row `permutation()[i]` of A
    pub fn permutation(&self) -> [usize; N] {
        let mut perm: [usize; N] = std::array::from_fn(|i| i);
        for (i, &p) in self.pivots.iter().enumerate() {
            perm.swap(i, p);
        }
        perm
    }

    /// Permutation matrix P
    pub fn p(&self) -> SMatrix<F, N, N> {
        let perm = self.permutation();
        SMatrix::from_fn(|k| {
            if perm[k % N] == k / N {
                F::one()
            } else {
                F::zero()
            }
        })
    }

    /// Determinant of the factored matrix
    pub fn det(&self) -> F {
        lu_det(self.lu.as_slice(), N, self.num_swaps)
    }

    /// Whether some pivot on U's diagonal is exactly zero
    ///
    /// This is the exact-singularity test. It does not go through [`det`](Self::det),
    /// whose product can overflow or underflow for badly scaled input.
    pub fn is_singular(&self) -> bool {
        lu_has_zero_pivot(self.lu.as_slice(), N)
    }

    /// Inverse of the factored matrix
    pub fn inverse(&self) -> Result<SMatrix<F, N, N>> {
        let mut x = self.p().to_mut();
        self.substitute(x.as_mut_slice())?;
        Ok(x.freeze())
    }

    /// Solve A x = b
    pub fn solve(&self, b: &SVector<F, N>) -> Result<SVector<F, N>> {
        let perm = self.permutation();
        let mut x = SVector::from_fn(|i| b[perm[i]]).to_mut();
        self.substitute(x.as_mut_slice())?;
        Ok(x.freeze())
    }

    fn substitute(&self, x: &mut [F]) -> Result<()> {
        if self.is_singular() {
            log::debug!("lu: {N}x{N} {} factorization is singular", F::DTYPE);
            return Err(Error::singular(N));
        }
        lu_substitute(self.lu.as_slice(), N, x);
        Ok(())
    }
}
