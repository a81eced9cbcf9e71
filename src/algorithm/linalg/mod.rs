//! Linear algebra on statically sized square matrices
//!
//! Determinant and inverse are routed by matrix order to one of two kernel
//! families:
//!
//! - `1 ≤ N ≤ 4`: closed-form formulas (explicit det, adjugate / det).
//!   Unrolled and branch-free, but no pivoting.
//! - `N > 4`: LU with partial pivoting in a fixed-size scratch buffer,
//!   followed by forward/back substitution against the permuted identity.
//!
//! The dispatcher reads the order from the size descriptor's `DIMS`, a
//! type-level constant, so the `match` is resolved during monomorphization
//! and each instantiation keeps exactly one kernel. This holds for the typed
//! functions and for the runtime-checked [`LinearAlgebra`] trait alike. Every kernel computes in the element type's float promotion
//! ([`Element::Float`](crate::dtype::Element::Float)): integer matrices
//! produce `f64` results, `f32` stays `f32`.
//!
//! # Accuracy
//!
//! For well-conditioned input the closed-form kernels match the LU path to
//! within a small factor. For ill-conditioned 4×4 input they can lose
//! several digits more than LU (the 4×4 Hilbert matrix is a known case);
//! call [`lu`] directly when that matters.
//!
//! # Module Structure
//!
//! - `closed_form`: 1×1 to 4×4 kernels on column-major slices
//! - `decompositions`: LU kernels and the [`LuDecomposition`] result type
//! - `helpers`: order validation and float promotion
//! - `traits`: the runtime-checked [`LinearAlgebra`] extension trait

mod closed_form;
pub mod decompositions;
pub mod helpers;
pub mod traits;


pub use decompositions::LuDecomposition;
pub use helpers::{FloatOf, square_order};
pub use traits::LinearAlgebra;

use crate::array::{MArray, SArray, SMatrix, SVector, Size1, Size2, SizeDescriptor, StaticArray};
use crate::dtype::{Element, LinalgElement};
use crate::error::{Error, Result};
use helpers::promote;
use log::{debug, trace};

/// Largest matrix order served by the closed-form kernels
pub const MAX_CLOSED_FORM_ORDER: usize = 4;

/// Order of a square size descriptor, as a constant of the instantiation
#[inline(always)]
fn kernel_order<S: SizeDescriptor>() -> usize {
    debug_assert!(S::is_square(), "linalg kernel on non-square {}", S::dims());
    S::DIMS[0]
}

/// Determinant of the square matrix in `work`
pub(crate) fn det_kernel<F: LinalgElement, S: SizeDescriptor>(mut work: MArray<F, S>) -> F {
    let n = kernel_order::<S>();
    match n {
        1..=MAX_CLOSED_FORM_ORDER => {
            trace!("det: {n}x{n} {} via closed form", F::DTYPE);
            closed_form::det(n, work.as_slice())
        }
        _ => {
            trace!("det: {n}x{n} {} via LU", F::DTYPE);
            let lu = work.as_mut_slice();
            let num_swaps = decompositions::lu_factor_in_place(lu, n, |_, _| {});
            decompositions::lu_det(lu, n, num_swaps)
        }
    }
}

/// Inverse of the square matrix in `work`
pub(crate) fn inv_kernel<F: LinalgElement, S: SizeDescriptor>(
    mut work: MArray<F, S>,
) -> Result<SArray<F, S>> {
    let n = kernel_order::<S>();
    let mut out = work.similar();
    match n {
        1..=MAX_CLOSED_FORM_ORDER => {
            trace!("inv: {n}x{n} {} via closed form", F::DTYPE);
            let det = closed_form::det(n, work.as_slice());
            if det == F::zero() {
                debug!("inv: {n}x{n} {} input has zero determinant", F::DTYPE);
                return Err(Error::singular(n));
            }
            closed_form::inv(n, work.as_slice(), det, out.as_mut_slice());
        }
        _ => {
            trace!("inv: {n}x{n} {} via LU", F::DTYPE);
            let x = out.as_mut_slice();
            x.iter_mut().step_by(n + 1).for_each(|d| *d = F::one());
            decompositions::lu_inverse_in_place(work.as_mut_slice(), n, x).inspect_err(|_| {
                debug!("inv: {n}x{n} {} input has zero determinant", F::DTYPE);
            })?;
        }
    }
    Ok(out.freeze())
}

/// Determinant of a square matrix
///
/// The result is in the element type's float promotion. Non-square inputs
/// do not type-check; use [`LinearAlgebra::try_det`] when the size is only
/// known to be square at runtime.
///
/// # Example
///
/// ```
/// use statarr::prelude::*;
///
/// let a = SMatrix::<i32, 2, 2>::from_rows([[4, 3], [6, 3]]);
/// assert_eq!(det(&a), -6.0f64);
/// ```
pub fn det<A, const N: usize>(a: &A) -> FloatOf<A>
where
    A: StaticArray<Size = Size2<N, N>>,
{
    det_kernel(promote(a))
}

/// Inverse of a square matrix, as a new immutable array
///
/// Fails with `SingularMatrix` when the input is exactly singular: a zero
/// closed-form determinant for `N ≤ 4`, a zero LU pivot above that. Nearly
/// singular inputs are not detected and yield whatever the selected kernel
/// produces.
///
/// # Example
///
/// ```
/// use statarr::prelude::*;
///
/// let a = SMatrix::<f64, 2, 2>::from_rows([[1.0, 2.0], [2.0, 1.0]]);
/// let b = inv(&a)?;
/// assert!((b[(0, 1)] - 2.0 / 3.0).abs() < 1e-15);
///
/// let s = SMatrix::<f64, 2, 2>::from_rows([[1.0, 2.0], [2.0, 4.0]]);
/// assert!(matches!(inv(&s), Err(Error::SingularMatrix { order: 2 })));
/// # Ok::<(), statarr::error::Error>(())
/// ```
pub fn inv<A, const N: usize>(a: &A) -> Result<SMatrix<FloatOf<A>, N, N>>
where
    A: StaticArray<Size = Size2<N, N>>,
{
    inv_kernel(promote(a))
}

/// LU factorization with partial pivoting, for any order
pub fn lu<A, const N: usize>(a: &A) -> LuDecomposition<FloatOf<A>, N>
where
    A: StaticArray<Size = Size2<N, N>>,
{
    LuDecomposition::factor(promote(a))
}

/// Solve `a x = b` through the LU path
///
/// Both operands are promoted to the float type of `a`'s elements. Fails
/// with `SingularMatrix` when a pivot of the factorization is exactly zero.
pub fn solve<A, B, const N: usize>(a: &A, b: &B) -> Result<SVector<FloatOf<A>, N>>
where
    A: StaticArray<Size = Size2<N, N>>,
    B: StaticArray<Elem = A::Elem, Size = Size1<N>>,
{
    trace!("solve: {N}x{N} {} via LU", <A::Elem as Element>::DTYPE);
    lu(a).solve(&promote(b).freeze())
}

impl<T: Element, const N: usize> SArray<T, Size2<N, N>> {
    /// Determinant, see [`det`]
    #[inline]
    pub fn det(&self) -> T::Float {
        det(self)
    }

    /// Inverse, see [`inv`]
    #[inline]
    pub fn inv(&self) -> Result<SMatrix<T::Float, N, N>> {
        inv(self)
    }

    /// LU factorization, see [`lu`]
    #[inline]
    pub fn lu(&self) -> LuDecomposition<T::Float, N> {
        lu(self)
    }
}
