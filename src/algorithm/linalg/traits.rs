//! Runtime-checked linear algebra on any static array

use super::helpers::{FloatOf, promote, square_order};
use super::{det_kernel, inv_kernel};
use crate::array::{SArray, StaticArray};
use crate::error::Result;

/// Determinant and inverse for arrays whose squareness is checked at runtime
///
/// The free functions [`det`](super::det) and [`inv`](super::inv) only
/// accept `Size2<N, N>` and reject everything else at compile time. This
/// trait covers generic code that holds an arbitrary [`StaticArray`]: the
/// descriptor is inspected when called, and anything other than a square
/// rank-2 size fails with `DimensionMismatch` before any kernel runs.
///
/// Implemented for every `StaticArray`.
///
/// # Example
///
/// ```
/// use statarr::prelude::*;
///
/// fn checked_det<A: StaticArray>(a: &A) -> Result<f64>
/// where
///     A::Elem: Element<Float = f64>,
/// {
///     a.try_det()
/// }
///
/// let m = SMatrix::<i64, 2, 2>::from_rows([[2, 0], [0, 3]]);
/// assert_eq!(checked_det(&m).unwrap(), 6.0);
///
/// let v = SVector::<i64, 4>::filled(1);
/// assert!(matches!(checked_det(&v), Err(Error::DimensionMismatch { .. })));
/// ```
pub trait LinearAlgebra: StaticArray {
    /// Determinant in the float promotion of the element type
    fn try_det(&self) -> Result<FloatOf<Self>>;

    /// Inverse in the float promotion of the element type
    ///
    /// Fails with `SingularMatrix` on exactly singular input, with the same
    /// rule as [`inv`](crate::algorithm::linalg::inv).
    fn try_inv(&self) -> Result<SArray<FloatOf<Self>, Self::Size>>;
}

impl<A: StaticArray> LinearAlgebra for A {
    fn try_det(&self) -> Result<FloatOf<Self>> {
        square_order::<A::Size>()?;
        Ok(det_kernel(promote(self)))
    }

    fn try_inv(&self) -> Result<SArray<FloatOf<Self>, Self::Size>> {
        square_order::<A::Size>()?;
        inv_kernel(promote(self))
    }
}
