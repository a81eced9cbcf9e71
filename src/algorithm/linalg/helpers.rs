//! Validation and promotion helpers shared by the linear algebra kernels

use crate::array::{MArray, SizeDescriptor, StaticArray};
use crate::dtype::Element;
use crate::error::{Error, Result};

/// Float type that kernels use for the elements of `A`
pub type FloatOf<A> = <<A as StaticArray>::Elem as Element>::Float;

/// Order N of a square N×N descriptor
///
/// Anything that is not a rank-2 square size is a `DimensionMismatch`.
pub fn square_order<S: SizeDescriptor>() -> Result<usize> {
    match S::DIMS {
        [m, n] if m == n => Ok(*n),
        dims => Err(Error::dimension_mismatch(dims)),
    }
}

/// Copy `a` into scratch storage of its float type
///
/// Kernels work on this copy and never touch the caller's array.
pub(crate) fn promote<A: StaticArray>(a: &A) -> MArray<FloatOf<A>, A::Size> {
    let values = a.as_slice();
    MArray::from_fn(|i| values[i].to_float())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::{SMatrix, Size1, Size2, Size3};

    #[test]
    fn test_square_order() {
        assert_eq!(square_order::<Size2<1, 1>>().unwrap(), 1);
        assert_eq!(square_order::<Size2<7, 7>>().unwrap(), 7);
        assert!(matches!(
            square_order::<Size2<2, 3>>(),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(square_order::<Size1<4>>().is_err());
        assert!(square_order::<Size3<2, 2, 2>>().is_err());
    }

    #[test]
    fn test_promote_leaves_input_alone() {
        let a = SMatrix::<i16, 2, 2>::from_rows([[1, -2], [3, 4]]);
        let p = promote(&a);
        assert_eq!(p.as_slice(), &[1.0f64, 3.0, -2.0, 4.0]);
        assert_eq!(a.as_slice(), &[1, 3, -2, 4]);
    }
}
