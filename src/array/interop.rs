//! Conversion to and from dynamically sized `ndarray` arrays
//!
//! Shapes must match the size descriptor exactly. Elements are exchanged in
//! column-major order regardless of the ndarray's memory layout.

use super::core::{MArray, SArray, StaticArray};
use super::size::SizeDescriptor;
use super::storage::FixedBuffer;
use crate::dtype::Element;
use crate::error::{Error, Result};
use ndarray::{ArrayBase, ArrayD, Data, Dimension, IxDyn, ShapeBuilder};

fn buffer_from_ndarray<T, S, A, D>(array: &ArrayBase<A, D>) -> Result<S::Buffer<T>>
where
    T: Element,
    S: SizeDescriptor,
    A: Data<Elem = T>,
    D: Dimension,
{
    if array.shape() != S::DIMS {
        return Err(Error::size_mismatch(S::DIMS, array.shape()));
    }
    let mut data = <S::Buffer<T> as FixedBuffer<T>>::zeroed();
    // Logical order of the reversed-axes view is column-major order of `array`
    for (dst, src) in data.as_mut_slice().iter_mut().zip(array.t().iter()) {
        *dst = *src;
    }
    Ok(data)
}

impl<T: Element, S: SizeDescriptor> SArray<T, S> {
    /// Copy a dynamically sized array whose shape equals the descriptor
    pub fn from_ndarray<A, D>(array: &ArrayBase<A, D>) -> Result<Self>
    where
        A: Data<Elem = T>,
        D: Dimension,
    {
        Ok(Self::from_buffer(buffer_from_ndarray::<T, S, A, D>(array)?))
    }
}

impl<T: Element, S: SizeDescriptor> MArray<T, S> {
    /// Copy a dynamically sized array whose shape equals the descriptor
    pub fn from_ndarray<A, D>(array: &ArrayBase<A, D>) -> Result<Self>
    where
        A: Data<Elem = T>,
        D: Dimension,
    {
        Ok(Self::from_buffer(buffer_from_ndarray::<T, S, A, D>(array)?))
    }
}

/// Conversion of any static array into an owned dynamic `ndarray`
pub trait ToNdarray: StaticArray {
    /// Column-major (Fortran order) dynamic array with the same dimensions
    fn to_ndarray(&self) -> Result<ArrayD<Self::Elem>> {
        let shape = IxDyn(Self::Size::DIMS).f();
        Ok(ArrayD::from_shape_vec(shape, self.as_slice().to_vec())?)
    }
}

impl<A: StaticArray> ToNdarray for A {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::{MMatrix, SMatrix, SVector, Size3};
    use ndarray::{Array2, array};

    #[test]
    fn test_from_row_major_ndarray() {
        let nd = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let m = SMatrix::<f64, 2, 3>::from_ndarray(&nd).unwrap();
        assert_eq!(m, SMatrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]));
        assert_eq!(m.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_from_fortran_ndarray() {
        let nd = Array2::from_shape_vec((2, 2).f(), vec![1, 2, 3, 4]).unwrap();
        let m = MMatrix::<i32, 2, 2>::from_ndarray(&nd).unwrap();
        assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_shape_mismatch() {
        let nd = array![[1.0, 2.0], [3.0, 4.0]];
        let err = SMatrix::<f64, 2, 3>::from_ndarray(&nd).unwrap_err();
        assert!(matches!(err, Error::SizeMismatch { .. }));
        // Same element count, different dimensions
        let err = SVector::<f64, 4>::from_ndarray(&nd).unwrap_err();
        assert!(matches!(err, Error::SizeMismatch { .. }));
    }

    #[test]
    fn test_to_ndarray_preserves_order() {
        let m = SMatrix::<u8, 2, 3>::from_rows([[1, 2, 3], [4, 5, 6]]);
        let nd = m.to_ndarray().unwrap();
        assert_eq!(nd.shape(), &[2, 3]);
        assert_eq!(nd[[1, 2]], 6);
        assert_eq!(nd[[0, 1]], 2);
        assert_eq!(SMatrix::<u8, 2, 3>::from_ndarray(&nd).unwrap(), m);
    }

    #[test]
    fn test_rank3_round_trip() {
        let a = SArray::<i16, Size3<2, 3, 4>>::from_fn(|i| i as i16);
        let nd = a.to_ndarray().unwrap();
        // Column-major: element (i, j, k) sits at i + 2 * (j + 3 * k)
        assert_eq!(nd[[1, 2, 3]], 1 + 2 * (2 + 3 * 3));
        assert_eq!(SArray::<i16, Size3<2, 3, 4>>::from_ndarray(&nd).unwrap(), a);
    }
}
