//! Compile-time size descriptors
//!
//! A size descriptor is a zero-sized marker type whose const generic
//! parameters are the array dimensions. Everything about the layout is an
//! associated constant, so storage size and kernel selection are decided
//! when the code is monomorphized.

use super::shape::Shape;
use super::storage::FixedBuffer;
use crate::dtype::Element;
use std::fmt::Debug;
use std::hash::Hash;

/// Dimensions of a static array, fixed at compile time
///
/// Implemented by [`Size1`], [`Size2`] and [`Size3`]. Every dimension must be
/// positive; a zero dimension fails to compile as soon as `LEN` is used.
pub trait SizeDescriptor:
    Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Number of dimensions (rank)
    const NDIM: usize;

    /// Total number of elements, the product of all dimensions
    const LEN: usize;

    /// Dimensions in order, first index varies fastest in storage
    const DIMS: &'static [usize];

    /// Column-major storage of exactly `LEN` elements
    type Buffer<T: Element>: FixedBuffer<T>;

    /// Dimensions as a runtime shape
    fn dims() -> Shape {
        Shape::from(Self::DIMS)
    }

    /// Total number of elements
    #[inline]
    fn length() -> usize {
        Self::LEN
    }

    /// Whether this descriptor describes an N×N matrix
    #[inline]
    fn is_square() -> bool {
        matches!(Self::DIMS, [m, n] if m == n)
    }
}

/// Whether two size descriptors describe the same dimensions
#[inline]
pub fn same_size<A: SizeDescriptor, B: SizeDescriptor>() -> bool {
    A::DIMS == B::DIMS
}

/// Rank-1 size descriptor: a vector of `N` elements
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size1<const N: usize>;

/// Rank-2 size descriptor: an `R`×`C` matrix
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size2<const R: usize, const C: usize>;

/// Rank-3 size descriptor: an `A`×`B`×`C` array
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size3<const A: usize, const B: usize, const C: usize>;

impl<const N: usize> SizeDescriptor for Size1<N> {
    const NDIM: usize = 1;
    const LEN: usize = {
        assert!(N > 0, "static array dimensions must be positive");
        N
    };
    const DIMS: &'static [usize] = &[N];
    type Buffer<T: Element> = [T; N];
}

impl<const R: usize, const C: usize> SizeDescriptor for Size2<R, C> {
    const NDIM: usize = 2;
    const LEN: usize = {
        assert!(R > 0 && C > 0, "static array dimensions must be positive");
        R * C
    };
    const DIMS: &'static [usize] = &[R, C];
    type Buffer<T: Element> = [[T; R]; C];
}

impl<const A: usize, const B: usize, const C: usize> SizeDescriptor for Size3<A, B, C> {
    const NDIM: usize = 3;
    const LEN: usize = {
        assert!(
            A > 0 && B > 0 && C > 0,
            "static array dimensions must be positive"
        );
        A * B * C
    };
    const DIMS: &'static [usize] = &[A, B, C];
    type Buffer<T: Element> = [[[T; A]; B]; C];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(Size1::<5>::LEN, 5);
        assert_eq!(Size2::<3, 4>::LEN, 12);
        assert_eq!(Size3::<2, 3, 4>::LEN, 24);
        assert_eq!(Size2::<3, 4>::length(), 12);
    }

    #[test]
    fn test_dims() {
        assert_eq!(Size1::<5>::dims(), [5]);
        assert_eq!(Size2::<3, 4>::dims(), [3, 4]);
        assert_eq!(Size3::<2, 3, 4>::DIMS, &[2, 3, 4]);
        assert_eq!(Size2::<3, 4>::NDIM, 2);
    }

    #[test]
    fn test_square() {
        assert!(Size2::<3, 3>::is_square());
        assert!(!Size2::<3, 4>::is_square());
        assert!(!Size1::<9>::is_square());
        assert!(!Size3::<2, 2, 2>::is_square());
    }

    #[test]
    fn test_same_size() {
        assert!(same_size::<Size2<2, 3>, Size2<2, 3>>());
        assert!(!same_size::<Size2<2, 3>, Size2<3, 2>>());
        // Same length is not the same size
        assert!(!same_size::<Size1<6>, Size2<2, 3>>());
    }
}
