//! Core static array types
//!
//! Two owned types share one layout: [`SArray`] is an immutable value type
//! (every "mutation" returns a new instance) and [`MArray`] allows in-place
//! writes through `&mut`. Both store exactly `S::LEN` elements inline in
//! column-major order and implement the [`StaticArray`] layout trait.

use super::shape::Shape;
use super::size::SizeDescriptor;
use super::storage::FixedBuffer;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Layout trait shared by the immutable and mutable static array types
pub trait StaticArray: Sized {
    /// Element type
    type Elem: Element;

    /// Compile-time size descriptor
    type Size: SizeDescriptor;

    /// The underlying fixed-size buffer
    fn buffer(&self) -> &<Self::Size as SizeDescriptor>::Buffer<Self::Elem>;

    /// All elements in column-major order
    #[inline]
    fn as_slice(&self) -> &[Self::Elem] {
        self.buffer().as_slice()
    }

    /// Column-major storage as raw bytes
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self.buffer().as_bytes()
    }

    /// Number of elements
    #[inline]
    fn len(&self) -> usize {
        Self::Size::LEN
    }

    /// Always false: every dimension of a static array is positive
    #[inline]
    fn is_empty(&self) -> bool {
        Self::Size::LEN == 0
    }

    /// Dimensions of the array
    #[inline]
    fn dims(&self) -> Shape {
        Self::Size::dims()
    }

    /// Runtime dtype tag of the element type
    #[inline]
    fn dtype(&self) -> DType {
        Self::Elem::DTYPE
    }

    /// Element at a linear (column-major) index
    #[inline]
    fn get(&self, index: usize) -> Option<Self::Elem> {
        self.as_slice().get(index).copied()
    }

    /// Copy into an immutable array
    #[inline]
    fn to_static(&self) -> SArray<Self::Elem, Self::Size> {
        SArray::from_buffer(*self.buffer())
    }

    /// A zeroed mutable array of the same size and element type
    #[inline]
    fn similar(&self) -> MArray<Self::Elem, Self::Size> {
        MArray::zeros()
    }

    /// The type of [`similar`](StaticArray::similar) without allocating
    #[inline]
    fn similar_type(&self) -> ArrayType<Self::Elem, Self::Size> {
        ArrayType::new()
    }
}

/// Immutable, statically sized array
///
/// `SArray` is `Copy`: passing it around copies the inline buffer, so
/// instances can be shared freely between threads.
///
/// # Example
///
/// ```
/// use statarr::prelude::*;
///
/// let m = SMatrix::<f64, 2, 2>::from_rows([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(m.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
/// assert_eq!(m[(0, 1)], 2.0);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct SArray<T: Element, S: SizeDescriptor> {
    data: S::Buffer<T>,
}

/// Mutable, statically sized array
///
/// `MArray` is deliberately not `Copy`; writes are visible only through the
/// handle that performed them. Concurrent writers must be synchronized by
/// the caller.
#[derive(Clone, PartialEq)]
pub struct MArray<T: Element, S: SizeDescriptor> {
    data: S::Buffer<T>,
}

/// Copy `values` into a buffer, failing if the length is not `S::LEN`
fn buffer_from_slice<T: Element, S: SizeDescriptor>(values: &[T]) -> Result<S::Buffer<T>> {
    if values.len() != S::LEN {
        return Err(Error::size_mismatch(S::DIMS, &[values.len()]));
    }
    Ok(<S::Buffer<T> as FixedBuffer<T>>::from_fn(|i| values[i]))
}

/// Validate explicit runtime dimensions against `S`, then copy `values`
fn buffer_from_shape<T: Element, S: SizeDescriptor>(
    dims: &[usize],
    values: &[T],
) -> Result<S::Buffer<T>> {
    if dims != S::DIMS {
        return Err(Error::size_mismatch(S::DIMS, dims));
    }
    let expected: usize = dims.iter().product();
    if values.len() != expected {
        return Err(Error::size_mismatch(dims, &[values.len()]));
    }
    buffer_from_slice::<T, S>(values)
}

/// Repack the column-major element stream of `src` into the shape `S2`
fn repack<T: Element, S: SizeDescriptor, S2: SizeDescriptor>(
    src: &S::Buffer<T>,
) -> Result<S2::Buffer<T>> {
    if S::LEN != S2::LEN {
        return Err(Error::size_mismatch(S2::DIMS, S::DIMS));
    }
    let values = src.as_slice();
    Ok(<S2::Buffer<T> as FixedBuffer<T>>::from_fn(|i| values[i]))
}

fn check_index(index: usize, size: usize) -> Result<()> {
    if index >= size {
        return Err(Error::IndexOutOfBounds { index, size });
    }
    Ok(())
}

impl<T: Element, S: SizeDescriptor> SArray<T, S> {
    /// Create from a flat column-major slice
    ///
    /// Fails with `SizeMismatch` unless `values.len() == S::LEN`.
    pub fn new(values: &[T]) -> Result<Self> {
        Ok(Self {
            data: buffer_from_slice::<T, S>(values)?,
        })
    }

    /// Wrap dynamically sized data with an explicit descriptor
    ///
    /// `dims` must equal the descriptor's dimensions exactly and `values`
    /// must hold `product(dims)` elements in column-major order.
    pub fn from_shape(dims: &[usize], values: &[T]) -> Result<Self> {
        Ok(Self {
            data: buffer_from_shape::<T, S>(dims, values)?,
        })
    }

    /// Create from an existing buffer
    #[inline]
    pub fn from_buffer(data: S::Buffer<T>) -> Self {
        Self { data }
    }

    /// Create by evaluating `f` at each linear (column-major) index
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self {
            data: <S::Buffer<T> as FixedBuffer<T>>::from_fn(f),
        }
    }

    /// Array of zeros
    #[inline]
    pub fn zeros() -> Self {
        Self {
            data: <S::Buffer<T> as FixedBuffer<T>>::zeroed(),
        }
    }

    /// Array with every element equal to `value`
    #[inline]
    pub fn filled(value: T) -> Self {
        Self::from_fn(|_| value)
    }

    /// Consume and return the underlying buffer
    #[inline]
    pub fn into_buffer(self) -> S::Buffer<T> {
        self.data
    }

    /// New array equal to `self` except at `index`
    pub fn with(mut self, index: usize, value: T) -> Result<Self> {
        check_index(index, S::LEN)?;
        self.data.as_mut_slice()[index] = value;
        Ok(self)
    }

    /// Same elements, new dimensions
    ///
    /// Fails with `SizeMismatch` unless both descriptors have the same length.
    pub fn reshape<S2: SizeDescriptor>(&self) -> Result<SArray<T, S2>> {
        Ok(SArray {
            data: repack::<T, S, S2>(&self.data)?,
        })
    }

    /// Apply `f` to every element
    pub fn map<U: Element, F: FnMut(T) -> U>(&self, mut f: F) -> SArray<U, S> {
        let values = self.as_slice();
        SArray::from_fn(|i| f(values[i]))
    }

    /// Promote every element to the element type's floating-point type
    #[inline]
    pub fn to_float(&self) -> SArray<T::Float, S> {
        self.map(|x| x.to_float())
    }

    /// Multiply every element by `k`
    pub fn scale(&self, k: T) -> Self {
        self.map(|x| x * k)
    }

    /// Copy into a mutable array
    #[inline]
    pub fn to_mut(&self) -> MArray<T, S> {
        MArray { data: self.data }
    }
}

impl<T: Element, S: SizeDescriptor> MArray<T, S> {
    /// Create from a flat column-major slice
    ///
    /// Fails with `SizeMismatch` unless `values.len() == S::LEN`.
    pub fn new(values: &[T]) -> Result<Self> {
        Ok(Self {
            data: buffer_from_slice::<T, S>(values)?,
        })
    }

    /// Wrap dynamically sized data with an explicit descriptor
    pub fn from_shape(dims: &[usize], values: &[T]) -> Result<Self> {
        Ok(Self {
            data: buffer_from_shape::<T, S>(dims, values)?,
        })
    }

    /// Create from an existing buffer
    #[inline]
    pub fn from_buffer(data: S::Buffer<T>) -> Self {
        Self { data }
    }

    /// Create by evaluating `f` at each linear (column-major) index
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self {
            data: <S::Buffer<T> as FixedBuffer<T>>::from_fn(f),
        }
    }

    /// Array of zeros
    #[inline]
    pub fn zeros() -> Self {
        Self {
            data: <S::Buffer<T> as FixedBuffer<T>>::zeroed(),
        }
    }

    /// Consume and return the underlying buffer
    #[inline]
    pub fn into_buffer(self) -> S::Buffer<T> {
        self.data
    }

    /// All elements in column-major order, mutably
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    /// The underlying buffer, mutably
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut S::Buffer<T> {
        &mut self.data
    }

    /// Write `value` at a linear index
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, S::LEN)?;
        self.data.as_mut_slice()[index] = value;
        Ok(())
    }

    /// Overwrite every element with `value`
    pub fn fill(&mut self, value: T) {
        self.data.as_mut_slice().fill(value);
    }

    /// Copy every element from another array of the same size
    pub fn copy_from<A: StaticArray<Elem = T, Size = S>>(&mut self, src: &A) {
        self.data = *src.buffer();
    }

    /// Same elements, new dimensions
    pub fn reshape<S2: SizeDescriptor>(&self) -> Result<MArray<T, S2>> {
        Ok(MArray {
            data: repack::<T, S, S2>(&self.data)?,
        })
    }

    /// Convert into an immutable array
    #[inline]
    pub fn freeze(self) -> SArray<T, S> {
        SArray { data: self.data }
    }
}

impl<T: Element, S: SizeDescriptor> StaticArray for SArray<T, S> {
    type Elem = T;
    type Size = S;

    #[inline]
    fn buffer(&self) -> &S::Buffer<T> {
        &self.data
    }
}

impl<T: Element, S: SizeDescriptor> StaticArray for MArray<T, S> {
    type Elem = T;
    type Size = S;

    #[inline]
    fn buffer(&self) -> &S::Buffer<T> {
        &self.data
    }
}

impl<T: Element, S: SizeDescriptor> From<MArray<T, S>> for SArray<T, S> {
    fn from(value: MArray<T, S>) -> Self {
        value.freeze()
    }
}

impl<T: Element, S: SizeDescriptor> From<SArray<T, S>> for MArray<T, S> {
    fn from(value: SArray<T, S>) -> Self {
        value.to_mut()
    }
}

impl<T: Element, S: SizeDescriptor> PartialEq<MArray<T, S>> for SArray<T, S> {
    fn eq(&self, other: &MArray<T, S>) -> bool {
        self.data == other.data
    }
}

impl<T: Element, S: SizeDescriptor> PartialEq<SArray<T, S>> for MArray<T, S> {
    fn eq(&self, other: &SArray<T, S>) -> bool {
        self.data == other.data
    }
}

impl<T: Element, S: SizeDescriptor> Index<usize> for SArray<T, S> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data.as_slice()[index]
    }
}

impl<T: Element, S: SizeDescriptor> Index<usize> for MArray<T, S> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data.as_slice()[index]
    }
}

impl<T: Element, S: SizeDescriptor> IndexMut<usize> for MArray<T, S> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data.as_mut_slice()[index]
    }
}

impl<T: Element, S: SizeDescriptor> fmt::Debug for SArray<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SArray")
            .field("dims", &S::DIMS)
            .field("dtype", &T::DTYPE)
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T: Element, S: SizeDescriptor> fmt::Debug for MArray<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MArray")
            .field("dims", &S::DIMS)
            .field("dtype", &T::DTYPE)
            .field("data", &self.as_slice())
            .finish()
    }
}

/// Zero-sized token naming a static array type without materializing one
///
/// Returned by [`StaticArray::similar_type`]. Algorithms carry it around to
/// allocate a scratch buffer of matching shape only when they need it, or to
/// re-target the element type with [`ArrayType::with_elem`].
pub struct ArrayType<T: Element, S: SizeDescriptor> {
    _marker: PhantomData<fn() -> (T, S)>,
}

impl<T: Element, S: SizeDescriptor> ArrayType<T, S> {
    /// Create the token
    #[inline]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Dimensions of the described type
    #[inline]
    pub fn dims(&self) -> Shape {
        S::dims()
    }

    /// Number of elements of the described type
    #[inline]
    pub fn len(&self) -> usize {
        S::LEN
    }

    /// Always false: every dimension of a static array is positive
    #[inline]
    pub fn is_empty(&self) -> bool {
        S::LEN == 0
    }

    /// Element dtype of the described type
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Same size, different element type
    #[inline]
    pub fn with_elem<U: Element>(self) -> ArrayType<U, S> {
        ArrayType::new()
    }

    /// Materialize a zeroed mutable array
    #[inline]
    pub fn zeros_mut(self) -> MArray<T, S> {
        MArray::zeros()
    }

    /// Materialize a zeroed immutable array
    #[inline]
    pub fn zeros(self) -> SArray<T, S> {
        SArray::zeros()
    }
}

impl<T: Element, S: SizeDescriptor> Clone for ArrayType<T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Element, S: SizeDescriptor> Copy for ArrayType<T, S> {}

impl<T: Element, S: SizeDescriptor> Default for ArrayType<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, S: SizeDescriptor> fmt::Debug for ArrayType<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayType<{}, {}>", T::DTYPE, S::dims())
    }
}
