//! Matrix and vector specific operations

use super::core::{MArray, SArray, StaticArray};
use super::size::{Size1, Size2};
use crate::dtype::{Element, LinalgElement};
use crate::error::{Error, Result};
use std::ops::{Index, IndexMut, Mul};

/// Immutable `N`-element vector
pub type SVector<T, const N: usize> = SArray<T, Size1<N>>;

/// Immutable `R`×`C` matrix
pub type SMatrix<T, const R: usize, const C: usize> = SArray<T, Size2<R, C>>;

/// Mutable `N`-element vector
pub type MVector<T, const N: usize> = MArray<T, Size1<N>>;

/// Mutable `R`×`C` matrix
pub type MMatrix<T, const R: usize, const C: usize> = MArray<T, Size2<R, C>>;

#[inline]
fn matrix_offset<const R: usize, const C: usize>(row: usize, col: usize) -> usize {
    assert!(
        row < R && col < C,
        "index ({row}, {col}) out of bounds for {R}x{C} matrix"
    );
    row + col * R
}

impl<T: Element, const R: usize, const C: usize> SArray<T, Size2<R, C>> {
    /// Create from rows, as a matrix is usually written down
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Self::from_fn(|k| rows[k % R][k / R])
    }

    /// Create from columns, which is the storage layout
    #[inline]
    pub fn from_columns(columns: [[T; R]; C]) -> Self {
        Self::from_buffer(columns)
    }

    /// Number of rows
    #[inline]
    pub const fn nrows(&self) -> usize {
        R
    }

    /// Number of columns
    #[inline]
    pub const fn ncols(&self) -> usize {
        C
    }

    /// Element at (`row`, `col`), or `None` if out of bounds
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Option<T> {
        (row < R && col < C).then(|| self.as_slice()[row + col * R])
    }

    /// Row `i` as a vector
    pub fn row(&self, i: usize) -> Result<SVector<T, C>> {
        if i >= R {
            return Err(Error::IndexOutOfBounds { index: i, size: R });
        }
        let values = self.as_slice();
        Ok(SArray::from_fn(|j| values[i + j * R]))
    }

    /// Column `j` as a vector
    pub fn column(&self, j: usize) -> Result<SVector<T, R>> {
        if j >= C {
            return Err(Error::IndexOutOfBounds { index: j, size: C });
        }
        let values = self.as_slice();
        Ok(SArray::from_fn(|i| values[i + j * R]))
    }

    /// Transposed copy
    pub fn transpose(&self) -> SMatrix<T, C, R> {
        let values = self.as_slice();
        SArray::from_fn(|k| values[k / C + (k % C) * R])
    }

    /// Matrix product `self * rhs`
    pub fn matmul<const K: usize>(&self, rhs: &SMatrix<T, C, K>) -> SMatrix<T, R, K> {
        let a = self.as_slice();
        let b = rhs.as_slice();
        SArray::from_fn(|idx| {
            let (i, j) = (idx % R, idx / R);
            let mut acc = T::zero();
            for k in 0..C {
                acc = acc + a[i + k * R] * b[k + j * C];
            }
            acc
        })
    }

    /// Matrix-vector product `self * v`
    pub fn matvec(&self, v: &SVector<T, C>) -> SVector<T, R> {
        let a = self.as_slice();
        let x = v.as_slice();
        SArray::from_fn(|i| {
            let mut acc = T::zero();
            for k in 0..C {
                acc = acc + a[i + k * R] * x[k];
            }
            acc
        })
    }

    /// Frobenius norm, computed in the promoted floating-point type
    pub fn frobenius_norm(&self) -> T::Float {
        let sum_sq = self.as_slice().iter().fold(T::Float::zero(), |acc, &x| {
            let v = x.to_float();
            acc + v * v
        });
        sum_sq.sqrt_val()
    }
}

impl<T: Element, const N: usize> SArray<T, Size2<N, N>> {
    /// Identity matrix
    pub fn identity() -> Self {
        Self::from_fn(|k| if k % N == k / N { T::one() } else { T::zero() })
    }

    /// Sum of the diagonal
    pub fn trace(&self) -> T {
        let values = self.as_slice();
        (0..N).fold(T::zero(), |acc, i| acc + values[i + i * N])
    }

    /// Diagonal as a vector
    pub fn diagonal(&self) -> SVector<T, N> {
        let values = self.as_slice();
        SArray::from_fn(|i| values[i + i * N])
    }
}

impl<T: Element, const R: usize, const C: usize> MArray<T, Size2<R, C>> {
    /// Create from rows, as a matrix is usually written down
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Self::from_fn(|k| rows[k % R][k / R])
    }

    /// Swap rows `a` and `b` in place
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let values = self.as_mut_slice();
        for j in 0..C {
            values.swap(a + j * R, b + j * R);
        }
    }
}

impl<T: Element, const N: usize> MArray<T, Size2<N, N>> {
    /// Identity matrix
    pub fn identity() -> Self {
        SArray::identity().to_mut()
    }
}

impl<T: Element, const R: usize, const C: usize> Index<(usize, usize)> for SArray<T, Size2<R, C>> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.as_slice()[matrix_offset::<R, C>(row, col)]
    }
}

impl<T: Element, const R: usize, const C: usize> Index<(usize, usize)> for MArray<T, Size2<R, C>> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.as_slice()[matrix_offset::<R, C>(row, col)]
    }
}

impl<T: Element, const R: usize, const C: usize> IndexMut<(usize, usize)>
    for MArray<T, Size2<R, C>>
{
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.as_mut_slice()[matrix_offset::<R, C>(row, col)]
    }
}

impl<T: Element, const R: usize, const C: usize, const K: usize> Mul<SMatrix<T, C, K>>
    for SMatrix<T, R, C>
{
    type Output = SMatrix<T, R, K>;

    fn mul(self, rhs: SMatrix<T, C, K>) -> Self::Output {
        self.matmul(&rhs)
    }
}

impl<T: Element, const R: usize, const C: usize> Mul<SVector<T, C>> for SMatrix<T, R, C> {
    type Output = SVector<T, R>;

    fn mul(self, rhs: SVector<T, C>) -> Self::Output {
        self.matvec(&rhs)
    }
}
