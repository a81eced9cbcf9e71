//! Fixed-size column-major storage
//!
//! Storage is a (possibly nested) Rust array held inline, so a static array
//! lives wherever its owner lives: on the stack, inside another struct, or in
//! a register. Nesting puts the first index innermost, which makes the
//! flattened element stream column-major.

use crate::dtype::Element;
use std::fmt::Debug;

/// Contiguous inline storage of a fixed number of elements
pub trait FixedBuffer<T: Element>: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Build a buffer by calling `f` with each linear (column-major) index
    fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self;

    /// All elements in column-major order
    fn as_slice(&self) -> &[T];

    /// All elements in column-major order, mutably
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Buffer with every element set to zero
    #[inline]
    fn zeroed() -> Self {
        Self::from_fn(|_| T::zero())
    }

    /// Raw bytes of the column-major element stream
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }
}

impl<T: Element, const N: usize> FixedBuffer<T> for [T; N] {
    #[inline]
    fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        std::array::from_fn(f)
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Element, const R: usize, const C: usize> FixedBuffer<T> for [[T; R]; C] {
    #[inline]
    fn from_fn<F: FnMut(usize) -> T>(mut f: F) -> Self {
        std::array::from_fn(|j| std::array::from_fn(|i| f(i + j * R)))
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.as_flattened()
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.as_flattened_mut()
    }
}

impl<T: Element, const A: usize, const B: usize, const C: usize> FixedBuffer<T>
    for [[[T; A]; B]; C]
{
    #[inline]
    fn from_fn<F: FnMut(usize) -> T>(mut f: F) -> Self {
        std::array::from_fn(|k| {
            std::array::from_fn(|j| std::array::from_fn(|i| f(i + A * (j + B * k))))
        })
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.as_flattened().as_flattened()
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.as_flattened_mut().as_flattened_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_buffer() {
        let b: [f64; 4] = FixedBuffer::from_fn(|i| i as f64);
        assert_eq!(FixedBuffer::<f64>::as_slice(&b), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_matrix_buffer_is_column_major() {
        let b: [[i32; 2]; 3] = FixedBuffer::from_fn(|i| i as i32);
        // Column j holds indices 2j and 2j + 1
        assert_eq!(b, [[0, 1], [2, 3], [4, 5]]);
        assert_eq!(FixedBuffer::<i32>::as_slice(&b), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rank3_buffer() {
        let mut b: [[[u8; 2]; 2]; 2] = FixedBuffer::from_fn(|i| i as u8);
        assert_eq!(FixedBuffer::<u8>::as_slice(&b), &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(b[1][0][1], 5);
        FixedBuffer::<u8>::as_mut_slice(&mut b)[7] = 70;
        assert_eq!(b[1][1][1], 70);
    }

    #[test]
    fn test_bytes_view() {
        let b: [u16; 2] = [0x0102, 0x0304];
        assert_eq!(b.as_bytes().len(), 4);
        let z: [[f32; 2]; 2] = FixedBuffer::zeroed();
        assert!(z.as_bytes().iter().all(|&x| x == 0));
    }
}
