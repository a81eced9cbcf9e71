//! Statically sized arrays
//!
//! This module provides the compile-time size descriptors, the fixed-size
//! column-major storage behind them, and the two array flavors built on top:
//! the immutable [`SArray`] and the mutable [`MArray`].

mod core;
#[cfg(feature = "ndarray")]
mod interop;
mod matrix;
mod ops;
mod shape;
mod size;
mod storage;

pub use core::{ArrayType, MArray, SArray, StaticArray};
#[cfg(feature = "ndarray")]
pub use interop::ToNdarray;
pub use matrix::{MMatrix, MVector, SMatrix, SVector};
pub use shape::Shape;
pub use size::{Size1, Size2, Size3, SizeDescriptor, same_size};
pub use storage::FixedBuffer;
