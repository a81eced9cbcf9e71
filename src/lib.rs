//! # statarr
//!
//! **Fixed-size arrays with compile-time dimensions and small-matrix linear algebra.**
//!
//! statarr provides vectors, matrices and rank-3 arrays whose dimensions are
//! part of the type. Storage is an inline, column-major Rust array: no heap
//! allocation, no runtime shape bookkeeping, and size mismatches are type
//! errors wherever the compiler can see them.
//!
//! ## Features
//!
//! - **Two flavors**: immutable `Copy` [`SArray`](array::SArray) and mutable
//!   [`MArray`](array::MArray), sharing the [`StaticArray`](array::StaticArray)
//!   layout trait
//! - **Matrix ops**: transpose, matmul, trace, rows/columns, norms
//! - **Linear algebra**: determinant and inverse with closed-form kernels up
//!   to 4×4 and pivoted LU beyond, plus LU factorization and `solve`
//! - **Promotion**: integer matrices invert to `f64`, `f32` stays `f32`
//! - **Interop**: conversion to and from `ndarray` (default feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use statarr::prelude::*;
//!
//! let a = SMatrix::<f64, 2, 2>::from_rows([[4.0, 7.0], [2.0, 6.0]]);
//! let b = inv(&a)?;
//! let i = a * b;
//!
//! assert!((i - SMatrix::identity()).frobenius_norm() < 1e-12);
//! assert_eq!(det(&a), 10.0);
//! # Ok::<(), statarr::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `ndarray` (default): `from_ndarray` / `to_ndarray` conversions
//! - `f16`: Half-precision elements (`half::f16`, `half::bf16`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod array;
pub mod dtype;
pub mod error;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::linalg::{LinearAlgebra, LuDecomposition, det, inv, lu, solve};
    pub use crate::array::{
        ArrayType, MArray, MMatrix, MVector, SArray, SMatrix, SVector, Size1, Size2, Size3,
        SizeDescriptor, StaticArray,
    };
    pub use crate::dtype::{DType, Element, LinalgElement};
    pub use crate::error::{Error, Result};

    #[cfg(feature = "ndarray")]
    pub use crate::array::ToNdarray;
}
