//! Numerical algorithms over static arrays
//!
//! # Available Algorithms
//!
//! - [`linalg`]: determinant, inverse, LU factorization and linear solve for
//!   square matrices, dispatched by order to closed-form or LU kernels

pub mod linalg;

pub use linalg::{LinearAlgebra, LuDecomposition, det, inv, lu, solve};
