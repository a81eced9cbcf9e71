//! Element trait for mapping Rust types to DType

use super::{DType, LinalgElement};
use bytemuck::{Pod, Zeroable};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Trait for types that can be elements of a static array
///
/// This trait connects Rust's type system to the runtime dtype tag and names
/// the floating-point type that determinant and inverse results are
/// promoted to.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Value semantics, freely shareable
/// - `Pod + Zeroable` - Column-major storage can be viewed as raw bytes
/// - `Add + Sub + Mul + Div` - Arithmetic operations (Output = Self)
/// - `PartialOrd + Debug` - Comparison and diagnostics
///
/// Note: `Neg` is NOT required since unsigned types don't support it.
/// Negation happens after promotion to [`Element::Float`].
pub trait Element:
    Copy
    + Send
    + Sync
    + Pod
    + Zeroable
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + PartialOrd
    + Debug
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Floating-point type linear algebra results are expressed in
    type Float: LinalgElement;

    /// Promote to the floating-point type
    fn to_float(self) -> Self::Float;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;
    type Float = f64;

    #[inline]
    fn to_float(self) -> f64 {
        self
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;
    type Float = f32;

    #[inline]
    fn to_float(self) -> f32 {
        self
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }
}

// Integers all promote to f64; the conversion is exact up to 2^53.
macro_rules! impl_int_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;
                type Float = f64;

                #[inline]
                fn to_float(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn one() -> Self {
                    1
                }
            }
        )*
    };
}

impl_int_element!(
    i64 => I64,
    i32 => I32,
    i16 => I16,
    i8 => I8,
    u64 => U64,
    u32 => U32,
    u16 => U16,
    u8 => U8,
);

// ============================================================================
// Half-precision floating point types (requires "f16" feature)
// ============================================================================

#[cfg(feature = "f16")]
impl Element for half::f16 {
    const DTYPE: DType = DType::F16;
    type Float = f32;

    #[inline]
    fn to_float(self) -> f32 {
        self.to_f32()
    }

    #[inline]
    fn zero() -> Self {
        half::f16::ZERO
    }

    #[inline]
    fn one() -> Self {
        half::f16::ONE
    }
}

#[cfg(feature = "f16")]
impl Element for half::bf16 {
    const DTYPE: DType = DType::BF16;
    type Float = f32;

    #[inline]
    fn to_float(self) -> f32 {
        self.to_f32()
    }

    #[inline]
    fn zero() -> Self {
        half::bf16::ZERO
    }

    #[inline]
    fn one() -> Self {
        half::bf16::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_tags() {
        assert_eq!(f64::DTYPE, DType::F64);
        assert_eq!(f32::DTYPE, DType::F32);
        assert_eq!(i8::DTYPE, DType::I8);
        assert_eq!(u32::DTYPE, DType::U32);
    }

    #[test]
    fn test_promotion_matches_dtype() {
        assert_eq!(<u32 as Element>::Float::DTYPE, u32::DTYPE.float_promotion());
        assert_eq!(<i16 as Element>::Float::DTYPE, i16::DTYPE.float_promotion());
        assert_eq!(<f32 as Element>::Float::DTYPE, f32::DTYPE.float_promotion());
        assert_eq!(<f64 as Element>::Float::DTYPE, f64::DTYPE.float_promotion());
    }

    #[test]
    fn test_to_float() {
        assert_eq!(3u8.to_float(), 3.0f64);
        assert_eq!((-7i64).to_float(), -7.0f64);
        assert_eq!(0.5f32.to_float(), 0.5f32);
    }

    #[cfg(feature = "f16")]
    #[test]
    fn test_half_promotes_to_f32() {
        let h = half::f16::from_f64(1.5);
        assert_eq!(h.to_float(), 1.5f32);
        assert_eq!(<half::bf16 as Element>::Float::DTYPE, DType::F32);
    }
}
