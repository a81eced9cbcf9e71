//! Floating-point promotion targets for linear algebra
//!
//! Determinants and inverses of integer matrices are generally not integer
//! valued, so kernels never run in the input element type. Each [`Element`]
//! names a [`LinalgElement`] through `Element::Float` and the kernels compute
//! in that type.

use super::Element;
use std::ops::Neg;

/// Trait for the floating-point types linear algebra kernels compute in.
///
/// A `LinalgElement` is its own promotion target. `zero()` and `one()` are
/// inherited from `Element`.
pub trait LinalgElement: Element<Float = Self> + Neg<Output = Self> {
    /// Returns absolute value
    fn abs_val(self) -> Self;
    /// Returns square root
    fn sqrt_val(self) -> Self;
    /// Returns the reciprocal `1 / self`
    fn recip_val(self) -> Self;
}

impl LinalgElement for f32 {
    #[inline]
    fn abs_val(self) -> Self {
        self.abs()
    }
    #[inline]
    fn sqrt_val(self) -> Self {
        self.sqrt()
    }
    #[inline]
    fn recip_val(self) -> Self {
        1.0 / self
    }
}

impl LinalgElement for f64 {
    #[inline]
    fn abs_val(self) -> Self {
        self.abs()
    }
    #[inline]
    fn sqrt_val(self) -> Self {
        self.sqrt()
    }
    #[inline]
    fn recip_val(self) -> Self {
        1.0 / self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promote<T: Element>(x: T) -> T::Float {
        x.to_float()
    }

    #[test]
    fn test_float_is_own_promotion() {
        assert_eq!(promote(2.5f64), 2.5f64);
        assert_eq!(promote(2.5f32), 2.5f32);
    }

    #[test]
    fn test_integer_promotion_is_exact() {
        assert_eq!(promote(u64::from(u32::MAX)), u32::MAX as f64);
        assert_eq!(promote(i8::MIN), -128.0);
    }

    #[test]
    fn test_linalg_helpers() {
        assert_eq!((-4.0f64).abs_val(), 4.0);
        assert_eq!(9.0f32.sqrt_val(), 3.0);
        assert_eq!(4.0f64.recip_val(), 0.25);
    }
}
