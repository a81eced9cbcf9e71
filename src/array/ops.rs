//! Elementwise arithmetic on equally sized arrays

use super::core::{SArray, StaticArray};
use super::size::SizeDescriptor;
use crate::dtype::Element;
use std::ops::{Add, Neg, Sub};

impl<T: Element, S: SizeDescriptor> Add for SArray<T, S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (a, b) = (self.as_slice(), rhs.as_slice());
        Self::from_fn(|i| a[i] + b[i])
    }
}

impl<T: Element, S: SizeDescriptor> Sub for SArray<T, S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let (a, b) = (self.as_slice(), rhs.as_slice());
        Self::from_fn(|i| a[i] - b[i])
    }
}

impl<T: Element + Neg<Output = T>, S: SizeDescriptor> Neg for SArray<T, S> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}
