//! Fixed-point operations.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::fxp::narrow::fxp_narrow;
use crate::fxp::widen::{Portable, WideningMac};
use crate::types::scalar::Fixed;

/// Fixed-point multiplication.
///
/// The exact 64-bit product is shifted right by `F` (floor rounding) and
/// truncated to 32 bits. There is no saturation: an out-of-range product
/// wraps in two's complement.
#[inline]
pub fn fxp_mul<const F: u32>(a: Fixed<F>, b: Fixed<F>) -> Fixed<F> {
    fxp_mul_with::<Portable, F>(a, b)
}

/// [`fxp_mul`] on a caller-chosen widening primitive.
#[inline]
pub fn fxp_mul_with<M: WideningMac, const F: u32>(a: Fixed<F>, b: Fixed<F>) -> Fixed<F> {
    fxp_narrow(M::widen_mul(a.0, b.0))
}

/// Wrapping fixed-point addition.
#[inline]
pub fn fxp_add<const F: u32>(a: Fixed<F>, b: Fixed<F>) -> Fixed<F> {
    Fixed(a.0.wrapping_add(b.0))
}

/// Wrapping fixed-point subtraction.
#[inline]
pub fn fxp_sub<const F: u32>(a: Fixed<F>, b: Fixed<F>) -> Fixed<F> {
    Fixed(a.0.wrapping_sub(b.0))
}

impl<const F: u32> Mul for Fixed<F> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        fxp_mul(self, rhs)
    }
}

impl<const F: u32> MulAssign for Fixed<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = fxp_mul(*self, rhs);
    }
}

impl<const F: u32> Add for Fixed<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        fxp_add(self, rhs)
    }
}

impl<const F: u32> AddAssign for Fixed<F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = fxp_add(*self, rhs);
    }
}

impl<const F: u32> Sub for Fixed<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        fxp_sub(self, rhs)
    }
}

impl<const F: u32> SubAssign for Fixed<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = fxp_sub(*self, rhs);
    }
}

impl<const F: u32> Neg for Fixed<F> {
    type Output = Self;

    /// `-MIN` wraps back to `MIN`.
    #[inline]
    fn neg(self) -> Self {
        Fixed(self.0.wrapping_neg())
    }
}
