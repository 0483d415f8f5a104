// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Widening multiply primitives.
//!
//! Every product and sum-of-products in this crate goes through a
//! [`WideningMac`]. Targets with a native 32x32->64 multiply-accumulate can
//! provide their own implementation; [`Portable`] is exact 64-bit arithmetic
//! and is what the plain entry points use.

/// Signed 32x32->64 multiply and multiply-accumulate.
pub trait WideningMac {
    /// Exact product `a * b`.
    fn widen_mul(a: i32, b: i32) -> i64;

    /// `acc + a * b` with no truncation of the product. Only a sum that
    /// leaves the 64-bit range wraps.
    fn widen_mul_add(acc: i64, a: i32, b: i32) -> i64;
}

/// Reference implementation using native `i64` arithmetic.
#[derive(Clone, Copy, Debug, Default)]
pub struct Portable;

impl WideningMac for Portable {
    #[inline(always)]
    fn widen_mul(a: i32, b: i32) -> i64 {
        // |i32::MIN|^2 = 2^62, always fits.
        (a as i64) * (b as i64)
    }

    #[inline(always)]
    fn widen_mul_add(acc: i64, a: i32, b: i32) -> i64 {
        acc.wrapping_add(Self::widen_mul(a, b))
    }
}
