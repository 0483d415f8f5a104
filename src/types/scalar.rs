// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Wrapper for raw i32 representing a signed `S(31-F).F` fixed-point scalar.

use serde::{Deserialize, Serialize};

/// Signed fixed-point value with `F` fractional bits stored in an `i32`.
///
/// The width is part of the type, so values produced under different
/// formats cannot be combined. Representable range is
/// `[-2^(31-F), 2^(31-F) - 2^-F]`; arithmetic wraps rather than saturates.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Fixed<const F: u32>(pub i32);

/// S16.15, the on-chip kernel format.
pub type S16_15 = Fixed<15>;

/// S12.19, the host type-cast format.
pub type S12_19 = Fixed<19>;

impl<const F: u32> Fixed<F> {
    /// Post-monomorphisation guard: `TWO` must be representable.
    pub(crate) const VALID_WIDTH: () =
        assert!(F >= 1 && F <= 29, "fractional width must be in 1..=29");

    pub const FRAC_BITS: u32 = {
        let () = Self::VALID_WIDTH;
        F
    };

    pub const ZERO: Self = Fixed(0);
    pub const ONE: Self = {
        let () = Self::VALID_WIDTH;
        Fixed(1 << F)
    };
    pub const TWO: Self = {
        let () = Self::VALID_WIDTH;
        Fixed(2 << F)
    };

    /// Smallest positive step, 2^-F.
    pub const EPSILON: Self = Fixed(1);
    pub const MIN: Self = Fixed(i32::MIN);
    pub const MAX: Self = Fixed(i32::MAX);

    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Fixed(raw)
    }

    #[inline]
    pub const fn to_raw(self) -> i32 {
        self.0
    }

    /// Builds `i.0`. High bits that do not fit are discarded.
    #[inline]
    pub const fn from_int(i: i32) -> Self {
        let () = Self::VALID_WIDTH;
        Fixed(i << F)
    }

    /// Integer part, rounded toward negative infinity.
    #[inline]
    pub const fn to_int_floor(self) -> i32 {
        self.0 >> F
    }

    /// Raw fractional bits, always non-negative.
    #[inline]
    pub const fn frac_part(self) -> i32 {
        self.0 & ((1 << F) - 1)
    }
}
