// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.
//!
//! The fractional width is a whole-program constant. Both observed formats
//! are available as distinct types, but exactly one of them is selected as
//! the crate-wide [`Value`] by the `q15` / `q19` Cargo features.

use crate::types::scalar::Fixed;

/// Fractional bits of the S16.15 format used by the on-chip kernels.
pub const FRAC_BITS_Q15: u32 = 15;

/// Fractional bits of the S12.19 format used by the host-side type casts.
pub const FRAC_BITS_Q19: u32 = 19;

#[cfg(all(feature = "q15", feature = "q19"))]
compile_error!("features `q15` and `q19` are mutually exclusive: pick one fixed-point format per build");

#[cfg(not(any(feature = "q15", feature = "q19")))]
compile_error!("one of the features `q15` or `q19` must be enabled");

/// Number of fractional bits selected for this build.
#[cfg(all(feature = "q15", not(feature = "q19")))]
pub const FRAC_BITS: u32 = FRAC_BITS_Q15;

/// Number of fractional bits selected for this build.
#[cfg(all(feature = "q19", not(feature = "q15")))]
pub const FRAC_BITS: u32 = FRAC_BITS_Q19;

/// The fixed-point format selected for this build.
pub type Value = Fixed<FRAC_BITS>;

/// Scaling factor (1 << FRAC_BITS).
pub const SCALE: i32 = 1 << FRAC_BITS;

pub const ZERO: Value = Value::ZERO;
pub const ONE: Value = Value::ONE;
pub const TWO: Value = Value::TWO;
