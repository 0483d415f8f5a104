// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Double-width to single-width conversion.

use crate::types::scalar::Fixed;

/// Converts an `S.(2F)` accumulator to `S.F`.
///
/// Arithmetic right shift by `F`, so discarded fraction bits round toward
/// negative infinity. The result is truncated to 32 bits without
/// saturation: out-of-range values wrap.
#[inline(always)]
pub fn fxp_narrow<const F: u32>(acc: i64) -> Fixed<F> {
    let () = Fixed::<F>::VALID_WIDTH;
    Fixed((acc >> F) as i32)
}
