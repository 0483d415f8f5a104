//! Fixed-point dot product.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::{FxpError, FxpResult, Operand};
use crate::fxp::narrow::fxp_narrow;
use crate::fxp::widen::{Portable, WideningMac};
use crate::types::scalar::Fixed;

/// Computes `sum(a[i] * b[i])` for `i < n`.
///
/// Every product is accumulated exactly in one i64 and the total is narrowed
/// once at the end, so the result carries a single floor rounding rather
/// than one per term. Not saturating: the final narrowing wraps to 32 bits,
/// and the accumulator itself wraps if the sum leaves the i64 range. Two
/// `i32::MIN * i32::MIN` terms are enough for that; operands of realistic
/// magnitude would need billions of terms.
///
/// Elements past `n` are ignored. Fails with [`FxpError::EmptyInput`] when
/// `n == 0` and [`FxpError::LengthTooShort`] when either slice holds fewer
/// than `n` elements.
pub fn fxp_dot<const F: u32>(a: &[Fixed<F>], b: &[Fixed<F>], n: usize) -> FxpResult<Fixed<F>> {
    fxp_dot_with::<Portable, F>(a, b, n)
}

/// [`fxp_dot`] on a caller-chosen widening primitive.
pub fn fxp_dot_with<M: WideningMac, const F: u32>(
    a: &[Fixed<F>],
    b: &[Fixed<F>],
    n: usize,
) -> FxpResult<Fixed<F>> {
    check_order(a.len(), b.len(), n)?;

    let mut acc = M::widen_mul(a[0].0, b[0].0);

    for i in (1..n).rev() {
        acc = M::widen_mul_add(acc, a[i].0, b[i].0);
    }

    Ok(fxp_narrow(acc))
}

fn check_order(len_a: usize, len_b: usize, n: usize) -> FxpResult<()> {
    let err = if n == 0 {
        FxpError::EmptyInput
    } else if len_a < n {
        FxpError::LengthTooShort { operand: Operand::Lhs, len: len_a, order: n }
    } else if len_b < n {
        FxpError::LengthTooShort { operand: Operand::Rhs, len: len_b, order: n }
    } else {
        return Ok(());
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(len_a, len_b, order = n, error = %err, "rejected dot product");

    Err(err)
}
