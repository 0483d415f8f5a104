use crate::types::scalar::{Fixed, S12_19, S16_15};
use crate::error::{FxpError, Operand};
use crate::fxp::ops::fxp_mul;
use crate::fxp::widen::WideningMac;
use crate::math::dot::{fxp_dot, fxp_dot_with};
use std::string::ToString;

#[test]
fn test_fxp_dot() {
    // [1, 0] . [0, 1] = 0
    let v1 = [S16_15::ONE, S16_15::ZERO];
    let v2 = [S16_15::ZERO, S16_15::ONE];
    assert_eq!(fxp_dot(&v1, &v2, 2), Ok(S16_15::ZERO));

    // [1, 0] . [1, 1] = 1
    let v3 = [S16_15::ONE, S16_15::ONE];
    assert_eq!(fxp_dot(&v1, &v3, 2), Ok(S16_15::ONE));

    // [1, 2] . [3, 4] = 11, exact
    let v4 = [S16_15::from_int(1), S16_15::from_int(2)];
    let v5 = [S16_15::from_int(3), S16_15::from_int(4)];
    assert_eq!(fxp_dot(&v4, &v5, 2), Ok(S16_15::from_int(11)));

    let w1 = [S12_19::from_int(-2), S12_19::ONE, S12_19::TWO];
    let w2 = [S12_19::from_int(5), S12_19::from_int(7), S12_19::ONE];
    assert_eq!(fxp_dot(&w1, &w2, 3), Ok(S12_19::from_int(-1)));
}

#[test]
fn test_fxp_dot_length_one_is_mul() {
    let samples = [0, 1, -1, 16384, -16385, 1 << 23, i32::MAX, i32::MIN];
    for &x in &samples {
        for &y in &samples {
            let a = Fixed::<15>(x);
            let b = Fixed::<15>(y);
            assert_eq!(fxp_dot(&[a], &[b], 1), Ok(fxp_mul(a, b)));
        }
    }
}

#[test]
fn test_fxp_dot_single_rounding() {
    // eps * 0.5 three times: each term alone narrows to 0, the sum 1.5eps to eps
    let a = [Fixed::<15>(1); 3];
    let b = [Fixed::<15>(1 << 14); 3];
    let per_term = a
        .iter()
        .zip(b.iter())
        .fold(S16_15::ZERO, |acc, (&x, &y)| acc + fxp_mul(x, y));

    assert_eq!(per_term, Fixed(0));
    assert_eq!(fxp_dot(&a, &b, 3), Ok(Fixed(1)));

    // Negative side: per-term floors twice, the total exactly once
    let a = [Fixed::<15>(-1); 2];
    let b = [Fixed::<15>(1 << 14); 2];
    let per_term = fxp_mul(a[0], b[0]) + fxp_mul(a[1], b[1]);
    assert_eq!(per_term, Fixed(-2));
    assert_eq!(fxp_dot(&a, &b, 2), Ok(Fixed(-1)));
}

#[test]
fn test_fxp_dot_empty_rejected() {
    let sentinel = [Fixed::<15>(0x5A5A_5A5A); 64];
    assert_eq!(fxp_dot(&sentinel, &sentinel, 0), Err(FxpError::EmptyInput));

    let empty: [S16_15; 0] = [];
    assert_eq!(fxp_dot(&empty, &empty, 0), Err(FxpError::EmptyInput));
    assert_eq!(
        FxpError::EmptyInput.to_string(),
        "dot product order must be at least 1"
    );
}

#[test]
fn test_fxp_dot_short_operand() {
    let short = [S16_15::ONE; 2];
    let long = [S16_15::ONE; 4];

    assert_eq!(
        fxp_dot(&short, &long, 3),
        Err(FxpError::LengthTooShort { operand: Operand::Lhs, len: 2, order: 3 })
    );
    assert_eq!(
        fxp_dot(&long, &short, 3),
        Err(FxpError::LengthTooShort { operand: Operand::Rhs, len: 2, order: 3 })
    );

    let err = fxp_dot(&long, &short, 4).unwrap_err();
    assert_eq!(err.to_string(), "rhs has 2 elements, dot product order is 4");
}

#[test]
fn test_fxp_dot_ignores_tail() {
    let a = [S16_15::ONE, S16_15::TWO, S16_15::MAX];
    let b = [S16_15::ONE, S16_15::ONE, S16_15::MAX];
    assert_eq!(fxp_dot(&a, &b, 2), Ok(S16_15::from_int(3)));
}

#[test]
fn test_fxp_dot_wraps() {
    // Final narrowing wraps: 256 * 256 = 65536 -> MIN, plus 1
    let a = [Fixed::<15>(1 << 23), S16_15::ONE];
    let b = [Fixed::<15>(1 << 23), S16_15::ONE];
    assert_eq!(fxp_dot(&a, &b, 2), Ok(Fixed(i32::MIN + (1 << 15))));

    // Accumulator wraps: 3 * 2^62 + 2^15 mod 2^64 = -2^62 + 2^15,
    // >> 15 = -2^47 + 1, low word = 1
    let a = [S16_15::MIN, S16_15::MIN, S16_15::MIN, Fixed(1)];
    let b = [S16_15::MIN, S16_15::MIN, S16_15::MIN, Fixed(1 << 15)];
    assert_eq!(fxp_dot(&a, &b, 4), Ok(Fixed(1)));
}

/// Doubles every product, so results show which primitive ran.
struct Doubling;

impl WideningMac for Doubling {
    fn widen_mul(a: i32, b: i32) -> i64 {
        ((a as i64) * (b as i64)) << 1
    }

    fn widen_mul_add(acc: i64, a: i32, b: i32) -> i64 {
        acc.wrapping_add(Self::widen_mul(a, b))
    }
}

#[test]
fn test_fxp_dot_with_custom_primitive() {
    let a = [S16_15::from_int(1), S16_15::from_int(2)];
    let b = [S16_15::from_int(3), S16_15::from_int(4)];
    assert_eq!(fxp_dot_with::<Doubling, 15>(&a, &b, 2), Ok(S16_15::from_int(22)));
    assert_eq!(
        fxp_dot_with::<Doubling, 15>(&a, &b, 0),
        Err(FxpError::EmptyInput)
    );
}
