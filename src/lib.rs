// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![no_std]

//! spinnaker-fxp: no_std signed fixed-point multiply and dot-product
//! primitives for signal-processing kernels on cores without an FPU.
//!
//! Values are `i32` words in `S(31-F).F` format, with `F` a const generic.
//! Products are formed exactly in 64 bits and narrowed once with floor
//! rounding. Nothing saturates: overflow wraps in two's complement.

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod codec;
pub mod config;
pub mod error;
pub mod fxp;
pub mod math;
pub mod types;

pub use config::{Value, ONE, TWO, ZERO};
pub use error::{FxpError, FxpResult, Operand};
pub use fxp::narrow::fxp_narrow;
pub use fxp::ops::{fxp_mul, fxp_mul_with};
pub use fxp::widen::{Portable, WideningMac};
pub use math::dot::{fxp_dot, fxp_dot_with};
pub use types::scalar::{Fixed, S12_19, S16_15};

#[cfg(test)]
pub mod tests;
