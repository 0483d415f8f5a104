// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use core::fmt;
use thiserror::Error;

/// Which input of a binary operation an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Lhs,
    Rhs,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Lhs => f.write_str("lhs"),
            Operand::Rhs => f.write_str("rhs"),
        }
    }
}

/// Argument errors. Arithmetic itself never fails: overflow wraps.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxpError {
    /// Dot product requested over zero elements.
    #[error("dot product order must be at least 1")]
    EmptyInput,

    #[error("{operand} has {len} elements, dot product order is {order}")]
    LengthTooShort {
        operand: Operand,
        len: usize,
        order: usize,
    },

    #[error("buffer too small: need {needed}, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// Byte region length is not a whole number of 32-bit words.
    #[error("byte length {0} is not a multiple of the word size")]
    UnalignedLength(usize),
}

pub type FxpResult<T> = core::result::Result<T, FxpError>;
