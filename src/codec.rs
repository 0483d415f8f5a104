// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Packed little-endian word layout for fixed-point tables.
//!
//! Tap and weight tables are loaded into device memory regions as
//! consecutive 32-bit little-endian words holding the raw fixed-point value.
//! Both directions work on caller-owned buffers.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{FxpError, FxpResult};
use crate::types::scalar::Fixed;

pub const WORD_BYTES: usize = 4;

/// Writes `values` into the front of `out`. Returns the number of bytes
/// written. `out` is left untouched on error.
pub fn encode_words<const F: u32>(values: &[Fixed<F>], out: &mut [u8]) -> FxpResult<usize> {
    let needed = values.len() * WORD_BYTES;
    if out.len() < needed {
        return Err(FxpError::BufferTooSmall { needed, available: out.len() });
    }

    for (chunk, v) in out[..needed].chunks_exact_mut(WORD_BYTES).zip(values) {
        LittleEndian::write_i32(chunk, v.0);
    }

    Ok(needed)
}

/// Reads every word of `bytes` into the front of `out`. Returns the number
/// of values decoded.
pub fn decode_words<const F: u32>(bytes: &[u8], out: &mut [Fixed<F>]) -> FxpResult<usize> {
    if bytes.len() % WORD_BYTES != 0 {
        return Err(FxpError::UnalignedLength(bytes.len()));
    }

    let count = bytes.len() / WORD_BYTES;
    if out.len() < count {
        return Err(FxpError::BufferTooSmall { needed: count, available: out.len() });
    }

    for (slot, chunk) in out.iter_mut().zip(bytes.chunks_exact(WORD_BYTES)) {
        *slot = Fixed(LittleEndian::read_i32(chunk));
    }

    Ok(count)
}
