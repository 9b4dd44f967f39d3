//! Read a NUL-terminated UTF-8 string from the front of a byte slice.

use memchr::memchr;
use std::str;

use crate::errors::CodecError;

// -----------------------------------------------------------------------------
// ----- read_cstr -------------------------------------------------------------

/// Read a NUL-terminated UTF-8 string from the front of `input_bytes`.
///
/// Returns the string borrowed from `input_bytes` together with the number of
/// bytes consumed, terminator included. The empty string (a lone NUL) is valid
/// and consumes one byte. A slice without any NUL is an `Underflow`.
#[inline]
pub fn read_cstr(input_bytes: &[u8]) -> Result<(&str, usize), CodecError> {
    let nul_index = memchr(0, input_bytes)
        .ok_or_else(|| CodecError::underflow(input_bytes.len() + 1, input_bytes.len()))?;

    let parsed = str::from_utf8(&input_bytes[..nul_index])?;

    Ok((parsed, nul_index + 1))
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
