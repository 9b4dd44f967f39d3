//! Checked writers for the variable-width wire shapes.
//!
//! Fixed-width integers and raw spans go straight through `BufMut`
//! (`put_u8`, `put_i16`, `put_i32`, `extend_from_slice`), all big-endian.

use bytes::{BufMut, BytesMut};
use memchr::memchr;

use crate::errors::{CodecError, InvalidValue};

// -----------------------------------------------------------------------------
// ----- put_cstr --------------------------------------------------------------

/// Append `value` followed by a single NUL terminator.
///
/// A string with an interior NUL cannot be read back as the same value, so it
/// is rejected with `InvalidValue::InteriorNul` and nothing is written.
#[inline]
pub fn put_cstr(buf: &mut BytesMut, value: &str) -> Result<(), CodecError> {
    if memchr(0, value.as_bytes()).is_some() {
        return Err(InvalidValue::InteriorNul.into());
    }
    buf.extend_from_slice(value.as_bytes());
    buf.put_u8(0);
    Ok(())
}

// -----------------------------------------------------------------------------
// ----- put_count -------------------------------------------------------------

/// Append an i16 element count.
#[inline]
pub fn put_count(buf: &mut BytesMut, count: usize, what: &'static str) -> Result<(), CodecError> {
    let count = i16::try_from(count)
        .map_err(|_| CodecError::overflow(what, count, i16::MAX as usize))?;
    buf.put_i16(count);
    Ok(())
}

// -----------------------------------------------------------------------------
// ----- put_nullable_bytes ----------------------------------------------------

/// Append an i32 length and the bytes, or `-1` for NULL.
#[inline]
pub fn put_nullable_bytes(buf: &mut BytesMut, value: Option<&[u8]>) -> Result<(), CodecError> {
    match value {
        None => buf.put_i32(-1),
        Some(bytes) => {
            let len = i32::try_from(bytes.len())
                .map_err(|_| CodecError::overflow("value", bytes.len(), i32::MAX as usize))?;
            buf.put_i32(len);
            buf.extend_from_slice(bytes);
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cstr_gets_single_terminator() {
        let mut buf = BytesMut::new();
        put_cstr(&mut buf, "abc").unwrap();
        put_cstr(&mut buf, "").unwrap();
        assert_eq!(&buf[..], b"abc\0\0");
    }

    #[test]
    fn cstr_rejects_interior_nul_without_writing() {
        let mut buf = BytesMut::new();
        let err = put_cstr(&mut buf, "a\0b").unwrap_err();
        assert!(matches!(err, CodecError::InvalidValue(InvalidValue::InteriorNul)));
        assert!(buf.is_empty());
    }

    #[test]
    fn count_overflows_past_i16() {
        let mut buf = BytesMut::new();
        put_count(&mut buf, 3, "columns").unwrap();
        assert_eq!(&buf[..], &[0, 3]);

        let err = put_count(&mut buf, 40_000, "columns").unwrap_err();
        assert!(matches!(err, CodecError::Overflow { what: "columns", .. }));
    }

    #[test]
    fn nullable_bytes_layout() {
        let mut buf = BytesMut::new();
        put_nullable_bytes(&mut buf, None).unwrap();
        put_nullable_bytes(&mut buf, Some(b"")).unwrap();
        put_nullable_bytes(&mut buf, Some(b"hi")).unwrap();
        assert_eq!(
            &buf[..],
            &[0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0, 0, 0, 0, 2, b'h', b'i']
        );
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
