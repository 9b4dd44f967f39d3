use crate::errors::{CodecError, InvalidValue};

// -----------------------------------------------------------------------------
// ----- FrameHeader -----------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub tag: u8,
    /// Value of the length field, which counts itself.
    pub len: usize,
    /// Tag byte plus `len`.
    pub total_len: usize,
}

impl FrameHeader {
    #[inline]
    pub fn payload_len(&self) -> usize {
        self.len - 4
    }
}

// -----------------------------------------------------------------------------
// ----- peek_backend ----------------------------------------------------------

/// Look at the front of `bytes` for one complete backend frame.
///
/// Returns `Ok(None)` until the whole frame is buffered. A length field below
/// 4 can never become valid and is reported immediately.
pub fn peek_backend(bytes: &[u8]) -> Result<Option<FrameHeader>, CodecError> {
    if bytes.len() < 5 {
        return Ok(None);
    }

    let tag = bytes[0];
    let raw_len = u32::from_be_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]);
    if raw_len < 4 {
        return Err(InvalidValue::EnvelopeLength(raw_len).into());
    }

    let len = raw_len as usize;
    let total_len = 1 + len;
    if bytes.len() < total_len {
        return Ok(None);
    }

    Ok(Some(FrameHeader {
        tag,
        len,
        total_len,
    }))
}
