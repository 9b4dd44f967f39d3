//! Module: wire_protocol::backend::frames::negotiate_protocol_version
//!
//! Sent in place of the usual startup reply when the client asked for a
//! newer minor version or for `_pq_.` options the server does not know.

use bytes::{BufMut, BytesMut};

use crate::errors::{CodecError, InvalidValue};
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::{PayloadCursor, put_cstr};

// -----------------------------------------------------------------------------
// ----- NegotiateProtocolVersionFrame -----------------------------------------

/// 'v': the server does not support the requested minor version or some
/// `_pq_.` startup options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NegotiateProtocolVersionFrame {
    pub newest_minor_version: i32,
    pub unrecognized_options: Vec<String>,
}

impl NegotiateProtocolVersionFrame {
    pub fn new(newest_minor_version: i32, unrecognized_options: Vec<String>) -> Self {
        Self {
            newest_minor_version,
            unrecognized_options,
        }
    }
}

impl WireSerializable for NegotiateProtocolVersionFrame {
    const KIND: MessageKind = MessageKind::NegotiateProtocolVersion;

    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        let newest_minor_version = cursor.read_i32()?;

        let count = cursor.read_i32()?;
        if count < 0 {
            return Err(InvalidValue::Count(count).into());
        }
        let count = count as usize;
        // Each option is at least its terminator.
        cursor.ensure(count)?;

        let mut unrecognized_options = Vec::with_capacity(count);
        for _ in 0..count {
            unrecognized_options.push(cursor.read_cstr()?);
        }

        Ok(Self {
            newest_minor_version,
            unrecognized_options,
        })
    }

    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        let count = i32::try_from(self.unrecognized_options.len()).map_err(|_| {
            CodecError::overflow("options", self.unrecognized_options.len(), i32::MAX as usize)
        })?;

        buf.put_i32(self.newest_minor_version);
        buf.put_i32(count);
        for option in &self.unrecognized_options {
            put_cstr(buf, option)?;
        }
        Ok(())
    }

    fn body_size(&self) -> usize {
        8 + self
            .unrecognized_options
            .iter()
            .map(|o| o.len() + 1)
            .sum::<usize>()
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_version_and_options() {
        let mut payload = vec![0, 0, 0, 0, 0, 0, 0, 2];
        payload.extend_from_slice(b"_pq_.a\0_pq_.b\0");

        let frame = NegotiateProtocolVersionFrame::from_payload(payload.clone()).unwrap();
        assert_eq!(frame.newest_minor_version, 0);
        assert_eq!(frame.unrecognized_options, vec!["_pq_.a", "_pq_.b"]);
        assert_eq!(&frame.to_bytes().unwrap()[5..], &payload[..]);
    }

    #[test]
    fn option_list_errors_propagate() {
        let mut payload = vec![0, 0, 0, 2, 0, 0, 0, 1];
        payload.extend_from_slice(b"_pq_.unterminated");
        let err = NegotiateProtocolVersionFrame::from_payload(payload).unwrap_err();
        assert!(matches!(err, CodecError::Underflow { .. }));
    }

    #[test]
    fn count_larger_than_payload_underflows() {
        let payload = vec![0, 0, 0, 2, 0x7F, 0xFF, 0xFF, 0xFF];
        let err = NegotiateProtocolVersionFrame::from_payload(payload).unwrap_err();
        assert!(matches!(err, CodecError::Underflow { remaining: 0, .. }));
    }

    #[test]
    fn negative_count_is_invalid() {
        let payload = vec![0, 0, 0, 2, 0xFF, 0xFF, 0xFF, 0xFF];
        let err = NegotiateProtocolVersionFrame::from_payload(payload).unwrap_err();
        assert!(matches!(err, CodecError::InvalidValue(InvalidValue::Count(-1))));
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
