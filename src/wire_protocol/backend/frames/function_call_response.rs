//! Module: wire_protocol::backend::frames::function_call_response

use bytes::{Bytes, BytesMut};

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::{PayloadCursor, put_nullable_bytes};

// -----------------------------------------------------------------------------
// ----- FunctionCallResponseFrame ---------------------------------------------

/// 'V': result of a fast-path function call. `None` is a NULL result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionCallResponseFrame {
    pub result: Option<Bytes>,
}

impl FunctionCallResponseFrame {
    pub fn new(result: Option<Bytes>) -> Self {
        Self { result }
    }
}

impl WireSerializable for FunctionCallResponseFrame {
    const KIND: MessageKind = MessageKind::FunctionCallResponse;

    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        Ok(Self {
            result: cursor.read_nullable_bytes()?,
        })
    }

    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        put_nullable_bytes(buf, self.result.as_deref())
    }

    fn body_size(&self) -> usize {
        4 + self.result.as_ref().map_or(0, Bytes::len)
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_result() {
        let frame = FunctionCallResponseFrame::from_payload(vec![0xFF; 4]).unwrap();
        assert_eq!(frame.result, None);
        assert_eq!(
            &frame.to_bytes().unwrap()[..],
            &[b'V', 0, 0, 0, 8, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn value_result_keeps_length_prefix() {
        let frame = FunctionCallResponseFrame::new(Some(Bytes::from_static(b"42")));
        let bytes = frame.to_bytes().unwrap();
        assert_eq!(&bytes[..], &[b'V', 0, 0, 0, 10, 0, 0, 0, 2, b'4', b'2']);
        assert_eq!(FunctionCallResponseFrame::from_payload(bytes.slice(5..)).unwrap(), frame);
    }

    #[test]
    fn trailing_bytes_after_value() {
        let err = FunctionCallResponseFrame::from_payload(vec![0, 0, 0, 0, 9]).unwrap_err();
        assert!(matches!(err, CodecError::TrailingBytes(1)));
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
