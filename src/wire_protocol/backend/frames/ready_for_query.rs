//! Module: wire_protocol::backend::frames::ready_for_query

use bytes::{BufMut, BytesMut};

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::{MessageKind, TxStatus};
use crate::wire_protocol::utils::PayloadCursor;

/// 'Z': the backend is ready for a new query cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyForQueryFrame {
    pub status: TxStatus,
}

impl ReadyForQueryFrame {
    pub fn new(status: TxStatus) -> Self {
        Self { status }
    }
}

impl WireSerializable for ReadyForQueryFrame {
    const KIND: MessageKind = MessageKind::ReadyForQuery;

    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        Ok(Self {
            status: TxStatus::try_from(cursor.read_u8()?)?,
        })
    }

    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        buf.put_u8(self.status.as_byte());
        Ok(())
    }

    fn body_size(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InvalidValue;

    #[test]
    fn each_status_byte() {
        for (byte, status) in [
            (b'I', TxStatus::Idle),
            (b'T', TxStatus::Active),
            (b'E', TxStatus::Error),
        ] {
            let frame = ReadyForQueryFrame::from_payload(vec![byte]).unwrap();
            assert_eq!(frame.status, status);
            assert_eq!(&frame.to_bytes().unwrap()[..], &[b'Z', 0, 0, 0, 5, byte]);
        }
    }

    #[test]
    fn unknown_status_is_invalid() {
        let err = ReadyForQueryFrame::from_payload(vec![b'X']).unwrap_err();
        assert!(matches!(err, CodecError::InvalidValue(InvalidValue::TxStatus(b'X'))));
    }

    #[test]
    fn empty_and_long_payloads_fail() {
        assert!(matches!(
            ReadyForQueryFrame::from_payload(Vec::new()),
            Err(CodecError::Underflow { .. })
        ));
        assert!(matches!(
            ReadyForQueryFrame::from_payload(vec![b'I', b'I']),
            Err(CodecError::TrailingBytes(1))
        ));
    }
}
