//! Module: wire_protocol::backend::frames::no_data
//!
//! 'n': the described statement or portal returns no rows. The payload is always empty.

use bytes::BytesMut;

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::PayloadCursor;

// -----------------------------------------------------------------------------
// ----- NoDataFrame -----------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDataFrame;

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for NoDataFrame {
    const KIND: MessageKind = MessageKind::NoData;

    #[inline]
    fn decode(_cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        Ok(NoDataFrame)
    }

    #[inline]
    fn encode_body(&self, _buf: &mut BytesMut) -> Result<(), CodecError> {
        Ok(())
    }

    #[inline]
    fn body_size(&self) -> usize {
        0
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn decode_is_a_no_op() {
        assert_eq!(NoDataFrame::from_payload(Bytes::new()).unwrap(), NoDataFrame);
    }

    #[test]
    fn encodes_header_only() {
        assert_eq!(&NoDataFrame.to_bytes().unwrap()[..], &[b'n', 0, 0, 0, 4]);
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
