//! Module: wire_protocol::backend::frames::empty_query_response
//!
//! 'I': stands in for CommandComplete when the query string was empty. The payload is always empty.

use bytes::BytesMut;

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::PayloadCursor;

// -----------------------------------------------------------------------------
// ----- EmptyQueryResponseFrame -----------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyQueryResponseFrame;

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for EmptyQueryResponseFrame {
    const KIND: MessageKind = MessageKind::EmptyQueryResponse;

    #[inline]
    fn decode(_cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        Ok(EmptyQueryResponseFrame)
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


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
