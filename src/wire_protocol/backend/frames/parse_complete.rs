//! Module: wire_protocol::backend::frames::parse_complete
//!
//! '1': the Parse step completed.

use bytes::BytesMut;

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::PayloadCursor;

// -----------------------------------------------------------------------------
// ----- ParseCompleteFrame ----------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseCompleteFrame;

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for ParseCompleteFrame {
    const KIND: MessageKind = MessageKind::ParseComplete;

    #[inline]
    fn decode(_cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        Ok(ParseCompleteFrame)
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
