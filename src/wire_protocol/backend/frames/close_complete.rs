//! Module: wire_protocol::backend::frames::close_complete
//!
//! '3': the Close step completed. The payload is always empty.

use bytes::BytesMut;

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::PayloadCursor;

// -----------------------------------------------------------------------------
// ----- CloseCompleteFrame ----------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloseCompleteFrame;

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for CloseCompleteFrame {
    const KIND: MessageKind = MessageKind::CloseComplete;

    #[inline]
    fn decode(_cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        Ok(CloseCompleteFrame)
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
