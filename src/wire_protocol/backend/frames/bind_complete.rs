//! Module: wire_protocol::backend::frames::bind_complete
//!
//! '2': the Bind step completed. The payload is always empty.

use bytes::BytesMut;

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::PayloadCursor;

// -----------------------------------------------------------------------------
// ----- BindCompleteFrame -----------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindCompleteFrame;

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for BindCompleteFrame {
    const KIND: MessageKind = MessageKind::BindComplete;

    #[inline]
    fn decode(_cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        Ok(BindCompleteFrame)
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
