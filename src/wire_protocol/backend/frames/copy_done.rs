//! Module: wire_protocol::backend::frames::copy_done
//!
//! 'c': the COPY data stream has ended. The payload is always empty.

use bytes::BytesMut;

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::PayloadCursor;

// -----------------------------------------------------------------------------
// ----- CopyDoneFrame ---------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyDoneFrame;

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for CopyDoneFrame {
    const KIND: MessageKind = MessageKind::CopyDone;

    #[inline]
    fn decode(_cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        Ok(CopyDoneFrame)
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
