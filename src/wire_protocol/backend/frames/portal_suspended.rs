//! Module: wire_protocol::backend::frames::portal_suspended
//!
//! 's': Execute hit its row limit before the portal was exhausted. The payload is always empty.

use bytes::BytesMut;

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::PayloadCursor;

// -----------------------------------------------------------------------------
// ----- PortalSuspendedFrame --------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortalSuspendedFrame;

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for PortalSuspendedFrame {
    const KIND: MessageKind = MessageKind::PortalSuspended;

    #[inline]
    fn decode(_cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        Ok(PortalSuspendedFrame)
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

    #[test]
    fn encodes_header_only() {
        assert_eq!(&PortalSuspendedFrame.to_bytes().unwrap()[..], &[b's', 0, 0, 0, 4]);
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
