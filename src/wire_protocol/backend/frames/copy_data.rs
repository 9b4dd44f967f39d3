//! Module: wire_protocol::backend::frames::copy_data

use bytes::{Bytes, BytesMut};

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::PayloadCursor;

/// 'd': one chunk of a COPY data stream. The payload is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CopyDataFrame {
    pub data: Bytes,
}

impl CopyDataFrame {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }
}

impl WireSerializable for CopyDataFrame {
    const KIND: MessageKind = MessageKind::CopyData;

    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        Ok(Self {
            data: cursor.read_rest(),
        })
    }

    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        buf.extend_from_slice(&self.data);
        Ok(())
    }

    fn body_size(&self) -> usize {
        self.data.len()
    }
}
