//! Module: wire_protocol::backend::frames::copy_out_response
//!
//! 'H': the server is about to send COPY data.

use bytes::BytesMut;

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::backend::frames::copy_response::{
    ColumnFormats, decode_formats, encode_formats, formats_size,
};
use crate::wire_protocol::types::{FormatCode, MessageKind};
use crate::wire_protocol::utils::PayloadCursor;

// -----------------------------------------------------------------------------
// ----- CopyOutResponseFrame --------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CopyOutResponseFrame {
    /// Overall format. Binary requires every column to be binary.
    pub format: FormatCode,
    pub column_formats: ColumnFormats,
}

impl CopyOutResponseFrame {
    pub fn new(format: FormatCode, column_formats: impl IntoIterator<Item = FormatCode>) -> Self {
        Self {
            format,
            column_formats: column_formats.into_iter().collect(),
        }
    }
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for CopyOutResponseFrame {
    const KIND: MessageKind = MessageKind::CopyOutResponse;

    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        let (format, column_formats) = decode_formats(cursor)?;
        Ok(Self {
            format,
            column_formats,
        })
    }

    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        encode_formats(buf, self.format, &self.column_formats)
    }

    fn body_size(&self) -> usize {
        formats_size(&self.column_formats)
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
