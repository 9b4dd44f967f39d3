//! Module: wire_protocol::backend::frames::copy_in_response
//!
//! 'G': the server is ready to receive COPY data from the client.

use bytes::BytesMut;

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::backend::frames::copy_response::{
    ColumnFormats, decode_formats, encode_formats, formats_size,
};
use crate::wire_protocol::types::{FormatCode, MessageKind};
use crate::wire_protocol::utils::PayloadCursor;

// -----------------------------------------------------------------------------
// ----- CopyInResponseFrame ---------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CopyInResponseFrame {
    /// Overall format. Binary requires every column to be binary.
    pub format: FormatCode,
    pub column_formats: ColumnFormats,
}

impl CopyInResponseFrame {
    pub fn new(format: FormatCode, column_formats: impl IntoIterator<Item = FormatCode>) -> Self {
        Self {
            format,
            column_formats: column_formats.into_iter().collect(),
        }
    }
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for CopyInResponseFrame {
    const KIND: MessageKind = MessageKind::CopyInResponse;

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_copy_in() {
        let frame = CopyInResponseFrame::new(FormatCode::Binary, [FormatCode::Binary; 3]);
        let bytes = frame.to_bytes().unwrap();
        assert_eq!(
            &bytes[..],
            &[b'G', 0, 0, 0, 13, 1, 0, 3, 0, 1, 0, 1, 0, 1]
        );
        assert_eq!(CopyInResponseFrame::from_payload(bytes.slice(5..)).unwrap(), frame);
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
