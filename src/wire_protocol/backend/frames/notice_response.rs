//! Module: wire_protocol::backend::frames::notice_response
//!
//! 'N': an informational message that does not abort anything. Same body as
//! ErrorResponse.

use bytes::BytesMut;

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::backend::frames::response_fields::{
    ErrorField, ResponseFields, decode_fields, encode_fields, fields_size, required_fields,
};
use crate::wire_protocol::types::{MessageKind, Severity};
use crate::wire_protocol::utils::PayloadCursor;

// -----------------------------------------------------------------------------
// ----- NoticeResponseFrame ---------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoticeResponseFrame {
    pub fields: Vec<ErrorField>,
}

impl NoticeResponseFrame {
    pub fn new(severity: Severity, code: &str, message: impl Into<String>) -> Self {
        Self {
            fields: required_fields(severity, code, message),
        }
    }

    pub fn from_fields(fields: Vec<ErrorField>) -> Self {
        Self { fields }
    }
}

impl ResponseFields for NoticeResponseFrame {
    fn fields(&self) -> &[ErrorField] {
        &self.fields
    }

    fn push_field(&mut self, field: ErrorField) {
        self.fields.push(field);
    }
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for NoticeResponseFrame {
    const KIND: MessageKind = MessageKind::NoticeResponse;

    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        Ok(Self {
            fields: decode_fields(cursor)?,
        })
    }

    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        encode_fields(buf, &self.fields)
    }

    fn body_size(&self) -> usize {
        fields_size(&self.fields)
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
