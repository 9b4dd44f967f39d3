//! Module: wire_protocol::backend::frames::error_response
//!
//! 'E': the current command failed. Builders and lookups come from
//! `ResponseFields`.

use bytes::BytesMut;

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::backend::frames::response_fields::{
    ErrorField, ResponseFields, decode_fields, encode_fields, fields_size, required_fields,
};
use crate::wire_protocol::types::{MessageKind, Severity};
use crate::wire_protocol::utils::PayloadCursor;

// -----------------------------------------------------------------------------
// ----- ErrorResponseFrame ----------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorResponseFrame {
    pub fields: Vec<ErrorField>,
}

// -----------------------------------------------------------------------------
// ----- ErrorResponseFrame: Static --------------------------------------------

impl ErrorResponseFrame {
    pub fn new(severity: Severity, code: &str, message: impl Into<String>) -> Self {
        Self {
            fields: required_fields(severity, code, message),
        }
    }

    pub fn from_fields(fields: Vec<ErrorField>) -> Self {
        Self { fields }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, "XX000", message)
    }

    pub fn protocol_violation(message: impl Into<String>) -> Self {
        Self::new(Severity::Fatal, "08P01", message)
    }

    pub fn invalid_password(message: impl Into<String>) -> Self {
        Self::new(Severity::Fatal, "28P01", message)
    }
}

impl ResponseFields for ErrorResponseFrame {
    fn fields(&self) -> &[ErrorField] {
        &self.fields
    }

    fn push_field(&mut self, field: ErrorField) {
        self.fields.push(field);
    }
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for ErrorResponseFrame {
    const KIND: MessageKind = MessageKind::ErrorResponse;

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
