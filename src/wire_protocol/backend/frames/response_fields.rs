//! Module: wire_protocol::backend::frames::response_fields
//!
//! ErrorResponse and NoticeResponse share one body: a run of
//! `tag:u8 value:cstr` pairs closed by a single zero tag byte. Unknown tags
//! fail the decode. Fields keep their wire order so a decoded frame
//! re-encodes byte for byte.

use bytes::{BufMut, BytesMut};

use crate::errors::CodecError;
use crate::wire_protocol::types::{FieldTag, Severity};
use crate::wire_protocol::utils::{PayloadCursor, put_cstr};

// -----------------------------------------------------------------------------
// ----- ErrorField ------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorField {
    pub tag: FieldTag,
    pub value: String,
}

impl ErrorField {
    pub fn new(tag: FieldTag, value: impl Into<String>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }
}

// -----------------------------------------------------------------------------
// ----- ResponseFields --------------------------------------------------------

/// Builder and lookup methods over a tagged field list.
pub trait ResponseFields: Sized {
    fn fields(&self) -> &[ErrorField];

    fn push_field(&mut self, field: ErrorField);

    // ----- Builder -----------------------------------------------------------

    /// Append a field. Repeated tags are kept; `get` returns the first.
    fn with(mut self, tag: FieldTag, value: impl Into<String>) -> Self {
        self.push_field(ErrorField::new(tag, value));
        self
    }

    fn with_detail(self, detail: impl Into<String>) -> Self {
        self.with(FieldTag::Detail, detail)
    }

    fn with_hint(self, hint: impl Into<String>) -> Self {
        self.with(FieldTag::Hint, hint)
    }

    fn with_position(self, pos: u32) -> Self {
        self.with(FieldTag::Position, pos.to_string())
    }

    fn with_where(self, where_: impl Into<String>) -> Self {
        self.with(FieldTag::Where, where_)
    }

    fn with_schema(self, v: impl Into<String>) -> Self {
        self.with(FieldTag::Schema, v)
    }

    fn with_table(self, v: impl Into<String>) -> Self {
        self.with(FieldTag::Table, v)
    }

    fn with_column(self, v: impl Into<String>) -> Self {
        self.with(FieldTag::Column, v)
    }

    fn with_constraint(self, v: impl Into<String>) -> Self {
        self.with(FieldTag::Constraint, v)
    }

    fn with_file(self, file: impl Into<String>) -> Self {
        self.with(FieldTag::File, file)
    }

    fn with_line(self, line: u32) -> Self {
        self.with(FieldTag::Line, line.to_string())
    }

    fn with_routine(self, routine: impl Into<String>) -> Self {
        self.with(FieldTag::Routine, routine)
    }

    // ----- Lookup ------------------------------------------------------------

    fn get(&self, tag: FieldTag) -> Option<&str> {
        self.fields()
            .iter()
            .find(|field| field.tag == tag)
            .map(|field| field.value.as_str())
    }

    /// Severity from the non-localized `V` field, falling back to `S`.
    /// `None` when neither holds a recognized spelling.
    fn severity(&self) -> Option<Severity> {
        self.get(FieldTag::SeverityRaw)
            .and_then(Severity::parse)
            .or_else(|| self.get(FieldTag::Severity).and_then(Severity::parse))
    }

    /// SQLSTATE.
    fn code(&self) -> Option<&str> {
        self.get(FieldTag::Code)
    }

    fn message(&self) -> Option<&str> {
        self.get(FieldTag::Message)
    }

    fn detail(&self) -> Option<&str> {
        self.get(FieldTag::Detail)
    }

    fn hint(&self) -> Option<&str> {
        self.get(FieldTag::Hint)
    }

    /// 1-based character offset into the query string.
    fn position(&self) -> Option<u32> {
        self.get(FieldTag::Position)?.parse().ok()
    }
}

// -----------------------------------------------------------------------------
// ----- Internal: Helpers -----------------------------------------------------

/// `S`, `V`, `C` and `M`, the fields every server sends.
pub(super) fn required_fields(
    severity: Severity,
    code: &str,
    message: impl Into<String>,
) -> Vec<ErrorField> {
    vec![
        ErrorField::new(FieldTag::Severity, severity.as_str()),
        ErrorField::new(FieldTag::SeverityRaw, severity.as_str()),
        ErrorField::new(FieldTag::Code, code),
        ErrorField::new(FieldTag::Message, message),
    ]
}

pub(super) fn decode_fields(cursor: &mut PayloadCursor) -> Result<Vec<ErrorField>, CodecError> {
    let mut fields = Vec::new();
    loop {
        let tag = cursor.read_u8()?;
        if tag == 0 {
            return Ok(fields);
        }
        let tag = FieldTag::try_from(tag)?;
        let value = cursor.read_cstr()?;
        fields.push(ErrorField { tag, value });
    }
}

pub(super) fn encode_fields(buf: &mut BytesMut, fields: &[ErrorField]) -> Result<(), CodecError> {
    for field in fields {
        buf.put_u8(field.tag.as_byte());
        put_cstr(buf, &field.value)?;
    }
    buf.put_u8(0);
    Ok(())
}

#[inline]
pub(super) fn fields_size(fields: &[ErrorField]) -> usize {
    fields.iter().map(|f| 1 + f.value.len() + 1).sum::<usize>() + 1
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InvalidValue;

    #[test]
    fn unknown_tag_aborts_decode() {
        let mut cursor = PayloadCursor::new(&b"SNOTICE\0!oops\0\0"[..]);
        let err = decode_fields(&mut cursor).unwrap_err();
        assert!(matches!(err, CodecError::InvalidValue(InvalidValue::FieldTag(b'!'))));
    }

    #[test]
    fn missing_terminator_underflows() {
        let mut cursor = PayloadCursor::new(&b"SERROR\0"[..]);
        let err = decode_fields(&mut cursor).unwrap_err();
        assert!(matches!(err, CodecError::Underflow { needed: 1, remaining: 0 }));

        let mut cursor = PayloadCursor::new(&b"SERR"[..]);
        let err = decode_fields(&mut cursor).unwrap_err();
        assert!(matches!(err, CodecError::Underflow { .. }));
    }

    #[test]
    fn interior_nul_in_value_is_rejected() {
        let fields = [ErrorField::new(FieldTag::Message, "a\0b")];
        let err = encode_fields(&mut BytesMut::new(), &fields).unwrap_err();
        assert!(matches!(err, CodecError::InvalidValue(InvalidValue::InteriorNul)));
    }

    #[test]
    fn size_matches_encoding() {
        let fields = required_fields(Severity::Warning, "01000", "careful");
        let mut buf = BytesMut::new();
        encode_fields(&mut buf, &fields).unwrap();
        assert_eq!(buf.len(), fields_size(&fields));
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
