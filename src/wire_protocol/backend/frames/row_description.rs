//! Module: wire_protocol::backend::frames::row_description
//!
//! Column metadata for the rows that follow. Each field is a name plus
//! 18 bytes of fixed-width metadata.

use bytes::{BufMut, BytesMut};

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::{FormatCode, MessageKind};
use crate::wire_protocol::utils::{PayloadCursor, put_count, put_cstr};

// -----------------------------------------------------------------------------
// ----- FieldDescription ------------------------------------------------------

/// One result column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescription {
    pub name: String,
    /// Source table OID, or 0.
    pub table_oid: u32,
    /// Source column attribute number, or 0.
    pub column_attr: i16,
    pub type_oid: u32,
    /// Negative for variable-width types.
    pub type_size: i16,
    pub type_modifier: i32,
    pub format: FormatCode,
}

impl FieldDescription {
    /// Fixed-width tail after the name.
    const FIXED_LEN: usize = 4 + 2 + 4 + 2 + 4 + 2;

    pub fn new(name: impl Into<String>, type_oid: u32) -> Self {
        Self {
            name: name.into(),
            table_oid: 0,
            column_attr: 0,
            type_oid,
            type_size: -1,
            type_modifier: -1,
            format: FormatCode::Text,
        }
    }

    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        let name = cursor.read_cstr()?;
        cursor.ensure(Self::FIXED_LEN)?;

        Ok(Self {
            name,
            table_oid: cursor.read_u32()?,
            column_attr: cursor.read_i16()?,
            type_oid: cursor.read_u32()?,
            type_size: cursor.read_i16()?,
            type_modifier: cursor.read_i32()?,
            format: FormatCode::try_from(cursor.read_i16()?)?,
        })
    }

    fn encode(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        put_cstr(buf, &self.name)?;
        buf.put_u32(self.table_oid);
        buf.put_i16(self.column_attr);
        buf.put_u32(self.type_oid);
        buf.put_i16(self.type_size);
        buf.put_i32(self.type_modifier);
        buf.put_i16(self.format.as_i16());
        Ok(())
    }

    fn size(&self) -> usize {
        self.name.len() + 1 + Self::FIXED_LEN
    }
}

// -----------------------------------------------------------------------------
// ----- RowDescriptionFrame ---------------------------------------------------

/// 'T': shape of the rows that follow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowDescriptionFrame {
    pub fields: Vec<FieldDescription>,
}

impl RowDescriptionFrame {
    pub fn new(fields: Vec<FieldDescription>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescription> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl WireSerializable for RowDescriptionFrame {
    const KIND: MessageKind = MessageKind::RowDescription;

    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        let count = cursor.read_count()?;
        // Smallest field: empty name plus the fixed tail.
        cursor.ensure(count * (1 + FieldDescription::FIXED_LEN))?;

        let mut fields = Vec::with_capacity(count);
        for _ in 0..count {
            fields.push(FieldDescription::decode(cursor)?);
        }

        Ok(Self { fields })
    }

    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        put_count(buf, self.fields.len(), "fields")?;
        for field in &self.fields {
            field.encode(buf)?;
        }
        Ok(())
    }

    fn body_size(&self) -> usize {
        2 + self.fields.iter().map(FieldDescription::size).sum::<usize>()
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
