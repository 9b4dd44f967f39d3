//! Module: wire_protocol::backend::frames::data_row
//!
//! `count:i16` followed by `len:i32 bytes` per column, with `len = -1`
//! marking NULL.

use bytes::{Bytes, BytesMut};

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::{PayloadCursor, put_count, put_nullable_bytes};

// -----------------------------------------------------------------------------
// ----- DataRowFrame ----------------------------------------------------------

/// 'D': one result row. `None` is SQL NULL; `Some` of an empty buffer is a
/// present, zero-length value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataRowFrame {
    pub columns: Vec<Option<Bytes>>,
}

impl DataRowFrame {
    pub fn new(columns: Vec<Option<Bytes>>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column value at `idx`. `None` both for NULL and out of range.
    pub fn get(&self, idx: usize) -> Option<&[u8]> {
        self.columns.get(idx)?.as_deref()
    }

    pub fn is_null(&self, idx: usize) -> bool {
        matches!(self.columns.get(idx), Some(None))
    }
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for DataRowFrame {
    const KIND: MessageKind = MessageKind::DataRow;

    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        let count = cursor.read_count()?;
        // Every column carries at least its 4-byte length.
        cursor.ensure(count * 4)?;

        let mut columns = Vec::with_capacity(count);
        for _ in 0..count {
            columns.push(cursor.read_nullable_bytes()?);
        }

        Ok(Self { columns })
    }

    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        put_count(buf, self.columns.len(), "columns")?;
        for column in &self.columns {
            put_nullable_bytes(buf, column.as_deref())?;
        }
        Ok(())
    }

    fn body_size(&self) -> usize {
        2 + self
            .columns
            .iter()
            .map(|c| 4 + c.as_ref().map_or(0, Bytes::len))
            .sum::<usize>()
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InvalidValue;

    #[test]
    fn null_and_empty_are_distinct() {
        let payload = [
            0, 3, // count
            0xFF, 0xFF, 0xFF, 0xFF, // NULL
            0, 0, 0, 0, // empty
            0, 0, 0, 2, b'h', b'i',
        ];
        let frame = DataRowFrame::from_payload(payload.to_vec()).unwrap();
        assert_eq!(
            frame.columns,
            vec![None, Some(Bytes::new()), Some(Bytes::from_static(b"hi"))]
        );
        assert!(frame.is_null(0));
        assert!(!frame.is_null(1));
        assert_eq!(frame.get(1), Some(&b""[..]));
        assert_eq!(frame.get(2), Some(&b"hi"[..]));

        assert_eq!(&frame.to_bytes().unwrap()[5..], &payload);
    }

    #[test]
    fn column_shorter_than_declared_underflows() {
        let payload = [0, 1, 0, 0, 0, 5, b'a', b'b'];
        let err = DataRowFrame::from_payload(payload.to_vec()).unwrap_err();
        assert!(matches!(err, CodecError::Underflow { .. }));
    }

    #[test]
    fn missing_columns_underflow() {
        let payload = [0, 2, 0, 0, 0, 0];
        let err = DataRowFrame::from_payload(payload.to_vec()).unwrap_err();
        assert!(matches!(err, CodecError::Underflow { needed: 8, remaining: 4 }));
    }

    #[test]
    fn negative_length_other_than_null_is_invalid() {
        let payload = [0, 1, 0xFF, 0xFF, 0xFF, 0xFD];
        let err = DataRowFrame::from_payload(payload.to_vec()).unwrap_err();
        assert!(matches!(err, CodecError::InvalidValue(InvalidValue::Length(-3))));
    }

    #[test]
    fn zero_columns() {
        let frame = DataRowFrame::from_payload(vec![0, 0]).unwrap();
        assert!(frame.is_empty());
        assert_eq!(&frame.to_bytes().unwrap()[..], &[b'D', 0, 0, 0, 6, 0, 0]);
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
