//! Module: wire_protocol::backend::frames::copy_response
//!
//! Body layout shared by CopyInResponse, CopyOutResponse and
//! CopyBothResponse:
//!
//! `format:i8 count:i16 column_format:i16 * count`

use bytes::{BufMut, BytesMut};
use smallvec::SmallVec;

use crate::errors::CodecError;
use crate::wire_protocol::types::FormatCode;
use crate::wire_protocol::utils::{PayloadCursor, put_count};

pub type ColumnFormats = SmallVec<[FormatCode; 8]>;

// -----------------------------------------------------------------------------
// ----- Formats ---------------------------------------------------------------

pub(super) fn decode_formats(
    cursor: &mut PayloadCursor,
) -> Result<(FormatCode, ColumnFormats), CodecError> {
    let format = FormatCode::from_i8(cursor.read_i8()?)?;

    let count = cursor.read_count()?;
    cursor.ensure(count * 2)?;

    let mut column_formats = ColumnFormats::with_capacity(count);
    for _ in 0..count {
        column_formats.push(FormatCode::try_from(cursor.read_i16()?)?);
    }

    Ok((format, column_formats))
}

pub(super) fn encode_formats(
    buf: &mut BytesMut,
    format: FormatCode,
    column_formats: &[FormatCode],
) -> Result<(), CodecError> {
    buf.put_i8(format.as_i8());
    put_count(buf, column_formats.len(), "column formats")?;
    for column in column_formats {
        buf.put_i16(column.as_i16());
    }
    Ok(())
}

#[inline]
pub(super) fn formats_size(column_formats: &[FormatCode]) -> usize {
    1 + 2 + 2 * column_formats.len()
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
