//! Kind tag + big-endian length framing around every backend payload.
//!
//! Layout: `kind:u8 length:u32 payload:[u8; length - 4]`. The length counts
//! itself but not the kind tag.

use bytes::{BufMut, Bytes, BytesMut};
use std::io::{Read, Write};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

use crate::config::CodecConfig;
use crate::errors::{CodecError, InvalidValue};

// -----------------------------------------------------------------------------
// ----- Constants -------------------------------------------------------------

pub const HEADER_LEN: usize = 5;
const LENGTH_FIELD_LEN: u32 = 4;

// -----------------------------------------------------------------------------
// ----- Envelope --------------------------------------------------------------

/// One raw frame: the kind tag and the payload it wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub kind: u8,
    pub payload: Bytes,
}

impl Envelope {
    pub fn new(kind: u8, payload: impl Into<Bytes>) -> Self {
        Self {
            kind,
            payload: payload.into(),
        }
    }

    /// Full wire form, header included.
    pub fn to_bytes(&self) -> Result<Bytes, CodecError> {
        let mut buf = BytesMut::with_capacity(HEADER_LEN + self.payload.len());
        put_envelope(&mut buf, self.kind, |body| {
            body.extend_from_slice(&self.payload);
            Ok(())
        })?;
        Ok(buf.freeze())
    }
}

// -----------------------------------------------------------------------------
// ----- put_envelope ----------------------------------------------------------

/// Append `kind`, a length placeholder and whatever `write_body` produces,
/// then backfill the length. On error `buf` is restored to its prior length.
pub fn put_envelope<F>(buf: &mut BytesMut, kind: u8, write_body: F) -> Result<(), CodecError>
where
    F: FnOnce(&mut BytesMut) -> Result<(), CodecError>,
{
    let base = buf.len();
    buf.put_u8(kind);
    buf.put_u32(0);

    let result = write_body(buf).and_then(|()| {
        let body_len = buf.len() - base - HEADER_LEN;
        frame_len(body_len)
    });

    match result {
        Ok(len) => {
            buf[base + 1..base + HEADER_LEN].copy_from_slice(&len.to_be_bytes());
            Ok(())
        }
        Err(e) => {
            buf.truncate(base);
            Err(e)
        }
    }
}

// -----------------------------------------------------------------------------
// ----- Sync I/O --------------------------------------------------------------

/// Read one frame from a blocking stream.
pub fn read_envelope<R: Read>(reader: &mut R, config: &CodecConfig) -> Result<Envelope, CodecError> {
    let mut header = [0u8; HEADER_LEN];
    reader.read_exact(&mut header)?;

    let (kind, payload_len) = parse_header(&header, config)?;

    let mut payload = Vec::new();
    reader
        .take(payload_len as u64)
        .read_to_end(&mut payload)?;
    if payload.len() != payload_len {
        return Err(CodecError::UnexpectedEndOfStream);
    }

    trace!(kind = %char::from(kind), payload_len, "read backend frame");

    Ok(Envelope::new(kind, payload))
}

/// Write one frame as a single buffered `write_all`.
pub fn write_envelope<W: Write>(writer: &mut W, kind: u8, payload: &[u8]) -> Result<(), CodecError> {
    let frame = Envelope::new(kind, Bytes::copy_from_slice(payload)).to_bytes()?;
    writer.write_all(&frame)?;

    trace!(kind = %char::from(kind), payload_len = payload.len(), "wrote backend frame");

    Ok(())
}

// -----------------------------------------------------------------------------
// ----- Async I/O -------------------------------------------------------------

pub async fn read_envelope_async<R>(
    reader: &mut R,
    config: &CodecConfig,
) -> Result<Envelope, CodecError>
where
    R: AsyncRead + Unpin,
{
    let mut header = [0u8; HEADER_LEN];
    reader.read_exact(&mut header).await?;

    let (kind, payload_len) = parse_header(&header, config)?;

    let mut payload = Vec::new();
    reader
        .take(payload_len as u64)
        .read_to_end(&mut payload)
        .await?;
    if payload.len() != payload_len {
        return Err(CodecError::UnexpectedEndOfStream);
    }

    trace!(kind = %char::from(kind), payload_len, "read backend frame");

    Ok(Envelope::new(kind, payload))
}

pub async fn write_envelope_async<W>(
    writer: &mut W,
    kind: u8,
    payload: &[u8],
) -> Result<(), CodecError>
where
    W: AsyncWrite + Unpin,
{
    let frame = Envelope::new(kind, Bytes::copy_from_slice(payload)).to_bytes()?;
    writer.write_all(&frame).await?;

    trace!(kind = %char::from(kind), payload_len = payload.len(), "wrote backend frame");

    Ok(())
}

// -----------------------------------------------------------------------------
// ----- Internal: Helpers -----------------------------------------------------

fn parse_header(header: &[u8; HEADER_LEN], config: &CodecConfig) -> Result<(u8, usize), CodecError> {
    let kind = header[0];
    let len = u32::from_be_bytes([header[1], header[2], header[3], header[4]]);
    if len < LENGTH_FIELD_LEN {
        return Err(InvalidValue::EnvelopeLength(len).into());
    }

    let payload_len = (len - LENGTH_FIELD_LEN) as usize;
    config.check_payload_len(payload_len)?;

    Ok((kind, payload_len))
}

#[inline]
fn frame_len(body_len: usize) -> Result<u32, CodecError> {
    let limit = (u32::MAX - LENGTH_FIELD_LEN) as usize;
    if body_len > limit {
        return Err(CodecError::overflow("payload", body_len, limit));
    }
    Ok(body_len as u32 + LENGTH_FIELD_LEN)
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn write_then_read_reproduces_kind_and_payload() {
        let mut wire = Vec::new();
        write_envelope(&mut wire, b'C', b"SELECT 1\0").unwrap();
        assert_eq!(&wire[..5], &[b'C', 0, 0, 0, 13]);

        let env = read_envelope(&mut Cursor::new(wire), &CodecConfig::default()).unwrap();
        assert_eq!(env.kind, b'C');
        assert_eq!(&env.payload[..], b"SELECT 1\0");
    }

    #[test]
    fn empty_payload_has_length_four() {
        let bytes = Envelope::new(b'n', Bytes::new()).to_bytes().unwrap();
        assert_eq!(&bytes[..], &[b'n', 0, 0, 0, 4]);
    }

    #[test]
    fn every_truncation_is_unexpected_end_of_stream() {
        let mut wire = Vec::new();
        write_envelope(&mut wire, b'S', b"TimeZone\0UTC\0").unwrap();

        for cut in 0..wire.len() {
            let mut reader = Cursor::new(&wire[..cut]);
            let err = read_envelope(&mut reader, &CodecConfig::default()).unwrap_err();
            assert!(
                matches!(err, CodecError::UnexpectedEndOfStream),
                "cut at {cut}: {err:?}"
            );
        }
    }

    #[test]
    fn length_below_four_is_rejected() {
        let wire = [b'Z', 0, 0, 0, 3];
        let err = read_envelope(&mut Cursor::new(wire), &CodecConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidValue(InvalidValue::EnvelopeLength(3))
        ));
    }

    #[test]
    fn configured_limit_rejects_before_reading_payload() {
        let config = CodecConfig::default().with_max_payload_len(8);
        let mut wire = Vec::new();
        write_envelope(&mut wire, b'd', &[0u8; 9]).unwrap();

        let err = read_envelope(&mut Cursor::new(wire), &config).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Overflow {
                len: 9,
                limit: 8,
                ..
            }
        ));
    }

    #[test]
    fn failed_body_leaves_buffer_untouched() {
        let mut buf = BytesMut::from(&b"keep"[..]);
        let err = put_envelope(&mut buf, b'E', |body| {
            body.put_u8(b'S');
            Err(InvalidValue::InteriorNul.into())
        })
        .unwrap_err();

        assert!(matches!(err, CodecError::InvalidValue(InvalidValue::InteriorNul)));
        assert_eq!(&buf[..], b"keep");
    }

    #[tokio::test]
    async fn async_round_trip() {
        let mut wire = Vec::new();
        write_envelope_async(&mut wire, b'Z', b"I").await.unwrap();

        let mut reader = &wire[..];
        let env = read_envelope_async(&mut reader, &CodecConfig::default())
            .await
            .unwrap();
        assert_eq!(env, Envelope::new(b'Z', &b"I"[..]));
    }

    #[tokio::test]
    async fn async_truncated_payload() {
        let wire = [b'Z', 0, 0, 0, 5];
        let mut reader = &wire[..];
        let err = read_envelope_async(&mut reader, &CodecConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CodecError::UnexpectedEndOfStream));
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
