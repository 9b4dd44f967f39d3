use bytes::{Bytes, BytesMut};

use crate::errors::CodecError;
use crate::wire_protocol::backend::envelope::put_envelope;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::PayloadCursor;

/// A backend message shape with a fixed kind tag.
pub trait WireSerializable: Sized {
    /// Kind tag written in front of the payload.
    const KIND: MessageKind;

    /// Decode from the payload. Implementations read only what the shape
    /// needs; `from_payload` rejects anything left over.
    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError>;

    /// Append the payload (no kind tag, no length prefix).
    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError>;

    /// Size of the body of the message.
    fn body_size(&self) -> usize;

    /// Decode a complete payload, failing on trailing bytes.
    fn from_payload(payload: impl Into<Bytes>) -> Result<Self, CodecError> {
        let mut cursor = PayloadCursor::new(payload);
        let frame = Self::decode(&mut cursor)?;
        cursor.finish()?;
        Ok(frame)
    }

    /// Append the full envelope: kind, length, payload.
    fn encode(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        put_envelope(buf, Self::KIND.as_byte(), |body| self.encode_body(body))
    }

    /// Serialize the object into bytes for wire transmission.
    fn to_bytes(&self) -> Result<Bytes, CodecError> {
        let mut buf = BytesMut::with_capacity(5 + self.body_size());
        self.encode(&mut buf)?;
        Ok(buf.freeze())
    }
}
