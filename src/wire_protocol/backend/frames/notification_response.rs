//! Module: wire_protocol::backend::frames::notification_response

use bytes::{BufMut, BytesMut};

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::{PayloadCursor, put_cstr};

/// 'A': a NOTIFY delivered on a channel this session LISTENs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationResponseFrame {
    /// Process id of the notifying backend.
    pub process_id: i32,
    pub channel: String,
    pub payload: String,
}

impl NotificationResponseFrame {
    pub fn new(process_id: i32, channel: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            process_id,
            channel: channel.into(),
            payload: payload.into(),
        }
    }
}

impl WireSerializable for NotificationResponseFrame {
    const KIND: MessageKind = MessageKind::NotificationResponse;

    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        let process_id = cursor.read_i32()?;
        let channel = cursor.read_cstr()?;
        let payload = cursor.read_cstr()?;

        Ok(Self {
            process_id,
            channel,
            payload,
        })
    }

    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        buf.put_i32(self.process_id);
        put_cstr(buf, &self.channel)?;
        put_cstr(buf, &self.payload)
    }

    fn body_size(&self) -> usize {
        4 + self.channel.len() + 1 + self.payload.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_channel_and_payload() {
        let payload = b"\0\0\x01\0jobs\0{\"id\":7}\0";
        let frame = NotificationResponseFrame::from_payload(&payload[..]).unwrap();
        assert_eq!(frame, NotificationResponseFrame::new(256, "jobs", "{\"id\":7}"));
        assert_eq!(&frame.to_bytes().unwrap()[5..], &payload[..]);
    }

    #[test]
    fn empty_payload_string_is_valid() {
        let frame = NotificationResponseFrame::from_payload(&b"\0\0\0\x01ch\0\0"[..]).unwrap();
        assert_eq!(frame.payload, "");
    }

    #[test]
    fn missing_payload_string_underflows() {
        let err = NotificationResponseFrame::from_payload(&b"\0\0\0\x01ch\0"[..]).unwrap_err();
        assert!(matches!(err, CodecError::Underflow { .. }));
    }
}
