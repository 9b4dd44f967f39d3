//! Module: wire_protocol::backend::frames::parameter_status

use bytes::BytesMut;

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::{PayloadCursor, put_cstr};

/// 'S': a run-time parameter's current value, e.g. `TimeZone` or
/// `server_version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterStatusFrame {
    pub name: String,
    pub value: String,
}

impl ParameterStatusFrame {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl WireSerializable for ParameterStatusFrame {
    const KIND: MessageKind = MessageKind::ParameterStatus;

    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        let name = cursor.read_cstr()?;
        let value = cursor.read_cstr()?;
        Ok(Self { name, value })
    }

    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        put_cstr(buf, &self.name)?;
        put_cstr(buf, &self.value)
    }

    fn body_size(&self) -> usize {
        self.name.len() + 1 + self.value.len() + 1
    }
}
