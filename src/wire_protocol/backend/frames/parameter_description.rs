//! Module: wire_protocol::backend::frames::parameter_description
//!
//! Reply to Describe on a statement.

use bytes::{BufMut, BytesMut};

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::{PayloadCursor, put_count};

// -----------------------------------------------------------------------------
// ----- ParameterDescriptionFrame ---------------------------------------------

/// 't': type OIDs of a prepared statement's parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterDescriptionFrame {
    pub type_oids: Vec<u32>,
}

impl ParameterDescriptionFrame {
    pub fn new(type_oids: Vec<u32>) -> Self {
        Self { type_oids }
    }
}

impl WireSerializable for ParameterDescriptionFrame {
    const KIND: MessageKind = MessageKind::ParameterDescription;

    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        let count = cursor.read_count()?;
        cursor.ensure(count * 4)?;

        let mut type_oids = Vec::with_capacity(count);
        for _ in 0..count {
            type_oids.push(cursor.read_u32()?);
        }

        Ok(Self { type_oids })
    }

    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        put_count(buf, self.type_oids.len(), "parameters")?;
        for oid in &self.type_oids {
            buf.put_u32(*oid);
        }
        Ok(())
    }

    fn body_size(&self) -> usize {
        2 + 4 * self.type_oids.len()
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
