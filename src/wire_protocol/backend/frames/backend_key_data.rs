//! Module: wire_protocol::backend::frames::backend_key_data
//!
//! Cancellation key sent once during startup.

use bytes::{BufMut, Bytes, BytesMut};

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::PayloadCursor;

// -----------------------------------------------------------------------------
// ----- Constants -------------------------------------------------------------

pub const MIN_SECRET_KEY_LEN: usize = 4;
pub const MAX_SECRET_KEY_LEN: usize = 256;

// -----------------------------------------------------------------------------
// ----- BackendKeyDataFrame ---------------------------------------------------

/// 'K': process id and cancellation secret for this session.
///
/// Protocol 3.0 servers send a 4-byte secret; 3.2 allows up to 256 bytes.
/// The secret is the rest of the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendKeyDataFrame {
    pub process_id: i32,
    pub secret_key: Bytes,
}

impl BackendKeyDataFrame {
    pub fn new(process_id: i32, secret_key: impl Into<Bytes>) -> Self {
        Self {
            process_id,
            secret_key: secret_key.into(),
        }
    }

    /// Legacy 4-byte secret as a big-endian i32, when the key has that length.
    pub fn legacy_secret(&self) -> Option<i32> {
        let key: [u8; 4] = self.secret_key.as_ref().try_into().ok()?;
        Some(i32::from_be_bytes(key))
    }
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for BackendKeyDataFrame {
    const KIND: MessageKind = MessageKind::BackendKeyData;

    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        let process_id = cursor.read_i32()?;
        check_secret_len(cursor.remaining())?;
        let secret_key = cursor.read_rest();

        Ok(Self {
            process_id,
            secret_key,
        })
    }

    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        check_secret_len(self.secret_key.len())?;
        buf.put_i32(self.process_id);
        buf.extend_from_slice(&self.secret_key);
        Ok(())
    }

    fn body_size(&self) -> usize {
        4 + self.secret_key.len()
    }
}

fn check_secret_len(len: usize) -> Result<(), CodecError> {
    if len < MIN_SECRET_KEY_LEN {
        return Err(CodecError::underflow(MIN_SECRET_KEY_LEN, len));
    }
    if len > MAX_SECRET_KEY_LEN {
        return Err(CodecError::overflow("secret key", len, MAX_SECRET_KEY_LEN));
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
