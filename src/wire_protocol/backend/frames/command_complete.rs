//! Module: wire_protocol::backend::frames::command_complete
//!
//! Sent after each SQL command finishes.

use bytes::BytesMut;

use crate::errors::CodecError;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::MessageKind;
use crate::wire_protocol::utils::{PayloadCursor, put_cstr};

// -----------------------------------------------------------------------------
// ----- CommandCompleteFrame --------------------------------------------------

/// 'C': command tag such as `SELECT 5`, `INSERT 0 1` or `CREATE TABLE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCompleteFrame {
    pub tag: String,
}

// -----------------------------------------------------------------------------
// ----- CommandCompleteFrame: Public ------------------------------------------

impl CommandCompleteFrame {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// The command word(s), without the trailing counts.
    pub fn command(&self) -> &str {
        let counts = self
            .tag
            .split(' ')
            .rev()
            .take_while(|word| !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()))
            .map(|word| word.len() + 1)
            .sum::<usize>();
        &self.tag[..self.tag.len().saturating_sub(counts)]
    }

    /// Row count reported by INSERT, UPDATE, DELETE, SELECT, MERGE, MOVE,
    /// FETCH and COPY. `None` for tags without one.
    pub fn rows_affected(&self) -> Option<u64> {
        let (command, rows) = self.tag.rsplit_once(' ')?;
        let rows = rows.parse().ok()?;
        let command = command.split(' ').next()?;
        match command {
            "INSERT" | "UPDATE" | "DELETE" | "SELECT" | "MERGE" | "MOVE" | "FETCH" | "COPY" => {
                Some(rows)
            }
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for CommandCompleteFrame {
    const KIND: MessageKind = MessageKind::CommandComplete;

    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        Ok(Self {
            tag: cursor.read_cstr()?,
        })
    }

    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        put_cstr(buf, &self.tag)
    }

    fn body_size(&self) -> usize {
        self.tag.len() + 1
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
