use bytes::{Buf, BytesMut};
use tracing::trace;

use crate::config::CodecConfig;
use crate::errors::CodecError;
use crate::wire_protocol::backend::BackendMessage;
use crate::wire_protocol::backend::envelope::HEADER_LEN;
use crate::wire_protocol::utils::{FrameHeader, peek_backend};

// -----------------------------------------------------------------------------
// ----- BackendDecoder --------------------------------------------------------

/// Buffers raw bytes from a backend and yields whole messages as they
/// complete.
///
/// Bytes arrive in whatever chunks the transport hands over; a frame split
/// across several `extend_from_slice` calls is only decoded once all of it
/// is buffered.
#[derive(Debug)]
pub struct BackendDecoder {
    buffer: BytesMut,
    max_payload_len: Option<usize>,
    failed: bool,
}

impl BackendDecoder {
    pub fn new() -> Self {
        Self::with_config(&CodecConfig::default())
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(cap),
            max_payload_len: None,
            failed: false,
        }
    }

    pub fn with_config(config: &CodecConfig) -> Self {
        Self {
            buffer: BytesMut::with_capacity(config.initial_buffer_capacity),
            max_payload_len: config.max_payload_len,
            failed: false,
        }
    }
}

impl Default for BackendDecoder {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// ----- BackendDecoder: Public Methods ----------------------------------------

impl BackendDecoder {
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Spare room for a transport to read into directly, e.g. with tokio's
    /// `read_buf`.
    pub fn buffer_mut(&mut self) -> &mut BytesMut {
        &mut self.buffer
    }

    /// Bytes buffered but not yet returned as messages.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// True once a length field was rejected. Nothing after it can be framed.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Return the next complete message if one is buffered.
    ///
    /// `Ok(None)` leaves the buffer untouched. A frame whose payload fails to
    /// decode is dropped, so the frames behind it stay reachable. A bad
    /// length field is left in place and every later call repeats its error:
    /// there is no frame boundary to skip to. The `Iterator` impl stops after
    /// yielding that error once.
    pub fn next_message(&mut self) -> Result<Option<BackendMessage>, CodecError> {
        let header = match self.next_header() {
            Ok(Some(header)) => header,
            Ok(None) => return Ok(None),
            Err(err) => {
                self.failed = true;
                return Err(err);
            }
        };

        let payload_len = header.payload_len();
        let mut frame = self.buffer.split_to(header.total_len);
        frame.advance(HEADER_LEN);
        let message = BackendMessage::decode(header.tag, frame.freeze())?;

        trace!(kind = %char::from(header.tag), payload_len, "decoded backend frame");

        Ok(Some(message))
    }
}

// -----------------------------------------------------------------------------
// ----- BackendDecoder: Utils -------------------------------------------------

impl BackendDecoder {
    fn next_header(&self) -> Result<Option<FrameHeader>, CodecError> {
        // Check the declared size first so a huge length never waits for
        // its body to arrive.
        self.check_pending_len()?;
        peek_backend(&self.buffer)
    }

    fn check_pending_len(&self) -> Result<(), CodecError> {
        let Some(limit) = self.max_payload_len else {
            return Ok(());
        };
        if self.buffer.len() < HEADER_LEN {
            return Ok(());
        }

        let len = u32::from_be_bytes([self.buffer[1], self.buffer[2], self.buffer[3], self.buffer[4]]);
        let payload_len = (len as usize).saturating_sub(4);
        if payload_len > limit {
            return Err(CodecError::overflow("payload", payload_len, limit));
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- Iterator --------------------------------------------------------------

impl Iterator for BackendDecoder {
    type Item = Result<BackendMessage, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.next_message().transpose()
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
