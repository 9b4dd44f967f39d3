//! One full decode or encode cycle against a byte stream.
//!
//! The free functions frame exactly one message per call and are meant for
//! streams with a single reader and a single writer. `BackendStream` keeps a
//! read buffer across calls for transports that deliver partial frames.

use bytes::BytesMut;
use std::io::{Read, Write};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

use crate::config::CodecConfig;
use crate::errors::CodecError;
use crate::wire_protocol::backend::BackendMessage;
use crate::wire_protocol::backend::decoder::BackendDecoder;
use crate::wire_protocol::backend::envelope::{read_envelope, read_envelope_async};

// -----------------------------------------------------------------------------
// ----- Sync ------------------------------------------------------------------

/// Read and decode one message with the default configuration.
pub fn read_message<R: Read>(reader: &mut R) -> Result<BackendMessage, CodecError> {
    read_message_with(reader, &CodecConfig::default())
}

pub fn read_message_with<R: Read>(
    reader: &mut R,
    config: &CodecConfig,
) -> Result<BackendMessage, CodecError> {
    let envelope = read_envelope(reader, config)?;
    BackendMessage::from_envelope(envelope)
}

/// Encode `message` and write it with a single `write_all`. Nothing is
/// written when encoding fails.
pub fn write_message<W: Write>(writer: &mut W, message: &BackendMessage) -> Result<(), CodecError> {
    let frame = message.to_bytes()?;
    writer.write_all(&frame)?;

    trace!(kind = %char::from(message.kind()), len = frame.len(), "wrote backend message");

    Ok(())
}

// -----------------------------------------------------------------------------
// ----- Async -----------------------------------------------------------------

pub async fn read_message_async<R>(reader: &mut R) -> Result<BackendMessage, CodecError>
where
    R: AsyncRead + Unpin,
{
    read_message_async_with(reader, &CodecConfig::default()).await
}

pub async fn read_message_async_with<R>(
    reader: &mut R,
    config: &CodecConfig,
) -> Result<BackendMessage, CodecError>
where
    R: AsyncRead + Unpin,
{
    let envelope = read_envelope_async(reader, config).await?;
    BackendMessage::from_envelope(envelope)
}

pub async fn write_message_async<W>(
    writer: &mut W,
    message: &BackendMessage,
) -> Result<(), CodecError>
where
    W: AsyncWrite + Unpin,
{
    let frame = message.to_bytes()?;
    writer.write_all(&frame).await?;

    trace!(kind = %char::from(message.kind()), len = frame.len(), "wrote backend message");

    Ok(())
}

// -----------------------------------------------------------------------------
// ----- BackendStream ---------------------------------------------------------

/// An async byte stream paired with a `BackendDecoder`.
#[derive(Debug)]
pub struct BackendStream<S> {
    stream: S,
    decoder: BackendDecoder,
}

impl<S> BackendStream<S> {
    pub fn new(stream: S) -> Self {
        Self::with_config(stream, &CodecConfig::default())
    }

    pub fn with_config(stream: S, config: &CodecConfig) -> Self {
        Self {
            stream,
            decoder: BackendDecoder::with_config(config),
        }
    }

    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Drop the wrapper. Bytes buffered but not yet decoded are lost.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

// -----------------------------------------------------------------------------
// ----- BackendStream: Public -------------------------------------------------

impl<S> BackendStream<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Next message, or `Ok(None)` once the peer closes between frames.
    ///
    /// A close in the middle of a frame is `UnexpectedEndOfStream`. A rejected
    /// length field fails this call and every later one without reading.
    pub async fn read_message(&mut self) -> Result<Option<BackendMessage>, CodecError> {
        loop {
            if let Some(message) = self.decoder.next_message()? {
                return Ok(Some(message));
            }

            let n = self.stream.read_buf(self.decoder.buffer_mut()).await?;
            if n == 0 {
                if self.decoder.is_empty() {
                    return Ok(None);
                }
                return Err(CodecError::UnexpectedEndOfStream);
            }
        }
    }

    pub async fn send(&mut self, message: &BackendMessage) -> Result<(), CodecError> {
        write_message_async(&mut self.stream, message).await
    }

    /// Encode several messages into one buffer and write them together.
    pub async fn send_all<'a, I>(&mut self, messages: I) -> Result<(), CodecError>
    where
        I: IntoIterator<Item = &'a BackendMessage>,
    {
        let mut buf = BytesMut::new();
        for message in messages {
            message.encode(&mut buf)?;
        }
        self.stream.write_all(&buf).await?;
        Ok(())
    }

    pub async fn flush(&mut self) -> Result<(), CodecError> {
        self.stream.flush().await?;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
