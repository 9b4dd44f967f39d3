use std::{io, str};
use thiserror::Error;

// -----------------------------------------------------------------------------
// ----- CodecError ------------------------------------------------------------

/// Every way a backend message can fail to decode or encode.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Fewer bytes remain in the payload than a read requires.
    #[error("partial value: needed {needed} byte(s), {remaining} remaining")]
    Underflow { needed: usize, remaining: usize },

    /// A field exceeds its hard upper bound.
    #[error("value too large: {what} is {len} bytes, limit is {limit}")]
    Overflow {
        what: &'static str,
        len: usize,
        limit: usize,
    },

    #[error("invalid value: {0}")]
    InvalidValue(#[from] InvalidValue),

    /// The stream ended before the envelope promised.
    #[error("unexpected end of stream")]
    UnexpectedEndOfStream,

    #[error("{0} trailing byte(s) after payload")]
    TrailingBytes(usize),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] str::Utf8Error),

    #[error("io error: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => CodecError::UnexpectedEndOfStream,
            _ => CodecError::Io(e),
        }
    }
}

// -----------------------------------------------------------------------------
// ----- CodecError: Static ----------------------------------------------------

impl CodecError {
    #[inline]
    pub(crate) fn underflow(needed: usize, remaining: usize) -> Self {
        CodecError::Underflow { needed, remaining }
    }

    #[inline]
    pub(crate) fn overflow(what: &'static str, len: usize, limit: usize) -> Self {
        CodecError::Overflow { what, len, limit }
    }
}

// -----------------------------------------------------------------------------
// ----- InvalidValue ----------------------------------------------------------

/// Which closed set a wire value fell outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidValue {
    #[error("unrecognized message kind {0:#04X}")]
    MessageKind(u8),

    #[error("unrecognized authentication kind {0}")]
    AuthenticationKind(i32),

    #[error("unrecognized error field tag {0:#04X}")]
    FieldTag(u8),

    #[error("unrecognized format code {0}")]
    FormatCode(i16),

    #[error("unrecognized transaction status {0:#04X}")]
    TxStatus(u8),

    #[error("negative element count {0}")]
    Count(i32),

    #[error("negative value length {0}")]
    Length(i32),

    #[error("envelope length {0} is shorter than its own length field")]
    EnvelopeLength(u32),

    #[error("string contains an interior NUL byte")]
    InteriorNul,

    #[error("empty SASL mechanism name")]
    EmptySaslMechanism,

    #[error("unknown message {0:#04X} has no wire form")]
    UnknownMessage(u8),

    #[error("unknown authentication kind {0} has no wire form")]
    UnknownAuthentication(i32),
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_maps_to_unexpected_end_of_stream() {
        let err = CodecError::from(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(matches!(err, CodecError::UnexpectedEndOfStream));
    }

    #[test]
    fn other_io_errors_are_wrapped() {
        let err = CodecError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        match err {
            CodecError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn display_names_the_offending_value() {
        let err = CodecError::from(InvalidValue::FieldTag(b'!'));
        assert_eq!(err.to_string(), "invalid value: unrecognized error field tag 0x21");

        let err = CodecError::overflow("secret key", 300, 256);
        assert_eq!(
            err.to_string(),
            "value too large: secret key is 300 bytes, limit is 256"
        );
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
