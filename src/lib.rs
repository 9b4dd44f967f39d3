//! Binary codec for the backend-originated messages of the PostgreSQL v3
//! wire protocol.
//!
//! Bytes from a server become typed [`BackendMessage`] values, and those
//! values encode back to the exact bytes a server would send.

pub mod config;
pub mod errors;
pub mod wire_protocol;

pub use config::{CodecConfig, ConfigError};
pub use errors::{CodecError, InvalidValue};
pub use wire_protocol::backend::frames;
pub use wire_protocol::backend::{
    BackendDecoder, BackendMessage, BackendStream, Envelope, read_envelope, read_envelope_async,
    read_message, read_message_async, read_message_async_with, read_message_with, write_envelope,
    write_envelope_async, write_message, write_message_async,
};
pub use wire_protocol::types::{
    AuthenticationKind, FieldTag, FormatCode, MessageKind, Severity, TxStatus,
};
pub use wire_protocol::WireSerializable;
