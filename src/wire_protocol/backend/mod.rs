pub mod decoder;
pub mod envelope;
pub mod frames;
pub mod protocol_message;
pub mod stream;

pub use decoder::BackendDecoder;
pub use envelope::{
    Envelope, read_envelope, read_envelope_async, write_envelope, write_envelope_async,
};
pub use protocol_message::BackendMessage;
pub use stream::{
    BackendStream, read_message, read_message_async, read_message_async_with, read_message_with,
    write_message, write_message_async,
};
