pub mod backend;
pub mod types;
pub mod utils;
pub mod wire_serializable;

pub use backend::BackendMessage;
pub use wire_serializable::WireSerializable;
