pub mod authentication_kind;
pub mod field_tag;
pub mod format_code;
pub mod message_kind;
pub mod severity;
pub mod tx_status;

pub use authentication_kind::AuthenticationKind;
pub use field_tag::FieldTag;
pub use format_code::FormatCode;
pub use message_kind::MessageKind;
pub use severity::Severity;
pub use tx_status::TxStatus;
