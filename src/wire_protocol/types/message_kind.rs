//! v3 protocol Byte1 tags for backend-originated messages.

use crate::errors::{CodecError, InvalidValue};

// -----------------------------------------------------------------------------
// ----- MessageKind -----------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Authentication,           // 'R' (see AuthenticationKind)
    BackendKeyData,           // 'K'
    BindComplete,             // '2'
    CloseComplete,            // '3'
    CommandComplete,          // 'C'
    CopyData,                 // 'd'
    CopyDone,                 // 'c'
    CopyInResponse,           // 'G'
    CopyOutResponse,          // 'H'
    CopyBothResponse,         // 'W'
    DataRow,                  // 'D'
    EmptyQueryResponse,       // 'I'
    ErrorResponse,            // 'E'
    FunctionCallResponse,     // 'V'
    NegotiateProtocolVersion, // 'v'
    NoData,                   // 'n'
    NoticeResponse,           // 'N'
    NotificationResponse,     // 'A'
    ParameterDescription,     // 't'
    ParameterStatus,          // 'S'
    ParseComplete,            // '1'
    PortalSuspended,          // 's'
    ReadyForQuery,            // 'Z'
    RowDescription,           // 'T'
}

// -----------------------------------------------------------------------------
// ----- MessageKind: Static ---------------------------------------------------

impl MessageKind {
    pub const ALL: [MessageKind; 24] = [
        MessageKind::Authentication,
        MessageKind::BackendKeyData,
        MessageKind::BindComplete,
        MessageKind::CloseComplete,
        MessageKind::CommandComplete,
        MessageKind::CopyData,
        MessageKind::CopyDone,
        MessageKind::CopyInResponse,
        MessageKind::CopyOutResponse,
        MessageKind::CopyBothResponse,
        MessageKind::DataRow,
        MessageKind::EmptyQueryResponse,
        MessageKind::ErrorResponse,
        MessageKind::FunctionCallResponse,
        MessageKind::NegotiateProtocolVersion,
        MessageKind::NoData,
        MessageKind::NoticeResponse,
        MessageKind::NotificationResponse,
        MessageKind::ParameterDescription,
        MessageKind::ParameterStatus,
        MessageKind::ParseComplete,
        MessageKind::PortalSuspended,
        MessageKind::ReadyForQuery,
        MessageKind::RowDescription,
    ];
}

// -----------------------------------------------------------------------------
// ----- MessageKind: Public ---------------------------------------------------

impl MessageKind {
    pub fn as_byte(self) -> u8 {
        match self {
            MessageKind::Authentication => b'R',
            MessageKind::BackendKeyData => b'K',
            MessageKind::BindComplete => b'2',
            MessageKind::CloseComplete => b'3',
            MessageKind::CommandComplete => b'C',
            MessageKind::CopyData => b'd',
            MessageKind::CopyDone => b'c',
            MessageKind::CopyInResponse => b'G',
            MessageKind::CopyOutResponse => b'H',
            MessageKind::CopyBothResponse => b'W',
            MessageKind::DataRow => b'D',
            MessageKind::EmptyQueryResponse => b'I',
            MessageKind::ErrorResponse => b'E',
            MessageKind::FunctionCallResponse => b'V',
            MessageKind::NegotiateProtocolVersion => b'v',
            MessageKind::NoData => b'n',
            MessageKind::NoticeResponse => b'N',
            MessageKind::NotificationResponse => b'A',
            MessageKind::ParameterDescription => b't',
            MessageKind::ParameterStatus => b'S',
            MessageKind::ParseComplete => b'1',
            MessageKind::PortalSuspended => b's',
            MessageKind::ReadyForQuery => b'Z',
            MessageKind::RowDescription => b'T',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MessageKind::Authentication => "Authentication",
            MessageKind::BackendKeyData => "BackendKeyData",
            MessageKind::BindComplete => "BindComplete",
            MessageKind::CloseComplete => "CloseComplete",
            MessageKind::CommandComplete => "CommandComplete",
            MessageKind::CopyData => "CopyData",
            MessageKind::CopyDone => "CopyDone",
            MessageKind::CopyInResponse => "CopyInResponse",
            MessageKind::CopyOutResponse => "CopyOutResponse",
            MessageKind::CopyBothResponse => "CopyBothResponse",
            MessageKind::DataRow => "DataRow",
            MessageKind::EmptyQueryResponse => "EmptyQueryResponse",
            MessageKind::ErrorResponse => "ErrorResponse",
            MessageKind::FunctionCallResponse => "FunctionCallResponse",
            MessageKind::NegotiateProtocolVersion => "NegotiateProtocolVersion",
            MessageKind::NoData => "NoData",
            MessageKind::NoticeResponse => "NoticeResponse",
            MessageKind::NotificationResponse => "NotificationResponse",
            MessageKind::ParameterDescription => "ParameterDescription",
            MessageKind::ParameterStatus => "ParameterStatus",
            MessageKind::ParseComplete => "ParseComplete",
            MessageKind::PortalSuspended => "PortalSuspended",
            MessageKind::ReadyForQuery => "ReadyForQuery",
            MessageKind::RowDescription => "RowDescription",
        }
    }
}

impl TryFrom<u8> for MessageKind {
    type Error = CodecError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        let kind = match tag {
            b'R' => MessageKind::Authentication,
            b'K' => MessageKind::BackendKeyData,
            b'2' => MessageKind::BindComplete,
            b'3' => MessageKind::CloseComplete,
            b'C' => MessageKind::CommandComplete,
            b'd' => MessageKind::CopyData,
            b'c' => MessageKind::CopyDone,
            b'G' => MessageKind::CopyInResponse,
            b'H' => MessageKind::CopyOutResponse,
            b'W' => MessageKind::CopyBothResponse,
            b'D' => MessageKind::DataRow,
            b'I' => MessageKind::EmptyQueryResponse,
            b'E' => MessageKind::ErrorResponse,
            b'V' => MessageKind::FunctionCallResponse,
            b'v' => MessageKind::NegotiateProtocolVersion,
            b'n' => MessageKind::NoData,
            b'N' => MessageKind::NoticeResponse,
            b'A' => MessageKind::NotificationResponse,
            b't' => MessageKind::ParameterDescription,
            b'S' => MessageKind::ParameterStatus,
            b'1' => MessageKind::ParseComplete,
            b's' => MessageKind::PortalSuspended,
            b'Z' => MessageKind::ReadyForQuery,
            b'T' => MessageKind::RowDescription,
            other => return Err(InvalidValue::MessageKind(other).into()),
        };
        Ok(kind)
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
