use bytes::{Bytes, BytesMut};
use tracing::debug;

use crate::errors::{CodecError, InvalidValue};
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::backend::envelope::{Envelope, HEADER_LEN};
use crate::wire_protocol::backend::frames::*;
use crate::wire_protocol::types::MessageKind;

// -----------------------------------------------------------------------------
// ----- BackendMessage --------------------------------------------------------

/// Any backend-originated message. Variant names match `MessageKind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendMessage {
    Authentication(AuthenticationFrame),
    BackendKeyData(BackendKeyDataFrame),
    BindComplete(BindCompleteFrame),
    CloseComplete(CloseCompleteFrame),
    CommandComplete(CommandCompleteFrame),
    CopyData(CopyDataFrame),
    CopyDone(CopyDoneFrame),
    CopyInResponse(CopyInResponseFrame),
    CopyOutResponse(CopyOutResponseFrame),
    CopyBothResponse(CopyBothResponseFrame),
    DataRow(DataRowFrame),
    EmptyQueryResponse(EmptyQueryResponseFrame),
    ErrorResponse(ErrorResponseFrame),
    FunctionCallResponse(FunctionCallResponseFrame),
    NegotiateProtocolVersion(NegotiateProtocolVersionFrame),
    NoData(NoDataFrame),
    NoticeResponse(NoticeResponseFrame),
    NotificationResponse(NotificationResponseFrame),
    ParameterDescription(ParameterDescriptionFrame),
    ParameterStatus(ParameterStatusFrame),
    ParseComplete(ParseCompleteFrame),
    PortalSuspended(PortalSuspendedFrame),
    ReadyForQuery(ReadyForQueryFrame),
    RowDescription(RowDescriptionFrame),

    /// A kind tag outside the known set, kept with its raw payload.
    Unknown { kind: u8, payload: Bytes },
}

// -----------------------------------------------------------------------------
// ----- BackendMessage: Static ------------------------------------------------

impl BackendMessage {
    /// Decode one payload by its kind tag.
    ///
    /// An unrecognized tag is not an error: it comes back as `Unknown` so the
    /// caller can skip it. A recognized tag with a malformed payload is.
    pub fn decode(kind: u8, payload: impl Into<Bytes>) -> Result<Self, CodecError> {
        let payload = payload.into();
        match MessageKind::try_from(kind) {
            Ok(known) => Self::decode_known(known, payload),
            Err(_) => {
                debug!(
                    kind = %char::from(kind),
                    payload_len = payload.len(),
                    "unknown backend message kind"
                );
                Ok(BackendMessage::Unknown { kind, payload })
            }
        }
    }

    pub fn from_envelope(envelope: Envelope) -> Result<Self, CodecError> {
        Self::decode(envelope.kind, envelope.payload)
    }
}

// -----------------------------------------------------------------------------
// ----- BackendMessage: Public ------------------------------------------------

impl BackendMessage {
    /// `None` for `Unknown`.
    pub fn message_kind(&self) -> Option<MessageKind> {
        let kind = match self {
            BackendMessage::Authentication(_) => MessageKind::Authentication,
            BackendMessage::BackendKeyData(_) => MessageKind::BackendKeyData,
            BackendMessage::BindComplete(_) => MessageKind::BindComplete,
            BackendMessage::CloseComplete(_) => MessageKind::CloseComplete,
            BackendMessage::CommandComplete(_) => MessageKind::CommandComplete,
            BackendMessage::CopyData(_) => MessageKind::CopyData,
            BackendMessage::CopyDone(_) => MessageKind::CopyDone,
            BackendMessage::CopyInResponse(_) => MessageKind::CopyInResponse,
            BackendMessage::CopyOutResponse(_) => MessageKind::CopyOutResponse,
            BackendMessage::CopyBothResponse(_) => MessageKind::CopyBothResponse,
            BackendMessage::DataRow(_) => MessageKind::DataRow,
            BackendMessage::EmptyQueryResponse(_) => MessageKind::EmptyQueryResponse,
            BackendMessage::ErrorResponse(_) => MessageKind::ErrorResponse,
            BackendMessage::FunctionCallResponse(_) => MessageKind::FunctionCallResponse,
            BackendMessage::NegotiateProtocolVersion(_) => MessageKind::NegotiateProtocolVersion,
            BackendMessage::NoData(_) => MessageKind::NoData,
            BackendMessage::NoticeResponse(_) => MessageKind::NoticeResponse,
            BackendMessage::NotificationResponse(_) => MessageKind::NotificationResponse,
            BackendMessage::ParameterDescription(_) => MessageKind::ParameterDescription,
            BackendMessage::ParameterStatus(_) => MessageKind::ParameterStatus,
            BackendMessage::ParseComplete(_) => MessageKind::ParseComplete,
            BackendMessage::PortalSuspended(_) => MessageKind::PortalSuspended,
            BackendMessage::ReadyForQuery(_) => MessageKind::ReadyForQuery,
            BackendMessage::RowDescription(_) => MessageKind::RowDescription,
            BackendMessage::Unknown { .. } => return None,
        };
        Some(kind)
    }

    /// Raw kind tag, including for `Unknown`.
    pub fn kind(&self) -> u8 {
        match self {
            BackendMessage::Unknown { kind, .. } => *kind,
            known => known.message_kind().map_or(0, MessageKind::as_byte),
        }
    }

    pub fn name(&self) -> &'static str {
        self.message_kind().map_or("Unknown", MessageKind::name)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, BackendMessage::Unknown { .. })
    }

    /// Append the full wire form. `Unknown` cannot be encoded.
    pub fn encode(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        match self {
            BackendMessage::Authentication(frame) => frame.encode(buf),
            BackendMessage::BackendKeyData(frame) => frame.encode(buf),
            BackendMessage::BindComplete(frame) => frame.encode(buf),
            BackendMessage::CloseComplete(frame) => frame.encode(buf),
            BackendMessage::CommandComplete(frame) => frame.encode(buf),
            BackendMessage::CopyData(frame) => frame.encode(buf),
            BackendMessage::CopyDone(frame) => frame.encode(buf),
            BackendMessage::CopyInResponse(frame) => frame.encode(buf),
            BackendMessage::CopyOutResponse(frame) => frame.encode(buf),
            BackendMessage::CopyBothResponse(frame) => frame.encode(buf),
            BackendMessage::DataRow(frame) => frame.encode(buf),
            BackendMessage::EmptyQueryResponse(frame) => frame.encode(buf),
            BackendMessage::ErrorResponse(frame) => frame.encode(buf),
            BackendMessage::FunctionCallResponse(frame) => frame.encode(buf),
            BackendMessage::NegotiateProtocolVersion(frame) => frame.encode(buf),
            BackendMessage::NoData(frame) => frame.encode(buf),
            BackendMessage::NoticeResponse(frame) => frame.encode(buf),
            BackendMessage::NotificationResponse(frame) => frame.encode(buf),
            BackendMessage::ParameterDescription(frame) => frame.encode(buf),
            BackendMessage::ParameterStatus(frame) => frame.encode(buf),
            BackendMessage::ParseComplete(frame) => frame.encode(buf),
            BackendMessage::PortalSuspended(frame) => frame.encode(buf),
            BackendMessage::ReadyForQuery(frame) => frame.encode(buf),
            BackendMessage::RowDescription(frame) => frame.encode(buf),
            BackendMessage::Unknown { kind, .. } => {
                Err(InvalidValue::UnknownMessage(*kind).into())
            }
        }
    }

    /// Payload size, excluding the kind tag and length field.
    pub fn body_size(&self) -> usize {
        match self {
            BackendMessage::Authentication(frame) => frame.body_size(),
            BackendMessage::BackendKeyData(frame) => frame.body_size(),
            BackendMessage::BindComplete(frame) => frame.body_size(),
            BackendMessage::CloseComplete(frame) => frame.body_size(),
            BackendMessage::CommandComplete(frame) => frame.body_size(),
            BackendMessage::CopyData(frame) => frame.body_size(),
            BackendMessage::CopyDone(frame) => frame.body_size(),
            BackendMessage::CopyInResponse(frame) => frame.body_size(),
            BackendMessage::CopyOutResponse(frame) => frame.body_size(),
            BackendMessage::CopyBothResponse(frame) => frame.body_size(),
            BackendMessage::DataRow(frame) => frame.body_size(),
            BackendMessage::EmptyQueryResponse(frame) => frame.body_size(),
            BackendMessage::ErrorResponse(frame) => frame.body_size(),
            BackendMessage::FunctionCallResponse(frame) => frame.body_size(),
            BackendMessage::NegotiateProtocolVersion(frame) => frame.body_size(),
            BackendMessage::NoData(frame) => frame.body_size(),
            BackendMessage::NoticeResponse(frame) => frame.body_size(),
            BackendMessage::NotificationResponse(frame) => frame.body_size(),
            BackendMessage::ParameterDescription(frame) => frame.body_size(),
            BackendMessage::ParameterStatus(frame) => frame.body_size(),
            BackendMessage::ParseComplete(frame) => frame.body_size(),
            BackendMessage::PortalSuspended(frame) => frame.body_size(),
            BackendMessage::ReadyForQuery(frame) => frame.body_size(),
            BackendMessage::RowDescription(frame) => frame.body_size(),
            BackendMessage::Unknown { payload, .. } => payload.len(),
        }
    }

    /// Full wire form: kind, length, payload.
    pub fn to_bytes(&self) -> Result<Bytes, CodecError> {
        let mut buf = BytesMut::with_capacity(HEADER_LEN + self.body_size());
        self.encode(&mut buf)?;
        Ok(buf.freeze())
    }
}

// -----------------------------------------------------------------------------
// ----- BackendMessage: Private -----------------------------------------------

impl BackendMessage {
    fn decode_known(kind: MessageKind, payload: Bytes) -> Result<Self, CodecError> {
        use MessageKind as K;

        let message = match kind {
            K::Authentication => Self::Authentication(AuthenticationFrame::from_payload(payload)?),
            K::BackendKeyData => Self::BackendKeyData(BackendKeyDataFrame::from_payload(payload)?),
            K::BindComplete => Self::BindComplete(BindCompleteFrame::from_payload(payload)?),
            K::CloseComplete => Self::CloseComplete(CloseCompleteFrame::from_payload(payload)?),
            K::CommandComplete => {
                Self::CommandComplete(CommandCompleteFrame::from_payload(payload)?)
            }
            K::CopyData => Self::CopyData(CopyDataFrame::from_payload(payload)?),
            K::CopyDone => Self::CopyDone(CopyDoneFrame::from_payload(payload)?),
            K::CopyInResponse => Self::CopyInResponse(CopyInResponseFrame::from_payload(payload)?),
            K::CopyOutResponse => {
                Self::CopyOutResponse(CopyOutResponseFrame::from_payload(payload)?)
            }
            K::CopyBothResponse => {
                Self::CopyBothResponse(CopyBothResponseFrame::from_payload(payload)?)
            }
            K::DataRow => Self::DataRow(DataRowFrame::from_payload(payload)?),
            K::EmptyQueryResponse => {
                Self::EmptyQueryResponse(EmptyQueryResponseFrame::from_payload(payload)?)
            }
            K::ErrorResponse => Self::ErrorResponse(ErrorResponseFrame::from_payload(payload)?),
            K::FunctionCallResponse => {
                Self::FunctionCallResponse(FunctionCallResponseFrame::from_payload(payload)?)
            }
            K::NegotiateProtocolVersion => {
                let frame = NegotiateProtocolVersionFrame::from_payload(payload)?;
                Self::NegotiateProtocolVersion(frame)
            }
            K::NoData => Self::NoData(NoDataFrame::from_payload(payload)?),
            K::NoticeResponse => Self::NoticeResponse(NoticeResponseFrame::from_payload(payload)?),
            K::NotificationResponse => {
                Self::NotificationResponse(NotificationResponseFrame::from_payload(payload)?)
            }
            K::ParameterDescription => {
                Self::ParameterDescription(ParameterDescriptionFrame::from_payload(payload)?)
            }
            K::ParameterStatus => {
                Self::ParameterStatus(ParameterStatusFrame::from_payload(payload)?)
            }
            K::ParseComplete => Self::ParseComplete(ParseCompleteFrame::from_payload(payload)?),
            K::PortalSuspended => {
                Self::PortalSuspended(PortalSuspendedFrame::from_payload(payload)?)
            }
            K::ReadyForQuery => Self::ReadyForQuery(ReadyForQueryFrame::from_payload(payload)?),
            K::RowDescription => Self::RowDescription(RowDescriptionFrame::from_payload(payload)?),
        };
        Ok(message)
    }
}

// -----------------------------------------------------------------------------
// ----- From ------------------------------------------------------------------

impl From<AuthenticationFrame> for BackendMessage {
    fn from(frame: AuthenticationFrame) -> Self {
        BackendMessage::Authentication(frame)
    }
}

impl From<BackendKeyDataFrame> for BackendMessage {
    fn from(frame: BackendKeyDataFrame) -> Self {
        BackendMessage::BackendKeyData(frame)
    }
}

impl From<BindCompleteFrame> for BackendMessage {
    fn from(frame: BindCompleteFrame) -> Self {
        BackendMessage::BindComplete(frame)
    }
}

impl From<CloseCompleteFrame> for BackendMessage {
    fn from(frame: CloseCompleteFrame) -> Self {
        BackendMessage::CloseComplete(frame)
    }
}

impl From<CommandCompleteFrame> for BackendMessage {
    fn from(frame: CommandCompleteFrame) -> Self {
        BackendMessage::CommandComplete(frame)
    }
}

impl From<CopyDataFrame> for BackendMessage {
    fn from(frame: CopyDataFrame) -> Self {
        BackendMessage::CopyData(frame)
    }
}

impl From<CopyDoneFrame> for BackendMessage {
    fn from(frame: CopyDoneFrame) -> Self {
        BackendMessage::CopyDone(frame)
    }
}

impl From<CopyInResponseFrame> for BackendMessage {
    fn from(frame: CopyInResponseFrame) -> Self {
        BackendMessage::CopyInResponse(frame)
    }
}

impl From<CopyOutResponseFrame> for BackendMessage {
    fn from(frame: CopyOutResponseFrame) -> Self {
        BackendMessage::CopyOutResponse(frame)
    }
}

impl From<CopyBothResponseFrame> for BackendMessage {
    fn from(frame: CopyBothResponseFrame) -> Self {
        BackendMessage::CopyBothResponse(frame)
    }
}

impl From<DataRowFrame> for BackendMessage {
    fn from(frame: DataRowFrame) -> Self {
        BackendMessage::DataRow(frame)
    }
}

impl From<EmptyQueryResponseFrame> for BackendMessage {
    fn from(frame: EmptyQueryResponseFrame) -> Self {
        BackendMessage::EmptyQueryResponse(frame)
    }
}

impl From<ErrorResponseFrame> for BackendMessage {
    fn from(frame: ErrorResponseFrame) -> Self {
        BackendMessage::ErrorResponse(frame)
    }
}

impl From<FunctionCallResponseFrame> for BackendMessage {
    fn from(frame: FunctionCallResponseFrame) -> Self {
        BackendMessage::FunctionCallResponse(frame)
    }
}

impl From<NegotiateProtocolVersionFrame> for BackendMessage {
    fn from(frame: NegotiateProtocolVersionFrame) -> Self {
        BackendMessage::NegotiateProtocolVersion(frame)
    }
}

impl From<NoDataFrame> for BackendMessage {
    fn from(frame: NoDataFrame) -> Self {
        BackendMessage::NoData(frame)
    }
}

impl From<NoticeResponseFrame> for BackendMessage {
    fn from(frame: NoticeResponseFrame) -> Self {
        BackendMessage::NoticeResponse(frame)
    }
}

impl From<NotificationResponseFrame> for BackendMessage {
    fn from(frame: NotificationResponseFrame) -> Self {
        BackendMessage::NotificationResponse(frame)
    }
}

impl From<ParameterDescriptionFrame> for BackendMessage {
    fn from(frame: ParameterDescriptionFrame) -> Self {
        BackendMessage::ParameterDescription(frame)
    }
}

impl From<ParameterStatusFrame> for BackendMessage {
    fn from(frame: ParameterStatusFrame) -> Self {
        BackendMessage::ParameterStatus(frame)
    }
}

impl From<ParseCompleteFrame> for BackendMessage {
    fn from(frame: ParseCompleteFrame) -> Self {
        BackendMessage::ParseComplete(frame)
    }
}

impl From<PortalSuspendedFrame> for BackendMessage {
    fn from(frame: PortalSuspendedFrame) -> Self {
        BackendMessage::PortalSuspended(frame)
    }
}

impl From<ReadyForQueryFrame> for BackendMessage {
    fn from(frame: ReadyForQueryFrame) -> Self {
        BackendMessage::ReadyForQuery(frame)
    }
}

impl From<RowDescriptionFrame> for BackendMessage {
    fn from(frame: RowDescriptionFrame) -> Self {
        BackendMessage::RowDescription(frame)
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
