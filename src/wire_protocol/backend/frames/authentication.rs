//! Module: wire_protocol::backend::frames::authentication
//!
//! Every 'R' message shares one kind tag. The payload starts with an i32
//! sub-kind that selects the body layout:
//!
//! - empty for Ok, KerberosV5, CleartextPassword, Gss and Sspi
//! - a 4-byte salt for Md5Password
//! - opaque bytes for GssContinue, SaslContinue and SaslFinal
//! - a run of NUL-terminated mechanism names for Sasl, usually closed by an
//!   empty name; a list that simply runs to the end of the payload is accepted
//!
//! Sub-kinds outside that set decode to `Unknown` so callers can skip them;
//! an `Unknown` value cannot be encoded.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

use crate::errors::{CodecError, InvalidValue};
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::types::{AuthenticationKind, MessageKind};
use crate::wire_protocol::utils::{PayloadCursor, put_cstr};

// -----------------------------------------------------------------------------
// ----- AuthenticationFrame ---------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationFrame {
    Ok,
    KerberosV5,
    CleartextPassword,
    Md5Password { salt: [u8; 4] },
    Gss,
    GssContinue { data: Bytes },
    Sspi,
    /// `terminated` records whether the list closed with an empty name.
    Sasl {
        mechanisms: Vec<String>,
        terminated: bool,
    },
    SaslContinue { data: Bytes },
    SaslFinal { data: Bytes },
    Unknown { kind: i32, data: Bytes },
}

// -----------------------------------------------------------------------------
// ----- AuthenticationFrame: Static -------------------------------------------

impl AuthenticationFrame {
    /// A SASL offer in the form servers send it, closed by an empty name.
    pub fn sasl<I, S>(mechanisms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AuthenticationFrame::Sasl {
            mechanisms: mechanisms.into_iter().map(Into::into).collect(),
            terminated: true,
        }
    }
}

// -----------------------------------------------------------------------------
// ----- AuthenticationFrame: Public -------------------------------------------

impl AuthenticationFrame {
    /// `None` for `Unknown`.
    pub fn kind(&self) -> Option<AuthenticationKind> {
        let kind = match self {
            AuthenticationFrame::Ok => AuthenticationKind::Ok,
            AuthenticationFrame::KerberosV5 => AuthenticationKind::KerberosV5,
            AuthenticationFrame::CleartextPassword => AuthenticationKind::CleartextPassword,
            AuthenticationFrame::Md5Password { .. } => AuthenticationKind::Md5Password,
            AuthenticationFrame::Gss => AuthenticationKind::Gss,
            AuthenticationFrame::GssContinue { .. } => AuthenticationKind::GssContinue,
            AuthenticationFrame::Sspi => AuthenticationKind::Sspi,
            AuthenticationFrame::Sasl { .. } => AuthenticationKind::Sasl,
            AuthenticationFrame::SaslContinue { .. } => AuthenticationKind::SaslContinue,
            AuthenticationFrame::SaslFinal { .. } => AuthenticationKind::SaslFinal,
            AuthenticationFrame::Unknown { .. } => return None,
        };
        Some(kind)
    }

    /// The raw sub-kind as it appears on the wire.
    pub fn raw_kind(&self) -> i32 {
        match self {
            AuthenticationFrame::Unknown { kind, .. } => *kind,
            known => known.kind().map_or(-1, AuthenticationKind::as_i32),
        }
    }
}

// -----------------------------------------------------------------------------
// ----- AuthenticationFrame: Private ------------------------------------------

impl AuthenticationFrame {
    fn decode_body(
        kind: AuthenticationKind,
        cursor: &mut PayloadCursor,
    ) -> Result<Self, CodecError> {
        use AuthenticationKind as K;

        let frame = match kind {
            K::Ok => AuthenticationFrame::Ok,
            K::KerberosV5 => AuthenticationFrame::KerberosV5,
            K::CleartextPassword => AuthenticationFrame::CleartextPassword,
            K::Md5Password => AuthenticationFrame::Md5Password {
                salt: cursor.read_array::<4>()?,
            },
            K::Gss => AuthenticationFrame::Gss,
            K::GssContinue => AuthenticationFrame::GssContinue {
                data: cursor.read_rest(),
            },
            K::Sspi => AuthenticationFrame::Sspi,
            K::Sasl => {
                let (mechanisms, terminated) = read_mechanisms(cursor)?;
                AuthenticationFrame::Sasl {
                    mechanisms,
                    terminated,
                }
            }
            K::SaslContinue => AuthenticationFrame::SaslContinue {
                data: cursor.read_rest(),
            },
            K::SaslFinal => AuthenticationFrame::SaslFinal {
                data: cursor.read_rest(),
            },
        };
        Ok(frame)
    }
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for AuthenticationFrame {
    const KIND: MessageKind = MessageKind::Authentication;

    fn decode(cursor: &mut PayloadCursor) -> Result<Self, CodecError> {
        let code = cursor.read_i32()?;

        match AuthenticationKind::try_from(code) {
            Ok(kind) => Self::decode_body(kind, cursor),
            Err(_) => {
                debug!(auth_kind = code, "unknown authentication kind");
                Ok(AuthenticationFrame::Unknown {
                    kind: code,
                    data: cursor.read_rest(),
                })
            }
        }
    }

    fn encode_body(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        let kind = match self.kind() {
            Some(kind) => kind,
            None => return Err(InvalidValue::UnknownAuthentication(self.raw_kind()).into()),
        };

        buf.put_i32(kind.as_i32());

        match self {
            AuthenticationFrame::Md5Password { salt } => buf.extend_from_slice(salt),
            AuthenticationFrame::GssContinue { data }
            | AuthenticationFrame::SaslContinue { data }
            | AuthenticationFrame::SaslFinal { data } => buf.extend_from_slice(data),
            AuthenticationFrame::Sasl {
                mechanisms,
                terminated,
            } => {
                for mechanism in mechanisms {
                    // An empty name would read back as the list terminator.
                    if mechanism.is_empty() {
                        return Err(InvalidValue::EmptySaslMechanism.into());
                    }
                    put_cstr(buf, mechanism)?;
                }
                if *terminated {
                    buf.put_u8(0);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn body_size(&self) -> usize {
        let body = match self {
            AuthenticationFrame::Md5Password { .. } => 4,
            AuthenticationFrame::GssContinue { data }
            | AuthenticationFrame::SaslContinue { data }
            | AuthenticationFrame::SaslFinal { data }
            | AuthenticationFrame::Unknown { data, .. } => data.len(),
            AuthenticationFrame::Sasl {
                mechanisms,
                terminated,
            } => mechanisms.iter().map(|m| m.len() + 1).sum::<usize>() + usize::from(*terminated),
            _ => 0,
        };
        4 + body
    }
}

// -----------------------------------------------------------------------------
// ----- Internal: Helpers -----------------------------------------------------

/// Names up to an empty one or the end of the payload, whichever comes
/// first. The flag is true when an empty name closed the list.
fn read_mechanisms(cursor: &mut PayloadCursor) -> Result<(Vec<String>, bool), CodecError> {
    let mut mechanisms = Vec::new();
    while cursor.remaining() > 0 {
        let mechanism = cursor.read_cstr()?;
        if mechanism.is_empty() {
            return Ok((mechanisms, true));
        }
        mechanisms.push(mechanism);
    }
    Ok((mechanisms, false))
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
