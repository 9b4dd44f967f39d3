use crate::errors::{CodecError, InvalidValue};

// -----------------------------------------------------------------------------
// ----- AuthenticationKind ----------------------------------------------------

/// The i32 selector at the front of every 'R' payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthenticationKind {
    Ok,                // 0
    KerberosV5,        // 2 (legacy)
    CleartextPassword, // 3
    Md5Password,       // 5
    Gss,               // 7
    GssContinue,       // 8
    Sspi,              // 9
    Sasl,              // 10
    SaslContinue,      // 11
    SaslFinal,         // 12
}

impl AuthenticationKind {
    pub fn as_i32(self) -> i32 {
        match self {
            AuthenticationKind::Ok => 0,
            AuthenticationKind::KerberosV5 => 2,
            AuthenticationKind::CleartextPassword => 3,
            AuthenticationKind::Md5Password => 5,
            AuthenticationKind::Gss => 7,
            AuthenticationKind::GssContinue => 8,
            AuthenticationKind::Sspi => 9,
            AuthenticationKind::Sasl => 10,
            AuthenticationKind::SaslContinue => 11,
            AuthenticationKind::SaslFinal => 12,
        }
    }
}

impl TryFrom<i32> for AuthenticationKind {
    type Error = CodecError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        let kind = match code {
            0 => AuthenticationKind::Ok,
            2 => AuthenticationKind::KerberosV5,
            3 => AuthenticationKind::CleartextPassword,
            5 => AuthenticationKind::Md5Password,
            7 => AuthenticationKind::Gss,
            8 => AuthenticationKind::GssContinue,
            9 => AuthenticationKind::Sspi,
            10 => AuthenticationKind::Sasl,
            11 => AuthenticationKind::SaslContinue,
            12 => AuthenticationKind::SaslFinal,
            other => return Err(InvalidValue::AuthenticationKind(other).into()),
        };
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_known_codes() {
        for code in [0, 2, 3, 5, 7, 8, 9, 10, 11, 12] {
            assert_eq!(AuthenticationKind::try_from(code).unwrap().as_i32(), code);
        }
    }

    #[test]
    fn rejects_gaps_and_negatives() {
        // 6 is SCM credentials, which this codec does not model.
        for code in [-1, 1, 4, 6, 13] {
            assert!(matches!(
                AuthenticationKind::try_from(code),
                Err(CodecError::InvalidValue(InvalidValue::AuthenticationKind(c))) if c == code
            ));
        }
    }
}
