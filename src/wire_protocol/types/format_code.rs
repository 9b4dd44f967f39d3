use crate::errors::{CodecError, InvalidValue};

// -----------------------------------------------------------------------------
// ----- FormatCode ------------------------------------------------------------

/// Text or binary transfer format. Copy responses carry an 8-bit overall
/// format; per-column formats are 16-bit everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatCode {
    #[default]
    Text,
    Binary,
}

impl FormatCode {
    pub fn as_i16(self) -> i16 {
        match self {
            FormatCode::Text => 0,
            FormatCode::Binary => 1,
        }
    }

    pub fn as_i8(self) -> i8 {
        self.as_i16() as i8
    }

    pub fn from_i8(code: i8) -> Result<Self, CodecError> {
        Self::try_from(code as i16)
    }
}

impl TryFrom<i16> for FormatCode {
    type Error = CodecError;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(FormatCode::Text),
            1 => Ok(FormatCode::Binary),
            other => Err(InvalidValue::FormatCode(other).into()),
        }
    }
}
