use crate::errors::{CodecError, InvalidValue};

// -----------------------------------------------------------------------------
// ----- FieldTag --------------------------------------------------------------

/// Field identifiers inside ErrorResponse and NoticeResponse bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTag {
    Severity,         // S
    SeverityRaw,      // V (never localized)
    Code,             // C (SQLSTATE 5-char)
    Message,          // M
    Detail,           // D
    Hint,             // H
    Position,         // P
    InternalPosition, // p
    InternalQuery,    // q
    Where,            // W
    Schema,           // s
    Table,            // t
    Column,           // c
    DataType,         // d
    Constraint,       // n
    File,             // F
    Line,             // L
    Routine,          // R
}

impl FieldTag {
    pub fn as_byte(self) -> u8 {
        match self {
            FieldTag::Severity => b'S',
            FieldTag::SeverityRaw => b'V',
            FieldTag::Code => b'C',
            FieldTag::Message => b'M',
            FieldTag::Detail => b'D',
            FieldTag::Hint => b'H',
            FieldTag::Position => b'P',
            FieldTag::InternalPosition => b'p',
            FieldTag::InternalQuery => b'q',
            FieldTag::Where => b'W',
            FieldTag::Schema => b's',
            FieldTag::Table => b't',
            FieldTag::Column => b'c',
            FieldTag::DataType => b'd',
            FieldTag::Constraint => b'n',
            FieldTag::File => b'F',
            FieldTag::Line => b'L',
            FieldTag::Routine => b'R',
        }
    }
}

impl TryFrom<u8> for FieldTag {
    type Error = CodecError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        let field = match tag {
            b'S' => FieldTag::Severity,
            b'V' => FieldTag::SeverityRaw,
            b'C' => FieldTag::Code,
            b'M' => FieldTag::Message,
            b'D' => FieldTag::Detail,
            b'H' => FieldTag::Hint,
            b'P' => FieldTag::Position,
            b'p' => FieldTag::InternalPosition,
            b'q' => FieldTag::InternalQuery,
            b'W' => FieldTag::Where,
            b's' => FieldTag::Schema,
            b't' => FieldTag::Table,
            b'c' => FieldTag::Column,
            b'd' => FieldTag::DataType,
            b'n' => FieldTag::Constraint,
            b'F' => FieldTag::File,
            b'L' => FieldTag::Line,
            b'R' => FieldTag::Routine,
            other => return Err(InvalidValue::FieldTag(other).into()),
        };
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_documented_tags_round_trip() {
        for tag in b"SVCMDHPpqWstcdnFLR" {
            assert_eq!(FieldTag::try_from(*tag).unwrap().as_byte(), *tag);
        }
    }

    #[test]
    fn terminator_is_not_a_field() {
        assert!(matches!(
            FieldTag::try_from(0),
            Err(CodecError::InvalidValue(InvalidValue::FieldTag(0)))
        ));
        assert!(FieldTag::try_from(b'x').is_err());
    }
}
