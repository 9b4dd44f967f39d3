use crate::errors::{CodecError, InvalidValue};

// -----------------------------------------------------------------------------
// ----- TxStatus --------------------------------------------------------------

/// The ReadyForQuery transaction status byte: whether the connection is idle,
/// in a transaction, or in a failed transaction block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxStatus {
    Idle,
    Active,
    Error,
}

// -----------------------------------------------------------------------------
// ----- TxStatus: Static ------------------------------------------------------

impl TxStatus {
    pub fn as_byte(self) -> u8 {
        match self {
            TxStatus::Idle => b'I',
            TxStatus::Active => b'T',
            TxStatus::Error => b'E',
        }
    }
}

impl TryFrom<u8> for TxStatus {
    type Error = CodecError;

    fn try_from(status: u8) -> Result<Self, CodecError> {
        match status {
            b'I' => Ok(TxStatus::Idle),
            b'T' => Ok(TxStatus::Active),
            b'E' => Ok(TxStatus::Error),
            other => Err(InvalidValue::TxStatus(other).into()),
        }
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_set() {
        for status in [TxStatus::Idle, TxStatus::Active, TxStatus::Error] {
            assert_eq!(TxStatus::try_from(status.as_byte()).unwrap(), status);
        }
        assert!(matches!(
            TxStatus::try_from(b'X'),
            Err(CodecError::InvalidValue(InvalidValue::TxStatus(b'X')))
        ));
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
