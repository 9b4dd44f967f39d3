//! Moving cursor over a decoded payload.
//!
//! Every read either consumes exactly the bytes it needs or fails with
//! `Underflow` and consumes nothing.

use bytes::{Buf, Bytes};

use crate::errors::{CodecError, InvalidValue};
use crate::wire_protocol::utils::read_cstr;

// -----------------------------------------------------------------------------
// ----- PayloadCursor ---------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PayloadCursor {
    buf: Bytes,
    consumed: usize,
}

impl PayloadCursor {
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self {
            buf: buf.into(),
            consumed: 0,
        }
    }
}

// -----------------------------------------------------------------------------
// ----- PayloadCursor: Public Methods -----------------------------------------

impl PayloadCursor {
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// Bytes consumed since the cursor was created.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    #[inline]
    pub fn peek_u8(&self) -> Option<u8> {
        self.buf.first().copied()
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        self.ensure(1)?;
        self.consumed += 1;
        Ok(self.buf.get_u8())
    }

    pub fn read_i8(&mut self) -> Result<i8, CodecError> {
        self.ensure(1)?;
        self.consumed += 1;
        Ok(self.buf.get_i8())
    }

    pub fn read_i16(&mut self) -> Result<i16, CodecError> {
        self.ensure(2)?;
        self.consumed += 2;
        Ok(self.buf.get_i16())
    }

    pub fn read_i32(&mut self) -> Result<i32, CodecError> {
        self.ensure(4)?;
        self.consumed += 4;
        Ok(self.buf.get_i32())
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        self.ensure(4)?;
        self.consumed += 4;
        Ok(self.buf.get_u32())
    }

    /// Zero-copy split of the next `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes, CodecError> {
        self.ensure(len)?;
        self.consumed += len;
        Ok(self.buf.split_to(len))
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        self.buf.copy_to_slice(&mut out);
        self.consumed += N;
        Ok(out)
    }

    pub fn read_cstr(&mut self) -> Result<String, CodecError> {
        let (value, len) = read_cstr(&self.buf)?;
        let value = value.to_owned();
        self.buf.advance(len);
        self.consumed += len;
        Ok(value)
    }

    /// Read an i16 element count. Negative counts are rejected.
    pub fn read_count(&mut self) -> Result<usize, CodecError> {
        self.ensure(2)?;
        let count = i16::from_be_bytes([self.buf[0], self.buf[1]]);
        if count < 0 {
            return Err(InvalidValue::Count(count as i32).into());
        }
        self.advance(2);
        Ok(count as usize)
    }

    /// Read an i32 length followed by that many bytes; `-1` is NULL.
    pub fn read_nullable_bytes(&mut self) -> Result<Option<Bytes>, CodecError> {
        self.ensure(4)?;
        let len = i32::from_be_bytes([self.buf[0], self.buf[1], self.buf[2], self.buf[3]]);
        match len {
            -1 => {
                self.advance(4);
                Ok(None)
            }
            len if len < 0 => Err(InvalidValue::Length(len).into()),
            len => {
                self.ensure(4 + len as usize)?;
                self.advance(4);
                Ok(Some(self.read_bytes(len as usize)?))
            }
        }
    }

    /// Take everything left in the payload.
    pub fn read_rest(&mut self) -> Bytes {
        self.consumed += self.buf.len();
        std::mem::take(&mut self.buf)
    }

    /// Fail when any bytes are left unread.
    pub fn finish(self) -> Result<(), CodecError> {
        match self.buf.len() {
            0 => Ok(()),
            n => Err(CodecError::TrailingBytes(n)),
        }
    }

    /// Fail unless at least `len` bytes remain, without consuming.
    #[inline]
    pub fn ensure(&self, len: usize) -> Result<(), CodecError> {
        if self.buf.len() < len {
            return Err(CodecError::underflow(len, self.buf.len()));
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- PayloadCursor: Private Methods ----------------------------------------

impl PayloadCursor {
    #[inline]
    fn advance(&mut self, len: usize) {
        self.buf.advance(len);
        self.consumed += len;
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
