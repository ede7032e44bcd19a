//! Bounds-checked payload reader
//!
//! Every read names the field it is extracting so a shortfall is reported
//! as [`PfcpError::TruncatedField`] with the offset where it occurred.

use bytes::Buf;

use crate::description::OhcField;
use crate::error::{PfcpError, PfcpResult};

/// Forward-only cursor over an IE payload
#[derive(Debug, Clone)]
pub struct FieldCursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> FieldCursor<'a> {
    /// Start reading `payload` at `offset`
    pub fn new(payload: &'a [u8], offset: usize) -> Self {
        let start = offset.min(payload.len());
        Self {
            buf: &payload[start..],
            offset: start,
        }
    }

    /// Offset of the next byte to be read, relative to the payload start
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn ensure(&self, field: OhcField) -> PfcpResult<()> {
        let needed = field.width();
        if self.buf.remaining() < needed {
            return Err(PfcpError::TruncatedField {
                field,
                offset: self.offset,
                needed,
                available: self.buf.remaining(),
            });
        }
        Ok(())
    }

    /// Take exactly `field.width()` bytes and advance past them.
    ///
    /// The offset moves by the length of the returned slice, so it always
    /// equals the number of bytes consumed.
    pub fn read(&mut self, field: OhcField) -> PfcpResult<&'a [u8]> {
        self.ensure(field)?;
        let (bytes, rest) = self.buf.split_at(field.width());
        self.buf = rest;
        self.offset += bytes.len();
        Ok(bytes)
    }

    /// Read the field as a big-endian unsigned integer, zero-extended into
    /// the high octets. Fields wider than 8 bytes are still consumed whole,
    /// but only their leading 8 bytes are interpreted.
    pub fn read_uint(&mut self, field: OhcField) -> PfcpResult<u64> {
        let mut bytes = self.read(field)?;
        let n = bytes.len().min(8);
        Ok(bytes.get_uint(n))
    }
}
