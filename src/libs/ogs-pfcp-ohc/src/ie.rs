//! PFCP Information Element framing
//!
//! Just enough of the IE TLV framing (TS 29.244 Section 8.1.1) to hand the
//! Outer Header Creation value bytes to the decoder.

use bytes::{Buf, Bytes};

use crate::error::{PfcpError, PfcpResult};
use crate::ohc::OuterHeaderCreationFields;

/// Outer Header Creation IE type (TS 29.244 Section 8.1.2)
pub const IE_TYPE_OUTER_HEADER_CREATION: u16 = 84;

/// PFCP IE Header (4 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IeHeader {
    pub ie_type: u16,
    pub length: u16,
}

impl IeHeader {
    pub const LEN: usize = 4;

    pub fn new(ie_type: u16, length: u16) -> Self {
        Self { ie_type, length }
    }

    pub fn decode(buf: &mut Bytes) -> PfcpResult<Self> {
        if buf.remaining() < Self::LEN {
            return Err(PfcpError::BufferTooShort {
                needed: Self::LEN,
                available: buf.remaining(),
            });
        }
        Ok(Self {
            ie_type: buf.get_u16(),
            length: buf.get_u16(),
        })
    }
}

/// Generic PFCP IE with raw data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawIe {
    pub ie_type: u16,
    pub data: Bytes,
}

impl RawIe {
    pub fn new(ie_type: u16, data: Bytes) -> Self {
        Self { ie_type, data }
    }

    /// Read one IE. `buf` is only advanced when the whole IE is present.
    pub fn decode(buf: &mut Bytes) -> PfcpResult<Self> {
        let mut cursor = buf.clone();
        let header = IeHeader::decode(&mut cursor)?;
        if cursor.remaining() < header.length as usize {
            return Err(PfcpError::IeLengthMismatch {
                declared: header.length as usize,
                available: cursor.remaining(),
            });
        }
        let data = cursor.copy_to_bytes(header.length as usize);
        *buf = cursor;
        Ok(Self {
            ie_type: header.ie_type,
            data,
        })
    }
}

impl TryFrom<&RawIe> for OuterHeaderCreationFields {
    type Error = PfcpError;

    fn try_from(ie: &RawIe) -> Result<Self, Self::Error> {
        if ie.ie_type != IE_TYPE_OUTER_HEADER_CREATION {
            return Err(PfcpError::InvalidIeType(ie.ie_type));
        }
        OuterHeaderCreationFields::decode(&ie.data)
    }
}

/// Read one Outer Header Creation IE (header and value) from `buf`.
///
/// Only the declared value length is passed to the decoder. If the IE
/// framing is incomplete `buf` is left untouched; once the framing is read,
/// `buf` is advanced past the whole IE even when the value fails to decode.
pub fn decode_outer_header_creation_ie(buf: &mut Bytes) -> PfcpResult<OuterHeaderCreationFields> {
    let ie = RawIe::decode(buf)?;
    OuterHeaderCreationFields::try_from(&ie)
}
