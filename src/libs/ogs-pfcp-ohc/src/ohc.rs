//! Outer Header Creation IE decoding
//!
//! Decodes the value part of the Outer Header Creation IE
//! (TS 29.244 Section 8.2.56). The caller strips the IE type/length header
//! and passes the remaining value bytes, starting at the description.
//!
//! ```text
//! +-----------+------+------+------+------+-------+-------+
//! | Desc (2)  | TEID | IPv4 | IPv6 | Port | C-TAG | S-TAG |
//! |           |  (4) |  (4) | (16) |  (2) |  (3)  |  (3)  |
//! +-----------+------+------+------+------+-------+-------+
//! ```
//!
//! Each optional field appears at most once, in the order shown, when the
//! description flags select it.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::cursor::FieldCursor;
use crate::description::{OhcDescription, OhcField, FIELD_LAYOUT, OHC_DESCRIPTION_LEN};
use crate::error::{PfcpError, PfcpResult};
use crate::vlan::VlanTag;

/// Decoded Outer Header Creation fields.
///
/// Presence of every optional field follows from [`description`](Self::description);
/// the accessors return `None` exactly when the flags do not select a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OuterHeaderCreationFields {
    description: OhcDescription,
    teid: Option<u32>,
    ipv4_addr: Option<Ipv4Addr>,
    ipv6_addr: Option<Ipv6Addr>,
    port_number: Option<u16>,
    c_tag: Option<u32>,
    s_tag: Option<u32>,
}

impl OuterHeaderCreationFields {
    /// Decode from the IE value bytes.
    ///
    /// Bytes following the last selected field are not consumed and do not
    /// cause an error; [`encoded_len`](Self::encoded_len) reports how many
    /// were used.
    pub fn decode(payload: &[u8]) -> PfcpResult<Self> {
        match Self::decode_fields(payload) {
            Ok(fields) => {
                log::trace!(
                    "Outer Header Creation decoded: {} ({} of {} bytes)",
                    fields,
                    fields.encoded_len(),
                    payload.len()
                );
                Ok(fields)
            }
            Err(e) => {
                log::trace!("Outer Header Creation decode failed: {}", e);
                Err(e)
            }
        }
    }

    fn decode_fields(payload: &[u8]) -> PfcpResult<Self> {
        if payload.len() < OHC_DESCRIPTION_LEN {
            return Err(PfcpError::PayloadTooShort {
                available: payload.len(),
            });
        }

        let description = OhcDescription::new(u16::from_be_bytes([payload[0], payload[1]]));
        let mut fields = Self::empty(description);
        let mut cursor = FieldCursor::new(payload, OHC_DESCRIPTION_LEN);

        for spec in FIELD_LAYOUT.iter() {
            if description.flags() & spec.trigger_mask == 0 {
                continue;
            }
            match spec.field {
                OhcField::Teid => fields.teid = Some(cursor.read_uint(spec.field)? as u32),
                OhcField::Ipv4 => {
                    let mut octets = [0u8; 4];
                    octets.copy_from_slice(cursor.read(spec.field)?);
                    fields.ipv4_addr = Some(Ipv4Addr::from(octets));
                }
                OhcField::Ipv6 => {
                    let mut octets = [0u8; 16];
                    octets.copy_from_slice(cursor.read(spec.field)?);
                    fields.ipv6_addr = Some(Ipv6Addr::from(octets));
                }
                OhcField::Port => fields.port_number = Some(cursor.read_uint(spec.field)? as u16),
                OhcField::CTag => fields.c_tag = Some(cursor.read_uint(spec.field)? as u32),
                OhcField::STag => fields.s_tag = Some(cursor.read_uint(spec.field)? as u32),
            }
        }

        Ok(fields)
    }

    fn empty(description: OhcDescription) -> Self {
        Self {
            description,
            teid: None,
            ipv4_addr: None,
            ipv6_addr: None,
            port_number: None,
            c_tag: None,
            s_tag: None,
        }
    }

    pub fn description(&self) -> OhcDescription {
        self.description
    }

    /// Raw description word (octets 5-6)
    pub fn raw_description(&self) -> u16 {
        self.description.raw()
    }

    pub fn teid(&self) -> Option<u32> {
        self.teid
    }

    pub fn ipv4_addr(&self) -> Option<Ipv4Addr> {
        self.ipv4_addr
    }

    pub fn ipv6_addr(&self) -> Option<Ipv6Addr> {
        self.ipv6_addr
    }

    pub fn port_number(&self) -> Option<u16> {
        self.port_number
    }

    /// C-TAG as a 24-bit value
    pub fn c_tag(&self) -> Option<u32> {
        self.c_tag
    }

    /// S-TAG as a 24-bit value
    pub fn s_tag(&self) -> Option<u32> {
        self.s_tag
    }

    pub fn c_tag_vlan(&self) -> Option<VlanTag> {
        self.c_tag.map(VlanTag::from_raw)
    }

    pub fn s_tag_vlan(&self) -> Option<VlanTag> {
        self.s_tag.map(VlanTag::from_raw)
    }

    pub fn has_teid(&self) -> bool {
        self.description.has_teid()
    }

    pub fn has_ipv4(&self) -> bool {
        self.description.has_ipv4()
    }

    pub fn has_ipv6(&self) -> bool {
        self.description.has_ipv6()
    }

    pub fn has_port(&self) -> bool {
        self.description.has_port()
    }

    pub fn has_c_tag(&self) -> bool {
        self.description.has_c_tag()
    }

    pub fn has_s_tag(&self) -> bool {
        self.description.has_s_tag()
    }

    /// Payload bytes consumed by the decode
    pub fn encoded_len(&self) -> usize {
        self.description.encoded_len()
    }
}

impl TryFrom<&[u8]> for OuterHeaderCreationFields {
    type Error = PfcpError;

    fn try_from(payload: &[u8]) -> Result<Self, Self::Error> {
        Self::decode(payload)
    }
}

impl fmt::Display for OuterHeaderCreationFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "desc={:#06x}", self.description.raw())?;
        if let Some(teid) = self.teid {
            write!(f, " teid={:#x}", teid)?;
        }
        if let Some(addr) = self.ipv4_addr {
            write!(f, " ipv4={}", addr)?;
        }
        if let Some(addr) = self.ipv6_addr {
            write!(f, " ipv6={}", addr)?;
        }
        if let Some(port) = self.port_number {
            write!(f, " port={}", port)?;
        }
        if let Some(tag) = self.c_tag {
            write!(f, " c-tag={:#08x}", tag)?;
        }
        if let Some(tag) = self.s_tag {
            write!(f, " s-tag={:#08x}", tag)?;
        }
        Ok(())
    }
}

/// Decode the Outer Header Creation IE value
pub fn decode(payload: &[u8]) -> PfcpResult<OuterHeaderCreationFields> {
    OuterHeaderCreationFields::decode(payload)
}
