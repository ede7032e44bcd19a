//! Outer Header Creation Description
//!
//! Field presence resolution for the Outer Header Creation IE
//! (3GPP TS 29.244 Section 8.2.56, Figure 8.2.56-1).
//!
//! ```text
//! Octet 5 (flags):  S-TAG | C-TAG | IPv6 | IPv4 | UDP/IPv6 | UDP/IPv4 | GTP-U/UDP/IPv6 | GTP-U/UDP/IPv4
//!                   bit 8                                                                  bit 1
//! Octet 6:          spare (bits 8-3) | N6 | N19
//! ```

use std::fmt;

/// Length of the Outer Header Creation Description field
pub const OHC_DESCRIPTION_LEN: usize = 2;

/// Largest payload that can be consumed: description plus every optional field
pub const OHC_MAX_LEN: usize = OHC_DESCRIPTION_LEN + 4 + 4 + 16 + 2 + 3 + 3;

/// Octet 5 flag bits
pub const OHC_GTPU_UDP_IPV4: u8 = 0x01;
pub const OHC_GTPU_UDP_IPV6: u8 = 0x02;
pub const OHC_UDP_IPV4: u8 = 0x04;
pub const OHC_UDP_IPV6: u8 = 0x08;
pub const OHC_IPV4: u8 = 0x10;
pub const OHC_IPV6: u8 = 0x20;
pub const OHC_C_TAG: u8 = 0x40;
pub const OHC_S_TAG: u8 = 0x80;

/// Octet 6 indication bits
pub const OHC_N19_INDICATION: u8 = 0x01;
pub const OHC_N6_INDICATION: u8 = 0x02;

/// Conditional sub-fields of the Outer Header Creation IE, declared in wire
/// order; the discriminant indexes [`FIELD_LAYOUT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OhcField {
    Teid,
    Ipv4,
    Ipv6,
    Port,
    CTag,
    STag,
}

impl OhcField {
    /// Get the protocol name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Self::Teid => "TEID",
            Self::Ipv4 => "IPv4",
            Self::Ipv6 => "IPv6",
            Self::Port => "Port",
            Self::CTag => "C-TAG",
            Self::STag => "S-TAG",
        }
    }

    /// Width of the field on the wire in bytes
    pub fn width(&self) -> usize {
        self.spec().width
    }

    /// Octet 5 bits, any of which makes this field present
    pub fn trigger_mask(&self) -> u8 {
        self.spec().trigger_mask
    }

    fn spec(&self) -> FieldSpec {
        FIELD_LAYOUT[*self as usize]
    }
}

impl fmt::Display for OhcField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the canonical layout table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: OhcField,
    pub trigger_mask: u8,
    pub width: usize,
}

/// Canonical wire order of the conditional fields.
///
/// Each field is read at most once, no matter how many of its trigger bits
/// are set.
pub static FIELD_LAYOUT: [FieldSpec; 6] = [
    FieldSpec {
        field: OhcField::Teid,
        trigger_mask: OHC_GTPU_UDP_IPV4 | OHC_GTPU_UDP_IPV6,
        width: 4,
    },
    FieldSpec {
        field: OhcField::Ipv4,
        trigger_mask: OHC_GTPU_UDP_IPV4 | OHC_UDP_IPV4 | OHC_IPV4,
        width: 4,
    },
    FieldSpec {
        field: OhcField::Ipv6,
        trigger_mask: OHC_GTPU_UDP_IPV6 | OHC_UDP_IPV6 | OHC_IPV6,
        width: 16,
    },
    FieldSpec {
        field: OhcField::Port,
        trigger_mask: OHC_UDP_IPV4 | OHC_UDP_IPV6,
        width: 2,
    },
    FieldSpec {
        field: OhcField::CTag,
        trigger_mask: OHC_C_TAG,
        width: 3,
    },
    FieldSpec {
        field: OhcField::STag,
        trigger_mask: OHC_S_TAG,
        width: 3,
    },
];

/// Outer Header Creation Description (octets 5-6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OhcDescription(u16);

impl OhcDescription {
    pub fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Build a description from octet 5 flags with octet 6 cleared
    pub fn from_flags(flags: u8) -> Self {
        Self((flags as u16) << 8)
    }

    /// Raw 16-bit description word as it appeared on the wire
    pub fn raw(&self) -> u16 {
        self.0
    }

    /// Octet 5: the flag octet driving field presence
    pub fn flags(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Octet 6: N19/N6 indications and spare bits
    pub fn spare_octet(&self) -> u8 {
        (self.0 & 0x00ff) as u8
    }

    pub fn is_present(&self, field: OhcField) -> bool {
        self.flags() & field.trigger_mask() != 0
    }

    pub fn has_teid(&self) -> bool {
        self.is_present(OhcField::Teid)
    }

    pub fn has_ipv4(&self) -> bool {
        self.is_present(OhcField::Ipv4)
    }

    pub fn has_ipv6(&self) -> bool {
        self.is_present(OhcField::Ipv6)
    }

    pub fn has_port(&self) -> bool {
        self.is_present(OhcField::Port)
    }

    pub fn has_c_tag(&self) -> bool {
        self.is_present(OhcField::CTag)
    }

    pub fn has_s_tag(&self) -> bool {
        self.is_present(OhcField::STag)
    }

    pub fn is_gtpu_udp_ipv4(&self) -> bool {
        self.flags() & OHC_GTPU_UDP_IPV4 != 0
    }

    pub fn is_gtpu_udp_ipv6(&self) -> bool {
        self.flags() & OHC_GTPU_UDP_IPV6 != 0
    }

    pub fn is_udp_ipv4(&self) -> bool {
        self.flags() & OHC_UDP_IPV4 != 0
    }

    pub fn is_udp_ipv6(&self) -> bool {
        self.flags() & OHC_UDP_IPV6 != 0
    }

    pub fn is_ipv4(&self) -> bool {
        self.flags() & OHC_IPV4 != 0
    }

    pub fn is_ipv6(&self) -> bool {
        self.flags() & OHC_IPV6 != 0
    }

    /// N19 indication (octet 6 bit 1), no effect on layout
    pub fn is_n19(&self) -> bool {
        self.spare_octet() & OHC_N19_INDICATION != 0
    }

    /// N6 indication (octet 6 bit 2), no effect on layout
    pub fn is_n6(&self) -> bool {
        self.spare_octet() & OHC_N6_INDICATION != 0
    }

    /// Present fields in wire order
    pub fn present_fields(&self) -> impl Iterator<Item = OhcField> {
        let flags = self.flags();
        FIELD_LAYOUT
            .iter()
            .filter(move |spec| flags & spec.trigger_mask != 0)
            .map(|spec| spec.field)
    }

    /// Number of payload bytes this description requires
    pub fn encoded_len(&self) -> usize {
        OHC_DESCRIPTION_LEN + self.present_fields().map(|f| f.width()).sum::<usize>()
    }
}

impl From<u16> for OhcDescription {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<OhcDescription> for u16 {
    fn from(desc: OhcDescription) -> Self {
        desc.0
    }
}
