//! VLAN tag view over a decoded C-TAG / S-TAG value
//!
//! The 3 octets carried in Outer Header Creation follow the C-TAG and
//! S-TAG IE value layout (TS 29.244 Sections 8.2.94 and 8.2.95):
//!
//! ```text
//! Octet 1:  spare (bits 8-4) | VID flag | DEI flag | PCP flag
//! Octet 2:  VID high (bits 8-5) | DEI (bit 4) | PCP (bits 3-1)
//! Octet 3:  VID low
//! ```

use std::fmt;

const PCP_FLAG: u8 = 0x01;
const DEI_FLAG: u8 = 0x02;
const VID_FLAG: u8 = 0x04;

/// Decoded 24-bit VLAN tag (top octet of the backing integer is always zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VlanTag(u32);

impl VlanTag {
    /// Wrap a 24-bit tag value; bits above 24 are discarded
    pub fn from_raw(raw: u32) -> Self {
        Self(raw & 0x00ff_ffff)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }

    fn octets(&self) -> [u8; 3] {
        let b = self.0.to_be_bytes();
        [b[1], b[2], b[3]]
    }

    pub fn has_pcp(&self) -> bool {
        self.octets()[0] & PCP_FLAG != 0
    }

    pub fn has_dei(&self) -> bool {
        self.octets()[0] & DEI_FLAG != 0
    }

    pub fn has_vid(&self) -> bool {
        self.octets()[0] & VID_FLAG != 0
    }

    /// Priority code point (3 bits)
    pub fn pcp(&self) -> u8 {
        self.octets()[1] & 0x07
    }

    /// Drop eligible indicator
    pub fn dei(&self) -> bool {
        self.octets()[1] & 0x08 != 0
    }

    /// VLAN identifier (12 bits)
    pub fn vid(&self) -> u16 {
        let o = self.octets();
        (((o[1] >> 4) as u16) << 8) | o[2] as u16
    }
}

impl From<VlanTag> for u32 {
    fn from(tag: VlanTag) -> Self {
        tag.0
    }
}

impl fmt::Display for VlanTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vid={} pcp={} dei={}", self.vid(), self.pcp(), self.dei() as u8)
    }
}
