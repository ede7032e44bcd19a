//! NextGCore PFCP Outer Header Creation
//!
//! This crate decodes the Outer Header Creation Information Element as
//! specified in 3GPP TS 29.244 Section 8.2.56.
//!
//! The IE tells a user plane function which outer header (GTP-U/UDP/IP,
//! UDP/IP or plain IP, optionally VLAN tagged) to put on forwarded packets.
//! Which fields follow the 2-byte description depends on its flag octet.
//!
//! # Features
//!
//! - Flag octet to field presence resolution
//! - Single pass, bounds-checked decoding of the value bytes
//! - Typed errors naming the truncated field and its offset
//! - C-TAG / S-TAG decomposition into PCP, DEI and VID
//!
//! # Example
//!
//! ```rust
//! use ogs_pfcp_ohc::ohc::decode;
//! use std::net::Ipv4Addr;
//!
//! // GTP-U/UDP/IPv4, TEID 1, peer 10.0.0.1
//! let payload = [0x01, 0x00, 0x00, 0x00, 0x00, 0x01, 0x0a, 0x00, 0x00, 0x01];
//! let fields = decode(&payload).unwrap();
//!
//! assert_eq!(fields.teid(), Some(1));
//! assert_eq!(fields.ipv4_addr(), Some(Ipv4Addr::new(10, 0, 0, 1)));
//! assert!(!fields.has_port());
//! ```

pub mod cursor;
pub mod description;
pub mod error;
pub mod ie;
pub mod ohc;
pub mod vlan;


pub use error::{PfcpError, PfcpResult};
pub use ohc::{decode, OuterHeaderCreationFields};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::description::{OhcDescription, OhcField, OHC_DESCRIPTION_LEN, OHC_MAX_LEN};
    pub use crate::error::{PfcpError, PfcpResult};
    pub use crate::ie::{decode_outer_header_creation_ie, IeHeader, RawIe, IE_TYPE_OUTER_HEADER_CREATION};
    pub use crate::ohc::{decode, OuterHeaderCreationFields};
    pub use crate::vlan::VlanTag;
}
