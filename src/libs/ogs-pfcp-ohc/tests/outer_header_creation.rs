//! Outer Header Creation Integration Tests
//!
//! Decodes Outer Header Creation values as a UPF receives them inside a
//! Forwarding Parameters IE, through the public API only.

use bytes::Bytes;
use std::net::{Ipv4Addr, Ipv6Addr};

use ogs_pfcp_ohc::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_scenario_gtpu_ipv4() {
    init();
    let payload = [0x01, 0x00, 0x00, 0x00, 0x00, 0x01, 0x0a, 0x00, 0x00, 0x01];
    let f = decode(&payload).unwrap();
    assert_eq!(f.teid(), Some(1));
    assert_eq!(f.ipv4_addr(), Some(Ipv4Addr::new(10, 0, 0, 1)));
    assert!(!f.has_ipv6() && !f.has_port() && !f.has_c_tag() && !f.has_s_tag());
    assert_eq!(f.ipv6_addr(), None);
    assert_eq!(f.port_number(), None);
    assert_eq!(f.c_tag(), None);
    assert_eq!(f.s_tag(), None);
}

#[test]
fn test_scenario_gtpu_ipv6() {
    init();
    let mut payload = vec![0x02, 0x00, 0x00, 0x00, 0x00, 0x02];
    payload.extend_from_slice(&[0u8; 15]);
    payload.push(0x01);
    let f = decode(&payload).unwrap();
    assert_eq!(f.teid(), Some(2));
    assert_eq!(f.ipv6_addr(), Some(Ipv6Addr::LOCALHOST));
    assert_eq!(f.ipv4_addr(), None);
}

#[test]
fn test_scenario_udp_ipv4() {
    init();
    let f = decode(&[0x04, 0x00, 0xc0, 0xa8, 0x01, 0x01, 0x1f, 0x90]).unwrap();
    assert_eq!(f.teid(), None);
    assert_eq!(f.ipv4_addr(), Some(Ipv4Addr::new(192, 168, 1, 1)));
    assert_eq!(f.port_number(), Some(8080));
}

#[test]
fn test_scenario_c_tag() {
    init();
    let mut payload = vec![0x41, 0x00];
    payload.extend_from_slice(&[0x00, 0x00, 0x00, 0x05]);
    payload.extend_from_slice(&[0x0a, 0x00, 0x00, 0x01]);
    payload.extend_from_slice(&[0x12, 0x34, 0x56]);
    let f = decode(&payload).unwrap();
    assert_eq!(f.teid(), Some(5));
    assert_eq!(f.ipv4_addr(), Some(Ipv4Addr::new(10, 0, 0, 1)));
    assert_eq!(f.c_tag(), Some(0x123456));
    assert_eq!(f.s_tag(), None);
}

#[test]
fn test_scenario_c_tag_and_s_tag() {
    init();
    let mut payload = vec![0xc1, 0x00];
    payload.extend_from_slice(&[0x00, 0x00, 0x00, 0x0f]);
    payload.extend_from_slice(&[0x0a, 0x01, 0x02, 0x03]);
    payload.extend_from_slice(&[0xaa, 0xbb, 0xcc]);
    payload.extend_from_slice(&[0xdd, 0xee, 0xff]);
    let f = decode(&payload).unwrap();
    assert_eq!(f.teid(), Some(15));
    assert_eq!(f.ipv4_addr(), Some(Ipv4Addr::new(10, 1, 2, 3)));
    assert_eq!(f.c_tag(), Some(0xaabbcc));
    assert_eq!(f.s_tag(), Some(0xddeeff));
}

#[test]
fn test_scenario_truncated_header() {
    init();
    for payload in [&[][..], &[0x01u8][..]] {
        let err = decode(payload).unwrap_err();
        assert!(matches!(err, PfcpError::PayloadTooShort { .. }));
        assert!(err.to_string().contains("too short"));
    }
}

#[test]
fn test_scenario_truncated_teid() {
    init();
    let err = decode(&[0x01, 0x00, 0x00, 0x00, 0x00]).unwrap_err();
    assert_eq!(err.field(), Some(OhcField::Teid));
    assert_eq!(err.offset(), Some(2));
    assert!(err.to_string().contains("TEID"));
}

#[test]
fn test_vlan_tagged_outer_header() {
    init();
    // UDP/IPv4 with C-TAG: VID 100, PCP 3, all flags set
    let mut payload = vec![0x44, 0x00];
    payload.extend_from_slice(&[0x0a, 0x00, 0x00, 0x09]);
    payload.extend_from_slice(&[0x08, 0x68]);
    payload.extend_from_slice(&[0x07, 0x03, 0x64]);
    let f = decode(&payload).unwrap();
    let tag = f.c_tag_vlan().unwrap();
    assert_eq!(tag.vid(), 100);
    assert_eq!(tag.pcp(), 3);
    assert!(!tag.dei());
    assert!(f.s_tag_vlan().is_none());
}

#[test]
fn test_ie_sequence() {
    init();
    // Two consecutive Outer Header Creation IEs, as found in a Forwarding
    // Parameters grouped IE after the other IEs were skipped.
    let mut raw = vec![0x00, 0x54, 0x00, 0x0a];
    raw.extend_from_slice(&[0x01, 0x00, 0x00, 0x00, 0x00, 0x01, 0x0a, 0x00, 0x00, 0x01]);
    raw.extend_from_slice(&[0x00, 0x54, 0x00, 0x06]);
    raw.extend_from_slice(&[0x10, 0x01, 0xc0, 0xa8, 0x00, 0x01]);
    let mut buf = Bytes::from(raw);

    let first = decode_outer_header_creation_ie(&mut buf).unwrap();
    assert_eq!(first.teid(), Some(1));

    let second = decode_outer_header_creation_ie(&mut buf).unwrap();
    assert_eq!(second.teid(), None);
    assert_eq!(second.ipv4_addr(), Some(Ipv4Addr::new(192, 168, 0, 1)));
    assert!(second.description().is_n19());
    assert!(buf.is_empty());
}

#[test]
fn test_decode_on_many_threads() {
    init();
    let handles: Vec<_> = (0u8..8)
        .map(|i| {
            std::thread::spawn(move || {
                let payload = [0x10, 0x00, 0x0a, 0x00, 0x00, i];
                decode(&payload).map(|f| f.ipv4_addr())
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let addr = h.join().unwrap().unwrap();
        assert_eq!(addr, Some(Ipv4Addr::new(10, 0, 0, i as u8)));
    }
}
