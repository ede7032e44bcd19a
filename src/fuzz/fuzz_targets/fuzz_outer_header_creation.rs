//! Outer Header Creation Fuzzer
//!
//! Fuzzes the Outer Header Creation decoder, both on raw IE values and on
//! framed IEs, to find panics or out-of-bounds reads on malformed input.
//!
//! Run with: cargo +nightly fuzz run fuzz_outer_header_creation

#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use ogs_pfcp_ohc::ie::{decode_outer_header_creation_ie, IeHeader};
use ogs_pfcp_ohc::ohc::decode;

fuzz_target!(|data: &[u8]| {
    match decode(data) {
        Ok(fields) => {
            // A successful decode never claims more bytes than it was given
            assert!(fields.encoded_len() <= data.len());
            assert_eq!(fields.raw_description(), u16::from_be_bytes([data[0], data[1]]));
            assert_eq!(decode(data), Ok(fields));
        }
        Err(e) => {
            if let Some(offset) = e.offset() {
                assert!(offset <= data.len());
            }
        }
    }

    // Walk the input as a run of framed IEs; an incomplete IE leaves the
    // buffer untouched and ends the walk.
    let mut buf = Bytes::copy_from_slice(data);
    while buf.len() >= IeHeader::LEN {
        let before = buf.len();
        let result = decode_outer_header_creation_ie(&mut buf);
        if buf.len() == before {
            assert!(result.is_err());
            break;
        }
    }
});
