#[path = "../common/mod.rs"]
mod common;

use libndef::protocol::{NdefRecord, Tnf};
use libndef::Error;
use proptest::prelude::*;

const FIELD_LENGTHS: [usize; 4] = [0, 1, 254, 255];
const PAYLOAD_LENGTHS: [usize; 6] = [0, 1, 254, 255, 256, 1000];

fn filled(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed)).collect()
}

#[test]
fn round_trip_over_boundary_lengths() {
    common::init_logger();
    for &type_len in &FIELD_LENGTHS {
        for &id_len in &FIELD_LENGTHS {
            for &payload_len in &PAYLOAD_LENGTHS {
                let record = NdefRecord::new(
                    Tnf::External,
                    &filled(type_len, 1),
                    &filled(id_len, 2),
                    &filled(payload_len, 3),
                );
                let bytes = record.encode(true, true).unwrap();
                assert_eq!(bytes.len(), record.encoded_size());
                let (decoded, flags, used) = NdefRecord::decode(&bytes).unwrap();
                assert_eq!(used, bytes.len());
                assert_eq!(decoded, record, "type {} id {} payload {}", type_len, id_len, payload_len);
                assert_eq!(flags.short_record, payload_len <= 255);
                assert_eq!(flags.id_present, id_len > 0);
            }
        }
    }
}

#[test]
fn oversized_type_or_id_is_rejected() {
    for len in [256usize, 1000] {
        let record = NdefRecord::new(Tnf::External, &filled(len, 0), &[], b"x");
        assert_eq!(
            record.encode(true, true),
            Err(Error::InvalidLength {
                expected: 255,
                actual: len
            })
        );
        let record = NdefRecord::new(Tnf::External, b"t", &filled(len, 0), b"x");
        assert!(record.encode(true, true).is_err());
    }
}

#[test]
fn short_record_flag_boundary() {
    let short = NdefRecord::mime("a/b", &[0u8; 255]).encode(true, true).unwrap();
    assert_eq!(short[0] & 0x10, 0x10);
    assert_eq!(short[2], 255);

    let long = NdefRecord::mime("a/b", &[0u8; 256]).encode(true, true).unwrap();
    assert_eq!(long[0] & 0x10, 0x00);
    assert_eq!(&long[2..6], &[0x00, 0x00, 0x01, 0x00]);
}

#[test]
fn empty_record_bytes() {
    let bytes = NdefRecord::empty().encode(true, true).unwrap();
    assert_eq!(bytes, vec![0xD0, 0x00, 0x00]);
}

#[test]
fn truncated_record_is_invalid_length() {
    let bytes = NdefRecord::text("hello", "en").encode(true, true).unwrap();
    for cut in 0..bytes.len() {
        assert!(
            matches!(
                NdefRecord::decode(&bytes[..cut]),
                Err(Error::InvalidLength { .. })
            ),
            "cut at {}",
            cut
        );
    }
}

proptest! {
    #[test]
    fn round_trip_arbitrary_fields(
        tnf in 0u8..8,
        record_type in proptest::collection::vec(any::<u8>(), 0..=255),
        id in proptest::collection::vec(any::<u8>(), 0..=255),
        payload in proptest::collection::vec(any::<u8>(), 0..1200),
    ) {
        let record = NdefRecord::new(Tnf::from_header(tnf), &record_type, &id, &payload);
        let bytes = record.encode(false, false).unwrap();
        let (decoded, flags, used) = NdefRecord::decode(&bytes).unwrap();
        prop_assert_eq!(used, bytes.len());
        prop_assert!(!flags.message_begin && !flags.message_end);
        prop_assert_eq!(decoded, record);
    }
}
