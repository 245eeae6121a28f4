#[path = "../common/mod.rs"]
mod common;

use libndef::constants::TLV_TERMINATOR;
use libndef::driver::ultralight;
use libndef::protocol::tlv::{decode_message, decode_ndef_tlv, frame, frame_padded, overhead};
use libndef::protocol::{NdefMessage, NdefRecord, Tnf};
use proptest::prelude::*;

#[test]
fn length_form_boundary() {
    let short = frame(&[0x55; 254]).unwrap();
    assert_eq!(&short[..2], &[0x03, 0xFE]);
    let tlv = decode_ndef_tlv(&short).unwrap();
    assert_eq!((tlv.start_index, tlv.message_length), (2, 254));

    let long = frame(&[0x55; 255]).unwrap();
    assert_eq!(&long[..4], &[0x03, 0xFF, 0x00, 0xFF]);
    let tlv = decode_ndef_tlv(&long).unwrap();
    assert_eq!((tlv.start_index, tlv.message_length), (4, 255));
}

#[test]
fn minimal_text_block_decodes() {
    let block = common::minimal_text_block();
    let tlv = decode_ndef_tlv(&block).unwrap();
    let message = decode_message(&block, &tlv).unwrap();
    assert_eq!(message.record_count(), 1);
    let record = &message.records()[0];
    assert_eq!(record.tnf(), Tnf::WellKnown);
    assert_eq!(record.record_type(), b"T");
    assert_eq!(record.payload().len(), 1);
}

#[test]
fn empty_message_frames() {
    // no records at all: the initialised-but-empty layout
    let framed = frame(&NdefMessage::new().encode().unwrap()).unwrap();
    assert_eq!(framed, vec![0x03, 0x00, 0xFE]);

    // a single empty record
    let framed = frame(&NdefMessage::from(NdefRecord::empty()).encode().unwrap()).unwrap();
    assert_eq!(framed, vec![0x03, 0x03, 0xD0, 0x00, 0x00, 0xFE]);
}

proptest! {
    #[cfg(feature = "classic")]
    #[test]
    fn classic_buffer_size_is_block_multiple(len in 0usize..2000) {
        let size = libndef::driver::classic::buffer_size(len);
        prop_assert_eq!(size % 16, 0);
        prop_assert!(size >= len + overhead(len));
        prop_assert!(size < len + overhead(len) + 16);
    }

    #[test]
    fn ultralight_buffer_size_is_read_multiple(
        len in 0usize..2000,
        start in prop::sample::select(vec![2usize, 4, 7, 9]),
    ) {
        let size = ultralight::buffer_size(len, start);
        prop_assert_eq!(size % 16, 0);
        prop_assert!(size > len + start);
    }

    #[test]
    fn padded_frame_keeps_terminator(
        len in 0usize..1000,
        granularity in prop::sample::select(vec![4usize, 16]),
    ) {
        let value = vec![0xA5; len];
        let framed = frame_padded(&value, granularity).unwrap();
        prop_assert_eq!(framed.len() % granularity, 0);
        let tlv = decode_ndef_tlv(&framed).unwrap();
        prop_assert_eq!(tlv.message_length, len);
        prop_assert_eq!(framed[tlv.end_index()], TLV_TERMINATOR);
    }
}
