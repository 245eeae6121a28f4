#[path = "../common/mod.rs"]
mod common;

use libndef::protocol::{crc_a, verify_crc_a};
use libndef::test_support::{sample_uid4, sample_uid7};
use libndef::transport::mock::{MockTransport, TransportCall};
use libndef::transport::Transport;
use libndef::types::{KeyType, MifareKey, PiccType};
use libndef::Error;

#[test]
fn classic_read_response_carries_crc() {
    let mut m = MockTransport::classic_1k(sample_uid4());
    m.authenticate(KeyType::A, 0, &MifareKey::FACTORY_DEFAULT, &sample_uid4())
        .unwrap();
    let block0 = m.read_block(0).unwrap();
    assert_eq!(block0.len(), 18);
    assert!(verify_crc_a(&block0));
    assert_eq!(&block0[16..], &crc_a(&block0[..16]));
    assert_eq!(&block0[..4], sample_uid4().as_bytes());
}

#[test]
fn calls_are_recorded_in_order() {
    let mut m = MockTransport::classic_1k(sample_uid4());
    m.authenticate(KeyType::B, 7, &MifareKey::FACTORY_DEFAULT, &sample_uid4())
        .unwrap();
    m.write_block(5, &[0x42; 16]).unwrap();
    m.read_block(5).unwrap();
    m.stop_crypto().unwrap();
    m.halt().unwrap();
    assert_eq!(
        m.calls,
        vec![
            TransportCall::Authenticate {
                key_type: KeyType::B,
                block: 7
            },
            TransportCall::Write(5),
            TransportCall::Read(5),
            TransportCall::StopCrypto,
            TransportCall::Halt,
        ]
    );
    assert_eq!(m.unit(5), &[0x42; 16]);
}

#[test]
fn stop_crypto_drops_authentication() {
    let mut m = MockTransport::classic_1k(sample_uid4());
    m.authenticate(KeyType::A, 4, &MifareKey::FACTORY_DEFAULT, &sample_uid4())
        .unwrap();
    m.stop_crypto().unwrap();
    assert_eq!(m.read_block(4), Err(Error::TransportRead { address: 4 }));
}

#[test]
fn ultralight_rejects_authentication_and_header_writes() {
    let mut m = MockTransport::ultralight(sample_uid7(), 48);
    assert!(m.authenticate(KeyType::A, 4, &MifareKey::NDEF, &sample_uid7()).is_err());
    assert_eq!(
        m.write_block(0, &[0; 16]),
        Err(Error::TransportWrite { address: 0 })
    );
    assert_eq!(
        m.write_block(16, &[0; 16]),
        Err(Error::TransportWrite { address: 16 })
    );
}

#[test]
fn unsupported_card_has_no_memory() {
    let mut m = MockTransport::unsupported(PiccType::Iso18092, sample_uid7());
    assert_eq!(m.picc_type().unwrap(), PiccType::Iso18092);
    assert!(m.read_block(0).is_err());
}

#[test]
fn absent_card_fails_every_access() {
    let mut m = MockTransport::ultralight(sample_uid7(), 48);
    m.card_present = false;
    assert!(!m.is_new_card_present().unwrap());
    assert!(matches!(m.read_block(4), Err(Error::Transport(_))));
}
