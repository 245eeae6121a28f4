#[path = "../common/mod.rs"]
mod common;

use libndef::driver::classic::ClassicDriver;
use libndef::driver::TagDriver;
use libndef::layout::{is_trailer_block, sector_of};
use libndef::protocol::Tnf;
use libndef::test_support::ndef_formatted_classic;
use libndef::transport::mock::{MockTransport, TransportCall};
use libndef::Error;
use proptest::prelude::*;
use std::collections::HashMap;

/// Every data access must happen inside the sector authenticated last,
/// and each sector is authenticated at most once.
fn check_sector_discipline(calls: &[TransportCall]) {
    let mut current = None;
    let mut auths: HashMap<u8, usize> = HashMap::new();
    for call in calls {
        match call {
            TransportCall::Authenticate { block, .. } => {
                current = Some(sector_of(*block));
                *auths.entry(sector_of(*block)).or_default() += 1;
            }
            TransportCall::Read(a) | TransportCall::Write(a) => {
                assert!(!is_trailer_block(*a), "trailer {} touched", a);
                assert_eq!(current, Some(sector_of(*a)), "block {} before auth", a);
            }
            _ => {}
        }
    }
    assert!(auths.values().all(|&n| n == 1), "auths {:?}", auths);
}

#[test]
fn minimal_text_block_reads_one_record() {
    common::init_logger();
    let mut mock = ndef_formatted_classic().unwrap();
    mock.load(4, &common::minimal_text_block());

    let tag = ClassicDriver::new().read(&mut mock).unwrap();
    let message = tag.ndef_message().unwrap();
    assert_eq!(message.record_count(), 1);
    assert_eq!(message.records()[0].tnf(), Tnf::WellKnown);
    assert_eq!(message.records()[0].payload().len(), 1);
    assert_eq!(mock.auth_blocks(), vec![4]);
    assert_eq!(mock.read_addresses(), vec![4]);
}

#[test]
fn mixed_message_survives_write_and_read() {
    let mut mock = ndef_formatted_classic().unwrap();
    let driver = ClassicDriver::new();
    driver.write(&mut mock, &common::mixed_message()).unwrap();
    check_sector_discipline(&mock.calls);

    mock.calls.clear();
    let tag = driver.read(&mut mock).unwrap();
    check_sector_discipline(&mock.calls);
    assert_eq!(tag.ndef_message(), Some(&common::mixed_message()));
}

#[test]
fn largest_message_fills_the_tag() {
    let mut mock = ndef_formatted_classic().unwrap();
    let driver = ClassicDriver::new();
    // 720 bytes: 4 TLV header + 6 record header + 24 type + payload + 1 terminator
    let message = common::payload_message(720 - 4 - 6 - 24 - 1);
    driver.write(&mut mock, &message).unwrap();
    assert_eq!(mock.write_addresses().len(), 45);
    assert_eq!(*mock.write_addresses().last().unwrap(), 62);

    let tag = driver.read(&mut mock).unwrap();
    assert_eq!(tag.ndef_message(), Some(&message));

    let too_big = common::payload_message(720 - 4 - 6 - 24);
    assert!(matches!(
        driver.write(&mut mock, &too_big),
        Err(Error::CapacityExceeded { required: 736, capacity: 720 })
    ));
}

#[test]
fn factory_reset_makes_tag_unformatted() {
    let mut mock = ndef_formatted_classic().unwrap();
    let driver = ClassicDriver::new();
    driver.write(&mut mock, &common::text_message("bye")).unwrap();
    driver.clean(&mut mock).unwrap();

    let tag = driver.read(&mut mock).unwrap();
    assert!(!tag.is_formatted());
    assert!(tag.ndef_message().is_none());

    // and it can be formatted again
    driver.format(&mut mock).unwrap();
    assert!(driver.read(&mut mock).unwrap().is_formatted());
}

#[test]
fn failed_authentication_mid_write_aborts() {
    let mut mock = ndef_formatted_classic().unwrap();
    mock.fail_auth_at = Some(8);
    let result = ClassicDriver::new().write(&mut mock, &common::payload_message(100));
    assert_eq!(result, Err(Error::Authentication { block: 8 }));
    assert_eq!(mock.write_addresses(), vec![4, 5, 6]);
}

#[test]
fn unformatted_read_issues_no_data_access() {
    let mut mock = MockTransport::classic_1k(libndef::test_support::sample_uid4());
    let tag = ClassicDriver::new().read(&mut mock).unwrap();
    assert!(!tag.is_formatted());
    assert!(mock.read_addresses().is_empty());
    assert!(mock.write_addresses().is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn write_read_round_trip_respects_sectors(len in 0usize..640) {
        let mut mock = ndef_formatted_classic().unwrap();
        let driver = ClassicDriver::new();
        let message = common::payload_message(len);

        driver.write(&mut mock, &message).unwrap();
        check_sector_discipline(&mock.calls);

        mock.calls.clear();
        let tag = driver.read(&mut mock).unwrap();
        check_sector_discipline(&mock.calls);
        prop_assert_eq!(tag.ndef_message(), Some(&message));
    }
}
