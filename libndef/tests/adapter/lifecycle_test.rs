#[path = "../common/mod.rs"]
mod common;

use libndef::prelude::*;
use libndef::test_support::{sample_uid4, sample_uid7, shared};
use libndef::transport::mock::MockTransport;

fn ready(mock: MockTransport) -> (Adapter<Ready>, std::rc::Rc<std::cell::RefCell<MockTransport>>) {
    let (boxed, inner) = shared(mock);
    (Adapter::new_with_transport(boxed).initialize().unwrap(), inner)
}

#[cfg(feature = "classic")]
#[test]
fn classic_full_lifecycle() {
    common::init_logger();
    let (mut adapter, inner) = ready(MockTransport::classic_1k(sample_uid4()));
    assert!(adapter.tag_present().unwrap());

    let tag = adapter.read().unwrap();
    assert_eq!(tag.tag_type(), TagType::MifareClassic);
    assert!(!tag.is_formatted());

    adapter.format().unwrap();
    adapter.write(&common::mixed_message()).unwrap();
    let tag = adapter.read().unwrap();
    tag.log_summary();
    assert_eq!(tag.uid(), &sample_uid4());
    assert_eq!(tag.ndef_message(), Some(&common::mixed_message()));

    adapter.clean().unwrap();
    assert!(!adapter.read().unwrap().is_formatted());
    assert_eq!(inner.borrow().unit(4), &[0u8; 16]);

    adapter.halt_tag().unwrap();
    assert!(!adapter.tag_present().unwrap());
}

#[cfg(feature = "classic")]
#[test]
fn classic_tag_with_minimal_text_record() {
    let mut mock = libndef::test_support::ndef_formatted_classic().unwrap();
    mock.load(4, &common::minimal_text_block());
    let (mut adapter, _) = ready(mock);

    let tag = adapter.read().unwrap();
    let message = tag.ndef_message().unwrap();
    assert_eq!(message.record_count(), 1);
    assert_eq!(message.records()[0].tnf(), Tnf::WellKnown);
    assert_eq!(message.records()[0].payload().len(), 1);
}

#[test]
fn ultralight_full_lifecycle() {
    let mut mock = MockTransport::ultralight(sample_uid7(), 144);
    mock.load(4, &common::empty_tlv_page());
    let (mut adapter, inner) = ready(mock);
    assert!(adapter.tag_present().unwrap());
    assert_eq!(adapter.guess_tag_type().unwrap(), TagType::Ultralight);

    adapter.format().unwrap();
    let message = common::uri_message("https://example.com/ultralight");
    adapter.write(&message).unwrap();
    assert_eq!(adapter.read().unwrap().ndef_message(), Some(&message));

    adapter.erase().unwrap();
    let tag = adapter.read().unwrap();
    assert_eq!(
        tag.ndef_message().unwrap().records(),
        &[NdefRecord::empty()]
    );

    adapter.clean().unwrap();
    assert!(inner.borrow().memory[16..].iter().all(|&b| b == 0));
}

#[test]
fn oversized_ultralight_write_is_rejected() {
    let mut mock = MockTransport::ultralight(sample_uid7(), 48);
    mock.load(4, &common::empty_tlv_page());
    let (mut adapter, inner) = ready(mock);

    let result = adapter.write(&common::payload_message(64));
    assert!(matches!(result, Err(Error::CapacityExceeded { .. })));
    assert!(inner.borrow().write_addresses().is_empty());
}

#[test]
fn unknown_tag_is_refused() {
    let (mut adapter, inner) = ready(MockTransport::unsupported(
        PiccType::MifareDesfire,
        sample_uid7(),
    ));
    assert!(!adapter.tag_present().unwrap());
    inner.borrow_mut().calls.clear();

    let tag = adapter.read().unwrap();
    assert_eq!(tag.tag_type(), TagType::Unknown);
    assert!(!tag.has_ndef_message());
    assert_eq!(adapter.write(&common::text_message("x")), Err(Error::UnsupportedTag));
    assert_eq!(adapter.format(), Err(Error::UnsupportedTag));
    assert_eq!(adapter.clean(), Err(Error::UnsupportedTag));
    assert!(inner.borrow().calls.is_empty());
}
