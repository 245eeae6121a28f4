#[path = "../common/mod.rs"]
mod common;

use libndef::adapter::{Adapter, AdapterBuilder};
use libndef::transport::Transport;
use libndef::test_support::{sample_uid4, shared};
use libndef::transport::mock::{MockTransport, TransportCall};
use libndef::types::TagType;

#[test]
fn initialize_transitions_and_resets() {
    let mut mock = MockTransport::classic_1k(sample_uid4());
    mock.calls.push(TransportCall::StopCrypto);
    let (boxed, inner) = shared(mock);

    let adapter = Adapter::new_with_transport(boxed);
    assert_eq!(inner.borrow().calls.len(), 1);

    let ready = adapter.initialize().unwrap();
    assert!(inner.borrow().calls.is_empty());
    assert_eq!(ready.guess_tag_type().unwrap(), TagType::MifareClassic);
}

#[test]
fn builder_hands_back_transport() {
    let adapter = AdapterBuilder::new()
        .with_transport(Box::new(MockTransport::classic_1k(sample_uid4())))
        .build()
        .unwrap();
    let transport = adapter.into_transport();
    assert_eq!(transport.uid().unwrap(), sample_uid4());
}
