//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{ULTRALIGHT_DATA_START_PAGE, ULTRALIGHT_PAGE_SIZE, WRITE_UNIT_SIZE};
use crate::protocol::tlv::frame_padded;
use crate::protocol::NdefMessage;
use crate::transport::mock::MockTransport;
use crate::transport::traits::Transport;
use crate::types::{KeyType, MifareKey, PiccType, Uid};
use crate::Result;

/// 4-byte single size UID (Classic 1K).
#[doc(hidden)]
pub fn sample_uid4() -> Uid {
    Uid::from([0xDE, 0xAD, 0xBE, 0xEF])
}

/// 7-byte double size UID (Ultralight, NTAG).
#[doc(hidden)]
pub fn sample_uid7() -> Uid {
    Uid::from([0x04, 0xA2, 0x2C, 0x6A, 0x3F, 0x5C, 0x80])
}

/// Classic 1K mock already formatted for NDEF, call log cleared.
#[cfg(feature = "classic")]
#[doc(hidden)]
pub fn ndef_formatted_classic() -> Result<MockTransport> {
    let mut mock = MockTransport::classic_1k(sample_uid4());
    crate::driver::ClassicDriver::new().format_ndef(&mut mock)?;
    mock.calls.clear();
    Ok(mock)
}

/// Ultralight mock holding `message` from page 4 onwards.
#[doc(hidden)]
pub fn ultralight_with_message(data_bytes: usize, message: &NdefMessage) -> Result<MockTransport> {
    let mut mock = MockTransport::ultralight(sample_uid7(), data_bytes);
    let framed = frame_padded(&message.encode()?, ULTRALIGHT_PAGE_SIZE)?;
    mock.load(ULTRALIGHT_DATA_START_PAGE, &framed);
    Ok(mock)
}

/// Transport wrapper that delegates into `Rc<RefCell<MockTransport>>` so a
/// test can inspect the mock after an Adapter takes ownership of the box.
#[doc(hidden)]
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedTransport {
    pub fn new(inner: Rc<RefCell<MockTransport>>) -> Self {
        Self { inner }
    }
}

impl Transport for SharedTransport {
    fn authenticate(
        &mut self,
        key_type: KeyType,
        block: u8,
        key: &MifareKey,
        uid: &Uid,
    ) -> Result<()> {
        self.inner.borrow_mut().authenticate(key_type, block, key, uid)
    }
    fn read_block(&mut self, address: u8) -> Result<Vec<u8>> {
        self.inner.borrow_mut().read_block(address)
    }
    fn write_block(&mut self, address: u8, data: &[u8; WRITE_UNIT_SIZE]) -> Result<()> {
        self.inner.borrow_mut().write_block(address, data)
    }
    fn uid(&self) -> Result<Uid> {
        self.inner.borrow().uid()
    }
    fn picc_type(&self) -> Result<PiccType> {
        self.inner.borrow().picc_type()
    }
    fn is_new_card_present(&mut self) -> Result<bool> {
        self.inner.borrow_mut().is_new_card_present()
    }
    fn stop_crypto(&mut self) -> Result<()> {
        self.inner.borrow_mut().stop_crypto()
    }
    fn halt(&mut self) -> Result<()> {
        self.inner.borrow_mut().halt()
    }
    fn reset(&mut self) -> Result<()> {
        self.inner.borrow_mut().reset()
    }
}

/// Wrap `mock` for sharing with an Adapter; returns the boxed transport
/// and the handle the test keeps.
#[doc(hidden)]
pub fn shared(mock: MockTransport) -> (Box<dyn Transport>, Rc<RefCell<MockTransport>>) {
    let inner = Rc::new(RefCell::new(mock));
    (Box::new(SharedTransport::new(inner.clone())), inner)
}
