// libndef/src/adapter/handle.rs

use std::marker::PhantomData;

use log::debug;

use crate::driver::{create_driver_for, TagDriver};
use crate::protocol::NdefMessage;
use crate::tag::Tag;
use crate::transport::Transport;
use crate::types::{PiccType, TagType};
use crate::Result;

/// Type-state markers
pub struct Uninitialized;
pub struct Ready;

/// Reader front end. Detects the card in the field and dispatches every
/// NDEF operation to the driver for its family.
pub struct Adapter<State = Uninitialized> {
    transport: Box<dyn Transport>,
    _state: PhantomData<State>,
}

impl Adapter<Uninitialized> {
    /// Create an Adapter from an existing Transport instance.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            _state: PhantomData,
        }
    }

    /// Reset the reader. Tag operations are only available afterwards.
    pub fn initialize(self) -> Result<Adapter<Ready>> {
        let mut this = self;
        this.transport.reset()?;
        Ok(Adapter {
            transport: this.transport,
            _state: PhantomData,
        })
    }
}

impl Adapter<Ready> {
    /// Poll for a new card. Only Mifare Classic 1K and Ultralight cards
    /// count as present; anything else in the field is ignored.
    pub fn tag_present(&mut self) -> Result<bool> {
        // a card left authenticated by a previous operation would not answer REQA
        self.transport.stop_crypto()?;
        if !self.transport.is_new_card_present()? {
            return Ok(false);
        }
        let picc = self.transport.picc_type()?;
        Ok(matches!(
            picc,
            PiccType::Mifare1K | PiccType::MifareUltralight
        ))
    }

    /// Family of the card currently selected.
    pub fn guess_tag_type(&self) -> Result<TagType> {
        Ok(TagType::guess(self.transport.picc_type()?))
    }

    fn driver(&self) -> Result<Box<dyn TagDriver>> {
        let tag_type = self.guess_tag_type()?;
        debug!("Using {} driver", tag_type);
        Ok(create_driver_for(tag_type))
    }

    pub fn read(&mut self) -> Result<Tag> {
        let driver = self.driver()?;
        driver.read(&mut *self.transport)
    }

    pub fn write(&mut self, message: &NdefMessage) -> Result<()> {
        let driver = self.driver()?;
        driver.write(&mut *self.transport, message)
    }

    /// Replace the stored message with a single empty record.
    pub fn erase(&mut self) -> Result<()> {
        let mut message = NdefMessage::new();
        message.add_empty_record();
        self.write(&message)
    }

    /// Format the card for NDEF. A no-op for Ultralight.
    pub fn format(&mut self) -> Result<()> {
        let driver = self.driver()?;
        driver.format(&mut *self.transport)
    }

    /// Reset Classic cards to factory layout, zero Ultralight user pages.
    pub fn clean(&mut self) -> Result<()> {
        let driver = self.driver()?;
        driver.clean(&mut *self.transport)
    }

    /// Halt the card and leave the authenticated state.
    pub fn halt_tag(&mut self) -> Result<()> {
        self.transport.halt()?;
        self.transport.stop_crypto()
    }

    pub fn transport(&self) -> &dyn Transport {
        &*self.transport
    }

    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }
}
