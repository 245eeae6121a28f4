// libndef/src/driver/unsupported.rs

use crate::driver::TagDriver;
use crate::protocol::NdefMessage;
use crate::tag::Tag;
use crate::transport::Transport;
use crate::types::TagType;
use crate::{Error, Result};

/// Driver for tags without NDEF support. Reads report the bare tag; every
/// other operation fails without touching the card.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedDriver;

impl UnsupportedDriver {
    pub fn new() -> Self {
        Self
    }
}

impl TagDriver for UnsupportedDriver {
    fn tag_type(&self) -> TagType {
        TagType::Unknown
    }

    fn read(&self, transport: &mut dyn Transport) -> Result<Tag> {
        Ok(Tag::new(transport.uid()?, TagType::Unknown))
    }

    fn write(&self, _transport: &mut dyn Transport, _message: &NdefMessage) -> Result<()> {
        Err(Error::UnsupportedTag)
    }

    fn format(&self, _transport: &mut dyn Transport) -> Result<()> {
        Err(Error::UnsupportedTag)
    }

    fn clean(&self, _transport: &mut dyn Transport) -> Result<()> {
        Err(Error::UnsupportedTag)
    }
}
