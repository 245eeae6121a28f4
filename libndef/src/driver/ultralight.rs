// libndef/src/driver/ultralight.rs

//! Mifare Ultralight / NTAG2xx (NFC Forum Type 2) driver.
//!
//! User memory starts at page 4. Page 3 is the capability container; its
//! third byte is the data area size divided by 8.

use log::{debug, info};

use crate::constants::{
    ULTRALIGHT_CC_PAGE, ULTRALIGHT_DATA_START_PAGE, ULTRALIGHT_MAX_PAGE, ULTRALIGHT_PAGE_SIZE,
    ULTRALIGHT_READ_SIZE,
};
use crate::driver::{read_unit, write_unit, TagDriver};
use crate::protocol::tlv::{decode_message, frame_padded, round_up, scan_ndef_tlv};
use crate::protocol::NdefMessage;
use crate::tag::Tag;
use crate::transport::Transport;
use crate::types::TagType;
use crate::{Error, Result};

/// Pages addressable with a one-byte page number after the header pages.
const MAX_DATA_BYTES: usize =
    (u8::MAX as usize + 1 - ULTRALIGHT_DATA_START_PAGE as usize) * ULTRALIGHT_PAGE_SIZE;

/// Bytes `read` can reach before stopping at the page ceiling.
const READABLE_BYTES: usize =
    (ULTRALIGHT_MAX_PAGE as usize + 1 - ULTRALIGHT_DATA_START_PAGE as usize) * ULTRALIGHT_PAGE_SIZE;

/// Bytes to stream for a TLV value of `message_length` at `start_index`,
/// in whole reads.
pub fn buffer_size(message_length: usize, start_index: usize) -> usize {
    round_up(message_length + start_index + 1, ULTRALIGHT_READ_SIZE)
}

fn is_blank(window: &[u8]) -> bool {
    window[..ULTRALIGHT_PAGE_SIZE] == [0xFF; ULTRALIGHT_PAGE_SIZE]
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UltralightDriver;

impl UltralightDriver {
    pub fn new() -> Self {
        Self
    }

    /// A tag whose first data page is still `FF FF FF FF` has never been
    /// NDEF initialised.
    pub fn is_unformatted(&self, transport: &mut dyn Transport) -> Result<bool> {
        let data = read_unit(transport, ULTRALIGHT_DATA_START_PAGE)?;
        Ok(is_blank(&data))
    }

    /// User data capacity in bytes, from the capability container.
    pub fn read_capacity(&self, transport: &mut dyn Transport) -> Result<usize> {
        let data = read_unit(transport, ULTRALIGHT_CC_PAGE)?;
        let capacity = data[2] as usize * 8;
        debug!("Ultralight capacity {} bytes", capacity);
        Ok(capacity.min(MAX_DATA_BYTES))
    }
}

impl TagDriver for UltralightDriver {
    fn tag_type(&self) -> TagType {
        TagType::Ultralight
    }

    fn read(&self, transport: &mut dyn Transport) -> Result<Tag> {
        let uid = transport.uid()?;

        let first = read_unit(transport, ULTRALIGHT_DATA_START_PAGE)?;
        if is_blank(&first) {
            info!("Ultralight {} is not NDEF formatted", uid);
            return Ok(Tag::new(uid, TagType::Ultralight));
        }

        let tlv = scan_ndef_tlv(&first)?;
        if tlv.message_length == 0 {
            let message = decode_message(&first, &tlv)?;
            return Ok(Tag::with_message(uid, TagType::Ultralight, message));
        }

        let needed = buffer_size(tlv.message_length, tlv.start_index);
        let mut buffer = Vec::with_capacity(needed);
        buffer.extend_from_slice(&first);

        let step = ULTRALIGHT_READ_SIZE / ULTRALIGHT_PAGE_SIZE;
        let mut page = ULTRALIGHT_DATA_START_PAGE as usize + step;
        while buffer.len() < needed && page < ULTRALIGHT_MAX_PAGE as usize {
            buffer.extend_from_slice(&read_unit(transport, page as u8)?);
            page += step;
        }
        if buffer.len() < tlv.end_index() {
            return Err(Error::CapacityExceeded {
                required: tlv.end_index(),
                capacity: buffer.len(),
            });
        }

        let message = decode_message(&buffer, &tlv)?;
        Ok(Tag::with_message(uid, TagType::Ultralight, message))
    }

    /// Writes are limited to what `read` can fetch back, even when the
    /// capability container advertises more.
    fn write(&self, transport: &mut dyn Transport, message: &NdefMessage) -> Result<()> {
        if self.is_unformatted(transport)? {
            return Err(Error::NotFormatted);
        }

        let capacity = self.read_capacity(transport)?.min(READABLE_BYTES);
        let encoded = message.encode()?;
        let buffer = frame_padded(&encoded, ULTRALIGHT_PAGE_SIZE)?;
        if buffer.len() > capacity {
            return Err(Error::CapacityExceeded {
                required: buffer.len(),
                capacity,
            });
        }

        for (i, page) in buffer.chunks(ULTRALIGHT_PAGE_SIZE).enumerate() {
            let address = ULTRALIGHT_DATA_START_PAGE as usize + i;
            write_unit(transport, address as u8, page)?;
        }
        debug!("Wrote {} pages", buffer.len() / ULTRALIGHT_PAGE_SIZE);
        Ok(())
    }

    fn format(&self, _transport: &mut dyn Transport) -> Result<()> {
        debug!("Ultralight needs no formatting");
        Ok(())
    }

    /// Zero every user page. Lock bits and OTP are left alone.
    fn clean(&self, transport: &mut dyn Transport) -> Result<()> {
        let capacity = self.read_capacity(transport)?;
        let pages = capacity / ULTRALIGHT_PAGE_SIZE;
        let start = ULTRALIGHT_DATA_START_PAGE as usize;
        for page in start..start + pages {
            write_unit(transport, page as u8, &[0; ULTRALIGHT_PAGE_SIZE])?;
        }
        Ok(())
    }
}
