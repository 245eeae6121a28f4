// libndef/src/driver/classic/mod.rs

mod blocks;
pub mod config;

pub use blocks::{DataBlock, DataBlocks};

use log::{debug, error, info, warn};

use crate::constants::{
    CLASSIC_1K_BLOCKS, CLASSIC_1K_SECTORS, CLASSIC_BLOCK_SIZE, CLASSIC_FACTORY_TRAILER,
    CLASSIC_NDEF_START_BLOCK,
};
use crate::driver::{authenticate, read_unit, write_unit, TagDriver};
use crate::layout::{first_block_of, trailer_of};
use crate::protocol::tlv::{decode_message, decode_ndef_tlv, frame_padded, overhead, round_up};
use crate::protocol::NdefMessage;
use crate::tag::Tag;
use crate::transport::Transport;
use crate::types::{KeyType, MifareKey, TagType};
use crate::{Error, Result};

/// Bytes to read for a TLV value of `message_length`: value plus TLV
/// header and terminator, rounded up to whole blocks.
pub fn buffer_size(message_length: usize) -> usize {
    round_up(message_length + overhead(message_length), CLASSIC_BLOCK_SIZE)
}

/// User bytes available for the NDEF TLV on a 1K tag (sectors 1..16,
/// trailers excluded).
pub fn data_capacity() -> usize {
    DataBlocks::new(CLASSIC_NDEF_START_BLOCK, CLASSIC_1K_BLOCKS).count() * CLASSIC_BLOCK_SIZE
}

/// Outcome of a factory reset. Per-block write failures do not stop the
/// reset; they are collected here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatReport {
    pub failed_blocks: Vec<u8>,
}

impl FormatReport {
    pub fn is_clean(&self) -> bool {
        self.failed_blocks.is_empty()
    }
}

/// Mifare Classic 1K driver using the MAD layout from the NFC Forum
/// "Mifare Classic as NFC Type MIFARE Classic Tag" application note.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassicDriver;

impl ClassicDriver {
    pub fn new() -> Self {
        Self
    }

    /// Write the MAD to sector 0 and turn sectors 1..16 into NDEF sectors
    /// holding an empty message. Requires factory keys.
    pub fn format_ndef(&self, transport: &mut dyn Transport) -> Result<()> {
        let uid = transport.uid()?;

        authenticate(transport, KeyType::A, 1, &MifareKey::FACTORY_DEFAULT, &uid)?;
        write_unit(transport, 1, &config::MAD_BLOCK_1)?;
        write_unit(transport, 2, &config::MAD_BLOCK_2)?;
        write_unit(transport, 3, &config::MAD_TRAILER)?;

        for sector in 1..CLASSIC_1K_SECTORS {
            let first = first_block_of(sector);
            authenticate(transport, KeyType::A, first, &MifareKey::FACTORY_DEFAULT, &uid)?;

            for block in first..trailer_of(sector) {
                if block == CLASSIC_NDEF_START_BLOCK {
                    write_unit(transport, block, &config::EMPTY_NDEF_BLOCK)?;
                } else {
                    write_unit(transport, block, &config::ZERO_BLOCK)?;
                }
            }
            write_unit(transport, trailer_of(sector), &config::NDEF_TRAILER)?;
        }
        info!("Formatted Mifare Classic {} for NDEF", uid);
        Ok(())
    }

    /// Zero every writable data block and restore factory trailers,
    /// authenticating each sector with the default key B.
    ///
    /// A sector that refuses key B aborts the reset; write failures are
    /// logged and reported.
    pub fn format_mifare(&self, transport: &mut dyn Transport) -> Result<FormatReport> {
        let uid = transport.uid()?;
        let mut report = FormatReport::default();

        for sector in 0..CLASSIC_1K_SECTORS {
            let trailer = trailer_of(sector);
            authenticate(transport, KeyType::B, trailer, &MifareKey::FACTORY_DEFAULT, &uid)?;

            for block in first_block_of(sector)..trailer {
                // manufacturer block
                if block == 0 {
                    continue;
                }
                if write_unit(transport, block, &config::ZERO_BLOCK).is_err() {
                    warn!("Failed to clear block {}", block);
                    report.failed_blocks.push(block);
                }
            }
            if write_unit(transport, trailer, &CLASSIC_FACTORY_TRAILER).is_err() {
                warn!("Failed to reset trailer {}", trailer);
                report.failed_blocks.push(trailer);
            }
        }
        Ok(report)
    }
}

impl TagDriver for ClassicDriver {
    fn tag_type(&self) -> TagType {
        TagType::MifareClassic
    }

    fn read(&self, transport: &mut dyn Transport) -> Result<Tag> {
        let uid = transport.uid()?;

        // A tag without the NDEF key on sector 1 was never NDEF formatted.
        let start = CLASSIC_NDEF_START_BLOCK;
        if authenticate(transport, KeyType::A, start, &MifareKey::NDEF, &uid).is_err() {
            info!("Tag {} is not NDEF formatted", uid);
            return Ok(Tag::new(uid, TagType::MifareClassic));
        }

        let first = read_unit(transport, start)?;
        let tlv = decode_ndef_tlv(&first)?;
        // leading NULL TLVs push the terminator past `buffer_size`
        let needed = buffer_size(tlv.message_length)
            .max(round_up(tlv.end_index() + 1, CLASSIC_BLOCK_SIZE));
        if needed > data_capacity() {
            return Err(Error::CapacityExceeded {
                required: needed,
                capacity: data_capacity(),
            });
        }
        debug!(
            "NDEF TLV: {} bytes at offset {}, reading {} bytes",
            tlv.message_length, tlv.start_index, needed
        );

        let mut buffer = Vec::with_capacity(needed);
        buffer.extend_from_slice(&first);
        for block in DataBlocks::new(start + 1, CLASSIC_1K_BLOCKS) {
            if buffer.len() >= needed {
                break;
            }
            if block.starts_sector {
                authenticate(transport, KeyType::A, block.address, &MifareKey::NDEF, &uid)?;
            }
            buffer.extend_from_slice(&read_unit(transport, block.address)?);
        }

        let message = decode_message(&buffer, &tlv)?;
        Ok(Tag::with_message(uid, TagType::MifareClassic, message))
    }

    fn write(&self, transport: &mut dyn Transport, message: &NdefMessage) -> Result<()> {
        let encoded = message.encode()?;
        let buffer = frame_padded(&encoded, CLASSIC_BLOCK_SIZE)?;
        if buffer.len() > data_capacity() {
            return Err(Error::CapacityExceeded {
                required: buffer.len(),
                capacity: data_capacity(),
            });
        }

        let uid = transport.uid()?;
        let blocks = DataBlocks::new(CLASSIC_NDEF_START_BLOCK, CLASSIC_1K_BLOCKS);
        for (chunk, block) in buffer.chunks(CLASSIC_BLOCK_SIZE).zip(blocks) {
            if block.starts_sector {
                authenticate(transport, KeyType::A, block.address, &MifareKey::NDEF, &uid)?;
            }
            write_unit(transport, block.address, chunk)?;
        }
        debug!("Wrote {} bytes to Mifare Classic {}", buffer.len(), uid);
        Ok(())
    }

    fn format(&self, transport: &mut dyn Transport) -> Result<()> {
        self.format_ndef(transport)
    }

    /// Best effort: blocks that refused the write are logged at `error`
    /// and left as they were; `format_mifare` returns the list.
    fn clean(&self, transport: &mut dyn Transport) -> Result<()> {
        let report = self.format_mifare(transport)?;
        if !report.is_clean() {
            error!(
                "{} block(s) not cleared: {:?}",
                report.failed_blocks.len(),
                report.failed_blocks
            );
        }
        Ok(())
    }
}
