// libndef/src/driver/mod.rs

use log::error;

use crate::constants::{CLASSIC_BLOCK_SIZE, WRITE_UNIT_SIZE};
use crate::protocol::NdefMessage;
use crate::tag::Tag;
use crate::transport::Transport;
use crate::types::{KeyType, MifareKey, TagType, Uid};
use crate::{Error, Result};

/// A stateless tag-memory driver. The transport is borrowed for the
/// duration of each call; nothing is kept between calls.
pub trait TagDriver {
    /// Tag family this driver handles.
    fn tag_type(&self) -> TagType;

    /// Locate and decode the NDEF message.
    ///
    /// A tag that is present but not NDEF formatted is not an error: the
    /// returned `Tag` reports `is_formatted() == false` and has no message.
    fn read(&self, transport: &mut dyn Transport) -> Result<Tag>;

    /// Frame `message` in an NDEF TLV and write it from the first data
    /// block/page onwards. Aborts on the first failure.
    fn write(&self, transport: &mut dyn Transport, message: &NdefMessage) -> Result<()>;

    /// Prepare a factory tag for NDEF.
    fn format(&self, transport: &mut dyn Transport) -> Result<()>;

    /// Bring the tag back as close to factory state as the family allows.
    fn clean(&self, transport: &mut dyn Transport) -> Result<()>;
}

#[cfg(feature = "classic")]
pub mod classic;
pub mod ultralight;
mod unsupported;

#[cfg(feature = "classic")]
pub use classic::ClassicDriver;
pub use ultralight::UltralightDriver;
pub use unsupported::UnsupportedDriver;

/// Factory to create the driver for a tag type. Unknown tags (and Classic
/// tags when the `classic` feature is disabled) receive a driver that
/// refuses every operation.
pub fn create_driver_for(tag_type: TagType) -> Box<dyn TagDriver> {
    match tag_type {
        #[cfg(feature = "classic")]
        TagType::MifareClassic => Box::new(ClassicDriver::new()),
        TagType::Ultralight => Box::new(UltralightDriver::new()),
        _ => Box::new(UnsupportedDriver::new()),
    }
}

/// Authenticate, reporting any transport failure as `Authentication`.
pub(crate) fn authenticate(
    transport: &mut dyn Transport,
    key_type: KeyType,
    block: u8,
    key: &MifareKey,
    uid: &Uid,
) -> Result<()> {
    transport
        .authenticate(key_type, block, key, uid)
        .map_err(|e| {
            error!("Authentication failed for block {}: {}", block, e);
            Error::Authentication { block }
        })
}

/// Read one 16-byte unit, dropping any CRC bytes the reader appended.
pub(crate) fn read_unit(
    transport: &mut dyn Transport,
    address: u8,
) -> Result<[u8; CLASSIC_BLOCK_SIZE]> {
    let data = transport.read_block(address).map_err(|e| {
        error!("Read failed at {}: {}", address, e);
        Error::TransportRead { address }
    })?;
    if data.len() < CLASSIC_BLOCK_SIZE {
        error!("Short read at {}: {} bytes", address, data.len());
        return Err(Error::TransportRead { address });
    }
    let mut unit = [0u8; CLASSIC_BLOCK_SIZE];
    unit.copy_from_slice(&data[..CLASSIC_BLOCK_SIZE]);
    Ok(unit)
}

/// Write one transport unit. `chunk` shorter than the unit is zero padded.
pub(crate) fn write_unit(transport: &mut dyn Transport, address: u8, chunk: &[u8]) -> Result<()> {
    let mut unit = [0u8; WRITE_UNIT_SIZE];
    let n = chunk.len().min(WRITE_UNIT_SIZE);
    unit[..n].copy_from_slice(&chunk[..n]);
    transport.write_block(address, &unit).map_err(|e| {
        error!("Write failed at {}: {}", address, e);
        Error::TransportWrite { address }
    })
}
