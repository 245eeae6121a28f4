// libndef/src/transport/traits.rs

use crate::constants::WRITE_UNIT_SIZE;
use crate::types::{KeyType, MifareKey, PiccType, Uid};
use crate::Result;

/// Transport trait abstracts the reader (MFRC522, PN532, ...) away from the
/// tag drivers. Every call is a blocking round-trip to the tag.
pub trait Transport {
    /// Authenticate the sector containing `block` with the given key.
    fn authenticate(
        &mut self,
        key_type: KeyType,
        block: u8,
        key: &MifareKey,
        uid: &Uid,
    ) -> Result<()>;

    /// Read 16 bytes starting at `address` (one Classic block, or four
    /// consecutive Ultralight pages). Readers may append the two CRC_A
    /// bytes of the response; callers only use the first 16 bytes.
    fn read_block(&mut self, address: u8) -> Result<Vec<u8>>;

    /// Write one 16-byte unit. Ultralight tags only store the first four
    /// bytes (compatibility write).
    fn write_block(&mut self, address: u8, data: &[u8; WRITE_UNIT_SIZE]) -> Result<()>;

    /// UID of the card currently selected.
    fn uid(&self) -> Result<Uid>;

    /// Chip family of the card currently selected.
    fn picc_type(&self) -> Result<PiccType>;

    /// Run REQA/anticollision and report whether a new card was selected.
    fn is_new_card_present(&mut self) -> Result<bool>;

    /// Leave the authenticated (Crypto1) state. Default implementation is a
    /// no-op for readers that do not track it.
    fn stop_crypto(&mut self) -> Result<()> {
        Ok(())
    }

    /// Put the card into HALT state.
    fn halt(&mut self) -> Result<()>;

    /// Perform a reader-level reset
    fn reset(&mut self) -> Result<()>;
}
