// libndef/src/constants.rs
//! Tag geometry and TLV constants shared across the crate

/// Mifare Classic block size in bytes
pub const CLASSIC_BLOCK_SIZE: usize = 16;

/// Number of blocks in a short (4-block) Classic sector
pub const CLASSIC_SHORT_SECTOR_BLOCKS: u8 = 4;

/// Number of blocks in a long (16-block) Classic 4K sector
pub const CLASSIC_LONG_SECTOR_BLOCKS: u16 = 16;

/// Number of short sectors on Mifare Classic 1K/4K
pub const CLASSIC_SHORT_SECTORS: u16 = 32;

/// First block address belonging to the long-sector region (4K only)
pub const CLASSIC_LONG_SECTOR_START: u16 = 128;

/// Number of sectors on a Mifare Classic 1K tag
pub const CLASSIC_1K_SECTORS: u8 = 16;

/// Number of blocks on a Mifare Classic 1K tag
pub const CLASSIC_1K_BLOCKS: u8 = 64;

/// First NDEF data block (sector 1, block 0)
pub const CLASSIC_NDEF_START_BLOCK: u8 = 4;

/// Transport configuration trailer shipped from the factory: key A FF..,
/// access bits `FF 07 80`, GPB `69`, key B FF..
pub const CLASSIC_FACTORY_TRAILER: [u8; 16] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x07, 0x80, 0x69, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Mifare Ultralight page size in bytes
pub const ULTRALIGHT_PAGE_SIZE: usize = 4;

/// Ultralight READ returns four consecutive pages at once
pub const ULTRALIGHT_READ_SIZE: usize = 16;

/// First user data page on Ultralight / Type 2 tags
pub const ULTRALIGHT_DATA_START_PAGE: u8 = 4;

/// Page holding the capability container (CC)
pub const ULTRALIGHT_CC_PAGE: u8 = 3;

/// Highest page the Ultralight driver will stream-read (exclusive)
pub const ULTRALIGHT_MAX_PAGE: u8 = 63;

/// Size of a transport write unit. Ultralight only consumes the first page.
pub const WRITE_UNIT_SIZE: usize = 16;

/// Trailing CRC_A bytes a reader may append to every READ response
pub const TRANSPORT_CRC_LEN: usize = 2;

/// TLV block tags (NFC Forum Type 2 / AN1304)
pub const TLV_NULL: u8 = 0x00;
pub const TLV_LOCK_CONTROL: u8 = 0x01;
pub const TLV_MEMORY_CONTROL: u8 = 0x02;
pub const TLV_NDEF: u8 = 0x03;
pub const TLV_PROPRIETARY: u8 = 0xFD;
pub const TLV_TERMINATOR: u8 = 0xFE;

/// Marker byte introducing the three-byte TLV length form
pub const TLV_LONG_LENGTH_MARKER: u8 = 0xFF;

/// TLV header (tag + length) in short form: `03 LL`
pub const SHORT_TLV_SIZE: usize = 2;

/// TLV header (tag + length) in long form: `03 FF LL LL`
pub const LONG_TLV_SIZE: usize = 4;

/// NDEF record header flag bits
pub const RECORD_FLAG_MB: u8 = 0x80;
pub const RECORD_FLAG_ME: u8 = 0x40;
pub const RECORD_FLAG_CF: u8 = 0x20;
pub const RECORD_FLAG_SR: u8 = 0x10;
pub const RECORD_FLAG_IL: u8 = 0x08;
pub const RECORD_TNF_MASK: u8 = 0x07;
