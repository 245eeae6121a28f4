// libndef/src/driver/classic/config.rs

//! Mifare Classic block images written by the format routines

/// Sector 0, block 1: MAD header (CRC, info) then NDEF AID `03 E1` for
/// every application slot.
pub const MAD_BLOCK_1: [u8; 16] = [
    0x14, 0x01, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1,
];

/// Sector 0, block 2: remaining MAD slots.
pub const MAD_BLOCK_2: [u8; 16] = [
    0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1,
];

/// Sector 0 trailer: MAD key A, access bits `78 77 88`, GPB `C1`, key B FF..
pub const MAD_TRAILER: [u8; 16] = [
    0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0x78, 0x77, 0x88, 0xC1, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Trailer of every NDEF sector: NDEF key A, access bits `7F 07 88`,
/// GPB `40`, key B FF..
pub const NDEF_TRAILER: [u8; 16] = [
    0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7, 0x7F, 0x07, 0x88, 0x40, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// First NDEF block after formatting: an empty NDEF TLV and terminator.
pub const EMPTY_NDEF_BLOCK: [u8; 16] = [
    0x03, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

pub const ZERO_BLOCK: [u8; 16] = [0x00; 16];
