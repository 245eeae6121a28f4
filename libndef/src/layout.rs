// libndef/src/layout.rs
//! Mifare Classic sector/block addressing.
//!
//! Sectors 0..32 hold 4 blocks each; on 4K tags sectors 32..40 hold 16.
//! The last block of every sector is the trailer (keys and access bits).

use crate::constants::{
    CLASSIC_LONG_SECTOR_BLOCKS, CLASSIC_LONG_SECTOR_START, CLASSIC_SHORT_SECTORS,
    CLASSIC_SHORT_SECTOR_BLOCKS,
};

fn blocks_per_sector(address: u16) -> u16 {
    if address < CLASSIC_LONG_SECTOR_START {
        CLASSIC_SHORT_SECTOR_BLOCKS as u16
    } else {
        CLASSIC_LONG_SECTOR_BLOCKS
    }
}

/// Sector number containing `block`.
pub fn sector_of(block: u8) -> u8 {
    let block = block as u16;
    if block < CLASSIC_LONG_SECTOR_START {
        (block / CLASSIC_SHORT_SECTOR_BLOCKS as u16) as u8
    } else {
        (CLASSIC_SHORT_SECTORS + (block - CLASSIC_LONG_SECTOR_START) / CLASSIC_LONG_SECTOR_BLOCKS)
            as u8
    }
}

/// First block of `sector`.
pub fn first_block_of(sector: u8) -> u8 {
    let sector = sector as u16;
    if sector < CLASSIC_SHORT_SECTORS {
        (sector * CLASSIC_SHORT_SECTOR_BLOCKS as u16) as u8
    } else {
        (CLASSIC_LONG_SECTOR_START + (sector - CLASSIC_SHORT_SECTORS) * CLASSIC_LONG_SECTOR_BLOCKS)
            as u8
    }
}

/// Trailer block of `sector`.
pub fn trailer_of(sector: u8) -> u8 {
    let first = first_block_of(sector) as u16;
    (first + blocks_per_sector(first) - 1) as u8
}

/// True for sector trailer blocks, which never carry user data.
pub fn is_trailer_block(block: u8) -> bool {
    let b = block as u16;
    (b + 1) % blocks_per_sector(b) == 0
}

/// True when `block` starts a new sector and needs a fresh authentication.
pub fn is_first_block(block: u8) -> bool {
    let b = block as u16;
    b % blocks_per_sector(b) == 0
}
