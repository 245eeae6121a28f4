// libndef/src/driver/classic/blocks.rs

use crate::layout::{is_first_block, is_trailer_block};

/// A user data block and whether it opens a new sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataBlock {
    pub address: u8,
    pub starts_sector: bool,
}

/// Iterator over the data blocks in `start..end`, skipping sector
/// trailers. A block with `starts_sector` set needs a fresh
/// authentication before it is touched.
#[derive(Debug, Clone)]
pub struct DataBlocks {
    next: u16,
    end: u16,
}

impl DataBlocks {
    pub fn new(start: u8, end: u8) -> Self {
        Self {
            next: start as u16,
            end: end as u16,
        }
    }
}

impl Iterator for DataBlocks {
    type Item = DataBlock;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.end {
            let address = self.next as u8;
            self.next += 1;
            if is_trailer_block(address) {
                continue;
            }
            return Some(DataBlock {
                address,
                starts_sector: is_first_block(address),
            });
        }
        None
    }
}
