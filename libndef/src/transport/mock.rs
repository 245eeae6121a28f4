// libndef/src/transport/mock.rs

use log::trace;

use crate::constants::{
    CLASSIC_1K_BLOCKS, CLASSIC_BLOCK_SIZE, CLASSIC_FACTORY_TRAILER, ULTRALIGHT_PAGE_SIZE,
    WRITE_UNIT_SIZE,
};
use crate::layout::{sector_of, trailer_of};
use crate::protocol::checksum::crc_a;
use crate::transport::traits::Transport;
use crate::types::{KeyType, MifareKey, PiccType, Uid};
use crate::{Error, Result};

/// One recorded transport call, in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    Authenticate { key_type: KeyType, block: u8 },
    Read(u8),
    Write(u8),
    StopCrypto,
    Halt,
}

/// In-memory tag for unit tests. Classic tags check keys against the
/// sector trailers and require authentication before block access;
/// Ultralight tags behave like a flat page array with a one-way OTP page.
#[derive(Debug)]
pub struct MockTransport {
    pub picc_type: PiccType,
    pub uid: Uid,
    /// Raw tag memory: 16-byte blocks (Classic) or 4-byte pages (Ultralight)
    pub memory: Vec<u8>,
    pub calls: Vec<TransportCall>,
    pub card_present: bool,
    pub halted: bool,
    pub authenticated_sector: Option<u8>,
    /// Append CRC_A to read responses like a real reader
    pub append_crc: bool,
    /// Testing hooks: fail the first call touching this address
    pub fail_read_at: Option<u8>,
    pub fail_write_at: Option<u8>,
    pub fail_auth_at: Option<u8>,
}

impl MockTransport {
    fn with_memory(picc_type: PiccType, uid: Uid, memory: Vec<u8>) -> Self {
        Self {
            picc_type,
            uid,
            memory,
            calls: Vec::new(),
            card_present: true,
            halted: false,
            authenticated_sector: None,
            append_crc: true,
            fail_read_at: None,
            fail_write_at: None,
            fail_auth_at: None,
        }
    }

    /// Factory fresh Mifare Classic 1K: zeroed data, transport keys everywhere.
    pub fn classic_1k(uid: Uid) -> Self {
        let mut memory = vec![0u8; CLASSIC_1K_BLOCKS as usize * CLASSIC_BLOCK_SIZE];
        // manufacturer block: UID, BCC, SAK, ATQA
        let u = uid.as_bytes();
        memory[..u.len()].copy_from_slice(u);
        memory[u.len()] = u.iter().fold(0, |acc, b| acc ^ b);
        memory[u.len() + 1] = 0x08;
        memory[u.len() + 2] = 0x04;
        for sector in 0..16u8 {
            let t = trailer_of(sector) as usize * CLASSIC_BLOCK_SIZE;
            memory[t..t + CLASSIC_BLOCK_SIZE].copy_from_slice(&CLASSIC_FACTORY_TRAILER);
        }
        Self::with_memory(PiccType::Mifare1K, uid, memory)
    }

    /// Ultralight / NTAG with `data_bytes` of user memory and a capability
    /// container announcing it. User pages start zeroed.
    pub fn ultralight(uid: Uid, data_bytes: usize) -> Self {
        let pages = 4 + data_bytes / ULTRALIGHT_PAGE_SIZE;
        let mut memory = vec![0u8; pages * ULTRALIGHT_PAGE_SIZE];
        let u = uid.as_bytes();
        let n = u.len().min(8);
        memory[..n].copy_from_slice(&u[..n]);
        // CC: magic, version 1.0, size / 8, read/write access
        memory[12..16].copy_from_slice(&[0xE1, 0x10, (data_bytes / 8) as u8, 0x00]);
        Self::with_memory(PiccType::MifareUltralight, uid, memory)
    }

    /// A card of an unsupported family; every memory access fails.
    pub fn unsupported(picc_type: PiccType, uid: Uid) -> Self {
        Self::with_memory(picc_type, uid, Vec::new())
    }

    fn unit_size(&self) -> usize {
        match self.picc_type {
            PiccType::MifareUltralight => ULTRALIGHT_PAGE_SIZE,
            _ => CLASSIC_BLOCK_SIZE,
        }
    }

    fn unit_count(&self) -> usize {
        self.memory.len() / self.unit_size()
    }

    /// Bytes of one block (Classic) or page (Ultralight).
    pub fn unit(&self, address: u8) -> &[u8] {
        let size = self.unit_size();
        let start = address as usize * size;
        &self.memory[start..start + size]
    }

    /// Overwrite memory starting at the given block/page without any
    /// access checks.
    pub fn load(&mut self, address: u8, bytes: &[u8]) {
        let start = address as usize * self.unit_size();
        self.memory[start..start + bytes.len()].copy_from_slice(bytes);
    }

    pub fn auth_blocks(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                TransportCall::Authenticate { block, .. } => Some(*block),
                _ => None,
            })
            .collect()
    }

    pub fn read_addresses(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                TransportCall::Read(a) => Some(*a),
                _ => None,
            })
            .collect()
    }

    pub fn write_addresses(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                TransportCall::Write(a) => Some(*a),
                _ => None,
            })
            .collect()
    }

    fn is_classic(&self) -> bool {
        matches!(self.picc_type, PiccType::Mifare1K | PiccType::Mifare4K)
    }

    fn check_present(&self) -> Result<()> {
        if !self.card_present || self.halted {
            return Err(Error::Transport("no card in field".into()));
        }
        Ok(())
    }

    fn check_sector_auth(&self, address: u8) -> bool {
        !self.is_classic() || self.authenticated_sector == Some(sector_of(address))
    }

    fn with_crc(&self, mut data: Vec<u8>) -> Vec<u8> {
        if self.append_crc {
            let crc = crc_a(&data);
            data.extend_from_slice(&crc);
        }
        data
    }
}

impl Transport for MockTransport {
    fn authenticate(
        &mut self,
        key_type: KeyType,
        block: u8,
        key: &MifareKey,
        _uid: &Uid,
    ) -> Result<()> {
        self.calls.push(TransportCall::Authenticate { key_type, block });
        self.check_present()?;
        self.authenticated_sector = None;
        if self.fail_auth_at.take_if(|a| *a == block).is_some()
            || !self.is_classic()
            || block as usize >= self.unit_count()
        {
            return Err(Error::Authentication { block });
        }
        let sector = sector_of(block);
        let trailer = self.unit(trailer_of(sector));
        let stored = match key_type {
            KeyType::A => &trailer[0..6],
            KeyType::B => &trailer[10..16],
        };
        if stored != key.as_bytes() {
            trace!("mock: {} rejected for sector {}", key_type, sector);
            return Err(Error::Authentication { block });
        }
        self.authenticated_sector = Some(sector);
        Ok(())
    }

    fn read_block(&mut self, address: u8) -> Result<Vec<u8>> {
        self.calls.push(TransportCall::Read(address));
        self.check_present()?;
        if self.fail_read_at.take_if(|a| *a == address).is_some()
            || (address as usize) >= self.unit_count()
            || !self.check_sector_auth(address)
        {
            return Err(Error::TransportRead { address });
        }

        let data = if self.is_classic() {
            let mut block = self.unit(address).to_vec();
            if address == trailer_of(sector_of(address)) {
                // key A is never readable
                block[..6].fill(0);
            }
            block
        } else {
            // four pages, rolling over to page 0 past the end
            let count = self.unit_count();
            (0..4)
                .flat_map(|i| self.unit(((address as usize + i) % count) as u8).to_vec())
                .collect()
        };
        Ok(self.with_crc(data))
    }

    fn write_block(&mut self, address: u8, data: &[u8; WRITE_UNIT_SIZE]) -> Result<()> {
        self.calls.push(TransportCall::Write(address));
        self.check_present()?;
        if self.fail_write_at.take_if(|a| *a == address).is_some()
            || (address as usize) >= self.unit_count()
            || !self.check_sector_auth(address)
        {
            return Err(Error::TransportWrite { address });
        }

        if self.is_classic() {
            if address == 0 {
                // manufacturer block is read-only
                return Err(Error::TransportWrite { address });
            }
            self.load(address, data);
            return Ok(());
        }

        match address {
            0 | 1 => Err(Error::TransportWrite { address }),
            2 => {
                // only the lock bytes are writable, and only 0 -> 1
                let start = 2 * ULTRALIGHT_PAGE_SIZE;
                self.memory[start + 2] |= data[2];
                self.memory[start + 3] |= data[3];
                Ok(())
            }
            3 => {
                // OTP bits are one-way
                let start = 3 * ULTRALIGHT_PAGE_SIZE;
                for i in 0..ULTRALIGHT_PAGE_SIZE {
                    self.memory[start + i] |= data[i];
                }
                Ok(())
            }
            _ => {
                self.load(address, &data[..ULTRALIGHT_PAGE_SIZE]);
                Ok(())
            }
        }
    }

    fn uid(&self) -> Result<Uid> {
        Ok(self.uid)
    }

    fn picc_type(&self) -> Result<PiccType> {
        Ok(self.picc_type)
    }

    fn is_new_card_present(&mut self) -> Result<bool> {
        Ok(self.card_present && !self.halted)
    }

    fn stop_crypto(&mut self) -> Result<()> {
        self.calls.push(TransportCall::StopCrypto);
        self.authenticated_sector = None;
        Ok(())
    }

    fn halt(&mut self) -> Result<()> {
        self.calls.push(TransportCall::Halt);
        self.halted = true;
        self.authenticated_sector = None;
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        // Reset clears the call log and crypto state but keeps the tag
        // memory so tests can pre-seed it before handing it to an Adapter.
        self.calls.clear();
        self.authenticated_sector = None;
        Ok(())
    }
}
