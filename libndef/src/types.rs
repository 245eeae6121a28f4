// libndef/src/types.rs

use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;

/// UID - Newtype Pattern (4, 7 または 10 バイト)
///
/// The bytes are copied out of the transport at detection time; readers
/// typically reuse their own UID buffer for the next card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid {
    bytes: [u8; 10],
    len: u8,
}

impl Uid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.len() {
            4 | 7 | 10 => {
                let mut arr = [0u8; 10];
                arr[..bytes.len()].copy_from_slice(bytes);
                Ok(Self {
                    bytes: arr,
                    len: bytes.len() as u8,
                })
            }
            n => Err(Error::InvalidUid(n)),
        }
    }
}

macro_rules! uid_from_array {
    ($($n:literal),*) => {
        $(
            impl From<[u8; $n]> for Uid {
                fn from(bytes: [u8; $n]) -> Self {
                    let mut arr = [0u8; 10];
                    arr[..$n].copy_from_slice(&bytes);
                    Self { bytes: arr, len: $n }
                }
            }
        )*
    };
}

uid_from_array!(4, 7, 10);

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_spaced(self.as_bytes()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Mifare Classic sector key (6 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MifareKey([u8; 6]);

impl MifareKey {
    /// Transport key shipped on factory fresh tags
    pub const FACTORY_DEFAULT: Self = Self([0xFF; 6]);
    /// Public key A of NDEF formatted sectors (AN1305)
    pub const NDEF: Self = Self([0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7]);
    /// Public key A of the Mifare Application Directory sector
    pub const MAD: Self = Self([0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]);

    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

/// Which of the two sector keys to authenticate with
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    #[display(fmt = "key A")]
    A = 0x60,
    #[display(fmt = "key B")]
    B = 0x61,
}

impl KeyType {
    /// MFRC522 / ISO 14443 authentication command code
    pub fn command_code(&self) -> u8 {
        *self as u8
    }
}

/// Chip family as reported by the reader after anticollision.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PiccType {
    #[display(fmt = "MIFARE Mini")]
    MifareMini,
    #[display(fmt = "MIFARE 1KB")]
    Mifare1K,
    #[display(fmt = "MIFARE 4KB")]
    Mifare4K,
    #[display(fmt = "MIFARE Ultralight or Ultralight C")]
    MifareUltralight,
    #[display(fmt = "MIFARE Plus")]
    MifarePlus,
    #[display(fmt = "MIFARE DESFire")]
    MifareDesfire,
    #[display(fmt = "PICC compliant with ISO/IEC 14443-4")]
    Iso14443_4,
    #[display(fmt = "PICC compliant with ISO/IEC 18092 (NFC)")]
    Iso18092,
    #[display(fmt = "MIFARE TNP3XXX")]
    TnP3xxx,
    #[display(fmt = "SAK indicates UID is not complete")]
    NotComplete,
    #[display(fmt = "Unknown type")]
    Unknown,
}

impl PiccType {
    /// Classify a card from its SAK byte (ISO 14443-3 / NXP AN10833).
    pub fn from_sak(sak: u8) -> Self {
        // bit 8 is RFU
        match sak & 0x7F {
            0x04 => Self::NotComplete,
            0x09 => Self::MifareMini,
            0x08 => Self::Mifare1K,
            0x18 => Self::Mifare4K,
            0x00 => Self::MifareUltralight,
            0x10 | 0x11 => Self::MifarePlus,
            0x01 => Self::TnP3xxx,
            0x20 => Self::Iso14443_4,
            0x40 => Self::Iso18092,
            _ => Self::Unknown,
        }
    }
}

/// NDEF-capable tag family handled by one of the drivers
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagType {
    #[display(fmt = "Mifare Classic")]
    MifareClassic,
    /// NFC Forum Type 2 (Mifare Ultralight, NTAG)
    #[display(fmt = "NFC Forum Type 2")]
    Ultralight,
    #[default]
    #[display(fmt = "Unknown")]
    Unknown,
}

impl TagType {
    /// Map a reader-reported chip type to the driver that can handle it.
    /// Anything outside the two supported families is `Unknown`.
    pub fn guess(picc: PiccType) -> Self {
        match picc {
            PiccType::Mifare1K => Self::MifareClassic,
            PiccType::MifareUltralight => Self::Ultralight,
            _ => Self::Unknown,
        }
    }
}
