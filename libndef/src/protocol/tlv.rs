// libndef/src/protocol/tlv.rs

//! TLV framing of an NDEF message inside tag memory.
//!
//! Format: `[0x03] [L] [V...] [0xFE]` where `L` is one byte for values
//! shorter than 255 bytes, or `0xFF` followed by a big-endian u16.

use log::{debug, warn};

use crate::constants::{
    LONG_TLV_SIZE, SHORT_TLV_SIZE, TLV_LOCK_CONTROL, TLV_LONG_LENGTH_MARKER, TLV_MEMORY_CONTROL,
    TLV_NDEF, TLV_NULL, TLV_PROPRIETARY, TLV_TERMINATOR,
};
use crate::protocol::message::NdefMessage;
use crate::protocol::parser::{be_u16_at, byte_at, slice_at};
use crate::{Error, Result};

/// Location of the NDEF message inside a buffer read from the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NdefTlv {
    /// Length of the value field (the encoded NDEF message)
    pub message_length: usize,
    /// Offset of the first value byte
    pub start_index: usize,
}

impl NdefTlv {
    /// Offset one past the last value byte.
    pub fn end_index(&self) -> usize {
        self.start_index + self.message_length
    }
}

/// Tag + length bytes needed for a value of `len` bytes.
pub fn header_len(len: usize) -> usize {
    if len < TLV_LONG_LENGTH_MARKER as usize {
        SHORT_TLV_SIZE
    } else {
        LONG_TLV_SIZE
    }
}

/// Header plus terminator.
pub fn overhead(len: usize) -> usize {
    header_len(len) + 1
}

/// Round `len` up to the next multiple of `granularity`.
pub fn round_up(len: usize, granularity: usize) -> usize {
    len.div_ceil(granularity) * granularity
}

/// Skip NULL TLVs and return the offset of the NDEF TLV tag byte.
///
/// Only NULL padding may precede the message; any other tag is reported
/// as malformed.
pub fn find_ndef_start(data: &[u8]) -> Result<usize> {
    for (i, &b) in data.iter().enumerate() {
        match b {
            TLV_NULL => continue,
            TLV_NDEF => return Ok(i),
            other => {
                warn!("Unknown TLV {:#04x} at offset {}", other, i);
                return Err(Error::MalformedTlv {
                    tag: other,
                    offset: i,
                });
            }
        }
    }
    Err(Error::NoNdefTlv)
}

/// Read the length field of the TLV whose tag byte is at `tag_index`.
/// Returns `(length, value_offset)`.
fn length_at(data: &[u8], tag_index: usize) -> Result<(usize, usize)> {
    let first = byte_at(data, tag_index + 1)?;
    if first == TLV_LONG_LENGTH_MARKER {
        let len = be_u16_at(data, tag_index + 2)? as usize;
        Ok((len, tag_index + LONG_TLV_SIZE))
    } else {
        Ok((first as usize, tag_index + SHORT_TLV_SIZE))
    }
}

/// Decode the NDEF TLV at the start of `data`, skipping leading NULL TLVs.
///
/// `{ 0x03, LEN }` or `{ 0x03, 0xFF, LEN_HI, LEN_LO }`
pub fn decode_ndef_tlv(data: &[u8]) -> Result<NdefTlv> {
    let i = find_ndef_start(data)?;
    let (message_length, start_index) = length_at(data, i)?;
    Ok(NdefTlv {
        message_length,
        start_index,
    })
}

/// Walk a TLV chain until the NDEF TLV is found.
///
/// NULL TLVs are single bytes; lock control, memory control and
/// proprietary TLVs are skipped using their own length field. Reaching a
/// terminator (or the end of `data`) before an NDEF TLV means there is no
/// message.
pub fn scan_ndef_tlv(data: &[u8]) -> Result<NdefTlv> {
    let mut i = 0;
    loop {
        let tag = match data.get(i) {
            Some(&t) => t,
            None => return Err(Error::NoNdefTlv),
        };
        match tag {
            TLV_NULL => i += 1,
            TLV_NDEF => {
                let (message_length, start_index) = length_at(data, i)?;
                return Ok(NdefTlv {
                    message_length,
                    start_index,
                });
            }
            TLV_LOCK_CONTROL | TLV_MEMORY_CONTROL | TLV_PROPRIETARY => {
                let (len, value) = length_at(data, i)?;
                debug!("Skipping TLV {:#04x} ({} bytes) at offset {}", tag, len, i);
                i = value + len;
            }
            TLV_TERMINATOR => return Err(Error::NoNdefTlv),
            other => {
                return Err(Error::MalformedTlv {
                    tag: other,
                    offset: i,
                });
            }
        }
    }
}

/// Wrap an encoded message in an NDEF TLV with terminator.
pub fn frame(encoded: &[u8]) -> Result<Vec<u8>> {
    let len = encoded.len();
    if len > u16::MAX as usize {
        return Err(Error::InvalidLength {
            expected: u16::MAX as usize,
            actual: len,
        });
    }
    let mut out = Vec::with_capacity(len + overhead(len));
    out.push(TLV_NDEF);
    if header_len(len) == SHORT_TLV_SIZE {
        out.push(len as u8);
    } else {
        out.push(TLV_LONG_LENGTH_MARKER);
        out.extend_from_slice(&(len as u16).to_be_bytes());
    }
    out.extend_from_slice(encoded);
    out.push(TLV_TERMINATOR);
    Ok(out)
}

/// Frame and zero-pad to a multiple of `granularity`.
pub fn frame_padded(encoded: &[u8], granularity: usize) -> Result<Vec<u8>> {
    let mut out = frame(encoded)?;
    out.resize(round_up(out.len(), granularity), 0x00);
    Ok(out)
}

/// Decode the message value located by `tlv` inside `buffer`.
///
/// A zero-length value is an initialised but empty tag (`03 00 FE`) and
/// yields a message holding a single empty record.
pub fn decode_message(buffer: &[u8], tlv: &NdefTlv) -> Result<NdefMessage> {
    if tlv.message_length == 0 {
        let mut message = NdefMessage::new();
        message.add_empty_record();
        return Ok(message);
    }
    let value = slice_at(buffer, tlv.start_index, tlv.message_length)?;
    NdefMessage::decode(value)
}
