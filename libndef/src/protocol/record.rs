// libndef/src/protocol/record.rs

use derive_more::Display;
use log::{debug, info, warn};

use crate::constants::{
    RECORD_FLAG_CF, RECORD_FLAG_IL, RECORD_FLAG_MB, RECORD_FLAG_ME, RECORD_FLAG_SR,
    RECORD_TNF_MASK,
};
use crate::protocol::parser::{be_u32_at, byte_at, ensure_len, slice_at};
use crate::{Error, Result};

const TEXT_LANGUAGE_MAX: usize = 0x3F;

/// Type Name Format (3 bits of the record header)
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tnf {
    #[default]
    #[display(fmt = "Empty")]
    Empty = 0x00,
    #[display(fmt = "Well Known")]
    WellKnown = 0x01,
    #[display(fmt = "Mime Media")]
    MimeMedia = 0x02,
    #[display(fmt = "Absolute URI")]
    AbsoluteUri = 0x03,
    #[display(fmt = "External")]
    External = 0x04,
    #[display(fmt = "Unknown")]
    Unknown = 0x05,
    #[display(fmt = "Unchanged")]
    Unchanged = 0x06,
    #[display(fmt = "Reserved")]
    Reserved = 0x07,
}

impl Tnf {
    /// Extract the TNF from a record header byte. Every 3-bit value is valid.
    pub fn from_header(header: u8) -> Self {
        match header & RECORD_TNF_MASK {
            0x00 => Self::Empty,
            0x01 => Self::WellKnown,
            0x02 => Self::MimeMedia,
            0x03 => Self::AbsoluteUri,
            0x04 => Self::External,
            0x05 => Self::Unknown,
            0x06 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }
}

/// Flag bits found in a decoded record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordFlags {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunked: bool,
    pub short_record: bool,
    pub id_present: bool,
}

impl RecordFlags {
    pub fn from_header(header: u8) -> Self {
        Self {
            message_begin: header & RECORD_FLAG_MB != 0,
            message_end: header & RECORD_FLAG_ME != 0,
            chunked: header & RECORD_FLAG_CF != 0,
            short_record: header & RECORD_FLAG_SR != 0,
            id_present: header & RECORD_FLAG_IL != 0,
        }
    }
}

/// A single NDEF record. Type, id and payload are owned buffers, so a
/// clone never shares storage with the original.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdefRecord {
    tnf: Tnf,
    record_type: Vec<u8>,
    id: Vec<u8>,
    payload: Vec<u8>,
}

impl NdefRecord {
    pub fn new(tnf: Tnf, record_type: &[u8], id: &[u8], payload: &[u8]) -> Self {
        Self {
            tnf,
            record_type: record_type.to_vec(),
            id: id.to_vec(),
            payload: payload.to_vec(),
        }
    }

    /// TNF=Empty with no type, id or payload.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Well-known text record (`T`), UTF-8 with the given language code.
    ///
    /// The status byte holds the language length in six bits; a longer
    /// code is cut to 63 bytes.
    pub fn text(text: &str, language: &str) -> Self {
        let mut lang = language.as_bytes();
        if lang.len() > TEXT_LANGUAGE_MAX {
            warn!("Language code truncated to {} bytes", TEXT_LANGUAGE_MAX);
            lang = &lang[..TEXT_LANGUAGE_MAX];
        }
        let mut payload = Vec::with_capacity(1 + lang.len() + text.len());
        // status byte: bit 7 = 0 (UTF-8), bits 0..5 = language code length
        payload.push(lang.len() as u8);
        payload.extend_from_slice(lang);
        payload.extend_from_slice(text.as_bytes());
        Self::new(Tnf::WellKnown, b"T", &[], &payload)
    }

    /// Well-known URI record (`U`) without identifier-code abbreviation.
    pub fn uri(uri: &str) -> Self {
        let mut r = Self::new(Tnf::WellKnown, b"U", &[], &[]);
        r.set_payload_with_header(&[0x00], uri.as_bytes());
        r
    }

    /// MIME media record, e.g. `text/plain` or `application/json`.
    pub fn mime(mime_type: &str, payload: &[u8]) -> Self {
        Self::new(Tnf::MimeMedia, mime_type.as_bytes(), &[], payload)
    }

    pub fn tnf(&self) -> Tnf {
        self.tnf
    }

    pub fn set_tnf(&mut self, tnf: Tnf) {
        self.tnf = tnf;
    }

    pub fn record_type(&self) -> &[u8] {
        &self.record_type
    }

    pub fn set_type(&mut self, record_type: &[u8]) {
        self.record_type = record_type.to_vec();
    }

    pub fn id(&self) -> &[u8] {
        &self.id
    }

    pub fn set_id(&mut self, id: &[u8]) {
        self.id = id.to_vec();
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn set_payload(&mut self, payload: &[u8]) {
        self.payload = payload.to_vec();
    }

    /// Replace the payload with `header` followed by `payload`.
    pub fn set_payload_with_header(&mut self, header: &[u8], payload: &[u8]) {
        let mut buf = Vec::with_capacity(header.len() + payload.len());
        buf.extend_from_slice(header);
        buf.extend_from_slice(payload);
        self.payload = buf;
    }

    fn is_short(&self) -> bool {
        self.payload.len() <= 0xFF
    }

    /// Size of this record once encoded:
    /// header + type length + payload length (1 or 4) + id length (0 or 1)
    /// + type + id + payload.
    pub fn encoded_size(&self) -> usize {
        let mut size = 2;
        size += if self.is_short() { 1 } else { 4 };
        if !self.id.is_empty() {
            size += 1;
        }
        size + self.record_type.len() + self.id.len() + self.payload.len()
    }

    /// Header byte: TNF | MB | ME | SR | IL. Chunking is never emitted.
    pub fn header_byte(&self, first: bool, last: bool) -> u8 {
        let mut value = self.tnf as u8;
        if first {
            value |= RECORD_FLAG_MB;
        }
        if last {
            value |= RECORD_FLAG_ME;
        }
        if self.is_short() {
            value |= RECORD_FLAG_SR;
        }
        if !self.id.is_empty() {
            value |= RECORD_FLAG_IL;
        }
        value
    }

    /// Type and id lengths are single bytes; payloads are limited to 16 bits.
    fn check_field_lengths(&self) -> Result<()> {
        for (len, max) in [
            (self.record_type.len(), u8::MAX as usize),
            (self.id.len(), u8::MAX as usize),
            (self.payload.len(), u16::MAX as usize),
        ] {
            if len > max {
                return Err(Error::InvalidLength {
                    expected: max,
                    actual: len,
                });
            }
        }
        Ok(())
    }

    /// Encode into `out`, which must hold at least `encoded_size()` bytes.
    /// Returns the number of bytes written.
    pub fn encode_into(&self, out: &mut [u8], first: bool, last: bool) -> Result<usize> {
        self.check_field_lengths()?;
        let size = self.encoded_size();
        ensure_len(out, size)?;

        let mut pos = 0;
        out[pos] = self.header_byte(first, last);
        out[pos + 1] = self.record_type.len() as u8;
        pos += 2;

        let payload_len = self.payload.len();
        if self.is_short() {
            out[pos] = payload_len as u8;
            pos += 1;
        } else {
            // 4 byte field, but only lengths up to 16 bits are produced
            out[pos] = 0x00;
            out[pos + 1] = 0x00;
            out[pos + 2] = ((payload_len >> 8) & 0xFF) as u8;
            out[pos + 3] = (payload_len & 0xFF) as u8;
            pos += 4;
        }

        if !self.id.is_empty() {
            out[pos] = self.id.len() as u8;
            pos += 1;
        }

        for part in [&self.record_type, &self.id, &self.payload] {
            out[pos..pos + part.len()].copy_from_slice(part);
            pos += part.len();
        }

        debug_assert_eq!(pos, size);
        Ok(pos)
    }

    /// Encode into a freshly allocated buffer of exactly `encoded_size()`.
    pub fn encode(&self, first: bool, last: bool) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.encoded_size()];
        self.encode_into(&mut out, first, last)?;
        Ok(out)
    }

    /// Decode one record from the front of `data`.
    ///
    /// Returns the record, its header flags and the number of bytes consumed.
    pub fn decode(data: &[u8]) -> Result<(Self, RecordFlags, usize)> {
        let header = byte_at(data, 0)?;
        let flags = RecordFlags::from_header(header);
        let type_len = byte_at(data, 1)? as usize;
        let mut pos = 2;

        let payload_len = if flags.short_record {
            let len = byte_at(data, pos)? as usize;
            pos += 1;
            len
        } else {
            let len = be_u32_at(data, pos)?;
            pos += 4;
            if len > u16::MAX as u32 {
                return Err(Error::InvalidLength {
                    expected: u16::MAX as usize,
                    actual: len as usize,
                });
            }
            len as usize
        };

        let id_len = if flags.id_present {
            let len = byte_at(data, pos)? as usize;
            pos += 1;
            len
        } else {
            0
        };

        let record_type = slice_at(data, pos, type_len)?;
        pos += type_len;
        let id = slice_at(data, pos, id_len)?;
        pos += id_len;
        let payload = slice_at(data, pos, payload_len)?;
        pos += payload_len;

        let record = Self::new(Tnf::from_header(header), record_type, id, payload);
        Ok((record, flags, pos))
    }

    /// Log a human readable summary of the record at info level.
    pub fn log_summary(&self) {
        info!("  NDEF Record");
        info!("    TNF {:#x}, {}", self.tnf as u8, self.tnf);
        info!(
            "    Type Length {:#x} {}",
            self.record_type.len(),
            self.record_type.len()
        );
        info!(
            "    Payload Length {:#x} {}",
            self.payload.len(),
            self.payload.len()
        );
        if !self.id.is_empty() {
            info!("    Id Length {:#x}", self.id.len());
        }
        info!(
            "    Type: {}",
            crate::utils::bytes_to_hex_spaced(&self.record_type)
        );
        debug!(
            "    Payload:\n{}",
            crate::utils::hex_dump(&self.payload, 16)
        );
        if !self.id.is_empty() {
            info!("    Id: {}", crate::utils::bytes_to_hex_spaced(&self.id));
        }
        info!("    Record is {} bytes", self.encoded_size());
    }
}
