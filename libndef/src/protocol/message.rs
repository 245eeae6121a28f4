// libndef/src/protocol/message.rs

use log::info;

use crate::protocol::record::NdefRecord;
use crate::{Error, Result};

/// An ordered list of NDEF records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdefMessage {
    records: Vec<NdefRecord>,
}

impl NdefMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<NdefRecord>) -> Self {
        Self { records }
    }

    pub fn add_record(&mut self, record: NdefRecord) {
        self.records.push(record);
    }

    pub fn add_empty_record(&mut self) {
        self.add_record(NdefRecord::empty());
    }

    pub fn add_text_record(&mut self, text: &str, language: &str) {
        self.add_record(NdefRecord::text(text, language));
    }

    pub fn add_uri_record(&mut self, uri: &str) {
        self.add_record(NdefRecord::uri(uri));
    }

    pub fn add_mime_record(&mut self, mime_type: &str, payload: &[u8]) {
        self.add_record(NdefRecord::mime(mime_type, payload));
    }

    pub fn records(&self) -> &[NdefRecord] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&NdefRecord> {
        self.records.get(index)
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<NdefRecord> {
        self.records
    }

    /// Sum of the encoded sizes of all records.
    pub fn encoded_size(&self) -> usize {
        self.records.iter().map(NdefRecord::encoded_size).sum()
    }

    /// Concatenate the records, MB on the first and ME on the last.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.encoded_size()];
        let last = self.records.len().saturating_sub(1);
        let mut pos = 0;
        for (i, record) in self.records.iter().enumerate() {
            pos += record.encode_into(&mut out[pos..], i == 0, i == last)?;
        }
        Ok(out)
    }

    /// Split raw NDEF bytes into records. Stops after the record carrying
    /// ME, or when the input is exhausted. Empty input is an empty message.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut records = Vec::new();
        let mut pos = 0;
        while pos < data.len() {
            let (record, flags, used) = NdefRecord::decode(&data[pos..])?;
            if flags.chunked {
                return Err(Error::UnsupportedOperation(
                    "chunked ndef records".into(),
                ));
            }
            records.push(record);
            pos += used;
            if flags.message_end {
                break;
            }
        }
        Ok(Self { records })
    }

    /// Log every record at info level.
    pub fn log_summary(&self) {
        info!(
            "NDEF Message {} record(s), {} bytes",
            self.records.len(),
            self.encoded_size()
        );
        for record in &self.records {
            record.log_summary();
        }
    }
}

impl From<NdefRecord> for NdefMessage {
    fn from(record: NdefRecord) -> Self {
        Self {
            records: vec![record],
        }
    }
}

impl FromIterator<NdefRecord> for NdefMessage {
    fn from_iter<I: IntoIterator<Item = NdefRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
