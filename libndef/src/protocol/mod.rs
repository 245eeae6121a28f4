// libndef/src/protocol/mod.rs

pub mod checksum;
pub mod message;
pub mod parser;
pub mod record;
pub mod tlv;

pub use checksum::{crc_a, verify_crc_a};
pub use message::NdefMessage;
pub use record::{NdefRecord, RecordFlags, Tnf};
pub use tlv::NdefTlv;
