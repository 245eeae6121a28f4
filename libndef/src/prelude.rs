// libndef/src/prelude.rs

pub use crate::adapter::{Adapter, AdapterBuilder, Ready, Uninitialized};
pub use crate::driver::{create_driver_for, TagDriver};
pub use crate::protocol::{NdefMessage, NdefRecord, Tnf};
pub use crate::tag::Tag;
pub use crate::transport::Transport;
pub use crate::{Error, KeyType, MifareKey, PiccType, Result, TagType, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, hex_dump};
