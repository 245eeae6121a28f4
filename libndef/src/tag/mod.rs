// libndef/src/tag/mod.rs

use log::info;

use crate::protocol::NdefMessage;
use crate::types::{TagType, Uid};

/// Snapshot of a tag as returned by a read: identity, whether it carries
/// an NDEF layout, and the decoded message when there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tag {
    uid: Uid,
    tag_type: TagType,
    formatted: bool,
    message: Option<NdefMessage>,
}

impl Tag {
    /// A tag that could not be read as NDEF (unformatted or unsupported).
    pub fn new(uid: Uid, tag_type: TagType) -> Self {
        Self {
            uid,
            tag_type,
            formatted: false,
            message: None,
        }
    }

    /// An NDEF formatted tag carrying `message`.
    pub fn with_message(uid: Uid, tag_type: TagType, message: NdefMessage) -> Self {
        Self {
            uid,
            tag_type,
            formatted: true,
            message: Some(message),
        }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    pub fn is_formatted(&self) -> bool {
        self.formatted
    }

    pub fn has_ndef_message(&self) -> bool {
        self.message.is_some()
    }

    pub fn ndef_message(&self) -> Option<&NdefMessage> {
        self.message.as_ref()
    }

    pub fn into_ndef_message(self) -> Option<NdefMessage> {
        self.message
    }

    pub fn log_summary(&self) {
        info!("NFC Tag - {}", self.tag_type);
        info!("UID {}", self.uid);
        match &self.message {
            Some(message) => message.log_summary(),
            None => info!("No NDEF Message"),
        }
    }
}
