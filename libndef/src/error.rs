// libndef/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("authentication failed for block {block}")]
    Authentication { block: u8 },

    #[error("read failed at address {address}")]
    TransportRead { address: u8 },

    #[error("write failed at address {address}")]
    TransportWrite { address: u8 },

    #[error("malformed tlv: unexpected tag {tag:#04x} at offset {offset}")]
    MalformedTlv { tag: u8, offset: usize },

    #[error("no ndef tlv found")]
    NoNdefTlv,

    #[error("message needs {required} bytes but tag capacity is {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid uid length {0}: must be 4, 7 or 10 bytes")]
    InvalidUid(usize),

    #[error("tag is not ndef formatted")]
    NotFormatted,

    #[error("no driver for this tag type")]
    UnsupportedTag,

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("no reader transport configured")]
    NoTransport,
}

pub type Result<T> = std::result::Result<T, Error>;
