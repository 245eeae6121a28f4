// libndef/src/lib.rs

//! libndef
//!
//! NDEF messages on Mifare Classic and Mifare Ultralight / NTAG tags,
//! independent of the reader hardware behind the `Transport` trait.

pub mod adapter;
pub mod constants;
pub mod driver;
pub mod error;
pub mod layout;
pub mod prelude;
pub mod protocol;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
