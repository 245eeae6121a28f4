//! Small helpers used for log output.

pub mod hex;

pub use hex::*;
