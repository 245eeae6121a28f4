// libndef/src/adapter/mod.rs

pub mod builder;
pub mod handle;

pub use builder::AdapterBuilder;
pub use handle::{Adapter, Ready, Uninitialized};
