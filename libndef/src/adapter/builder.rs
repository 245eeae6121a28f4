// libndef/src/adapter/builder.rs

use crate::adapter::handle::{Adapter, Ready, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct an Adapter with optional configuration.
#[derive(Default)]
pub struct AdapterBuilder {
    transport: Option<Box<dyn Transport>>,
}

impl AdapterBuilder {
    pub fn new() -> Self {
        Self { transport: None }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Consume the builder and return an uninitialized Adapter.
    /// Requires a transport to be provided; otherwise returns NoTransport.
    pub fn build_uninitialized(self) -> Result<Adapter<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Adapter::new_with_transport(t)),
            None => Err(Error::NoTransport),
        }
    }

    /// Build and initialize in one step.
    pub fn build(self) -> Result<Adapter<Ready>> {
        self.build_uninitialized()?.initialize()
    }
}
