// pn5180/src/reader/builder.rs

use crate::reader::config::ReaderConfig;
use crate::reader::handle::Reader;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport>>,
    config: ReaderConfig,
}

impl ReaderBuilder {
    /// Builder with default config and no transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the default config.
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder. Requires a transport; otherwise returns
    /// `NoTransport`.
    pub fn build(self) -> Result<Reader> {
        match self.transport {
            Some(t) => Ok(Reader::with_config(t, self.config)),
            None => Err(Error::NoTransport),
        }
    }
}
