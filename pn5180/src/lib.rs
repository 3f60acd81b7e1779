// pn5180/src/lib.rs

//! pn5180
//!
//! ISO14443-A card activation and Mifare block access for the NXP PN5180
//! NFC front end. The host interface (SPI, BUSY line, reset) sits behind
//! the [`Transport`](transport::Transport) trait; everything above it is
//! plain Rust and runs against [`MockTransport`](transport::MockTransport)
//! in tests.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod error;
pub mod poll;
pub mod prelude;
pub mod protocol;
pub mod reader;
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
