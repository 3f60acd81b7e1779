// pn5180/src/protocol/mod.rs

//! ISO14443-A frames: command encoding, BCC and the activation result.

/// Block check character
pub mod bcc;
/// Command frames
pub mod commands;
/// Activation result
pub mod response;

pub use bcc::{bcc, check_bcc};
pub use commands::Command;
pub use response::ActivationResponse;
