// pn5180/src/utils/mod.rs

//! Small helpers shared across the crate.

/// Hex rendering
pub mod hex;

pub use hex::*;
