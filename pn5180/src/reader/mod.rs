// pn5180/src/reader/mod.rs

//! The reader handle and the ISO14443-A activation engine.

mod activation;
/// `ReaderBuilder`
pub mod builder;
/// Timing and RF configuration
pub mod config;
/// `Reader`
pub mod handle;

pub use builder::ReaderBuilder;
pub use config::ReaderConfig;
pub use handle::Reader;
