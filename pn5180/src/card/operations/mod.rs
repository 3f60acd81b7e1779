// pn5180/src/card/operations/mod.rs

//! Mifare block I/O on an already selected card.

/// HLTA
pub mod halt;
/// Mifare READ
pub mod read;
/// Mifare WRITE
pub mod write;

pub use halt::halt;
pub use read::read_block;
pub use write::write_block;
