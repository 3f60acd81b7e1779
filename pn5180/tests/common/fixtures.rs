// fixtures.rs: commonly used card scripts and readers

use std::time::Duration;

use pn5180::reader::{Reader, ReaderConfig};
use pn5180::test_support::{SharedMock, fast_config};
use pn5180::types::BlockData;

pub const SINGLE_UID: [u8; 4] = [0x12, 0x34, 0x56, 0x78];
pub const DOUBLE_UID: [u8; 7] = [0x04, 0x21, 0x33, 0x6a, 0x1b, 0x52, 0x80];

/// Mock plus a reader bound to it with all waits disabled.
pub fn mock_reader() -> (SharedMock, Reader) {
    let shared = SharedMock::new();
    let reader = Reader::with_config(shared.boxed(), fast_config());
    (shared, reader)
}

/// Same as [`mock_reader`] with a custom config.
pub fn mock_reader_with(config: ReaderConfig) -> (SharedMock, Reader) {
    let shared = SharedMock::new();
    let reader = Reader::with_config(shared.boxed(), config);
    (shared, reader)
}

/// Config with real waits, used to check that delays are requested.
pub fn timed_config() -> ReaderConfig {
    fast_config()
        .with_field_settle(Duration::from_millis(10))
        .with_response_wait(Duration::from_millis(10))
        .with_rx_settle(Duration::from_millis(5))
}

pub fn sample_block(fill: u8) -> BlockData {
    let mut bytes = [fill; 16];
    bytes[0] = 0x00;
    bytes[15] = 0xFF;
    BlockData::from_bytes(bytes)
}

/// Card frame from spaced hex, e.g. `frame("12 34 56 78 9a")`.
pub fn frame(spaced_hex: &str) -> Vec<u8> {
    hex::decode(spaced_hex.replace(' ', "")).expect("valid hex fixture")
}
