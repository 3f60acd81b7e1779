use std::time::Duration;

use pn5180::error::Error;
use pn5180::reader::{ReaderBuilder, ReaderConfig};
use pn5180::test_support::SharedMock;
use pn5180::types::RfConfig;

#[test]
fn builder_requires_transport() {
    assert!(matches!(
        ReaderBuilder::new().build(),
        Err(Error::NoTransport)
    ));
}

#[test]
fn builder_applies_config() {
    let shared = SharedMock::new();
    let config = ReaderConfig::default()
        .with_rf_config(RfConfig::new(0x01, 0x81))
        .with_rx_settle(Duration::from_millis(2));
    let mut reader = ReaderBuilder::new()
        .with_transport(shared.boxed())
        .with_config(config)
        .build()
        .unwrap();

    assert_eq!(reader.config().rx_settle, Duration::from_millis(2));
    reader.setup_rf().unwrap();
    assert!(shared.borrow().rf_enabled);
    reader.rf_off().unwrap();
    assert!(!shared.borrow().rf_enabled);
}
