// pn5180/src/reader/config.rs

//! Reader timing and RF configuration

use std::time::Duration;

use crate::types::RfConfig;

/// Deadline for the front end to reach WaitTransmit (ms)
pub const WAIT_TRANSMIT_TIMEOUT_MS: u64 = 10;

/// Settling time after switching the RF field on (ms)
pub const FIELD_SETTLE_MS: u64 = 10;

/// Wait after REQA/WUPA and after the Mifare write data frame (ms)
pub const RESPONSE_WAIT_MS: u64 = 10;

/// Wait after anti-collision and Mifare read frames before RX_STATUS is
/// queried (ms)
pub const RX_SETTLE_MS: u64 = 5;

/// Tunables of a [`Reader`](crate::reader::Reader).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    /// LOAD_RF_CONFIG profile
    pub rf_config: RfConfig,
    /// Deadline for reaching WaitTransmit
    pub wait_transmit_timeout: Duration,
    /// Pause after the field is switched on
    pub field_settle: Duration,
    /// Pause before reading an ATQA or a write ACK
    pub response_wait: Duration,
    /// Pause before RX_STATUS is queried
    pub rx_settle: Duration,
    /// Check the BCC of anti-collision responses. Off by default: many
    /// front ends already discard frames with a bad check byte.
    pub verify_bcc: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            rf_config: RfConfig::ISO14443A_106,
            wait_transmit_timeout: Duration::from_millis(WAIT_TRANSMIT_TIMEOUT_MS),
            field_settle: Duration::from_millis(FIELD_SETTLE_MS),
            response_wait: Duration::from_millis(RESPONSE_WAIT_MS),
            rx_settle: Duration::from_millis(RX_SETTLE_MS),
            verify_bcc: false,
        }
    }
}

impl ReaderConfig {
    /// Override the RF profile.
    pub fn with_rf_config(mut self, rf_config: RfConfig) -> Self {
        self.rf_config = rf_config;
        self
    }

    /// Set the WaitTransmit deadline. Zero still checks the state once.
    pub fn with_wait_transmit_timeout(mut self, timeout: Duration) -> Self {
        self.wait_transmit_timeout = timeout;
        self
    }

    /// Set the field settle time.
    pub fn with_field_settle(mut self, settle: Duration) -> Self {
        self.field_settle = settle;
        self
    }

    /// Set the response wait.
    pub fn with_response_wait(mut self, wait: Duration) -> Self {
        self.response_wait = wait;
        self
    }

    /// Set the RX settle time.
    pub fn with_rx_settle(mut self, settle: Duration) -> Self {
        self.rx_settle = settle;
        self
    }

    /// Turn anti-collision BCC checking on or off.
    pub fn with_verify_bcc(mut self, verify: bool) -> Self {
        self.verify_bcc = verify;
        self
    }
}
