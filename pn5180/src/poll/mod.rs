// pn5180/src/poll/mod.rs

//! Card presence tracking.
//!
//! A [`Poller`] is driven by the caller, one [`Poller::update`] per tick.
//! Each tick activates the field, tries to read a UID and switches the
//! field off again, then reports whether the observed card changed.

use derive_more::Display;
use log::{debug, warn};

use crate::reader::Reader;
use crate::types::Uid;

/// `PollConfig`
pub mod config;

pub use config::PollConfig;

/// Outcome of one poll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PollEvent {
    /// Same card (or still no card) as the previous tick
    #[display(fmt = "no change")]
    NoChange,
    /// A card appeared, left, or was replaced by another one
    #[display(fmt = "updated")]
    Updated,
    /// The activation failed; the last known UID is kept
    #[display(fmt = "error")]
    Error,
}

/// Tracks which card, if any, is in the field across ticks.
#[derive(Debug, Clone, Default)]
pub struct Poller {
    config: PollConfig,
    uid: Option<Uid>,
    errored: bool,
    error_count: u64,
    absent_ticks: u32,
}

impl Poller {
    /// A poller with no remembered card.
    pub fn new(config: PollConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current tunables
    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    /// UID of the card seen on the last successful tick, if any.
    pub fn uid(&self) -> Option<Uid> {
        self.uid
    }

    /// Latched on every failed tick until [`Poller::clear_error`].
    pub fn errored(&self) -> bool {
        self.errored
    }

    /// Reset the error latch. The counter is left alone.
    pub fn clear_error(&mut self) {
        self.errored = false;
    }

    /// Failed ticks since creation or the last reset.
    pub fn error_count(&self) -> u64 {
        self.error_count
    }

    /// Zero the failed-tick counter
    pub fn reset_error_count(&mut self) {
        self.error_count = 0;
    }

    /// Run one poll tick against `reader`.
    pub fn update(&mut self, reader: &mut Reader) -> PollEvent {
        let previous = self.uid;

        let failed = match reader.select_card(self.config.kind) {
            Ok(Some(card)) => {
                self.uid = Some(card.uid());
                self.absent_ticks = 0;
                false
            }
            Ok(None) => {
                self.absent_ticks = self.absent_ticks.saturating_add(1);
                if self.absent_ticks >= self.config.clear_threshold() {
                    self.uid = None;
                }
                false
            }
            Err(e) => {
                warn!("poll tick failed: {}", e);
                self.errored = true;
                self.error_count += 1;
                true
            }
        };

        if let Err(e) = reader.rf_off() {
            warn!("RF field not switched off: {}", e);
        }

        if failed {
            return PollEvent::Error;
        }
        if self.uid != previous {
            debug!(
                "card changed: {} -> {}",
                display_uid(previous),
                display_uid(self.uid)
            );
            PollEvent::Updated
        } else {
            PollEvent::NoChange
        }
    }
}

fn display_uid(uid: Option<Uid>) -> String {
    uid.map_or_else(|| "none".to_string(), |u| u.to_string())
}
