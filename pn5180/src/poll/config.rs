// pn5180/src/poll/config.rs

use crate::types::ActivationKind;

/// Absent ticks before a remembered card is forgotten
pub const ABSENT_TICKS_BEFORE_CLEAR: u32 = 1;

/// Tunables of a [`Poller`](super::Poller).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollConfig {
    /// Consecutive "no card" ticks needed before the current UID is
    /// cleared. 0 behaves like 1.
    pub absent_ticks_before_clear: u32,
    /// Request used to wake cards on every tick
    pub kind: ActivationKind,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            absent_ticks_before_clear: ABSENT_TICKS_BEFORE_CLEAR,
            kind: ActivationKind::Reqa,
        }
    }
}

impl PollConfig {
    /// Set the absent-tick debounce.
    pub fn with_absent_ticks_before_clear(mut self, ticks: u32) -> Self {
        self.absent_ticks_before_clear = ticks;
        self
    }

    /// REQA or WUPA
    pub fn with_kind(mut self, kind: ActivationKind) -> Self {
        self.kind = kind;
        self
    }

    pub(crate) fn clear_threshold(&self) -> u32 {
        self.absent_ticks_before_clear.max(1)
    }
}
