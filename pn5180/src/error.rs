// pn5180/src/error.rs

//! Error type, activation stages and fault classes.

use derive_more::Display;
use thiserror::Error;

use crate::types::{CascadeLevel, TransceiveState};

/// Activation stage a transport fault is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Stage {
    /// Front-end reset
    #[display(fmt = "reset")]
    Reset,
    /// LOAD_RF_CONFIG
    #[display(fmt = "load RF config")]
    LoadRfConfig,
    /// Field on
    #[display(fmt = "RF on")]
    RfOn,
    /// Mifare crypto unit off
    #[display(fmt = "crypto off")]
    CryptoOff,
    /// RX CRC off before short frames
    #[display(fmt = "clear RX CRC")]
    ClearRxCrc,
    /// TX CRC off before short frames
    #[display(fmt = "clear TX CRC")]
    ClearTxCrc,
    /// COMMAND forced to IDLE
    #[display(fmt = "enter idle")]
    EnterIdle,
    /// TRANSCEIVE command armed
    #[display(fmt = "arm transceive")]
    ArmTransceive,
    /// Transceive state query
    #[display(fmt = "wait transmit")]
    WaitTransmit,
    /// IRQ_STATUS cleared
    #[display(fmt = "clear IRQ")]
    ClearIrq,
    /// SEL + NVB 0x20 and its 5-byte answer
    #[display(fmt = "anti-collision ({})", _0)]
    AntiCollision(CascadeLevel),
    /// RX CRC on before select
    #[display(fmt = "enable RX CRC")]
    EnableRxCrc,
    /// TX CRC on before select
    #[display(fmt = "enable TX CRC")]
    EnableTxCrc,
    /// SEL + NVB 0x70
    #[display(fmt = "select ({})", _0)]
    Select(CascadeLevel),
    /// SAK read after select
    #[display(fmt = "read SAK ({})", _0)]
    ReadSak(CascadeLevel),
}

/// Coarse fault classes used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// A register/command primitive failed
    Transport,
    /// The front end or the card did not reach the expected state in time
    Timing,
    /// Wrong byte count or malformed cascade data
    Framing,
    /// Configuration and argument errors
    Other,
}

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// `ReaderBuilder::build` without a transport
    #[error("no transport configured")]
    NoTransport,

    /// A transport primitive failed (SPI, busy line, ...)
    #[error("transport error: {0}")]
    Transport(String),

    /// The card did not answer within the read window
    #[error("no response from card")]
    NoResponse,

    /// A fault attributed to one activation stage.
    #[error("{stage} failed: {source}")]
    Stage {
        /// Where the activation broke
        stage: Stage,
        /// Underlying fault
        #[source]
        source: Box<Error>,
    },

    /// WaitTransmit not reached before the first frame.
    #[error("front end not ready to transmit (state {state})")]
    NotReadyToTransmit {
        /// Last state observed before the deadline
        state: TransceiveState,
    },

    /// WaitTransmit not reached after the ATQA.
    #[error("timed out waiting for WaitTransmit (state {state})")]
    TransmitTimeout {
        /// Last state observed before the deadline
        state: TransceiveState,
    },

    /// Anti-collision answered with a byte count other than 5, usually
    /// two cards in the field.
    #[error("collision at {level}: expected 5 bytes, got {actual}")]
    Collision {
        /// Cascade level of the anti-collision frame
        level: CascadeLevel,
        /// Bytes reported by RX_STATUS
        actual: usize,
    },

    /// Anti-collision check byte does not match (only with `verify_bcc`).
    #[error("BCC mismatch: expected {expected:#04x}, got {actual:#04x}")]
    BccMismatch {
        /// XOR of the four UID_CLn bytes
        expected: u8,
        /// Check byte sent by the card
        actual: u8,
    },

    /// A response or buffer of the wrong size.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required byte count
        expected: usize,
        /// Byte count received
        actual: usize,
    },

    /// UID bytes of an unsupported length
    #[error("invalid uid: {0}")]
    InvalidUid(String),
}

impl Error {
    /// Attribute an error to an activation stage.
    pub fn at(stage: Stage, source: Error) -> Self {
        Self::Stage {
            stage,
            source: Box::new(source),
        }
    }

    /// The stage this error was raised in, if any.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Diagnostic class. A stage-tagged fault inherits the class of its
    /// source, with plain transport failures reported as `Transport`.
    pub fn kind(&self) -> FaultKind {
        match self {
            Self::Transport(_) => FaultKind::Transport,
            Self::Stage { source, .. } => match source.kind() {
                FaultKind::Other => FaultKind::Transport,
                kind => kind,
            },
            Self::NoResponse | Self::NotReadyToTransmit { .. } | Self::TransmitTimeout { .. } => {
                FaultKind::Timing
            }
            Self::Collision { .. } | Self::BccMismatch { .. } | Self::InvalidLength { .. } => {
                FaultKind::Framing
            }
            Self::NoTransport | Self::InvalidUid(_) => FaultKind::Other,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Attach a [`Stage`] to a failing result: `transport.rf_on().at(Stage::RfOn)?`.
pub(crate) trait StageExt<T> {
    fn at(self, stage: Stage) -> Result<T>;
}

impl<T> StageExt<T> for Result<T> {
    fn at(self, stage: Stage) -> Result<T> {
        self.map_err(|e| Error::at(stage, e))
    }
}
