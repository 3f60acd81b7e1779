// pn5180/src/prelude.rs

//! Common imports: `use pn5180::prelude::*;`

pub use crate::card::Card;
pub use crate::poll::{PollConfig, PollEvent, Poller};
pub use crate::protocol::{ActivationResponse, Command};
pub use crate::reader::{Reader, ReaderBuilder, ReaderConfig};
pub use crate::transport::Transport;
pub use crate::{
    ActivationKind, Atqa, BlockData, CardType, Error, FaultKind, Result, RfConfig, Sak, Stage,
    Uid, UidSize, WriteAck,
};

// Re-export small utilities for convenience
pub use crate::utils::{HexSlice, bytes_to_hex, bytes_to_hex_spaced};
