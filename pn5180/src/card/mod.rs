// pn5180/src/card/mod.rs

//! Activated cards: UID validation and Mifare block access.

use crate::reader::Reader;
use crate::types::{Atqa, BlockData, CardType, Sak, Uid, WriteAck};
use crate::Result;

/// Free-standing block operations behind the [`Card`] methods
pub mod operations;
mod validate;

pub use validate::{is_plausible_uid, validate_uid};

/// An activated (selected) ISO14443-A card.
///
/// Block operations assume the card is still selected: nothing here
/// re-activates it. [`Card::halt`] consumes the card, since a halted card
/// only answers WUPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    uid: Uid,
    atqa: Atqa,
    sak: Sak,
}

impl Card {
    /// Wrap the values of a completed activation.
    pub fn new(uid: Uid, atqa: Atqa, sak: Sak) -> Self {
        Self { uid, atqa, sak }
    }

    /// Validated UID
    pub fn uid(&self) -> Uid {
        self.uid
    }
    /// ATQA from the request phase
    pub fn atqa(&self) -> Atqa {
        self.atqa
    }
    /// SAK of the last cascade level
    pub fn sak(&self) -> Sak {
        self.sak
    }

    /// Card family decoded from the SAK.
    pub fn card_type(&self) -> CardType {
        self.sak.card_type()
    }

    /// Mifare READ of one 16-byte block.
    pub fn read_block(&self, reader: &mut Reader, block: u8) -> Result<BlockData> {
        operations::read_block(reader, block)
    }

    /// Two-phase Mifare WRITE. The final ACK/NAK byte is returned as is.
    pub fn write_block(&self, reader: &mut Reader, block: u8, data: &BlockData) -> Result<WriteAck> {
        operations::write_block(reader, block, data)
    }

    /// Send HLTA. Failures are logged, not returned.
    pub fn halt(self, reader: &mut Reader) {
        operations::halt(reader)
    }
}
